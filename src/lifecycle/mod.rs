//! Release lifecycle: end-of-life dates and support status.
//!
//! - [`compute_end_of_life`] and [`is_supported`] are the pure building blocks.
//! - [`SupportWindow`] / [`EolPolicy`] control how EOL dates are derived.
//! - [`VersionSupportCalculator`] maps a catalog to a [`SupportTable`]
//!   using an injectable [`Clock`].
//!
//! [`SupportTable`]: crate::model::SupportTable

mod calculator;
mod clock;
mod support;

pub use calculator::VersionSupportCalculator;
pub use clock::{Clock, FixedClock, SystemClock};
pub use support::{
    compute_end_of_life, days_until_eol, is_supported, EolPolicy, SupportWindow,
    APPROX_MONTH_MILLIS, DEFAULT_SUPPORT_MONTHS,
};
