//! Data model for release catalogs and support tables.
//!
//! [`ReleaseRecord`]s are the static input. A render pass turns them into
//! [`ResolvedRelease`] rows collected in a [`SupportTable`].

mod date;
mod release;
mod table;

pub use date::{CalendarDate, INVALID_DATE_LABEL};
pub use release::{EolSource, ReleaseRecord, ResolvedRelease, SupportStatus};
pub use table::SupportTable;
