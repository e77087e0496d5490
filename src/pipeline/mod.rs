//! Pipeline orchestration shared by the CLI commands.
//!
//! load catalog → resolve against a clock → render report → write output.

mod load;
mod output;
mod report_stage;

pub use load::{clock_for, load_catalog, resolve_table};
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use report_stage::output_report;

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success: release supported, catalog valid, report written
    pub const SUCCESS: i32 = 0;
    /// The checked release has reached end of life
    pub const END_OF_LIFE: i32 = 1;
    /// Validation found problems in the catalog
    pub const VALIDATION_FAILED: i32 = 1;
    /// An error occurred (unreadable catalog, unknown version, bad config)
    pub const ERROR: i32 = 3;
}
