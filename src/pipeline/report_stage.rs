//! Report output stage.

use crate::config::AppConfig;
use crate::error::ReleaseSupportError;
use crate::model::SupportTable;
use crate::reports::create_reporter_with_options;
use anyhow::{Context, Result};

use super::{auto_detect_format, should_use_color, write_output, OutputTarget};

/// Render `table` in the configured format and write it to the configured
/// destination.
pub fn output_report(
    config: &AppConfig,
    table: &SupportTable,
    product: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let output_target = OutputTarget::from_option(config.output.file.clone());
    let effective_output = auto_detect_format(config.output.format, &output_target);
    tracing::debug!("Rendering {} report", effective_output);

    let report_config = config.report_config(product);
    let reporter = create_reporter_with_options(
        effective_output,
        should_use_color(config.output.no_color) && output_target.is_terminal(),
    );
    let report = reporter
        .generate(table, &report_config)
        .map_err(ReleaseSupportError::from)
        .with_context(|| format!("Failed to render {effective_output} report"))?;

    write_output(&report, &output_target, quiet)
}
