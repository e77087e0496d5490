//! Render command handler.

use crate::config::RenderConfig;
use crate::pipeline::{exit_codes, load_catalog, output_report, resolve_table};
use anyhow::Result;

/// Run the render command, returning the desired exit code.
#[allow(clippy::needless_pass_by_value)]
pub fn run_render(config: RenderConfig) -> Result<i32> {
    let catalog = load_catalog(&config.app.catalog)?;
    if !config.quiet {
        tracing::info!(
            "Rendering {} releases{}",
            catalog.len(),
            catalog
                .product
                .as_deref()
                .map(|p| format!(" of {p}"))
                .unwrap_or_default()
        );
    }

    let table = resolve_table(&catalog, &config.app.lifecycle, config.as_of);
    output_report(&config.app, &table, catalog.product.as_deref(), config.quiet)?;

    Ok(exit_codes::SUCCESS)
}
