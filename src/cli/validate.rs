//! Validate command handler.

use crate::catalog::ReleaseCatalog;
use crate::config::CatalogConfig;
use crate::pipeline::exit_codes;
use anyhow::{Context, Result};

/// Strictly validate a catalog, printing every problem found.
///
/// Returns exit code 1 when there are problems.
pub fn run_validate(config: &CatalogConfig, quiet: bool) -> Result<i32> {
    let catalog = ReleaseCatalog::load_or_builtin(config.path.as_deref()).with_context(|| {
        match &config.path {
            Some(path) => format!("Failed to load catalog {}", path.display()),
            None => "Failed to load built-in catalog".to_string(),
        }
    })?;
    let source = config
        .path
        .as_ref()
        .map_or_else(|| "built-in catalog".to_string(), |p| p.display().to_string());

    let problems = catalog.validate(true);
    if problems.is_empty() {
        if !quiet {
            println!("{source}: {} releases, no problems found", catalog.len());
        }
        return Ok(exit_codes::SUCCESS);
    }

    println!("{source}: {} problem(s) found", problems.len());
    for problem in &problems {
        println!("  - {problem}");
    }
    Ok(exit_codes::VALIDATION_FAILED)
}
