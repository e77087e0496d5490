//! Check command handler.
//!
//! Looks up one release and reports whether it is still supported.

use crate::catalog::ReleaseCatalog;
use crate::config::CheckConfig;
use crate::error::OptionContext;
use crate::model::ResolvedRelease;
use crate::pipeline::{exit_codes, load_catalog, resolve_table};
use anyhow::{anyhow, Result};

/// Run the check command, returning the desired exit code.
///
/// Exit code 0 when the release is supported, 1 when it has reached end of
/// life. Unknown versions are errors.
#[allow(clippy::needless_pass_by_value)]
pub fn run_check(config: CheckConfig) -> Result<i32> {
    let catalog = load_catalog(&config.app.catalog)?;
    let known: Vec<&str> = catalog.iter().map(|r| r.version.as_str()).collect();
    let record = catalog.find_release(&config.version).context_none(format!(
        "Unknown version '{}'. Known versions: {}",
        config.version,
        known.join(", ")
    ))?;

    let single = ReleaseCatalog::new(catalog.product.clone(), vec![record.clone()]);
    let table = resolve_table(&single, &config.app.lifecycle, config.as_of);
    let row = table
        .rows
        .first()
        .ok_or_else(|| anyhow!("No row resolved for {}", record.version))?;

    println!(
        "{}",
        describe_release(row, config.app.lifecycle.approaching_days)
    );

    Ok(if row.is_supported() {
        exit_codes::SUCCESS
    } else {
        exit_codes::END_OF_LIFE
    })
}

/// One-line human description of a resolved release.
#[must_use]
pub fn describe_release(row: &ResolvedRelease, approaching_days: i64) -> String {
    let icon = row.status.icon();
    if !row.eol_date.is_valid() {
        return format!(
            "{icon} {} has no usable end of life date ({})",
            row.version, row.eol_date
        );
    }

    match row.days_until_eol {
        Some(days) if row.is_supported() => {
            let note = if row.is_approaching_eol(approaching_days) {
                ", ending soon"
            } else {
                ""
            };
            format!(
                "{icon} {} is supported until {} ({} {} left{note})",
                row.version,
                row.eol_date,
                days,
                if days == 1 { "day" } else { "days" }
            )
        }
        _ => format!(
            "{icon} {} reached end of life on {}",
            row.version, row.eol_date
        ),
    }
}
