//! CLI command handlers.
//!
//! Testable command handlers invoked by main.rs. Each handler implements the
//! behavior of one subcommand and returns the process exit code.

mod check;
mod render;
mod validate;

pub use check::{describe_release, run_check};
pub use render::run_render;
pub use validate::run_validate;

pub use crate::config::{CheckConfig, RenderConfig};
