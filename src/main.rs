//! release-support: end-of-life dates and support status for published releases.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use release_support::{
    cli,
    config::{
        self, AppConfig, CheckConfig, ConfigOverrides, ConfigPreset, RenderConfig, Validatable,
    },
    lifecycle::EolPolicy,
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "release-support")]
#[command(version, about = "End-of-life dates and support status for published releases", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success / release supported
    1  Release reached end of life / catalog has problems
    3  Error occurred

EXAMPLES:
    # HTML table for the documentation site
    release-support render -o html -O supported-versions.html

    # What the table looked like on a given day
    release-support render -o table --as-of 2025-04-01

    # Fail a CI job when the deployed version is out of support
    release-support check v4.5

    # Strictly validate a catalog file
    release-support validate --catalog releases.yaml")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "RELEASE_SUPPORT_CONFIG")]
    config: Option<PathBuf>,

    /// Start from a named preset (default, site, ci-cd) instead of a config file
    #[arg(long, global = true, value_parser = parse_preset)]
    preset: Option<ConfigPreset>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments shared by commands that read a catalog
#[derive(Parser)]
struct CatalogArgs {
    /// Release catalog (YAML or JSON); the built-in catalog when omitted
    #[arg(long, env = "RELEASE_SUPPORT_CATALOG")]
    catalog: Option<PathBuf>,

    /// Evaluate support status at midnight UTC of this day (YYYY-MM-DD)
    #[arg(long, value_parser = parse_day)]
    as_of: Option<NaiveDate>,

    /// How derived end-of-life dates are computed
    #[arg(long, value_enum)]
    policy: Option<EolPolicy>,

    /// Support window in months for releases without an explicit EOL date
    #[arg(long)]
    support_months: Option<u32>,
}

/// Arguments for the `render` subcommand
#[derive(Parser)]
struct RenderArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    /// Output format (auto: table on a terminal, html otherwise)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Emit a complete HTML document instead of the site fragment
    #[arg(long)]
    standalone: bool,

    /// Report title
    #[arg(long)]
    title: Option<String>,

    /// Fail on unparseable dates instead of rendering "Invalid Date"
    #[arg(long)]
    strict: bool,
}

/// Arguments for the `check` subcommand
#[derive(Parser)]
struct CheckArgs {
    /// Version to check (v4.6, 4.6 and 4.6.2 all find v4.6)
    version: String,

    #[command(flatten)]
    catalog: CatalogArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the support table
    Render(RenderArgs),

    /// Report whether one release is still supported
    Check(CheckArgs),

    /// Strictly validate a release catalog
    Validate {
        /// Release catalog (YAML or JSON); the built-in catalog when omitted
        #[arg(long, env = "RELEASE_SUPPORT_CATALOG")]
        catalog: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .release-support.yaml in the current directory
    Init,
}

fn parse_day(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got '{value}': {e}"))
}

fn parse_preset(value: &str) -> Result<ConfigPreset, String> {
    ConfigPreset::from_name(value).ok_or_else(|| {
        let names: Vec<&str> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
        format!("unknown preset '{value}' (expected one of: {})", names.join(", "))
    })
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Load the file config (or preset) and layer CLI values over it.
fn effective_config(cli: &Cli, mut overrides: ConfigOverrides) -> Result<AppConfig> {
    let mut app = match cli.preset {
        Some(preset) => AppConfig::from_preset(preset),
        None => config::load_or_default(cli.config.as_deref()).0,
    };
    if cli.no_color {
        overrides.no_color = Some(true);
    }
    app.merge(&overrides);

    let errors = app.validate();
    if !errors.is_empty() {
        let listed: Vec<String> = errors.iter().map(|e| format!("  - {e}")).collect();
        anyhow::bail!("Invalid configuration:\n{}", listed.join("\n"));
    }
    Ok(app)
}

fn catalog_overrides(args: &CatalogArgs) -> ConfigOverrides {
    ConfigOverrides {
        catalog_path: args.catalog.clone(),
        policy: args.policy,
        support_months: args.support_months,
        ..ConfigOverrides::default()
    }
}

fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::Render(args) => {
            let overrides = ConfigOverrides {
                strict_dates: args.strict.then_some(true),
                format: args.output,
                output_file: args.output_file.clone(),
                standalone: args.standalone.then_some(true),
                title: args.title.clone(),
                ..catalog_overrides(&args.catalog)
            };

            let app = effective_config(&cli, overrides)?;
            cli::run_render(RenderConfig {
                app,
                as_of: args.catalog.as_of,
                quiet: cli.quiet,
            })
        }

        Commands::Check(args) => {
            let app = effective_config(&cli, catalog_overrides(&args.catalog))?;
            cli::run_check(CheckConfig {
                app,
                version: args.version.clone(),
                as_of: args.catalog.as_of,
            })
        }

        Commands::Validate { catalog } => {
            let overrides = ConfigOverrides {
                catalog_path: catalog.clone(),
                ..ConfigOverrides::default()
            };
            let app = effective_config(&cli, overrides)?;
            cli::run_validate(&app.catalog, cli.quiet)
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "release-support", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    dirs::config_dir().map(|p| p.join("release-support").display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order, git root after the first):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".release-support.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, config::generate_full_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}
