//! sbom-diff: compare two stored SBOM snapshots
//!
//! Reports added, removed and updated components plus newly introduced
//! vulnerabilities between a base and a target snapshot.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use sbom_diff::{
    cli,
    config::{AppConfig, DiffConfig, DiffTarget},
    diff::MatchKey,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sbom-diff")]
#[command(version)]
#[command(about = "Compare two SBOM snapshots of a project", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Component changes detected (with --fail-on-change)
    2  New vulnerabilities introduced (with --fail-on-vuln)
    3  Error occurred

EXAMPLES:
    # Diff two snapshots from a store file
    sbom-diff diff --store store.json <BASE_ID> <TARGET_ID>

    # CI/CD gate on new vulnerabilities
    sbom-diff diff --store store.json <BASE_ID> <TARGET_ID> -o json --fail-on-vuln")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Id of the base (older) snapshot
    base_id: String,

    /// Id of the target (newer) snapshot
    target_id: String,

    /// JSON snapshot store
    #[arg(long, env = "SBOM_DIFF_STORE")]
    store: PathBuf,

    /// Only accept snapshots of this project
    #[arg(long)]
    project: Option<String>,

    /// Output format (auto: summary on a terminal, json otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Component identity key
    #[arg(long, default_value = "name")]
    match_key: MatchKey,

    /// Only report new vulnerabilities at or above this severity
    #[arg(long)]
    severity: Option<String>,

    /// Exit with code 2 if new vulnerabilities are introduced
    #[arg(long)]
    fail_on_vuln: bool,

    /// Exit with code 1 if any component changes are detected
    #[arg(long)]
    fail_on_change: bool,

    /// Emit compact JSON
    #[arg(long)]
    compact: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two snapshots
    Diff(DiffArgs),

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate an example .sbom-diff.yaml in the current directory
    InitConfig {
        /// Write the fully commented example
        #[arg(long)]
        full: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON on stdout stays machine-readable
    let log_level = if cli.verbose { "debug" } else { "info" };
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

    match cli.command {
        Commands::Diff(args) => {
            let overrides = AppConfig::builder()
                .match_key(args.match_key)
                .output_format(args.output)
                .output_file(args.output_file)
                .no_color(cli.no_color)
                .compact(args.compact)
                .min_severity(args.severity)
                .fail_on_vuln(args.fail_on_vuln)
                .fail_on_change(args.fail_on_change)
                .quiet(cli.quiet)
                .build();

            let (app, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
            if let Some(path) = loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }

            let config = DiffConfig {
                request: DiffTarget {
                    store: args.store,
                    base_id: args.base_id,
                    target_id: args.target_id,
                    project: args.project,
                },
                app,
            };

            let exit_code = cli::run_diff(config)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = sbom_diff::config::generate_json_schema()
                .context("failed to serialize config schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::InitConfig { full } => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".sbom-diff.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            let content = if full {
                sbom_diff::config::generate_full_example_config()
            } else {
                sbom_diff::config::generate_example_config()
            };
            std::fs::write(&target, content)
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "sbom-diff", &mut io::stdout());
            Ok(())
        }
    }
}
