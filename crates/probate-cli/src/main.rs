//! # probate CLI entry point
//!
//! Parses command-line arguments, resolves configuration, and dispatches
//! to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use probate_cli::config::{CliConfig, OutputFormat};
use probate_cli::list::run_list;
use probate_cli::lookup::{run_instructions, run_requirements, run_strategies, JurisdictionArgs};
use probate_cli::template::{run_template, TemplateArgs};
use probate_cli::validate::{run_validate, ValidateArgs};
use probate_cli::Context;

/// Will-execution compliance for US jurisdictions.
///
/// Looks up per-state witnessing rules, validates draft wills against them,
/// and generates fillable will templates. Output is informational and is
/// not legal advice.
#[derive(Parser, Debug)]
#[command(name = "probate", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true, env = "PROBATE_CONFIG")]
    config: Option<PathBuf>,

    /// Registry data file to use instead of the built-in registry.
    #[arg(long, global = true)]
    registry: Option<PathBuf>,

    /// Legal updates file to merge over the registry.
    #[arg(long, global = true)]
    updates: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List covered jurisdictions and the registry snapshot digest.
    List,

    /// Show a jurisdiction's will-execution requirements.
    Requirements(JurisdictionArgs),

    /// Validate a will document against a jurisdiction's rules.
    Validate(ValidateArgs),

    /// Generate a fillable will template.
    Template(TemplateArgs),

    /// Show probate-avoidance strategies for a jurisdiction.
    Strategies(JurisdictionArgs),

    /// Show witness execution instructions for a jurisdiction.
    Instructions(JurisdictionArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // -v flags win; otherwise honour RUST_LOG, defaulting to warn.
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let config = CliConfig::load(cli.config.as_deref())
        .context("loading configuration")?
        .with_overrides(cli.registry, cli.updates, cli.format);
    tracing::debug!(?config, "configuration resolved");

    let ctx = Context::load(&config)?;

    match &cli.command {
        Commands::List => run_list(&ctx),
        Commands::Requirements(args) => run_requirements(args, &ctx),
        Commands::Validate(args) => run_validate(args, &ctx),
        Commands::Template(args) => run_template(args, &ctx),
        Commands::Strategies(args) => run_strategies(args, &ctx),
        Commands::Instructions(args) => run_instructions(args, &ctx),
    }
}
