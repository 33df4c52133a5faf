//! # aigov CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use aigov_cli::readiness::{run_readiness, ReadinessArgs};
use aigov_cli::template::{run_template, TemplateArgs};
use aigov_cli::tiers::{run_tiers, TiersArgs};

/// aigov — EU AI Act export-readiness toolchain.
///
/// Evaluates intake records against tiered export field requirements,
/// inspects tier tables, and generates record skeletons.
#[derive(Parser, Debug)]
#[command(name = "aigov", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate an intake record file and print a per-tier readiness report.
    Readiness(ReadinessArgs),

    /// Print the tier table in effect (own and cumulative field counts).
    Tiers(TiersArgs),

    /// Emit a JSON record skeleton for a tier, all fields set to null.
    Template(TemplateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Readiness(args) => run_readiness(&args),
        Commands::Tiers(args) => run_tiers(&args),
        Commands::Template(args) => run_template(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
