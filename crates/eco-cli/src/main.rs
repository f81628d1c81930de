//! Eco CLI - estimate the footprint of product listings
//!
//! Subcommands expose each inference step on its own:
//! - `validate-weight` checks and corrects a scraped weight
//! - `resolve` determines materials through the tier cascade
//! - `estimate` computes CO2 and the eco grade
//! - `check` runs the plausibility rules
//! - `analyze` runs everything for one product or a JSON file of products

use clap::{Parser, Subcommand};
use eco_engine::{BandClassifier, EcoPipeline, EngineConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod output;

use commands::{analyze, check, estimate, resolve, weight};
use error::CliResult;

/// Eco CLI application
#[derive(Parser)]
#[command(name = "eco")]
#[command(about = "Eco impact inference - weights, materials and CO2 for product listings", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(long, env = "ECO_CONFIG", default_value = "eco.toml")]
    config: PathBuf,

    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table")]
    output: output::OutputFormat,

    /// Attach the rule-based classifier prediction to analyses
    #[arg(long)]
    classifier: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Check a scraped weight against product-type bounds
    #[command(name = "validate-weight")]
    ValidateWeight(weight::WeightArgs),

    /// Determine what a product is made of
    Resolve(resolve::ResolveArgs),

    /// Estimate CO2 for a weight and material
    Estimate(estimate::EstimateArgs),

    /// Flag physically implausible title/weight/material combinations
    Check(check::CheckArgs),

    /// Run the full analysis
    Analyze(analyze::AnalyzeArgs),

    /// Show the effective configuration
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = EngineConfig::load(&cli.config)?;
    debug!(path = %cli.config.display(), "Configuration resolved");

    if let Commands::Config = cli.command {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let mut builder = EcoPipeline::builder().with_config(config.clone());
    if cli.classifier {
        builder = builder.with_classifier(BandClassifier::new(config.score_bands.clone()));
    }
    let pipeline = builder.build()?;

    match cli.command {
        Commands::ValidateWeight(args) => weight::execute(args, &pipeline, cli.output),
        Commands::Resolve(args) => resolve::execute(args, &pipeline, cli.output),
        Commands::Estimate(args) => estimate::execute(args, &pipeline, cli.output),
        Commands::Check(args) => check::execute(args, &pipeline, cli.output),
        Commands::Analyze(args) => analyze::execute(args, &pipeline, cli.output),
        Commands::Config => Ok(()),
    }
}
