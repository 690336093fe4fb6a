//! Runway scenario CLI
//!
//! Command-line entry point for the scenario engine.
//!
//! # Commands
//!
//! - `scenario run --input <file>` - Run a request in its engine mode
//! - `scenario elasticity --input <file>` - Rank levers by elasticity
//! - `scenario tornado --input <file>` - Tornado bars for the top levers
//! - `scenario shock --input <file> --intensity 0,50,100` - Shock sweep
//! - `scenario check` - Print the resolved settings
//!
//! Results go to stdout as JSON; logs go to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use scenario_service::{build_settings, CliArgs, Engine};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// Runway scenario simulation engine
#[derive(Parser, Debug)]
#[command(name = "scenario")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "SCENARIO_LOG_LEVEL")]
    log_level: Option<String>,

    /// Version tag echoed in response metadata
    #[arg(long, global = true)]
    model_version: Option<String>,

    /// Default Monte Carlo iterations
    #[arg(long, global = true)]
    iterations: Option<usize>,

    /// Batch size from which trials run in parallel
    #[arg(long, global = true)]
    parallel_threshold: Option<usize>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a request in its engine mode
    Run {
        /// Request JSON file, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        input: String,
    },

    /// Rank levers by elasticity
    Elasticity {
        #[command(flatten)]
        analysis: commands::AnalysisArgs,
    },

    /// Tornado bars for the most influential levers
    Tornado {
        #[command(flatten)]
        analysis: commands::AnalysisArgs,
    },

    /// Propagate macro shocks of increasing intensity
    Shock {
        /// Request JSON file, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        input: String,

        /// Shock intensities in percent
        #[arg(long, value_delimiter = ',', default_values_t = vec![0.0, 50.0, 100.0])]
        intensity: Vec<f64>,

        /// Trials per batch
        #[arg(long)]
        runs: Option<usize>,
    },

    /// Validate and print the resolved settings
    Check,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            model_version: cli.model_version.clone(),
            iterations: cli.iterations,
            parallel_threshold: cli.parallel_threshold,
        }
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = build_settings(&CliArgs::from(&cli))?;

    init_tracing(settings.log_level.as_filter_str(), cli.log_json);
    tracing::debug!(
        version = scenario_service::VERSION,
        model_version = %settings.model_version,
        default_iterations = settings.default_iterations,
        parallel_threshold = settings.parallel_threshold,
        "settings loaded"
    );

    let engine = Engine::new(settings);
    match cli.command {
        Commands::Run { input } => commands::run::run(&engine, &input),
        Commands::Elasticity { analysis } => commands::elasticity::run(&engine, &analysis),
        Commands::Tornado { analysis } => commands::tornado::run(&engine, &analysis),
        Commands::Shock {
            input,
            intensity,
            runs,
        } => commands::shock::run(&engine, &input, &intensity, runs),
        Commands::Check => commands::check::run(&engine),
    }
}
