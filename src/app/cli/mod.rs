//! CLI Adapter.

mod plan;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, PipelineOptions};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "argprof")]
#[command(version)]
#[command(
    about = "Run the metagenomics ARG profiling notebooks in order",
    long_about = "Runs the profiling notebooks in a fixed order:\n\
                  01_qc_trimming, 02_taxonomy, 03_ARG_annotation, 04_visualization.\n\
                  Output directories are created first. The first failing notebook\n\
                  aborts the pipeline and its exit code becomes argprof's exit code."
)]
struct Cli {
    /// Pipeline root directory (defaults to the current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    directory: Option<PathBuf>,
    /// Config file (defaults to argprof.toml in the pipeline root, if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create output directories and execute every notebook (default)
    #[clap(visible_alias = "r")]
    Run,
    /// Show the stages and commands without executing anything
    #[clap(visible_alias = "p")]
    Plan {
        /// Output format
        #[arg(long, value_enum, default_value_t = plan::PlanFormat::Text)]
        format: plan::PlanFormat,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();

    let cli = Cli::parse();
    let options = PipelineOptions { root: cli.directory, config: cli.config };

    let result: Result<(), AppError> = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => api::run(&options).map(|_| ()),
        Commands::Plan { format } => plan::run_plan(&options, format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

/// Diagnostics go to stderr so they never interleave with progress lines on stdout.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
