//! VQA Runtime Estimation Command-Line Interface
//!
//! Prints the estimated wall-clock runtime of a variational quantum
//! algorithm. Without a subcommand the built-in sample dataset is estimated.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{estimate, sample, version};

/// Estimate the wall-clock runtime of a variational quantum algorithm
#[derive(Parser)]
#[command(name = "vqa-estimate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the runtime of the sample dataset or an input file
    Estimate {
        /// Runtime inputs (YAML or JSON); the built-in sample if omitted
        #[arg(short, long, env = "VQA_INPUT")]
        input: Option<String>,

        /// Print the per-stage and per-term breakdown
        #[arg(short, long)]
        breakdown: bool,

        /// Write a JSON report to this file
        #[arg(short, long)]
        export: Option<String>,
    },

    /// Write a synthetic dataset usable as an input template
    Sample {
        /// Number of circuit stages
        #[arg(long, default_value = "2")]
        stages: usize,

        /// Gates per stage
        #[arg(long, default_value = "3")]
        gates: usize,

        /// Output format (yaml, json)
        #[arg(short, long, default_value = "yaml")]
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        None => estimate::execute(None, false, None),

        Some(Commands::Estimate {
            input,
            breakdown,
            export,
        }) => estimate::execute(input.as_deref(), breakdown, export.as_deref()),

        Some(Commands::Sample {
            stages,
            gates,
            format,
            output,
        }) => sample::execute(stages, gates, &format, output.as_deref()),

        Some(Commands::Version) => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
