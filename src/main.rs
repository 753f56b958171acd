mod advisor;
mod aggregator;
mod amount;
mod cli;
mod error;
mod export;
mod fmt;
mod grid;
mod models;
mod normalizer;
#[cfg(feature = "pdf")]
mod pdf;
mod segmenter;
mod settings;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            file,
            clean_out,
            summary_out,
        } => cli::extract::run(&file, clean_out.as_deref(), summary_out.as_deref()),
        #[cfg(feature = "pdf")]
        Commands::Analyze {
            file,
            clean_out,
            summary_out,
            report_out,
        } => cli::analyze::run(
            &file,
            clean_out.as_deref(),
            summary_out.as_deref(),
            &report_out,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
