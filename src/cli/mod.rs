#[cfg(feature = "pdf")]
pub mod analyze;
pub mod extract;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "extracto",
    about = "Extract, summarize, and analyze bank statement spreadsheets."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract the transaction tables and write the cleaned and summary files.
    Extract {
        /// Path to the statement spreadsheet (xlsx)
        file: String,
        /// Output path for the cleaned transactions table (default: <file>_clean.csv)
        #[arg(long = "clean-out")]
        clean_out: Option<String>,
        /// Output path for the grouped summary table (default: <file>_summary.csv)
        #[arg(long = "summary-out")]
        summary_out: Option<String>,
    },
    /// Extract, then request spending advice and render it to a PDF report.
    #[cfg(feature = "pdf")]
    Analyze {
        /// Path to the statement spreadsheet (xlsx)
        file: String,
        /// Output path for the cleaned transactions table (default: <file>_clean.csv)
        #[arg(long = "clean-out")]
        clean_out: Option<String>,
        /// Output path for the grouped summary table (default: <file>_summary.csv)
        #[arg(long = "summary-out")]
        summary_out: Option<String>,
        /// Output path for the PDF report
        #[arg(long = "report-out", default_value = "financial_analysis_report.pdf")]
        report_out: String,
    },
}
