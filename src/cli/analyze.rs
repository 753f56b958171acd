use std::path::PathBuf;

use tracing::info;

use crate::advisor::request_advice;
use crate::cli::extract::{build_tables, write_outputs};
use crate::error::Result;
use crate::pdf::render_report;
use crate::settings::Settings;

pub fn run(
    file: &str,
    clean_out: Option<&str>,
    summary_out: Option<&str>,
    report_out: &str,
) -> Result<()> {
    // Fail on a missing credential before any work happens.
    let settings = Settings::from_env()?;

    let file = PathBuf::from(file);
    let Some(output) = build_tables(&file)? else {
        println!("No transaction tables found. Nothing written.");
        return Ok(());
    };
    write_outputs(&file, &output, clean_out, summary_out)?;

    let advice = request_advice(&settings, &output.summary)?;
    println!("{advice}\n");

    let bytes = render_report(&advice)?;
    let path = PathBuf::from(report_out);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, &bytes)?;
    info!("report saved to {}", path.display());
    println!("Wrote {}", path.display());
    Ok(())
}
