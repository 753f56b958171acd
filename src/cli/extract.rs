use std::path::{Path, PathBuf};

use colored::Colorize;
use comfy_table::Table;
use tracing::warn;

use crate::aggregator::summarize;
use crate::error::Result;
use crate::export::{write_clean_table, write_summary};
use crate::fmt::money;
use crate::grid::load_grid;
use crate::models::{CleanTable, SummaryRow};
use crate::normalizer::normalize;
use crate::segmenter::{find_segments, merge_segments};

pub struct ExtractOutput {
    pub clean: CleanTable,
    pub summary: Vec<SummaryRow>,
}

/// Runs the extraction pipeline (load, segment, merge, normalize,
/// aggregate). Returns `None` when the statement contains no transaction
/// tables.
pub fn build_tables(file: &Path) -> Result<Option<ExtractOutput>> {
    let grid = load_grid(file)?;
    let segments = find_segments(&grid);
    if segments.is_empty() {
        warn!("no transaction tables found in {}", file.display());
        return Ok(None);
    }
    let combined = merge_segments(&grid, &segments);
    let clean = normalize(combined)?;
    let summary = summarize(&clean)?;
    Ok(Some(ExtractOutput { clean, summary }))
}

pub fn write_outputs(
    file: &Path,
    output: &ExtractOutput,
    clean_out: Option<&str>,
    summary_out: Option<&str>,
) -> Result<()> {
    let clean_path = clean_out
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output(file, "clean"));
    let summary_path = summary_out
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output(file, "summary"));
    write_clean_table(&output.clean, &clean_path)?;
    println!("Wrote {}", clean_path.display());
    write_summary(&output.summary, &summary_path)?;
    println!("Wrote {}", summary_path.display());
    Ok(())
}

pub fn run(file: &str, clean_out: Option<&str>, summary_out: Option<&str>) -> Result<()> {
    let file = PathBuf::from(file);
    let Some(output) = build_tables(&file)? else {
        println!("No transaction tables found. Nothing written.");
        return Ok(());
    };
    write_outputs(&file, &output, clean_out, summary_out)?;
    print_summary(&output.summary);
    Ok(())
}

fn default_output(file: &Path, suffix: &str) -> PathBuf {
    let stem = file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("statement");
    file.with_file_name(format!("{stem}_{suffix}.csv"))
}

fn print_summary(summary: &[SummaryRow]) {
    let mut table = Table::new();
    table.set_header(vec!["Description", "Total", "Recurrence"]);
    for row in summary {
        table.add_row(vec![
            row.description.clone(),
            money(row.total),
            row.recurrence.to_string(),
        ]);
    }
    println!("\n{}", "Summary by description".bold());
    println!("{table}");
}
