use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::{CleanTable, SummaryRow};

/// Writes the cleaned transactions table: normalized headers, then every
/// surviving data row with the amount column already parsed.
pub fn write_clean_table(table: &CleanTable, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(path)?;
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        let record: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;
    info!("cleaned table written to {}", path.display());
    Ok(())
}

/// Writes the recurrence-ranked summary table in its final order.
pub fn write_summary(rows: &[SummaryRow], path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["descripción", "total", "recurrencia"])?;
    for row in rows {
        writer.write_record([
            row.description.clone(),
            row.total.to_string(),
            row.recurrence.to_string(),
        ])?;
    }
    writer.flush()?;
    info!("summary table written to {}", path.display());
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    fn sample_table() -> CleanTable {
        CleanTable {
            headers: vec!["fecha".into(), "descripción".into(), "valor".into()],
            rows: vec![
                vec![
                    Cell::Text("2025/01/15".into()),
                    Cell::Text("PAGO ARRIENDO".into()),
                    Cell::Number(-1500000.0),
                ],
                vec![
                    Cell::Text("2025/01/16".into()),
                    Cell::Text("AJUSTE".into()),
                    Cell::Empty,
                ],
            ],
        }
    }

    #[test]
    fn test_write_clean_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clean.csv");
        write_clean_table(&sample_table(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), "fecha,descripción,valor");
        assert_eq!(lines.next().unwrap(), "2025/01/15,PAGO ARRIENDO,-1500000");
        assert_eq!(lines.next().unwrap(), "2025/01/16,AJUSTE,");
    }

    #[test]
    fn test_write_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");
        let rows = vec![
            SummaryRow {
                description: "NOMINA".into(),
                total: 5000000.0,
                recurrence: 3,
            },
            SummaryRow {
                description: "PAGO ARRIENDO".into(),
                total: -4500000.0,
                recurrence: 3,
            },
        ];
        write_summary(&rows, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), "descripción,total,recurrencia");
        assert_eq!(lines.next().unwrap(), "NOMINA,5000000,3");
        assert_eq!(lines.next().unwrap(), "PAGO ARRIENDO,-4500000,3");
    }

    #[test]
    fn test_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("clean.csv");
        write_clean_table(&sample_table(), &path).unwrap();
        assert!(path.exists());
    }
}
