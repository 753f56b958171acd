use std::collections::HashMap;

use crate::error::{ExtractoError, Result};
use crate::grid::Cell;
use crate::models::{CleanTable, SummaryRow, TransactionRow};

const DESCRIPTION_COLUMN: &str = "descripción";
const AMOUNT_COLUMN: &str = "valor";

/// Groups transactions by description, summing amounts and counting
/// occurrences, sorted descending by signed total. Missing either expected
/// column is fatal.
pub fn summarize(table: &CleanTable) -> Result<Vec<SummaryRow>> {
    let rows = transaction_rows(table)?;
    Ok(group_rows(&rows))
}

/// Resolves the description and amount columns by trimmed header name and
/// projects each data row into a `TransactionRow`.
pub fn transaction_rows(table: &CleanTable) -> Result<Vec<TransactionRow>> {
    let desc_col = find_column(&table.headers, DESCRIPTION_COLUMN)?;
    let amount_col = find_column(&table.headers, AMOUNT_COLUMN)?;
    Ok(table
        .rows
        .iter()
        .map(|row| TransactionRow {
            description: row.get(desc_col).map(Cell::to_string).unwrap_or_default(),
            amount: match row.get(amount_col) {
                Some(Cell::Number(n)) => Some(*n),
                _ => None,
            },
        })
        .collect())
}

fn find_column(headers: &[String], name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| ExtractoError::MissingColumn(name.to_string()))
}

fn group_rows(rows: &[TransactionRow]) -> Vec<SummaryRow> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, (f64, usize)> = HashMap::new();

    for row in rows {
        let entry = groups.entry(row.description.clone()).or_insert_with(|| {
            order.push(row.description.clone());
            (0.0, 0)
        });
        if let Some(amount) = row.amount {
            entry.0 += amount;
        }
        entry.1 += 1;
    }

    let mut summary: Vec<SummaryRow> = order
        .into_iter()
        .map(|description| {
            let (total, recurrence) = groups[&description];
            SummaryRow {
                description,
                total,
                recurrence,
            }
        })
        .collect();
    // Stable sort: equal totals keep first-seen order. The key is the signed
    // total, so the largest credits rank first and the largest expenses last.
    summary.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(std::cmp::Ordering::Equal));
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: Vec<Vec<Cell>>) -> CleanTable {
        CleanTable {
            headers: vec![
                "fecha".into(),
                "descripción".into(),
                "sucursal".into(),
                "dcto.".into(),
                "valor".into(),
                "saldo".into(),
            ],
            rows,
        }
    }

    fn row(desc: &str, amount: Option<f64>) -> Vec<Cell> {
        vec![
            Cell::Text("2025/01/15".into()),
            Cell::Text(desc.into()),
            Cell::Text("App".into()),
            Cell::Text("0000".into()),
            amount.map(Cell::Number).unwrap_or(Cell::Empty),
            Cell::Number(0.0),
        ]
    }

    #[test]
    fn test_grouping_sums_and_counts() {
        let t = table(vec![
            row("rent", Some(-100.0)),
            row("rent", Some(-100.0)),
            row("rent", Some(-100.0)),
        ]);
        let summary = summarize(&t).unwrap();
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].description, "rent");
        assert_eq!(summary[0].total, -300.0);
        assert_eq!(summary[0].recurrence, 3);
    }

    #[test]
    fn test_null_amounts_count_but_do_not_sum() {
        let t = table(vec![
            row("fee", Some(-10.0)),
            row("fee", None),
            row("fee", Some(-5.0)),
        ]);
        let summary = summarize(&t).unwrap();
        assert_eq!(summary[0].total, -15.0);
        assert_eq!(summary[0].recurrence, 3);
    }

    #[test]
    fn test_sorted_descending_by_signed_total() {
        let t = table(vec![
            row("rent", Some(-900.0)),
            row("salary", Some(5000.0)),
            row("coffee", Some(-12.0)),
        ]);
        let summary = summarize(&t).unwrap();
        let order: Vec<&str> = summary.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(order, vec!["salary", "coffee", "rent"]);
    }

    #[test]
    fn test_equal_totals_keep_first_seen_order() {
        let t = table(vec![
            row("b", Some(-50.0)),
            row("a", Some(-50.0)),
            row("c", Some(-50.0)),
        ]);
        let summary = summarize(&t).unwrap();
        let order: Vec<&str> = summary.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_missing_description_column_is_fatal() {
        let mut t = table(vec![row("rent", Some(-100.0))]);
        t.headers[1] = "detalle".into();
        let err = summarize(&t).unwrap_err();
        assert!(err.to_string().contains("descripción"));
    }

    #[test]
    fn test_headers_are_matched_after_trimming() {
        let mut t = table(vec![row("rent", Some(-100.0))]);
        t.headers[1] = " descripción ".into();
        t.headers[4] = "valor ".into();
        assert!(summarize(&t).is_ok());
    }
}
