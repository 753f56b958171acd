use crate::amount::parse_amount;
use crate::error::{ExtractoError, Result};
use crate::grid::Cell;
use crate::models::{CleanTable, CombinedTable};

/// First-cell substring identifying a repeated in-table header line.
const HEADER_MARKER: &str = "fecha";
/// Exact header name of the amount column, as the statement provides it.
const AMOUNT_HEADER: &str = "Valor";
/// Column used for amounts when no header matches.
const AMOUNT_COL_FALLBACK: usize = 4;

/// Promotes the first row to lower-cased column headers, strips header lines
/// re-introduced by merging (the first data row is kept unconditionally),
/// resolves the amount column once, and parses every value in it.
pub fn normalize(table: CombinedTable) -> Result<CleanTable> {
    let mut rows = table.rows.into_iter();
    let header_row = rows
        .next()
        .ok_or_else(|| ExtractoError::Other("merged table has no rows".to_string()))?;
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell.to_string().to_lowercase())
        .collect();

    let data: Vec<Vec<Cell>> = rows
        .enumerate()
        .filter(|(i, row)| *i == 0 || !is_repeated_header(row))
        .map(|(_, row)| row)
        .collect();

    let amount_col = resolve_amount_column(&headers);
    let rows = data
        .into_iter()
        .map(|mut row| {
            let parsed = parse_amount(row.get(amount_col).unwrap_or(&Cell::Empty));
            if row.len() <= amount_col {
                row.resize(amount_col + 1, Cell::Empty);
            }
            row[amount_col] = match parsed {
                Some(v) => Cell::Number(v),
                None => Cell::Empty,
            };
            row
        })
        .collect();

    Ok(CleanTable { headers, rows })
}

/// One-time schema detection: a header literally named "Valor" wins,
/// otherwise amounts are read positionally.
fn resolve_amount_column(headers: &[String]) -> usize {
    headers
        .iter()
        .position(|h| h == AMOUNT_HEADER)
        .unwrap_or(AMOUNT_COL_FALLBACK)
}

fn is_repeated_header(row: &[Cell]) -> bool {
    matches!(row.first(), Some(Cell::Text(s)) if s.to_lowercase().contains(HEADER_MARKER))
}
