use tracing::warn;

use crate::grid::Cell;

const CURRENCY_SYMBOLS: [char; 3] = ['$', '€', '£'];

/// Converts a raw statement cell into an amount. Total: empty cells and
/// unparseable text yield `None`, never an error. Handles currency symbols,
/// thousands-separator commas, trailing-minus accounting notation
/// ("123.45-") and parenthesized negatives ("(50)").
pub fn parse_amount(cell: &Cell) -> Option<f64> {
    let raw = match cell {
        Cell::Empty => return None,
        Cell::Number(n) => return Some(*n),
        Cell::Text(s) => s,
    };
    if raw.trim().is_empty() {
        return None;
    }

    let mut s = raw.trim().to_string();
    for symbol in CURRENCY_SYMBOLS {
        s = s.replace(symbol, "");
    }
    s = s.replace(',', "");

    if let Some(body) = s.strip_suffix('-') {
        s = format!("-{}", body.trim());
    }
    if let Some(inner) = s.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
        s = format!("-{}", inner.trim());
    }

    match s.trim().parse::<f64>() {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("could not parse amount {raw:?}: {e}");
            None
        }
    }
}
