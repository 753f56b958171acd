use std::fmt;
use std::path::Path;

use calamine::{Data, Reader};
use tracing::info;

use crate::error::{ExtractoError, Result};

/// A single spreadsheet cell after loading. Formulas, errors and blanks all
/// collapse to `Empty`; everything else is either text or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Float(f) => Cell::Number(*f),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Bool(b) => Cell::Text(b.to_string()),
            Data::DateTime(dt) => Cell::Number(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        }
    }
}

static EMPTY: Cell = Cell::Empty;

/// The statement spreadsheet as loaded: an ordered sequence of rows of cells.
/// Rows may be ragged; out-of-range lookups read as empty cells.
#[derive(Debug, Clone)]
pub struct RawGrid {
    rows: Vec<Vec<Cell>>,
}

impl RawGrid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }
}

/// Reads the first worksheet of an xlsx/xls file into a `RawGrid`.
pub fn load_grid(path: &Path) -> Result<RawGrid> {
    let mut workbook = calamine::open_workbook_auto(path)
        .map_err(|e| ExtractoError::Workbook(format!("failed to open {}: {e}", path.display())))?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ExtractoError::Workbook(format!("{} has no worksheets", path.display())))?;
    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| ExtractoError::Workbook(format!("failed to read sheet {sheet:?}: {e}")))?;
    let rows: Vec<Vec<Cell>> = range
        .rows()
        .map(|row| row.iter().map(Cell::from).collect())
        .collect();
    info!("loaded {} rows from sheet {sheet:?}", rows.len());
    Ok(RawGrid::new(rows))
}
