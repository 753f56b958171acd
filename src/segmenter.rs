use tracing::{debug, info};

use crate::grid::{Cell, RawGrid};
use crate::models::{CombinedTable, TableSegment};

/// First-cell substring marking the row before a transaction table.
const SENTINEL: &str = "movimientos";
/// A null in this column signals the end of the current table.
const BOUNDARY_COL: usize = 5;

enum ScanState {
    Searching,
    InTable { start: usize },
}

/// Scans the grid for embedded transaction tables. Each table starts one row
/// past a sentinel row and ends at the first row whose boundary column is
/// empty (that row excluded). A table still open when the grid ends is
/// dropped.
pub fn find_segments(grid: &RawGrid) -> Vec<TableSegment> {
    let mut segments = Vec::new();
    let mut state = ScanState::Searching;

    for i in 0..grid.rows().len() {
        match state {
            ScanState::Searching => {
                if is_sentinel(grid.cell(i, 0)) {
                    info!("table start marker at row {i}");
                    state = ScanState::InTable { start: i + 1 };
                }
            }
            ScanState::InTable { start } => {
                if grid.cell(i, BOUNDARY_COL).is_empty() {
                    info!("table end at row {i}");
                    segments.push(TableSegment { start, end: i });
                    state = ScanState::Searching;
                }
            }
        }
    }

    if let ScanState::InTable { start } = state {
        debug!("unterminated table starting at row {start} dropped");
    }
    segments
}

fn is_sentinel(cell: &Cell) -> bool {
    match cell {
        Cell::Text(s) => s.to_lowercase().contains(SENTINEL),
        _ => false,
    }
}

/// Concatenates the rows of all segments, in discovery order.
pub fn merge_segments(grid: &RawGrid, segments: &[TableSegment]) -> CombinedTable {
    let mut rows = Vec::new();
    for segment in segments {
        rows.extend(grid.rows()[segment.start..segment.end].iter().cloned());
    }
    CombinedTable { rows }
}
