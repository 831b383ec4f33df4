//! Grid reading
//!
//! Grids are the application's repeated sub-records (contract periods,
//! occupation lines, children). Each qualifying body row becomes a
//! [`GridRow`]: cell texts trimmed and keyed by 0-based column index. An
//! absent grid is a normal outcome for records the feature does not apply
//! to, so enumeration failures yield an empty sequence rather than an
//! error.

use crate::page::{PageSurface, RawGridRow};
use crate::snapshot::GridRow;
use tracing::debug;

/// Row-id suffix of the header placeholder row
const HEADER_ROW_SUFFIX: &str = "_HeaderRow";
/// Row-id suffix of the "no data" message row
const EMPTY_ROW_SUFFIX: &str = "_EmptyRow";

/// Reads a grid's qualifying rows
pub struct GridReader;

impl GridReader {
    /// Read the table with element id `grid_id`
    ///
    /// Rows come back in on-page presentation order. The header row and
    /// the "no data" placeholder row are excluded by their id suffixes;
    /// rows whose cells are all empty after trimming are discarded.
    pub async fn read_grid<P: PageSurface>(page: &P, grid_id: &str) -> Vec<GridRow> {
        match page.grid_rows(grid_id).await {
            Ok(rows) => Self::qualify(rows),
            Err(e) => {
                debug!("Grid read failed for {}: {}", grid_id, e);
                Vec::new()
            }
        }
    }

    /// Apply the qualification rules to raw rows
    pub fn qualify(rows: Vec<RawGridRow>) -> Vec<GridRow> {
        rows.into_iter()
            .filter(|row| !Self::is_meta_row(row))
            .filter_map(|row| Self::row_from_cells(row.cells))
            .collect()
    }

    fn is_meta_row(row: &RawGridRow) -> bool {
        match row.id.as_deref() {
            Some(id) => id.ends_with(HEADER_ROW_SUFFIX) || id.ends_with(EMPTY_ROW_SUFFIX),
            None => false,
        }
    }

    /// Trim cells and key them by column index; `None` if nothing is left
    fn row_from_cells(cells: Vec<String>) -> Option<GridRow> {
        let row: GridRow = cells
            .into_iter()
            .enumerate()
            .map(|(i, cell)| (i as u32, cell.trim().to_string()))
            .collect();

        if row.values().all(String::is_empty) {
            None
        } else {
            Some(row)
        }
    }
}
