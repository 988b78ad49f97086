//! Page grid layout - mapping between linear page indices and grid cells.
//!
//! Pages fill the grid row-major: left to right, then top to bottom. All
//! positions are zero-based.
//!
//! The free functions are the primitive operations. `GridConfig` bundles the
//! values derived for one loaded document so they are always computed
//! together.

use serde::Serialize;
use thiserror::Error;

/// Contract violations in grid layout arithmetic.
///
/// These indicate a caller bug, not a user-facing condition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// An index or coordinate fell outside its valid range
    #[error("{what} {value} out of range (limit {limit})")]
    OutOfRange {
        what: &'static str,
        value: usize,
        limit: usize,
    },

    /// A configuration value can never produce a valid grid
    #[error("Invalid grid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;

fn check_column_count(column_count: usize) -> LayoutResult<()> {
    if column_count == 0 {
        return Err(LayoutError::InvalidConfig(
            "column count must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Grid position `(row, col)` of `page_index`.
pub fn position_of(
    page_index: usize,
    page_count: usize,
    column_count: usize,
) -> LayoutResult<(usize, usize)> {
    check_column_count(column_count)?;
    if page_index >= page_count {
        return Err(LayoutError::OutOfRange {
            what: "page index",
            value: page_index,
            limit: page_count,
        });
    }
    Ok((page_index / column_count, page_index % column_count))
}

/// Linear page index of the cell at `(row, col)`.
///
/// Only the coordinates are validated. In the last row the result may point
/// past the final page; callers check it against the page count. An index
/// that does not fit in `usize` is `InvalidConfig`.
pub fn index_of(
    row: usize,
    col: usize,
    column_count: usize,
    row_count: usize,
) -> LayoutResult<usize> {
    if row >= row_count {
        return Err(LayoutError::OutOfRange {
            what: "row",
            value: row,
            limit: row_count,
        });
    }
    if col >= column_count {
        return Err(LayoutError::OutOfRange {
            what: "column",
            value: col,
            limit: column_count,
        });
    }
    row.checked_mul(column_count)
        .and_then(|start| start.checked_add(col))
        .ok_or_else(|| {
            LayoutError::InvalidConfig(format!(
                "cell ({row}, {col}) has no index with {column_count} columns"
            ))
        })
}

/// Rows needed to hold `page_count` pages: `ceil(page_count / column_count)`.
pub fn row_count_for(page_count: usize, column_count: usize) -> LayoutResult<usize> {
    check_column_count(column_count)?;
    Ok(page_count.div_ceil(column_count))
}

/// Cell `(width, height)` for a target width and a width/height ratio.
pub fn cell_size_for(target_width: u32, aspect_ratio: f32) -> LayoutResult<(u32, u32)> {
    if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
        return Err(LayoutError::InvalidConfig(format!(
            "aspect ratio must be positive, got {aspect_ratio}"
        )));
    }
    if target_width == 0 {
        return Err(LayoutError::InvalidConfig(
            "target width must be positive".to_string(),
        ));
    }

    let height = (f64::from(target_width) / f64::from(aspect_ratio)).round();
    if height < 1.0 || height > f64::from(u32::MAX) {
        return Err(LayoutError::InvalidConfig(format!(
            "cell height {height} derived from width {target_width} is not representable"
        )));
    }
    Ok((target_width, height as u32))
}

/// Derived grid geometry for one loaded document.
///
/// Built once per load; `row_count` always equals
/// `ceil(page_count / column_count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridConfig {
    pub page_count: usize,
    pub column_count: usize,
    pub row_count: usize,
    pub cell_width: u32,
    pub cell_height: u32,
}

impl GridConfig {
    pub fn new(
        page_count: usize,
        column_count: usize,
        target_width: u32,
        aspect_ratio: f32,
    ) -> LayoutResult<Self> {
        let row_count = row_count_for(page_count, column_count)?;
        let (cell_width, cell_height) = cell_size_for(target_width, aspect_ratio)?;
        Ok(Self {
            page_count,
            column_count,
            row_count,
            cell_width,
            cell_height,
        })
    }

    pub fn position_of(&self, page_index: usize) -> LayoutResult<(usize, usize)> {
        position_of(page_index, self.page_count, self.column_count)
    }

    pub fn index_of(&self, row: usize, col: usize) -> LayoutResult<usize> {
        index_of(row, col, self.column_count, self.row_count)
    }

    /// Page shown at `(row, col)`, or `None` for a trailing empty cell.
    pub fn page_at(&self, row: usize, col: usize) -> LayoutResult<Option<usize>> {
        let index = self.index_of(row, col)?;
        Ok((index < self.page_count).then_some(index))
    }

    /// Total cells in the grid, including trailing empty ones.
    pub fn cell_count(&self) -> LayoutResult<usize> {
        self.row_count
            .checked_mul(self.column_count)
            .ok_or_else(|| {
                LayoutError::InvalidConfig(format!(
                    "{} rows of {} columns overflow the cell count",
                    self.row_count, self.column_count
                ))
            })
    }

    /// Full grid extent in pixels, not counting cell borders. Saturates at
    /// `u64::MAX`.
    pub fn content_size(&self) -> (u64, u64) {
        (
            (self.column_count as u64).saturating_mul(u64::from(self.cell_width)),
            (self.row_count as u64).saturating_mul(u64::from(self.cell_height)),
        )
    }
}
