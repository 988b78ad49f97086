//! Document session - the loaded document, its grid and rendered cells.
//!
//! A load replaces everything at once: the previous document handle is
//! dropped before the next one is opened, then the grid geometry is derived
//! once and every page is rendered eagerly into its cell.

use crate::grid_layout::{GridConfig, LayoutError};
use crate::pdf::{DocumentLoader, PageSource, PdfError, RasterImage};
use crate::perf::RenderTimings;
use crate::profile_scope;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;

/// Errors that abort a document load
#[derive(Error, Debug)]
pub enum SessionError {
    /// Opening the document failed
    #[error(transparent)]
    Pdf(#[from] PdfError),

    /// Grid geometry could not be derived from the options
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// The document has no pages to lay out
    #[error("{} contains no pages", path.display())]
    EmptyDocument { path: PathBuf },
}

/// Result type alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Parameters for one document load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadOptions {
    pub column_count: usize,
    pub cell_width: u32,
    pub aspect_ratio: f32,
    pub render_scale: f32,
}

/// One grid slot holding a page thumbnail.
#[derive(Debug, Clone)]
pub struct GridCell {
    pub page_index: usize,
    pub row: usize,
    pub col: usize,
    /// `None` when rendering this page failed
    pub image: Option<RasterImage>,
}

/// A page that could not be rendered during load.
#[derive(Debug)]
pub struct PageFailure {
    pub page_index: usize,
    pub error: PdfError,
}

/// Outcome of a successful load.
#[derive(Debug)]
pub struct LoadReport {
    pub page_count: usize,
    pub rendered: usize,
    pub failures: Vec<PageFailure>,
    pub render_timings: RenderTimings,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A document together with the grid built for it.
pub struct LoadedDocument<D> {
    path: PathBuf,
    /// Closed when the loaded document is dropped
    #[allow(dead_code)]
    handle: D,
    grid: GridConfig,
    cells: Vec<GridCell>,
}

impl<D> LoadedDocument<D> {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }
}

/// Owns at most one loaded document.
pub struct DocumentSession<D> {
    current: Option<LoadedDocument<D>>,
}

impl<D> Default for DocumentSession<D> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<D: PageSource> DocumentSession<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `path`, derive its grid and render every page.
    ///
    /// Open and layout failures leave the session unloaded. Per-page render
    /// failures are collected in the report and leave that cell empty.
    pub fn load<L>(
        &mut self,
        loader: &L,
        path: &Path,
        options: &LoadOptions,
    ) -> SessionResult<LoadReport>
    where
        L: DocumentLoader<Document = D>,
    {
        // Release the previous handle before opening the next one.
        self.current = None;

        let handle = loader.open(path)?;
        let page_count = handle.page_count();
        if page_count == 0 {
            return Err(SessionError::EmptyDocument {
                path: path.to_path_buf(),
            });
        }

        let grid = GridConfig::new(
            page_count,
            options.column_count,
            options.cell_width,
            options.aspect_ratio,
        )?;

        let mut cells = Vec::with_capacity(page_count);
        let mut failures = Vec::new();
        let mut render_timings = RenderTimings::with_capacity(page_count);

        for page_index in 0..page_count {
            let (row, col) = grid.position_of(page_index)?;

            profile_scope!("render_page", crate::constants::RENDER_WARN_THRESHOLD_MS);
            let started = Instant::now();
            let image = match handle.render_page(page_index, options.render_scale) {
                Ok(image) => Some(image),
                Err(error) => {
                    tracing::warn!(page = page_index, "Page render failed: {}", error);
                    failures.push(PageFailure { page_index, error });
                    None
                }
            };
            render_timings.record(started.elapsed().as_secs_f64() * 1000.0);

            cells.push(GridCell {
                page_index,
                row,
                col,
                image,
            });
        }

        let report = LoadReport {
            page_count,
            rendered: page_count - failures.len(),
            failures,
            render_timings,
        };
        tracing::info!(
            path = %path.display(),
            pages = page_count,
            rows = grid.row_count,
            columns = grid.column_count,
            failed = report.failures.len(),
            avg_render_ms = format!("{:.2}", report.render_timings.average()),
            p95_render_ms = format!("{:.2}", report.render_timings.p95()),
            max_render_ms = format!("{:.2}", report.render_timings.max()),
            "Document loaded"
        );

        self.current = Some(LoadedDocument {
            path: path.to_path_buf(),
            handle,
            grid,
            cells,
        });
        Ok(report)
    }
}

impl<D> DocumentSession<D> {
    /// Drop the loaded document and its cells.
    pub fn close(&mut self) {
        if let Some(doc) = self.current.take() {
            tracing::debug!(path = %doc.path.display(), "Document closed");
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    pub fn document(&self) -> Option<&LoadedDocument<D>> {
        self.current.as_ref()
    }

    /// Page count of the loaded document, `None` when nothing is loaded.
    pub fn page_count(&self) -> Option<usize> {
        self.current.as_ref().map(|doc| doc.grid.page_count)
    }

    pub fn grid(&self) -> Option<&GridConfig> {
        self.current.as_ref().map(|doc| &doc.grid)
    }

    pub fn path(&self) -> Option<&Path> {
        self.current.as_ref().map(|doc| doc.path.as_path())
    }

    pub fn cells(&self) -> &[GridCell] {
        self.current
            .as_ref()
            .map(|doc| doc.cells.as_slice())
            .unwrap_or(&[])
    }

    /// Cell at `(row, col)`.
    ///
    /// Returns `Ok(None)` when no document is loaded or for trailing empty
    /// cells in the last row.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Option<&GridCell>, LayoutError> {
        let Some(doc) = self.current.as_ref() else {
            return Ok(None);
        };
        Ok(doc.grid.page_at(row, col)?.and_then(|index| doc.cells.get(index)))
    }
}
