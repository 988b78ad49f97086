//! PDF access for the page grid.
//!
//! The grid only consumes three things from a PDF renderer: open a document,
//! count its pages, and rasterize one page. Those live behind the
//! `DocumentLoader` / `PageSource` traits so the session can be driven by an
//! in-memory source in tests.
//!
//! - `document` - pdfium-backed loader and document handle
//! - `raster` - RGB888 page bitmaps
//! - `pdfium_loader` - Shared PDFium library loading logic
//! - `error` - PDF error type

mod document;
mod error;
mod pdfium_loader;
mod raster;

pub use document::{PdfiumBackend, PdfiumDocument};
pub use error::{PdfError, PdfResult};
pub use pdfium_loader::PdfiumLoader;
pub use raster::RasterImage;

use std::path::Path;

/// A loaded document that can report its length and rasterize pages.
pub trait PageSource {
    fn page_count(&self) -> usize;

    /// Render page `page_index` at `scale` (1.0 = 72 DPI).
    fn render_page(&self, page_index: usize, scale: f32) -> PdfResult<RasterImage>;
}

/// Opens documents by path.
pub trait DocumentLoader {
    type Document: PageSource;

    fn open(&self, path: &Path) -> PdfResult<Self::Document>;
}
