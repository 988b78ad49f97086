//! Error types for PDF operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or rasterizing PDF documents
#[derive(Error, Debug)]
pub enum PdfError {
    /// The pdfium shared library could not be bound
    #[error("Failed to load pdfium: {0}")]
    Library(String),

    /// Path missing, unreadable, or not a PDF
    #[error("Failed to open {}: {reason}", path.display())]
    Open { path: PathBuf, reason: String },

    /// Requested page does not exist in the document
    #[error("Page {page_index} out of range (document has {page_count} pages)")]
    PageOutOfRange { page_index: usize, page_count: usize },

    /// The renderer failed on a specific page
    #[error("Failed to render page {page_index}: {reason}")]
    Render { page_index: usize, reason: String },

    /// Pixel buffer does not match the declared geometry
    #[error("Invalid raster: {0}")]
    InvalidRaster(String),
}

/// Result type alias for PDF operations
pub type PdfResult<T> = Result<T, PdfError>;
