//! Export rendered pages of the loaded document as PNG files.

use crate::constants::FALLBACK_EXPORT_STEM;
use crate::pdf::PdfError;
use crate::session::DocumentSession;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while exporting pages
#[derive(Error, Debug)]
pub enum ExportError {
    /// Nothing is loaded in the session
    #[error("No document loaded")]
    NoDocument,

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding failed
    #[error("Image encode error: {0}")]
    Image(#[from] image::ImageError),

    /// A cell held an unusable raster
    #[error(transparent)]
    Raster(#[from] PdfError),
}

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// File name for a page: `<stem>_page_<NNN>.png`, numbered from 1.
pub fn page_file_name(stem: &str, page_index: usize) -> String {
    format!("{}_page_{:03}.png", stem, page_index + 1)
}

/// Write every rendered page into `out_dir`, creating it if needed.
///
/// Cells whose page failed to render are skipped. Returns the written paths
/// in page order.
pub fn export_pages<D>(session: &DocumentSession<D>, out_dir: &Path) -> ExportResult<Vec<PathBuf>> {
    let doc = session.document().ok_or(ExportError::NoDocument)?;
    fs::create_dir_all(out_dir)?;

    let stem = doc
        .path()
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(FALLBACK_EXPORT_STEM);

    let mut written = Vec::with_capacity(doc.cells().len());
    for cell in doc.cells() {
        let Some(image) = cell.image.as_ref() else {
            tracing::warn!(page = cell.page_index, "Skipping page with no rendered image");
            continue;
        };
        let target = out_dir.join(page_file_name(stem, cell.page_index));
        image.to_rgb_image()?.save(&target)?;
        written.push(target);
    }

    tracing::info!(
        dir = %out_dir.display(),
        pages = written.len(),
        "Exported pages"
    );
    Ok(written)
}
