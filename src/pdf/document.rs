//! pdfium-backed document loading and page rendering.

use super::{DocumentLoader, PageSource, PdfError, PdfResult, RasterImage};
use pdfium_render::prelude::*;
use std::path::Path;

/// Opens documents through a process-wide pdfium binding.
///
/// The binding is created once at startup and lives for the rest of the
/// process, so documents can borrow it for `'static`.
#[derive(Clone, Copy)]
pub struct PdfiumBackend {
    pdfium: &'static Pdfium,
}

impl PdfiumBackend {
    pub fn new(pdfium: &'static Pdfium) -> Self {
        Self { pdfium }
    }
}

impl DocumentLoader for PdfiumBackend {
    type Document = PdfiumDocument;

    fn open(&self, path: &Path) -> PdfResult<PdfiumDocument> {
        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| PdfError::Open {
                path: path.to_path_buf(),
                reason: format!("{:?}", e),
            })?;
        tracing::debug!(path = %path.display(), pages = document.pages().len(), "Opened PDF");
        Ok(PdfiumDocument { document })
    }
}

/// An open pdfium document. Dropping it closes the file.
pub struct PdfiumDocument {
    document: PdfDocument<'static>,
}

impl PageSource for PdfiumDocument {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn render_page(&self, page_index: usize, scale: f32) -> PdfResult<RasterImage> {
        let page_count = self.page_count();
        if page_index >= page_count {
            return Err(PdfError::PageOutOfRange {
                page_index,
                page_count,
            });
        }

        let render_err = |reason: String| PdfError::Render { page_index, reason };

        let index = page_index
            .try_into()
            .map_err(|_| render_err("page index exceeds pdfium range".to_string()))?;
        let page = self
            .document
            .pages()
            .get(index)
            .map_err(|e| render_err(format!("{:?}", e)))?;

        let config = PdfRenderConfig::new().scale_page_by_factor(scale);
        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| render_err(format!("{:?}", e)))?;

        let width = bitmap.width() as u32;
        let height = bitmap.height() as u32;
        RasterImage::from_rgba(width, height, &bitmap.as_rgba_bytes())
    }
}
