//! PDFium library loader with platform-specific search paths.
//!
//! This module centralizes the logic for locating and loading the PDFium
//! dynamic library across different deployment scenarios.

use super::{PdfError, PdfResult};
use pdfium_render::prelude::*;
use std::path::PathBuf;

pub struct PdfiumLoader;

impl PdfiumLoader {
    /// Load the PDFium library from known search paths or system library.
    ///
    /// Search order:
    /// 1. `lib/` in current working directory (development)
    /// 2. `lib/` relative to executable
    /// 3. `Resources/lib/` in macOS bundle
    /// 4. System library fallback
    pub fn load() -> PdfResult<Pdfium> {
        for path in Self::search_paths() {
            if !path.exists() {
                continue;
            }
            match Pdfium::bind_to_library(&path) {
                Ok(bindings) => {
                    tracing::info!(path = %path.display(), "Bound pdfium library");
                    return Ok(Pdfium::new(bindings));
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), "Skipping pdfium candidate: {:?}", e);
                }
            }
        }
        Pdfium::bind_to_system_library()
            .map(Pdfium::new)
            .map_err(|e| PdfError::Library(format!("{:?}", e)))
    }

    /// Candidate library files, most specific first.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut dirs = Vec::new();

        // Current working directory (development)
        if let Ok(cwd) = std::env::current_dir() {
            dirs.push(cwd.join("lib"));
        }

        // Executable-relative path
        if let Ok(exe) = std::env::current_exe() {
            if let Some(parent) = exe.parent() {
                dirs.push(parent.join("lib"));

                // macOS bundle path
                if let Some(grandparent) = parent.parent() {
                    dirs.push(grandparent.join("Resources/lib"));
                }
            }
        }

        dirs.iter()
            .map(|dir| Pdfium::pdfium_platform_library_name_at_path(dir))
            .collect()
    }
}
