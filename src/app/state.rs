//! Application state - the PageGridApp struct definition.

use crate::pdf::{PdfiumBackend, PdfiumDocument};
use crate::session::DocumentSession;
use crate::settings::Settings;
use gpui::{FocusHandle, Image, SharedString};
use std::sync::Arc;

/// Severity of the current status bar text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Error,
}

/// Text shown in the status bar
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: SharedString,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn info(text: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }

    pub fn warning(text: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Warning,
        }
    }

    pub fn error(text: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

/// Main window state
pub struct PageGridApp {
    /// Opens documents through the shared pdfium binding
    pub backend: PdfiumBackend,
    /// User settings, loaded once at startup
    pub settings: Settings,
    /// Primary display width, used to derive cell width
    pub screen_width: f32,
    /// Loaded document, grid geometry and rendered cells
    pub session: DocumentSession<PdfiumDocument>,
    /// GPU-ready thumbnails indexed by page, rebuilt with the session cells
    pub thumbnails: Vec<Option<Arc<Image>>>,
    /// Status bar content
    pub status: StatusMessage,
    /// Focus target so menu actions reach the view
    pub focus_handle: FocusHandle,
}
