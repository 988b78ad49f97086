//! Application lifecycle - initialization and teardown of the loaded document.

use super::{PageGridApp, StatusMessage};
use crate::pdf::PdfiumBackend;
use crate::session::DocumentSession;
use crate::settings::Settings;
use gpui::*;

impl PageGridApp {
    pub fn new(
        backend: PdfiumBackend,
        settings: Settings,
        screen_width: f32,
        cx: &mut Context<Self>,
    ) -> Self {
        Self {
            backend,
            settings,
            screen_width,
            session: DocumentSession::new(),
            thumbnails: Vec::new(),
            status: StatusMessage::info("Open a PDF file to view its pages."),
            focus_handle: cx.focus_handle(),
        }
    }

    /// Drop the loaded document together with its thumbnails.
    pub fn clear_document(&mut self) {
        self.session.close();
        self.thumbnails.clear();
    }
}
