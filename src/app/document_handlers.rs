//! Document handlers - open, load and export actions.

use super::{ExportImages, Open, PageGridApp, StatusMessage};
use crate::constants::{LOAD_WARN_THRESHOLD_MS, WINDOW_TITLE};
use crate::export::export_pages;
use crate::perf::ScopedTimer;
use crate::render::thumbnail_image;
use crate::session::PageFailure;
use gpui::*;
use std::path::PathBuf;

/// 1-based page numbers of failed renders, e.g. "2, 5"
fn failed_page_list(failures: &[PageFailure]) -> String {
    failures
        .iter()
        .map(|f| (f.page_index + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn show_prompt(level: PromptLevel, message: &str, detail: &str, window: &mut Window, cx: &mut App) {
    // The answer is irrelevant; the prompt only has an Ok button.
    let _ = window.prompt(level, message, Some(detail), &["Ok"], cx);
}

impl PageGridApp {
    pub(crate) fn on_open(&mut self, _: &Open, window: &mut Window, cx: &mut Context<Self>) {
        let paths = cx.prompt_for_paths(PathPromptOptions {
            files: true,
            directories: false,
            multiple: false,
            prompt: Some("Open PDF File".into()),
        });

        cx.spawn_in(window, async move |this, cx| {
            let path = match paths.await {
                Ok(Ok(Some(mut paths))) => paths.pop(),
                Ok(Ok(None)) | Err(_) => None,
                Ok(Err(e)) => {
                    tracing::error!("Open dialog failed: {}", e);
                    None
                }
            };
            let Some(path) = path else {
                return;
            };
            this.update_in(cx, |this, window, cx| this.load_document(path, window, cx))
                .ok();
        })
        .detach();
    }

    /// Replace the current grid with the pages of `path`.
    ///
    /// Blocks until every page is rendered.
    pub fn load_document(&mut self, path: PathBuf, window: &mut Window, cx: &mut Context<Self>) {
        let _timer = ScopedTimer::new("load_document", LOAD_WARN_THRESHOLD_MS);
        self.clear_document();

        let options = self.settings.load_options(self.screen_width);
        match self.session.load(&self.backend, &path, &options) {
            Ok(report) => {
                self.thumbnails = self
                    .session
                    .cells()
                    .iter()
                    .map(|cell| cell.image.as_ref().and_then(thumbnail_image))
                    .collect();

                if report.is_complete() {
                    self.status = StatusMessage::info(format!("{} loaded.", path.display()));
                } else {
                    self.status = StatusMessage::warning(format!(
                        "{} loaded, {} of {} pages failed to render.",
                        path.display(),
                        report.failures.len(),
                        report.page_count
                    ));
                    let detail = format!(
                        "Could not render page(s) {}.",
                        failed_page_list(&report.failures)
                    );
                    show_prompt(
                        PromptLevel::Warning,
                        "Error occurred in loading pages to table!",
                        &detail,
                        window,
                        cx,
                    );
                }
            }
            Err(e) => {
                tracing::error!(path = %path.display(), "Failed to load document: {}", e);
                self.status = StatusMessage::error(format!("Failed to load {}", path.display()));
                show_prompt(PromptLevel::Critical, WINDOW_TITLE, &e.to_string(), window, cx);
            }
        }
        cx.notify();
    }

    pub(crate) fn on_export_images(
        &mut self,
        _: &ExportImages,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if !self.session.is_loaded() {
            self.status = StatusMessage::warning("Open a PDF before exporting pages.");
            cx.notify();
            return;
        }

        let dirs = cx.prompt_for_paths(PathPromptOptions {
            files: false,
            directories: true,
            multiple: false,
            prompt: Some("Export Here".into()),
        });

        cx.spawn_in(window, async move |this, cx| {
            let dir = match dirs.await {
                Ok(Ok(Some(mut dirs))) => dirs.pop(),
                Ok(Ok(None)) | Err(_) => None,
                Ok(Err(e)) => {
                    tracing::error!("Export dialog failed: {}", e);
                    None
                }
            };
            let Some(dir) = dir else {
                return;
            };
            this.update_in(cx, |this, window, cx| this.export_to(dir, window, cx))
                .ok();
        })
        .detach();
    }

    /// Write every rendered page of the loaded document into `dir`.
    pub fn export_to(&mut self, dir: PathBuf, window: &mut Window, cx: &mut Context<Self>) {
        match export_pages(&self.session, &dir) {
            Ok(written) => {
                self.status = StatusMessage::info(format!(
                    "Exported {} pages to {}",
                    written.len(),
                    dir.display()
                ));
                if self.settings.reveal_after_export {
                    if let Err(e) = open::that(&dir) {
                        tracing::warn!(dir = %dir.display(), "Failed to reveal export folder: {}", e);
                    }
                }
            }
            Err(e) => {
                tracing::error!(dir = %dir.display(), "Export failed: {}", e);
                self.status = StatusMessage::error("Export failed");
                show_prompt(PromptLevel::Critical, WINDOW_TITLE, &e.to_string(), window, cx);
            }
        }
        cx.notify();
    }
}
