//! Rendering for the page grid window.
//!
//! - `grid` - the scrollable thumbnail table
//! - `status_bar` - bottom status line
//! - `thumbnail` - raster to GPU image conversion

mod grid;
mod status_bar;
mod thumbnail;

pub use grid::render_page_grid;
pub use status_bar::{grid_summary, render_status_bar};
pub use thumbnail::thumbnail_image;

use crate::app::{KEY_CONTEXT, PageGridApp};
use gpui::*;
use gpui_component::{ActiveTheme as _, v_flex};

impl Render for PageGridApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .id("page-grid-app")
            .key_context(KEY_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_open))
            .on_action(cx.listener(Self::on_export_images))
            .size_full()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(render_page_grid(self.session.grid(), &self.thumbnails, cx))
            .child(render_status_bar(&self.status, self.session.grid(), cx))
    }
}
