//! Page grid rendering - one fixed-size thumbnail cell per page
//!
//! The grid owns every cell element; a reload rebuilds the whole tree.
//! Trailing cells in the last row stay empty.

use crate::grid_layout::GridConfig;
use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};
use std::sync::Arc;

fn render_cell(
    page: Option<usize>,
    thumbnail: Option<Arc<Image>>,
    width: Pixels,
    height: Pixels,
    cx: &App,
) -> Div {
    let cell = div()
        .flex_none()
        .w(width)
        .h(height)
        .border_1()
        .border_color(cx.theme().border);

    match (page, thumbnail) {
        (Some(_), Some(image)) => cell
            .bg(white())
            .child(img(image).size_full().object_fit(ObjectFit::Fill)),
        (Some(index), None) => cell
            .bg(cx.theme().muted)
            .flex()
            .items_center()
            .justify_center()
            .text_xs()
            .text_color(cx.theme().danger)
            .child(format!("Page {} unavailable", index + 1)),
        (None, _) => cell,
    }
}

fn render_empty_state(cx: &App) -> Div {
    div()
        .flex_1()
        .flex()
        .items_center()
        .justify_center()
        .text_color(cx.theme().muted_foreground)
        .child("No document loaded")
}

/// Render the scrollable thumbnail table, or an empty-state hint.
pub fn render_page_grid(
    grid: Option<&GridConfig>,
    thumbnails: &[Option<Arc<Image>>],
    cx: &App,
) -> AnyElement {
    let Some(grid) = grid.copied() else {
        return render_empty_state(cx).into_any_element();
    };

    let width = px(grid.cell_width as f32);
    let height = px(grid.cell_height as f32);

    let rows = (0..grid.row_count).map(|row| {
        h_flex().flex_none().children((0..grid.column_count).map(|col| {
            // index_of can point past the last page; page_at filters those out.
            let page = grid.page_at(row, col).ok().flatten();
            let thumbnail = page.and_then(|index| thumbnails.get(index).cloned().flatten());
            render_cell(page, thumbnail, width, height, cx)
        }))
    });

    div()
        .id("page-grid")
        .flex_1()
        .min_h_0()
        .overflow_scroll()
        .child(v_flex().flex_none().children(rows))
        .into_any_element()
}
