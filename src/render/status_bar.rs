//! Status bar rendering - last action result and grid summary

use crate::app::{StatusKind, StatusMessage};
use crate::constants::STATUS_BAR_HEIGHT;
use crate::grid_layout::GridConfig;
use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex};

/// Grid summary shown on the right of the status bar.
pub fn grid_summary(grid: &GridConfig) -> String {
    format!(
        "{} pages, {} rows × {} columns",
        grid.page_count, grid.row_count, grid.column_count
    )
}

pub fn render_status_bar(status: &StatusMessage, grid: Option<&GridConfig>, cx: &App) -> Div {
    let text_color = match status.kind {
        StatusKind::Info => cx.theme().muted_foreground,
        StatusKind::Warning => cx.theme().warning,
        StatusKind::Error => cx.theme().danger,
    };

    let summary = grid.map(grid_summary);

    h_flex()
        .h(px(STATUS_BAR_HEIGHT))
        .w_full()
        .flex_none()
        .px(px(8.0))
        .justify_between()
        .border_t_1()
        .border_color(cx.theme().border)
        .bg(cx.theme().secondary)
        .text_xs()
        .child(div().text_color(text_color).child(status.text.clone()))
        .children(summary.map(|summary| {
            div()
                .text_color(cx.theme().muted_foreground)
                .child(summary)
        }))
}
