//! Application module - the page grid window state and its handlers.
//!
//! This module is organized into several submodules:
//! - `state` - The PageGridApp struct definition
//! - `lifecycle` - Initialization
//! - `document_handlers` - Open, load and export actions

mod document_handlers;
mod lifecycle;
mod state;

pub use state::{PageGridApp, StatusKind, StatusMessage};

use gpui::{App, KeyBinding, Menu, MenuItem, actions};

actions!(pagegrid, [Open, Quit, ExportImages]);

/// Key context set on the grid view
pub const KEY_CONTEXT: &str = "PageGrid";

/// Register global actions, key bindings and the menu bar.
pub fn init(cx: &mut App) {
    cx.on_action(|_: &Quit, cx| cx.quit());

    cx.bind_keys([
        KeyBinding::new("secondary-o", Open, None),
        KeyBinding::new("secondary-q", Quit, None),
        KeyBinding::new("secondary-i", ExportImages, Some(KEY_CONTEXT)),
    ]);

    cx.set_menus(vec![
        Menu {
            name: "File".into(),
            items: vec![
                MenuItem::action("Open", Open),
                MenuItem::separator(),
                MenuItem::action("Quit", Quit),
            ],
        },
        Menu {
            name: "Edit".into(),
            items: vec![MenuItem::action("To Images", ExportImages)],
        },
    ]);
}
