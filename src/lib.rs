//! pagegrid - browse the pages of a PDF as a fixed-column thumbnail grid.

pub mod app;
pub mod constants;
pub mod export;
pub mod grid_layout;
pub mod pdf;
pub mod perf;
pub mod render;
pub mod session;
pub mod settings;
