//! Application-wide constants.
//!
//! Centralizes grid defaults, window sizing and timing thresholds.

// ============================================================================
// Grid Layout
// ============================================================================

/// Number of thumbnail columns in the page grid
pub const DEFAULT_COLUMN_COUNT: usize = 8;

/// Width/height ratio of a grid cell (ISO A-series paper, 1/sqrt(2))
pub const A_SERIES_ASPECT_RATIO: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// Zoom factor passed to the PDF renderer (1.0 = 72 DPI)
pub const DEFAULT_RENDER_SCALE: f32 = 1.0;

/// Smallest accepted render scale
pub const MIN_RENDER_SCALE: f32 = 0.1;

/// Largest accepted render scale
pub const MAX_RENDER_SCALE: f32 = 8.0;

/// Upper bound on configurable column count
pub const MAX_COLUMN_COUNT: usize = 64;

/// Smallest cell width in pixels, regardless of screen size
pub const MIN_CELL_WIDTH: u32 = 32;

// ============================================================================
// Window
// ============================================================================

/// Title of the main window and of error prompts
pub const WINDOW_TITLE: &str = "PDF to Image Converter Table View";

/// Fraction of the primary display the window covers
pub const DEFAULT_WINDOW_FRACTION: f32 = 0.75;

/// Screen size used when no display can be queried
pub const FALLBACK_SCREEN_SIZE: (f32, f32) = (1920.0, 1080.0);

/// Height of the status bar in pixels
pub const STATUS_BAR_HEIGHT: f32 = 24.0;

// ============================================================================
// Timing
// ============================================================================

/// Warn when a full document load exceeds this many milliseconds
pub const LOAD_WARN_THRESHOLD_MS: f64 = 2000.0;

/// Warn when a single page render exceeds this many milliseconds
pub const RENDER_WARN_THRESHOLD_MS: f64 = 250.0;

// ============================================================================
// Files
// ============================================================================

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "pagegrid";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// File stem used for exports when the document path has none
pub const FALLBACK_EXPORT_STEM: &str = "document";
