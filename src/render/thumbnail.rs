//! Conversion of rendered pages into images gpui can paint.

use crate::pdf::RasterImage;
use gpui::{Image, ImageFormat};
use std::sync::Arc;

/// Encode a page raster for display, or `None` if encoding fails.
pub fn thumbnail_image(raster: &RasterImage) -> Option<Arc<Image>> {
    match raster.to_png_bytes() {
        Ok(bytes) => Some(Arc::new(Image::from_bytes(ImageFormat::Png, bytes))),
        Err(e) => {
            tracing::warn!(
                width = raster.width(),
                height = raster.height(),
                "Failed to encode thumbnail: {}",
                e
            );
            None
        }
    }
}
