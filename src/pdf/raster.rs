//! RGB888 page bitmaps produced by the renderer.

use super::{PdfError, PdfResult};
use image::{ImageFormat, RgbImage};
use std::io::Cursor;

const RGB_CHANNELS: usize = 3;
const RGBA_CHANNELS: usize = 4;

/// A rasterized page: `height` rows of `row_stride` bytes, each row starting
/// with `width` RGB888 pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    row_stride: usize,
    pixels: Vec<u8>,
}

impl RasterImage {
    pub fn new(width: u32, height: u32, row_stride: usize, pixels: Vec<u8>) -> PdfResult<Self> {
        let min_stride = width as usize * RGB_CHANNELS;
        if row_stride < min_stride {
            return Err(PdfError::InvalidRaster(format!(
                "row stride {row_stride} shorter than {min_stride} bytes for width {width}"
            )));
        }
        let needed = row_stride * height as usize;
        if pixels.len() < needed {
            return Err(PdfError::InvalidRaster(format!(
                "{} bytes supplied, {needed} needed for {width}x{height}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            row_stride,
            pixels,
        })
    }

    /// Build from tightly packed RGBA bytes, dropping the alpha channel.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> PdfResult<Self> {
        let expected = width as usize * height as usize * RGBA_CHANNELS;
        if rgba.len() < expected {
            return Err(PdfError::InvalidRaster(format!(
                "{} RGBA bytes supplied, {expected} needed for {width}x{height}",
                rgba.len()
            )));
        }
        let pixels: Vec<u8> = rgba[..expected]
            .chunks_exact(RGBA_CHANNELS)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        Self::new(width, height, width as usize * RGB_CHANNELS, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixel bytes of row `y`, without stride padding.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.row_stride;
        self.pixels.get(start..start + self.width as usize * RGB_CHANNELS)
    }

    /// Copy into a tightly packed `image` buffer.
    pub fn to_rgb_image(&self) -> PdfResult<RgbImage> {
        let mut packed = Vec::with_capacity(self.width as usize * self.height as usize * RGB_CHANNELS);
        for y in 0..self.height {
            if let Some(row) = self.row(y) {
                packed.extend_from_slice(row);
            }
        }
        RgbImage::from_raw(self.width, self.height, packed).ok_or_else(|| {
            PdfError::InvalidRaster(format!(
                "cannot pack {}x{} raster into an image buffer",
                self.width, self.height
            ))
        })
    }

    /// Encode as PNG.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, image::ImageError> {
        let rgb = self
            .to_rgb_image()
            .map_err(|e| image::ImageError::IoError(std::io::Error::other(e.to_string())))?;
        let mut bytes = Cursor::new(Vec::new());
        rgb.write_to(&mut bytes, ImageFormat::Png)?;
        Ok(bytes.into_inner())
    }
}
