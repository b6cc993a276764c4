//! Raster containers
//!
//! This module defines the minimal raster contract shared by the image
//! types, with a fixed 48-bit RGB container and a container for any
//! [`PixelFormat`](crate::pixel::PixelFormat).

mod pixel_image;
mod rgb48;

#[cfg(test)]
mod tests;

pub use pixel_image::PixelImage;
pub use rgb48::Rgb48Image;

use crate::pixel::color::{ColorModel, ColorValue};
use crate::pixel::common::Rect;

pub trait RasterImage {
    /// The model that [`at`](Self::at) values belong to.
    fn color_model(&self) -> ColorModel;

    fn bounds(&self) -> Rect;

    /// The color at `(x, y)`. Points outside the bounds give a zero color.
    fn at(&self, x: i32, y: i32) -> ColorValue;

    /// Whether every pixel is fully opaque.
    fn opaque(&self) -> bool;
}

pub trait RasterImageMut: RasterImage {
    /// Converts `c` into the image's model and stores it at `(x, y)`.
    /// Points outside the bounds are ignored.
    fn set(&mut self, x: i32, y: i32, c: &ColorValue);
}

/// Byte length needed to hold `rect` with the given stride and pixel size.
pub(crate) fn required_len(rect: Rect, stride: usize, pixel_size: usize) -> usize {
    if rect.is_empty() {
        return 0;
    }
    (rect.height() - 1) * stride + rect.width() * pixel_size
}
