//! Generic pixel formats for raster images.
//!
//! A [`GenericColor`] carries any number of channels of any numeric
//! [`ElementKind`] and expands to the standard premultiplied 16-bit RGBA
//! quadruple. [`color_model_convert`] goes the other way, and the
//! [`Rgb48Image`] / [`PixelImage`] containers store pixels in those formats.

pub mod logger;
pub mod pixel;

pub use pixel::{
    Color, ColorModel, ColorValue, ElementKind, GenericColor, Gray, Gray16, Nrgba, Nrgba64,
    PixelAccess, PixelError, PixelFormat, PixelFormatBuilder, PixelImage, Point, RasterImage,
    RasterImageMut, Rect, Result, Rgb48Image, Rgba, Rgba64, color_model_convert, size_of_kind,
    size_of_pixel,
};
