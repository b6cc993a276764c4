//! Pixel format module
//!
//! This module groups the element kinds and the typed byte accessor, the
//! standard and generic color types, pixel format configuration and the
//! raster containers built on top of them.

pub mod accessor;
pub mod color;
pub mod common;
pub mod format;
pub mod image;
pub mod kind;


pub use common::{
    PixelError,
    Point,
    Rect,
    Result,
};

pub use kind::{
    ElementKind,
    size_of_kind,
    size_of_pixel,
};

pub use accessor::PixelAccess;

pub use color::{
    Color,
    ColorModel,
    ColorValue,
    GenericColor,
    Gray,
    Gray16,
    Nrgba,
    Nrgba64,
    Rgba,
    Rgba64,
    color_model_convert,
};

pub use format::{
    PixelFormat,
    PixelFormatBuilder,
};

pub use image::{
    PixelImage,
    RasterImage,
    RasterImageMut,
    Rgb48Image,
};
