use super::generic::color_model_convert;
use super::standard::{Gray, Gray16, Nrgba, Nrgba64, Rgba, Rgba64};
use super::ColorValue;
use crate::pixel::format::PixelFormat;
use crate::pixel::kind::ElementKind;

/// A target representation that arbitrary colors can be converted into.
///
/// Models are plain values; a generic model is built on demand for each
/// pixel format rather than looked up in a shared table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorModel {
    Gray,
    Gray16,
    Rgba,
    Rgba64,
    Nrgba,
    Nrgba64,
    Generic(PixelFormat),
}

impl ColorModel {
    pub const fn generic(channels: usize, kind: ElementKind) -> Self {
        ColorModel::Generic(PixelFormat::new(channels, kind))
    }

    pub fn convert(&self, c: &ColorValue) -> ColorValue {
        match self {
            ColorModel::Gray => Gray::from_color(c).into(),
            ColorModel::Gray16 => Gray16::from_color(c).into(),
            ColorModel::Rgba => Rgba::from_color(c).into(),
            ColorModel::Rgba64 => Rgba64::from_color(c).into(),
            ColorModel::Nrgba => Nrgba::from_color(c).into(),
            ColorModel::Nrgba64 => Nrgba64::from_color(c).into(),
            ColorModel::Generic(format) => {
                color_model_convert(format.channels, format.kind, c).into()
            }
        }
    }
}
