//! Color values and color models
//!
//! Every color reports itself as a premultiplied RGBA quadruple with 16 bits
//! of range per channel, held in `u32` so that `v * a` style arithmetic does
//! not overflow. Models convert arbitrary colors into their own
//! representation.

mod generic;
mod model;
mod standard;


use std::fmt;
use std::sync::Arc;

pub use generic::{GenericColor, color_model_convert};
pub use model::ColorModel;
pub use standard::{Gray, Gray16, Nrgba, Nrgba64, Rgba, Rgba64};

/// Anything that can be expanded to premultiplied 16-bit RGBA.
pub trait Color: fmt::Debug + Send + Sync {
    /// Red, green, blue and alpha in `0..=0xFFFF`, with red, green and blue
    /// already multiplied by alpha.
    fn rgba(&self) -> (u32, u32, u32, u32);
}

/// A color handed to a model or an image.
///
/// Conversions only need to know whether the value is a [`GenericColor`]
/// (whose raw channels can be copied or remapped) or something that can
/// merely be expanded to RGBA.
#[derive(Debug, Clone)]
pub enum ColorValue {
    Generic(GenericColor),
    Gray(Gray),
    Gray16(Gray16),
    Rgba(Rgba),
    Rgba64(Rgba64),
    Nrgba(Nrgba),
    Nrgba64(Nrgba64),
    /// A caller-defined color type.
    Other(Arc<dyn Color>),
}

impl ColorValue {
    pub fn other(color: impl Color + 'static) -> Self {
        ColorValue::Other(Arc::new(color))
    }

    pub fn as_generic(&self) -> Option<&GenericColor> {
        match self {
            ColorValue::Generic(c) => Some(c),
            _ => None,
        }
    }
}

impl Color for ColorValue {
    fn rgba(&self) -> (u32, u32, u32, u32) {
        match self {
            ColorValue::Generic(c) => c.rgba(),
            ColorValue::Gray(c) => c.rgba(),
            ColorValue::Gray16(c) => c.rgba(),
            ColorValue::Rgba(c) => c.rgba(),
            ColorValue::Rgba64(c) => c.rgba(),
            ColorValue::Nrgba(c) => c.rgba(),
            ColorValue::Nrgba64(c) => c.rgba(),
            ColorValue::Other(c) => c.rgba(),
        }
    }
}

macro_rules! impl_into_color_value {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for ColorValue {
                fn from(c: $variant) -> Self {
                    ColorValue::$variant(c)
                }
            }
        )*
    };
}

impl_into_color_value!(Gray, Gray16, Rgba, Rgba64, Nrgba, Nrgba64);

impl From<GenericColor> for ColorValue {
    fn from(c: GenericColor) -> Self {
        ColorValue::Generic(c)
    }
}
