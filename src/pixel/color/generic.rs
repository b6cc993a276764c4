//! Colors whose channel count and element kind are only known at runtime.

use tracing::trace;

use super::standard::{Gray, Gray16, Nrgba, Nrgba64};
use super::{Color, ColorValue};
use crate::pixel::accessor::{PixelAccess, truncate_u16};
use crate::pixel::common::error::{PixelError, Result};
use crate::pixel::format::PixelFormat;
use crate::pixel::kind::{ElementKind, size_of_pixel};

/// One pixel of `channels` elements of `kind`, packed big-endian into `pix`.
///
/// An empty `pix` is the zero color regardless of `channels` and `kind`; it
/// expands to transparent black.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenericColor {
    pub channels: usize,
    pub kind: ElementKind,
    pub pix: Vec<u8>,
}

impl GenericColor {
    /// A zero-filled pixel of the given layout.
    pub fn new(channels: usize, kind: ElementKind) -> Self {
        Self {
            channels,
            kind,
            pix: vec![0; size_of_pixel(channels, kind)],
        }
    }

    /// The zero color of the given layout, carrying no bytes.
    pub fn empty(channels: usize, kind: ElementKind) -> Self {
        Self {
            channels,
            kind,
            pix: Vec::new(),
        }
    }

    /// Wraps existing bytes, checking that they hold exactly one pixel. An
    /// empty buffer is accepted as the zero color.
    pub fn from_bytes(channels: usize, kind: ElementKind, pix: Vec<u8>) -> Result<Self> {
        let expected = size_of_pixel(channels, kind);
        if !pix.is_empty() && pix.len() != expected {
            return Err(PixelError::PixelLength {
                channels,
                kind: kind.to_string(),
                expected,
                actual: pix.len(),
            });
        }
        Ok(Self { channels, kind, pix })
    }

    pub fn format(&self) -> PixelFormat {
        PixelFormat::new(self.channels, self.kind)
    }

    pub fn is_empty(&self) -> bool {
        self.pix.is_empty()
    }

    /// Channel `index` decoded through `f64`.
    pub fn value(&self, index: usize) -> f64 {
        self.pix.value(index, self.kind)
    }

    pub fn set_value(&mut self, index: usize, value: f64) {
        let kind = self.kind;
        self.pix.set_value(index, kind, value);
    }

    // 2 to 4 channels; missing blue and alpha are forced to full scale.
    fn rgba_channels(&self) -> (u32, u32, u32, u32) {
        let present = |i: usize| i < self.channels;
        match self.kind {
            ElementKind::U8 => {
                let p = &self.pix;
                let ch = |i: usize| if present(i) { p[i] } else { 0xff };
                Nrgba { r: ch(0), g: ch(1), b: ch(2), a: ch(3) }.rgba()
            }
            ElementKind::U16 => {
                let words = self.pix.u16s();
                let ch = |i: usize| if present(i) { words[i] } else { 0xffff };
                Nrgba64 { r: ch(0), g: ch(1), b: ch(2), a: ch(3) }.rgba()
            }
            kind => {
                let ch = |i: usize| {
                    if present(i) {
                        truncate_u16(self.pix.value(i, kind))
                    } else {
                        0xffff
                    }
                };
                Nrgba64 { r: ch(0), g: ch(1), b: ch(2), a: ch(3) }.rgba()
            }
        }
    }
}

impl Color for GenericColor {
    /// One channel is luminance, two are red and green, three are RGB and
    /// four are straight RGBA, premultiplied on the way out. Any other
    /// channel count expands to transparent black.
    fn rgba(&self) -> (u32, u32, u32, u32) {
        if self.pix.is_empty() {
            return (0, 0, 0, 0);
        }
        match self.channels {
            1 => match self.kind {
                ElementKind::U8 => Gray { y: self.pix[0] }.rgba(),
                ElementKind::U16 => Gray16 {
                    y: u16::from_be_bytes([self.pix[0], self.pix[1]]),
                }
                .rgba(),
                kind => Gray16 { y: truncate_u16(self.pix.value(0, kind)) }.rgba(),
            },
            2..=4 => self.rgba_channels(),
            _ => (0, 0, 0, 0),
        }
    }
}

/// Converts `c` into a [`GenericColor`] with the given layout.
///
/// A generic source with the same kind has its bytes copied as-is, even when
/// the channel counts differ: a 3-channel `uint8` color converted to one
/// channel keeps only its red byte, and the reverse leaves green and blue at
/// zero instead of replicating gray. A generic source of another kind is
/// remapped channel by channel without rescaling. Every other source goes
/// through its RGBA expansion.
pub fn color_model_convert(channels: usize, kind: ElementKind, c: &ColorValue) -> GenericColor {
    let mut dst = GenericColor::new(channels, kind);

    if let ColorValue::Generic(src) = c {
        if src.kind == kind {
            let n = src.pix.len().min(dst.pix.len());
            dst.pix[..n].copy_from_slice(&src.pix[..n]);
        } else if !src.pix.is_empty() {
            for i in 0..src.channels.min(channels) {
                let v = src.pix.value(i, src.kind);
                dst.pix.set_value(i, kind, v);
            }
        }
        return dst;
    }

    match (channels, kind) {
        (1, ElementKind::U8) => {
            dst.pix[0] = Gray::from_color(c).y;
        }
        (1, ElementKind::U16) => {
            dst.pix.copy_from_slice(&Gray16::from_color(c).y.to_be_bytes());
        }
        (3 | 4, ElementKind::U8) => {
            let (r, g, b, a) = c.rgba();
            for (slot, v) in dst.pix.iter_mut().zip([r, g, b, a]) {
                *slot = (v >> 8) as u8;
            }
        }
        (3 | 4, ElementKind::U16) => {
            let (r, g, b, a) = c.rgba();
            for (pair, v) in dst.pix.chunks_exact_mut(2).zip([r, g, b, a]) {
                pair.copy_from_slice(&(v as u16).to_be_bytes());
            }
        }
        _ => {
            trace!(channels, %kind, "no direct layout, writing rgba expansion");
            let (r, g, b, a) = c.rgba();
            for (i, v) in [r, g, b, a].into_iter().enumerate().take(channels) {
                dst.pix.set_value(i, kind, v as f64);
            }
        }
    }
    dst
}
