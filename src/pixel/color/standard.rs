//! Fixed-layout gray and RGBA colors.
//!
//! Their expansion and conversion arithmetic is bit-exact with the usual
//! standard-library definitions, which the generic color relies on.

use super::Color;

/// 8-bit luminance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Gray {
    pub y: u8,
}

/// 16-bit luminance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Gray16 {
    pub y: u16,
}

/// Alpha-premultiplied 8-bit RGBA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Alpha-premultiplied 16-bit RGBA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba64 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

/// Straight (non-premultiplied) 8-bit RGBA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nrgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Straight (non-premultiplied) 16-bit RGBA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nrgba64 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

/// Replicates an 8-bit sample into both bytes of a 16-bit one.
#[inline]
const fn widen(v: u8) -> u32 {
    let v = v as u32;
    v | v << 8
}

/// Rec. 601 luma of a premultiplied RGBA expansion, in 16.16 fixed point.
#[inline]
fn luma(c: &(impl Color + ?Sized)) -> u32 {
    let (r, g, b, _) = c.rgba();
    19595 * r + 38470 * g + 7471 * b + (1 << 15)
}

impl Gray {
    pub fn from_color(c: &(impl Color + ?Sized)) -> Self {
        Self { y: (luma(c) >> 24) as u8 }
    }
}

impl Gray16 {
    pub fn from_color(c: &(impl Color + ?Sized)) -> Self {
        Self { y: (luma(c) >> 16) as u16 }
    }
}

impl Rgba {
    pub fn from_color(c: &(impl Color + ?Sized)) -> Self {
        let (r, g, b, a) = c.rgba();
        Self {
            r: (r >> 8) as u8,
            g: (g >> 8) as u8,
            b: (b >> 8) as u8,
            a: (a >> 8) as u8,
        }
    }
}

impl Rgba64 {
    pub fn from_color(c: &(impl Color + ?Sized)) -> Self {
        let (r, g, b, a) = c.rgba();
        Self {
            r: r as u16,
            g: g as u16,
            b: b as u16,
            a: a as u16,
        }
    }
}

/// Undoes alpha premultiplication of a 16-bit expansion.
fn unpremultiply(c: &(impl Color + ?Sized)) -> (u32, u32, u32, u32) {
    let (r, g, b, a) = c.rgba();
    match a {
        0xffff => (r, g, b, a),
        0 => (0, 0, 0, 0),
        _ => ((r * 0xffff) / a, (g * 0xffff) / a, (b * 0xffff) / a, a),
    }
}

impl Nrgba {
    pub fn from_color(c: &(impl Color + ?Sized)) -> Self {
        let (r, g, b, a) = unpremultiply(c);
        Self {
            r: (r >> 8) as u8,
            g: (g >> 8) as u8,
            b: (b >> 8) as u8,
            a: (a >> 8) as u8,
        }
    }
}

impl Nrgba64 {
    pub fn from_color(c: &(impl Color + ?Sized)) -> Self {
        let (r, g, b, a) = unpremultiply(c);
        Self {
            r: r as u16,
            g: g as u16,
            b: b as u16,
            a: a as u16,
        }
    }
}

impl Color for Gray {
    fn rgba(&self) -> (u32, u32, u32, u32) {
        let y = widen(self.y);
        (y, y, y, 0xffff)
    }
}

impl Color for Gray16 {
    fn rgba(&self) -> (u32, u32, u32, u32) {
        let y = self.y as u32;
        (y, y, y, 0xffff)
    }
}

impl Color for Rgba {
    fn rgba(&self) -> (u32, u32, u32, u32) {
        (widen(self.r), widen(self.g), widen(self.b), widen(self.a))
    }
}

impl Color for Rgba64 {
    fn rgba(&self) -> (u32, u32, u32, u32) {
        (self.r as u32, self.g as u32, self.b as u32, self.a as u32)
    }
}

impl Color for Nrgba {
    fn rgba(&self) -> (u32, u32, u32, u32) {
        let a = self.a as u32;
        (
            widen(self.r) * a / 0xff,
            widen(self.g) * a / 0xff,
            widen(self.b) * a / 0xff,
            widen(self.a),
        )
    }
}

impl Color for Nrgba64 {
    fn rgba(&self) -> (u32, u32, u32, u32) {
        let a = self.a as u32;
        (
            self.r as u32 * a / 0xffff,
            self.g as u32 * a / 0xffff,
            self.b as u32 * a / 0xffff,
            a,
        )
    }
}
