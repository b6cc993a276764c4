//! 48-bit RGB image: three big-endian `u16` channels per pixel, no alpha.

use tracing::{debug, instrument};

use super::{RasterImage, RasterImageMut, required_len};
use crate::pixel::color::{Color, ColorModel, ColorValue, Rgba64};
use crate::pixel::common::error::{PixelError, Result};
use crate::pixel::common::Rect;

/// Bytes per pixel.
const PIXEL_SIZE: usize = 6;

/// An RGB image with 16 bits per channel.
///
/// `P` is the pixel storage: an owned `Vec<u8>` for images created here, or a
/// borrowed slice for views returned by [`sub_image`](Self::sub_image) and
/// [`sub_image_mut`](Self::sub_image_mut), which share pixels with their
/// parent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rgb48Image<P = Vec<u8>> {
    pix: P,
    stride: usize,
    rect: Rect,
}

impl Rgb48Image<Vec<u8>> {
    /// A black image covering `rect`.
    pub fn new(rect: Rect) -> Self {
        let stride = PIXEL_SIZE * rect.width();
        Self {
            pix: vec![0; stride * rect.height()],
            stride,
            rect,
        }
    }

    /// Copies the RGB part of every pixel of `m`. Colors are taken from the
    /// premultiplied expansion, so transparent pixels come out dark.
    #[instrument(skip(m), fields(bounds = %m.bounds()))]
    pub fn from_image<I: RasterImage + ?Sized>(m: &I) -> Self {
        let bounds = m.bounds();
        let mut rgb = Self::new(bounds);
        for p in bounds.points() {
            let (r, g, b, _) = m.at(p.x, p.y).rgba();
            rgb.set_rgb48(p.x, p.y, [r as u16, g as u16, b as u16]);
        }
        debug!(width = rgb.rect.width(), height = rgb.rect.height(), "RGB48 copy complete");
        rgb
    }
}

impl<P: AsRef<[u8]>> Rgb48Image<P> {
    /// Wraps existing pixels laid out row by row, `stride` bytes apart.
    pub fn from_raw(pix: P, stride: usize, rect: Rect) -> Result<Self> {
        let row = PIXEL_SIZE * rect.width();
        if !rect.is_empty() && stride < row {
            return Err(PixelError::InvalidStride { stride, row });
        }
        let expected = required_len(rect, stride, PIXEL_SIZE);
        let actual = pix.as_ref().len();
        if actual < expected {
            return Err(PixelError::BufferTooSmall { expected, actual });
        }
        debug!(%rect, stride, "Wrapped RGB48 buffer");
        Ok(Self { pix, stride, rect })
    }

    pub fn pix(&self) -> &[u8] {
        self.pix.as_ref()
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn into_raw(self) -> P {
        self.pix
    }

    /// Index of the first byte of the pixel at `(x, y)`. The point must lie
    /// inside the bounds.
    pub fn pix_offset(&self, x: i32, y: i32) -> usize {
        (y - self.rect.min.y) as usize * self.stride + (x - self.rect.min.x) as usize * PIXEL_SIZE
    }

    /// The raw channels at `(x, y)`, or zeros outside the bounds.
    pub fn rgb48_at(&self, x: i32, y: i32) -> [u16; 3] {
        if !self.rect.contains(x, y) {
            return [0; 3];
        }
        let i = self.pix_offset(x, y);
        let p = &self.pix.as_ref()[i..i + PIXEL_SIZE];
        [
            u16::from_be_bytes([p[0], p[1]]),
            u16::from_be_bytes([p[2], p[3]]),
            u16::from_be_bytes([p[4], p[5]]),
        ]
    }

    /// A view of the part of the image inside `r`, sharing its pixels.
    pub fn sub_image(&self, r: Rect) -> Rgb48Image<&[u8]> {
        let r = r.intersect(self.rect);
        if r.is_empty() {
            return Rgb48Image::default();
        }
        let i = self.pix_offset(r.min.x, r.min.y);
        Rgb48Image {
            pix: &self.pix.as_ref()[i..],
            stride: self.stride,
            rect: r,
        }
    }
}

impl<P: AsRef<[u8]> + AsMut<[u8]>> Rgb48Image<P> {
    /// Stores raw channels at `(x, y)`; ignored outside the bounds.
    pub fn set_rgb48(&mut self, x: i32, y: i32, c: [u16; 3]) {
        if !self.rect.contains(x, y) {
            return;
        }
        let i = self.pix_offset(x, y);
        let p = &mut self.pix.as_mut()[i..i + PIXEL_SIZE];
        for (pair, v) in p.chunks_exact_mut(2).zip(c) {
            pair.copy_from_slice(&v.to_be_bytes());
        }
    }

    pub fn sub_image_mut(&mut self, r: Rect) -> Rgb48Image<&mut [u8]> {
        let r = r.intersect(self.rect);
        if r.is_empty() {
            return Rgb48Image::default();
        }
        let i = self.pix_offset(r.min.x, r.min.y);
        Rgb48Image {
            pix: &mut self.pix.as_mut()[i..],
            stride: self.stride,
            rect: r,
        }
    }
}

impl<P: AsRef<[u8]>> RasterImage for Rgb48Image<P> {
    fn color_model(&self) -> ColorModel {
        ColorModel::Rgba64
    }

    fn bounds(&self) -> Rect {
        self.rect
    }

    fn at(&self, x: i32, y: i32) -> ColorValue {
        if !self.rect.contains(x, y) {
            return Rgba64::default().into();
        }
        let [r, g, b] = self.rgb48_at(x, y);
        Rgba64 { r, g, b, a: 0xffff }.into()
    }

    fn opaque(&self) -> bool {
        true
    }
}

impl<P: AsRef<[u8]> + AsMut<[u8]>> RasterImageMut for Rgb48Image<P> {
    fn set(&mut self, x: i32, y: i32, c: &ColorValue) {
        let c = Rgba64::from_color(c);
        self.set_rgb48(x, y, [c.r, c.g, c.b]);
    }
}
