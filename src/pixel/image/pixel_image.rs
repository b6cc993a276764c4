use tracing::{debug, instrument};

use super::{RasterImage, RasterImageMut, required_len};
use crate::pixel::color::{Color, ColorModel, ColorValue, GenericColor, color_model_convert};
use crate::pixel::common::error::{PixelError, Result};
use crate::pixel::common::Rect;
use crate::pixel::format::PixelFormat;

/// An image whose pixels are [`GenericColor`]s of a single [`PixelFormat`],
/// packed without padding inside each row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelImage<P = Vec<u8>> {
    pix: P,
    stride: usize,
    rect: Rect,
    format: PixelFormat,
}

impl PixelImage<Vec<u8>> {
    /// A zero-filled image covering `rect`.
    pub fn new(rect: Rect, format: PixelFormat) -> Self {
        let stride = format.pixel_size() * rect.width();
        Self {
            pix: vec![0; stride * rect.height()],
            stride,
            rect,
            format,
        }
    }

    /// Converts every pixel of `m` into `format`.
    #[instrument(skip(m), fields(bounds = %m.bounds()))]
    pub fn from_image<I: RasterImage + ?Sized>(m: &I, format: PixelFormat) -> Self {
        let bounds = m.bounds();
        let mut img = Self::new(bounds, format);
        for p in bounds.points() {
            img.set(p.x, p.y, &m.at(p.x, p.y));
        }
        debug!(%format, bytes = img.pix.len(), "Pixel image conversion complete");
        img
    }
}

impl<P: AsRef<[u8]>> PixelImage<P> {
    /// Wraps existing pixels laid out row by row, `stride` bytes apart.
    pub fn from_raw(pix: P, stride: usize, rect: Rect, format: PixelFormat) -> Result<Self> {
        format.validate()?;
        let row = format.pixel_size() * rect.width();
        if !rect.is_empty() && stride < row {
            return Err(PixelError::InvalidStride { stride, row });
        }
        let expected = required_len(rect, stride, format.pixel_size());
        let actual = pix.as_ref().len();
        if actual < expected {
            return Err(PixelError::BufferTooSmall { expected, actual });
        }
        debug!(%rect, %format, stride, "Wrapped pixel buffer");
        Ok(Self { pix, stride, rect, format })
    }

    pub fn format(&self) -> PixelFormat {
        self.format
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

    pub fn pix_offset(&self, x: i32, y: i32) -> usize {
        (y - self.rect.min.y) as usize * self.stride
            + (x - self.rect.min.x) as usize * self.format.pixel_size()
    }

    /// The pixel at `(x, y)`, or the byteless zero color outside the bounds.
    pub fn pixel_at(&self, x: i32, y: i32) -> GenericColor {
        let PixelFormat { channels, kind } = self.format;
        if !self.rect.contains(x, y) {
            return GenericColor::empty(channels, kind);
        }
        let i = self.pix_offset(x, y);
        GenericColor {
            channels,
            kind,
            pix: self.pix.as_ref()[i..i + self.format.pixel_size()].to_vec(),
        }
    }

    pub fn sub_image(&self, r: Rect) -> PixelImage<&[u8]> {
        let r = r.intersect(self.rect);
        if r.is_empty() {
            return PixelImage {
                format: self.format,
                ..PixelImage::default()
            };
        }
        let i = self.pix_offset(r.min.x, r.min.y);
        PixelImage {
            pix: &self.pix.as_ref()[i..],
            stride: self.stride,
            rect: r,
            format: self.format,
        }
    }
}

impl<P: AsRef<[u8]> + AsMut<[u8]>> PixelImage<P> {
    /// Stores the bytes of `c` at `(x, y)` without conversion. Bytes beyond
    /// the image's pixel size are dropped and missing ones are left as they
    /// were, so `c` should already be in this image's format.
    pub fn set_pixel(&mut self, x: i32, y: i32, c: &GenericColor) {
        if !self.rect.contains(x, y) {
            return;
        }
        let i = self.pix_offset(x, y);
        let n = c.pix.len().min(self.format.pixel_size());
        self.pix.as_mut()[i..i + n].copy_from_slice(&c.pix[..n]);
    }

    pub fn sub_image_mut(&mut self, r: Rect) -> PixelImage<&mut [u8]> {
        let r = r.intersect(self.rect);
        if r.is_empty() {
            return PixelImage {
                format: self.format,
                ..PixelImage::default()
            };
        }
        let i = self.pix_offset(r.min.x, r.min.y);
        PixelImage {
            pix: &mut self.pix.as_mut()[i..],
            stride: self.stride,
            rect: r,
            format: self.format,
        }
    }
}

impl<P: AsRef<[u8]>> RasterImage for PixelImage<P> {
    fn color_model(&self) -> ColorModel {
        self.format.model()
    }

    fn bounds(&self) -> Rect {
        self.rect
    }

    fn at(&self, x: i32, y: i32) -> ColorValue {
        self.pixel_at(x, y).into()
    }

    /// Scans every pixel; an empty image counts as opaque.
    fn opaque(&self) -> bool {
        self.rect
            .points()
            .all(|p| self.pixel_at(p.x, p.y).rgba().3 == 0xffff)
    }
}

impl<P: AsRef<[u8]> + AsMut<[u8]>> RasterImageMut for PixelImage<P> {
    fn set(&mut self, x: i32, y: i32, c: &ColorValue) {
        if !self.rect.contains(x, y) {
            return;
        }
        let PixelFormat { channels, kind } = self.format;
        let converted = color_model_convert(channels, kind, c);
        self.set_pixel(x, y, &converted);
    }
}
