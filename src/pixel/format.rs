//! Pixel format configuration types

use std::fmt;
use std::str::FromStr;

use crate::pixel::color::ColorModel;
use crate::pixel::common::error::{PixelError, Result};
use crate::pixel::kind::{ElementKind, size_of_pixel};

/// Layout of one pixel: how many channels, and the numeric kind of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelFormat {
    /// Number of channels per pixel
    pub channels: usize,
    /// Element kind shared by every channel
    pub kind: ElementKind,
}

impl Default for PixelFormat {
    fn default() -> Self {
        Self::RGBA8
    }
}

impl PixelFormat {
    pub const GRAY8: Self = Self::new(1, ElementKind::U8);
    pub const GRAY16: Self = Self::new(1, ElementKind::U16);
    pub const RGB8: Self = Self::new(3, ElementKind::U8);
    /// 48-bit RGB, 16 bits per channel.
    pub const RGB16: Self = Self::new(3, ElementKind::U16);
    pub const RGBA8: Self = Self::new(4, ElementKind::U8);
    pub const RGBA16: Self = Self::new(4, ElementKind::U16);

    pub const fn new(channels: usize, kind: ElementKind) -> Self {
        Self { channels, kind }
    }

    pub fn builder() -> PixelFormatBuilder {
        PixelFormatBuilder::default()
    }

    /// Bytes per pixel.
    pub const fn pixel_size(&self) -> usize {
        size_of_pixel(self.channels, self.kind)
    }

    pub const fn model(&self) -> ColorModel {
        ColorModel::Generic(*self)
    }

    /// Rejects formats that cannot hold any data. Conversions themselves
    /// accept these and degrade to zero colors; containers built from
    /// caller-supplied buffers call this first.
    pub fn validate(&self) -> Result<()> {
        if !self.kind.is_supported() {
            return Err(PixelError::UnsupportedKind(self.kind.to_string()));
        }
        if self.channels == 0 {
            return Err(PixelError::UnsupportedChannels(self.channels));
        }
        Ok(())
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.channels, self.kind)
    }
}

impl FromStr for PixelFormat {
    type Err = PixelError;

    /// Parses `<channels>x<kind>`, e.g. `3xuint16` or `4xf32`.
    fn from_str(s: &str) -> Result<Self> {
        let (channels, kind) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| PixelError::InvalidFormat(s.to_string()))?;
        let channels = channels
            .parse::<usize>()
            .map_err(|e| PixelError::InvalidFormat(format!("{}: {}", s, e)))?;
        Ok(Self::new(channels, kind.parse()?))
    }
}

/// Builder for PixelFormat
#[derive(Default)]
pub struct PixelFormatBuilder {
    channels: Option<usize>,
    kind: Option<ElementKind>,
}

impl PixelFormatBuilder {
    pub fn channels(mut self, channels: usize) -> Self {
        self.channels = Some(channels);
        self
    }

    pub fn kind(mut self, kind: ElementKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn build(self) -> PixelFormat {
        let default = PixelFormat::default();
        PixelFormat {
            channels: self.channels.unwrap_or(default.channels),
            kind: self.kind.unwrap_or(default.kind),
        }
    }

    /// Like [`build`](Self::build), then [`PixelFormat::validate`].
    pub fn try_build(self) -> Result<PixelFormat> {
        let format = self.build();
        format.validate()?;
        Ok(format)
    }
}
