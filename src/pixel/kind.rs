//! Numeric element kinds for pixel channels

use std::fmt;
use std::str::FromStr;

use crate::pixel::common::error::PixelError;

/// The numeric type stored in each channel of a pixel.
///
/// `Invalid` stands for a tag with no numeric representation. It has a byte
/// width of zero, so buffers sized from it carry no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ElementKind {
    #[default]
    Invalid,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    /// Two `f32` values, real part first.
    Complex64,
    /// Two `f64` values, real part first.
    Complex128,
}

impl ElementKind {
    /// Every kind with a non-zero width.
    pub const SUPPORTED: [ElementKind; 12] = [
        ElementKind::I8,
        ElementKind::I16,
        ElementKind::I32,
        ElementKind::I64,
        ElementKind::U8,
        ElementKind::U16,
        ElementKind::U32,
        ElementKind::U64,
        ElementKind::F32,
        ElementKind::F64,
        ElementKind::Complex64,
        ElementKind::Complex128,
    ];

    /// Width of one element in bytes, 0 for `Invalid`.
    pub const fn size(self) -> usize {
        match self {
            ElementKind::I8 | ElementKind::U8 => 1,
            ElementKind::I16 | ElementKind::U16 => 2,
            ElementKind::I32 | ElementKind::U32 | ElementKind::F32 => 4,
            ElementKind::I64 | ElementKind::U64 | ElementKind::F64 | ElementKind::Complex64 => 8,
            ElementKind::Complex128 => 16,
            ElementKind::Invalid => 0,
        }
    }

    pub const fn is_supported(self) -> bool {
        self.size() != 0
    }

    pub const fn name(self) -> &'static str {
        match self {
            ElementKind::Invalid => "invalid",
            ElementKind::I8 => "int8",
            ElementKind::I16 => "int16",
            ElementKind::I32 => "int32",
            ElementKind::I64 => "int64",
            ElementKind::U8 => "uint8",
            ElementKind::U16 => "uint16",
            ElementKind::U32 => "uint32",
            ElementKind::U64 => "uint64",
            ElementKind::F32 => "float32",
            ElementKind::F64 => "float64",
            ElementKind::Complex64 => "complex64",
            ElementKind::Complex128 => "complex128",
        }
    }
}

pub const fn size_of_kind(kind: ElementKind) -> usize {
    kind.size()
}

/// Bytes taken by one pixel of `channels` elements of `kind`.
pub const fn size_of_pixel(channels: usize, kind: ElementKind) -> usize {
    channels * kind.size()
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = PixelError;

    /// Accepts the long names (`uint16`, `float32`, ...) and the Rust
    /// primitive spellings (`u16`, `f32`, ...), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "int8" | "i8" => ElementKind::I8,
            "int16" | "i16" => ElementKind::I16,
            "int32" | "i32" => ElementKind::I32,
            "int64" | "i64" => ElementKind::I64,
            "uint8" | "u8" => ElementKind::U8,
            "uint16" | "u16" => ElementKind::U16,
            "uint32" | "u32" => ElementKind::U32,
            "uint64" | "u64" => ElementKind::U64,
            "float32" | "f32" => ElementKind::F32,
            "float64" | "f64" => ElementKind::F64,
            "complex64" | "c64" => ElementKind::Complex64,
            "complex128" | "c128" => ElementKind::Complex128,
            _ => return Err(PixelError::UnsupportedKind(s.to_string())),
        };
        Ok(kind)
    }
}
