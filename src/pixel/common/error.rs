use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PixelError {
    #[error("Pixel has {actual} bytes but {channels} channels of {kind} need {expected}")]
    PixelLength {
        channels: usize,
        kind: String,
        expected: usize,
        actual: usize,
    },

    #[error("Pixel buffer too small: need {expected} bytes, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },

    #[error("Stride of {stride} bytes is shorter than a {row}-byte row")]
    InvalidStride { stride: usize, row: usize },

    #[error("Unsupported element kind: {0}")]
    UnsupportedKind(String),

    #[error("Unsupported channel count: {0}")]
    UnsupportedChannels(usize),

    #[error("Invalid pixel format: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, PixelError>;
