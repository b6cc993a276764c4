//! Common utilities module
//!
//! This module contains the error type and the integer geometry shared by
//! the color and image modules.

pub mod error;
pub mod geometry;

pub use error::{PixelError, Result};
pub use geometry::{Point, Rect};
