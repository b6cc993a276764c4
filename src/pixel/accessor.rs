//! Typed access to tightly packed channel bytes.
//!
//! Every multi-byte element is stored big-endian, matching the byte pairs
//! used by the 16-bit color paths. Reads go through an `f64` intermediate,
//! so 64-bit integers and complex values lose precision on the way.

use crate::pixel::kind::ElementKind;

/// Indexed get/set of channel values over a pixel's bytes.
///
/// Indices are channel indices, not byte offsets. An index past the end of
/// the buffer is a caller bug and panics. `ElementKind::Invalid` has no
/// width: reads return 0.0 and writes do nothing.
pub trait PixelAccess {
    /// Decodes channel `index` as `kind`, widened to `f64`. Complex kinds
    /// yield their real part.
    fn value(&self, index: usize, kind: ElementKind) -> f64;

    /// Encodes `value` into channel `index` as `kind`.
    ///
    /// Integer kinds truncate toward zero and keep the low bits of the
    /// target width, so `70000.0` written as `uint16` becomes `4464`.
    /// Complex kinds store `value` as the real part with a zero imaginary
    /// part.
    fn set_value(&mut self, index: usize, kind: ElementKind, value: f64);

    /// Reinterprets the bytes as consecutive big-endian `u16` values. A
    /// trailing odd byte is ignored.
    fn u16s(&self) -> Vec<u16>;
}

fn array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[..N]);
    out
}

/// Narrows `value` to an unsigned 16-bit channel the way [`PixelAccess::set_value`]
/// narrows it for `uint16`.
pub fn truncate_u16(value: f64) -> u16 {
    value as i64 as u16
}

impl PixelAccess for [u8] {
    fn value(&self, index: usize, kind: ElementKind) -> f64 {
        let size = kind.size();
        let b = &self[index * size..(index + 1) * size];
        match kind {
            ElementKind::Invalid => 0.0,
            ElementKind::I8 => b[0] as i8 as f64,
            ElementKind::I16 => i16::from_be_bytes(array(b)) as f64,
            ElementKind::I32 => i32::from_be_bytes(array(b)) as f64,
            ElementKind::I64 => i64::from_be_bytes(array(b)) as f64,
            ElementKind::U8 => b[0] as f64,
            ElementKind::U16 => u16::from_be_bytes(array(b)) as f64,
            ElementKind::U32 => u32::from_be_bytes(array(b)) as f64,
            ElementKind::U64 => u64::from_be_bytes(array(b)) as f64,
            ElementKind::F32 | ElementKind::Complex64 => f32::from_be_bytes(array(b)) as f64,
            ElementKind::F64 | ElementKind::Complex128 => f64::from_be_bytes(array(b)),
        }
    }

    fn set_value(&mut self, index: usize, kind: ElementKind, value: f64) {
        let size = kind.size();
        let b = &mut self[index * size..(index + 1) * size];
        match kind {
            ElementKind::Invalid => {}
            ElementKind::I8 => b[0] = value as i64 as i8 as u8,
            ElementKind::I16 => b.copy_from_slice(&(value as i64 as i16).to_be_bytes()),
            ElementKind::I32 => b.copy_from_slice(&(value as i64 as i32).to_be_bytes()),
            ElementKind::I64 => b.copy_from_slice(&(value as i64).to_be_bytes()),
            ElementKind::U8 => b[0] = value as i64 as u8,
            ElementKind::U16 => b.copy_from_slice(&truncate_u16(value).to_be_bytes()),
            ElementKind::U32 => b.copy_from_slice(&(value as i64 as u32).to_be_bytes()),
            ElementKind::U64 => b.copy_from_slice(&(value as u64).to_be_bytes()),
            ElementKind::F32 => b.copy_from_slice(&(value as f32).to_be_bytes()),
            ElementKind::F64 => b.copy_from_slice(&value.to_be_bytes()),
            ElementKind::Complex64 => {
                let (re, im) = b.split_at_mut(4);
                re.copy_from_slice(&(value as f32).to_be_bytes());
                im.fill(0);
            }
            ElementKind::Complex128 => {
                let (re, im) = b.split_at_mut(8);
                re.copy_from_slice(&value.to_be_bytes());
                im.fill(0);
            }
        }
    }

    fn u16s(&self) -> Vec<u16> {
        self.chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect()
    }
}
