use log::trace;

use super::{span, Encode};
use crate::Error;

/// Number of bytes a narrowed 32-bit integer occupies, always in `1..=4`.
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash, serde::Deserialize, serde::Serialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Width(u8);

impl Width {
    pub const ONE: Self = Self(1);
    pub const TWO: Self = Self(2);
    pub const THREE: Self = Self(3);
    pub const FOUR: Self = Self(4);

    pub fn new(width: usize) -> Result<Self, Error> {
        match width {
            1..=4 => Ok(Self(width as u8)),
            _ => Err(Error::InvalidWidth(width)),
        }
    }

    pub const fn get(self) -> usize {
        self.0 as usize
    }

    // Leading bytes of the full 4-byte encoding that narrowing drops.
    const fn discarded(self) -> usize {
        4 - self.get()
    }
}

impl TryFrom<usize> for Width {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u8> for Width {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value.into())
    }
}

impl From<Width> for u8 {
    fn from(val: Width) -> Self {
        val.0
    }
}

/// # Description
/// Encode `value` big-endian in only `width` bytes.
///
/// # Errors
/// Returns [`Error::Overflow`] if any of the dropped leading bytes is non-zero.
///
/// # Returns
/// The low `width` bytes of the big-endian encoding.
pub fn encode_narrow_u32(value: u32, width: Width) -> Result<Vec<u8>, Error> {
    let bytes = value.encode();
    let (discarded, kept) = bytes.split_at(width.discarded());
    if discarded.iter().any(|&b| b != 0) {
        return Err(overflow(value.into(), width));
    }
    Ok(kept.to_vec())
}

/// # Description
/// Encode `value` big-endian two's complement in only `width` bytes.
///
/// Every dropped leading byte must be the sign extension of the most
/// significant kept byte, so that [`decode_narrow_i32`] restores `value`.
///
/// # Errors
/// Returns [`Error::Overflow`] if `value` is outside the signed range of `width` bytes.
///
/// # Returns
/// The low `width` bytes of the big-endian encoding.
pub fn encode_narrow_i32(value: i32, width: Width) -> Result<Vec<u8>, Error> {
    let bytes = value.encode();
    let (discarded, kept) = bytes.split_at(width.discarded());
    let fill = sign_fill(kept[0]);
    if discarded.iter().any(|&b| b != fill) {
        return Err(overflow(value.into(), width));
    }
    Ok(kept.to_vec())
}

/// Decode `width` big-endian bytes at `off` as a zero-extended `u32`.
pub fn decode_narrow_u32(buf: &[u8], off: usize, width: Width) -> Result<u32, Error> {
    let src = span(buf, off, width.get())?;
    let mut bytes = [0u8; 4];
    bytes[width.discarded()..].copy_from_slice(src);
    Ok(u32::from_be_bytes(bytes))
}

/// Decode `width` big-endian bytes at `off` as a sign-extended `i32`.
pub fn decode_narrow_i32(buf: &[u8], off: usize, width: Width) -> Result<i32, Error> {
    let src = span(buf, off, width.get())?;
    let mut bytes = [sign_fill(src[0]); 4];
    bytes[width.discarded()..].copy_from_slice(src);
    Ok(i32::from_be_bytes(bytes))
}

const fn sign_fill(msb: u8) -> u8 {
    if msb & 0x80 == 0 {
        0x00
    } else {
        0xFF
    }
}

fn overflow(value: i64, width: Width) -> Error {
    trace!("{value} does not fit in {} bytes", width.get());
    Error::Overflow {
        value,
        width: width.get(),
    }
}
