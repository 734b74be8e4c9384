use log::trace;

use crate::Error;

mod decode;
pub use decode::{decode_f32, decode_f64, decode_i16, decode_i32, decode_u16, decode_u32};

mod encode;
pub use encode::{encode_f32, encode_f64, encode_i16, encode_i32, encode_u16, encode_u32};

mod narrow;
pub use narrow::{
    decode_narrow_i32, decode_narrow_u32, encode_narrow_i32, encode_narrow_u32, Width,
};

pub trait Decode: Sized {
    /// Number of bytes a value occupies in the buffer.
    const SIZE: usize;

    /// # Description
    /// Decode a big-endian value from `buf` starting at `off`.
    ///
    /// # Arguments
    /// * `buf`: The buffer to decode from. It is only read, never written.
    /// * `off`: The offset of the most significant byte.
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] if `buf` holds fewer than `SIZE` bytes from `off`.
    ///
    /// # Returns
    /// The decoded value of type `Self`.
    fn decode_at(buf: &[u8], off: usize) -> Result<Self, Error>;

    /// # Description
    /// Decode a big-endian value from the start of `buf`.
    ///
    /// # Errors
    /// See [`Decode::decode_at`].
    fn decode(buf: &[u8]) -> Result<Self, Error> {
        Self::decode_at(buf, 0)
    }
}

pub trait Encode {
    /// The big-endian representation, most significant byte first.
    type Bytes: AsRef<[u8]>;

    /// # Description
    /// Encode `self` into a new big-endian byte array.
    fn encode(&self) -> Self::Bytes;

    /// # Description
    /// Encode `self` into `buf` starting at `off`.
    ///
    /// Only the bytes covered by the encoded value are written.
    ///
    /// # Arguments
    /// * `buf`: The buffer to encode into.
    /// * `off`: Where the most significant byte is written.
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] if the value does not fit in `buf` at `off`.
    /// Nothing is written in that case.
    fn encode_at(&self, buf: &mut [u8], off: usize) -> Result<(), Error> {
        let bytes = self.encode();
        let bytes = bytes.as_ref();
        let capacity = buf.len();
        let dst = off
            .checked_add(bytes.len())
            .and_then(|end| buf.get_mut(off..end))
            .ok_or_else(|| out_of_bounds(off, bytes.len(), capacity))?;
        dst.copy_from_slice(bytes);
        Ok(())
    }
}

/// Borrow the `len` bytes of `buf` that start at `off`.
pub(crate) fn span(buf: &[u8], off: usize, len: usize) -> Result<&[u8], Error> {
    off.checked_add(len)
        .and_then(|end| buf.get(off..end))
        .ok_or_else(|| out_of_bounds(off, len, buf.len()))
}

/// Copy the `N` bytes of `buf` that start at `off`.
pub(crate) fn read<const N: usize>(buf: &[u8], off: usize) -> Result<[u8; N], Error> {
    let mut bytes = [0u8; N];
    bytes.copy_from_slice(span(buf, off, N)?);
    Ok(bytes)
}

fn out_of_bounds(offset: usize, len: usize, capacity: usize) -> Error {
    trace!("rejecting access of {len} bytes at {offset} in buffer of {capacity}");
    Error::OutOfBounds {
        offset,
        len,
        capacity,
    }
}
