use super::{read, Decode};
use crate::Error;

macro_rules! decode_int {
    ($($ty:ty),*) => {
        $(
            impl Decode for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                fn decode_at(buf: &[u8], off: usize) -> Result<Self, Error> {
                    Ok(<$ty>::from_be_bytes(read(buf, off)?))
                }
            }
        )*
    };
}

decode_int!(u16, i16, u32, i32);

impl Decode for f32 {
    const SIZE: usize = std::mem::size_of::<f32>();

    fn decode_at(buf: &[u8], off: usize) -> Result<Self, Error> {
        u32::decode_at(buf, off).map(f32::from_bits)
    }
}

impl Decode for f64 {
    const SIZE: usize = std::mem::size_of::<f64>();

    fn decode_at(buf: &[u8], off: usize) -> Result<Self, Error> {
        Ok(f64::from_bits(u64::from_be_bytes(read(buf, off)?)))
    }
}

/// Decode a big-endian `u16`: `buf[off] << 8 | buf[off + 1]`.
pub fn decode_u16(buf: &[u8], off: usize) -> Result<u16, Error> {
    u16::decode_at(buf, off)
}

/// Decode a big-endian two's complement `i16`.
pub fn decode_i16(buf: &[u8], off: usize) -> Result<i16, Error> {
    i16::decode_at(buf, off)
}

pub fn decode_u32(buf: &[u8], off: usize) -> Result<u32, Error> {
    u32::decode_at(buf, off)
}

pub fn decode_i32(buf: &[u8], off: usize) -> Result<i32, Error> {
    i32::decode_at(buf, off)
}

/// # Description
/// Decode a big-endian IEEE-754 single precision float.
///
/// The four bytes at `off` are read as a big-endian `u32` and reinterpreted
/// bit for bit. The caller's buffer is never touched: earlier converters
/// reversed the span in place inside the caller's buffer and then decoded an
/// unreversed copy, which both corrupted the buffer and returned the wrong
/// value on little-endian hosts. This function does neither.
///
/// # Errors
/// Returns [`Error::OutOfBounds`] if fewer than four bytes follow `off`.
pub fn decode_f32(buf: &[u8], off: usize) -> Result<f32, Error> {
    f32::decode_at(buf, off)
}

/// # Description
/// Decode a big-endian IEEE-754 double precision float.
///
/// Same contract as [`decode_f32`] over eight bytes, including the
/// guarantee that `buf` is left as it was.
///
/// # Errors
/// Returns [`Error::OutOfBounds`] if fewer than eight bytes follow `off`.
pub fn decode_f64(buf: &[u8], off: usize) -> Result<f64, Error> {
    f64::decode_at(buf, off)
}

#[cfg(test)]
mod tests {

    use coverage_helper::test;
    use matches::assert_matches;

    use crate::{codec::Decode, Error};

    use super::{decode_f32, decode_f64, decode_i16, decode_i32, decode_u16, decode_u32};

    #[test]
    fn test_decode_u16() {
        assert_eq!(decode_u16(&[0x12, 0x34], 0).unwrap(), 0x1234);
        assert_eq!(decode_u16(&[0x00, 0xAB, 0xCD], 1).unwrap(), 0xABCD);
        assert_eq!(u16::decode(&[0xFF, 0xFF]).unwrap(), u16::MAX);
    }

    #[test]
    fn test_decode_i16() {
        assert_eq!(decode_i16(&[0xFF, 0xFF], 0).unwrap(), -1);
        assert_eq!(decode_i16(&[0x80, 0x00], 0).unwrap(), i16::MIN);
        assert_eq!(decode_i16(&[0x7F, 0xFF], 0).unwrap(), i16::MAX);
    }

    #[test]
    fn test_decode_u32() {
        assert_eq!(decode_u32(&[0x00, 0x00, 0x01, 0x00], 0).unwrap(), 256);
        assert_eq!(
            decode_u32(&[0xEE, 0xDE, 0xAD, 0xBE, 0xEF], 1).unwrap(),
            0xDEAD_BEEF
        );
    }

    #[test]
    fn test_decode_i32() {
        assert_eq!(decode_i32(&[0xFF, 0xFF, 0xFF, 0xFE], 0).unwrap(), -2);
        assert_eq!(decode_i32(&[0x80, 0x00, 0x00, 0x00], 0).unwrap(), i32::MIN);
    }

    #[test]
    fn test_decode_f32() {
        assert_eq!(decode_f32(&[0x3F, 0x80, 0x00, 0x00], 0).unwrap(), 1.0);
        assert_eq!(decode_f32(&[0x00, 0xC0, 0x00, 0x00, 0x00], 1).unwrap(), -2.0);
        assert!(decode_f32(&[0x7F, 0xC0, 0x00, 0x00], 0).unwrap().is_nan());
    }

    #[test]
    fn test_decode_f64() {
        assert_eq!(
            decode_f64(&[0x3F, 0xF0, 0, 0, 0, 0, 0, 0], 0).unwrap(),
            1.0
        );
        assert_eq!(
            decode_f64(&[0x40, 0x09, 0x21, 0xFB, 0x54, 0x44, 0x2D, 0x18], 0).unwrap(),
            std::f64::consts::PI
        );
    }

    // Regression: decoding a float must read big-endian and leave the buffer untouched.
    #[test]
    fn test_decode_float_does_not_reverse_buffer() {
        let mut buf = vec![0xAA, 0x3F, 0x80, 0x00, 0x00, 0xBB];
        buf.extend_from_slice(&[0xC0, 0x00, 0, 0, 0, 0, 0, 0]);
        let before = buf.clone();

        assert_eq!(decode_f32(&buf, 1).unwrap(), 1.0);
        assert_eq!(decode_f32(&buf, 1).unwrap(), 1.0);
        assert_eq!(decode_f64(&buf, 6).unwrap(), -2.0);
        assert_eq!(decode_f64(&buf, 6).unwrap(), -2.0);
        assert_eq!(buf, before);
    }

    #[test]
    fn test_decode_does_not_mutate() {
        let buf: Vec<u8> = (0..16).map(|_| rand::random::<u8>()).collect();
        let before = buf.clone();

        for off in 0..8 {
            let _ = decode_u16(&buf, off).unwrap();
            let _ = decode_i16(&buf, off).unwrap();
            let _ = decode_u32(&buf, off).unwrap();
            let _ = decode_i32(&buf, off).unwrap();
            let _ = decode_f32(&buf, off).unwrap();
            let _ = decode_f64(&buf, off).unwrap();
        }
        assert_eq!(buf, before);
    }

    #[test]
    fn test_decode_u32_out_of_bounds() {
        for len in 0..8usize {
            let buf = vec![0u8; len];
            for off in 0..=len + 1 {
                if len.saturating_sub(off) >= 4 {
                    continue;
                }
                assert_matches!(
                    decode_u32(&buf, off),
                    Err(Error::OutOfBounds { len: 4, .. })
                );
            }
        }
    }

    #[test]
    fn test_decode_out_of_bounds() {
        let buf = [0u8; 3];
        assert_matches!(
            decode_u16(&buf, 2),
            Err(Error::OutOfBounds {
                offset: 2,
                len: 2,
                capacity: 3,
            })
        );
        assert_matches!(decode_i16(&buf, 3), Err(Error::OutOfBounds { .. }));
        assert_matches!(decode_i32(&buf, 0), Err(Error::OutOfBounds { .. }));
        assert_matches!(decode_f32(&buf, 0), Err(Error::OutOfBounds { .. }));
        assert_matches!(
            decode_f64(&[0u8; 7], 0),
            Err(Error::OutOfBounds {
                offset: 0,
                len: 8,
                capacity: 7,
            })
        );
        assert_matches!(
            decode_u16(&buf, usize::MAX),
            Err(Error::OutOfBounds { .. })
        );
    }

    #[test]
    fn test_decode_shared_across_threads() {
        let buf: Vec<u8> = (0u8..64).collect();
        let shared = buf.as_slice();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let first = (i * 4) as u8;
                    let expected = u32::from_be_bytes([first, first + 1, first + 2, first + 3]);
                    s.spawn(move || (0..1000).all(|_| decode_u32(shared, i * 4).unwrap() == expected))
                })
                .collect();

            for handle in handles {
                assert!(handle.join().unwrap());
            }
        });
        assert_eq!(buf, (0u8..64).collect::<Vec<_>>());
    }
}
