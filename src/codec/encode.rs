use super::Encode;

macro_rules! encode_int {
    ($($ty:ty),*) => {
        $(
            impl Encode for $ty {
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                fn encode(&self) -> Self::Bytes {
                    self.to_be_bytes()
                }
            }
        )*
    };
}

encode_int!(u16, i16, u32, i32);

impl Encode for f32 {
    type Bytes = [u8; 4];

    fn encode(&self) -> Self::Bytes {
        self.to_bits().encode()
    }
}

impl Encode for f64 {
    type Bytes = [u8; 8];

    fn encode(&self) -> Self::Bytes {
        self.to_bits().to_be_bytes()
    }
}

/// Encode a `u16` as `[value >> 8, value]`.
pub fn encode_u16(value: u16) -> [u8; 2] {
    value.encode()
}

pub fn encode_i16(value: i16) -> [u8; 2] {
    value.encode()
}

pub fn encode_u32(value: u32) -> [u8; 4] {
    value.encode()
}

pub fn encode_i32(value: i32) -> [u8; 4] {
    value.encode()
}

/// Encode the IEEE-754 bit pattern of `value`, most significant byte first.
///
/// This is the reference layout [`super::decode_f32`] reads back.
pub fn encode_f32(value: f32) -> [u8; 4] {
    value.encode()
}

/// Same as [`encode_f32`] over the eight bytes of a double.
pub fn encode_f64(value: f64) -> [u8; 8] {
    value.encode()
}
