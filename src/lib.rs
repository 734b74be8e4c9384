#![cfg_attr(nightly, feature(no_coverage))]

pub mod codec;

mod error;
pub use error::Error;

/// The byte order of everything this crate reads and writes: most significant byte first.
pub const IS_LITTLE_ENDIAN: bool = false;
