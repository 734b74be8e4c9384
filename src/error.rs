#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid width: {0} must be between 1 and 4")]
    InvalidWidth(usize),

    #[error("out of bounds {offset} + {len} > {capacity}")]
    OutOfBounds {
        offset: usize,
        len: usize,
        capacity: usize,
    },

    #[error("overflow: {value} does not fit in {width} bytes")]
    Overflow { value: i64, width: usize },
}
