use thiserror::Error as ThisError;

/// Crate-wide error type. Every fallible operation fails fast and surfaces
/// one of these to the immediate caller; nothing in the library retries or
/// recovers.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// Invalid construction argument (zero dimension, bad layer-size list,
    /// wrong vector orientation).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Shape mismatch in elementwise arithmetic or matrix multiplication.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Cell index past a matrix dimension, or layer-boundary index past the
    /// last boundary of a network.
    #[error("index out of range: {0}")]
    IndexOutOfRange(String),

    /// Matrix-to-vector conversion on a matrix where neither dimension is 1.
    #[error("not a vector: matrix is {columns}x{rows}")]
    NotAVector { columns: usize, rows: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
