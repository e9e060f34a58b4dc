use thiserror::Error;

/// Error type for every fallible operation in the crate
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Length mismatch: expected {expected}, actual {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Sequence is empty: {0}")]
    EmptySequence(String),

    #[error("Missing value: {0}")]
    MissingValue(String),

    #[error("Value is not a member of the category set: {0}")]
    InvalidCategory(String),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Index out of bounds: index {index}, size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Insufficient data: at least {required} values required, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    #[error("Type conversion error: {0}")]
    Cast(String),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

// Alias kept for callers that name the crate error explicitly
pub type NumframeError = Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Fails with `LengthMismatch` unless both lengths agree
pub(crate) fn ensure_same_length(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::LengthMismatch { expected, actual });
    }
    Ok(())
}

/// Fails with `IndexOutOfBounds` unless `index < size`
pub(crate) fn ensure_in_bounds(index: usize, size: usize) -> Result<()> {
    if index >= size {
        return Err(Error::IndexOutOfBounds { index, size });
    }
    Ok(())
}
