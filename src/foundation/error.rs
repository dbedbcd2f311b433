//! Crate-wide error type.

/// Result alias used by every fallible brushwork API.
pub type BrushworkResult<T> = Result<T, BrushworkError>;

/// Errors reported by brushwork.
///
/// Validation failures are raised before any state changes, so a caller can fix the input and
/// retry with the same [`Stylizer`](crate::Stylizer).
#[derive(thiserror::Error, Debug)]
pub enum BrushworkError {
    /// Inputs or parameters were rejected: mismatched resolutions, negative or non-finite
    /// scalars, zero-sized buffers.
    #[error("validation error: {0}")]
    Validation(String),

    /// A pixel buffer could not be allocated.
    #[error("allocation error: {0}")]
    Allocation(String),

    /// An image could not be decoded or encoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Style parameters or other JSON failed to parse.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, usually an IO failure wrapped with `anyhow` context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BrushworkError {
    /// Build a [`BrushworkError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BrushworkError::Allocation`].
    pub fn allocation(msg: impl Into<String>) -> Self {
        Self::Allocation(msg.into())
    }

    /// Build a [`BrushworkError::Decode`].
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`BrushworkError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
