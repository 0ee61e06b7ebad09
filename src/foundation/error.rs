/// Convenience result type used across stackblur.
pub type StackBlurResult<T> = Result<T, StackBlurError>;

/// Top-level error taxonomy used by the blur entry points.
///
/// The blur itself has no recoverable failure paths; validation errors are
/// raised before any pixel is touched.
#[derive(thiserror::Error, Debug)]
pub enum StackBlurError {
    /// Invalid grid dimensions, buffer length or blur options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Blur options could not be decoded.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StackBlurError {
    /// Build a [`StackBlurError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StackBlurError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for StackBlurError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
