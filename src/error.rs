//! Error types for rendering

use thiserror::Error;

/// A date string that no accepted format could parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized date `{input}`")]
pub struct DateError {
    pub input: String,
}

impl DateError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Errors returned by the post renderers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A required field was empty
    #[error("post field `{field}` must not be empty")]
    InvalidInput { field: &'static str },

    /// The date formatter rejected the post date
    #[error(transparent)]
    Date(#[from] DateError),
}

/// Fail with `InvalidInput` when `value` is empty
pub(crate) fn require(value: &str, field: &'static str) -> Result<(), RenderError> {
    if value.trim().is_empty() {
        Err(RenderError::InvalidInput { field })
    } else {
        Ok(())
    }
}
