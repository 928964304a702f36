//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided display text is empty or whitespace.
    EmptyText,

    /// The provided display text exceeds the configured maximum length.
    TextTooLong { max: usize, actual: usize },

    /// The provided ID is not a positive integer.
    InvalidId(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyText => write!(f, "Text cannot be empty"),
            Self::TextTooLong { max, actual } => {
                write!(f, "Text too long ({} characters, max {})", actual, max)
            }
            Self::InvalidId(id) => write!(f, "Invalid ID: {}", id),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check that display text is non-blank and at most `max` characters long.
pub fn validate_text(text: &str, max: usize) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyText);
    }
    let actual = text.chars().count();
    if actual > max {
        return Err(ValidationError::TextTooLong { max, actual });
    }
    Ok(())
}
