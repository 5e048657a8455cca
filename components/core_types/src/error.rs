//! Error types for the value model.

use thiserror::Error;

/// Errors raised when converting text into a type tag.
///
/// # Examples
///
/// ```
/// use core_types::{RealTag, TagError};
///
/// let err = "integer".parse::<RealTag>().unwrap_err();
/// assert_eq!(err, TagError::Unknown("integer".to_string()));
/// assert_eq!(err.to_string(), "unknown type tag 'integer'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// The text names no known tag
    #[error("unknown type tag '{0}'")]
    Unknown(String),
}
