//! Error types for Practicar operations.
//!
//! The exercise functions themselves are total over their documented input
//! domain and never fail; errors only arise when constructing structured
//! inputs (e.g. a ragged grid).

use std::fmt;

/// Main error type for Practicar operations.
///
/// # Examples
///
/// ```
/// use practicar::error::PracticarError;
///
/// let err = PracticarError::ShapeMismatch {
///     expected: "5 cells per row".to_string(),
///     actual: "3".to_string(),
/// };
/// assert!(err.to_string().contains("shape mismatch"));
/// ```
#[derive(Debug)]
pub enum PracticarError {
    /// Structured input has inconsistent dimensions (ragged grid rows,
    /// cell count not matching rows * cols).
    ShapeMismatch {
        /// Expected shape description
        expected: String,
        /// Actual shape found
        actual: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for PracticarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PracticarError::ShapeMismatch { expected, actual } => {
                write!(f, "Input shape mismatch: expected {expected}, got {actual}")
            }
            PracticarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PracticarError {}

impl From<&str> for PracticarError {
    fn from(msg: &str) -> Self {
        PracticarError::Other(msg.to_string())
    }
}

impl From<String> for PracticarError {
    fn from(msg: String) -> Self {
        PracticarError::Other(msg)
    }
}

impl PracticarError {
    /// Create a shape mismatch error with descriptive context
    #[must_use]
    pub fn shape_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for PracticarError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<PracticarError> for &str {
    fn eq(&self, other: &PracticarError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, PracticarError>;
