use std::fmt;

/// Result type for legiscope-editor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the editor layer
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// Required local input is missing or empty
    Validation(String),

    /// Index-based operation outside the current list bounds
    OutOfBounds { index: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(msg) => write!(f, "Validation error: {}", msg),
            Error::OutOfBounds { index, len } => {
                write!(f, "Index {} out of bounds (len {})", index, len)
            }
        }
    }
}

impl std::error::Error for Error {}
