use std::fmt;

/// Result type for legiscope-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when talking to the backend.
///
/// Mirrors the dashboard's taxonomy: a fetch either fails to complete
/// (`Network`), completes with a non-2xx status (`Http`), returns a body the
/// client cannot decode (`Decode`), or returns a 2xx envelope that carries
/// `success: false` (`Backend`). Nothing is retried automatically.
#[derive(Debug)]
pub enum Error {
    /// Request failed before an HTTP status was received
    Network(reqwest::Error),

    /// Non-2xx HTTP status
    Http { status: u16, body: String },

    /// Response body was not the expected JSON shape
    Decode(serde_json::Error),

    /// 2xx response whose envelope reports failure
    Backend(String),

    /// Local validation failed before any request was made
    InvalidInput(String),

    /// Reading a local file (uploads)
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Network(err) => write!(f, "Network error: {}", err),
            Error::Http { status, body } => {
                if body.is_empty() {
                    write!(f, "HTTP {}", status)
                } else {
                    write!(f, "HTTP {}: {}", status, body)
                }
            }
            Error::Decode(err) => write!(f, "Malformed response: {}", err),
            Error::Backend(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Network(err) => Some(err),
            Error::Decode(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Http { .. } | Error::Backend(_) | Error::InvalidInput(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
