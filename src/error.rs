//! Error types for the Pinecone checker.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Pinecone checker.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    // Pinecone API errors
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("Pinecone service error ({status}): {message}")]
    Service { status: u16, message: String },

    #[error("Malformed response from Pinecone: {0}")]
    MalformedResponse(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

/// Coarse classification of a failure, used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Auth,
    Network,
    Service,
    Unknown,
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Unauthorized(_) => ErrorKind::Auth,
            Error::Service { .. } | Error::MalformedResponse(_) => ErrorKind::Service,
            Error::Http(e) if e.is_timeout() || e.is_connect() || e.is_request() => {
                ErrorKind::Network
            }
            _ => ErrorKind::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(Error::Unauthorized("bad".into()).kind(), ErrorKind::Auth);
        assert_eq!(
            Error::Service { status: 503, message: "down".into() }.kind(),
            ErrorKind::Service
        );
        assert_eq!(Error::other("x").kind(), ErrorKind::Unknown);
    }

    #[test]
    fn test_display_keeps_underlying_message() {
        let err = Error::Unauthorized("invalid key".into());
        assert_eq!(err.to_string(), "Authentication failed: invalid key");

        let err = Error::Service { status: 500, message: "boom".into() };
        assert_eq!(err.to_string(), "Pinecone service error (500): boom");
    }
}
