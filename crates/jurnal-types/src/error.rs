use std::fmt;

/// Result type for jurnal-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Gateway answered with `success: false`
    Rejected { message: Option<String> },

    /// A string did not name a known enum value (day, role, gender)
    InvalidValue { kind: &'static str, value: String },

    /// JSON payload could not be decoded
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Rejected {
                message: Some(message),
            } => write!(f, "Request rejected: {}", message),
            Error::Rejected { message: None } => write!(f, "Request rejected by server"),
            Error::InvalidValue { kind, value } => write!(f, "Invalid {}: {}", kind, value),
            Error::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            Error::Rejected { .. } | Error::InvalidValue { .. } => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
