use std::fmt;

/// Result type for jurnal-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while talking to the gateway or managing views
#[derive(Debug)]
pub enum Error {
    /// A mutation was attempted without a session token; no request was sent
    MissingCredential,

    /// Non-2xx response or `success: false` envelope
    Gateway {
        status: Option<u16>,
        message: Option<String>,
    },

    /// Network failure before a response arrived
    Transport(String),

    /// Response body did not match the expected shape
    Decode(String),

    /// Detail endpoint returned no record
    NotFound(String),

    /// Load was superseded or its view was dropped
    Cancelled,

    /// A listing scope the entity has no endpoint for
    UnsupportedScope(String),

    /// Configuration error
    Config(String),

    /// IO operation failed
    Io(std::io::Error),

    /// List pipeline or export failure
    Engine(jurnal_engine::Error),
}

/// Shown when the gateway gives no reason of its own.
pub const GENERIC_FAILURE: &str = "Request failed";

impl Error {
    /// Message suitable for a user-facing notification.
    pub fn user_message(&self) -> String {
        match self {
            Error::MissingCredential => "You must log in first".to_string(),
            Error::Gateway {
                message: Some(message),
                ..
            } => message.clone(),
            Error::Gateway { message: None, .. } => GENERIC_FAILURE.to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingCredential => write!(f, "You must log in first"),
            Error::Gateway { message, .. } => {
                write!(f, "{}", message.as_deref().unwrap_or(GENERIC_FAILURE))
            }
            Error::Transport(msg) => write!(f, "Network error: {}", msg),
            Error::Decode(msg) => write!(f, "Unexpected response: {}", msg),
            Error::NotFound(what) => write!(f, "Not found: {}", what),
            Error::Cancelled => write!(f, "Load cancelled"),
            Error::UnsupportedScope(msg) => write!(f, "{}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Engine(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Engine(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<jurnal_engine::Error> for Error {
    fn from(err: jurnal_engine::Error) -> Self {
        Error::Engine(err)
    }
}

impl From<jurnal_types::Error> for Error {
    fn from(err: jurnal_types::Error) -> Self {
        match err {
            jurnal_types::Error::Rejected { message } => Error::Gateway {
                status: None,
                message,
            },
            other => Error::Decode(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Transport(err.to_string())
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_message_prefers_server_text() {
        let err = Error::Gateway {
            status: Some(409),
            message: Some("NIS sudah terdaftar".into()),
        };
        assert_eq!(err.user_message(), "NIS sudah terdaftar");
        assert_eq!(err.to_string(), "NIS sudah terdaftar");
    }

    #[test]
    fn test_gateway_without_message_is_generic() {
        let err = Error::Gateway {
            status: Some(500),
            message: None,
        };
        assert_eq!(err.user_message(), GENERIC_FAILURE);
    }

    #[test]
    fn test_rejected_envelope_maps_to_gateway_error() {
        let err: Error = jurnal_types::Error::Rejected {
            message: Some("Token tidak valid".into()),
        }
        .into();
        assert!(matches!(err, Error::Gateway { status: None, .. }));
        assert_eq!(err.user_message(), "Token tidak valid");
    }
}
