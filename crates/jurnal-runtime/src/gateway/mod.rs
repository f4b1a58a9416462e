//! Remote data gateway: the only boundary between the toolkit and the school backend.

mod endpoints;
mod http;

pub use endpoints::{Endpoints, LOGIN, LOGOUT};
pub use http::HttpGateway;

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// Mutating methods require a bearer token.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Method::Get)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One call against the gateway. `path` is relative to the API base URL.
#[derive(Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub token: Option<String>,
    pub body: Option<Value>,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            token: None,
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Post, path).with_body(body)
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Put, path).with_body(body)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token.map(str::to_string);
        self
    }
}

// Tokens never reach logs or panic messages.
impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("body", &self.body)
            .finish()
    }
}

/// Sends a request and yields the decoded JSON body of a 2xx response.
///
/// Non-2xx responses become [`crate::Error::Gateway`] carrying the server's
/// `message` when the body has one. Envelope handling is left to the caller.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn send(&self, request: Request) -> Result<Value>;
}

/// Pulls a usable `message` out of an error body.
pub fn server_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_debug_redacts_token() {
        let request = Request::delete("deletekelas/c1").with_token(Some("s3cret"));
        let printed = format!("{:?}", request);
        assert!(!printed.contains("s3cret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_server_message() {
        assert_eq!(
            server_message(&json!({"success": false, "message": "Kelas tidak ditemukan"})),
            Some("Kelas tidak ditemukan".to_string())
        );
        assert_eq!(server_message(&json!({"message": "  "})), None);
        assert_eq!(server_message(&json!("oops")), None);
    }

    #[test]
    fn test_only_get_is_read_only() {
        assert!(!Method::Get.is_mutating());
        for method in [Method::Post, Method::Put, Method::Delete] {
            assert!(method.is_mutating());
        }
    }
}
