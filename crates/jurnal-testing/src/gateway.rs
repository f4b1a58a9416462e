//! In-memory gateway for runtime tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Value, json};

use jurnal_runtime::{Error, Gateway, Method, Request, Result};

#[derive(Debug, Clone)]
enum Reply {
    Json(Value),
    Fail { status: u16, message: Option<String> },
    Unreachable,
    /// Never answers; used to exercise cancellation.
    Hang,
}

/// Answers requests from a route table keyed by method and path.
///
/// Unknown routes answer 404 so a missing fixture fails loudly.
#[derive(Default)]
pub struct MockGateway {
    routes: Mutex<HashMap<(Method, String), Reply>>,
    requests: Mutex<Vec<Request>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    fn route(self, method: Method, path: &str, reply: Reply) -> Self {
        self.routes
            .lock()
            .expect("route table poisoned")
            .insert((method, path.to_string()), reply);
        self
    }

    /// Raw JSON body for `method path`.
    pub fn on(self, method: Method, path: &str, body: Value) -> Self {
        self.route(method, path, Reply::Json(body))
    }

    /// `GET path` answering `{success: true, data: items}`.
    pub fn on_list<T: Serialize>(self, path: &str, items: &[T]) -> Self {
        let body = json!({ "success": true, "data": items });
        self.on(Method::Get, path, body)
    }

    /// `method path` answering `{success: true, data: record}`.
    pub fn on_record<T: Serialize>(self, method: Method, path: &str, record: &T) -> Self {
        let body = json!({ "success": true, "data": record });
        self.on(method, path, body)
    }

    pub fn fail(self, method: Method, path: &str, status: u16, message: Option<&str>) -> Self {
        let reply = Reply::Fail {
            status,
            message: message.map(str::to_string),
        };
        self.route(method, path, reply)
    }

    pub fn unreachable(self, method: Method, path: &str) -> Self {
        self.route(method, path, Reply::Unreachable)
    }

    pub fn hang(self, method: Method, path: &str) -> Self {
        self.route(method, path, Reply::Hang)
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().expect("request log poisoned").clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("request log poisoned").len()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|r| format!("{} {}", r.method, r.path))
            .collect()
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn send(&self, request: Request) -> Result<Value> {
        let key = (request.method, request.path.clone());
        self.requests
            .lock()
            .expect("request log poisoned")
            .push(request);

        let reply = self
            .routes
            .lock()
            .expect("route table poisoned")
            .get(&key)
            .cloned();

        match reply {
            Some(Reply::Json(body)) => Ok(body),
            Some(Reply::Fail { status, message }) => Err(Error::Gateway {
                status: Some(status),
                message,
            }),
            Some(Reply::Unreachable) => Err(Error::Transport("connection refused".to_string())),
            Some(Reply::Hang) => futures::future::pending().await,
            None => Err(Error::Gateway {
                status: Some(404),
                message: Some(format!("no route for {} {}", key.0, key.1)),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_route_is_404_and_still_recorded() {
        let gateway = MockGateway::new();
        let err = gateway.send(Request::get("getkelas")).await.unwrap_err();
        assert!(matches!(err, Error::Gateway { status: Some(404), .. }));
        assert_eq!(gateway.paths(), vec!["GET getkelas".to_string()]);
    }
}
