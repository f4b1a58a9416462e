use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::{Gateway, Method, Request, server_message};
use crate::{Error, Result};

/// reqwest-backed gateway rooted at the configured API base URL.
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn send(&self, request: Request) -> Result<Value> {
        tracing::debug!(method = %request.method, path = %request.path, "gateway request");

        let mut builder = self
            .client
            .request(reqwest_method(request.method), self.url(&request.path));
        if let Some(token) = &request.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let body = if text.trim().is_empty() {
            Some(Value::Null)
        } else {
            serde_json::from_str::<Value>(&text).ok()
        };

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), path = %request.path, "gateway error");
            return Err(Error::Gateway {
                status: Some(status.as_u16()),
                message: body.as_ref().and_then(server_message),
            });
        }

        body.ok_or_else(|| Error::Decode(format!("{} returned a non-JSON body", request.path)))
    }
}
