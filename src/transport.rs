use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Method;

use crate::error::TransportError;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Form(Vec<(String, String)>),
    Json(serde_json::Value),
}

impl Body {
    pub fn content_type(&self) -> &'static str {
        match self {
            Body::Form(_) => FORM_CONTENT_TYPE,
            Body::Json(_) => JSON_CONTENT_TYPE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub body: Option<Body>,
}

impl Request {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: Body) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            body: Some(body),
        }
    }

    pub fn patch(url: impl Into<String>, body: Body) -> Self {
        Self {
            method: Method::PATCH,
            url: url.into(),
            body: Some(body),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Bytes,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text for diagnostics, truncated to 1024 chars.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).chars().take(1024).collect()
    }
}

/// One HTTP round trip. Implementations must not retry and must not act on
/// the status code.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: Request) -> Result<Response, TransportError>;
}

pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        Self::build(None)
    }

    /// Every request fails with a timeout error once `timeout` elapses.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::from(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: Request) -> Result<Response, TransportError> {
        let mut req = self.client.request(request.method.clone(), &request.url);

        // reqwest sets the matching Content-Type for both encodings
        req = match &request.body {
            Some(Body::Form(pairs)) => req.form(pairs),
            Some(Body::Json(value)) => req.json(value),
            None => req,
        };

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            content_type = request.body.as_ref().map(Body::content_type),
            status,
            "admin api request"
        );

        Ok(Response { status, body })
    }
}
