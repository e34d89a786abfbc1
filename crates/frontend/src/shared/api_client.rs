//! HTTP client for the inference API.
//!
//! Transport is a trait so the browser implementation (gloo-net) can be
//! swapped for a scripted one in tests.

use std::sync::Arc;

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::shared::api_utils::api_url;

/// Prefix of every message shown in the error banner
pub const COMMUNICATION_ERROR_PREFIX: &str = "Erreur de communication avec l'API";

/// Status and body of an HTTP response, read to the end
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait HttpTransport: Send + Sync {
    /// POST `body` (already JSON-encoded) with a JSON content type
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse, String>;

    async fn get(&self, url: &str) -> Result<RawResponse, String>;
}

/// `fetch`-backed transport used in the browser
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse, String> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| format!("Failed to build request: {}", e))?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        read_response(response).await
    }

    async fn get(&self, url: &str) -> Result<RawResponse, String> {
        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| e.to_string())?;

        read_response(response).await
    }
}

async fn read_response(response: gloo_net::http::Response) -> Result<RawResponse, String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    Ok(RawResponse { status, body })
}

/// Единственный вид ошибки обмена с API.
///
/// `Display` gives the bare reason; `user_message` adds the banner prefix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommunicationError {
    /// Network unreachable, CORS refusal, aborted fetch
    #[error("{0}")]
    Transport(String),
    /// Non-2xx status; `message` is the backend's `error` field or a generic one
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("{0}")]
    Encode(String),
    /// Body is not the expected JSON document
    #[error("{0}")]
    Decode(String),
}

impl CommunicationError {
    pub fn user_message(&self) -> String {
        format!("{}: {}", COMMUNICATION_ERROR_PREFIX, self)
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    /// Client talking to `base_url` through the browser's `fetch`
    pub fn browser(base_url: impl Into<String>) -> Self {
        Self::new(base_url, Arc::new(GlooTransport))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `payload` as JSON to `endpoint` and decode the JSON answer
    pub async fn post<Req, Resp>(
        &self,
        endpoint: &str,
        payload: &Req,
    ) -> Result<Resp, CommunicationError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let body = serde_json::to_string(payload)
            .map_err(|e| CommunicationError::Encode(e.to_string()))?;
        let response = self
            .transport
            .post_json(&api_url(&self.base_url, endpoint), body)
            .await
            .map_err(CommunicationError::Transport)?;

        decode_response(response)
    }

    pub async fn get<Resp>(&self, path: &str) -> Result<Resp, CommunicationError>
    where
        Resp: DeserializeOwned,
    {
        let response = self
            .transport
            .get(&api_url(&self.base_url, path))
            .await
            .map_err(CommunicationError::Transport)?;

        decode_response(response)
    }
}

fn decode_response<Resp: DeserializeOwned>(
    response: RawResponse,
) -> Result<Resp, CommunicationError> {
    if !response.ok() {
        return Err(status_error(&response));
    }

    serde_json::from_str(&response.body).map_err(|e| CommunicationError::Decode(e.to_string()))
}

/// Error for a non-2xx response.
///
/// The body must still be JSON: when it is not, the decode failure is the error.
/// Any JSON document without a non-empty string `error` member (an object
/// without it, a bare string, a number) falls back to the status message.
fn status_error(response: &RawResponse) -> CommunicationError {
    match serde_json::from_str::<Value>(&response.body) {
        Ok(body) => CommunicationError::Status {
            status: response.status,
            message: body
                .get("error")
                .and_then(Value::as_str)
                .filter(|message| !message.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Erreur HTTP: {}", response.status)),
        },
        Err(e) => CommunicationError::Decode(e.to_string()),
    }
}
