//! Chat backend client
//!
//! Thin wrapper around `POST /api/chat`: sends `{"message": ...}` and reads
//! `{"response": ...}`.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};
use url::Url;

use crate::config::BackendConfig;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("invalid backend url '{0}': {1}")]
    InvalidUrl(String, #[source] url::ParseError),

    #[error("request to chat backend failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("chat backend returned {status}: {body}")]
    Status { status: u16, body: String },
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: String,
}

/// Client for the `/api/chat` endpoint
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ChatClient {
    pub fn new(config: &BackendConfig) -> Result<Self, ChatError> {
        let endpoint = chat_endpoint(&config.url)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send one message and return the assistant's reply
    pub async fn send(&self, message: &str) -> Result<String, ChatError> {
        debug!(endpoint = %self.endpoint, "sending chat message");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&ChatRequest { message })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reply: ChatResponse = response.json().await?;
        Ok(reply.response)
    }

    /// Like [`send`](Self::send), but logs failures and returns `None`
    /// so the caller can fall back to a local reply.
    pub async fn ask(&self, message: &str) -> Option<String> {
        match self.send(message).await {
            Ok(reply) => Some(reply),
            Err(err) => {
                error!("chat backend unavailable: {}", err);
                None
            }
        }
    }
}

/// Resolve `api/chat` against the configured base URL
fn chat_endpoint(base: &str) -> Result<Url, ChatError> {
    let mut base_str = base.trim().to_string();
    if !base_str.ends_with('/') {
        base_str.push('/');
    }
    Url::parse(&base_str)
        .and_then(|url| url.join("api/chat"))
        .map_err(|e| ChatError::InvalidUrl(base.to_string(), e))
}
