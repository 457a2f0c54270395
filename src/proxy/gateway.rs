//! Lovable AI gateway client
//!
//! Builds the outbound completion request, issues the single upstream call,
//! and classifies the outcome. On success the response body is handed back
//! as a lazy byte stream so the HTTP layer can forward it without buffering.

use bytes::Bytes;
use futures::Stream;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use std::pin::Pin;
use tracing::{error, info};

use crate::config::Config;
use crate::error::{RelayError, RelayResult};
use crate::request::{ChatMessage, RelayRequest};

/// Stream type carrying the upstream response chunks
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, reqwest::Error>> + Send>>;

/// Outbound payload for the gateway's chat completions endpoint
#[derive(Debug, Serialize)]
struct OutboundRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
}

/// Lovable AI gateway client
pub struct GatewayClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl GatewayClient {
    /// Create a new gateway client from the process-wide configuration
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.gateway_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    /// Relay a conversation to the gateway and return the live byte stream
    ///
    /// Exactly one attempt is made; nothing is retried at any status.
    pub async fn relay(&self, request: RelayRequest) -> RelayResult<ByteStream> {
        let api_key = self.api_key.as_ref().ok_or(RelayError::ConfigMissing)?;

        let system_prompt = request.mode.system_prompt();
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        messages.push(ChatMessage::system(system_prompt));
        messages.extend(request.messages);

        let outbound = OutboundRequest {
            model: self.model.clone(),
            messages,
            stream: true,
        };

        let url = format!("{}/chat/completions", self.base_url);
        info!(
            mode = ?request.mode,
            messages = outbound.messages.len(),
            "Forwarding conversation to AI gateway"
        );

        let response = self
            .client
            .post(&url)
            .headers(self.default_headers(api_key))
            .json(&outbound)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "Failed to reach AI gateway");
                RelayError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                return Err(RelayError::RateLimited);
            }
            if status == reqwest::StatusCode::PAYMENT_REQUIRED {
                return Err(RelayError::PaymentRequired);
            }
            // Diagnostic body is for server-side logs only, never the caller
            let detail = response.text().await.unwrap_or_default();
            error!(status = %status, detail = %detail, "AI gateway error");
            return Err(RelayError::Upstream {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(Box::pin(response.bytes_stream()))
    }

    fn default_headers(&self, api_key: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", api_key)) {
            headers.insert(AUTHORIZATION, value);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }
}
