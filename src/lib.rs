//! Herald - stateless streaming relay for the Lovable AI gateway
//!
//! Accepts a chat-style request, prepends a mode-selected system instruction,
//! forwards the conversation to the upstream completion gateway, and streams
//! the incremental response back to the caller unmodified.

pub mod config;
pub mod error;
pub mod prompts;
pub mod proxy;
pub mod request;
pub mod routes;

use std::time::Instant;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::error::{RelayError, RelayResult};
pub use crate::prompts::Mode;
pub use crate::proxy::GatewayClient;
pub use crate::request::{ChatMessage, RelayRequest, Role};

/// Application state shared across all request handlers
///
/// Nothing here is mutable after startup; individual requests share only the
/// pooled HTTP client and the immutable configuration.
pub struct AppState {
    pub config: Config,
    pub gateway: GatewayClient,
    pub start_time: Instant,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .timeout(std::time::Duration::from_secs(config.upstream_timeout_seconds))
            .build()?;

        let gateway = GatewayClient::new(http_client, &config);

        Ok(Self {
            config,
            gateway,
            start_time: Instant::now(),
        })
    }
}
