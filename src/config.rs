//! Configuration management for Herald
//!
//! Configuration is loaded from environment variables once at startup and
//! stays immutable for the lifetime of the process.

use anyhow::{Context, Result};
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Lovable AI gateway base URL
    pub gateway_url: String,
    /// Lovable AI gateway API key; absence is surfaced per request as a
    /// configuration error rather than aborting startup
    pub api_key: Option<String>,

    /// Model identifier sent with every upstream request
    pub model: String,

    /// Timeout for the upstream call (in seconds)
    pub upstream_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("HERALD_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("HERALD_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid HERALD_PORT")?,

            gateway_url: env::var("LOVABLE_GATEWAY_URL")
                .unwrap_or_else(|_| "https://ai.gateway.lovable.dev/v1".to_string()),
            api_key: env::var("LOVABLE_API_KEY").ok(),

            model: env::var("HERALD_MODEL")
                .unwrap_or_else(|_| "google/gemini-3-flash-preview".to_string()),

            upstream_timeout_seconds: env::var("HERALD_UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .context("Invalid HERALD_UPSTREAM_TIMEOUT_SECS")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        env::remove_var("HERALD_HOST");
        env::remove_var("HERALD_PORT");
        env::remove_var("LOVABLE_GATEWAY_URL");
        env::remove_var("HERALD_MODEL");
        env::remove_var("HERALD_UPSTREAM_TIMEOUT_SECS");

        let config = Config::from_env().unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.gateway_url, "https://ai.gateway.lovable.dev/v1");
        assert_eq!(config.model, "google/gemini-3-flash-preview");
        assert_eq!(config.upstream_timeout_seconds, 300);
    }
}
