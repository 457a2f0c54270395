//! Error types for Herald
//!
//! Every failure in the relay pipeline resolves to a [`RelayError`] variant
//! before it reaches the HTTP boundary; the boundary only formats. Each
//! variant maps to a fixed caller-facing status and message, so upstream
//! detail never leaks past the server-side logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Relay pipeline outcomes that are not a successful stream
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("LOVABLE_API_KEY is not configured")]
    ConfigMissing,

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Rate limits exceeded, please try again later.")]
    RateLimited,

    #[error("Payment required, please add funds to your workspace.")]
    PaymentRequired,

    #[error("AI gateway error ({status}): {detail}")]
    Upstream { status: u16, detail: String },

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        // Transport failures are indistinguishable from an unclassified
        // upstream failure as far as the caller is concerned
        RelayError::Upstream {
            status: 0,
            detail: err.to_string(),
        }
    }
}

/// Error response body: `{"error": "<message>"}`, the sole non-success shape
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            RelayError::ConfigMissing => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "LOVABLE_API_KEY is not configured".to_string(),
            ),
            RelayError::MalformedRequest(detail) => {
                let message = if detail.is_empty() {
                    "Unknown error".to_string()
                } else {
                    detail.clone()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            RelayError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "Rate limits exceeded, please try again later.".to_string(),
            ),
            RelayError::PaymentRequired => (
                StatusCode::PAYMENT_REQUIRED,
                "Payment required, please add funds to your workspace.".to_string(),
            ),
            RelayError::Upstream { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "AI gateway error".to_string(),
            ),
            RelayError::Internal(err) => {
                let message = err.to_string();
                let message = if message.is_empty() {
                    "Unknown error".to_string()
                } else {
                    message
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Result type alias for convenience
pub type RelayResult<T> = Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    async fn render(err: RelayError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn config_missing_is_fixed_message() {
        let (status, body) = render(RelayError::ConfigMissing).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "LOVABLE_API_KEY is not configured");
    }

    #[tokio::test]
    async fn rate_limited_maps_to_429() {
        let (status, body) = render(RelayError::RateLimited).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body["error"], "Rate limits exceeded, please try again later.");
    }

    #[tokio::test]
    async fn payment_required_maps_to_402() {
        let (status, body) = render(RelayError::PaymentRequired).await;
        assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
        assert_eq!(
            body["error"],
            "Payment required, please add funds to your workspace."
        );
    }

    #[tokio::test]
    async fn upstream_detail_never_reaches_the_caller() {
        let (status, body) = render(RelayError::Upstream {
            status: 503,
            detail: "internal provider stack trace".to_string(),
        })
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "AI gateway error");
    }

    #[tokio::test]
    async fn malformed_request_falls_back_to_unknown_error() {
        let (_, body) = render(RelayError::MalformedRequest(String::new())).await;
        assert_eq!(body["error"], "Unknown error");
    }
}
