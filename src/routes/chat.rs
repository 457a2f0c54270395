//! Chat relay endpoint
//!
//! The single functional endpoint: validate the payload, relay it upstream,
//! and stream the gateway's response back without buffering. Returning
//! `Result<_, RelayError>` keeps every failure a typed outcome; axum's
//! `IntoResponse` on the error is the only formatting step.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::Response,
};
use tracing::info;

use crate::{
    error::{RelayError, RelayResult},
    request::RelayRequest,
    AppState,
};

/// Handle a chat relay request
///
/// The upstream stream is wrapped directly into the response body; dropping
/// the response (caller disconnect) drops the stream and closes the upstream
/// connection with it.
pub async fn relay_chat(
    State(state): State<Arc<AppState>>,
    body: axum::body::Bytes,
) -> RelayResult<Response> {
    let request = RelayRequest::from_bytes(&body)?;

    info!(
        mode = ?request.mode,
        messages = request.messages.len(),
        "Processing relay request"
    );

    let stream = state.gateway.relay(request).await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/event-stream")
        .header(header::CACHE_CONTROL, "no-cache")
        .body(Body::from_stream(stream))
        .map_err(|e| RelayError::Internal(anyhow::anyhow!("Failed to build response: {}", e)))
}
