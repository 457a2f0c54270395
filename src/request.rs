//! Incoming request parsing
//!
//! Shape-checks the caller's payload into the closed [`RelayRequest`] form.
//! Parse failures come back as a typed [`RelayError::MalformedRequest`],
//! never a panic or a raw serde error crossing the boundary.

use serde::{Deserialize, Serialize};

use crate::error::{RelayError, RelayResult};
use crate::prompts::Mode;

/// Conversation turn role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single conversation turn; order within the sequence is chronological
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

/// The caller's payload: a conversation plus the requested behavior
///
/// `messages` may be empty and is forwarded as-is; no role-ordering or
/// content validation is applied beyond shape.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default, rename = "type")]
    pub mode: Mode,
}

impl RelayRequest {
    /// Parse a raw request body into a validated request
    pub fn from_bytes(body: &[u8]) -> RelayResult<Self> {
        serde_json::from_slice(body)
            .map_err(|e| RelayError::MalformedRequest(format!("Invalid request body: {}", e)))
    }
}
