use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::dto::{seed::SeedConfigDto, tokens::TokenSetResponse};

#[derive(Clone, Debug)]
/// Dispatched payload carried across SSE channels.
pub struct ServerEvent {
    pub event: Option<String>,
    pub data: String,
}

impl ServerEvent {
    /// Create an event carrying raw text.
    pub fn new(event: Option<String>, data: String) -> Self {
        Self { event, data }
    }

    /// Convenience wrapper that serialises `payload` into the SSE data field.
    pub fn json<E, T>(event: E, payload: &T) -> serde_json::Result<Self>
    where
        E: Into<Option<String>>,
        T: Serialize,
    {
        Ok(Self {
            event: event.into(),
            data: serde_json::to_string(payload)?,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Initial metadata sent to an SSE client when it connects.
pub struct Handshake {
    /// Identifier of the studio whose stream was joined.
    pub studio_id: Uuid,
    /// Revision current at subscription time.
    pub revision: u64,
    /// Human-readable message confirming the subscription.
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Broadcast whenever a studio's seed is replaced.
pub struct TokensUpdatedEvent {
    pub studio_id: Uuid,
    pub revision: u64,
    pub seed: SeedConfigDto,
    pub tokens: TokenSetResponse,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Broadcast right before a studio is removed.
pub struct StudioDeletedEvent {
    pub studio_id: Uuid,
}
