use serde::Serialize;
use tracing::warn;

use crate::{
    dto::{
        seed::SeedConfigDto,
        sse::{ServerEvent, StudioDeletedEvent, TokensUpdatedEvent},
        tokens::{ColorFormatDto, TokenSetResponse},
    },
    state::{Studio, StudioSnapshot},
};

pub(crate) const EVENT_HANDSHAKE: &str = "handshake";
pub(crate) const EVENT_TOKENS_UPDATED: &str = "tokens.updated";
pub(crate) const EVENT_STUDIO_DELETED: &str = "studio.deleted";

/// Broadcast a freshly generated token set to the studio's subscribers.
///
/// Colors are sent as canonical `oklch(...)` strings so clients can render
/// any format locally.
pub fn broadcast_tokens_updated(studio: &Studio, snapshot: &StudioSnapshot) {
    let payload = TokensUpdatedEvent {
        studio_id: studio.id(),
        revision: snapshot.revision,
        seed: SeedConfigDto::from(snapshot.seed.as_ref()),
        tokens: TokenSetResponse::new(
            &snapshot.tokens,
            &snapshot.seed.gradient,
            ColorFormatDto::Oklch,
        ),
    };
    send_studio_event(studio, EVENT_TOKENS_UPDATED, &payload);
}

/// Tell subscribers the studio is going away.
pub fn broadcast_studio_deleted(studio: &Studio) {
    let payload = StudioDeletedEvent {
        studio_id: studio.id(),
    };
    send_studio_event(studio, EVENT_STUDIO_DELETED, &payload);
}

fn send_studio_event(studio: &Studio, event: &str, payload: &impl Serialize) {
    match ServerEvent::json(Some(event.to_string()), payload) {
        Ok(event) => studio.hub().broadcast(event),
        Err(err) => warn!(event, studio_id = %studio.id(), error = %err, "failed to serialize studio SSE payload"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::SeedConfig;

    #[tokio::test]
    async fn tokens_updated_carries_revision_and_tokens() {
        let studio = Studio::new(SeedConfig::default(), 4);
        let mut receiver = studio.hub().subscribe();

        let snapshot = studio.snapshot().await;
        broadcast_tokens_updated(&studio, &snapshot);

        let event = receiver.recv().await.unwrap();
        assert_eq!(event.event.as_deref(), Some(EVENT_TOKENS_UPDATED));
        let value: serde_json::Value = serde_json::from_str(&event.data).unwrap();
        assert_eq!(value["studioId"], studio.id().to_string());
        assert_eq!(value["revision"], 1);
        assert_eq!(value["tokens"]["format"], "oklch");
        assert_eq!(
            value["tokens"]["colors"]["accentPrimary"],
            "oklch(60.00% 0.100 205.00)"
        );
    }

    #[tokio::test]
    async fn studio_deleted_names_the_studio() {
        let studio = Studio::new(SeedConfig::default(), 4);
        let mut receiver = studio.hub().subscribe();

        broadcast_studio_deleted(&studio);

        let event = receiver.recv().await.unwrap();
        assert_eq!(event.event.as_deref(), Some(EVENT_STUDIO_DELETED));
        assert!(event.data.contains(&studio.id().to_string()));
    }
}
