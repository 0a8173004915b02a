use std::{convert::Infallible, time::Duration};

use axum::response::sse::{Event, KeepAlive, Sse};
use futures::Stream;
use tokio::sync::broadcast::{self, error::RecvError};
use uuid::Uuid;

use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::{
    dto::sse::{Handshake, ServerEvent},
    error::ServiceError,
    services::sse_events::EVENT_HANDSHAKE,
    state::SharedState,
};

/// Subscribe to a studio's SSE stream.
///
/// Returns the receiver together with the handshake event that should be
/// delivered to this subscriber only.
pub async fn subscribe_studio(
    state: &SharedState,
    id: Uuid,
) -> Result<(broadcast::Receiver<ServerEvent>, ServerEvent), ServiceError> {
    let studio = state
        .studio(id)
        .ok_or_else(|| ServiceError::NotFound(format!("studio `{id}` not found")))?;

    let receiver = studio.hub().subscribe();
    let snapshot = studio.snapshot().await;
    let handshake = ServerEvent::json(
        Some(EVENT_HANDSHAKE.to_string()),
        &Handshake {
            studio_id: id,
            revision: snapshot.revision,
            message: "studio stream connected".to_string(),
        },
    )?;

    Ok((receiver, handshake))
}

/// Convert a broadcast receiver into an SSE response, forwarding events and
/// cleaning up once the client disconnects.
///
/// `initial` is emitted before anything read from `receiver`.
pub fn to_sse_stream(
    mut receiver: broadcast::Receiver<ServerEvent>,
    initial: Option<ServerEvent>,
    studio_id: Uuid,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    // small bounded channel between forwarder and response
    let (tx, rx) = mpsc::channel::<Result<Event, Infallible>>(8);

    // forwarder task: reads from broadcast and pushes into mpsc
    tokio::spawn(async move {
        if let Some(payload) = initial {
            if tx.send(Ok(to_event(payload))).await.is_err() {
                return;
            }
        }

        loop {
            tokio::select! {
                _ = tx.closed() => break,
                recv_result = receiver.recv() => {
                    match recv_result {
                        Ok(payload) => {
                            if tx.send(Ok(to_event(payload))).await.is_err() {
                                break;
                            }
                        }
                        Err(RecvError::Closed) => break,
                        Err(RecvError::Lagged(skipped)) => {
                            // Skip lagged messages but keep the stream alive.
                            tracing::debug!(%studio_id, skipped, "studio SSE subscriber lagged");
                            continue;
                        }
                    }
                }
            }
        }

        tracing::info!(%studio_id, "Studio SSE stream disconnected");
    });

    // response stream reads from mpsc; when client disconnects axum drops this stream
    let stream = ReceiverStream::new(rx);
    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

fn to_event(payload: ServerEvent) -> Event {
    let mut event = Event::default().data(payload.data);
    if let Some(name) = payload.event {
        event = event.event(name);
    }
    event
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, state::AppState, tokens::SeedConfig};

    #[tokio::test]
    async fn unknown_studio_is_not_found() {
        let state = AppState::new(AppConfig::default());
        let result = subscribe_studio(&state, Uuid::new_v4()).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn subscription_receives_handshake_and_broadcasts() {
        let state = AppState::new(AppConfig::default());
        let studio = state.create_studio(SeedConfig::default());

        let (mut receiver, handshake) = subscribe_studio(&state, studio.id()).await.unwrap();
        assert_eq!(handshake.event.as_deref(), Some(EVENT_HANDSHAKE));
        assert!(handshake.data.contains("\"revision\":1"));
        assert_eq!(studio.hub().subscriber_count(), 1);

        studio
            .hub()
            .broadcast(ServerEvent::new(Some("info".into()), "ping".into()));
        assert_eq!(receiver.recv().await.unwrap().data, "ping");
    }
}
