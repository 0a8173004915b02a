use std::convert::Infallible;

use axum::{
    Router,
    extract::{Path, State},
    response::sse::Sse,
    routing::get,
};
use futures::Stream;
use tracing::info;
use uuid::Uuid;

use crate::{error::AppError, services::sse_service, state::SharedState};

#[utoipa::path(
    get,
    path = "/sse/studios/{id}",
    tag = "sse",
    params(("id" = Uuid, Path, description = "Studio identifier")),
    responses(
        (status = 200, description = "Studio SSE stream", content_type = "text/event-stream", body = String),
        (status = 404, description = "Unknown studio")
    )
)]
/// Stream `tokens.updated` and `studio.deleted` events for one studio.
pub async fn studio_stream(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Sse<impl Stream<Item = Result<axum::response::sse::Event, Infallible>>>, AppError> {
    let (receiver, handshake) = sse_service::subscribe_studio(&state, id).await?;
    info!(studio_id = %id, "New studio SSE connection");
    Ok(sse_service::to_sse_stream(receiver, Some(handshake), id))
}

/// Configure the SSE endpoints.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/sse/studios/{id}", get(studio_stream))
}
