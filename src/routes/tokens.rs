use axum::{
    Json, Router,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::post,
};
use axum_valid::Valid;

use crate::{
    dto::{
        seed::SeedRequest,
        tokens::{ExportQuery, FormatQuery, TokenSetResponse},
    },
    error::AppError,
    services::token_service,
    state::SharedState,
};

/// One-shot generation endpoints; nothing is stored.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/tokens", post(generate_tokens))
        .route("/tokens/export", post(export_tokens))
}

/// Generate a token set from a seed; omitted fields use the configured default.
#[utoipa::path(
    post,
    path = "/tokens",
    tag = "tokens",
    params(FormatQuery),
    request_body = SeedRequest,
    responses(
        (status = 200, description = "Generated tokens", body = TokenSetResponse),
        (status = 400, description = "Seed failed validation")
    )
)]
pub async fn generate_tokens(
    State(state): State<SharedState>,
    Query(query): Query<FormatQuery>,
    Valid(Json(payload)): Valid<Json<SeedRequest>>,
) -> Json<TokenSetResponse> {
    Json(token_service::generate_tokens(&state, payload, query.format))
}

/// Render a seed's tokens as CSS, JSON or a Tailwind config snippet.
#[utoipa::path(
    post,
    path = "/tokens/export",
    tag = "tokens",
    params(ExportQuery),
    request_body = SeedRequest,
    responses(
        (status = 200, description = "Exported text", body = String),
        (status = 400, description = "Seed failed validation")
    )
)]
pub async fn export_tokens(
    State(state): State<SharedState>,
    Query(query): Query<ExportQuery>,
    Valid(Json(payload)): Valid<Json<SeedRequest>>,
) -> Result<Response, AppError> {
    let (target, body) =
        token_service::export_tokens(&state, payload, query.target, query.format)?;
    Ok(([(header::CONTENT_TYPE, target.content_type())], body).into_response())
}
