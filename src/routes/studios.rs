use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, patch, post, put},
};
use axum_valid::Valid;
use uuid::Uuid;

use crate::{
    dto::{
        color::HexColorRequest,
        seed::SeedRequest,
        studio::{CreateStudioRequest, StudioResponse, StylesheetResponse},
        tokens::{ExportQuery, FormatQuery},
    },
    error::AppError,
    services::studio_service,
    state::SharedState,
};

/// Studio session endpoints: create, read, edit field by field, export, delete.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/studios", post(create_studio))
        .route("/studios/{id}", get(get_studio).delete(delete_studio))
        .route("/studios/{id}/seed", patch(update_seed))
        .route("/studios/{id}/base-color", put(set_base_color))
        .route("/studios/{id}/secondary-color", put(set_secondary_color))
        .route("/studios/{id}/export", get(export_studio))
        .route("/studios/{id}/fonts/stylesheet", get(font_stylesheet))
}

/// Open a studio seeded from the configured default plus the given fields.
#[utoipa::path(
    post,
    path = "/studios",
    tag = "studios",
    params(FormatQuery),
    request_body = CreateStudioRequest,
    responses(
        (status = 201, description = "Studio created", body = StudioResponse),
        (status = 400, description = "Seed failed validation")
    )
)]
pub async fn create_studio(
    State(state): State<SharedState>,
    Query(query): Query<FormatQuery>,
    Valid(Json(payload)): Valid<Json<CreateStudioRequest>>,
) -> (StatusCode, Json<StudioResponse>) {
    let response = studio_service::create_studio(&state, payload, query.format).await;
    (StatusCode::CREATED, Json(response))
}

/// Fetch a studio's current seed and tokens.
#[utoipa::path(
    get,
    path = "/studios/{id}",
    tag = "studios",
    params(
        ("id" = Uuid, Path, description = "Studio identifier"),
        FormatQuery
    ),
    responses(
        (status = 200, description = "Studio state", body = StudioResponse),
        (status = 404, description = "Unknown studio")
    )
)]
pub async fn get_studio(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Query(query): Query<FormatQuery>,
) -> Result<Json<StudioResponse>, AppError> {
    Ok(Json(
        studio_service::get_studio(&state, id, query.format).await?,
    ))
}

/// Delete a studio; its SSE subscribers receive `studio.deleted` and are closed.
#[utoipa::path(
    delete,
    path = "/studios/{id}",
    tag = "studios",
    params(("id" = Uuid, Path, description = "Studio identifier")),
    responses(
        (status = 204, description = "Studio deleted"),
        (status = 404, description = "Unknown studio")
    )
)]
pub async fn delete_studio(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    studio_service::delete_studio(&state, id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Replace the studio seed with the given fields overlaid, regenerating every token.
#[utoipa::path(
    patch,
    path = "/studios/{id}/seed",
    tag = "studios",
    params(
        ("id" = Uuid, Path, description = "Studio identifier"),
        FormatQuery
    ),
    request_body = SeedRequest,
    responses(
        (status = 200, description = "Seed replaced", body = StudioResponse),
        (status = 400, description = "Seed failed validation"),
        (status = 404, description = "Unknown studio")
    )
)]
pub async fn update_seed(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Query(query): Query<FormatQuery>,
    Valid(Json(payload)): Valid<Json<SeedRequest>>,
) -> Result<Json<StudioResponse>, AppError> {
    Ok(Json(
        studio_service::update_seed(&state, id, payload, query.format).await?,
    ))
}

/// Set the anchor hue, chroma and lightness from a picked hex color.
#[utoipa::path(
    put,
    path = "/studios/{id}/base-color",
    tag = "studios",
    params(
        ("id" = Uuid, Path, description = "Studio identifier"),
        FormatQuery
    ),
    request_body = HexColorRequest,
    responses(
        (status = 200, description = "Seed replaced", body = StudioResponse),
        (status = 400, description = "Malformed hex"),
        (status = 404, description = "Unknown studio")
    )
)]
pub async fn set_base_color(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Query(query): Query<FormatQuery>,
    Valid(Json(payload)): Valid<Json<HexColorRequest>>,
) -> Result<Json<StudioResponse>, AppError> {
    Ok(Json(
        studio_service::set_base_color(&state, id, &payload.hex, query.format).await?,
    ))
}

/// Set only the secondary hue from a picked hex color.
#[utoipa::path(
    put,
    path = "/studios/{id}/secondary-color",
    tag = "studios",
    params(
        ("id" = Uuid, Path, description = "Studio identifier"),
        FormatQuery
    ),
    request_body = HexColorRequest,
    responses(
        (status = 200, description = "Seed replaced", body = StudioResponse),
        (status = 400, description = "Malformed hex"),
        (status = 404, description = "Unknown studio")
    )
)]
pub async fn set_secondary_color(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Query(query): Query<FormatQuery>,
    Valid(Json(payload)): Valid<Json<HexColorRequest>>,
) -> Result<Json<StudioResponse>, AppError> {
    Ok(Json(
        studio_service::set_secondary_color(&state, id, &payload.hex, query.format).await?,
    ))
}

/// Export the studio's tokens as CSS, JSON or a Tailwind config snippet.
#[utoipa::path(
    get,
    path = "/studios/{id}/export",
    tag = "studios",
    params(
        ("id" = Uuid, Path, description = "Studio identifier"),
        ExportQuery
    ),
    responses(
        (status = 200, description = "Exported text", body = String),
        (status = 404, description = "Unknown studio")
    )
)]
pub async fn export_studio(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, AppError> {
    let (target, body) =
        studio_service::export_studio(&state, id, query.target, query.format).await?;
    Ok(([(header::CONTENT_TYPE, target.content_type())], body).into_response())
}

/// Web-font stylesheet URL for the studio's families.
#[utoipa::path(
    get,
    path = "/studios/{id}/fonts/stylesheet",
    tag = "studios",
    params(("id" = Uuid, Path, description = "Studio identifier")),
    responses(
        (status = 200, description = "Stylesheet URL", body = StylesheetResponse),
        (status = 404, description = "Unknown studio")
    )
)]
pub async fn font_stylesheet(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StylesheetResponse>, AppError> {
    Ok(Json(studio_service::font_stylesheet(&state, id).await?))
}
