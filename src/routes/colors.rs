use axum::{Json, Router, routing::post};
use axum_valid::Valid;

use crate::{
    dto::color::{ColorFormatsResponse, HexColorRequest, OklchDto, ParseColorRequest},
    error::AppError,
    services::color_service,
    state::SharedState,
};

/// Stateless color conversion endpoints backing the pickers.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/colors/from-hex", post(from_hex))
        .route("/colors/format", post(format_color))
        .route("/colors/parse", post(parse_color))
}

/// Convert a picker hex value into its perceptual triple and every format.
#[utoipa::path(
    post,
    path = "/colors/from-hex",
    tag = "colors",
    request_body = HexColorRequest,
    responses(
        (status = 200, description = "Converted color", body = ColorFormatsResponse),
        (status = 400, description = "Malformed hex")
    )
)]
pub async fn from_hex(
    Valid(Json(payload)): Valid<Json<HexColorRequest>>,
) -> Result<Json<ColorFormatsResponse>, AppError> {
    Ok(Json(color_service::from_hex(&payload.hex)?))
}

/// Render a perceptual triple in every format.
#[utoipa::path(
    post,
    path = "/colors/format",
    tag = "colors",
    request_body = OklchDto,
    responses((status = 200, description = "Formatted color", body = ColorFormatsResponse))
)]
pub async fn format_color(Json(payload): Json<OklchDto>) -> Json<ColorFormatsResponse> {
    Json(color_service::format(payload))
}

/// Decode a canonical `oklch(L% C H)` string.
#[utoipa::path(
    post,
    path = "/colors/parse",
    tag = "colors",
    request_body = ParseColorRequest,
    responses(
        (status = 200, description = "Decoded color", body = ColorFormatsResponse),
        (status = 400, description = "Malformed canonical string")
    )
)]
pub async fn parse_color(
    Valid(Json(payload)): Valid<Json<ParseColorRequest>>,
) -> Result<Json<ColorFormatsResponse>, AppError> {
    Ok(Json(color_service::parse(&payload.value)?))
}
