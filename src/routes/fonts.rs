use axum::{Json, Router, extract::State, routing::get};

use crate::{dto::studio::FontCatalogResponse, services::studio_service, state::SharedState};

#[utoipa::path(
    get,
    path = "/fonts",
    tag = "fonts",
    responses((status = 200, description = "Font catalogs", body = FontCatalogResponse))
)]
/// List the heading and body families offered by the pickers.
pub async fn list_fonts(State(state): State<SharedState>) -> Json<FontCatalogResponse> {
    Json(studio_service::font_catalog(&state))
}

/// Configure the font catalog route.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/fonts", get(list_fonts))
}
