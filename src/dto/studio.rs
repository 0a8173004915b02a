use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        format_system_time,
        seed::{SeedConfigDto, SeedRequest},
        tokens::{ColorFormatDto, TokenSetResponse},
    },
    state::{Studio, StudioSnapshot},
};

/// Body of `POST /studios`.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct CreateStudioRequest {
    /// Fields overriding the configured default seed.
    #[serde(default)]
    #[validate(nested)]
    pub seed: Option<SeedRequest>,
}

/// Current state of a studio.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudioResponse {
    pub id: Uuid,
    pub created_at: String,
    pub updated_at: String,
    /// Bumped on every seed replacement.
    pub revision: u64,
    pub seed: SeedConfigDto,
    pub tokens: TokenSetResponse,
}

impl StudioResponse {
    /// Build the response for `studio` at `snapshot`.
    pub fn new(studio: &Studio, snapshot: &StudioSnapshot, format: ColorFormatDto) -> Self {
        Self {
            id: studio.id(),
            created_at: format_system_time(studio.created_at()),
            updated_at: format_system_time(snapshot.updated_at),
            revision: snapshot.revision,
            seed: SeedConfigDto::from(snapshot.seed.as_ref()),
            tokens: TokenSetResponse::new(&snapshot.tokens, &snapshot.seed.gradient, format),
        }
    }
}

/// Families offered by the font pickers.
#[derive(Debug, Serialize, ToSchema)]
pub struct FontCatalogResponse {
    pub heading: Vec<String>,
    pub body: Vec<String>,
}

/// Web-font stylesheet for a studio's families.
#[derive(Debug, Serialize, ToSchema)]
pub struct StylesheetResponse {
    pub url: String,
}
