use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::{
    color::Oklch,
    dto::{
        seed::SeedRequest,
        studio::{CreateStudioRequest, FontCatalogResponse, StudioResponse, StylesheetResponse},
        tokens::{ColorFormatDto, ExportTargetDto},
    },
    error::ServiceError,
    export::ExportTarget,
    services::{sse_events, token_service},
    state::{SharedState, Studio},
    tokens::{SeedConfig, typography::stylesheet_url},
};

/// Open a new studio seeded from the configured default plus `request`.
pub async fn create_studio(
    state: &SharedState,
    request: CreateStudioRequest,
    format: ColorFormatDto,
) -> StudioResponse {
    let seed = token_service::resolve_seed(state, request.seed.unwrap_or_default());
    let studio = state.create_studio(seed);
    let snapshot = studio.snapshot().await;
    info!(studio_id = %studio.id(), studios = state.studio_count(), "studio created");
    StudioResponse::new(&studio, &snapshot, format)
}

/// Current seed and tokens of a studio.
pub async fn get_studio(
    state: &SharedState,
    id: Uuid,
    format: ColorFormatDto,
) -> Result<StudioResponse, ServiceError> {
    let studio = find_studio(state, id)?;
    let snapshot = studio.snapshot().await;
    Ok(StudioResponse::new(&studio, &snapshot, format))
}

/// Remove a studio and close its stream.
pub fn delete_studio(state: &SharedState, id: Uuid) -> Result<(), ServiceError> {
    let studio = state
        .remove_studio(id)
        .ok_or_else(|| not_found(id))?;
    sse_events::broadcast_studio_deleted(&studio);
    info!(studio_id = %id, "studio deleted");
    Ok(())
}

/// Overlay the provided seed fields and regenerate.
pub async fn update_seed(
    state: &SharedState,
    id: Uuid,
    patch: SeedRequest,
    format: ColorFormatDto,
) -> Result<StudioResponse, ServiceError> {
    let studio = find_studio(state, id)?;
    Ok(replace_seed(&studio, format, |seed| patch.apply(seed)).await)
}

/// Set hue, chroma and lightness of the anchor from a picked hex color.
pub async fn set_base_color(
    state: &SharedState,
    id: Uuid,
    hex: &str,
    format: ColorFormatDto,
) -> Result<StudioResponse, ServiceError> {
    let color = Oklch::from_hex(hex)?;
    let studio = find_studio(state, id)?;
    Ok(replace_seed(&studio, format, |seed| seed.with_base_color(color)).await)
}

/// Set only the secondary hue from a picked hex color.
pub async fn set_secondary_color(
    state: &SharedState,
    id: Uuid,
    hex: &str,
    format: ColorFormatDto,
) -> Result<StudioResponse, ServiceError> {
    let color = Oklch::from_hex(hex)?;
    let studio = find_studio(state, id)?;
    Ok(replace_seed(&studio, format, |mut seed| {
        seed.secondary_hue.hue = color.h;
        seed
    })
    .await)
}

/// Render the studio's current seed for `target`.
pub async fn export_studio(
    state: &SharedState,
    id: Uuid,
    target: ExportTargetDto,
    format: ColorFormatDto,
) -> Result<(ExportTarget, String), ServiceError> {
    let studio = find_studio(state, id)?;
    let snapshot = studio.snapshot().await;
    token_service::render_export(&snapshot.seed, target, format)
}

/// Families offered by the font pickers.
pub fn font_catalog(state: &SharedState) -> FontCatalogResponse {
    let config = state.config();
    FontCatalogResponse {
        heading: config.heading_fonts().to_vec(),
        body: config.body_fonts().to_vec(),
    }
}

/// Web-font stylesheet URL for the studio's families.
pub async fn font_stylesheet(
    state: &SharedState,
    id: Uuid,
) -> Result<StylesheetResponse, ServiceError> {
    let studio = find_studio(state, id)?;
    let snapshot = studio.snapshot().await;
    Ok(StylesheetResponse {
        url: stylesheet_url(state.config().font_stylesheet_url(), &snapshot.seed.typography),
    })
}

async fn replace_seed<F>(studio: &Studio, format: ColorFormatDto, edit: F) -> StudioResponse
where
    F: FnOnce(SeedConfig) -> SeedConfig,
{
    let snapshot = studio.update_seed(edit).await;
    sse_events::broadcast_tokens_updated(studio, &snapshot);
    info!(
        studio_id = %studio.id(),
        revision = snapshot.revision,
        mode = ?snapshot.seed.mode,
        "studio seed replaced"
    );
    StudioResponse::new(studio, &snapshot, format)
}

fn find_studio(state: &SharedState, id: Uuid) -> Result<Arc<Studio>, ServiceError> {
    state.studio(id).ok_or_else(|| not_found(id))
}

fn not_found(id: Uuid) -> ServiceError {
    ServiceError::NotFound(format!("studio `{id}` not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::AppConfig,
        dto::seed::{ModeDto, TypographyPatch},
        services::sse_events::{EVENT_STUDIO_DELETED, EVENT_TOKENS_UPDATED},
        state::AppState,
        tokens::{Mode, generate},
    };

    fn state() -> SharedState {
        AppState::new(AppConfig::default())
    }

    #[tokio::test]
    async fn create_then_get() {
        let state = state();
        let created = create_studio(&state, CreateStudioRequest::default(), ColorFormatDto::Hex).await;
        assert_eq!(created.revision, 1);

        let fetched = get_studio(&state, created.id, ColorFormatDto::Hex).await.unwrap();
        assert_eq!(fetched.tokens.colors, created.tokens.colors);
        assert_eq!(fetched.seed.base_hue, 205.0);
    }

    #[tokio::test]
    async fn seed_patch_regenerates_and_broadcasts() {
        let state = state();
        let created = create_studio(&state, CreateStudioRequest::default(), ColorFormatDto::Hex).await;
        let studio = state.studio(created.id).unwrap();
        let mut receiver = studio.hub().subscribe();

        let patch = SeedRequest {
            mode: Some(ModeDto::Dark),
            ..SeedRequest::default()
        };
        let updated = update_seed(&state, created.id, patch, ColorFormatDto::Hex)
            .await
            .unwrap();

        assert_eq!(updated.revision, 2);
        let expected = generate(&SeedConfig {
            mode: Mode::Dark,
            ..SeedConfig::default()
        });
        assert_eq!(updated.tokens.colors["bgPrimary"], expected.colors.bg_primary.to_hex());

        let event = receiver.recv().await.unwrap();
        assert_eq!(event.event.as_deref(), Some(EVENT_TOKENS_UPDATED));
        assert!(event.data.contains("\"revision\":2"));
    }

    #[tokio::test]
    async fn successive_setters_keep_earlier_fields() {
        let state = state();
        let created = create_studio(&state, CreateStudioRequest::default(), ColorFormatDto::Hex).await;

        update_seed(
            &state,
            created.id,
            SeedRequest {
                typography: Some(TypographyPatch {
                    heading_font: Some("Lora".into()),
                    ..TypographyPatch::default()
                }),
                ..SeedRequest::default()
            },
            ColorFormatDto::Hex,
        )
        .await
        .unwrap();
        let after = set_secondary_color(&state, created.id, "#0000ff", ColorFormatDto::Hex)
            .await
            .unwrap();

        assert_eq!(after.revision, 3);
        assert_eq!(after.seed.typography.heading_font, "Lora");
        assert!(!after.seed.use_secondary_hue);
        // pure blue sits around 264 degrees
        assert!((after.seed.secondary_hue - 264.0).abs() < 1.0);
        assert_eq!(after.seed.base_hue, 205.0);
    }

    #[tokio::test]
    async fn base_color_from_hex_sets_anchor() {
        let state = state();
        let created = create_studio(&state, CreateStudioRequest::default(), ColorFormatDto::Hex).await;

        let after = set_base_color(&state, created.id, "#3366CC", ColorFormatDto::Hex)
            .await
            .unwrap();
        assert_eq!(after.tokens.colors["accentPrimary"], "#3366CC");

        let rejected = set_base_color(&state, created.id, "#33", ColorFormatDto::Hex).await;
        assert!(matches!(rejected, Err(ServiceError::InvalidInput(_))));
        // a rejected setter leaves the revision alone
        let current = get_studio(&state, created.id, ColorFormatDto::Hex).await.unwrap();
        assert_eq!(current.revision, 2);
    }

    #[tokio::test]
    async fn delete_notifies_and_forgets() {
        let state = state();
        let created = create_studio(&state, CreateStudioRequest::default(), ColorFormatDto::Hex).await;
        let mut receiver = state.studio(created.id).unwrap().hub().subscribe();

        delete_studio(&state, created.id).unwrap();

        let event = receiver.recv().await.unwrap();
        assert_eq!(event.event.as_deref(), Some(EVENT_STUDIO_DELETED));
        assert!(matches!(
            get_studio(&state, created.id, ColorFormatDto::Hex).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            delete_studio(&state, created.id),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn stylesheet_and_export_follow_the_seed() {
        let state = state();
        let created = create_studio(&state, CreateStudioRequest::default(), ColorFormatDto::Hex).await;

        let stylesheet = font_stylesheet(&state, created.id).await.unwrap();
        assert!(stylesheet.url.starts_with("https://fonts.googleapis.com/css2?"));
        assert!(stylesheet.url.ends_with("display=swap"));

        let (target, js) = export_studio(
            &state,
            created.id,
            ExportTargetDto::Tailwind,
            ColorFormatDto::Hex,
        )
        .await
        .unwrap();
        assert_eq!(target, ExportTarget::Tailwind);
        assert!(js.contains("heading: ['Unbounded'],"));

        let catalog = font_catalog(&state);
        assert!(catalog.heading.contains(&"Unbounded".to_string()));
        assert!(catalog.body.contains(&"Inter".to_string()));
    }
}
