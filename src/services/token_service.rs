use tracing::debug;

use crate::{
    dto::{
        seed::SeedRequest,
        tokens::{ColorFormatDto, ExportTargetDto, TokenSetResponse},
    },
    error::ServiceError,
    export::{self, ExportTarget},
    state::SharedState,
    tokens::{SeedConfig, generate},
};

/// Resolve a request against the configured default seed.
pub fn resolve_seed(state: &SharedState, request: SeedRequest) -> SeedConfig {
    request.apply(state.config().default_seed().clone())
}

/// Generate a token set for a one-off seed.
pub fn generate_tokens(
    state: &SharedState,
    request: SeedRequest,
    format: ColorFormatDto,
) -> TokenSetResponse {
    let seed = resolve_seed(state, request);
    let tokens = generate(&seed);
    debug!(mode = ?seed.mode, role = ?seed.base_role, "generated token set");
    TokenSetResponse::new(&tokens, &seed.gradient, format)
}

/// Render a one-off seed as CSS, JSON or Tailwind text.
pub fn export_tokens(
    state: &SharedState,
    request: SeedRequest,
    target: ExportTargetDto,
    format: ColorFormatDto,
) -> Result<(ExportTarget, String), ServiceError> {
    let seed = resolve_seed(state, request);
    render_export(&seed, target, format)
}

/// Generate and render `seed` for `target`.
pub(crate) fn render_export(
    seed: &SeedConfig,
    target: ExportTargetDto,
    format: ColorFormatDto,
) -> Result<(ExportTarget, String), ServiceError> {
    let target = ExportTarget::from(target);
    let tokens = generate(seed);
    let body = export::export(&tokens, &seed.gradient, target, format.into())?;
    Ok((target, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, state::AppState};

    #[test]
    fn omitted_fields_use_configured_default() {
        let config = AppConfig::from_json(r#"{ "mode": "dark" }"#).unwrap();
        let state = AppState::new(config);

        let seed = resolve_seed(&state, SeedRequest::default());
        assert_eq!(seed.mode, crate::tokens::Mode::Dark);
        assert_eq!(seed.base_hue, 205.0);
    }

    #[test]
    fn generated_tokens_match_generator() {
        let state = AppState::new(AppConfig::default());
        let response = generate_tokens(&state, SeedRequest::default(), ColorFormatDto::Hex);
        let tokens = generate(&SeedConfig::default());
        assert_eq!(response.colors["bgPrimary"], tokens.colors.bg_primary.to_hex());
        assert_eq!(response.colors.len(), 10);
    }

    #[test]
    fn export_dispatches_on_target() {
        let state = AppState::new(AppConfig::default());
        let (target, css) = export_tokens(
            &state,
            SeedRequest::default(),
            ExportTargetDto::Css,
            ColorFormatDto::Hex,
        )
        .unwrap();
        assert_eq!(target, ExportTarget::Css);
        assert!(css.starts_with(":root {"));

        let (target, json) = export_tokens(
            &state,
            SeedRequest::default(),
            ExportTargetDto::Json,
            ColorFormatDto::Oklch,
        )
        .unwrap();
        assert_eq!(target, ExportTarget::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["colors"]["accentPrimary"], "oklch(60.00% 0.100 205.00)");
    }
}
