use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the token studio service.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::tokens::generate_tokens,
        crate::routes::tokens::export_tokens,
        crate::routes::colors::from_hex,
        crate::routes::colors::format_color,
        crate::routes::colors::parse_color,
        crate::routes::fonts::list_fonts,
        crate::routes::studios::create_studio,
        crate::routes::studios::get_studio,
        crate::routes::studios::delete_studio,
        crate::routes::studios::update_seed,
        crate::routes::studios::set_base_color,
        crate::routes::studios::set_secondary_color,
        crate::routes::studios::export_studio,
        crate::routes::studios::font_stylesheet,
        crate::routes::sse::studio_stream,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::seed::SeedRequest,
            crate::dto::seed::TypographyPatch,
            crate::dto::seed::SeedConfigDto,
            crate::dto::seed::TypographyDto,
            crate::dto::seed::ModeDto,
            crate::dto::seed::BaseRoleDto,
            crate::dto::tokens::ColorFormatDto,
            crate::dto::tokens::ExportTargetDto,
            crate::dto::tokens::TokenSetResponse,
            crate::dto::tokens::TypographyTokensDto,
            crate::dto::color::HexColorRequest,
            crate::dto::color::ParseColorRequest,
            crate::dto::color::OklchDto,
            crate::dto::color::ColorFormatsResponse,
            crate::dto::studio::CreateStudioRequest,
            crate::dto::studio::StudioResponse,
            crate::dto::studio::FontCatalogResponse,
            crate::dto::studio::StylesheetResponse,
            crate::dto::sse::Handshake,
            crate::dto::sse::TokensUpdatedEvent,
            crate::dto::sse::StudioDeletedEvent,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "tokens", description = "One-shot token generation and export"),
        (name = "colors", description = "Color conversions for the pickers"),
        (name = "fonts", description = "Font catalogs"),
        (name = "studios", description = "Studio sessions"),
        (name = "sse", description = "Server-sent events streams"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for path in [
            "/healthcheck",
            "/tokens",
            "/tokens/export",
            "/colors/from-hex",
            "/fonts",
            "/studios/{id}/seed",
            "/sse/studios/{id}",
        ] {
            assert!(paths.contains(&path), "missing {path}");
        }
    }
}
