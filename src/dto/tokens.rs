use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    color::ColorFormat,
    export::{ExportTarget, format_angle},
    tokens::{DesignTokens, Gradient},
};

/// Color string format selectable by clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormatDto {
    #[default]
    Hex,
    Rgb,
    Hsl,
    Oklch,
}

impl From<ColorFormatDto> for ColorFormat {
    fn from(value: ColorFormatDto) -> Self {
        match value {
            ColorFormatDto::Hex => ColorFormat::Hex,
            ColorFormatDto::Rgb => ColorFormat::Rgb,
            ColorFormatDto::Hsl => ColorFormat::Hsl,
            ColorFormatDto::Oklch => ColorFormat::Oklch,
        }
    }
}

/// Export flavour selectable by clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExportTargetDto {
    #[default]
    Css,
    Json,
    Tailwind,
}

impl From<ExportTargetDto> for ExportTarget {
    fn from(value: ExportTargetDto) -> Self {
        match value {
            ExportTargetDto::Css => ExportTarget::Css,
            ExportTargetDto::Json => ExportTarget::Json,
            ExportTargetDto::Tailwind => ExportTarget::Tailwind,
        }
    }
}

/// `?format=` query string.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FormatQuery {
    /// Color format of the returned strings (default `hex`).
    #[serde(default)]
    pub format: ColorFormatDto,
}

/// `?target=&format=` query string.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExportQuery {
    /// Export flavour (default `css`).
    #[serde(default)]
    pub target: ExportTargetDto,
    /// Color format used inside the export (default `hex`).
    #[serde(default)]
    pub format: ColorFormatDto,
}

/// Generated token set with every color pre-formatted.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenSetResponse {
    /// Format used for `colors`.
    pub format: ColorFormatDto,
    /// Role key to formatted color, in fixed role order.
    #[schema(value_type = Object)]
    pub colors: IndexMap<String, String>,
    /// Role key to canonical `oklch(...)` string, independent of `format`.
    #[schema(value_type = Object)]
    pub oklch: IndexMap<String, String>,
    pub typography: TypographyTokensDto,
    /// Resolved gradient when enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
}

/// Typography tokens: fixed sizes plus the chosen families.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypographyTokensDto {
    #[serde(rename = "headingXL")]
    pub heading_xl: String,
    pub heading_m: String,
    pub text_m: String,
    pub text_s: String,
    pub heading_family: String,
    pub body_family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editorial_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_family: Option<String>,
}

impl TokenSetResponse {
    /// Project `tokens` with colors rendered in `format`.
    pub fn new(tokens: &DesignTokens, gradient: &Gradient, format: ColorFormatDto) -> Self {
        let color_format = ColorFormat::from(format);
        let colors = tokens
            .colors
            .iter()
            .map(|(role, color)| (role.key().to_string(), color.format(color_format)))
            .collect();
        let oklch = tokens
            .colors
            .iter()
            .map(|(role, color)| (role.key().to_string(), color.to_string()))
            .collect();
        let gradient = gradient.enabled.then(|| {
            format!(
                "linear-gradient({}deg, {} 0%, {} 100%)",
                format_angle(gradient.angle),
                tokens.colors.bg_primary.format(color_format),
                tokens.colors.bg_secondary.format(color_format)
            )
        });

        let typography = &tokens.typography;
        Self {
            format,
            colors,
            oklch,
            typography: TypographyTokensDto {
                heading_xl: typography.heading_xl.to_string(),
                heading_m: typography.heading_m.to_string(),
                text_m: typography.text_m.to_string(),
                text_s: typography.text_s.to_string(),
                heading_family: typography.heading_family.clone(),
                body_family: typography.body_family.clone(),
                editorial_family: typography.editorial_family.clone(),
                display_family: typography.display_family.clone(),
            },
            gradient,
        }
    }
}
