use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::{
    dto::validation::validate_font_name,
    tokens::{BaseRole, Mode, SeedConfig, TypographyConfig},
};

/// Page mode as exchanged over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ModeDto {
    Light,
    Dark,
}

impl From<ModeDto> for Mode {
    fn from(value: ModeDto) -> Self {
        match value {
            ModeDto::Light => Mode::Light,
            ModeDto::Dark => Mode::Dark,
        }
    }
}

impl From<Mode> for ModeDto {
    fn from(value: Mode) -> Self {
        match value {
            Mode::Light => ModeDto::Light,
            Mode::Dark => ModeDto::Dark,
        }
    }
}

/// Which role the seed color anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BaseRoleDto {
    Accent,
    #[serde(alias = "bg")]
    Background,
}

impl From<BaseRoleDto> for BaseRole {
    fn from(value: BaseRoleDto) -> Self {
        match value {
            BaseRoleDto::Accent => BaseRole::Accent,
            BaseRoleDto::Background => BaseRole::Background,
        }
    }
}

impl From<BaseRole> for BaseRoleDto {
    fn from(value: BaseRole) -> Self {
        match value {
            BaseRole::Accent => BaseRoleDto::Accent,
            BaseRole::Background => BaseRoleDto::Background,
        }
    }
}

/// Partial seed: every omitted field keeps the value it is applied onto.
///
/// Used as the body of `POST /tokens` (applied onto the configured default
/// seed) and of `PATCH /studios/{id}/seed` (applied onto the studio's seed).
/// Hue, chroma and lightness are not range-checked; out-of-domain values are
/// clamped during generation.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SeedRequest {
    pub base_hue: Option<f64>,
    pub base_chroma: Option<f64>,
    pub base_lightness: Option<f64>,
    pub base_role: Option<BaseRoleDto>,
    pub mode: Option<ModeDto>,
    #[validate(range(exclusive_min = 0.0))]
    pub contrast_multiplier: Option<f64>,
    pub use_gradient: Option<bool>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub gradient_intensity: Option<f64>,
    #[validate(range(min = 0.0, max = 360.0))]
    pub gradient_angle: Option<f64>,
    pub use_secondary_hue: Option<bool>,
    pub secondary_hue: Option<f64>,
    #[validate(nested)]
    pub typography: Option<TypographyPatch>,
}

impl SeedRequest {
    /// Overlay the provided fields onto `seed`.
    pub fn apply(self, mut seed: SeedConfig) -> SeedConfig {
        if let Some(hue) = self.base_hue {
            seed.base_hue = hue;
        }
        if let Some(chroma) = self.base_chroma {
            seed.base_chroma = chroma;
        }
        if let Some(lightness) = self.base_lightness {
            seed.base_lightness = lightness;
        }
        if let Some(role) = self.base_role {
            seed.base_role = role.into();
        }
        if let Some(mode) = self.mode {
            seed.mode = mode.into();
        }
        if let Some(multiplier) = self.contrast_multiplier {
            seed.contrast_multiplier = multiplier;
        }
        if let Some(enabled) = self.use_gradient {
            seed.gradient.enabled = enabled;
        }
        if let Some(intensity) = self.gradient_intensity {
            seed.gradient.intensity = intensity;
        }
        if let Some(angle) = self.gradient_angle {
            seed.gradient.angle = angle;
        }
        if let Some(enabled) = self.use_secondary_hue {
            seed.secondary_hue.enabled = enabled;
        }
        if let Some(hue) = self.secondary_hue {
            seed.secondary_hue.hue = hue;
        }
        if let Some(typography) = self.typography {
            seed.typography = typography.apply(seed.typography);
        }
        seed
    }
}

/// Font slot changes.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypographyPatch {
    pub heading_font: Option<String>,
    pub body_font: Option<String>,
    /// If not specified, keeps the current slot.
    /// If null is specified, clears the slot.
    /// If a string is specified, sets the slot to this family.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub editorial_font: Option<Option<String>>,
    /// Same semantics as `editorial_font`.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub display_font: Option<Option<String>>,
}

impl TypographyPatch {
    fn apply(self, mut config: TypographyConfig) -> TypographyConfig {
        if let Some(heading) = self.heading_font {
            config.heading = heading.trim().to_string();
        }
        if let Some(body) = self.body_font {
            config.body = body.trim().to_string();
        }
        if let Some(editorial) = self.editorial_font {
            config.editorial = editorial.map(|name| name.trim().to_string());
        }
        if let Some(display) = self.display_font {
            config.display = display.map(|name| name.trim().to_string());
        }
        config
    }
}

impl Validate for TypographyPatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(ref name) = self.heading_font {
            if let Err(e) = validate_font_name(name) {
                errors.add("heading_font", e);
            }
        }
        if let Some(ref name) = self.body_font {
            if let Err(e) = validate_font_name(name) {
                errors.add("body_font", e);
            }
        }
        if let Some(Some(ref name)) = self.editorial_font {
            if let Err(e) = validate_font_name(name) {
                errors.add("editorial_font", e);
            }
        }
        if let Some(Some(ref name)) = self.display_font {
            if let Err(e) = validate_font_name(name) {
                errors.add("display_font", e);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Full seed as returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeedConfigDto {
    pub base_hue: f64,
    pub base_chroma: f64,
    pub base_lightness: f64,
    pub base_role: BaseRoleDto,
    pub mode: ModeDto,
    pub contrast_multiplier: f64,
    pub use_gradient: bool,
    pub gradient_intensity: f64,
    pub gradient_angle: f64,
    pub use_secondary_hue: bool,
    pub secondary_hue: f64,
    pub typography: TypographyDto,
}

/// Font families of a seed.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypographyDto {
    pub heading_font: String,
    pub body_font: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editorial_font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_font: Option<String>,
}

impl From<&SeedConfig> for SeedConfigDto {
    fn from(seed: &SeedConfig) -> Self {
        Self {
            base_hue: seed.base_hue,
            base_chroma: seed.base_chroma,
            base_lightness: seed.base_lightness,
            base_role: seed.base_role.into(),
            mode: seed.mode.into(),
            contrast_multiplier: seed.contrast_multiplier,
            use_gradient: seed.gradient.enabled,
            gradient_intensity: seed.gradient.intensity,
            gradient_angle: seed.gradient.angle,
            use_secondary_hue: seed.secondary_hue.enabled,
            secondary_hue: seed.secondary_hue.hue,
            typography: TypographyDto {
                heading_font: seed.typography.heading.clone(),
                body_font: seed.typography.body.clone(),
                editorial_font: seed.typography.editorial.clone(),
                display_font: seed.typography.display.clone(),
            },
        }
    }
}
