//! Application-level configuration loading: default seed and font catalogs.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use tracing::{info, warn};

use crate::{
    color::{Oklch, normalize_hue},
    tokens::{BaseRole, Mode, SeedConfig, TypographyConfig},
};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "CHROMA_TOKENS_CONFIG_PATH";
/// Stylesheet endpoint used to load web fonts.
const DEFAULT_FONT_STYLESHEET_URL: &str = "https://fonts.googleapis.com/css2";
/// Per-studio SSE channel capacity.
const DEFAULT_SSE_CAPACITY: usize = 16;

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    default_seed: SeedConfig,
    heading_fonts: Vec<String>,
    body_fonts: Vec<String>,
    font_stylesheet_url: String,
    sse_capacity: usize,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(app_config) => {
                    info!(
                        path = %path.display(),
                        heading_fonts = app_config.heading_fonts.len(),
                        body_fonts = app_config.body_fonts.len(),
                        "loaded token studio config"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Parse a configuration document; absent keys keep their defaults.
    pub fn from_json(contents: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<RawConfig>(contents).map(Into::into)
    }

    /// Seed used for new studios and for requests that omit fields.
    pub fn default_seed(&self) -> &SeedConfig {
        &self.default_seed
    }

    /// Families offered for the heading slot.
    pub fn heading_fonts(&self) -> &[String] {
        &self.heading_fonts
    }

    /// Families offered for the body slot.
    pub fn body_fonts(&self) -> &[String] {
        &self.body_fonts
    }

    /// Base URL of the web-font stylesheet service.
    pub fn font_stylesheet_url(&self) -> &str {
        &self.font_stylesheet_url
    }

    /// Capacity of each studio's broadcast channel.
    pub fn sse_capacity(&self) -> usize {
        self.sse_capacity
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_seed: SeedConfig::default(),
            heading_fonts: to_strings(DEFAULT_HEADING_FONTS),
            body_fonts: to_strings(DEFAULT_BODY_FONTS),
            font_stylesheet_url: DEFAULT_FONT_STYLESHEET_URL.to_string(),
            sse_capacity: DEFAULT_SSE_CAPACITY,
        }
    }
}

#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    /// Canonical `oklch(L% C H)` string for the default anchor.
    #[serde_as(as = "Option<DisplayFromStr>")]
    base_color: Option<Oklch>,
    base_role: Option<RawRole>,
    mode: Option<RawMode>,
    contrast_multiplier: Option<f64>,
    gradient: Option<RawGradient>,
    secondary_hue: Option<RawSecondaryHue>,
    typography: Option<RawTypography>,
    heading_fonts: Option<Vec<String>>,
    body_fonts: Option<Vec<String>>,
    font_stylesheet_url: Option<String>,
    sse_capacity: Option<usize>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawMode {
    Light,
    Dark,
}

impl From<RawMode> for Mode {
    fn from(value: RawMode) -> Self {
        match value {
            RawMode::Light => Mode::Light,
            RawMode::Dark => Mode::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawRole {
    Accent,
    #[serde(alias = "bg")]
    Background,
}

impl From<RawRole> for BaseRole {
    fn from(value: RawRole) -> Self {
        match value {
            RawRole::Accent => BaseRole::Accent,
            RawRole::Background => BaseRole::Background,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawGradient {
    enabled: Option<bool>,
    intensity: Option<f64>,
    angle: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSecondaryHue {
    enabled: Option<bool>,
    hue: Option<f64>,
}

/// Font families of the default seed; blank names are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTypography {
    heading: Option<String>,
    body: Option<String>,
    editorial: Option<String>,
    display: Option<String>,
}

impl RawTypography {
    fn apply(self, mut typography: TypographyConfig) -> TypographyConfig {
        if let Some(heading) = font_name(self.heading) {
            typography.heading = heading;
        }
        if let Some(body) = font_name(self.body) {
            typography.body = body;
        }
        if let Some(editorial) = font_name(self.editorial) {
            typography.editorial = Some(editorial);
        }
        if let Some(display) = font_name(self.display) {
            typography.display = Some(display);
        }
        typography
    }
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = AppConfig::default();

        let mut default_seed = defaults.default_seed;
        if let Some(color) = value.base_color {
            default_seed = default_seed.with_base_color(color);
        }
        if let Some(role) = value.base_role {
            default_seed.base_role = role.into();
        }
        if let Some(mode) = value.mode {
            default_seed.mode = mode.into();
        }
        if let Some(multiplier) = value
            .contrast_multiplier
            .filter(|multiplier| multiplier.is_finite() && *multiplier > 0.0)
        {
            default_seed.contrast_multiplier = multiplier;
        }
        if let Some(gradient) = value.gradient {
            let seed_gradient = &mut default_seed.gradient;
            seed_gradient.enabled = gradient.enabled.unwrap_or(seed_gradient.enabled);
            if let Some(intensity) = gradient.intensity.filter(|v| (0.0..=100.0).contains(v)) {
                seed_gradient.intensity = intensity;
            }
            if let Some(angle) = gradient.angle.filter(|v| (0.0..=360.0).contains(v)) {
                seed_gradient.angle = angle;
            }
        }
        if let Some(secondary) = value.secondary_hue {
            let seed_secondary = &mut default_seed.secondary_hue;
            seed_secondary.enabled = secondary.enabled.unwrap_or(seed_secondary.enabled);
            if let Some(hue) = secondary.hue.filter(|hue| hue.is_finite()) {
                seed_secondary.hue = normalize_hue(hue);
            }
        }
        if let Some(typography) = value.typography {
            default_seed.typography = typography.apply(default_seed.typography);
        }

        Self {
            default_seed,
            heading_fonts: non_empty(value.heading_fonts).unwrap_or(defaults.heading_fonts),
            body_fonts: non_empty(value.body_fonts).unwrap_or(defaults.body_fonts),
            font_stylesheet_url: value
                .font_stylesheet_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(defaults.font_stylesheet_url),
            sse_capacity: value
                .sse_capacity
                .filter(|capacity| *capacity > 0)
                .unwrap_or(defaults.sse_capacity),
        }
    }
}

fn font_name(name: Option<String>) -> Option<String> {
    name.map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

fn non_empty(list: Option<Vec<String>>) -> Option<Vec<String>> {
    list.filter(|fonts| !fonts.is_empty())
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Heading families shipped with the binary.
const DEFAULT_HEADING_FONTS: &[&str] = &[
    "Montserrat",
    "Playfair Display",
    "Outfit",
    "Clash Display",
    "Manrope",
    "Lora",
    "Unbounded",
    "Raleway",
    "Jost",
];

/// Body families shipped with the binary.
const DEFAULT_BODY_FONTS: &[&str] = &[
    "Inter",
    "Roboto",
    "Plus Jakarta Sans",
    "Satoshi",
    "IBM Plex Sans",
    "Open Sans",
    "Work Sans",
];
