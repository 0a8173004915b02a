use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    color::{ColorFormat, Oklch},
    dto::validation::validate_hex_color,
};

/// Color picker value.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct HexColorRequest {
    /// `#RRGGBB`, `RRGGBB` or the 3-digit shorthand.
    #[validate(custom(function = "validate_hex_color"))]
    pub hex: String,
}

/// Canonical perceptual string to decode.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ParseColorRequest {
    /// `oklch(L% C H)` as produced by the formatter.
    #[validate(length(min = 1, max = 64))]
    pub value: String,
}

/// Perceptual triple; out-of-domain values are clamped, not rejected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct OklchDto {
    /// Lightness `0..=1`.
    pub l: f64,
    /// Chroma `0..=0.4`.
    pub c: f64,
    /// Hue in degrees.
    pub h: f64,
}

impl From<OklchDto> for Oklch {
    fn from(value: OklchDto) -> Self {
        Oklch::new(value.l, value.c, value.h)
    }
}

impl From<Oklch> for OklchDto {
    fn from(value: Oklch) -> Self {
        Self {
            l: value.l,
            c: value.c,
            h: value.h,
        }
    }
}

/// One color rendered in every supported format.
#[derive(Debug, Serialize, ToSchema)]
pub struct ColorFormatsResponse {
    /// Clamped triple the strings were rendered from.
    pub oklch: OklchDto,
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
    /// Canonical `oklch(L% C H)` serialization.
    pub canonical: String,
}

impl From<Oklch> for ColorFormatsResponse {
    fn from(color: Oklch) -> Self {
        Self {
            oklch: color.into(),
            hex: color.format(ColorFormat::Hex),
            rgb: color.format(ColorFormat::Rgb),
            hsl: color.format(ColorFormat::Hsl),
            canonical: color.format(ColorFormat::Oklch),
        }
    }
}
