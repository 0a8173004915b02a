#![forbid(unsafe_code)]

use chroma_tokens::{
    color::Oklch,
    tokens::{DesignTokens, TokenRole, contrast::contrast_ratio},
};
use palette::{Srgb, color_difference::Wcag21RelativeContrast};
use serde::Serialize;

const TEXT_ROLES: [TokenRole; 4] = [
    TokenRole::TextHeading,
    TokenRole::TextPrimary,
    TokenRole::TextSecondary,
    TokenRole::TextMuted,
];
const BACKGROUND_ROLES: [TokenRole; 3] = [
    TokenRole::BgPrimary,
    TokenRole::BgSecondary,
    TokenRole::BgTertiary,
];
const AA_NORMAL_TEXT: f32 = 4.5;

/// Contrast of one text role over one surface.
#[derive(Clone, Debug, Serialize)]
pub struct ContrastRow {
    pub text: &'static str,
    pub background: &'static str,
    pub text_rgb: Srgb<u8>,
    pub background_rgb: Srgb<u8>,
    /// Ratio on the perceptual lightness channel, as the generator solves it.
    pub lightness_ratio: f64,
    /// WCAG 2.1 ratio on the rendered sRGB bytes.
    pub wcag_ratio: f32,
    pub passes_aa: bool,
}

#[inline]
fn rendered(color: Oklch) -> Srgb<u8> {
    let [r, g, b] = color.to_srgb_bytes();
    Srgb::new(r, g, b)
}

#[inline]
fn wcag(a: Srgb<u8>, b: Srgb<u8>) -> f32 {
    a.into_format::<f32>().relative_contrast(b.into_format())
}

/// Every text role against every surface of the elevation ladder.
#[must_use]
pub fn audit_tokens(tokens: &DesignTokens) -> Vec<ContrastRow> {
    let mut rows = Vec::with_capacity(TEXT_ROLES.len() * BACKGROUND_ROLES.len());
    for background in BACKGROUND_ROLES {
        let bg = tokens.colors.get(background);
        for text in TEXT_ROLES {
            let fg = tokens.colors.get(text);
            let (text_rgb, background_rgb) = (rendered(fg), rendered(bg));
            let wcag_ratio = wcag(text_rgb, background_rgb);
            rows.push(ContrastRow {
                text: text.key(),
                background: background.key(),
                text_rgb,
                background_rgb,
                lightness_ratio: contrast_ratio(fg.l, bg.l),
                wcag_ratio,
                passes_aa: wcag_ratio >= AA_NORMAL_TEXT,
            });
        }
    }
    rows
}
