//! Bridges between [`Oklch`] and the `palette` color types.
//!
//! `palette` owns the OKLab matrices and the sRGB transfer curve; this module
//! only routes our clamped triple through it and quantises the result.

use palette::{
    FromColor, Hsl, LinSrgb, Oklab, Oklch as PaletteOklch, Srgb, convert::FromColorUnclamped,
    encoding,
};

use super::Oklch;

fn to_oklab(color: Oklch) -> Oklab<f64> {
    Oklab::<f64>::from_color_unclamped(PaletteOklch::<f64>::new(color.l, color.c, color.h))
}

fn from_srgb(rgb: Srgb<f64>) -> Oklch {
    let oklab = Oklab::<f64>::from_color_unclamped(rgb);
    let oklch = PaletteOklch::<f64>::from_color_unclamped(oklab);
    Oklch::new(oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
}

/// OKLCH → linear sRGB, channels left outside `[0, 1]` when out of gamut.
pub(super) fn oklch_to_linear_rgb(color: Oklch) -> LinSrgb<f64> {
    LinSrgb::<f64>::from_color_unclamped(to_oklab(color))
}

/// OKLCH → gamma-encoded sRGB bytes, each channel clamped before rounding.
pub(super) fn oklch_to_srgb_bytes(color: Oklch) -> [u8; 3] {
    let rgb = Srgb::<f64>::from_color(to_oklab(color)).into_format::<u8>();
    [rgb.red, rgb.green, rgb.blue]
}

/// sRGB bytes → OKLCH, linearising the channels before the matrices.
pub(super) fn srgb_bytes_to_oklch([r, g, b]: [u8; 3]) -> Oklch {
    from_srgb(Srgb::<u8>::new(r, g, b).into_format::<f64>())
}

/// HSL of sRGB bytes, rounded to integer degrees and percent.
pub(super) fn srgb_bytes_to_hsl([r, g, b]: [u8; 3]) -> (u16, u8, u8) {
    let hsl = Hsl::<encoding::Srgb, f64>::from_color_unclamped(
        Srgb::<u8>::new(r, g, b).into_format::<f64>(),
    );
    let hue = hsl.hue.into_positive_degrees().round();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = (
        (hue as u16) % 360,
        (hsl.saturation * 100.0).round() as u8,
        (hsl.lightness * 100.0).round() as u8,
    );
    rounded
}

/// Clamp to `[0, 1]`, apply the sRGB transfer curve and quantise to a byte.
pub fn linear_to_srgb_byte(v: f64) -> u8 {
    let v = if v.is_nan() { 0.0 } else { v };
    Srgb::<f64>::from_color(LinSrgb::<f64>::new(v, v, v))
        .into_format::<u8>()
        .red
}

/// Inverse of the sRGB transfer curve for one 8-bit channel.
pub fn srgb_byte_to_linear(byte: u8) -> f64 {
    let encoded = Srgb::<u8>::new(byte, byte, byte).into_format::<f64>();
    LinSrgb::<f64>::from_color_unclamped(encoded).red
}
