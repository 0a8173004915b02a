//! Perceptual color model (OKLCH) and its conversions to display formats.
//!
//! Every value leaving this module is clamped into the OKLCH domain:
//! lightness in `[0, 1]`, chroma in `[0, 0.4]`, hue normalised into `[0, 360)`.

mod convert;
mod format;
mod parse;

use std::{fmt, str::FromStr};

use palette::LinSrgb;

pub use self::convert::{linear_to_srgb_byte, srgb_byte_to_linear};
pub use self::format::ColorFormat;
pub use self::parse::ColorParseError;

/// Upper bound of the lightness channel.
pub const MAX_LIGHTNESS: f64 = 1.0;
/// Upper bound of the chroma channel.
pub const MAX_CHROMA: f64 = 0.4;

/// Immutable OKLCH triple.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Oklch {
    /// Perceptual lightness, `0.0..=1.0`.
    pub l: f64,
    /// Chroma, `0.0..=0.4`.
    pub c: f64,
    /// Hue angle in degrees, `0.0..360.0`.
    pub h: f64,
}

impl Oklch {
    /// The neutral fallback returned when external input cannot be parsed.
    pub const ZERO: Self = Self {
        l: 0.0,
        c: 0.0,
        h: 0.0,
    };

    /// Build a triple, clamping lightness/chroma and normalising the hue.
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self {
            l: clamp_lightness(l),
            c: clamp_chroma(c),
            h: normalize_hue(h),
        }
    }

    /// Return a copy with a different lightness (clamped).
    #[must_use]
    pub fn with_lightness(self, l: f64) -> Self {
        Self::new(l, self.c, self.h)
    }

    /// Convert to linear-light sRGB. Channels are left unclamped.
    pub fn to_linear_rgb(self) -> LinSrgb<f64> {
        convert::oklch_to_linear_rgb(Self::new(self.l, self.c, self.h))
    }

    /// Gamma-encoded sRGB bytes of the rendered color.
    pub fn to_srgb_bytes(self) -> [u8; 3] {
        convert::oklch_to_srgb_bytes(Self::new(self.l, self.c, self.h))
    }

    /// `#RRGGBB`, uppercase.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_srgb_bytes();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// `rgb(r, g, b)` with integer channels.
    pub fn to_rgb_string(self) -> String {
        let [r, g, b] = self.to_srgb_bytes();
        format!("rgb({r}, {g}, {b})")
    }

    /// `hsl(h, s%, l%)` describing the rendered sRGB color.
    pub fn to_hsl_string(self) -> String {
        let (h, s, l) = convert::srgb_bytes_to_hsl(self.to_srgb_bytes());
        format!("hsl({h}, {s}%, {l}%)")
    }

    /// Parse a `#RRGGBB` (or `#RGB`) string coming from a color picker.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        parse::parse_hex(hex).map(convert::srgb_bytes_to_oklch)
    }

    /// Like [`Oklch::from_hex`] but falls back to [`Oklch::ZERO`].
    pub fn from_hex_or_zero(hex: &str) -> Self {
        Self::from_hex(hex).unwrap_or(Self::ZERO)
    }

    /// Like the [`FromStr`] impl but falls back to [`Oklch::ZERO`].
    pub fn parse_or_zero(value: &str) -> Self {
        value.parse().unwrap_or(Self::ZERO)
    }

    /// Render in the requested display format.
    pub fn format(self, format: ColorFormat) -> String {
        format.render(self)
    }
}

/// Canonical serialisation: `oklch(<L*100>% <C> <H>)` with 2/3/2 decimals.
impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 359.996 would print as "360.00", which parses back as hue 0
        let hue = (self.h * 100.0).round() / 100.0;
        let hue = if hue >= 360.0 { 0.0 } else { hue };
        write!(f, "oklch({:.2}% {:.3} {:.2})", self.l * 100.0, self.c, hue)
    }
}

impl FromStr for Oklch {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_canonical(s)
    }
}

/// Clamp a lightness value into `[0, 1]`; NaN maps to `0`.
pub fn clamp_lightness(l: f64) -> f64 {
    if l.is_nan() {
        return 0.0;
    }
    // adding zero folds -0.0 into 0.0 so Display never prints a sign
    l.clamp(0.0, MAX_LIGHTNESS) + 0.0
}

/// Clamp a chroma value into `[0, 0.4]`; NaN maps to `0`.
pub fn clamp_chroma(c: f64) -> f64 {
    if c.is_nan() {
        return 0.0;
    }
    c.clamp(0.0, MAX_CHROMA) + 0.0
}

/// Wrap a hue angle into `[0, 360)`; non-finite input maps to `0`.
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(360.0) + 0.0;
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Midpoint of two hues along the shorter arc.
pub fn mix_hue(a: f64, b: f64) -> f64 {
    let a = normalize_hue(a);
    let b = normalize_hue(b);
    let mut delta = b - a;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }
    normalize_hue(a + delta / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_into_domain() {
        let color = Oklch::new(1.4, 0.9, -30.0);
        assert_eq!(color.l, 1.0);
        assert_eq!(color.c, 0.4);
        assert!((color.h - 330.0).abs() < 1e-9);

        let color = Oklch::new(-0.2, -0.1, 725.0);
        assert_eq!(color.l, 0.0);
        assert_eq!(color.c, 0.0);
        assert!((color.h - 5.0).abs() < 1e-9);
    }

    #[test]
    fn normalize_hue_never_returns_360() {
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-1e-20), 0.0);
        assert_eq!(normalize_hue(f64::NAN), 0.0);
        assert!(normalize_hue(-0.5) < 360.0);
    }

    #[test]
    fn mix_hue_takes_shorter_arc() {
        assert!((mix_hue(205.0, 260.0) - 232.5).abs() < 1e-9);
        assert!((mix_hue(350.0, 10.0) - 0.0).abs() < 1e-9);
        assert!((mix_hue(10.0, 350.0) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn display_uses_canonical_form() {
        let color = Oklch::new(0.6, 0.1, 205.0);
        assert_eq!(color.to_string(), "oklch(60.00% 0.100 205.00)");
    }

    #[test]
    fn canonical_round_trip_is_exact_at_stated_precision() {
        let samples = [
            Oklch::new(0.0, 0.0, 0.0),
            Oklch::new(0.123456, 0.0456789, 12.3456),
            Oklch::new(0.98, 0.012, 205.0),
            Oklch::new(1.0, 0.4, 359.994),
            Oklch::new(0.5, 0.2, 180.125),
            Oklch::new(0.5, 0.2, 359.996),
        ];
        for color in samples {
            let text = color.to_string();
            let back: Oklch = text.parse().unwrap();
            assert_eq!(back.to_string(), text);
            assert!((back.l - color.l).abs() <= 0.00005 + 1e-12);
            assert!((back.c - color.c).abs() <= 0.0005 + 1e-12);
        }
    }

    #[test]
    fn negative_zero_renders_without_sign() {
        let color = Oklch::new(-0.0, -0.0, -0.0);
        assert_eq!(color.to_string(), "oklch(0.00% 0.000 0.00)");
        assert_eq!(color.to_string().parse::<Oklch>(), Ok(Oklch::ZERO));
    }

    #[test]
    fn hex_round_trip_stays_close_inside_gamut() {
        let mut checked = 0;
        let mut total = 0;
        for l in [0.3, 0.4, 0.5, 0.6, 0.7, 0.8] {
            for c in [0.03, 0.06, 0.09] {
                for step in 0..36 {
                    let color = Oklch::new(l, c, f64::from(step) * 10.0);
                    total += 1;
                    let linear = color.to_linear_rgb();
                    let in_gamut = [linear.red, linear.green, linear.blue]
                        .iter()
                        .all(|v| (-1e-9..=1.0 + 1e-9).contains(v));
                    if !in_gamut {
                        continue;
                    }
                    checked += 1;

                    let back = Oklch::from_hex(&color.to_hex()).unwrap();
                    let hue_drift = (back.h - color.h).rem_euclid(360.0);
                    let hue_drift = hue_drift.min(360.0 - hue_drift);
                    assert!((back.l - color.l).abs() <= 0.02, "{color} -> {back}");
                    assert!((back.c - color.c).abs() <= 0.02, "{color} -> {back}");
                    assert!(hue_drift <= 6.0, "{color} -> {back}");
                }
            }
        }
        assert!(checked * 2 >= total, "only {checked} of {total} samples in gamut");
    }

    #[test]
    fn fallbacks_return_zero_triple() {
        assert_eq!(Oklch::from_hex_or_zero("not-a-color"), Oklch::ZERO);
        assert_eq!(Oklch::parse_or_zero("oklch(abc)"), Oklch::ZERO);
    }

    #[test]
    fn extreme_colors_render_as_black_and_white() {
        assert_eq!(Oklch::new(0.0, 0.0, 0.0).to_hex(), "#000000");
        assert_eq!(Oklch::new(1.0, 0.0, 0.0).to_hex(), "#FFFFFF");
        assert_eq!(Oklch::new(1.0, 0.0, 0.0).to_rgb_string(), "rgb(255, 255, 255)");
        assert_eq!(Oklch::new(1.0, 0.0, 0.0).to_hsl_string(), "hsl(0, 0%, 100%)");
    }
}
