//! Design-token generator: seed parameters in, a complete palette and
//! typography record out.
//!
//! Generation is a pure function of an immutable [`SeedConfig`]; every call
//! builds a brand-new [`DesignTokens`] value from scratch.

pub mod contrast;
pub mod policy;
pub mod typography;

use std::{fmt, str::FromStr};

use tracing::trace;

use crate::color::{Oklch, clamp_chroma, clamp_lightness, mix_hue, normalize_hue};

use self::contrast::{sanitize_multiplier, solve_lightness};
pub use self::typography::{TypographyConfig, TypographyTokens};

/// Which color the seed triple anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseRole {
    /// Seed is the accent; backgrounds get safe defaults.
    #[default]
    Accent,
    /// Seed is the page background; the accent is derived.
    Background,
}

/// Light or dark page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Dark text on a near-white page.
    #[default]
    Light,
    /// Light text on a near-black page.
    Dark,
}

impl Mode {
    /// Sign of the lightness walk from the background toward text.
    pub fn text_direction(self) -> f64 {
        match self {
            Mode::Light => -1.0,
            Mode::Dark => 1.0,
        }
    }

    /// Lightness of the text extreme (black in light mode, white in dark mode).
    pub fn text_extreme(self) -> f64 {
        match self {
            Mode::Light => 0.0,
            Mode::Dark => 1.0,
        }
    }

    /// Limit `value` by `bound`: an upper bound in dark mode, a lower bound in light mode.
    pub fn bound(self, value: f64, bound: f64) -> f64 {
        match self {
            Mode::Light => value.max(bound),
            Mode::Dark => value.min(bound),
        }
    }

    /// Move `from` by `delta` toward the text extreme, stopping at `bound`.
    ///
    /// When `from` already lies past `bound` it is returned unchanged.
    fn step(self, from: f64, delta: f64, bound: f64) -> f64 {
        let stepped = self.bound(from + self.text_direction() * delta, bound);
        if (stepped - from) * self.text_direction() < 0.0 {
            from
        } else {
            stepped
        }
    }
}

/// Optional linear gradient between the primary and secondary surfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    /// Emit the gradient token.
    pub enabled: bool,
    /// `0..=100`; also widens the first elevation step.
    pub intensity: f64,
    /// Direction in degrees, `0..=360`.
    pub angle: f64,
}

impl Gradient {
    /// Intensity as a `0..=1` factor.
    pub fn factor(&self) -> f64 {
        if self.intensity.is_nan() {
            return 0.0;
        }
        self.intensity.clamp(0.0, 100.0) / 100.0
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            enabled: true,
            intensity: 30.0,
            angle: 165.0,
        }
    }
}

/// Second hue feeding the elevation surfaces and the soft accent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecondaryHue {
    /// Two-tone mode toggle.
    pub enabled: bool,
    /// Hue in degrees.
    pub hue: f64,
}

impl Default for SecondaryHue {
    fn default() -> Self {
        Self {
            enabled: false,
            hue: 260.0,
        }
    }
}

/// Read-only snapshot of everything the generator needs.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedConfig {
    /// Anchor hue in degrees.
    pub base_hue: f64,
    /// Anchor chroma.
    pub base_chroma: f64,
    /// Anchor lightness.
    pub base_lightness: f64,
    /// Which role the anchor drives.
    pub base_role: BaseRole,
    /// Light or dark page.
    pub mode: Mode,
    /// Scales every text contrast target.
    pub contrast_multiplier: f64,
    /// Gradient options.
    pub gradient: Gradient,
    /// Two-tone options.
    pub secondary_hue: SecondaryHue,
    /// Font families.
    pub typography: TypographyConfig,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            base_hue: 205.0,
            base_chroma: 0.1,
            base_lightness: 0.6,
            base_role: BaseRole::Accent,
            mode: Mode::Light,
            contrast_multiplier: 1.0,
            gradient: Gradient::default(),
            secondary_hue: SecondaryHue::default(),
            typography: TypographyConfig::default(),
        }
    }
}

impl SeedConfig {
    /// The anchor as a clamped triple.
    pub fn base_color(&self) -> Oklch {
        Oklch::new(self.base_lightness, self.base_chroma, self.base_hue)
    }

    /// Replace hue, chroma and lightness with a picked color.
    #[must_use]
    pub fn with_base_color(mut self, color: Oklch) -> Self {
        self.base_hue = color.h;
        self.base_chroma = color.c;
        self.base_lightness = color.l;
        self
    }
}

/// The ten fixed color roles, in export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenRole {
    /// Page surface.
    BgPrimary,
    /// First elevation.
    BgSecondary,
    /// Second elevation.
    BgTertiary,
    /// Headings.
    TextHeading,
    /// Body copy.
    TextPrimary,
    /// Supporting copy.
    TextSecondary,
    /// Captions and placeholders.
    TextMuted,
    /// Buttons and links.
    AccentPrimary,
    /// Hovered accent.
    AccentHover,
    /// Subtle fills and badges.
    AccentSoft,
}

impl TokenRole {
    /// All roles in export order.
    pub const ALL: [TokenRole; 10] = [
        Self::BgPrimary,
        Self::BgSecondary,
        Self::BgTertiary,
        Self::TextHeading,
        Self::TextPrimary,
        Self::TextSecondary,
        Self::TextMuted,
        Self::AccentPrimary,
        Self::AccentHover,
        Self::AccentSoft,
    ];

    /// camelCase key used in JSON output.
    pub fn key(self) -> &'static str {
        match self {
            Self::BgPrimary => "bgPrimary",
            Self::BgSecondary => "bgSecondary",
            Self::BgTertiary => "bgTertiary",
            Self::TextHeading => "textHeading",
            Self::TextPrimary => "textPrimary",
            Self::TextSecondary => "textSecondary",
            Self::TextMuted => "textMuted",
            Self::AccentPrimary => "accentPrimary",
            Self::AccentHover => "accentHover",
            Self::AccentSoft => "accentSoft",
        }
    }

    /// Whether the role is one of the four text tones.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            Self::TextHeading | Self::TextPrimary | Self::TextSecondary | Self::TextMuted
        )
    }
}

impl fmt::Display for TokenRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TokenRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.key() == s)
            .ok_or_else(|| format!("unknown token role `{s}`"))
    }
}

/// Color half of the token set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTokens {
    /// Page surface.
    pub bg_primary: Oklch,
    /// First elevation.
    pub bg_secondary: Oklch,
    /// Second elevation.
    pub bg_tertiary: Oklch,
    /// Headings.
    pub text_heading: Oklch,
    /// Body copy.
    pub text_primary: Oklch,
    /// Supporting copy.
    pub text_secondary: Oklch,
    /// Captions.
    pub text_muted: Oklch,
    /// Accent.
    pub accent_primary: Oklch,
    /// Hovered accent.
    pub accent_hover: Oklch,
    /// Soft accent fill.
    pub accent_soft: Oklch,
}

impl ColorTokens {
    /// Color of one role.
    pub fn get(&self, role: TokenRole) -> Oklch {
        match role {
            TokenRole::BgPrimary => self.bg_primary,
            TokenRole::BgSecondary => self.bg_secondary,
            TokenRole::BgTertiary => self.bg_tertiary,
            TokenRole::TextHeading => self.text_heading,
            TokenRole::TextPrimary => self.text_primary,
            TokenRole::TextSecondary => self.text_secondary,
            TokenRole::TextMuted => self.text_muted,
            TokenRole::AccentPrimary => self.accent_primary,
            TokenRole::AccentHover => self.accent_hover,
            TokenRole::AccentSoft => self.accent_soft,
        }
    }

    /// `(role, color)` pairs in export order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenRole, Oklch)> + '_ {
        TokenRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }
}

/// Complete output of one generation.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignTokens {
    /// Palette.
    pub colors: ColorTokens,
    /// Font sizes and families.
    pub typography: TypographyTokens,
}

/// Derive the full token set for `seed`.
pub fn generate(seed: &SeedConfig) -> DesignTokens {
    let mode = seed.mode;
    let policy = mode.policy();
    let base = seed.base_color();
    let hue = base.h;
    let second_hue = seed
        .secondary_hue
        .enabled
        .then(|| normalize_hue(seed.secondary_hue.hue));
    let surface_hue = second_hue.unwrap_or(hue);

    // Step 1: anchors
    let (bg_l, bg_c, accent_l, accent_c) = match seed.base_role {
        BaseRole::Background => {
            let bg = &policy.background;
            let bg_l = mode.bound(base.l * bg.seed_lightness_scale, bg.lightness_bound);
            let bg_c = (base.c * bg.seed_chroma_scale).min(bg.chroma_ceiling);
            let accent_c = base.c.max(policy.accent.chroma_floor);
            (bg_l, bg_c, policy.accent.derived_lightness, accent_c)
        }
        BaseRole::Accent => (
            policy.background.default_lightness,
            policy.background.default_chroma,
            base.l,
            base.c,
        ),
    };
    let bg_primary = Oklch::new(bg_l, bg_c, hue);

    // Step 2: elevation ladder
    let elevation = &policy.elevation;
    let secondary_l = mode.step(
        bg_primary.l,
        elevation.step_delta + seed.gradient.factor() * elevation.intensity_gain,
        elevation.secondary_bound,
    );
    let tertiary_l = mode.step(
        secondary_l,
        elevation.step_delta + elevation.tertiary_extra,
        elevation.tertiary_bound,
    );
    let bg_secondary = Oklch::new(
        secondary_l,
        bg_primary.c + elevation.chroma_step,
        surface_hue,
    );
    let bg_tertiary = Oklch::new(
        tertiary_l,
        bg_primary.c + 2.0 * elevation.chroma_step,
        surface_hue,
    );

    // Step 3: text tones, always against the primary surface
    let multiplier = sanitize_multiplier(seed.contrast_multiplier);
    let [text_heading, text_primary, text_secondary, text_muted] = policy.text.map(|text| {
        let target = text.base_contrast * multiplier;
        let l = solve_lightness(target, bg_primary.l, mode);
        trace!(role = %text.role, target, l, "solved text lightness");
        Oklch::new(l, text.chroma, hue)
    });

    // Step 4: accent states
    let accent = &policy.accent;
    let accent_primary = Oklch::new(accent_l, accent_c, hue);
    let accent_hover = accent_primary.with_lightness(mode.step(
        accent_primary.l,
        accent.hover_delta,
        accent.hover_bound,
    ));
    let accent_soft = Oklch::new(
        clamp_lightness(bg_primary.l + mode.text_direction() * accent.soft_offset),
        clamp_chroma(accent.soft_chroma.apply(accent_primary.c)),
        second_hue.map_or(hue, |second| mix_hue(hue, second)),
    );

    DesignTokens {
        colors: ColorTokens {
            bg_primary,
            bg_secondary,
            bg_tertiary,
            text_heading,
            text_primary,
            text_secondary,
            text_muted,
            accent_primary,
            accent_hover,
            accent_soft,
        },
        typography: TypographyTokens::from(&seed.typography),
    }
}

#[cfg(test)]
mod tests {
    use super::{contrast::contrast_ratio, contrast::SOLVER_STEP, *};

    fn seed(mode: Mode, role: BaseRole) -> SeedConfig {
        SeedConfig {
            mode,
            base_role: role,
            ..SeedConfig::default()
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn accent_seed_in_light_mode() {
        let tokens = generate(&seed(Mode::Light, BaseRole::Accent));
        let colors = tokens.colors;
        assert!(close(colors.bg_primary.l, 0.98));
        assert!(close(colors.bg_primary.c, 0.012));
        assert!(close(colors.accent_primary.l, 0.6));
        assert!(close(colors.accent_primary.c, 0.1));
        assert!(close(colors.accent_primary.h, 205.0));
    }

    #[test]
    fn accent_seed_in_dark_mode_brightens_hover() {
        let colors = generate(&seed(Mode::Dark, BaseRole::Accent)).colors;
        assert!(close(colors.bg_primary.l, 0.07));
        assert!(colors.accent_hover.l > colors.accent_primary.l);
    }

    #[test]
    fn light_mode_hover_darkens() {
        let colors = generate(&seed(Mode::Light, BaseRole::Accent)).colors;
        assert!(close(colors.accent_hover.l, 0.52));
    }

    #[test]
    fn hover_never_reverses_direction_past_its_bound() {
        let config = SeedConfig {
            base_lightness: 0.95,
            ..seed(Mode::Dark, BaseRole::Accent)
        };
        let colors = generate(&config).colors;
        assert!(colors.accent_hover.l >= colors.accent_primary.l);
    }

    #[test]
    fn background_seed_derives_fixed_accent_lightness() {
        for base_lightness in [0.2, 0.6, 0.99] {
            let config = SeedConfig {
                base_lightness,
                ..seed(Mode::Light, BaseRole::Background)
            };
            let colors = generate(&config).colors;
            assert_eq!(colors.accent_primary.l, 0.55);
            assert!(close(colors.accent_primary.c, 0.18));
        }
    }

    #[test]
    fn background_seed_is_pulled_to_the_mode_extreme_and_desaturated() {
        let config = SeedConfig {
            base_lightness: 0.6,
            base_chroma: 0.2,
            ..seed(Mode::Dark, BaseRole::Background)
        };
        let colors = generate(&config).colors;
        assert!(close(colors.bg_primary.l, 0.09));
        assert!(close(colors.bg_primary.c, 0.02));
        assert_eq!(colors.accent_primary.l, 0.75);
        assert!(close(colors.accent_primary.c, 0.2));

        let config = SeedConfig {
            base_lightness: 0.6,
            base_chroma: 0.2,
            ..seed(Mode::Light, BaseRole::Background)
        };
        let colors = generate(&config).colors;
        assert!(close(colors.bg_primary.l, 0.94));
        assert!(close(colors.bg_primary.c, 0.03));
    }

    #[test]
    fn elevation_is_strictly_monotonic() {
        for mode in [Mode::Light, Mode::Dark] {
            for role in [BaseRole::Accent, BaseRole::Background] {
                for intensity in [0.0, 30.0, 100.0] {
                    for base_lightness in [0.0, 0.5, 1.0] {
                        let mut config = seed(mode, role);
                        config.gradient.intensity = intensity;
                        config.base_lightness = base_lightness;
                        let colors = generate(&config).colors;
                        let dir = mode.text_direction();
                        let p = colors.bg_primary.l * dir;
                        let s = colors.bg_secondary.l * dir;
                        let t = colors.bg_tertiary.l * dir;
                        assert!(p < s && s < t, "{mode:?} {role:?} {intensity}: {p} {s} {t}");
                    }
                }
            }
        }
    }

    #[test]
    fn text_meets_contrast_floor_or_hits_boundary() {
        for mode in [Mode::Light, Mode::Dark] {
            for role in [BaseRole::Accent, BaseRole::Background] {
                for multiplier in [0.7, 1.0, 1.5] {
                    let config = SeedConfig {
                        contrast_multiplier: multiplier,
                        ..seed(mode, role)
                    };
                    let colors = generate(&config).colors;
                    let bg = colors.bg_primary.l;
                    for text in mode.policy().text {
                        let l = colors.get(text.role).l;
                        let target = text.base_contrast * multiplier;
                        assert!(
                            contrast_ratio(l, bg) >= target - SOLVER_STEP || l == 0.0 || l == 1.0,
                            "{mode:?} {:?} x{multiplier}: l={l}",
                            text.role
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn text_tones_are_ordered_by_emphasis() {
        for mode in [Mode::Light, Mode::Dark] {
            let colors = generate(&seed(mode, BaseRole::Accent)).colors;
            let bg = colors.bg_primary.l;
            let distance = |role| (colors.get(role).l - bg).abs();
            assert!(distance(TokenRole::TextHeading) >= distance(TokenRole::TextPrimary));
            assert!(distance(TokenRole::TextPrimary) >= distance(TokenRole::TextSecondary));
            assert!(distance(TokenRole::TextSecondary) >= distance(TokenRole::TextMuted));
        }
    }

    #[test]
    fn out_of_domain_seed_is_clamped() {
        let config = SeedConfig {
            base_hue: -95.0,
            base_chroma: 3.0,
            base_lightness: 7.0,
            contrast_multiplier: -1.0,
            secondary_hue: SecondaryHue {
                enabled: true,
                hue: 1000.0,
            },
            ..SeedConfig::default()
        };
        for mode in [Mode::Light, Mode::Dark] {
            for role in [BaseRole::Accent, BaseRole::Background] {
                let config = SeedConfig {
                    mode,
                    base_role: role,
                    ..config.clone()
                };
                for (role, color) in generate(&config).colors.iter() {
                    assert!((0.0..360.0).contains(&color.h), "{role}: {color:?}");
                    assert!((0.0..=1.0).contains(&color.l), "{role}: {color:?}");
                    assert!((0.0..=0.4).contains(&color.c), "{role}: {color:?}");
                }
            }
        }
    }

    #[test]
    fn two_tone_moves_only_elevated_surfaces() {
        let plain = SeedConfig::default();
        let two_tone = SeedConfig {
            secondary_hue: SecondaryHue {
                enabled: true,
                hue: 260.0,
            },
            ..SeedConfig::default()
        };
        let before = generate(&plain).colors;
        let after = generate(&two_tone).colors;

        assert_eq!(before.bg_primary, after.bg_primary);
        assert!(close(before.bg_secondary.h, 205.0));
        assert!(close(after.bg_secondary.h, 260.0));
        assert!(close(after.bg_tertiary.h, 260.0));
        assert!(close(after.accent_soft.h, 232.5));
        assert_eq!(before.accent_primary, after.accent_primary);
    }

    #[test]
    fn generation_is_deterministic() {
        let config = SeedConfig::default();
        assert_eq!(generate(&config), generate(&config));
    }

    #[test]
    fn role_keys_round_trip() {
        for role in TokenRole::ALL {
            assert_eq!(role.key().parse::<TokenRole>(), Ok(role));
        }
        assert!("bg-primary".parse::<TokenRole>().is_err());
    }
}
