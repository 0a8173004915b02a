//! Mode-dependent derivation constants, kept in one declarative table.
//!
//! Every literal the generator uses lives here so the two modes can be
//! compared and tuned side by side.

use super::{Mode, TokenRole};

/// Primary background rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundPolicy {
    /// Lightness used when the seed anchors the accent.
    pub default_lightness: f64,
    /// Chroma used when the seed anchors the accent.
    pub default_chroma: f64,
    /// Factor applied to the seed lightness when the seed anchors the background.
    pub seed_lightness_scale: f64,
    /// Lightness may not move past this value away from the mode's extreme.
    pub lightness_bound: f64,
    /// Factor applied to the seed chroma when the seed anchors the background.
    pub seed_chroma_scale: f64,
    /// Chroma ceiling for a seed-anchored background.
    pub chroma_ceiling: f64,
}

/// Secondary and tertiary surface rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevationPolicy {
    /// Lightness delta per elevation step.
    pub step_delta: f64,
    /// Extra delta at full gradient intensity, applied on the first step.
    pub intensity_gain: f64,
    /// Extra delta added on the second step.
    pub tertiary_extra: f64,
    /// Lightness limit of the secondary surface.
    pub secondary_bound: f64,
    /// Lightness limit of the tertiary surface.
    pub tertiary_bound: f64,
    /// Chroma added on top of the primary background, per step.
    pub chroma_step: f64,
}

/// Text role rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPolicy {
    /// Role this entry applies to.
    pub role: TokenRole,
    /// Contrast ratio before the seed multiplier is applied.
    pub base_contrast: f64,
    /// Fixed, near-neutral chroma.
    pub chroma: f64,
}

/// How the soft accent derives its chroma from the accent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SoftChroma {
    /// `max(accent_c * factor, floor)`
    AtLeast {
        /// Multiplier applied to the accent chroma.
        factor: f64,
        /// Lower limit.
        floor: f64,
    },
    /// `min(accent_c * factor, ceiling)`
    AtMost {
        /// Multiplier applied to the accent chroma.
        factor: f64,
        /// Upper limit.
        ceiling: f64,
    },
}

impl SoftChroma {
    /// Apply the rule to an accent chroma.
    pub fn apply(self, accent_chroma: f64) -> f64 {
        match self {
            Self::AtLeast { factor, floor } => (accent_chroma * factor).max(floor),
            Self::AtMost { factor, ceiling } => (accent_chroma * factor).min(ceiling),
        }
    }
}

/// Accent rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccentPolicy {
    /// Accent lightness when the seed anchors the background.
    pub derived_lightness: f64,
    /// Accent chroma floor when the seed anchors the background.
    pub chroma_floor: f64,
    /// Hover lightness delta, toward the text extreme.
    pub hover_delta: f64,
    /// Hover lightness limit.
    pub hover_bound: f64,
    /// Soft accent lightness offset from the primary background.
    pub soft_offset: f64,
    /// Soft accent chroma rule.
    pub soft_chroma: SoftChroma,
}

/// Full rule set for one mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModePolicy {
    /// Primary background.
    pub background: BackgroundPolicy,
    /// Elevation ladder.
    pub elevation: ElevationPolicy,
    /// Text roles, strongest first.
    pub text: [TextPolicy; 4],
    /// Accent states.
    pub accent: AccentPolicy,
}

impl ModePolicy {
    /// Look up the rule for one text role.
    pub fn text_policy(&self, role: TokenRole) -> Option<&TextPolicy> {
        self.text.iter().find(|policy| policy.role == role)
    }
}

/// Rules for light mode.
pub const LIGHT: ModePolicy = ModePolicy {
    background: BackgroundPolicy {
        default_lightness: 0.98,
        default_chroma: 0.012,
        seed_lightness_scale: 1.0,
        lightness_bound: 0.94,
        seed_chroma_scale: 1.0,
        chroma_ceiling: 0.03,
    },
    elevation: ElevationPolicy {
        step_delta: 0.04,
        intensity_gain: 0.05,
        tertiary_extra: 0.03,
        secondary_bound: 0.85,
        tertiary_bound: 0.75,
        chroma_step: 0.005,
    },
    text: [
        TextPolicy {
            role: TokenRole::TextHeading,
            base_contrast: 9.0,
            chroma: 0.04,
        },
        TextPolicy {
            role: TokenRole::TextPrimary,
            base_contrast: 7.0,
            chroma: 0.02,
        },
        TextPolicy {
            role: TokenRole::TextSecondary,
            base_contrast: 4.5,
            chroma: 0.02,
        },
        TextPolicy {
            role: TokenRole::TextMuted,
            base_contrast: 3.0,
            chroma: 0.02,
        },
    ],
    accent: AccentPolicy {
        derived_lightness: 0.55,
        chroma_floor: 0.18,
        hover_delta: 0.08,
        hover_bound: 0.2,
        soft_offset: 0.08,
        soft_chroma: SoftChroma::AtMost {
            factor: 0.3,
            ceiling: 0.06,
        },
    },
};

/// Rules for dark mode.
pub const DARK: ModePolicy = ModePolicy {
    background: BackgroundPolicy {
        default_lightness: 0.07,
        default_chroma: 0.015,
        seed_lightness_scale: 0.15,
        lightness_bound: 0.10,
        seed_chroma_scale: 0.5,
        chroma_ceiling: 0.02,
    },
    elevation: ElevationPolicy {
        step_delta: 0.07,
        intensity_gain: 0.05,
        tertiary_extra: 0.03,
        secondary_bound: 0.25,
        tertiary_bound: 0.35,
        chroma_step: 0.01,
    },
    text: [
        TextPolicy {
            role: TokenRole::TextHeading,
            base_contrast: 10.0,
            chroma: 0.02,
        },
        TextPolicy {
            role: TokenRole::TextPrimary,
            base_contrast: 8.0,
            chroma: 0.01,
        },
        TextPolicy {
            role: TokenRole::TextSecondary,
            base_contrast: 5.5,
            chroma: 0.01,
        },
        TextPolicy {
            role: TokenRole::TextMuted,
            base_contrast: 4.0,
            chroma: 0.01,
        },
    ],
    accent: AccentPolicy {
        derived_lightness: 0.75,
        chroma_floor: 0.18,
        hover_delta: 0.08,
        hover_bound: 0.9,
        soft_offset: 0.12,
        soft_chroma: SoftChroma::AtLeast {
            factor: 0.4,
            floor: 0.08,
        },
    },
};

impl Mode {
    /// Rule set for this mode.
    pub fn policy(self) -> &'static ModePolicy {
        match self {
            Mode::Light => &LIGHT,
            Mode::Dark => &DARK,
        }
    }
}
