//! Lightness-channel approximation of the WCAG contrast ratio and the
//! bounded linear search that picks a text lightness for a target ratio.

use super::Mode;
use crate::color::clamp_lightness;

/// Lightness increment of the search.
pub const SOLVER_STEP: f64 = 0.01;
/// Upper bound on search iterations; the walk covers the whole `[0, 1]` range.
const MAX_STEPS: u32 = 100;
/// Multipliers at or below zero are out of contract and raised to this floor.
pub const MIN_CONTRAST_MULTIPLIER: f64 = 0.1;

/// `(L_hi + 0.05) / (L_lo + 0.05)`, symmetric in its arguments.
pub fn contrast_ratio(fg_lightness: f64, bg_lightness: f64) -> f64 {
    let (hi, lo) = if fg_lightness > bg_lightness {
        (fg_lightness, bg_lightness)
    } else {
        (bg_lightness, fg_lightness)
    };
    (hi + 0.05) / (lo + 0.05)
}

/// Walk from the background lightness toward the mode's text extreme until
/// `target` is reached. Returns the extreme (1 in dark mode, 0 in light mode)
/// when the target cannot be met inside the domain.
pub fn solve_lightness(target: f64, bg_lightness: f64, mode: Mode) -> f64 {
    let bg = clamp_lightness(bg_lightness);
    let direction = mode.text_direction();

    for step in 0..=MAX_STEPS {
        let candidate = bg + direction * f64::from(step) * SOLVER_STEP;
        if !(0.0..=1.0).contains(&candidate) {
            break;
        }
        if contrast_ratio(candidate, bg) >= target {
            return candidate;
        }
    }
    mode.text_extreme()
}

/// Clamp a seed multiplier to the supported range.
pub fn sanitize_multiplier(multiplier: f64) -> f64 {
    if multiplier.is_nan() || multiplier <= MIN_CONTRAST_MULTIPLIER {
        MIN_CONTRAST_MULTIPLIER
    } else {
        multiplier
    }
}
