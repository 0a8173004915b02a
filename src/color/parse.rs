use std::str::FromStr;

use palette::Srgb;
use thiserror::Error;

use super::{MAX_CHROMA, Oklch};

const CANONICAL_PREFIX: &str = "oklch(";

/// Reasons a color string coming from outside cannot be turned into a triple.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Input was empty or whitespace.
    #[error("empty color string")]
    Empty,
    /// Hex string did not have 3 or 6 digits.
    #[error("invalid hex length {0}, expected 3 or 6 digits")]
    InvalidLength(usize),
    /// Hex string contained a non-hex character.
    #[error("invalid hex digits")]
    InvalidHex,
    /// Canonical `oklch(L% C H)` form was malformed.
    #[error("malformed oklch string: {0}")]
    InvalidCanonical(&'static str),
    /// Name of a display format nobody knows about.
    #[error("unknown color format `{0}`")]
    UnknownFormat(String),
}

/// Parse `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB` into sRGB bytes.
pub(super) fn parse_hex(hex: &str) -> Result<[u8; 3], ColorParseError> {
    use ColorParseError::*;

    let trimmed = hex.trim();
    if trimmed.is_empty() {
        return Err(Empty);
    }
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    // palette slices by byte offset and accepts a leading '+'
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(InvalidHex);
    }
    if !matches!(digits.len(), 3 | 6) {
        return Err(InvalidLength(digits.len()));
    }

    let rgb = Srgb::<u8>::from_str(digits).map_err(|_| InvalidHex)?;
    Ok([rgb.red, rgb.green, rgb.blue])
}

/// Parse exactly the canonical `oklch(<L>% <C> <H>)` form produced by
/// `Display`: 2/3/2 decimals, every component inside the OKLCH domain.
pub(super) fn parse_canonical(input: &str) -> Result<Oklch, ColorParseError> {
    use ColorParseError::*;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Empty);
    }
    let body = trimmed
        .strip_prefix(CANONICAL_PREFIX)
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(InvalidCanonical("expected oklch(...)"))?;

    let mut parts = body.split(' ');
    let (Some(l), Some(c), Some(h), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(InvalidCanonical("expected three space-separated components"));
    };

    let l = l
        .strip_suffix('%')
        .ok_or(InvalidCanonical("lightness must be a percentage"))?;
    let l = number(l, 2)?;
    let c = number(c, 3)?;
    let h = number(h, 2)?;

    if l > 100.0 {
        return Err(InvalidCanonical("lightness above 100%"));
    }
    if c > MAX_CHROMA {
        return Err(InvalidCanonical("chroma above 0.4"));
    }
    if h >= 360.0 {
        return Err(InvalidCanonical("hue outside [0, 360)"));
    }

    Ok(Oklch::new(l / 100.0, c, h))
}

/// Unsigned decimal with exactly `decimals` fractional digits.
fn number(token: &str, decimals: usize) -> Result<f64, ColorParseError> {
    let invalid = ColorParseError::InvalidCanonical("component is not a fixed-precision number");
    let (int, frac) = token.split_once('.').ok_or(invalid.clone())?;
    if int.is_empty()
        || frac.len() != decimals
        || !int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit())
    {
        return Err(invalid);
    }
    token.parse::<f64>().map_err(|_| invalid)
}
