use std::{fmt, str::FromStr};

use super::{ColorParseError, Oklch};

/// Interchangeable textual renderings of a token color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorFormat {
    /// `#RRGGBB`
    #[default]
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `hsl(h, s%, l%)`
    Hsl,
    /// Canonical `oklch(L% C H)`
    Oklch,
}

impl ColorFormat {
    /// Every format, in presentation order.
    pub const ALL: [ColorFormat; 4] = [Self::Hex, Self::Rgb, Self::Hsl, Self::Oklch];

    /// Render `color` in this format.
    pub fn render(self, color: Oklch) -> String {
        match self {
            Self::Hex => color.to_hex(),
            Self::Rgb => color.to_rgb_string(),
            Self::Hsl => color.to_hsl_string(),
            Self::Oklch => color.to_string(),
        }
    }

    /// Lowercase identifier used in query strings and exports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Oklch => "oklch",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ColorParseError::UnknownFormat(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_parse_case_insensitively() {
        assert_eq!("HEX".parse::<ColorFormat>(), Ok(ColorFormat::Hex));
        assert_eq!("oklch".parse::<ColorFormat>(), Ok(ColorFormat::Oklch));
        assert_eq!(
            "cmyk".parse::<ColorFormat>(),
            Err(ColorParseError::UnknownFormat("cmyk".into()))
        );
        let message = " lab ".parse::<ColorFormat>().unwrap_err().to_string();
        assert_eq!(message, "unknown color format `lab`");
    }

    #[test]
    fn render_dispatches_per_format() {
        let white = Oklch::new(1.0, 0.0, 0.0);
        assert_eq!(ColorFormat::Hex.render(white), "#FFFFFF");
        assert_eq!(ColorFormat::Rgb.render(white), "rgb(255, 255, 255)");
        assert_eq!(ColorFormat::Hsl.render(white), "hsl(0, 0%, 100%)");
        assert_eq!(ColorFormat::Oklch.render(white), "oklch(100.00% 0.000 0.00)");
    }
}
