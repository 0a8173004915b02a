//! Text exports of a token set: CSS custom properties, JSON, Tailwind config.

use std::{fmt, fmt::Write as _, str::FromStr};

use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    color::ColorFormat,
    tokens::{DesignTokens, Gradient, TokenRole},
};

/// Supported export targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportTarget {
    /// `:root { --color-…: …; }`
    #[default]
    Css,
    /// Pretty-printed JSON.
    Json,
    /// `tailwind.config.js` snippet.
    Tailwind,
}

impl ExportTarget {
    /// Lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Json => "json",
            Self::Tailwind => "tailwind",
        }
    }

    /// MIME type of the rendered text.
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Css => "text/css; charset=utf-8",
            Self::Json => "application/json",
            Self::Tailwind => "text/javascript; charset=utf-8",
        }
    }
}

impl fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "json" => Ok(Self::Json),
            "tailwind" => Ok(Self::Tailwind),
            other => Err(format!("unknown export target `{other}`")),
        }
    }
}

/// `bgPrimary` → `bg-primary`.
pub fn kebab_case(camel: &str) -> String {
    let mut out = String::with_capacity(camel.len() + 4);
    for ch in camel.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Render `tokens` for `target`, with colors written in `format`.
pub fn export(
    tokens: &DesignTokens,
    gradient: &Gradient,
    target: ExportTarget,
    format: ColorFormat,
) -> serde_json::Result<String> {
    match target {
        ExportTarget::Css => Ok(render_css(tokens, gradient, format)),
        ExportTarget::Json => render_json(tokens, gradient, format),
        ExportTarget::Tailwind => Ok(render_tailwind(tokens, format)),
    }
}

/// CSS custom-property block.
pub fn render_css(tokens: &DesignTokens, gradient: &Gradient, format: ColorFormat) -> String {
    let typography = &tokens.typography;
    let mut css = String::from(":root {\n  /* Colors */\n");
    for (role, color) in tokens.colors.iter() {
        let _ = writeln!(
            css,
            "  --color-{}: {};",
            kebab_case(role.key()),
            color.format(format)
        );
    }

    css.push_str("\n  /* Typography */\n");
    let _ = writeln!(css, "  --font-heading: \"{}\";", typography.heading_family);
    let _ = writeln!(css, "  --font-body: \"{}\";", typography.body_family);
    if let Some(editorial) = &typography.editorial_family {
        let _ = writeln!(css, "  --font-editorial: \"{editorial}\";");
    }
    if let Some(display) = &typography.display_family {
        let _ = writeln!(css, "  --font-display: \"{display}\";");
    }

    if gradient.enabled {
        let _ = writeln!(
            css,
            "  --bg-gradient: linear-gradient({}deg, var(--color-bg-primary) 0%, var(--color-bg-secondary) 100%);",
            format_angle(gradient.angle)
        );
    }
    css.push('}');
    css
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExport<'a> {
    colors: IndexMap<&'static str, String>,
    typography: JsonTypography<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gradient: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonTypography<'a> {
    #[serde(rename = "headingXL")]
    heading_xl: &'a str,
    heading_m: &'a str,
    text_m: &'a str,
    text_s: &'a str,
    heading_family: &'a str,
    body_family: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    editorial_family: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_family: Option<&'a str>,
}

/// JSON dump with colors pre-formatted.
pub fn render_json(
    tokens: &DesignTokens,
    gradient: &Gradient,
    format: ColorFormat,
) -> serde_json::Result<String> {
    let typography = &tokens.typography;
    let colors = tokens
        .colors
        .iter()
        .map(|(role, color)| (role.key(), color.format(format)))
        .collect();
    let gradient = gradient.enabled.then(|| {
        format!(
            "linear-gradient({}deg, {} 0%, {} 100%)",
            format_angle(gradient.angle),
            tokens.colors.get(TokenRole::BgPrimary).format(format),
            tokens.colors.get(TokenRole::BgSecondary).format(format)
        )
    });

    serde_json::to_string_pretty(&JsonExport {
        colors,
        typography: JsonTypography {
            heading_xl: typography.heading_xl,
            heading_m: typography.heading_m,
            text_m: typography.text_m,
            text_s: typography.text_s,
            heading_family: &typography.heading_family,
            body_family: &typography.body_family,
            editorial_family: typography.editorial_family.as_deref(),
            display_family: typography.display_family.as_deref(),
        },
        gradient,
    })
}

/// Tailwind `theme.extend` snippet.
pub fn render_tailwind(tokens: &DesignTokens, format: ColorFormat) -> String {
    let typography = &tokens.typography;
    let mut js = String::from(
        "// tailwind.config.js\nmodule.exports = {\n  theme: {\n    extend: {\n      colors: {\n",
    );
    for (role, color) in tokens.colors.iter() {
        let _ = writeln!(
            js,
            "        '{}': '{}',",
            kebab_case(role.key()),
            color.format(format)
        );
    }
    js.push_str("      },\n      fontFamily: {\n");
    let _ = writeln!(js, "        heading: ['{}'],", typography.heading_family);
    let _ = writeln!(js, "        body: ['{}'],", typography.body_family);
    if let Some(editorial) = &typography.editorial_family {
        let _ = writeln!(js, "        editorial: ['{editorial}'],");
    }
    if let Some(display) = &typography.display_family {
        let _ = writeln!(js, "        display: ['{display}'],");
    }
    js.push_str("      }\n    }\n  }\n}");
    js
}

/// Whole degrees when integral, otherwise up to two decimals.
pub(crate) fn format_angle(angle: f64) -> String {
    let angle = if angle.is_finite() {
        angle.clamp(0.0, 360.0)
    } else {
        0.0
    };
    if angle.fract() == 0.0 {
        format!("{angle:.0}")
    } else {
        format!("{angle:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{SeedConfig, generate};

    fn fixture() -> (DesignTokens, Gradient) {
        let seed = SeedConfig::default();
        (generate(&seed), seed.gradient)
    }

    #[test]
    fn kebab_case_splits_on_capitals() {
        assert_eq!(kebab_case("bgPrimary"), "bg-primary");
        assert_eq!(kebab_case("textHeading"), "text-heading");
        assert_eq!(kebab_case("plain"), "plain");
    }

    #[test]
    fn css_lists_every_role_and_font() {
        let (tokens, gradient) = fixture();
        let css = render_css(&tokens, &gradient, ColorFormat::Hex);

        assert!(css.starts_with(":root {"));
        assert!(css.ends_with('}'));
        for role in TokenRole::ALL {
            let line = format!(
                "--color-{}: {};",
                kebab_case(role.key()),
                tokens.colors.get(role).to_hex()
            );
            assert!(css.contains(&line), "missing {line}");
        }
        assert!(css.contains("--font-heading: \"Unbounded\";"));
        assert!(css.contains("--font-body: \"Manrope\";"));
        assert!(css.contains("--font-editorial: \"Spectral\";"));
        assert!(css.contains("--font-display: \"Unbounded\";"));
        assert!(css.contains(
            "--bg-gradient: linear-gradient(165deg, var(--color-bg-primary) 0%, var(--color-bg-secondary) 100%);"
        ));
    }

    #[test]
    fn css_omits_gradient_when_disabled() {
        let (tokens, mut gradient) = fixture();
        gradient.enabled = false;
        let css = render_css(&tokens, &gradient, ColorFormat::Oklch);
        assert!(!css.contains("--bg-gradient"));
        assert!(css.contains("--color-accent-primary: oklch(60.00% 0.100 205.00);"));
    }

    #[test]
    fn json_keeps_role_order_and_format() {
        let (tokens, gradient) = fixture();
        let json = render_json(&tokens, &gradient, ColorFormat::Rgb).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let colors = value["colors"].as_object().unwrap();
        assert_eq!(colors.len(), 10);
        assert!(colors["accentPrimary"].as_str().unwrap().starts_with("rgb("));
        assert_eq!(value["typography"]["headingXL"], "5.5rem");
        assert_eq!(value["typography"]["bodyFamily"], "Manrope");
        assert_eq!(value["typography"]["displayFamily"], "Unbounded");
        assert!(value["gradient"].as_str().unwrap().starts_with("linear-gradient(165deg, rgb("));

        let first = json.find("\"bgPrimary\"").unwrap();
        let last = json.find("\"accentSoft\"").unwrap();
        assert!(first < last);
    }

    #[test]
    fn tailwind_uses_kebab_keys() {
        let (tokens, _) = fixture();
        let js = render_tailwind(&tokens, ColorFormat::Hex);
        assert!(js.starts_with("// tailwind.config.js"));
        assert!(js.contains(&format!(
            "'bg-primary': '{}',",
            tokens.colors.bg_primary.to_hex()
        )));
        assert!(js.contains("heading: ['Unbounded'],"));
        assert!(js.contains("display: ['Unbounded'],"));
    }

    #[test]
    fn targets_parse_and_dispatch() {
        let (tokens, gradient) = fixture();
        for target in ["css", "JSON", "tailwind"] {
            let target: ExportTarget = target.parse().unwrap();
            assert!(!export(&tokens, &gradient, target, ColorFormat::Hex)
                .unwrap()
                .is_empty());
        }
        assert!("scss".parse::<ExportTarget>().is_err());
    }

    #[test]
    fn angle_formatting() {
        assert_eq!(format_angle(165.0), "165");
        assert_eq!(format_angle(12.5), "12.50");
        assert_eq!(format_angle(-10.0), "0");
    }
}
