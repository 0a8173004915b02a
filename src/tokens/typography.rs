//! Font-family slots, fixed size tokens and the web-font stylesheet URL.

/// Display heading size.
pub const HEADING_XL: &str = "5.5rem";
/// Section heading size.
pub const HEADING_M: &str = "2.5rem";
/// Lead paragraph size.
pub const TEXT_M: &str = "1.25rem";
/// Caption size.
pub const TEXT_S: &str = "0.875rem";

const HEADING_AXES: &str = "wght@400;700;900";
const BODY_AXES: &str = "wght@400;700;800";
const EDITORIAL_AXES: &str = "ital,wght@0,400;0,700;1,400";
const DISPLAY_AXES: &str = "wght@400;700;900";

/// Font families chosen for the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypographyConfig {
    /// Heading family.
    pub heading: String,
    /// Body copy family.
    pub body: String,
    /// Long-form editorial family.
    pub editorial: Option<String>,
    /// Oversized display family.
    pub display: Option<String>,
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self {
            heading: "Unbounded".into(),
            body: "Manrope".into(),
            editorial: Some("Spectral".into()),
            display: Some("Unbounded".into()),
        }
    }
}

/// Typography half of the token set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypographyTokens {
    /// `headingXL`
    pub heading_xl: &'static str,
    /// `headingM`
    pub heading_m: &'static str,
    /// `textM`
    pub text_m: &'static str,
    /// `textS`
    pub text_s: &'static str,
    /// Heading family, unchanged.
    pub heading_family: String,
    /// Body family, unchanged.
    pub body_family: String,
    /// Editorial family, unchanged.
    pub editorial_family: Option<String>,
    /// Display family, unchanged.
    pub display_family: Option<String>,
}

impl From<&TypographyConfig> for TypographyTokens {
    fn from(config: &TypographyConfig) -> Self {
        Self {
            heading_xl: HEADING_XL,
            heading_m: HEADING_M,
            text_m: TEXT_M,
            text_s: TEXT_S,
            heading_family: config.heading.clone(),
            body_family: config.body.clone(),
            editorial_family: config.editorial.clone(),
            display_family: config.display.clone(),
        }
    }
}

/// Build the css2-style stylesheet URL loading every configured family.
///
/// A family listed in more than one slot is requested once, with the axes of
/// the first slot it appears in.
pub fn stylesheet_url(base_url: &str, config: &TypographyConfig) -> String {
    let slots = [
        (Some(config.heading.as_str()), HEADING_AXES),
        (Some(config.body.as_str()), BODY_AXES),
        (config.editorial.as_deref(), EDITORIAL_AXES),
        (config.display.as_deref(), DISPLAY_AXES),
    ];

    let mut seen: Vec<&str> = Vec::with_capacity(slots.len());
    let mut params = Vec::with_capacity(slots.len() + 1);
    for (family, axes) in slots {
        let Some(family) = family.map(str::trim).filter(|name| !name.is_empty()) else {
            continue;
        };
        if seen.contains(&family) {
            continue;
        }
        seen.push(family);
        params.push(format!(
            "family={}:{axes}",
            family.split_whitespace().collect::<Vec<_>>().join("+")
        ));
    }
    params.push("display=swap".to_string());

    format!("{}?{}", base_url.trim_end_matches('?'), params.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://fonts.googleapis.com/css2";

    #[test]
    fn url_lists_every_family_with_axes() {
        let config = TypographyConfig {
            heading: "Playfair Display".into(),
            body: "Manrope".into(),
            editorial: Some("Spectral".into()),
            display: Some("Unbounded".into()),
        };
        assert_eq!(
            stylesheet_url(BASE, &config),
            "https://fonts.googleapis.com/css2?\
             family=Playfair+Display:wght@400;700;900&\
             family=Manrope:wght@400;700;800&\
             family=Spectral:ital,wght@0,400;0,700;1,400&\
             family=Unbounded:wght@400;700;900&\
             display=swap"
        );
    }

    #[test]
    fn url_skips_duplicates_and_empty_slots() {
        let config = TypographyConfig {
            heading: "Inter".into(),
            body: "Inter".into(),
            editorial: Some("  ".into()),
            display: None,
        };
        assert_eq!(
            stylesheet_url(BASE, &config),
            "https://fonts.googleapis.com/css2?family=Inter:wght@400;700;900&display=swap"
        );
    }

    #[test]
    fn default_families_request_each_font_once() {
        assert_eq!(
            stylesheet_url(BASE, &TypographyConfig::default()),
            "https://fonts.googleapis.com/css2?\
             family=Unbounded:wght@400;700;900&\
             family=Manrope:wght@400;700;800&\
             family=Spectral:ital,wght@0,400;0,700;1,400&\
             display=swap"
        );
    }

    #[test]
    fn tokens_pass_families_through() {
        let config = TypographyConfig::default();
        let tokens = TypographyTokens::from(&config);
        assert_eq!(tokens.heading_family, "Unbounded");
        assert_eq!(tokens.body_family, "Manrope");
        assert_eq!(tokens.editorial_family.as_deref(), Some("Spectral"));
        assert_eq!(tokens.display_family.as_deref(), Some("Unbounded"));
        assert_eq!(tokens.heading_xl, "5.5rem");
        assert_eq!(tokens.text_s, "0.875rem");
    }
}
