//! Validation helpers for DTOs.

use validator::ValidationError;

/// Longest font family name accepted from clients.
const MAX_FONT_NAME_LEN: usize = 64;

/// Validates a color picker value: `#` optional, then 3 or 6 hexadecimal digits.
///
/// # Examples
///
/// ```ignore
/// validate_hex_color("#1a2b3c") // Ok
/// validate_hex_color("fff")     // Ok
/// validate_hex_color("#12345")  // Err - length
/// validate_hex_color("#gggggg") // Err - not hex
/// ```
pub fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    let digits = value.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    if digits.len() != 6 && digits.len() != 3 {
        let mut err = ValidationError::new("hex_color_length");
        err.message = Some(
            format!(
                "Hex color must have 3 or 6 digits (got {})",
                digits.len()
            )
            .into(),
        );
        return Err(err);
    }

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        let mut err = ValidationError::new("hex_color_format");
        err.message = Some("Hex color must contain only hexadecimal digits".into());
        return Err(err);
    }

    Ok(())
}

/// Validates a font family name: non-blank, bounded, no quotes or markup.
pub fn validate_font_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        let mut err = ValidationError::new("font_name_empty");
        err.message = Some("Font family name must not be empty".into());
        return Err(err);
    }

    if trimmed.len() > MAX_FONT_NAME_LEN {
        let mut err = ValidationError::new("font_name_length");
        err.message = Some(
            format!("Font family name must be at most {MAX_FONT_NAME_LEN} characters").into(),
        );
        return Err(err);
    }

    if trimmed
        .chars()
        .any(|c| matches!(c, '"' | '\'' | ';' | '{' | '}' | '<' | '>') || c.is_control())
    {
        let mut err = ValidationError::new("font_name_format");
        err.message = Some("Font family name contains forbidden characters".into());
        return Err(err);
    }

    Ok(())
}
