use tracing::debug;

use crate::{
    color::Oklch,
    dto::color::{ColorFormatsResponse, OklchDto},
    error::ServiceError,
};

/// Decode a picker hex value and render it in every format.
pub fn from_hex(hex: &str) -> Result<ColorFormatsResponse, ServiceError> {
    let color = Oklch::from_hex(hex)?;
    debug!(hex, %color, "converted hex color");
    Ok(color.into())
}

/// Clamp a raw triple and render it in every format.
pub fn format(triple: OklchDto) -> ColorFormatsResponse {
    Oklch::from(triple).into()
}

/// Decode a canonical `oklch(L% C H)` string.
pub fn parse(value: &str) -> Result<ColorFormatsResponse, ServiceError> {
    let color: Oklch = value.parse()?;
    Ok(color.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trips_through_every_format() {
        let response = from_hex("#3366cc").unwrap();
        assert_eq!(response.hex, "#3366CC");
        assert_eq!(response.rgb, "rgb(51, 102, 204)");
        assert!(response.canonical.starts_with("oklch("));
    }

    #[test]
    fn malformed_input_is_invalid() {
        assert!(matches!(from_hex("#12"), Err(ServiceError::InvalidInput(_))));
        assert!(matches!(
            parse("oklch(50% 0.1)"),
            Err(ServiceError::InvalidInput(_))
        ));
    }

    #[test]
    fn format_clamps_out_of_domain_values() {
        let response = format(OklchDto {
            l: 1.5,
            c: 0.9,
            h: -30.0,
        });
        assert_eq!(response.oklch.l, 1.0);
        assert_eq!(response.oklch.c, 0.4);
        assert_eq!(response.oklch.h, 330.0);
    }

    #[test]
    fn parse_accepts_canonical_output() {
        let response = parse("oklch(62.50% 0.120 40.00)").unwrap();
        assert!((response.oklch.l - 0.625).abs() < 1e-12);
        assert_eq!(response.canonical, "oklch(62.50% 0.120 40.00)");
    }
}
