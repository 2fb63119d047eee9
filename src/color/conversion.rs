//! Color space conversion utilities
//!
//! Shared numeric conversions for the clustering, naming, and histogram
//! layers:
//! - RGB to HSV with an explicitly undefined hue for achromatic input
//! - HSL lightness on the 0-255 scale used by the color namer
//! - Hex color formatting and parsing
//!
//! Algorithm tag: `algo-hsv-undefined-hue`

use crate::error::{AnalysisError, Result};
use palette::{FromColor, Hsv as PaletteHsv, Srgb};

/// HSV components of a color.
///
/// `hue` is `None` for achromatic colors (max channel equals min). Gray
/// pixels must not be coerced to hue 0; the hue histogram relies on the
/// distinction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees, [0, 360), or `None` when undefined
    pub hue: Option<f32>,
    /// Saturation as a percentage, 0-100
    pub saturation: f32,
    /// Value as a percentage, 0-100
    pub value: f32,
}

/// Convert 8-bit RGB to HSV components
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let srgb = Srgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
    let hsv = PaletteHsv::from_color(srgb);

    // Saturation is exactly zero iff max == min, which is the
    // undefined-hue case of the six-piecewise formula.
    let hue = if hsv.saturation == 0.0 {
        None
    } else {
        Some(hsv.hue.into_positive_degrees())
    };

    Hsv {
        hue,
        saturation: hsv.saturation * 100.0,
        value: hsv.value * 100.0,
    }
}

/// Hue of an RGB color in degrees, `None` for achromatic input
pub fn hue_degrees(r: u8, g: u8, b: u8) -> Option<f32> {
    rgb_to_hsv(r, g, b).hue
}

/// HSL lightness of an RGB color on the 0-255 scale: (max + min) / 2
pub fn hsl_lightness(r: u8, g: u8, b: u8) -> f32 {
    let max = r.max(g).max(b) as f32;
    let min = r.min(g).min(b) as f32;
    (max + min) / 2.0
}

/// Format 8-bit RGB as an uppercase hex string, e.g. "#3366CC"
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Parse a hex color string into an RGB triple
///
/// Accepts an optional leading `#`.
///
/// # Errors
///
/// Returns `AnalysisError::ColorParseError` if the string is not six hex
/// digits.
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Err(AnalysisError::ColorParseError {
            message: format!("expected 6 hex digits, got {}", hex.len()),
        });
    }

    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|e| AnalysisError::ColorParseError {
        message: format!("invalid red value: {}", e),
    })?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|e| AnalysisError::ColorParseError {
        message: format!("invalid green value: {}", e),
    })?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|e| AnalysisError::ColorParseError {
        message: format!("invalid blue value: {}", e),
    })?;

    Ok((r, g, b))
}
