//! Heuristic hue-based color naming
//!
//! Maps an RGB color to a human-readable name. Near-gray colors are
//! classified by HSL lightness alone; chromatic colors fall into fixed
//! hue ranges, with a "Light " prefix above a lightness cutoff. The
//! breakpoints are heuristic display values, not colorimetric naming,
//! and live in `constants::naming`.

use crate::color::conversion::{hsl_lightness, hue_degrees};
use crate::constants::naming;

/// Name an RGB color
///
/// Pure function of its input: the same RGB always yields the same name.
pub fn name_color(r: u8, g: u8, b: u8) -> &'static str {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = hsl_lightness(r, g, b);

    if max - min < naming::NEAR_GRAY_DELTA {
        return if lightness > naming::WHITE_MIN_LIGHTNESS {
            "White"
        } else if lightness > naming::LIGHT_GRAY_MIN_LIGHTNESS {
            "Light Gray"
        } else if lightness > naming::GRAY_MIN_LIGHTNESS {
            "Gray"
        } else if lightness > naming::DARK_GRAY_MIN_LIGHTNESS {
            "Dark Gray"
        } else {
            "Black"
        };
    }

    // max > min here, so hue is always defined
    let hue = match hue_degrees(r, g, b) {
        Some(hue) => hue,
        None => return "Gray",
    };
    let light = lightness > naming::LIGHT_PREFIX_MIN_LIGHTNESS;

    if hue < naming::RED_MAX || hue >= naming::RED_WRAP_MIN {
        if light {
            "Light Red"
        } else {
            "Red"
        }
    } else if hue < naming::ORANGE_MAX {
        if light {
            "Light Orange"
        } else {
            "Orange"
        }
    } else if hue < naming::YELLOW_MAX {
        if light {
            "Light Yellow"
        } else {
            "Yellow"
        }
    } else if hue < naming::GREEN_MAX {
        if light {
            "Light Green"
        } else {
            "Green"
        }
    } else if hue < naming::TEAL_MAX {
        if light {
            "Light Teal"
        } else {
            "Teal"
        }
    } else if hue < naming::BLUE_MAX {
        if light {
            "Light Blue"
        } else {
            "Blue"
        }
    } else if hue < naming::PURPLE_MAX {
        if light {
            "Light Purple"
        } else {
            "Purple"
        }
    } else if hue < naming::MAGENTA_MAX {
        if light {
            "Light Magenta"
        } else {
            "Magenta"
        }
    } else if light {
        "Light Pink"
    } else {
        "Pink"
    }
}
