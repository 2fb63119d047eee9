//! Tuning constants and reference tables for regional color analysis
//!
//! This module contains compile-time constants for the analysis pipeline:
//! grid geometry, clustering defaults, luma weights, and the breakpoint
//! tables used by the heuristic color namer.

/// Grid geometry for the fixed 3x3 regional layout
pub mod grid {
    /// Regions per axis
    pub const GRID_DIM: u32 = 3;

    /// Total region count (GRID_DIM squared)
    pub const REGION_COUNT: usize = 9;

    /// Row-major position labels, one per region (index = row * 3 + col)
    pub const POSITION_LABELS: [&str; REGION_COUNT] = [
        "Top-Left",
        "Top-Center",
        "Top-Right",
        "Middle-Left",
        "Center",
        "Middle-Right",
        "Bottom-Left",
        "Bottom-Center",
        "Bottom-Right",
    ];
}

/// Clustering parameters
pub mod clustering {
    /// Default Euclidean RGB distance below which a pixel joins an
    /// existing cluster. Tuned in the 30-40 range; 35 balances merge
    /// aggressiveness against color fidelity.
    pub const DEFAULT_THRESHOLD: f32 = 35.0;
}

/// Region sampling parameters
pub mod sampling {
    /// Target lattice steps per axis within a region. A 10x10 lattice
    /// yields on the order of 100 samples per region regardless of size.
    pub const DEFAULT_GRID_STEPS: u32 = 10;
}

/// ITU-R BT.601 luma weights shared by brightness and contrast
pub mod luma {
    pub const RED_WEIGHT: f32 = 0.299;
    pub const GREEN_WEIGHT: f32 = 0.587;
    pub const BLUE_WEIGHT: f32 = 0.114;
}

/// Contrast bucketing thresholds over the per-pixel luma stddev
pub mod contrast {
    /// Above this stddev the region is "high" contrast
    pub const HIGH_STDDEV: f32 = 50.0;

    /// Above this stddev (and below HIGH_STDDEV) the region is "medium"
    pub const MEDIUM_STDDEV: f32 = 25.0;
}

/// Breakpoint tables for the heuristic color namer
pub mod naming {
    /// Channel spread below which a color is treated as near-gray
    pub const NEAR_GRAY_DELTA: u8 = 15;

    /// Gray-ladder lightness breakpoints on the 0-255 HSL lightness scale
    pub const WHITE_MIN_LIGHTNESS: f32 = 200.0;
    pub const LIGHT_GRAY_MIN_LIGHTNESS: f32 = 160.0;
    pub const GRAY_MIN_LIGHTNESS: f32 = 100.0;
    pub const DARK_GRAY_MIN_LIGHTNESS: f32 = 50.0;

    /// Lightness above which a chromatic name gets the "Light " prefix
    pub const LIGHT_PREFIX_MIN_LIGHTNESS: f32 = 150.0;

    /// Upper hue bound (degrees, exclusive) per named range. Red wraps
    /// around zero: [RED_WRAP_MIN, 360) and [0, RED_MAX).
    pub const RED_MAX: f32 = 15.0;
    pub const ORANGE_MAX: f32 = 45.0;
    pub const YELLOW_MAX: f32 = 75.0;
    pub const GREEN_MAX: f32 = 135.0;
    pub const TEAL_MAX: f32 = 195.0;
    pub const BLUE_MAX: f32 = 255.0;
    pub const PURPLE_MAX: f32 = 290.0;
    pub const MAGENTA_MAX: f32 = 330.0;
    pub const PINK_MAX: f32 = 345.0;

    /// Hue at or above this re-enters the red range
    pub const RED_WRAP_MIN: f32 = 345.0;
}

/// Histogram bucket sizing
pub mod histogram {
    /// Raw buckets per RGB channel (one per 8-bit value)
    pub const RGB_BUCKETS: usize = 256;

    /// Raw hue buckets (one per degree)
    pub const HUE_BUCKETS: usize = 360;

    /// Raw saturation/value buckets (one per percent, inclusive of 100)
    pub const PERCENT_BUCKETS: usize = 101;

    /// Target display bin count after grouping
    pub const DISPLAY_BINS: usize = 32;
}

/// Fixed defaults for regions with no sampled pixels and for the
/// synthetic fallback path
pub mod degenerate {
    /// Mid-gray dominant color reported for empty regions
    pub const MID_GRAY: [u8; 3] = [128, 128, 128];

    pub const BRIGHTNESS: u8 = 50;
    pub const SATURATION: u8 = 50;
    pub const UNIQUE_COLORS: usize = 1;

    /// Canvas dimensions used for fallback region bounds
    pub const FALLBACK_WIDTH: u32 = 300;
    pub const FALLBACK_HEIGHT: u32 = 300;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_constants() {
        assert_eq!(grid::GRID_DIM * grid::GRID_DIM, grid::REGION_COUNT as u32);
        assert_eq!(grid::POSITION_LABELS.len(), grid::REGION_COUNT);
    }

    #[test]
    fn test_luma_weights_sum_to_one() {
        let sum = luma::RED_WEIGHT + luma::GREEN_WEIGHT + luma::BLUE_WEIGHT;
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_naming_breakpoints_ordered() {
        assert!(naming::DARK_GRAY_MIN_LIGHTNESS < naming::GRAY_MIN_LIGHTNESS);
        assert!(naming::GRAY_MIN_LIGHTNESS < naming::LIGHT_GRAY_MIN_LIGHTNESS);
        assert!(naming::LIGHT_GRAY_MIN_LIGHTNESS < naming::WHITE_MIN_LIGHTNESS);

        let bounds = [
            naming::RED_MAX,
            naming::ORANGE_MAX,
            naming::YELLOW_MAX,
            naming::GREEN_MAX,
            naming::TEAL_MAX,
            naming::BLUE_MAX,
            naming::PURPLE_MAX,
            naming::MAGENTA_MAX,
            naming::PINK_MAX,
            naming::RED_WRAP_MIN,
        ];
        for pair in bounds.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_contrast_thresholds_ordered() {
        assert!(contrast::MEDIUM_STDDEV < contrast::HIGH_STDDEV);
    }
}
