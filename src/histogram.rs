//! RGB and HSV frequency histograms for display
//!
//! Buckets a set of (optionally population-weighted) colors into
//! per-channel raw histograms, downsamples them into display bins, and
//! attaches per-channel diagnostic statistics. Achromatic colors have no
//! defined hue and contribute nothing to the hue histogram; coercing them
//! to bucket zero would visibly skew the red end of the display.
//!
//! Algorithm tag: `algo-weighted-channel-histograms`

use crate::buffer::Pixel;
use crate::color::conversion::{hex_to_rgb, rgb_to_hsv};
use crate::constants::histogram;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A color with a pixel population weight.
///
/// The single canonical input shape for histogram building. Callers
/// holding hex strings or bare channel triples normalize here before any
/// bucketing runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedColor {
    pub pixel: Pixel,
    pub weight: u64,
}

impl WeightedColor {
    /// A color counted once
    pub fn new(pixel: Pixel) -> Self {
        Self { pixel, weight: 1 }
    }

    /// A color counted with an explicit population
    pub fn with_weight(pixel: Pixel, weight: u64) -> Self {
        Self { pixel, weight }
    }

    /// Normalize a hex string such as "#3366CC" into a weighted color
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::ColorParseError` for malformed hex input.
    pub fn from_hex(hex: &str, weight: u64) -> Result<Self> {
        let (r, g, b) = hex_to_rgb(hex)?;
        Ok(Self::with_weight(Pixel::opaque(r, g, b), weight))
    }
}

/// Diagnostic statistics over one channel's raw buckets.
///
/// Display only; no analysis behavior depends on these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelStats {
    /// Sum of all bucket counts
    pub total: u64,
    /// Mean bucket count
    pub mean: f32,
    /// Largest bucket count
    pub peak_value: u64,
    /// Index of the first largest bucket
    pub peak_index: usize,
    /// Variance of the bucket counts
    pub variance: f32,
    /// Standard deviation of the bucket counts
    pub stddev: f32,
}

/// Raw buckets, display grouping, and diagnostics for one channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelHistogram {
    /// One bucket per raw channel value
    pub raw: Vec<u64>,
    /// Raw buckets summed into display-width groups
    pub display: Vec<u64>,
    pub stats: ChannelStats,
}

impl ChannelHistogram {
    fn from_raw(raw: Vec<u64>) -> Self {
        let display = group_buckets(&raw, histogram::DISPLAY_BINS);
        let stats = channel_stats(&raw);
        Self {
            raw,
            display,
            stats,
        }
    }
}

/// Per-channel histograms over the RGB color space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RgbHistogram {
    pub red: ChannelHistogram,
    pub green: ChannelHistogram,
    pub blue: ChannelHistogram,
}

/// Per-channel histograms over the HSV color space.
///
/// Hue totals may be smaller than saturation/value totals: achromatic
/// colors carry weight in saturation and value but none in hue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HsvHistogram {
    pub hue: ChannelHistogram,
    pub saturation: ChannelHistogram,
    pub value: ChannelHistogram,
}

/// Combined histogram output for display consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histograms {
    pub rgb: RgbHistogram,
    pub hsv: HsvHistogram,
}

/// Sum contiguous runs of raw buckets into display groups.
///
/// Groups are ceiling-sized so at most `bins` groups come out; the final
/// group may be short. Group sums preserve the raw total.
fn group_buckets(raw: &[u64], bins: usize) -> Vec<u64> {
    if raw.is_empty() || bins == 0 {
        return Vec::new();
    }
    let group_size = (raw.len() + bins - 1) / bins;
    raw.chunks(group_size)
        .map(|group| group.iter().sum())
        .collect()
}

fn channel_stats(raw: &[u64]) -> ChannelStats {
    if raw.is_empty() {
        return ChannelStats {
            total: 0,
            mean: 0.0,
            peak_value: 0,
            peak_index: 0,
            variance: 0.0,
            stddev: 0.0,
        };
    }

    let total: u64 = raw.iter().sum();
    let mean = total as f32 / raw.len() as f32;

    let mut peak_value = 0u64;
    let mut peak_index = 0usize;
    for (index, &count) in raw.iter().enumerate() {
        if count > peak_value {
            peak_value = count;
            peak_index = index;
        }
    }

    let variance = raw
        .iter()
        .map(|&count| {
            let diff = count as f32 - mean;
            diff * diff
        })
        .sum::<f32>()
        / raw.len() as f32;

    ChannelStats {
        total,
        mean,
        peak_value,
        peak_index,
        variance,
        stddev: variance.sqrt(),
    }
}

/// Build 256-bucket red/green/blue histograms
pub fn build_rgb_histogram(colors: &[WeightedColor]) -> RgbHistogram {
    let mut red = vec![0u64; histogram::RGB_BUCKETS];
    let mut green = vec![0u64; histogram::RGB_BUCKETS];
    let mut blue = vec![0u64; histogram::RGB_BUCKETS];

    for color in colors {
        red[color.pixel.r as usize] += color.weight;
        green[color.pixel.g as usize] += color.weight;
        blue[color.pixel.b as usize] += color.weight;
    }

    RgbHistogram {
        red: ChannelHistogram::from_raw(red),
        green: ChannelHistogram::from_raw(green),
        blue: ChannelHistogram::from_raw(blue),
    }
}

/// Build 360-bucket hue and 101-bucket saturation/value histograms
pub fn build_hsv_histogram(colors: &[WeightedColor]) -> HsvHistogram {
    let mut hue = vec![0u64; histogram::HUE_BUCKETS];
    let mut saturation = vec![0u64; histogram::PERCENT_BUCKETS];
    let mut value = vec![0u64; histogram::PERCENT_BUCKETS];

    for color in colors {
        let hsv = rgb_to_hsv(color.pixel.r, color.pixel.g, color.pixel.b);

        // Undefined hue contributes to no hue bucket at all
        if let Some(degrees) = hsv.hue {
            let bucket = (degrees.round() as usize).min(histogram::HUE_BUCKETS - 1);
            hue[bucket] += color.weight;
        }

        let sat_bucket = (hsv.saturation.round().clamp(0.0, 100.0)) as usize;
        let val_bucket = (hsv.value.round().clamp(0.0, 100.0)) as usize;
        saturation[sat_bucket] += color.weight;
        value[val_bucket] += color.weight;
    }

    HsvHistogram {
        hue: ChannelHistogram::from_raw(hue),
        saturation: ChannelHistogram::from_raw(saturation),
        value: ChannelHistogram::from_raw(value),
    }
}

/// Build the combined RGB and HSV histograms in one pass
pub fn build_histograms(colors: &[WeightedColor]) -> Histograms {
    Histograms {
        rgb: build_rgb_histogram(colors),
        hsv: build_hsv_histogram(colors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted(r: u8, g: u8, b: u8, weight: u64) -> WeightedColor {
        WeightedColor::with_weight(Pixel::opaque(r, g, b), weight)
    }

    #[test]
    fn test_rgb_buckets_receive_weight() {
        let colors = vec![weighted(10, 20, 30, 5), weighted(10, 200, 30, 2)];
        let rgb = build_rgb_histogram(&colors);

        assert_eq!(rgb.red.raw[10], 7);
        assert_eq!(rgb.green.raw[20], 5);
        assert_eq!(rgb.green.raw[200], 2);
        assert_eq!(rgb.blue.raw[30], 7);
    }

    #[test]
    fn test_display_groups_preserve_totals() {
        let colors: Vec<WeightedColor> = (0..=255u8).map(|v| weighted(v, v, 255 - v, 3)).collect();
        let rgb = build_rgb_histogram(&colors);

        for channel in [&rgb.red, &rgb.green, &rgb.blue] {
            let raw_total: u64 = channel.raw.iter().sum();
            let display_total: u64 = channel.display.iter().sum();
            assert_eq!(raw_total, 256 * 3);
            assert_eq!(display_total, raw_total);
            assert_eq!(channel.stats.total, raw_total);
        }
        // 256 raw buckets group evenly into 32 display bins
        assert_eq!(rgb.red.display.len(), 32);
    }

    #[test]
    fn test_hue_grouping_has_short_tail() {
        let hsv = build_hsv_histogram(&[weighted(255, 0, 0, 1)]);

        // ceil(360 / 32) = 12 per group, so 30 groups
        assert_eq!(hsv.hue.display.len(), 30);
        // ceil(101 / 32) = 4 per group: 25 full groups plus one of size 1
        assert_eq!(hsv.saturation.display.len(), 26);
    }

    #[test]
    fn test_gray_contributes_nothing_to_hue() {
        let colors = vec![
            weighted(128, 128, 128, 10),
            weighted(0, 0, 0, 4),
            weighted(255, 0, 0, 3),
        ];
        let hsv = build_hsv_histogram(&colors);

        // Only the red color lands in a hue bucket
        assert_eq!(hsv.hue.stats.total, 3);
        assert_eq!(hsv.hue.raw[0], 3);
        // Grays still count in saturation and value
        assert_eq!(hsv.saturation.stats.total, 17);
        assert_eq!(hsv.value.stats.total, 17);
        assert_eq!(hsv.saturation.raw[0], 14);
    }

    #[test]
    fn test_channel_stats() {
        let colors = vec![weighted(50, 50, 50, 4), weighted(60, 60, 60, 2)];
        let rgb = build_rgb_histogram(&colors);

        assert_eq!(rgb.red.stats.total, 6);
        assert_eq!(rgb.red.stats.peak_value, 4);
        assert_eq!(rgb.red.stats.peak_index, 50);
        assert!(rgb.red.stats.stddev > 0.0);
    }

    #[test]
    fn test_combined_histograms_conserve_population() {
        let colors = vec![weighted(12, 200, 99, 7), weighted(99, 12, 200, 5)];
        let histograms = build_histograms(&colors);

        assert_eq!(histograms.rgb.red.stats.total, 12);
        assert_eq!(histograms.hsv.value.stats.total, 12);
        assert_eq!(histograms.hsv.hue.stats.total, 12);
    }

    #[test]
    fn test_from_hex_normalization() {
        let color = WeightedColor::from_hex("#3366CC", 9).unwrap();
        assert_eq!(color.pixel, Pixel::opaque(51, 102, 204));
        assert_eq!(color.weight, 9);

        assert!(WeightedColor::from_hex("#XYZ", 1).is_err());
    }

    #[test]
    fn test_empty_input() {
        let histograms = build_histograms(&[]);
        assert_eq!(histograms.rgb.red.stats.total, 0);
        assert_eq!(histograms.hsv.hue.stats.total, 0);
        assert_eq!(histograms.rgb.red.raw.len(), 256);
    }
}
