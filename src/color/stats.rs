//! Per-region descriptive statistics
//!
//! Aggregates a region's sampled pixels into brightness, saturation,
//! unique-color count, and a contrast bucket. The unique-color count
//! deliberately reuses the clusterer rather than a separate counting
//! method, so both report the same notion of "a color".

use crate::buffer::Pixel;
use crate::color::cluster::ColorClusterer;
use crate::constants::{contrast, degenerate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Contrast bucket derived from the per-pixel luma spread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContrastLevel::Low => "low",
            ContrastLevel::Medium => "medium",
            ContrastLevel::High => "high",
        };
        write!(f, "{}", label)
    }
}

/// Descriptive statistics for one region's sampled pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionStats {
    /// Mean luma scaled to 0-100
    pub brightness: u8,
    /// Mean channel spread scaled to 0-100
    pub saturation: u8,
    /// Number of color clusters found in the region, at least 1
    pub unique_colors: usize,
    /// Luma-spread bucket
    pub contrast: ContrastLevel,
}

impl RegionStats {
    /// Fixed statistics reported for a region with no sampled pixels.
    /// Policy, not an error path.
    pub fn degenerate() -> Self {
        Self {
            brightness: degenerate::BRIGHTNESS,
            saturation: degenerate::SATURATION,
            unique_colors: degenerate::UNIQUE_COLORS,
            contrast: ContrastLevel::Low,
        }
    }
}

/// Compute statistics over a region's sampled pixels
///
/// # Arguments
///
/// * `pixels` - The region's sampled pixels; empty input yields the
///   degenerate defaults
/// * `threshold` - Clustering distance threshold, reused for the
///   unique-color count
pub fn compute_stats(pixels: &[Pixel], threshold: f32) -> RegionStats {
    if pixels.is_empty() {
        return RegionStats::degenerate();
    }
    let count = pixels.len() as f32;

    let mean_luma = pixels.iter().map(|p| p.luma()).sum::<f32>() / count;
    let brightness = (mean_luma / 255.0 * 100.0).round() as u8;

    let saturation_sum: f32 = pixels
        .iter()
        .map(|p| {
            let max = p.r.max(p.g).max(p.b) as f32;
            let min = p.r.min(p.g).min(p.b) as f32;
            if max == 0.0 {
                0.0
            } else {
                (max - min) / max
            }
        })
        .sum();
    let saturation = (saturation_sum / count * 100.0).round() as u8;

    let unique_colors = ColorClusterer::with_threshold(threshold)
        .cluster(pixels)
        .len()
        .max(1);

    let luma_variance = pixels
        .iter()
        .map(|p| {
            let diff = p.luma() - mean_luma;
            diff * diff
        })
        .sum::<f32>()
        / count;
    let luma_stddev = luma_variance.sqrt();

    let contrast = if luma_stddev > contrast::HIGH_STDDEV {
        ContrastLevel::High
    } else if luma_stddev > contrast::MEDIUM_STDDEV {
        ContrastLevel::Medium
    } else {
        ContrastLevel::Low
    };

    RegionStats {
        brightness,
        saturation,
        unique_colors,
        contrast,
    }
}
