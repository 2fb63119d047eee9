//! The regional analysis pipeline
//!
//! Orchestrates partition, clustering, statistics, and naming into the
//! nine structured results callers consume: one `RegionResult` per cell
//! of the 3x3 grid, in row-major order.

use crate::buffer::{Pixel, PixelBuffer};
use crate::color::cluster::ColorClusterer;
use crate::color::conversion::rgb_to_hex;
use crate::color::naming::name_color;
use crate::color::stats::{compute_stats, RegionStats};
use crate::config::AnalyzerConfig;
use crate::constants::{degenerate, grid};
use crate::error::Result;
use crate::fallback;
use crate::region::{Bounds, Region, RegionPartitioner};
use log::debug;
use serde::{Deserialize, Serialize};

/// The dominant color of a region with its display representations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominantColor {
    /// Uppercase hex string, e.g. "#3366CC"
    pub hex: String,
    /// Heuristic color name, e.g. "Light Blue"
    pub name: String,
    /// RGB channels of the dominant cluster centroid
    pub rgb: [u8; 3],
    /// Share of the region's sampled pixels in the dominant cluster,
    /// rounded to a whole percentage. Independent across regions.
    pub percentage: u8,
}

/// Analysis output for one region of the 3x3 grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionResult {
    /// Fixed row-major label, "Top-Left" through "Bottom-Right"
    pub position: String,
    /// One-based region number, 1-9 in row-major order
    pub index: u8,
    pub row: u8,
    pub col: u8,
    pub dominant_color: DominantColor,
    pub stats: RegionStats,
    pub bounds: Bounds,
}

/// Analyzer running the full 9-region pipeline
pub struct RegionAnalyzer {
    config: AnalyzerConfig,
}

impl Default for RegionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionAnalyzer {
    /// Create an analyzer with the default configuration
    pub fn new() -> Self {
        Self {
            config: AnalyzerConfig::default_analysis(),
        }
    }

    /// Create an analyzer with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidParameter` if the configuration
    /// fails validation.
    pub fn with_config(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze a pixel buffer into 9 regional results
    ///
    /// # Arguments
    ///
    /// * `buffer` - Decoded RGBA image owned by the caller; no reference
    ///   is retained past this call
    ///
    /// # Returns
    ///
    /// Exactly 9 `RegionResult`s in row-major order
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidDimensions` for a zero-sized
    /// buffer. Callers without a usable image should branch to
    /// [`fallback_regions`](Self::fallback_regions) instead of calling
    /// this.
    pub fn analyze(&self, buffer: &PixelBuffer) -> Result<Vec<RegionResult>> {
        let partitioner = RegionPartitioner::with_grid_steps(self.config.sampling.grid_steps);
        let clusterer = ColorClusterer::with_threshold(self.config.clustering.threshold);

        let regions = partitioner.partition(buffer)?;
        debug!(
            "analyzing {}x{} buffer across {} regions",
            buffer.width(),
            buffer.height(),
            regions.len()
        );

        Ok(regions
            .iter()
            .map(|region| self.analyze_region(region, &clusterer))
            .collect())
    }

    /// Produce synthetic results for the no-image path, using the
    /// configured fallback canvas and thread-local randomness
    pub fn fallback_regions(&self) -> Vec<RegionResult> {
        fallback::generate_for_canvas(
            self.config.fallback.canvas_width,
            self.config.fallback.canvas_height,
            &mut rand::thread_rng(),
        )
    }

    fn analyze_region(&self, region: &Region, clusterer: &ColorClusterer) -> RegionResult {
        let clusters = clusterer.cluster(&region.pixels);

        // Empty regions fall back to fixed mid-gray defaults
        let (centroid, percentage) = match clusters.first() {
            Some(dominant) => {
                let share =
                    dominant.len() as f32 * 100.0 / region.pixels.len() as f32;
                (dominant.centroid, share.round() as u8)
            }
            None => {
                let [r, g, b] = degenerate::MID_GRAY;
                (Pixel::opaque(r, g, b), 0)
            }
        };

        let stats = compute_stats(&region.pixels, self.config.clustering.threshold);

        let [r, g, b] = centroid.rgb();
        debug!(
            "region {} ({}): {} clusters, dominant {} at {}%",
            region.index,
            grid::POSITION_LABELS[region.index as usize],
            clusters.len(),
            rgb_to_hex(r, g, b),
            percentage
        );

        RegionResult {
            position: grid::POSITION_LABELS[region.index as usize].to_string(),
            index: region.index + 1,
            row: region.row,
            col: region.col,
            dominant_color: DominantColor {
                hex: rgb_to_hex(r, g, b),
                name: name_color(r, g, b).to_string(),
                rgb: [r, g, b],
                percentage,
            },
            stats,
            bounds: region.bounds,
        }
    }
}

/// Analyze a pixel buffer with the default configuration.
///
/// The crate's primary entry point; see [`RegionAnalyzer::analyze`].
pub fn analyze_regions(buffer: &PixelBuffer) -> Result<Vec<RegionResult>> {
    RegionAnalyzer::new().analyze(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::stats::ContrastLevel;

    #[test]
    fn test_uniform_image() {
        let buffer = PixelBuffer::filled(60, 60, Pixel::opaque(10, 200, 50)).unwrap();
        let results = analyze_regions(&buffer).unwrap();

        assert_eq!(results.len(), 9);
        for result in &results {
            assert_eq!(result.dominant_color.rgb, [10, 200, 50]);
            assert_eq!(result.dominant_color.hex, "#0AC832");
            assert_eq!(result.dominant_color.percentage, 100);
            assert_eq!(result.stats.unique_colors, 1);
            assert_eq!(result.stats, results[0].stats);
        }
    }

    #[test]
    fn test_indices_and_positions() {
        let buffer = PixelBuffer::filled(30, 30, Pixel::opaque(0, 0, 0)).unwrap();
        let results = analyze_regions(&buffer).unwrap();

        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.index as usize, i + 1);
            assert_eq!(result.position, grid::POSITION_LABELS[i]);
            assert_eq!(result.row as usize, i / 3);
            assert_eq!(result.col as usize, i % 3);
        }
    }

    #[test]
    fn test_empty_regions_use_degenerate_defaults() {
        // A 2x2 image leaves every region except the last without samples
        let buffer = PixelBuffer::filled(2, 2, Pixel::opaque(255, 0, 0)).unwrap();
        let results = analyze_regions(&buffer).unwrap();

        let empty = &results[0];
        assert_eq!(empty.dominant_color.hex, "#808080");
        assert_eq!(empty.dominant_color.name, "Gray");
        assert_eq!(empty.dominant_color.percentage, 0);
        assert_eq!(empty.stats.brightness, 50);
        assert_eq!(empty.stats.contrast, ContrastLevel::Low);

        let sampled = &results[8];
        assert_eq!(sampled.dominant_color.rgb, [255, 0, 0]);
        assert_eq!(sampled.dominant_color.percentage, 100);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = AnalyzerConfig::default_analysis();
        config.clustering.threshold = -5.0;
        assert!(RegionAnalyzer::with_config(config).is_err());
    }

    #[test]
    fn test_result_serialization_round_trip() {
        let buffer = PixelBuffer::filled(30, 30, Pixel::opaque(51, 102, 204)).unwrap();
        let results = analyze_regions(&buffer).unwrap();

        let json = serde_json::to_string(&results).unwrap();
        let parsed: Vec<RegionResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(results, parsed);
    }
}
