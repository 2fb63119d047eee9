//! Configuration structures for the regional analysis pipeline.
//!
//! This module defines all tunable parameters for regional color
//! analysis, organized into logical groups for clustering, sampling, and
//! the synthetic fallback path.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed
//! programmatically:
//!
//! ```no_run
//! use region_colors::AnalyzerConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = AnalyzerConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = AnalyzerConfig::default_analysis();
//! # Ok::<(), region_colors::AnalysisError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`ClusteringConfig`]: color distance threshold
//! - [`SamplingConfig`]: per-region sampling lattice density
//! - [`FallbackConfig`]: synthetic-result canvas dimensions

use crate::constants::{clustering, degenerate, sampling};
use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete configuration for regional color analysis.
///
/// Can be serialized to/from JSON for reproducible runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Clustering configuration
    pub clustering: ClusteringConfig,

    /// Region sampling configuration
    pub sampling: SamplingConfig,

    /// Synthetic fallback configuration
    pub fallback: FallbackConfig,
}

/// Color clustering parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteringConfig {
    /// Euclidean RGB distance below which a pixel joins an existing
    /// cluster. Sensible values sit in the 30-40 range.
    pub threshold: f32,
}

/// Region sampling parameters.
///
/// Controls how densely each region's pixel lattice is sampled. The
/// sample count per region is roughly `grid_steps` squared regardless of
/// region size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Lattice steps per axis within a region
    pub grid_steps: u32,
}

/// Synthetic fallback parameters.
///
/// Used when no image is available and the caller requests plausible
/// placeholder results instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Canvas width assumed for fallback region bounds
    pub canvas_width: u32,

    /// Canvas height assumed for fallback region bounds
    pub canvas_height: u32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::default_analysis()
    }
}

impl AnalyzerConfig {
    /// Create the default analysis configuration
    pub fn default_analysis() -> Self {
        Self {
            clustering: ClusteringConfig {
                threshold: clustering::DEFAULT_THRESHOLD,
            },
            sampling: SamplingConfig {
                grid_steps: sampling::DEFAULT_GRID_STEPS,
            },
            fallback: FallbackConfig {
                canvas_width: degenerate::FALLBACK_WIDTH,
                canvas_height: degenerate::FALLBACK_HEIGHT,
            },
        }
    }

    /// Load and validate configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::ConfigError` if the file cannot be read or
    /// parsed, or `AnalysisError::InvalidParameter` for out-of-range
    /// values.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AnalysisError::config(format!("could not read '{}'", path.display()), e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| AnalysisError::config("could not parse configuration JSON", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::config("could not serialize configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| AnalysisError::config(format!("could not write '{}'", path.display()), e))?;
        Ok(())
    }

    /// Check all parameters for usable ranges
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidParameter` naming the first
    /// offending field.
    pub fn validate(&self) -> Result<()> {
        if !self.clustering.threshold.is_finite() || self.clustering.threshold <= 0.0 {
            return Err(AnalysisError::invalid_parameter(
                "clustering.threshold",
                self.clustering.threshold,
            ));
        }
        if self.sampling.grid_steps == 0 {
            return Err(AnalysisError::invalid_parameter(
                "sampling.grid_steps",
                self.sampling.grid_steps,
            ));
        }
        if self.fallback.canvas_width == 0 {
            return Err(AnalysisError::invalid_parameter(
                "fallback.canvas_width",
                self.fallback.canvas_width,
            ));
        }
        if self.fallback.canvas_height == 0 {
            return Err(AnalysisError::invalid_parameter(
                "fallback.canvas_height",
                self.fallback.canvas_height,
            ));
        }
        Ok(())
    }
}
