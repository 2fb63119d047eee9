//! Color clustering, conversion, statistics, and naming
//!
//! This module holds the numeric heart of the pipeline: Euclidean RGB
//! clustering, color space conversions shared with the histogram layer,
//! per-region statistics, and the heuristic color namer.

pub mod cluster;
pub mod conversion;
pub mod naming;
pub mod stats;

pub use cluster::{color_distance, ColorCluster, ColorClusterer};
pub use conversion::{hex_to_rgb, rgb_to_hex, rgb_to_hsv, Hsv};
pub use naming::name_color;
pub use stats::{compute_stats, ContrastLevel, RegionStats};
