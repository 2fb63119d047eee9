//! # Region Colors
//!
//! A Rust crate for regional dominant-color analysis of decoded images.
//!
//! This library partitions an RGBA pixel buffer into a fixed 3x3 grid
//! and reports, per region:
//! - The dominant color (hex, heuristic name, RGB, population share)
//! - Descriptive statistics: brightness, saturation, unique-color count,
//!   and a contrast bucket
//!
//! Clustering is a greedy single pass over sampled pixels by Euclidean
//! RGB distance. An independent histogram builder buckets colors into
//! RGB/HSV frequency histograms for display, sharing the same conversion
//! math.
//!
//! ## Example
//!
//! ```rust
//! use region_colors::{analyze_regions, Pixel, PixelBuffer};
//!
//! let buffer = PixelBuffer::filled(90, 90, Pixel::opaque(52, 152, 219))?;
//! let results = analyze_regions(&buffer)?;
//!
//! assert_eq!(results.len(), 9);
//! println!("{}: {}", results[4].position, results[4].dominant_color.hex);
//! # Ok::<(), region_colors::AnalysisError>(())
//! ```
//!
//! Callers without a usable image branch to
//! [`generate_fallback_regions`] instead, which returns plausible
//! synthetic results in the same shape.

pub mod analyzer;
pub mod buffer;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod fallback;
pub mod histogram;
pub mod loader;
pub mod region;

pub use analyzer::{analyze_regions, DominantColor, RegionAnalyzer, RegionResult};
pub use buffer::{Pixel, PixelBuffer};
pub use color::{
    color_distance, name_color, ColorCluster, ColorClusterer, ContrastLevel, RegionStats,
};
pub use config::{AnalyzerConfig, ClusteringConfig, FallbackConfig, SamplingConfig};
pub use error::{AnalysisError, Result};
pub use fallback::{generate_fallback_regions, generate_fallback_regions_with};
pub use histogram::{
    build_histograms, build_hsv_histogram, build_rgb_histogram, ChannelHistogram, ChannelStats,
    Histograms, HsvHistogram, RgbHistogram, WeightedColor,
};
pub use loader::{from_rgba_image, load_pixel_buffer};
pub use region::{Bounds, Region, RegionPartitioner};
