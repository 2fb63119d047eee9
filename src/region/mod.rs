//! Regional partitioning module
//!
//! This module slices a decoded pixel buffer into the fixed 3x3 grid of
//! regions and samples a bounded subset of pixels from each.

pub mod partition;

pub use partition::{Bounds, Region, RegionPartitioner};
