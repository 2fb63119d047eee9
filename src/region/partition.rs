//! Fixed 3x3 partitioning of a pixel buffer with strided sampling
//!
//! Splits the image into nine rectangular regions in row-major order and
//! collects a bounded lattice of sample pixels from each. Region bounds
//! use floor division; the last column and row absorb any remainder so
//! the grid always reaches the true buffer edge.
//!
//! Algorithm tag: `algo-grid-lattice-sampling`

use crate::buffer::{Pixel, PixelBuffer};
use crate::constants::{grid, sampling};
use crate::error::{AnalysisError, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// Pixel-coordinate bounds of a region, end-exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub start_x: u32,
    pub start_y: u32,
    pub end_x: u32,
    pub end_y: u32,
}

impl Bounds {
    /// Width of the bounded area in pixels
    pub fn width(&self) -> u32 {
        self.end_x.saturating_sub(self.start_x)
    }

    /// Height of the bounded area in pixels
    pub fn height(&self) -> u32 {
        self.end_y.saturating_sub(self.start_y)
    }
}

/// One cell of the 3x3 grid with its sampled pixels.
///
/// Never mutated after creation. `index` is row-major: `row * 3 + col`.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub row: u8,
    pub col: u8,
    pub index: u8,
    pub bounds: Bounds,
    pub pixels: Vec<Pixel>,
}

/// Partitioner implementing the fixed 3x3 regional layout
pub struct RegionPartitioner {
    grid_steps: u32,
}

impl Default for RegionPartitioner {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionPartitioner {
    /// Create a partitioner with the default sampling lattice
    pub fn new() -> Self {
        Self {
            grid_steps: sampling::DEFAULT_GRID_STEPS,
        }
    }

    /// Create a partitioner with a custom per-axis lattice step count
    pub fn with_grid_steps(grid_steps: u32) -> Self {
        Self { grid_steps }
    }

    /// Split a buffer into exactly 9 regions in row-major order
    ///
    /// # Arguments
    ///
    /// * `buffer` - Decoded RGBA image to partition
    ///
    /// # Returns
    ///
    /// Nine `Region`s with bounds and sampled pixels, index 0-8 row-major
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidDimensions` if either buffer
    /// dimension is zero. The partitioner never substitutes fallback
    /// dimensions; that choice belongs to the caller.
    pub fn partition(&self, buffer: &PixelBuffer) -> Result<Vec<Region>> {
        let width = buffer.width();
        let height = buffer.height();
        if width == 0 || height == 0 {
            return Err(AnalysisError::InvalidDimensions { width, height });
        }

        let region_width = width / grid::GRID_DIM;
        let region_height = height / grid::GRID_DIM;

        let mut regions = Vec::with_capacity(grid::REGION_COUNT);
        for row in 0..grid::GRID_DIM {
            for col in 0..grid::GRID_DIM {
                let start_x = col * region_width;
                let start_y = row * region_height;
                // Last column/row absorbs the floor-division remainder
                let end_x = if col == grid::GRID_DIM - 1 {
                    width
                } else {
                    (start_x + region_width).min(width)
                };
                let end_y = if row == grid::GRID_DIM - 1 {
                    height
                } else {
                    (start_y + region_height).min(height)
                };

                let bounds = Bounds {
                    start_x,
                    start_y,
                    end_x,
                    end_y,
                };
                let pixels = self.sample_region(buffer, bounds);

                regions.push(Region {
                    row: row as u8,
                    col: col as u8,
                    index: (row * grid::GRID_DIM + col) as u8,
                    bounds,
                    pixels,
                });
            }
        }

        debug!(
            "partitioned {}x{} buffer into {} regions ({} samples total)",
            width,
            height,
            regions.len(),
            regions.iter().map(|r| r.pixels.len()).sum::<usize>()
        );

        Ok(regions)
    }

    /// Collect a strided lattice of pixels within the given bounds.
    ///
    /// Step sizes scale with region dimensions so a region yields on the
    /// order of `grid_steps`-squared samples regardless of its size.
    /// Out-of-buffer coordinates are skipped rather than raised.
    fn sample_region(&self, buffer: &PixelBuffer, bounds: Bounds) -> Vec<Pixel> {
        let step_x = (bounds.width() / self.grid_steps).max(1) as usize;
        let step_y = (bounds.height() / self.grid_steps).max(1) as usize;

        let mut pixels = Vec::new();
        for y in (bounds.start_y..bounds.end_y).step_by(step_y) {
            for x in (bounds.start_x..bounds.end_x).step_by(step_x) {
                if let Some(pixel) = buffer.pixel_at(x, y) {
                    pixels.push(pixel);
                }
            }
        }
        pixels
    }
}
