//! # Raster Geometry
//!
//! The CRT draws row-major across a `width x height` raster, one pixel per
//! cycle. This module sizes the raster around a laid-out message and turns
//! its 2-D pixels into the cycle indices that must be lit.
//!
//! ## Usage
//!
//! ```
//! use crtgen::raster::{RasterConfig, round_width};
//!
//! let config = RasterConfig::STANDARD;
//! assert_eq!(round_width(23, config.granularity), 30);
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::CrtgenError;
use crate::glyph::GLYPH_HEIGHT;
use crate::layout::Layout;

/// Leading cycles the generated program cannot steer.
///
/// The register only moves once the first `addx` completes, so the first
/// cycles always show the beam at its start position.
pub const UNRELIABLE_CYCLES: usize = 2;

/// # Raster Configuration
///
/// Geometry knobs for laying out text and sizing the raster.
///
/// - **granularity**: raster width is rounded up to a multiple of this
/// - **height**: raster rows, matches the glyph cell height
/// - **cursor_start**: first glyph column; cycles before it are unreliable
/// - **glyph_advance**: cursor advance after a glyph with pixels
/// - **space_advance**: cursor advance after a blank glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterConfig {
    pub granularity: usize,
    pub height: usize,
    pub cursor_start: usize,
    pub glyph_advance: usize,
    pub space_advance: usize,
}

impl RasterConfig {
    /// Layout used by the generated puzzle inputs.
    pub const STANDARD: Self = Self {
        granularity: 10,
        height: GLYPH_HEIGHT,
        cursor_start: 2,
        glyph_advance: 5,
        space_advance: 3,
    };

    /// Reject configurations that would produce an empty raster.
    pub fn validate(&self) -> Result<(), CrtgenError> {
        if self.granularity == 0 {
            return Err(CrtgenError::Config("granularity must be positive".into()));
        }
        if self.height < GLYPH_HEIGHT {
            return Err(CrtgenError::Config(format!(
                "height {} is smaller than the glyph height {}",
                self.height, GLYPH_HEIGHT
            )));
        }
        if self.cursor_start < UNRELIABLE_CYCLES {
            return Err(CrtgenError::Config(format!(
                "cursor must start at column {} or later",
                UNRELIABLE_CYCLES
            )));
        }
        if self.glyph_advance == 0 || self.space_advance == 0 {
            return Err(CrtgenError::Config("advances must be positive".into()));
        }
        Ok(())
    }
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Round `total_width` up to the next multiple of `granularity`.
///
/// Never returns less than one `granularity`, so an empty message still gets
/// a raster to scan.
pub fn round_width(total_width: usize, granularity: usize) -> usize {
    total_width.div_ceil(granularity).max(1) * granularity
}

/// A sized raster plus the cycles that must be lit on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pub width: usize,
    pub height: usize,
    pub targets: BTreeSet<usize>,
}

impl Raster {
    /// Size the raster around `layout` and flatten its points to cycles.
    pub fn from_layout(layout: &Layout, config: &RasterConfig) -> Self {
        let width = round_width(layout.width, config.granularity);
        let height = config.height;
        let targets = layout
            .points
            .iter()
            .map(|&(x, y)| {
                debug_assert!(x < width && y < height, "point ({x}, {y}) off raster");
                x + y * width
            })
            .collect();

        Self {
            width,
            height,
            targets,
        }
    }

    /// Total cycles needed to scan the whole raster.
    pub fn cycles(&self) -> usize {
        self.width * self.height
    }

    pub fn is_target(&self, cycle: usize) -> bool {
        self.targets.contains(&cycle)
    }

    /// Row index of a cycle.
    #[inline]
    pub fn row(&self, cycle: usize) -> usize {
        cycle / self.width
    }

    /// Column index of a cycle.
    #[inline]
    pub fn column(&self, cycle: usize) -> usize {
        cycle % self.width
    }

    /// Render the target pattern as rows of `#` and `.`.
    pub fn render(&self) -> Vec<String> {
        render_rows(self.width, self.height, |c| self.is_target(c))
    }
}

/// Render a `width x height` grid row by row.
pub(crate) fn render_rows(
    width: usize,
    height: usize,
    lit: impl Fn(usize) -> bool,
) -> Vec<String> {
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| if lit(x + y * width) { '#' } else { '.' })
                .collect()
        })
        .collect()
}
