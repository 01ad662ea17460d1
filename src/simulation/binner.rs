//! Uniform-grid spatial binning of particle positions.

use glam::Vec3;

use crate::config::BIN_CLAMP_EPS;
use crate::error::{EngineError, Result};

/// Maps 3D positions inside the domain cube to flat cell indices.
///
/// The mapping is total: out-of-domain positions are clamped to the
/// nearest boundary cell rather than rejected, so every input yields an
/// index in `[0, grid_n^3)`.
#[derive(Clone, Copy, Debug)]
pub struct SpatialBinner {
    grid_n: usize,
    half_extent: f32,
    inv_size: f32,
}

impl SpatialBinner {
    /// Create a binner for a cube of edge length `domain_size` centered
    /// at the origin, split into `grid_n` cells per axis.
    pub fn new(domain_size: f32, grid_n: usize) -> Result<Self> {
        if grid_n == 0 {
            return Err(EngineError::InvalidConfig(
                "grid_n must be at least 1".into(),
            ));
        }
        if !domain_size.is_finite() || domain_size <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "domain_size must be finite and > 0, got {}",
                domain_size
            )));
        }
        Ok(Self {
            grid_n,
            half_extent: domain_size / 2.0,
            inv_size: 1.0 / domain_size,
        })
    }

    /// Cells per axis.
    pub fn grid_n(&self) -> usize {
        self.grid_n
    }

    /// Total cell count, `grid_n^3`.
    pub fn cell_count(&self) -> usize {
        self.grid_n * self.grid_n * self.grid_n
    }

    /// Flat cell index for a position, row-major: `ix + iy*n + iz*n^2`.
    pub fn cell_index(&self, p: Vec3) -> usize {
        let ix = self.axis_cell(p.x);
        let iy = self.axis_cell(p.y);
        let iz = self.axis_cell(p.z);
        ix + iy * self.grid_n + iz * self.grid_n * self.grid_n
    }

    /// Cell coordinate along one axis, clamped so the result never
    /// reaches `grid_n` even at or beyond the max boundary.
    fn axis_cell(&self, coord: f32) -> usize {
        let u = ((coord + self.half_extent) * self.inv_size).clamp(0.0, 1.0 - BIN_CLAMP_EPS);
        (u * self.grid_n as f32).floor() as usize
    }
}
