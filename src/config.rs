//! Tunable constants and the validated construction-time parameter set.

use crate::error::{EngineError, Result};

/// Default domain edge length (cube centered at the origin)
pub const DEFAULT_DOMAIN_SIZE: f32 = 10.0;

/// Default grid resolution per axis (gridN^3 cells total)
pub const DEFAULT_GRID_N: usize = 4;

/// Default particle radius
pub const DEFAULT_RADIUS: f32 = 0.2;

/// Default per-color particle count
pub const DEFAULT_COLOR_COUNT: usize = 250;

/// Default initial speed magnitude
pub const DEFAULT_SPEED: f32 = 1.0;

/// Shared trial budget for the rejection phase of initial placement.
///
/// A single counter for the whole fill, not per particle: a dense
/// configuration can burn the entire budget on one stubborn placement,
/// which bounds worst-case work at the cost of more fallback fills.
pub const PLACEMENT_TRIAL_BUDGET: u32 = 100_000;

/// Safety margin applied to the particle radius when shrinking the
/// placement cube away from the walls.
pub const PLACEMENT_WALL_MARGIN: f32 = 1.1;

/// Upper clamp for normalized axis coordinates during binning.
/// Keeps floor(u * gridN) strictly below gridN for any in- or
/// out-of-domain input.
pub const BIN_CLAMP_EPS: f32 = 1e-5;

/// Construction-time configuration for the mixing engine and sampler.
#[derive(Clone, Copy, Debug)]
pub struct SimConfig {
    /// Domain edge length `L`; the cube spans `[-L/2, L/2]^3`
    pub domain_size: f32,
    /// Cells per axis
    pub grid_n: usize,
    /// Particle radius
    pub radius: f32,
    /// Number of RED particles to seed
    pub num_red: usize,
    /// Number of BLUE particles to seed
    pub num_blue: usize,
    /// Initial speed magnitude
    pub speed: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            domain_size: DEFAULT_DOMAIN_SIZE,
            grid_n: DEFAULT_GRID_N,
            radius: DEFAULT_RADIUS,
            num_red: DEFAULT_COLOR_COUNT,
            num_blue: DEFAULT_COLOR_COUNT,
            speed: DEFAULT_SPEED,
        }
    }
}

impl SimConfig {
    /// Validate every construction-time constraint. Invalid values are
    /// rejected outright, never clamped.
    pub fn validate(&self) -> Result<()> {
        if self.grid_n == 0 {
            return Err(EngineError::InvalidConfig(
                "grid_n must be at least 1".into(),
            ));
        }
        if !self.domain_size.is_finite() || self.domain_size <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "domain_size must be finite and > 0, got {}",
                self.domain_size
            )));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "radius must be finite and > 0, got {}",
                self.radius
            )));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "speed must be finite and >= 0, got {}",
                self.speed
            )));
        }
        Ok(())
    }

    /// Half edge length of the domain cube.
    pub fn half_extent(&self) -> f32 {
        self.domain_size / 2.0
    }

    /// Total particle count across both colors.
    pub fn total_particles(&self) -> usize {
        self.num_red + self.num_blue
    }
}
