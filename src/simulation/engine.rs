//! Per-tick entropy pipeline: bin positions, score cells, aggregate.

use glam::Vec3;

use crate::config::SimConfig;
use crate::error::{EngineError, Result};
use crate::simulation::binner::SpatialBinner;
use crate::simulation::entropy::{score_cells, CellCounts, EntropyReport};
use crate::simulation::particle::ParticleColor;
use crate::simulation::viz::ramp_parameter;

/// The mixing-entropy engine.
///
/// Owns the spatial binner and the per-cell count and entropy arenas,
/// which are cleared in place each tick and reallocated only on a grid
/// reconfiguration. Single-threaded and synchronous: a tick is one call
/// to [`MixingEngine::compute_tick`] and either completes fully or
/// fails before touching any buffer.
#[derive(Debug)]
pub struct MixingEngine {
    binner: SpatialBinner,
    counts: CellCounts,
    per_cell: Vec<f64>,
    last: EntropyReport,
    domain_size: f32,
}

impl MixingEngine {
    /// Build an engine from a validated configuration.
    pub fn new(config: &SimConfig) -> Result<Self> {
        config.validate()?;
        let binner = SpatialBinner::new(config.domain_size, config.grid_n)?;
        let cells = binner.cell_count();
        Ok(Self {
            binner,
            counts: CellCounts::new(cells),
            per_cell: Vec::with_capacity(cells),
            last: EntropyReport::default(),
            domain_size: config.domain_size,
        })
    }

    /// Cells per axis.
    pub fn grid_n(&self) -> usize {
        self.binner.grid_n()
    }

    /// Total cell count.
    pub fn cell_count(&self) -> usize {
        self.binner.cell_count()
    }

    /// Run one tick over a snapshot of the upstream position and color
    /// streams, returning the aggregate report.
    ///
    /// The streams must be index-aligned and of equal length; a
    /// mismatch is an upstream defect and fails the tick before any
    /// state changes. An empty snapshot is a valid population with zero
    /// entropy.
    pub fn compute_tick(
        &mut self,
        positions: &[Vec3],
        colors: &[ParticleColor],
    ) -> Result<EntropyReport> {
        if positions.len() != colors.len() {
            return Err(EngineError::StreamLengthMismatch {
                positions: positions.len(),
                colors: colors.len(),
            });
        }

        // One pass over particles to bin, one pass over cells to score.
        self.counts.clear();
        for (&p, &color) in positions.iter().zip(colors) {
            let cell = self.binner.cell_index(p);
            self.counts.record(cell, color);
        }
        self.last = score_cells(&self.counts, &mut self.per_cell);
        Ok(self.last)
    }

    /// Per-cell entropy values from the most recent tick, in cell
    /// index order.
    pub fn per_cell(&self) -> &[f64] {
        &self.per_cell
    }

    /// Aggregate report from the most recent tick.
    pub fn last_report(&self) -> EntropyReport {
        self.last
    }

    /// Per-cell color-ramp interpolation parameters for the most recent
    /// tick, each in `[0, 1]`. All zero when `s_max` is zero.
    pub fn ramp_parameters(&self) -> impl Iterator<Item = f32> + '_ {
        let s_max = self.last.s_max;
        self.per_cell.iter().map(move |&s| ramp_parameter(s, s_max))
    }

    /// Rebuild binner and arenas for a new grid resolution. Must happen
    /// between ticks; the next tick starts from freshly sized buffers.
    pub fn set_grid_resolution(&mut self, grid_n: usize) -> Result<()> {
        let binner = SpatialBinner::new(self.domain_size, grid_n)?;
        let cells = binner.cell_count();
        log::debug!("grid reconfigured to {0}x{0}x{0} ({1} cells)", grid_n, cells);
        self.binner = binner;
        self.counts.resize(cells);
        self.per_cell.clear();
        self.per_cell.reserve(cells);
        self.last = EntropyReport::default();
        Ok(())
    }
}
