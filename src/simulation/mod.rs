//! Simulation core: particles, binning, entropy scoring, placement.

pub mod binner;
pub mod engine;
pub mod entropy;
pub mod particle;
pub mod sampler;
pub mod viz;

pub use binner::SpatialBinner;
pub use engine::MixingEngine;
pub use entropy::{cell_entropy, CellCounts, EntropyReport};
pub use particle::{Particle, ParticleColor};
pub use sampler::{sample_initial_placement, sample_with_budget, PlacementOutcome};
pub use viz::ramp_parameter;
