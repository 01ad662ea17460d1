//! Mixing-entropy engine for a two-color particle gas.
//!
//! A population of RED and BLUE hard spheres drifts inside a bounded
//! cube. Each tick, particle positions are binned into a uniform
//! `gridN^3` grid and every cell's color-arrangement entropy
//! `ln((R+B)! / (R! B!))` is computed via log-gamma; the per-cell sum
//! is the global mixing entropy reported to the driver. A two-phase
//! sampler seeds the initial non-overlapping population.
//!
//! Physics integration, rendering, and HUD presentation live in
//! external collaborators; this crate only consumes position/color
//! snapshots and returns scalars.

pub mod config;
pub mod error;
pub mod simulation;

pub use config::SimConfig;
pub use error::{EngineError, Result};
pub use simulation::{
    cell_entropy, ramp_parameter, sample_initial_placement, sample_with_budget, CellCounts,
    EntropyReport, MixingEngine, Particle, ParticleColor, PlacementOutcome, SpatialBinner,
};
