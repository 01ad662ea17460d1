//! Particle representation for the two-color gas.

use glam::Vec3;

/// Color label of a particle, fixed once assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleColor {
    Red,
    Blue,
}

impl ParticleColor {
    /// Map an upstream boolean color flag (`true` = RED) to a label.
    pub fn from_flag(is_red: bool) -> Self {
        if is_red {
            ParticleColor::Red
        } else {
            ParticleColor::Blue
        }
    }
}

/// A single gas particle.
///
/// Velocity is owned by the physics collaborator after initialization;
/// the engine only ever reads positions and colors.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub id: u32,
    pub position: Vec3,
    pub velocity: Vec3,
    pub color: ParticleColor,
}

impl Particle {
    /// Create a new particle.
    pub fn new(id: u32, position: Vec3, velocity: Vec3, color: ParticleColor) -> Self {
        Self {
            id,
            position,
            velocity,
            color,
        }
    }
}
