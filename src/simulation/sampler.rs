//! Initial placement of the two-color particle population.
//!
//! Placement runs in two explicit phases. Phase 1 rejection-samples
//! positions inside a wall-shrunk cube, accepting a candidate only if
//! it clears every already-accepted particle by two radii; all
//! placements share a single trial budget. Phase 2 fills whatever is
//! left with unconstrained uniform positions, tolerating overlap on
//! the assumption that the physics collaborator resolves
//! interpenetration. Non-overlap is therefore a soft guarantee that
//! holds only below the density the budget can serve.

use glam::Vec3;
use rand::Rng;

use crate::config::{SimConfig, PLACEMENT_TRIAL_BUDGET, PLACEMENT_WALL_MARGIN};
use crate::error::Result;
use crate::simulation::particle::{Particle, ParticleColor};

/// Result of an initial placement run.
#[derive(Clone, Debug)]
pub struct PlacementOutcome {
    /// The seeded population, `num_red + num_blue` particles. The first
    /// `num_red` generated are RED, the remainder BLUE.
    pub particles: Vec<Particle>,
    /// True if the trial budget ran out and the fallback phase placed
    /// at least one particle, so overlaps are possible.
    pub degraded: bool,
    /// Rejection-phase trials consumed.
    pub trials_used: u32,
}

/// Sample a starting population with the default trial budget.
///
/// The RNG is injected so callers control reproducibility; the engine
/// itself makes no seeding guarantee.
pub fn sample_initial_placement<R: Rng>(config: &SimConfig, rng: &mut R) -> Result<PlacementOutcome> {
    sample_with_budget(config, PLACEMENT_TRIAL_BUDGET, rng)
}

/// Sample with an explicit trial budget. A small budget forces the
/// fallback phase, which keeps each phase independently testable.
pub fn sample_with_budget<R: Rng>(
    config: &SimConfig,
    trial_budget: u32,
    rng: &mut R,
) -> Result<PlacementOutcome> {
    config.validate()?;

    let total = config.total_particles();
    let mut particles: Vec<Particle> = Vec::with_capacity(total);

    let half = config.half_extent();
    // Shrink the placement cube so spheres start clear of the walls.
    let half_inner = half - config.radius * PLACEMENT_WALL_MARGIN;
    let min_dist_sq = (2.0 * config.radius) * (2.0 * config.radius);

    // Phase 1: rejection sampling under a shared budget. Skipped
    // entirely when the margin swallows the whole domain.
    let mut trials_used = 0u32;
    if half_inner > 0.0 {
        while particles.len() < total && trials_used < trial_budget {
            trials_used += 1;
            let candidate = Vec3::new(
                rng.gen_range(-half_inner..=half_inner),
                rng.gen_range(-half_inner..=half_inner),
                rng.gen_range(-half_inner..=half_inner),
            );
            if overlaps_existing(&particles, candidate, min_dist_sq) {
                continue;
            }
            let id = particles.len() as u32;
            let velocity = sphere_velocity(config.speed, rng);
            particles.push(Particle::new(id, candidate, velocity, color_for(id, config)));
        }
    }

    // Phase 2: unconstrained fill for whatever remains.
    let remaining = total - particles.len();
    if remaining > 0 {
        log::warn!(
            "placement budget exhausted after {} trials; filling {} of {} particles without overlap checks",
            trials_used,
            remaining,
            total
        );
        let fill_half = if half_inner > 0.0 { half_inner } else { half };
        while particles.len() < total {
            let id = particles.len() as u32;
            let position = Vec3::new(
                rng.gen_range(-fill_half..=fill_half),
                rng.gen_range(-fill_half..=fill_half),
                rng.gen_range(-fill_half..=fill_half),
            );
            let velocity = Vec3::new(
                rng.gen_range(-config.speed..=config.speed),
                rng.gen_range(-config.speed..=config.speed),
                rng.gen_range(-config.speed..=config.speed),
            );
            particles.push(Particle::new(id, position, velocity, color_for(id, config)));
        }
    }

    Ok(PlacementOutcome {
        particles,
        degraded: remaining > 0,
        trials_used,
    })
}

/// Color by generation order: the first `num_red` particles are RED.
fn color_for(id: u32, config: &SimConfig) -> ParticleColor {
    if (id as usize) < config.num_red {
        ParticleColor::Red
    } else {
        ParticleColor::Blue
    }
}

/// Velocity of magnitude `speed` with direction uniform over the
/// sphere. Sampling `cos(theta)` uniformly avoids the corner bias of
/// independent per-axis draws.
fn sphere_velocity<R: Rng>(speed: f32, rng: &mut R) -> Vec3 {
    let theta = rng.gen_range(-1.0f32..=1.0).acos();
    let phi = rng.gen_range(0.0f32..std::f32::consts::TAU);
    Vec3::new(
        theta.sin() * phi.cos(),
        theta.sin() * phi.sin(),
        theta.cos(),
    ) * speed
}

fn overlaps_existing(existing: &[Particle], candidate: Vec3, min_dist_sq: f32) -> bool {
    existing
        .iter()
        .any(|p| p.position.distance_squared(candidate) < min_dist_sq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn sparse_config() -> SimConfig {
        SimConfig {
            domain_size: 10.0,
            radius: 0.2,
            num_red: 10,
            num_blue: 10,
            speed: 1.5,
            ..SimConfig::default()
        }
    }

    #[test]
    fn test_low_density_has_no_overlap() {
        let cfg = sparse_config();
        let mut rng = StdRng::seed_from_u64(42);
        let out = sample_initial_placement(&cfg, &mut rng).expect("placement");

        assert_eq!(out.particles.len(), 20);
        assert!(!out.degraded, "sparse fill should not need the fallback");

        let min_dist = 2.0 * cfg.radius;
        for i in 0..out.particles.len() {
            for j in (i + 1)..out.particles.len() {
                let d = out.particles[i]
                    .position
                    .distance(out.particles[j].position);
                assert!(
                    d >= min_dist - 1e-5,
                    "particles {} and {} overlap: distance {}",
                    i,
                    j,
                    d
                );
            }
        }
    }

    #[test]
    fn test_color_assignment_by_generation_order() {
        let cfg = SimConfig {
            num_red: 7,
            num_blue: 13,
            ..sparse_config()
        };
        let mut rng = StdRng::seed_from_u64(5);
        let out = sample_initial_placement(&cfg, &mut rng).expect("placement");

        for (i, p) in out.particles.iter().enumerate() {
            let expected = if i < 7 {
                ParticleColor::Red
            } else {
                ParticleColor::Blue
            };
            assert_eq!(p.color, expected, "particle {} has wrong color", i);
            assert_eq!(p.id as usize, i);
        }
    }

    #[test]
    fn test_rejection_phase_speed_magnitude() {
        let cfg = sparse_config();
        let mut rng = StdRng::seed_from_u64(9);
        let out = sample_initial_placement(&cfg, &mut rng).expect("placement");
        assert!(!out.degraded);
        for p in &out.particles {
            assert!((p.velocity.length() - cfg.speed).abs() < 1e-4);
        }
    }

    #[test]
    fn test_positions_stay_clear_of_walls() {
        let cfg = sparse_config();
        let mut rng = StdRng::seed_from_u64(17);
        let out = sample_initial_placement(&cfg, &mut rng).expect("placement");
        let bound = cfg.half_extent() - cfg.radius * PLACEMENT_WALL_MARGIN + 1e-5;
        for p in &out.particles {
            assert!(p.position.abs().max_element() <= bound);
        }
    }

    #[test]
    fn test_exhausted_budget_falls_back() {
        let cfg = sparse_config();
        let mut rng = StdRng::seed_from_u64(3);
        let out = sample_with_budget(&cfg, 5, &mut rng).expect("placement");

        // Budget of 5 cannot place 20 particles; the fill still
        // completes and flags the degradation.
        assert_eq!(out.particles.len(), 20);
        assert!(out.degraded);
        assert_eq!(out.trials_used, 5);

        // Fallback velocities are per-axis uniform, bounded by speed.
        for p in &out.particles {
            assert!(p.velocity.abs().max_element() <= cfg.speed + 1e-6);
        }
    }

    #[test]
    fn test_zero_budget_fills_everything_unconstrained() {
        let cfg = sparse_config();
        let mut rng = StdRng::seed_from_u64(8);
        let out = sample_with_budget(&cfg, 0, &mut rng).expect("placement");
        assert_eq!(out.particles.len(), 20);
        assert!(out.degraded);
        assert_eq!(out.trials_used, 0);
    }

    #[test]
    fn test_empty_population() {
        let cfg = SimConfig {
            num_red: 0,
            num_blue: 0,
            ..sparse_config()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let out = sample_initial_placement(&cfg, &mut rng).expect("placement");
        assert!(out.particles.is_empty());
        assert!(!out.degraded);
    }

    #[test]
    fn test_zero_speed_is_valid() {
        let cfg = SimConfig {
            speed: 0.0,
            ..sparse_config()
        };
        let mut rng = StdRng::seed_from_u64(2);
        let out = sample_initial_placement(&cfg, &mut rng).expect("placement");
        for p in &out.particles {
            assert_eq!(p.velocity, Vec3::ZERO);
        }
    }

    #[test]
    fn test_seeded_rng_reproduces_layout() {
        let cfg = sparse_config();
        let a = sample_initial_placement(&cfg, &mut StdRng::seed_from_u64(77)).expect("placement");
        let b = sample_initial_placement(&cfg, &mut StdRng::seed_from_u64(77)).expect("placement");
        for (pa, pb) in a.particles.iter().zip(&b.particles) {
            assert_eq!(pa.position, pb.position);
            assert_eq!(pa.velocity, pb.velocity);
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let cfg = SimConfig {
            radius: 0.0,
            ..sparse_config()
        };
        let mut rng = StdRng::seed_from_u64(4);
        assert!(sample_initial_placement(&cfg, &mut rng).is_err());
    }
}
