//! Headless demo driver.
//!
//! Stands in for the external collaborators: seeds a population with
//! the placement sampler, applies a minimal drift-and-reflect motion
//! step, and feeds position/color snapshots to the mixing engine each
//! tick, logging the global entropy as the gas mixes.

use gas_mixing::{sample_initial_placement, MixingEngine, Particle, ParticleColor, SimConfig};
use glam::Vec3;

const TICKS: u32 = 600;
const DT: f32 = 1.0 / 60.0;
const LOG_EVERY: u32 = 60;

fn main() {
    env_logger::init();

    let config = SimConfig::default();
    log::info!(
        "domain {}^3, grid {}^3, {} red + {} blue particles",
        config.domain_size,
        config.grid_n,
        config.num_red,
        config.num_blue
    );

    let mut rng = rand::thread_rng();
    let outcome = match sample_initial_placement(&config, &mut rng) {
        Ok(outcome) => outcome,
        Err(e) => {
            log::error!("placement failed: {}", e);
            std::process::exit(1);
        }
    };
    if outcome.degraded {
        log::warn!("initial placement degraded; overlaps possible");
    }
    log::info!(
        "placed {} particles in {} trials",
        outcome.particles.len(),
        outcome.trials_used
    );

    let mut engine = match MixingEngine::new(&config) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("engine construction failed: {}", e);
            std::process::exit(1);
        }
    };

    let mut particles = outcome.particles;
    let colors: Vec<ParticleColor> = particles.iter().map(|p| p.color).collect();
    let mut positions: Vec<Vec3> = Vec::with_capacity(particles.len());
    let half = config.half_extent();

    for tick in 0..TICKS {
        step_motion(&mut particles, half, DT);

        positions.clear();
        positions.extend(particles.iter().map(|p| p.position));

        match engine.compute_tick(&positions, &colors) {
            Ok(report) => {
                if tick % LOG_EVERY == 0 {
                    log::info!(
                        "tick {:4}: S_total = {:.4}, S_max = {:.4}",
                        tick,
                        report.s_total,
                        report.s_max
                    );
                }
            }
            Err(e) => {
                log::error!("tick {} failed: {}", tick, e);
                std::process::exit(1);
            }
        }
    }

    let report = engine.last_report();
    log::info!("final S_total = {:.4}", report.s_total);
}

/// Trivial stand-in for the physics collaborator: straight-line drift
/// with reflection at the domain walls.
fn step_motion(particles: &mut [Particle], half: f32, dt: f32) {
    for p in particles.iter_mut() {
        p.position += p.velocity * dt;
        for axis in 0..3 {
            if p.position[axis] > half {
                p.position[axis] = half;
                p.velocity[axis] = -p.velocity[axis];
            } else if p.position[axis] < -half {
                p.position[axis] = -half;
                p.velocity[axis] = -p.velocity[axis];
            }
        }
    }
}
