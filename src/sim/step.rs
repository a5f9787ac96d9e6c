//! One simulation tick
//!
//! Order within a tick:
//! 1. snapshot the start-of-tick centers into a fresh quadtree
//! 2. integrate, contain and accelerate every body
//! 3. resolve body-body collisions against the snapshot, in body order
//!
//! Candidates come from the snapshot while the overlap test uses the moved
//! positions. A pair that drifts into range mid-tick is caught on the next one.

use super::body::Body;
use super::collision::{build_tree, resolve_collisions};
use crate::settings::SimConfig;

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Bodies that touched a wall
    pub wall_hits: usize,
    /// Body pairs whose collision was resolved
    pub collisions: usize,
}

/// Advance `bodies` by `delta_ms` milliseconds
pub fn step(bodies: &mut [Body], delta_ms: f64, config: &SimConfig) -> StepReport {
    let mut report = StepReport::default();
    let tree = config.collisions_enabled.then(|| build_tree(&*bodies, config));

    for body in bodies.iter_mut() {
        body.integrate(delta_ms);
        if body.wall_collision(&config.viewport) {
            report.wall_hits += 1;
        }
        if config.gravity_enabled {
            body.apply_gravity(config.gravity);
        }
    }

    if let Some(tree) = tree {
        report.collisions = resolve_collisions(bodies, &tree, &config.viewport);
    }

    log::debug!(
        "Step {:.2}ms: {} bodies, {} wall hits, {} collisions",
        delta_ms,
        bodies.len(),
        report.wall_hits,
        report.collisions
    );
    report
}
