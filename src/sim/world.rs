//! Session driver: owns the bodies, the RNG and the frame clock
//!
//! A host calls [`World::frame`] with its animation timestamp once per frame
//! and renders [`World::bodies`] afterwards.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::body::Body;
use super::step::{StepReport, step};
use crate::settings::{SimConfig, Viewport};

pub struct World {
    seed: u64,
    rng: Pcg32,
    config: SimConfig,
    bodies: Vec<Body>,
    /// Timestamp of the previous frame; None until the first frame arrives
    last_time: Option<f64>,
    ticks: u64,
    next_id: u32,
}

impl World {
    /// New world with a single body at the start point
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let mut world = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config,
            bodies: Vec::new(),
            last_time: None,
            ticks: 0,
            next_id: 1,
        };
        world.add_body();
        world
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// For toggling gravity/collisions between frames
    pub fn config_mut(&mut self) -> &mut SimConfig {
        &mut self.config
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.config.viewport = viewport;
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Ticks stepped so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance to animation timestamp `time_ms`.
    ///
    /// The first call only records the timestamp and returns None, since there
    /// is no previous frame to measure a delta against.
    pub fn frame(&mut self, time_ms: f64) -> Option<StepReport> {
        let last = self.last_time.replace(time_ms)?;
        let delta = time_ms - last;
        if !delta.is_finite() || delta < 0.0 {
            log::warn!("Ignoring frame with bad delta {} (last {}, now {})", delta, last, time_ms);
            return None;
        }
        Some(self.tick(delta))
    }

    /// Step by an explicit delta, bypassing the frame clock
    pub fn tick(&mut self, delta_ms: f64) -> StepReport {
        self.ticks += 1;
        step(&mut self.bodies, delta_ms, &self.config)
    }

    /// Spawn a body at the start point with a random heading and size
    pub fn add_body(&mut self) -> &Body {
        let id = self.next_id;
        self.next_id += 1;
        let body = Body::spawn(id, &mut self.rng);
        log::info!(
            "Added body {} (size {:.2}, heading {:.2} rad)",
            id,
            body.size(),
            body.heading()
        );
        self.bodies.push(body);
        &self.bodies[self.bodies.len() - 1]
    }

    /// Drop every body but the first and send that one back to the start point
    pub fn reset(&mut self) {
        self.bodies.truncate(1);
        if let Some(first) = self.bodies.first_mut() {
            first.relaunch(&mut self.rng);
        }
        self.next_id = self.bodies.iter().map(|b| b.id + 1).max().unwrap_or(1);
        self.last_time = None;
        log::info!("World reset after {} ticks", self.ticks);
    }

    /// Change every body's speed by `delta`, never below zero.
    ///
    /// Speed is a magnitude here, so repeated slow-downs stop a body instead
    /// of sending it backwards.
    pub fn adjust_speed(&mut self, delta: f64) {
        for body in &mut self.bodies {
            body.set_speed((body.speed() + delta).max(0.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{INITIAL_SPEED, SPEED_STEP};
    use glam::DVec2;

    #[test]
    fn test_new_world_has_one_body() {
        let world = World::new(SimConfig::default(), 1);
        assert_eq!(world.bodies().len(), 1);
        assert_eq!(world.bodies()[0].id, 1);
        assert_eq!(world.bodies()[0].position(), DVec2::new(50.0, 50.0));
    }

    #[test]
    fn test_first_frame_is_skipped() {
        let mut world = World::new(SimConfig::default(), 1);
        let start = world.bodies()[0].position();
        assert!(world.frame(1000.0).is_none());
        assert_eq!(world.bodies()[0].position(), start);
        assert_eq!(world.ticks(), 0);

        assert!(world.frame(1016.0).is_some());
        assert_eq!(world.ticks(), 1);
        let moved = world.bodies()[0].position() - start;
        let expected = world.bodies()[0].direction() * INITIAL_SPEED * 16.0;
        assert!((moved - expected).length() < 1e-9);
    }

    #[test]
    fn test_backwards_frame_is_ignored() {
        let mut world = World::new(SimConfig::default(), 1);
        world.frame(500.0);
        assert!(world.frame(400.0).is_none());
        assert!(world.frame(416.0).is_some());
    }

    #[test]
    fn test_add_and_reset() {
        let mut world = World::new(SimConfig::default(), 9);
        world.add_body();
        world.add_body();
        assert_eq!(world.bodies().len(), 3);
        assert_eq!(world.bodies()[2].id, 3);

        world.frame(0.0);
        world.frame(500.0);
        world.reset();
        assert_eq!(world.bodies().len(), 1);
        assert_eq!(world.bodies()[0].position(), DVec2::new(50.0, 50.0));
        assert_eq!(world.bodies()[0].speed(), INITIAL_SPEED);
        // Clock restarts with the session
        assert!(world.frame(900.0).is_none());

        assert_eq!(world.add_body().id, 2);
    }

    #[test]
    fn test_adjust_speed_clamps_at_zero() {
        let mut world = World::new(SimConfig::default(), 5);
        world.adjust_speed(SPEED_STEP);
        assert!((world.bodies()[0].speed() - 2.0 * INITIAL_SPEED).abs() < 1e-12);
        let direction = world.bodies()[0].direction();
        world.adjust_speed(-SPEED_STEP * 5.0);
        assert_eq!(world.bodies()[0].speed(), 0.0);
        // Stopped, not reversed
        assert_eq!(world.bodies()[0].direction(), direction);
        assert_eq!(world.bodies()[0].velocity(), DVec2::ZERO);
    }

    #[test]
    fn test_same_seed_same_run() {
        let run = |seed| {
            let mut world = World::new(SimConfig::default(), seed);
            for _ in 0..5 {
                world.add_body();
            }
            for frame in 0..120 {
                world.frame(frame as f64 * 16.0);
            }
            world.bodies().to_vec()
        };
        assert_eq!(run(77), run(77));
    }
}
