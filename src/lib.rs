//! Ballpit - circular bodies bouncing around a rectangular viewport
//!
//! Core modules:
//! - `spatial`: Rectangle/point primitives and the quadtree used for broad-phase lookups
//! - `sim`: Bodies, collision resolution, the per-tick step and the session driver
//! - `settings`: Viewport and simulation configuration (JSON serializable)
//! - `error`: Construction errors

pub mod error;
pub mod settings;
pub mod sim;
pub mod spatial;

pub use error::{SimError, SimResult};
pub use settings::{SimConfig, Viewport};

use glam::DVec2;

/// Simulation constants
pub mod consts {
    use std::ops::Range;

    /// Initial body speed (percent of the viewport per millisecond)
    pub const INITIAL_SPEED: f64 = 0.025;
    /// Speed change applied by one speed-up / speed-down request
    pub const SPEED_STEP: f64 = 0.025;

    /// Spawn point, in percent of the viewport
    pub const START_POSITION: (f64, f64) = (50.0, 50.0);
    /// Body sizes (diameter in vmin units) are drawn from this range
    pub const SIZE_RANGE: Range<f64> = 2.0..6.0;
    /// Spawn headings are re-rolled until |cos(heading)| falls strictly inside this window,
    /// so new bodies never travel almost purely horizontally or vertically
    pub const HEADING_COS_MIN: f64 = 0.2;
    /// Upper bound of the spawn |cos(heading)| window
    pub const HEADING_COS_MAX: f64 = 0.9;

    /// Downward velocity increment per tick when gravity is enabled
    pub const GRAVITY_STEP: f64 = 0.0004;

    /// Quadtree defaults
    pub const NODE_CAPACITY: usize = 4;
    /// Deepest level a node may subdivide to; keeps stacks of coincident points from recursing forever
    pub const MAX_DEPTH: usize = 10;

    /// Stand-in center distance (pixels) for bodies whose centers coincide exactly
    pub const COINCIDENT_DISTANCE_PX: f64 = 0.1;
    /// Stand-in squared center distance (percent²) for the elastic response of coincident bodies
    pub const MIN_DISTANCE_SQ: f64 = 0.1;

    /// Viewport used when none is configured
    pub const DEFAULT_VIEWPORT: (f64, f64) = (1280.0, 720.0);
}

/// Unit vector for a heading in radians
#[inline]
pub fn heading_to_direction(heading: f64) -> DVec2 {
    DVec2::new(heading.cos(), heading.sin())
}

/// Heading in radians of a direction vector, in [-π, π]
#[inline]
pub fn direction_to_heading(direction: DVec2) -> f64 {
    direction.y.atan2(direction.x)
}
