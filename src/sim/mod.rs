//! Deterministic simulation module
//!
//! All motion and collision logic lives here:
//! - Caller-supplied frame delta, no internal timers
//! - Seeded RNG only
//! - Bodies processed in slice order every tick
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod step;
pub mod world;

pub use body::Body;
pub use collision::{
    build_tree, elastic_collision, is_collision, kinetic_energy, momentum, resolve_collisions,
    resolve_overlap,
};
pub use step::{StepReport, step};
pub use world::World;
