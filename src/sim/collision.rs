//! Body-body collision detection and response
//!
//! Broad phase: a quadtree over body centers (pixel space), queried with a
//! square neighborhood twice the body's diameter on each side.
//! Narrow phase: circle overlap, positional separation, then an elastic
//! velocity exchange using size as mass.

use fxhash::FxHashSet;
use glam::DVec2;

use super::body::Body;
use crate::consts::{COINCIDENT_DISTANCE_PX, MIN_DISTANCE_SQ};
use crate::settings::{SimConfig, Viewport};
use crate::spatial::{Point, Quadtree, Rectangle};

/// True if the circles overlap (touching does not count)
pub fn is_collision(a: &Body, b: &Body, viewport: &Viewport) -> bool {
    let distance = a.center_px(viewport).distance(b.center_px(viewport));
    distance < a.radius_px(viewport) + b.radius_px(viewport)
}

/// Push two overlapping bodies apart, half the overlap each, along the line
/// between their centers.
///
/// Returns true if anything moved. Bodies whose centers coincide exactly have
/// no separating direction and are left in place.
pub fn resolve_overlap(a: &mut Body, b: &mut Body, viewport: &Viewport) -> bool {
    let delta = b.center_px(viewport) - a.center_px(viewport);
    let mut distance = delta.length();
    if distance == 0.0 {
        distance = COINCIDENT_DISTANCE_PX;
    }

    let overlap = a.radius_px(viewport) + b.radius_px(viewport) - distance;
    if overlap <= 0.0 {
        return false;
    }

    let push = delta / distance * (overlap / 2.0);
    let offset = viewport.to_percent(push);
    a.set_position(a.position() - offset);
    b.set_position(b.position() + offset);
    true
}

/// Elastic response between two touching bodies.
///
/// Equal sizes swap speed and direction outright. Otherwise the standard 2D
/// elastic formula runs with the difference of the stored (percent)
/// positions as the contact normal, the same space the velocities live in.
/// Conserves Σ ½·size·speed² and Σ size·velocity.
pub fn elastic_collision(a: &mut Body, b: &mut Body) {
    if a.size() == b.size() {
        a.swap_motion(b);
        return;
    }

    let (m1, m2) = (a.size(), b.size());
    let (v1, v2) = (a.velocity(), b.velocity());
    let normal = a.position() - b.position();
    let mut distance_sq = normal.length_squared();
    if distance_sq == 0.0 {
        distance_sq = MIN_DISTANCE_SQ;
    }

    let total = m1 + m2;
    let v1_new = v1 - (2.0 * m2 / total) * ((v1 - v2).dot(normal) / distance_sq) * normal;
    let v2_new = v2 - (2.0 * m1 / total) * ((v2 - v1).dot(-normal) / distance_sq) * -normal;

    a.set_velocity(v1_new);
    b.set_velocity(v2_new);
}

/// Index every body center that lies on the playfield
pub fn build_tree(bodies: &[Body], config: &SimConfig) -> Quadtree<usize> {
    let viewport = &config.viewport;
    let mut tree = Quadtree::with_config(viewport.bounds(), &config.quadtree);
    for (index, body) in bodies.iter().enumerate() {
        let center = body.center_px(viewport);
        if !tree.insert(Point::new(center.x, center.y, index)) {
            log::trace!("Body {} at {:?} is off the playfield, not indexed", body.id, center);
        }
    }
    tree
}

/// Square query window centered on the body, twice its diameter wide
fn neighborhood(body: &Body, viewport: &Viewport) -> Rectangle {
    let center = body.center_px(viewport);
    let extent = 2.0 * viewport.diameter_px(body.size());
    Rectangle::new_unchecked(center.x, center.y, extent, extent)
}

/// Two distinct elements of `bodies` as (bodies[i], bodies[j])
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

/// Resolve every colliding pair reachable through `tree`.
///
/// Bodies are visited in slice order and mutated in place, so a pair handled
/// early can change what later bodies see. Each unordered pair is resolved at
/// most once per call; returns the number of pairs resolved.
pub fn resolve_collisions(bodies: &mut [Body], tree: &Quadtree<usize>, viewport: &Viewport) -> usize {
    let mut resolved: FxHashSet<(usize, usize)> = FxHashSet::default();
    let mut found: Vec<&Point<usize>> = Vec::new();

    for i in 0..bodies.len() {
        let range = neighborhood(&bodies[i], viewport);
        found.clear();
        tree.query(&range, &mut found);

        for point in &found {
            let j = point.data;
            if j == i || j >= bodies.len() {
                continue;
            }

            let (a, b) = pair_mut(bodies, i, j);
            if !is_collision(a, b, viewport) {
                continue;
            }
            if !resolved.insert((i.min(j), i.max(j))) {
                continue;
            }

            resolve_overlap(a, b, viewport);
            elastic_collision(a, b);
            log::trace!("Resolved collision between bodies {} and {}", a.id, b.id);
        }
    }

    resolved.len()
}

/// Kinetic energy with size standing in for mass
pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies
        .iter()
        .map(|b| 0.5 * b.size() * b.speed() * b.speed())
        .sum()
}

/// Total momentum with size standing in for mass
pub fn momentum(bodies: &[Body]) -> DVec2 {
    bodies.iter().map(|b| b.velocity() * b.size()).sum()
}
