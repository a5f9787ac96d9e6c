//! Point quadtree rebuilt from scratch every tick
//!
//! Insertion broadcasts: once a node is full and subdivided, every further
//! point is offered to all four children and each child keeps it if its own
//! boundary contains it. A point lying exactly on a shared child edge is
//! therefore stored (and later returned by queries) more than once.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use super::rect::{Point, Rectangle};
use crate::consts::{MAX_DEPTH, NODE_CAPACITY};
use crate::error::{SimError, SimResult};

/// Shape parameters for a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadtreeConfig {
    /// Points a node holds before it subdivides
    pub capacity: NonZeroUsize,
    /// Nodes at this level keep appending instead of subdividing
    pub max_depth: usize,
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self {
            capacity: NonZeroUsize::new(NODE_CAPACITY).unwrap_or(NonZeroUsize::MIN),
            max_depth: MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Quadtree<T> {
    boundary: Rectangle,
    capacity: usize,
    max_depth: usize,
    depth: usize,
    points: Vec<Point<T>>,
    /// top-left, top-right, bottom-left, bottom-right
    children: Option<Box<[Quadtree<T>; 4]>>,
}

impl<T: Clone> Quadtree<T> {
    /// Empty leaf covering `boundary`; fails if `capacity` is zero.
    pub fn new(boundary: Rectangle, capacity: usize) -> SimResult<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or(SimError::ZeroCapacity)?;
        Ok(Self::with_config(
            boundary,
            &QuadtreeConfig {
                capacity,
                max_depth: MAX_DEPTH,
            },
        ))
    }

    pub fn with_config(boundary: Rectangle, config: &QuadtreeConfig) -> Self {
        Self::node(boundary, config.capacity.get(), config.max_depth, 0)
    }

    fn node(boundary: Rectangle, capacity: usize, max_depth: usize, depth: usize) -> Self {
        Self {
            boundary,
            capacity,
            max_depth,
            depth,
            points: Vec::with_capacity(capacity),
            children: None,
        }
    }

    pub fn boundary(&self) -> &Rectangle {
        &self.boundary
    }

    pub fn is_divided(&self) -> bool {
        self.children.is_some()
    }

    fn subdivide(&self) -> Box<[Quadtree<T>; 4]> {
        let (capacity, max_depth, depth) = (self.capacity, self.max_depth, self.depth + 1);
        Box::new(
            self.boundary
                .quadrants()
                .map(|quadrant| Self::node(quadrant, capacity, max_depth, depth)),
        )
    }

    /// Store `point` if this node's boundary contains it.
    ///
    /// Returns false (and leaves the tree untouched) for points outside the boundary.
    pub fn insert(&mut self, point: Point<T>) -> bool {
        if !self.boundary.contains(&point) {
            return false;
        }

        if self.points.len() < self.capacity || self.depth >= self.max_depth {
            self.points.push(point);
            return true;
        }

        if self.children.is_none() {
            self.children = Some(self.subdivide());
        }

        let mut stored = false;
        if let Some(children) = self.children.as_mut() {
            for child in children.iter_mut() {
                stored |= child.insert(point.clone());
            }
        }
        stored
    }

    /// Append every stored point inside `range` to `found`.
    ///
    /// Subtrees whose boundary misses `range` are skipped. Points come out in
    /// insertion order per node, nodes in pre-order (TL, TR, BL, BR).
    /// `found` is never cleared.
    pub fn query<'a>(&'a self, range: &Rectangle, found: &mut Vec<&'a Point<T>>) {
        if !self.boundary.intersects(range) {
            return;
        }

        found.extend(self.points.iter().filter(|p| range.contains(*p)));

        if let Some(children) = self.children.as_ref() {
            for child in children.iter() {
                child.query(range, found);
            }
        }
    }

    /// Stored point copies, counting broadcast duplicates
    pub fn len(&self) -> usize {
        let below = self
            .children
            .as_ref()
            .map_or(0, |children| children.iter().map(|c| c.len()).sum());
        self.points.len() + below
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Level of the deepest node (a lone root is 0)
    pub fn depth(&self) -> usize {
        self.children.as_ref().map_or(self.depth, |children| {
            children
                .iter()
                .map(|c| c.depth())
                .max()
                .unwrap_or(self.depth)
        })
    }

    /// Boundaries of every node in pre-order, for debug overlays
    pub fn node_bounds(&self, out: &mut Vec<Rectangle>) {
        out.push(self.boundary);
        if let Some(children) = self.children.as_ref() {
            for child in children.iter() {
                child.node_bounds(out);
            }
        }
    }
}
