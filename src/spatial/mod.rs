//! Broad-phase spatial indexing
//!
//! Geometry is in viewport pixels. The quadtree is a throwaway structure:
//! build it, query it, drop it.

pub mod quadtree;
pub mod rect;

pub use quadtree::{Quadtree, QuadtreeConfig};
pub use rect::{Point, Rectangle};
