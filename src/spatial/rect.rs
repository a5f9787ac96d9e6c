//! Axis-aligned rectangles and payload-carrying points
//!
//! Rectangles are stored as a center plus *full* width/height; every edge
//! query halves the extent.

use crate::error::{SimError, SimResult, validate_dims};

/// A point carrying an opaque payload back to whatever owns it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T> {
    pub x: f64,
    pub y: f64,
    pub data: T,
}

impl<T> Point<T> {
    pub fn new(x: f64, y: f64, data: T) -> Self {
        Self { x, y, data }
    }
}

/// Axis-aligned rectangle given by its center and full extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Build a rectangle centered at `(x, y)`.
    ///
    /// Width and height must be finite and strictly positive.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> SimResult<Self> {
        if !validate_dims(width, height) {
            return Err(SimError::InvalidRectangleDims { width, height });
        }
        Ok(Self::new_unchecked(x, y, width, height))
    }

    /// Caller guarantees positive extents (quadrants of a valid rectangle,
    /// viewport bounds, neighborhoods around a body of positive size).
    pub(crate) fn new_unchecked(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn left(&self) -> f64 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Inclusive containment on both axes
    pub fn contains_xy(&self, x: f64, y: f64) -> bool {
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }

    pub fn contains<T>(&self, point: &Point<T>) -> bool {
        self.contains_xy(point.x, point.y)
    }

    /// Standard AABB overlap; rectangles that only touch along an edge intersect
    pub fn intersects(&self, other: &Rectangle) -> bool {
        !(other.right() < self.left()
            || other.left() > self.right()
            || other.bottom() < self.top()
            || other.top() > self.bottom())
    }

    /// The four equal quadrants in top-left, top-right, bottom-left, bottom-right order
    pub fn quadrants(&self) -> [Rectangle; 4] {
        let (x, y) = (self.x, self.y);
        let (w, h) = (self.width / 2.0, self.height / 2.0);
        let (dx, dy) = (self.width / 4.0, self.height / 4.0);
        [
            Rectangle::new_unchecked(x - dx, y - dy, w, h),
            Rectangle::new_unchecked(x + dx, y - dy, w, h),
            Rectangle::new_unchecked(x - dx, y + dy, w, h),
            Rectangle::new_unchecked(x + dx, y + dy, w, h),
        ]
    }
}
