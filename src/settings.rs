//! Viewport and simulation configuration
//!
//! Passed explicitly into every tick; the simulation keeps no hidden toggles.
//! Serializes to JSON so a host can persist or ship presets.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_VIEWPORT, GRAVITY_STEP};
use crate::error::{SimError, SimResult, validate_dims};
use crate::spatial::{QuadtreeConfig, Rectangle};

/// Size of the playfield in pixels.
///
/// Body positions are percentages of these dimensions and body sizes are in
/// vmin units (percent of the smaller dimension).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ViewportDims", into = "ViewportDims")]
pub struct Viewport {
    width: f64,
    height: f64,
}

#[derive(Serialize, Deserialize)]
struct ViewportDims {
    width: f64,
    height: f64,
}

impl TryFrom<ViewportDims> for Viewport {
    type Error = SimError;

    fn try_from(dims: ViewportDims) -> Result<Self, Self::Error> {
        Viewport::new(dims.width, dims.height)
    }
}

impl From<Viewport> for ViewportDims {
    fn from(viewport: Viewport) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT.0,
            height: DEFAULT_VIEWPORT.1,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> SimResult<Self> {
        if !validate_dims(width, height) {
            return Err(SimError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Percent position -> pixel position
    #[inline]
    pub fn to_pixels(&self, percent: DVec2) -> DVec2 {
        DVec2::new(
            percent.x / 100.0 * self.width,
            percent.y / 100.0 * self.height,
        )
    }

    /// Pixel offset/position -> percent
    #[inline]
    pub fn to_percent(&self, pixels: DVec2) -> DVec2 {
        DVec2::new(
            pixels.x / self.width * 100.0,
            pixels.y / self.height * 100.0,
        )
    }

    /// Rendered diameter in pixels of a body of the given size
    #[inline]
    pub fn diameter_px(&self, size: f64) -> f64 {
        size / 100.0 * self.width.min(self.height)
    }

    /// Whole playfield in pixel space
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new_unchecked(
            self.width / 2.0,
            self.height / 2.0,
            self.width,
            self.height,
        )
    }
}

/// Per-tick simulation switches and tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub viewport: Viewport,
    /// Apply `gravity` to every body each tick
    pub gravity_enabled: bool,
    /// Run the body-body broad and narrow phase
    pub collisions_enabled: bool,
    /// Downward velocity added per tick (percent per millisecond)
    pub gravity: f64,
    pub quadtree: QuadtreeConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            gravity_enabled: false,
            collisions_enabled: true,
            gravity: GRAVITY_STEP,
            quadtree: QuadtreeConfig::default(),
        }
    }
}

impl SimConfig {
    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Parse a config; missing fields fall back to their defaults
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        log::debug!("Loaded simulation config: {:?}", config);
        Ok(config)
    }

    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
