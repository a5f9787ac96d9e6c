use std::fmt;

/// Errors raised while constructing simulation objects.
///
/// Nothing in the per-tick path returns these; degenerate geometry during a
/// tick is absorbed by the substitution constants in [`crate::consts`].
#[derive(Debug)]
pub enum SimError {
    InvalidRectangleDims { width: f64, height: f64 },
    InvalidViewport { width: f64, height: f64 },
    ZeroCapacity,
    Config(serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidRectangleDims { width, height } => {
                write!(
                    f,
                    "rectangle width/height must be finite and positive (width: {}, height: {})",
                    width, height
                )
            }
            SimError::InvalidViewport { width, height } => {
                write!(
                    f,
                    "viewport width/height must be finite and positive (width: {}, height: {})",
                    width, height
                )
            }
            SimError::ZeroCapacity => write!(f, "quadtree node capacity must be at least 1"),
            SimError::Config(err) => write!(f, "invalid simulation config: {}", err),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Config(err)
    }
}

pub(crate) fn validate_dims(width: f64, height: f64) -> bool {
    width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}
