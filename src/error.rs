//! Error types for swarmfield.
//!
//! Every failure in the core is local and recoverable. Picking can fail
//! (the caller keeps its previous attractor), and scene configuration can be
//! rejected before it reaches the simulation. Missing targets and particles
//! sitting exactly on their target are not errors; they are handled as
//! ordinary `Option` branches inside the kernel.

use std::fmt;

/// Errors that can occur while converting a screen point into a world point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickError {
    /// The picking ray is parallel to the reference plane, or the
    /// intersection is not a finite point.
    DegenerateRay,
    /// The camera sits at the world origin or has a zero-length basis,
    /// so neither the ray nor the reference plane is defined.
    DegenerateCamera,
}

impl fmt::Display for PickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickError::DegenerateRay => write!(f, "Picking ray does not intersect the reference plane"),
            PickError::DegenerateCamera => write!(f, "Camera position or basis is degenerate; cannot build a picking ray"),
        }
    }
}

impl std::error::Error for PickError {}

/// Errors that can occur when loading or validating a scene configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read or write a config file.
    Io(std::io::Error),
    /// Failed to parse or serialize JSON.
    Json(serde_json::Error),
    /// Drag scale outside `[0, 1]` or not a number.
    InvalidDragScale(f32),
    /// Timestep must be finite and strictly positive.
    InvalidTimestep(f32),
    /// Grid edge length exceeds [`MAX_GRID_SIZE`](crate::config::MAX_GRID_SIZE).
    InvalidGridSize(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to access scene config file: {}", e),
            ConfigError::Json(e) => write!(f, "Failed to parse scene config: {}", e),
            ConfigError::InvalidDragScale(d) => write!(f, "Drag scale must be within [0, 1], got {}", d),
            ConfigError::InvalidTimestep(dt) => write!(f, "Timestep must be finite and positive, got {}", dt),
            ConfigError::InvalidGridSize(n) => write!(
                f,
                "Grid size {} exceeds the maximum of {}",
                n,
                crate::config::MAX_GRID_SIZE
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}
