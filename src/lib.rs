//! # swarmfield
//!
//! A 2D grid of point particles driven by a configurable force field.
//!
//! Particles either swarm toward (or away from) a single point picked on
//! screen, or spread across the vertices of a mesh and converge onto them.
//! Windowing, GPU buffers and mesh file parsing belong to the host; this
//! crate owns the force law, the fixed-step integration, target assignment
//! and screen-to-world picking.
//!
//! ## Quick Start
//!
//! ```ignore
//! use swarmfield::prelude::*;
//!
//! let mut sim = SimulationState::new()
//!     .with_grid_size(20)
//!     .with_drag_scale(0.2);
//!
//! let camera = CameraSnapshot::look_at(
//!     Vec3::new(50.0, 50.0, 10.0),
//!     Vec3::new(50.0, 50.0, 0.0),
//!     Vec3::Y,
//!     45.0,
//!     16.0 / 9.0,
//! ).unwrap();
//!
//! // Alt+click somewhere on screen
//! sim.pick(&camera, Vec2::new(0.2, -0.1)).ok();
//!
//! loop {
//!     sim.tick();
//!     upload(sim.positions().as_bytes());
//! }
//! ```
//!
//! ## Force law
//!
//! Each tick a particle's acceleration is recomputed from scratch:
//!
//! ```text
//! dir   = target - position          (attract)   or   position - target   (repel)
//! field = normalize(dir) * 196 / (10 + |dir|²)
//! a     = field - drag * velocity
//! ```
//!
//! followed by one explicit Euler step where the position moves with the
//! velocity from before the step.
//!
//! ## Modes
//!
//! | Mode | Target | Sign |
//! |------|--------|------|
//! | [`ForceFieldMode::PointAttract`] | picked point | toward |
//! | [`ForceFieldMode::PointRepel`] | picked point | away |
//! | [`ForceFieldMode::MeshAttract`] | vertex `i mod len` | toward |
//!
//! ## Features
//!
//! - `parallel`: run the per-particle loop on rayon's thread pool.

pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod kernel;
pub mod mesh;
pub mod mode;
pub mod particle;
pub mod picker;
mod simulation;
pub mod snapshot;
pub mod spawn;
pub mod target;
pub mod time;

pub use camera::CameraSnapshot;
pub use config::SceneConfig;
pub use error::{ConfigError, PickError};
pub use glam::{Vec2, Vec3, Vec4};
pub use input::Input;
pub use kernel::ForceFieldKernel;
pub use mesh::{MeshLibrary, MeshVertexPool};
pub use mode::{ForceFieldMode, MeshId};
pub use particle::{ForceDirection, Particle};
pub use picker::{Picker, Ray};
pub use simulation::SimulationState;
pub use snapshot::PositionSnapshot;
pub use target::TargetAssigner;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use swarmfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::camera::CameraSnapshot;
    pub use crate::config::SceneConfig;
    pub use crate::error::{ConfigError, PickError};
    pub use crate::input::Input;
    pub use crate::mesh::{MeshLibrary, MeshVertexPool};
    pub use crate::mode::{ForceFieldMode, MeshId};
    pub use crate::particle::{ForceDirection, Particle};
    pub use crate::simulation::SimulationState;
    pub use crate::snapshot::PositionSnapshot;
    pub use crate::time::Time;
    pub use crate::{Vec2, Vec3, Vec4};
}
