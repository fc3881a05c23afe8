//! Scene state and the per-frame driver.
//!
//! `SimulationState` owns everything that changes between frames: the
//! particles, the picked target, the active configuration and the clock.
//! The host feeds it config changes and pick events, calls [`tick`] once per
//! frame, and reads back a [`PositionSnapshot`].
//!
//! [`tick`]: SimulationState::tick
//!
//! # Example
//!
//! ```ignore
//! use swarmfield::prelude::*;
//!
//! let mut sim = SimulationState::new()
//!     .with_grid_size(20)
//!     .with_drag_scale(0.2)
//!     .with_mesh_library(MeshLibrary::builtin(Vec3::new(10.0, 10.0, 0.0), 8.0));
//!
//! // On an Alt+click:
//! sim.pick(&camera, ndc).ok();
//!
//! // Every frame:
//! sim.tick();
//! renderer.upload(sim.positions().as_bytes());
//! ```

use crate::camera::CameraSnapshot;
use crate::config::{SceneConfig, MAX_GRID_SIZE};
use crate::error::{ConfigError, PickError};
use crate::kernel::ForceFieldKernel;
use crate::mesh::{MeshLibrary, MeshVertexPool};
use crate::mode::{ForceFieldMode, MeshId};
use crate::particle::Particle;
use crate::picker::Picker;
use crate::snapshot::PositionSnapshot;
use crate::spawn::grid_lattice;
use crate::time::Time;
use glam::{Vec2, Vec3};

/// All mutable scene state.
#[derive(Clone, Debug)]
pub struct SimulationState {
    config: SceneConfig,
    particles: Vec<Particle>,
    shared_target: Option<Vec3>,
    meshes: MeshLibrary,
    time: Time,
}

impl SimulationState {
    /// Create a scene with the default configuration and a fresh grid.
    pub fn new() -> Self {
        Self::build(SceneConfig::default())
    }

    /// Create a scene from a validated configuration.
    pub fn from_config(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SceneConfig) -> Self {
        let time = Time::new(config.timestep);
        let mut state = Self {
            config,
            particles: Vec::new(),
            shared_target: None,
            meshes: MeshLibrary::new(),
            time,
        };
        state.reset();
        state
    }

    /// Set the lattice edge length and rebuild the grid.
    ///
    /// Sizes above [`MAX_GRID_SIZE`] are clamped.
    pub fn with_grid_size(mut self, n: u32) -> Self {
        if n > MAX_GRID_SIZE {
            log::warn!("Grid size {} exceeds {}, clamping", n, MAX_GRID_SIZE);
        }
        self.config.particle_grid_size = n.min(MAX_GRID_SIZE);
        self.reset();
        self
    }

    /// Set the force mode.
    pub fn with_mode(mut self, mode: ForceFieldMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Set the drag coefficient, clamped to `[0, 1]`.
    ///
    /// NaN is ignored and the current drag is kept.
    pub fn with_drag_scale(mut self, drag_scale: f32) -> Self {
        if drag_scale.is_nan() {
            log::warn!("Ignoring NaN drag scale, keeping {}", self.config.drag_scale);
            return self;
        }
        let clamped = drag_scale.clamp(0.0, 1.0);
        if clamped != drag_scale {
            log::warn!("Drag scale {} outside [0, 1], clamping to {}", drag_scale, clamped);
        }
        self.config.drag_scale = clamped;
        self
    }

    /// Set the fixed integration timestep.
    ///
    /// Non-positive or non-finite values are ignored.
    pub fn with_timestep(mut self, dt: f32) -> Self {
        if !dt.is_finite() || dt <= 0.0 {
            log::warn!("Ignoring invalid timestep {}, keeping {}", dt, self.config.timestep);
            return self;
        }
        self.config.timestep = dt;
        self.time.set_fixed_delta(dt);
        self
    }

    /// Set the meshes the swarm can converge onto.
    pub fn with_mesh_library(mut self, meshes: MeshLibrary) -> Self {
        self.meshes = meshes;
        self
    }

    // ========== Scene control ==========

    /// Rebuild the particle grid at rest and forget the picked target.
    pub fn reset(&mut self) {
        self.particles = grid_lattice(self.config.particle_grid_size);
        self.shared_target = None;
        self.time.reset();
        log::info!(
            "Scene reset: {0}x{0} grid, {1} particles",
            self.config.particle_grid_size,
            self.particles.len()
        );
    }

    /// Apply a new configuration polled from the UI.
    ///
    /// Mode, drag, mesh and timestep changes take effect on the next tick.
    /// A different grid size resets the scene.
    pub fn apply_config(&mut self, config: SceneConfig) -> Result<(), ConfigError> {
        config.validate()?;

        let regrid = config.particle_grid_size != self.config.particle_grid_size;
        if config.effective_mode() != self.config.effective_mode() {
            log::debug!("Mode changed to {:?}", config.effective_mode());
        }
        self.time.set_fixed_delta(config.timestep);
        self.config = config;

        if regrid {
            self.reset();
        }
        Ok(())
    }

    /// Switch the force mode. The picked target is kept.
    pub fn set_mode(&mut self, mode: ForceFieldMode) {
        log::debug!("Mode changed to {:?}", mode);
        self.config.mode = mode;
    }

    /// Select a mesh to converge onto, or `None` to go back to the point mode.
    pub fn select_mesh(&mut self, mesh: Option<MeshId>) {
        self.config.selected_mesh = mesh;
        log::debug!("Mode changed to {:?}", self.config.effective_mode());
    }

    /// Replace the vertex pool for `id`.
    pub fn load_mesh(&mut self, id: MeshId, pool: MeshVertexPool) {
        self.meshes.insert(id, pool);
    }

    /// Turn a screen click into the shared target.
    ///
    /// On failure the previous target stays in place.
    pub fn pick(&mut self, camera: &CameraSnapshot, ndc: Vec2) -> Result<Vec3, PickError> {
        match Picker::pick_world_point(camera, ndc) {
            Ok(point) => {
                log::debug!("Picked attractor {} at ndc {}", point, ndc);
                self.shared_target = Some(point);
                Ok(point)
            }
            Err(e) => {
                log::warn!("Pick at ndc {} ignored: {}", ndc, e);
                Err(e)
            }
        }
    }

    /// Set or clear the shared target directly.
    pub fn set_target(&mut self, target: Option<Vec3>) {
        self.shared_target = target;
    }

    // ========== Frame ==========

    /// Run one fixed step of the force field.
    ///
    /// Returns the number of particles that moved. Nothing moves while the
    /// clock is paused or no target is available.
    pub fn tick(&mut self) -> usize {
        let Some(dt) = self.time.advance() else {
            return 0;
        };

        let mode = self.config.effective_mode();
        let pool = mode.mesh().and_then(|id| self.meshes.get(id));

        ForceFieldKernel::tick(
            &mut self.particles,
            mode,
            self.shared_target,
            self.config.drag_scale,
            pool,
            dt,
        )
    }

    /// Copy of the current particle positions.
    pub fn positions(&self) -> PositionSnapshot {
        PositionSnapshot::capture(self.time.frame(), &self.particles)
    }

    // ========== Accessors ==========

    /// Current particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Active configuration.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Mode the next tick runs with.
    pub fn mode(&self) -> ForceFieldMode {
        self.config.effective_mode()
    }

    /// Current picked target, if any.
    pub fn shared_target(&self) -> Option<Vec3> {
        self.shared_target
    }

    /// The simulation clock.
    pub fn time(&self) -> &Time {
        &self.time
    }

    /// Mutable clock access, for pausing.
    pub fn time_mut(&mut self) -> &mut Time {
        &mut self.time
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}
