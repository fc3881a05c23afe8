//! Scene configuration.
//!
//! These are the knobs a host UI exposes: grid size, force mode, drag and
//! which mesh (if any) the swarm converges onto. The config serializes to
//! JSON so scenes can be saved and reloaded.

use crate::error::ConfigError;
use crate::kernel::DEFAULT_TIMESTEP;
use crate::mode::{ForceFieldMode, MeshId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest accepted grid edge length.
pub const MAX_GRID_SIZE: u32 = 1024;

/// Complete scene configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Edge length `n` of the `n x n` particle lattice.
    pub particle_grid_size: u32,
    /// Force mode used while no mesh is selected.
    pub mode: ForceFieldMode,
    /// Linear drag coefficient, within `[0, 1]`.
    pub drag_scale: f32,
    /// Mesh the swarm converges onto. Overrides `mode` when set.
    pub selected_mesh: Option<MeshId>,
    /// Fixed integration timestep.
    pub timestep: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_grid_size: 20,
            mode: ForceFieldMode::PointAttract,
            drag_scale: 0.2,
            selected_mesh: None,
            timestep: DEFAULT_TIMESTEP,
        }
    }
}

impl SceneConfig {
    /// Mode the kernel should run: mesh attraction when a mesh is selected,
    /// otherwise the configured mode.
    pub fn effective_mode(&self) -> ForceFieldMode {
        match self.selected_mesh {
            Some(id) => ForceFieldMode::MeshAttract(id),
            None => self.mode,
        }
    }

    /// Total particle count, `n * n`.
    pub fn particle_count(&self) -> usize {
        (self.particle_grid_size as usize) * (self.particle_grid_size as usize)
    }

    /// Check every field is within range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::InvalidGridSize(self.particle_grid_size));
        }
        if !(0.0..=1.0).contains(&self.drag_scale) {
            return Err(ConfigError::InvalidDragScale(self.drag_scale));
        }
        if !self.timestep.is_finite() || self.timestep <= 0.0 {
            return Err(ConfigError::InvalidTimestep(self.timestep));
        }
        Ok(())
    }

    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
