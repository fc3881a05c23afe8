//! The per-frame force field update.
//!
//! For every particle: resolve its target, recompute its acceleration,
//! integrate one fixed step. Particles are independent of each other, so with
//! the `parallel` feature the loop runs on rayon's thread pool with only the
//! read-only mode, target and vertex pool shared between threads.

use crate::mesh::MeshVertexPool;
use crate::mode::ForceFieldMode;
use crate::particle::Particle;
use crate::target::TargetAssigner;
use glam::Vec3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Reference fixed timestep.
pub const DEFAULT_TIMESTEP: f32 = 0.1;

/// Drives one fixed-timestep update over all particles.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForceFieldKernel;

impl ForceFieldKernel {
    /// Advance every particle that has a target by one step of `dt`.
    ///
    /// Particles without a target (point mode before any pick, or a missing
    /// mesh) are skipped entirely: neither acceleration, velocity nor
    /// position changes this frame.
    ///
    /// Returns the number of particles that were advanced.
    pub fn tick(
        particles: &mut [Particle],
        mode: ForceFieldMode,
        shared_target: Option<Vec3>,
        drag_scale: f32,
        vertex_pool: Option<&MeshVertexPool>,
        dt: f32,
    ) -> usize {
        let step = |(i, particle): (usize, &mut Particle)| -> bool {
            let Some(target) = TargetAssigner::resolve(i, mode, shared_target, vertex_pool) else {
                return false;
            };
            particle.update_acceleration(Some(target), mode.direction(), drag_scale);
            particle.update_position(dt);
            true
        };

        #[cfg(feature = "parallel")]
        let advanced = particles.par_iter_mut().enumerate().map(step).filter(|moved| *moved).count();

        #[cfg(not(feature = "parallel"))]
        let advanced = particles.iter_mut().enumerate().map(step).filter(|moved| *moved).count();

        log::trace!("Kernel advanced {}/{} particles ({:?})", advanced, particles.len(), mode);
        advanced
    }
}
