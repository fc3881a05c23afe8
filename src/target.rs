//! Mapping particles to their attractor targets.

use crate::mesh::MeshVertexPool;
use crate::mode::ForceFieldMode;
use glam::Vec3;

/// Resolves which point each particle is drawn toward.
///
/// Point modes give every particle the shared picked point. Mesh mode hands
/// out vertices round-robin: particle `i` gets vertex `i mod len`, so extra
/// particles wrap back to vertex 0 and cluster on the same vertices.
#[derive(Clone, Copy, Debug, Default)]
pub struct TargetAssigner;

impl TargetAssigner {
    /// Target for `particle_index` under `mode`.
    ///
    /// Returns `None` when no target is available: no pick has happened yet
    /// in a point mode, or the mesh pool is missing or empty in mesh mode.
    #[inline]
    pub fn resolve(
        particle_index: usize,
        mode: ForceFieldMode,
        shared_target: Option<Vec3>,
        vertex_pool: Option<&MeshVertexPool>,
    ) -> Option<Vec3> {
        match mode {
            ForceFieldMode::PointAttract | ForceFieldMode::PointRepel => shared_target,
            ForceFieldMode::MeshAttract(_) => {
                let pool = vertex_pool?;
                if pool.is_empty() {
                    return None;
                }
                pool.get(particle_index % pool.len())
            }
        }
    }
}
