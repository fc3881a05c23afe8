//! Mesh vertex pools used as attractor targets.
//!
//! A pool is an ordered, immutable list of world-space vertex positions.
//! Loading and transforming real mesh files is the host's job; this module
//! only stores the result and ships a few primitive shapes.
//!
//! # Example
//!
//! ```ignore
//! use swarmfield::{MeshLibrary, MeshVertexPool, MeshId};
//! use glam::{Mat4, Vec3};
//!
//! let placement = Mat4::from_translation(Vec3::new(10.0, 10.0, 0.0))
//!     * Mat4::from_scale(Vec3::splat(8.0));
//!
//! let mut meshes = MeshLibrary::new();
//! meshes.insert(MeshId::A, MeshVertexPool::cube().transformed(&placement));
//! ```

use crate::mode::MeshId;
use glam::{Mat4, Vec3};
use std::collections::HashMap;
use std::sync::Arc;

/// Ordered, immutable sequence of world-space mesh vertices.
///
/// Cloning is cheap; the vertex storage is shared. A scene swaps the whole
/// pool when the user selects another mesh and never edits it in place.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshVertexPool {
    vertices: Arc<[Vec3]>,
}

impl MeshVertexPool {
    /// Create a pool from already world-transformed vertices.
    pub fn from_vertices(vertices: Vec<Vec3>) -> Self {
        Self {
            vertices: vertices.into(),
        }
    }

    /// Number of vertices in the pool.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the pool has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex at `index`, if in range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Vec3> {
        self.vertices.get(index).copied()
    }

    /// All vertices in order.
    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// A new pool with every vertex transformed by `matrix`.
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        Self::from_vertices(self.vertices.iter().map(|v| matrix.transform_point3(*v)).collect())
    }

    // ========== Primitive shapes ==========

    /// Unit cube centered at the origin (8 vertices).
    pub fn cube() -> Self {
        let s = 0.5;
        Self::from_vertices(vec![
            Vec3::new(-s, -s, -s),
            Vec3::new(-s, -s, s),
            Vec3::new(-s, s, -s),
            Vec3::new(-s, s, s),
            Vec3::new(s, -s, -s),
            Vec3::new(s, -s, s),
            Vec3::new(s, s, -s),
            Vec3::new(s, s, s),
        ])
    }

    /// Regular tetrahedron inscribed in the unit cube (4 vertices).
    pub fn tetrahedron() -> Self {
        let s = 0.5;
        Self::from_vertices(vec![
            Vec3::new(s, s, s),
            Vec3::new(s, -s, -s),
            Vec3::new(-s, s, -s),
            Vec3::new(-s, -s, s),
        ])
    }

    /// Octahedron with vertices on the axes (6 vertices).
    pub fn octahedron() -> Self {
        let s = 0.5;
        Self::from_vertices(vec![
            Vec3::new(s, 0.0, 0.0),
            Vec3::new(-s, 0.0, 0.0),
            Vec3::new(0.0, s, 0.0),
            Vec3::new(0.0, -s, 0.0),
            Vec3::new(0.0, 0.0, s),
            Vec3::new(0.0, 0.0, -s),
        ])
    }
}

/// The set of meshes a scene can switch between.
#[derive(Clone, Debug, Default)]
pub struct MeshLibrary {
    pools: HashMap<MeshId, MeshVertexPool>,
}

impl MeshLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in shapes scaled by `scale` and centered on `center`:
    /// A is a tetrahedron, B a cube, C an octahedron.
    pub fn builtin(center: Vec3, scale: f32) -> Self {
        let placement = Mat4::from_translation(center) * Mat4::from_scale(Vec3::splat(scale));

        let mut library = Self::new();
        library.insert(MeshId::A, MeshVertexPool::tetrahedron().transformed(&placement));
        library.insert(MeshId::B, MeshVertexPool::cube().transformed(&placement));
        library.insert(MeshId::C, MeshVertexPool::octahedron().transformed(&placement));
        library
    }

    /// Register or replace the pool for `id`, returning the old one.
    pub fn insert(&mut self, id: MeshId, pool: MeshVertexPool) -> Option<MeshVertexPool> {
        log::info!("Mesh {:?} loaded with {} vertices", id, pool.len());
        self.pools.insert(id, pool)
    }

    /// Pool registered for `id`.
    pub fn get(&self, id: MeshId) -> Option<&MeshVertexPool> {
        self.pools.get(&id)
    }
}
