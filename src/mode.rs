//! Force field modes and mesh identifiers.

use crate::particle::ForceDirection;
use serde::{Deserialize, Serialize};

/// One of the selectable meshes a swarm can converge onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeshId {
    A,
    B,
    C,
}

impl MeshId {
    /// All mesh identifiers, in selection order.
    pub const ALL: [MeshId; 3] = [MeshId::A, MeshId::B, MeshId::C];
}

/// What the particles are currently drawn toward.
///
/// Point modes share a single picked target; mesh mode spreads particles
/// across the vertices of a mesh and always attracts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForceFieldMode {
    /// Swarm toward the picked point.
    #[default]
    PointAttract,
    /// Flee from the picked point.
    PointRepel,
    /// Converge onto the vertices of a mesh.
    MeshAttract(MeshId),
}

impl ForceFieldMode {
    /// Sign of the field for this mode. Mesh mode never repels.
    #[inline]
    pub fn direction(self) -> ForceDirection {
        match self {
            ForceFieldMode::PointAttract => ForceDirection::Attract,
            ForceFieldMode::PointRepel => ForceDirection::Repel,
            ForceFieldMode::MeshAttract(_) => ForceDirection::Attract,
        }
    }

    /// The mesh this mode targets, if any.
    #[inline]
    pub fn mesh(self) -> Option<MeshId> {
        match self {
            ForceFieldMode::MeshAttract(id) => Some(id),
            _ => None,
        }
    }

    /// Whether targets come from the shared picked point.
    #[inline]
    pub fn is_point_based(self) -> bool {
        self.mesh().is_none()
    }
}
