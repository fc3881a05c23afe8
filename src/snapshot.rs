//! Per-tick position output for renderers.
//!
//! The snapshot is an owned copy: a renderer can keep it, upload it or drop
//! it without aliasing live particle state.

use crate::particle::Particle;
use glam::Vec3;

/// Positions of all particles after a tick, in particle index order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionSnapshot {
    frame: u64,
    positions: Vec<Vec3>,
}

impl PositionSnapshot {
    /// Copy the positions out of `particles`.
    pub fn capture(frame: u64, particles: &[Particle]) -> Self {
        Self {
            frame,
            positions: particles.iter().map(|p| p.position).collect(),
        }
    }

    /// Frame number this snapshot was taken on.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Number of positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether there are no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions as vectors.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Positions as tightly packed `x, y, z` floats, ready for an instance
    /// offset buffer.
    #[inline]
    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Raw bytes of the packed positions.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Take ownership of the position list.
    pub fn into_positions(self) -> Vec<Vec3> {
        self.positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_copies_positions() {
        let mut particles = vec![
            Particle::at_rest(Vec3::new(1.0, 2.0, 3.0)),
            Particle::at_rest(Vec3::new(4.0, 5.0, 6.0)),
        ];
        let snapshot = PositionSnapshot::capture(7, &particles);

        particles[0].position = Vec3::splat(100.0);

        assert_eq!(snapshot.frame(), 7);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.positions()[0], Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_flat_layout() {
        let particles = vec![
            Particle::at_rest(Vec3::new(1.0, 2.0, 3.0)),
            Particle::at_rest(Vec3::new(4.0, 5.0, 6.0)),
        ];
        let snapshot = PositionSnapshot::capture(0, &particles);

        assert_eq!(snapshot.as_flat(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(snapshot.as_bytes().len(), 6 * std::mem::size_of::<f32>());
    }
}
