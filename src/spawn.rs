//! Deterministic scene layout for a fresh swarm.
//!
//! Particles start on an `n x n` integer lattice in the `z = 0` plane, at
//! rest. Index `i * n + j` holds the particle at `(i, j, 0)`.

use crate::particle::Particle;
use glam::{Vec3, Vec4};

/// Particles for an `n x n` lattice, row-major by `i`.
pub fn grid_lattice(n: u32) -> Vec<Particle> {
    let mut particles = Vec::with_capacity((n as usize) * (n as usize));
    for i in 0..n {
        for j in 0..n {
            particles.push(Particle::at_rest(Vec3::new(i as f32, j as f32, 0.0)));
        }
    }
    particles
}

/// Per-instance RGBA colors matching [`grid_lattice`] ordering.
///
/// Red ramps with `i`, green with `j`; blue and alpha are 1. Hosts use this
/// to fill their color buffer once per scene reset.
pub fn grid_colors(n: u32) -> Vec<Vec4> {
    let scale = if n == 0 { 0.0 } else { 1.0 / n as f32 };
    let mut colors = Vec::with_capacity((n as usize) * (n as usize));
    for i in 0..n {
        for j in 0..n {
            colors.push(Vec4::new(i as f32 * scale, j as f32 * scale, 1.0, 1.0));
        }
    }
    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_layout() {
        let particles = grid_lattice(3);
        assert_eq!(particles.len(), 9);
        assert_eq!(particles[0].position, Vec3::ZERO);
        assert_eq!(particles[1].position, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(particles[3].position, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(particles[8].position, Vec3::new(2.0, 2.0, 0.0));
        assert!(particles.iter().all(|p| p.velocity == Vec3::ZERO && p.acceleration == Vec3::ZERO));
    }

    #[test]
    fn test_empty_lattice() {
        assert!(grid_lattice(0).is_empty());
        assert!(grid_colors(0).is_empty());
    }

    #[test]
    fn test_colors_follow_lattice() {
        let colors = grid_colors(4);
        assert_eq!(colors.len(), 16);
        assert_eq!(colors[0], Vec4::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(colors[2 * 4 + 1], Vec4::new(0.5, 0.25, 1.0, 1.0));
    }
}
