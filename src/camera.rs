//! Read-only camera snapshot consumed by picking.

use glam::Vec3;

/// The parts of a camera picking needs: position, an orthonormal basis and
/// the projection shape.
///
/// The host owns and updates the real camera; the core only ever reads a
/// snapshot of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSnapshot {
    /// Eye position in world space.
    pub position: Vec3,
    /// Unit view direction.
    pub forward: Vec3,
    /// Unit vector to the right of the view.
    pub right: Vec3,
    /// Unit vector up in view space.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Viewport width divided by height.
    pub aspect_ratio: f32,
}

impl CameraSnapshot {
    /// Build a snapshot looking from `eye` at `target`.
    ///
    /// Returns `None` if `eye == target` or the view direction is parallel
    /// to `world_up`.
    pub fn look_at(eye: Vec3, target: Vec3, world_up: Vec3, fov_y_degrees: f32, aspect_ratio: f32) -> Option<Self> {
        let forward = (target - eye).try_normalize()?;
        let right = forward.cross(world_up).try_normalize()?;
        let up = right.cross(forward);

        Some(Self {
            position: eye,
            forward,
            right,
            up,
            fov_y_degrees,
            aspect_ratio,
        })
    }

    /// Snapshot of an orbit camera circling `target`.
    ///
    /// `yaw` and `pitch` are in radians; `distance` is the orbit radius.
    pub fn orbit(target: Vec3, yaw: f32, pitch: f32, distance: f32, fov_y_degrees: f32, aspect_ratio: f32) -> Option<Self> {
        let x = distance * pitch.cos() * yaw.sin();
        let y = distance * pitch.sin();
        let z = distance * pitch.cos() * yaw.cos();
        Self::look_at(target + Vec3::new(x, y, z), target, Vec3::Y, fov_y_degrees, aspect_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_orthonormal(cam: &CameraSnapshot) {
        assert!((cam.forward.length() - 1.0).abs() < 1e-5);
        assert!((cam.right.length() - 1.0).abs() < 1e-5);
        assert!((cam.up.length() - 1.0).abs() < 1e-5);
        assert!(cam.forward.dot(cam.right).abs() < 1e-5);
        assert!(cam.forward.dot(cam.up).abs() < 1e-5);
        assert!(cam.right.dot(cam.up).abs() < 1e-5);
    }

    #[test]
    fn test_look_at_basis() {
        let cam = CameraSnapshot::look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y, 45.0, 1.5).unwrap();

        assert_orthonormal(&cam);
        assert!((cam.forward - Vec3::NEG_Z).length() < 1e-6);
        assert!((cam.right - Vec3::X).length() < 1e-6);
        assert!((cam.up - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_look_at_degenerate() {
        assert!(CameraSnapshot::look_at(Vec3::ONE, Vec3::ONE, Vec3::Y, 45.0, 1.0).is_none());
        assert!(CameraSnapshot::look_at(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, Vec3::Y, 45.0, 1.0).is_none());
    }

    #[test]
    fn test_orbit_distance() {
        let target = Vec3::new(1.0, 2.0, 3.0);
        let cam = CameraSnapshot::orbit(target, 0.7, 0.3, 12.0, 60.0, 1.0).unwrap();

        assert_orthonormal(&cam);
        assert!((cam.position.distance(target) - 12.0).abs() < 1e-4);
        assert!((cam.forward - (target - cam.position).normalize()).length() < 1e-5);
    }
}
