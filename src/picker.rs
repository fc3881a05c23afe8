//! Screen-to-world picking.
//!
//! A click in normalized device coordinates is turned into a world-space
//! ray through a virtual lens in front of the camera, and the ray is
//! intersected with a reference plane through the world origin. The plane's
//! normal is `normalize(camera.position)`, so the plane turns with the camera
//! as it orbits.
//!
//! # Example
//!
//! ```ignore
//! use swarmfield::{CameraSnapshot, Picker};
//! use glam::{Vec2, Vec3};
//!
//! let camera = CameraSnapshot::look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y, 45.0, 1.6)
//!     .expect("valid camera");
//!
//! match Picker::pick_world_point(&camera, Vec2::new(0.25, -0.5)) {
//!     Ok(point) => println!("attractor at {point}"),
//!     Err(e) => eprintln!("pick ignored: {e}"),
//! }
//! ```

use crate::camera::CameraSnapshot;
use crate::error::PickError;
use glam::{Vec2, Vec3};

/// Distance from the eye to the virtual lens the ray is cast through.
pub const LENS_DISTANCE: f32 = 0.1;

/// A ray with an origin and a unit direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Origin of the ray.
    pub origin: Vec3,
    /// Normalized direction.
    pub direction: Vec3,
}

impl Ray {
    /// Point at parameter `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Intersect with the plane through the origin with unit `normal`.
    ///
    /// The intersection parameter is not restricted to `t >= 0`, so a plane
    /// behind the eye still yields a point.
    pub fn intersect_origin_plane(&self, normal: Vec3) -> Result<Vec3, PickError> {
        let denom = normal.dot(self.direction);
        if denom == 0.0 {
            return Err(PickError::DegenerateRay);
        }

        let t = normal.dot(-self.origin) / denom;
        let point = self.at(t);
        if !point.is_finite() {
            return Err(PickError::DegenerateRay);
        }
        Ok(point)
    }
}

/// Converts screen positions into world-space attractor points.
#[derive(Clone, Copy, Debug, Default)]
pub struct Picker;

impl Picker {
    /// World-space ray from the eye through `ndc` on the virtual lens.
    ///
    /// `ndc` is expected in `[-1, 1]` on both axes with y pointing up.
    pub fn pick_ray(camera: &CameraSnapshot, ndc: Vec2) -> Result<Ray, PickError> {
        let tan_half = (camera.fov_y_degrees / 2.0).to_radians().tan();

        let vertical = camera.up * (LENS_DISTANCE * tan_half) * ndc.y;
        let horizontal = camera.right * (LENS_DISTANCE * camera.aspect_ratio * tan_half) * ndc.x;
        let focus = camera.position + camera.forward * LENS_DISTANCE + horizontal + vertical;

        let direction = (focus - camera.position)
            .try_normalize()
            .ok_or(PickError::DegenerateCamera)?;

        Ok(Ray {
            origin: camera.position,
            direction,
        })
    }

    /// Normal of the reference plane for `camera`.
    pub fn reference_plane_normal(camera: &CameraSnapshot) -> Result<Vec3, PickError> {
        camera.position.try_normalize().ok_or(PickError::DegenerateCamera)
    }

    /// World point under `ndc` on the reference plane.
    ///
    /// Fails with [`PickError::DegenerateRay`] when the ray is parallel to
    /// the plane. The caller should keep whatever target it had before.
    pub fn pick_world_point(camera: &CameraSnapshot, ndc: Vec2) -> Result<Vec3, PickError> {
        let ray = Self::pick_ray(camera, ndc)?;
        let normal = Self::reference_plane_normal(camera)?;
        ray.intersect_origin_plane(normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_on_z(distance: f32, fov: f32, aspect: f32) -> CameraSnapshot {
        CameraSnapshot::look_at(Vec3::new(0.0, 0.0, distance), Vec3::ZERO, Vec3::Y, fov, aspect).unwrap()
    }

    #[test]
    fn test_center_ray_follows_forward() {
        let cam = camera_on_z(10.0, 45.0, 1.0);
        let ray = Picker::pick_ray(&cam, Vec2::ZERO).unwrap();

        assert_eq!(ray.origin, cam.position);
        assert!((ray.direction - cam.forward).length() < 1e-6);
    }

    #[test]
    fn test_center_pick_hits_origin() {
        let cam = camera_on_z(10.0, 45.0, 1.0);
        let point = Picker::pick_world_point(&cam, Vec2::ZERO).unwrap();
        assert!(point.length() < 1e-4);
    }

    #[test]
    fn test_edge_pick_with_right_angle_fov() {
        // tan(45°) = 1, so the right edge ray leaves at 45 degrees
        let cam = camera_on_z(10.0, 90.0, 1.0);
        let point = Picker::pick_world_point(&cam, Vec2::new(1.0, 0.0)).unwrap();
        assert!((point - Vec3::new(10.0, 0.0, 0.0)).length() < 1e-3);

        let point = Picker::pick_world_point(&cam, Vec2::new(0.0, -1.0)).unwrap();
        assert!((point - Vec3::new(0.0, -10.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn test_aspect_ratio_stretches_horizontal() {
        let cam = camera_on_z(10.0, 90.0, 2.0);
        let point = Picker::pick_world_point(&cam, Vec2::new(0.5, 0.0)).unwrap();
        assert!((point - Vec3::new(10.0, 0.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn test_plane_normal_follows_camera_position() {
        let cam = CameraSnapshot::look_at(
            Vec3::new(50.0, 50.0, 10.0),
            Vec3::new(50.0, 50.0, 0.0),
            Vec3::Y,
            45.0,
            1.0,
        )
        .unwrap();

        let normal = Picker::reference_plane_normal(&cam).unwrap();
        let point = Picker::pick_world_point(&cam, Vec2::ZERO).unwrap();

        // Straight down the view axis, but the tilted plane sits far below z = 0
        assert!((point.x - 50.0).abs() < 1e-2);
        assert!((point.y - 50.0).abs() < 1e-2);
        assert!((point.z + 500.0).abs() < 1e-1);
        assert!(normal.dot(point).abs() < 1e-1);
    }

    #[test]
    fn test_parallel_ray_is_degenerate() {
        let cam = CameraSnapshot {
            position: Vec3::new(0.0, 0.0, 10.0),
            forward: Vec3::X,
            right: Vec3::NEG_Y,
            up: Vec3::Z,
            fov_y_degrees: 45.0,
            aspect_ratio: 1.0,
        };

        assert_eq!(Picker::pick_world_point(&cam, Vec2::ZERO), Err(PickError::DegenerateRay));
    }

    #[test]
    fn test_camera_at_origin() {
        let cam = CameraSnapshot {
            position: Vec3::ZERO,
            forward: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            fov_y_degrees: 45.0,
            aspect_ratio: 1.0,
        };

        assert_eq!(Picker::pick_world_point(&cam, Vec2::ZERO), Err(PickError::DegenerateCamera));
    }

    #[test]
    fn test_zero_basis_is_degenerate_camera() {
        let cam = CameraSnapshot {
            position: Vec3::new(0.0, 0.0, 5.0),
            forward: Vec3::ZERO,
            right: Vec3::ZERO,
            up: Vec3::ZERO,
            fov_y_degrees: 45.0,
            aspect_ratio: 1.0,
        };

        assert_eq!(Picker::pick_ray(&cam, Vec2::new(0.3, 0.3)), Err(PickError::DegenerateCamera));
    }
}
