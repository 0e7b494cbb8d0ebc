//! Rays, bounding boxes and intersection tests.

use glam::{Mat4, Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Directions shorter than this are treated as parallel to an axis.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box centred on `center` extending `half_extents` along each axis.
    #[must_use]
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Check if a point lies inside or on the box.
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// A half-line in world space with a unit direction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing `direction`.
    ///
    /// Returns `None` for a zero or non-finite direction.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    /// Unproject a cursor position into a world-space ray from the camera.
    ///
    /// `cursor` is in pixels with the origin at the top-left of a viewport
    /// of size `viewport`. `view` and `projection` are the camera matrices
    /// used to draw the board.
    #[must_use]
    pub fn from_screen(cursor: Vec2, viewport: Vec2, view: Mat4, projection: Mat4) -> Option<Self> {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return None;
        }

        let ndc = Vec2::new(
            2.0 * cursor.x / viewport.x - 1.0,
            1.0 - 2.0 * cursor.y / viewport.y,
        );

        let eye = projection.inverse() * Vec4::new(ndc.x, ndc.y, -1.0, 1.0);
        let eye = Vec4::new(eye.x, eye.y, -1.0, 0.0);

        let world_from_view = view.inverse();
        let direction = (world_from_view * eye).truncate();
        let origin = world_from_view.w_axis.truncate();

        Self::new(origin, direction)
    }

    /// Point at distance `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Nearest positive hit distance against a sphere.
    #[must_use]
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        [-b - root, -b + root].into_iter().find(|&t| t > 0.0)
    }

    /// Nearest positive hit distance against a box (slab test).
    ///
    /// A ray starting inside the box reports the exit distance.
    #[must_use]
    pub fn intersect_aabb(&self, aabb: &Aabb) -> Option<f32> {
        let mut t_min = 0.0_f32;
        let mut t_max = f32::MAX;

        for axis in 0..3 {
            let origin = self.origin[axis];
            let direction = self.direction[axis];
            let (lo, hi) = (aabb.min[axis], aabb.max[axis]);

            if direction.abs() < PARALLEL_EPSILON {
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }

            let (mut t1, mut t2) = ((lo - origin) / direction, (hi - origin) / direction);
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }
            t_min = t_min.max(t1);
            t_max = t_max.min(t2);
            if t_min > t_max {
                return None;
            }
        }

        let t = if t_min > 0.0 { t_min } else { t_max };
        (t > 0.0).then_some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down_from(x: f32, z: f32) -> Ray {
        Ray::new(Vec3::new(x, 10.0, z), Vec3::NEG_Y).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_direction() {
        assert!(Ray::new(Vec3::ZERO, Vec3::ZERO).is_none());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0)).unwrap();
        assert_eq!(ray.direction, Vec3::Z);
    }

    #[test]
    fn test_sphere_hit_and_miss() {
        let ray = down_from(0.0, 0.0);

        let t = ray.intersect_sphere(Vec3::ZERO, 1.0).unwrap();
        assert!((t - 9.0).abs() < 1e-5);
        assert!(ray.intersect_sphere(Vec3::new(3.0, 0.0, 0.0), 1.0).is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::Y).unwrap();
        assert!(ray.intersect_sphere(Vec3::ZERO, 1.0).is_none());
    }

    #[test]
    fn test_aabb_hit() {
        let aabb = Aabb::from_center(Vec3::ZERO, Vec3::splat(0.5));
        let ray = down_from(0.2, -0.2);

        let t = ray.intersect_aabb(&aabb).unwrap();
        assert!((t - 9.5).abs() < 1e-5);
        assert!(aabb.contains(ray.at(t)));
    }

    #[test]
    fn test_aabb_parallel_miss() {
        let aabb = Aabb::from_center(Vec3::ZERO, Vec3::splat(0.5));
        assert!(down_from(2.0, 0.0).intersect_aabb(&aabb).is_none());
    }

    #[test]
    fn test_aabb_from_inside_reports_exit() {
        let aabb = Aabb::from_center(Vec3::ZERO, Vec3::splat(1.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::X).unwrap();

        let t = ray.intersect_aabb(&aabb).unwrap();
        assert!((t - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_from_screen_centre_looks_at_target() {
        let eye = Vec3::new(0.0, 8.0, 6.0);
        let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
        let projection = Mat4::perspective_rh_gl(45f32.to_radians(), 16.0 / 9.0, 0.1, 100.0);
        let viewport = Vec2::new(1600.0, 900.0);

        let ray = Ray::from_screen(viewport / 2.0, viewport, view, projection).unwrap();

        assert!(ray.origin.abs_diff_eq(eye, 1e-4));
        assert!(ray.direction.abs_diff_eq((-eye).normalize(), 1e-4));
    }

    #[test]
    fn test_from_screen_rejects_empty_viewport() {
        let ray = Ray::from_screen(Vec2::ZERO, Vec2::ZERO, Mat4::IDENTITY, Mat4::IDENTITY);
        assert!(ray.is_none());
    }
}
