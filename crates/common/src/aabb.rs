use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centered on `center` with full edge lengths `size`.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        Self::from_center_half_extents(center, size * 0.5)
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// World-space bounds of a local box rotated by `yaw` radians about +Y.
    ///
    /// The result encloses the rotated box, so it grows for any yaw that is
    /// not a multiple of a quarter turn.
    pub fn rotated_y(center: Vec3, half_extents: Vec3, yaw: f32) -> Self {
        let (sin, cos) = yaw.sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());
        let half = Vec3::new(
            cos * half_extents.x + sin * half_extents.z,
            half_extents.y,
            sin * half_extents.x + cos * half_extents.z,
        );
        Self::from_center_half_extents(center, half)
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Inclusive overlap test: shared faces or edges count as intersecting.
    pub fn intersects(&self, other: &Aabb) -> bool {
        !(other.max.x < self.min.x
            || other.min.x > self.max.x
            || other.max.y < self.min.y
            || other.min.y > self.max.y
            || other.max.z < self.min.z
            || other.min.z > self.max.z)
    }

    pub fn contains_point(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Smallest box enclosing both.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn unit_at(center: Vec3) -> Aabb {
        Aabb::from_center_size(center, Vec3::ONE)
    }

    #[test]
    fn center_size_roundtrip() {
        let b = Aabb::from_center_size(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 2.0, 6.0));
        assert_eq!(b.min, Vec3::new(-1.0, 1.0, 0.0));
        assert_eq!(b.max, Vec3::new(3.0, 3.0, 6.0));
        assert_eq!(b.center(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(b.size(), Vec3::new(4.0, 2.0, 6.0));
    }

    #[test]
    fn overlapping_boxes_intersect() {
        let a = unit_at(Vec3::ZERO);
        let b = unit_at(Vec3::new(0.5, 0.0, 0.5));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_faces_intersect() {
        let a = unit_at(Vec3::ZERO);
        let b = unit_at(Vec3::new(1.0, 0.0, 0.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn separated_on_one_axis_is_clear() {
        let a = unit_at(Vec3::ZERO);
        assert!(!a.intersects(&unit_at(Vec3::new(1.01, 0.0, 0.0))));
        assert!(!a.intersects(&unit_at(Vec3::new(0.0, -1.5, 0.0))));
        assert!(!a.intersects(&unit_at(Vec3::new(0.0, 0.0, 3.0))));
    }

    #[test]
    fn quarter_turn_swaps_footprint() {
        let b = Aabb::rotated_y(Vec3::ZERO, Vec3::new(6.0, 3.0, 0.5), FRAC_PI_2);
        let size = b.size();
        assert!((size.x - 1.0).abs() < 1e-4);
        assert!((size.y - 6.0).abs() < 1e-4);
        assert!((size.z - 12.0).abs() < 1e-4);
    }

    #[test]
    fn diagonal_turn_grows_footprint() {
        let half = Vec3::new(0.4, 0.75, 0.4);
        let b = Aabb::rotated_y(Vec3::ZERO, half, std::f32::consts::FRAC_PI_4);
        assert!(b.size().x > 0.8);
        assert!((b.size().y - 1.5).abs() < 1e-6);
    }

    #[test]
    fn union_encloses_both() {
        let a = unit_at(Vec3::ZERO);
        let b = unit_at(Vec3::new(10.0, 0.0, -4.0));
        let u = a.union(&b);
        assert!(u.contains_point(a.min) && u.contains_point(b.max));
        assert_eq!(u.min, Vec3::new(-0.5, -0.5, -4.5));
    }
}
