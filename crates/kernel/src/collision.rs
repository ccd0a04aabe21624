use chase_common::{Aabb, StaticBody};
use glam::Vec3;

/// Height of the box probed above an actor's feet.
pub const PROBE_HEIGHT: f32 = 2.0;

/// Static obstacle boxes, built once and queried every frame.
///
/// There is no insertion or removal: obstacles are fixed for the session.
#[derive(Debug, Clone, Default)]
pub struct CollisionIndex {
    boxes: Vec<Aabb>,
}

impl CollisionIndex {
    pub fn new(boxes: Vec<Aabb>) -> Self {
        Self { boxes }
    }

    /// Index every body tagged collidable; the rest are skipped.
    pub fn from_bodies<'a>(bodies: impl IntoIterator<Item = &'a StaticBody>) -> Self {
        let boxes: Vec<Aabb> = bodies
            .into_iter()
            .filter(|b| b.collidable)
            .map(|b| b.bounds)
            .collect();
        tracing::debug!(boxes = boxes.len(), "collision index built");
        Self { boxes }
    }

    /// The box an actor standing at `center` occupies: `PROBE_HEIGHT` tall,
    /// centered one half-height above the point.
    pub fn probe(center: Vec3, half_extent_xz: f32) -> Aabb {
        let half_height = PROBE_HEIGHT / 2.0;
        Aabb::from_center_half_extents(
            center + Vec3::new(0.0, half_height, 0.0),
            Vec3::new(half_extent_xz, half_height, half_extent_xz),
        )
    }

    pub fn is_blocked(&self, center: Vec3, half_extent_xz: f32) -> bool {
        self.first_hit(center, half_extent_xz).is_some()
    }

    /// First indexed box the probe at `center` intersects.
    pub fn first_hit(&self, center: Vec3, half_extent_xz: f32) -> Option<&Aabb> {
        let probe = Self::probe(center, half_extent_xz);
        self.boxes.iter().find(|b| probe.intersects(b))
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn boxes(&self) -> &[Aabb] {
        &self.boxes
    }

    /// Union of all indexed boxes, or `None` when empty.
    pub fn bounds(&self) -> Option<Aabb> {
        self.boxes.iter().copied().reduce(|a, b| a.union(&b))
    }
}
