use chase_common::{Aabb, BodyKind, StaticBody};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Trees stay off the path strip `|x| <= PATH_HALF_WIDTH, z >= 0`.
pub const PATH_HALF_WIDTH: f32 = 3.0;

const TRUNK_RADIUS: f32 = 0.4;
const TRUNK_HEIGHT: f32 = 1.5;
const CANOPY_RADIUS: f32 = 1.5;
const CANOPY_HEIGHT: f32 = 3.0;
const CANOPY_CENTER: f32 = 2.5;

/// Rejection-sampling budget per tree before it is skipped.
const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

/// Ring of randomly placed trees around the castle.
#[derive(Debug, Clone)]
pub struct ForestConfig {
    pub trees: usize,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub min_scale: f32,
    pub max_scale: f32,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            trees: 100,
            inner_radius: 15.0,
            outer_radius: 35.0,
            min_scale: 0.8,
            max_scale: 1.2,
        }
    }
}

fn on_path(x: f32, z: f32) -> bool {
    x.abs() <= PATH_HALF_WIDTH && z >= 0.0
}

/// Uniform in `[a, b)` with the bounds in either order; a collapsed range
/// yields its single value.
fn sample(rng: &mut impl Rng, a: f32, b: f32) -> f32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if lo < hi { rng.gen_range(lo..hi) } else { lo }
}

fn site(config: &ForestConfig, rng: &mut impl Rng) -> Option<(f32, f32)> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let angle = rng.gen_range(0.0..TAU);
        let radius = sample(rng, config.inner_radius, config.outer_radius);
        let (x, z) = (angle.cos() * radius, angle.sin() * radius);
        if !on_path(x, z) {
            return Some((x, z));
        }
    }
    None
}

pub(crate) fn plant(out: &mut Vec<StaticBody>, config: &ForestConfig, rng: &mut impl Rng) {
    for n in 0..config.trees {
        let Some((x, z)) = site(config, rng) else {
            tracing::warn!(
                planted = n,
                requested = config.trees,
                "no room off the path, forest cut short"
            );
            return;
        };
        let yaw = rng.gen_range(0.0..PI);
        let scale = sample(rng, config.min_scale, config.max_scale);

        let trunk_half = Vec3::new(TRUNK_RADIUS, TRUNK_HEIGHT / 2.0, TRUNK_RADIUS) * scale;
        out.push(StaticBody::solid(
            BodyKind::TreeTrunk,
            Aabb::rotated_y(Vec3::new(x, trunk_half.y, z), trunk_half, yaw),
        ));

        let canopy_half = Vec3::new(CANOPY_RADIUS, CANOPY_HEIGHT / 2.0, CANOPY_RADIUS) * scale;
        out.push(StaticBody::decoration(
            BodyKind::TreeCanopy,
            Aabb::rotated_y(Vec3::new(x, CANOPY_CENTER * scale, z), canopy_half, yaw),
        ));
    }
}
