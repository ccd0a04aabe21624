use chase_common::{Aabb, BodyKind, StaticBody};
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

const GROUND_HALF: f32 = 40.0;
const BOUNDARY_HEIGHT: f32 = 3.0;

const CASTLE_WIDTH: f32 = 14.0;
const CASTLE_DEPTH: f32 = 14.0;
const WALL_HEIGHT: f32 = 6.0;
const WALL_THICKNESS: f32 = 1.0;

const TOWER_RADIUS: f32 = 2.2;
const TOWER_HEIGHT: f32 = 10.0;
const ROOF_RADIUS: f32 = 2.8;
const ROOF_HEIGHT: f32 = 4.0;
const ROOF_BASE: f32 = 11.0;

const GATE_WIDTH: f32 = 6.0;
const GATE_HEIGHT: f32 = 7.0;
const GATE_DEPTH: f32 = 2.0;
const PILLAR_WIDTH: f32 = 1.5;

const KEEP_SIZE: Vec3 = Vec3::new(8.0, 10.0, 8.0);
const KEEP_OFFSET_Z: f32 = -2.0;

/// Walls enclosing the playable ground.
pub(crate) fn boundary_walls(out: &mut Vec<StaticBody>) {
    let long = GROUND_HALF * 2.0;
    let y = BOUNDARY_HEIGHT / 2.0;
    let x_span = Vec3::new(long, BOUNDARY_HEIGHT, WALL_THICKNESS);
    let z_span = Vec3::new(WALL_THICKNESS, BOUNDARY_HEIGHT, long);

    for (center, size) in [
        (Vec3::new(0.0, y, -GROUND_HALF), x_span),
        (Vec3::new(0.0, y, GROUND_HALF), x_span),
        (Vec3::new(GROUND_HALF, y, 0.0), z_span),
        (Vec3::new(-GROUND_HALF, y, 0.0), z_span),
    ] {
        out.push(StaticBody::solid(
            BodyKind::BoundaryWall,
            Aabb::from_center_size(center, size),
        ));
    }
}

/// Towers, curtain walls, gatehouse and keep.
pub(crate) fn castle(out: &mut Vec<StaticBody>) {
    let hw = CASTLE_WIDTH / 2.0;
    let hd = CASTLE_DEPTH / 2.0;

    for (x, z) in [(-hw, -hd), (hw, -hd), (-hw, hd), (hw, hd)] {
        tower(out, x, z);
    }

    wall(out, 0.0, -hd, 0.0, CASTLE_WIDTH - 2.0);
    wall(out, -hw, 0.0, FRAC_PI_2, CASTLE_DEPTH - 2.0);
    wall(out, hw, 0.0, FRAC_PI_2, CASTLE_DEPTH - 2.0);

    // Front wall is split around the gatehouse.
    let front = (CASTLE_WIDTH - GATE_WIDTH) / 2.0;
    wall(out, -hw + front / 2.0 + 1.0, hd, 0.0, front);
    wall(out, hw - front / 2.0 - 1.0, hd, 0.0, front);

    gatehouse(out, hd);

    out.push(StaticBody::solid(
        BodyKind::Keep,
        Aabb::from_center_size(Vec3::new(0.0, KEEP_SIZE.y / 2.0, KEEP_OFFSET_Z), KEEP_SIZE),
    ));
}

fn tower(out: &mut Vec<StaticBody>, x: f32, z: f32) {
    out.push(StaticBody::solid(
        BodyKind::Tower,
        Aabb::new(
            Vec3::new(x - TOWER_RADIUS, 0.0, z - TOWER_RADIUS),
            Vec3::new(x + TOWER_RADIUS, TOWER_HEIGHT, z + TOWER_RADIUS),
        ),
    ));
    out.push(StaticBody::decoration(
        BodyKind::TowerRoof,
        Aabb::new(
            Vec3::new(x - ROOF_RADIUS, ROOF_BASE, z - ROOF_RADIUS),
            Vec3::new(x + ROOF_RADIUS, ROOF_BASE + ROOF_HEIGHT, z + ROOF_RADIUS),
        ),
    ));
}

fn wall(out: &mut Vec<StaticBody>, x: f32, z: f32, yaw: f32, length: f32) {
    let half = Vec3::new(length / 2.0, WALL_HEIGHT / 2.0, WALL_THICKNESS / 2.0);
    out.push(StaticBody::solid(
        BodyKind::CastleWall,
        Aabb::rotated_y(Vec3::new(x, WALL_HEIGHT / 2.0, z), half, yaw),
    ));
}

fn gatehouse(out: &mut Vec<StaticBody>, z: f32) {
    let pillar = Vec3::new(PILLAR_WIDTH, GATE_HEIGHT, GATE_DEPTH);
    let offset = GATE_WIDTH / 2.0 - PILLAR_WIDTH / 2.0;
    for x in [-offset, offset] {
        out.push(StaticBody::solid(
            BodyKind::GatePillar,
            Aabb::from_center_size(Vec3::new(x, GATE_HEIGHT / 2.0, z), pillar),
        ));
    }
    out.push(StaticBody::decoration(
        BodyKind::GateArch,
        Aabb::from_center_size(
            Vec3::new(0.0, GATE_HEIGHT - 1.0, z),
            Vec3::new(GATE_WIDTH, 2.0, GATE_DEPTH),
        ),
    ));
    out.push(StaticBody::decoration(
        BodyKind::Door,
        Aabb::from_center_size(Vec3::new(0.0, 2.5, z), Vec3::new(3.0, 5.0, 0.5)),
    ));
}
