use super::constants::*;
use super::layout::SpherePoint;
use glam::{Vec2, Vec3};

/// A sphere point after rotation, with its derived screen attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldPosition {
    pub index: usize,
    pub pos: Vec3,
    pub scale: f32,
    pub z_index: i32,
    pub is_visible: bool,
    pub fade_opacity: f32,
}

/// Spherical (degrees) to Cartesian, y up, z toward the viewer.
#[inline]
pub fn spherical_to_cartesian(p: &SpherePoint) -> Vec3 {
    let theta = p.theta.to_radians();
    let phi = p.phi.to_radians();
    Vec3::new(
        p.radius * phi.sin() * theta.cos(),
        p.radius * phi.cos(),
        p.radius * phi.sin() * theta.sin(),
    )
}

/// Apply yaw (`rotation.y`, x/z plane) and then pitch (`rotation.x`,
/// y/z plane). Angles in degrees.
#[inline]
pub fn rotate(v: Vec3, rotation: Vec2) -> Vec3 {
    let (sy, cy) = rotation.y.to_radians().sin_cos();
    let (sx, cx) = rotation.x.to_radians().sin_cos();

    let x1 = v.x * cy + v.z * sy;
    let z1 = -v.x * sy + v.z * cy;

    let y2 = v.y * cx - z1 * sx;
    let z2 = v.y * sx + z1 * cx;

    Vec3::new(x1, y2, z2)
}

#[inline]
pub fn fade_opacity(z: f32) -> f32 {
    if z > FADE_ZONE_START {
        1.0
    } else {
        ((z - FADE_ZONE_END) / (FADE_ZONE_START - FADE_ZONE_END)).max(0.0)
    }
}

/// Shrink toward the rim of the projected disc, grow toward the viewer.
#[inline]
pub fn depth_scale(pos: Vec3, sphere_radius: f32) -> f32 {
    let distance_ratio = (pos.truncate().length() / sphere_radius).min(1.0);
    let center_scale = (1.0 - distance_ratio * CENTER_SCALE_FALLOFF).max(CENTER_SCALE_MIN);
    let depth = (pos.z + sphere_radius) / (2.0 * sphere_radius);
    center_scale * (DEPTH_SCALE_BASE + depth * DEPTH_SCALE_SPAN).max(DEPTH_SCALE_MIN)
}

pub fn project(index: usize, point: &SpherePoint, rotation: Vec2, sphere_radius: f32) -> WorldPosition {
    let pos = rotate(spherical_to_cartesian(point), rotation);
    WorldPosition {
        index,
        pos,
        scale: depth_scale(pos, sphere_radius),
        z_index: (Z_INDEX_BASE + pos.z).round() as i32,
        is_visible: pos.z > FADE_ZONE_END,
        fade_opacity: fade_opacity(pos.z),
    }
}

pub fn project_all(points: &[SpherePoint], rotation: Vec2, sphere_radius: f32) -> Vec<WorldPosition> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| project(i, p, rotation, sphere_radius))
        .collect()
}
