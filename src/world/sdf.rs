use glam::{Vec2, Vec3};

use crate::constants::GRADIENT_EPSILON;
use crate::core::grid::Grid;

/// Returned by [`distance`] when no solid cell is close enough to measure.
pub const NO_SURFACE: f32 = f32::INFINITY;

/// Distance from `point` to the nearest solid cell in the 3x3x3 block around it.
///
/// Only exact while the true nearest surface lies inside that block; anything
/// farther reads as [`NO_SURFACE`]. Points inside a solid cell read as zero.
pub fn distance(grid: &Grid, point: Vec3) -> f32 {
    let base = point.floor().as_ivec3();
    let mut min_distance = NO_SURFACE;

    for dx in -1..=1 {
        for dy in -1..=1 {
            for dz in -1..=1 {
                let (x, y, z) = (base.x + dx, base.y + dy, base.z + dz);
                if !grid.is_solid(x, y, z) {
                    continue;
                }
                let min = Vec3::new(x as f32, y as f32, z as f32);
                let closest = point.clamp(min, min + Vec3::ONE);
                min_distance = min_distance.min(point.distance(closest));
            }
        }
    }

    min_distance
}

/// Direction of increasing distance in the XZ plane, from forward differences.
/// `center` is `distance(grid, point)`, already known by the caller.
pub fn horizontal_gradient(grid: &Grid, point: Vec3, center: f32) -> Vec2 {
    let gx = distance(grid, point + Vec3::new(GRADIENT_EPSILON, 0.0, 0.0)) - center;
    let gz = distance(grid, point + Vec3::new(0.0, 0.0, GRADIENT_EPSILON)) - center;
    let gradient = Vec2::new(gx, gz);
    if gradient.is_finite() {
        gradient.normalize_or_zero()
    } else {
        Vec2::ZERO
    }
}
