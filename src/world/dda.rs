use glam::{IVec3, Vec3};

use crate::core::grid::Grid;

/// Axis stepped by the most recent `next()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Grid traversal cursor. Each `next()` moves exactly one cell along one axis,
/// visiting cells in the order the ray enters them.
#[derive(Clone, Debug)]
pub struct DdaCursor {
    cell: IVec3,
    step: IVec3,
    delta_dist: Vec3,
    side_dist: Vec3,
    last_axis: Option<Axis>,
}

impl DdaCursor {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        let cell = origin.floor().as_ivec3();
        let delta_dist = Vec3::new(
            inverse_or_inf(dir.x),
            inverse_or_inf(dir.y),
            inverse_or_inf(dir.z),
        );
        let step = IVec3::new(step_sign(dir.x), step_sign(dir.y), step_sign(dir.z));

        let mut side_dist = Vec3::ZERO;
        for i in 0..3 {
            let base = cell[i] as f32;
            let to_boundary = if dir[i] < 0.0 {
                origin[i] - base
            } else {
                base + 1.0 - origin[i]
            };
            side_dist[i] = to_boundary * delta_dist[i];
        }

        Self {
            cell,
            step,
            delta_dist,
            side_dist,
            last_axis: None,
        }
    }

    pub fn cell(&self) -> IVec3 {
        self.cell
    }

    pub fn last_axis(&self) -> Option<Axis> {
        self.last_axis
    }

    /// Ray parameter at which the current cell was entered.
    pub fn distance(&self) -> f32 {
        match self.last_axis {
            Some(axis) => {
                let i = axis.index();
                self.side_dist[i] - self.delta_dist[i]
            }
            None => 0.0,
        }
    }

    /// Normal of the face through which the current cell was entered.
    pub fn normal(&self) -> IVec3 {
        let mut normal = IVec3::ZERO;
        if let Some(axis) = self.last_axis {
            let i = axis.index();
            normal[i] = -self.step[i];
        }
        normal
    }

    fn pick_axis(&self) -> Axis {
        let s = self.side_dist;
        if s.x <= s.y && s.x <= s.z {
            Axis::X
        } else if s.y <= s.z {
            Axis::Y
        } else {
            Axis::Z
        }
    }
}

impl Iterator for DdaCursor {
    type Item = IVec3;

    fn next(&mut self) -> Option<IVec3> {
        let axis = self.pick_axis();
        let i = axis.index();
        self.cell[i] += self.step[i];
        self.side_dist[i] += self.delta_dist[i];
        self.last_axis = Some(axis);
        Some(self.cell)
    }
}

#[inline]
fn inverse_or_inf(d: f32) -> f32 {
    if d == 0.0 { f32::INFINITY } else { (1.0 / d).abs() }
}

#[inline]
fn step_sign(d: f32) -> i32 {
    if d < 0.0 { -1 } else { 1 }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RayHit {
    pub cell: IVec3,
    pub normal: IVec3,
    pub code: i32,
    pub steps: usize,
}

impl RayHit {
    /// Empty neighbour on the side the ray came from.
    pub fn adjacent(&self) -> IVec3 {
        self.cell + self.normal
    }
}

/// Walk at most `max_steps` cells and report the first non-empty one.
/// The starting cell itself is never reported.
pub fn raycast(grid: &Grid, origin: Vec3, dir: Vec3, max_steps: usize) -> Option<RayHit> {
    let mut cursor = DdaCursor::new(origin, dir);
    for steps in 1..=max_steps {
        let cell = cursor.next()?;
        match grid.get_at(cell) {
            Some(code) if code != 0 => {
                return Some(RayHit {
                    cell,
                    normal: cursor.normal(),
                    code,
                    steps,
                });
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_hits_block_straight_ahead() {
        let mut grid = Grid::empty();
        grid.set(5, 5, 5, 1).unwrap();

        let hit = raycast(&grid, Vec3::new(5.0, 5.0, 10.0), Vec3::new(0.0, 0.0, -1.0), 12).unwrap();
        assert_eq!(hit.cell, IVec3::new(5, 5, 5));
        assert_eq!(hit.steps, 5);
        assert_eq!(hit.normal, IVec3::new(0, 0, 1));
        assert_eq!(hit.adjacent(), IVec3::new(5, 5, 6));
    }

    #[test]
    fn test_budget_exhausted_is_no_target() {
        let mut grid = Grid::empty();
        grid.set(5, 5, 5, 1).unwrap();
        let origin = Vec3::new(5.5, 5.5, 30.5);
        assert!(raycast(&grid, origin, Vec3::new(0.0, 0.0, -1.0), 12).is_none());
    }

    #[test]
    fn test_decorations_are_targets() {
        let mut grid = Grid::empty();
        grid.set(2, 5, 5, -3).unwrap();
        let hit = raycast(&grid, Vec3::new(6.5, 5.5, 5.5), Vec3::new(-1.0, 0.0, 0.0), 12).unwrap();
        assert_eq!(hit.cell, IVec3::new(2, 5, 5));
        assert_eq!(hit.code, -3);
        assert_eq!(hit.normal, IVec3::new(1, 0, 0));
    }

    #[test]
    fn test_normal_is_zero_before_first_step() {
        let cursor = DdaCursor::new(Vec3::splat(1.5), Vec3::X);
        assert_eq!(cursor.normal(), IVec3::ZERO);
        assert_eq!(cursor.distance(), 0.0);
    }

    #[test]
    fn test_ties_prefer_x_then_y() {
        let dir = Vec3::new(1.0, 1.0, 1.0).normalize();
        let mut cursor = DdaCursor::new(Vec3::splat(0.5), dir);
        assert_eq!(cursor.next(), Some(IVec3::new(1, 0, 0)));
        assert_eq!(cursor.next(), Some(IVec3::new(1, 1, 0)));
        assert_eq!(cursor.next(), Some(IVec3::new(1, 1, 1)));
    }

    #[test]
    fn test_cursor_restarts_from_clone() {
        let cursor = DdaCursor::new(Vec3::new(0.2, 3.7, 1.1), Vec3::new(0.3, -0.8, 0.5).normalize());
        let first: Vec<_> = cursor.clone().take(8).collect();
        let second: Vec<_> = cursor.take(8).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_rays_step_one_axis_and_move_away() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let origin = Vec3::new(
                rng.gen_range(0.0..64.0),
                rng.gen_range(0.0..64.0),
                rng.gen_range(0.0..64.0),
            );
            let dir = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            if dir.length_squared() < 1e-6 {
                continue;
            }
            let dir = dir.normalize();

            let mut cursor = DdaCursor::new(origin, dir);
            let mut prev = cursor.cell();
            let mut prev_t = 0.0;
            // Equal side distances on two axes enter two cells at the same t.
            let mut prev_tied = true;
            for _ in 0..40 {
                let s = cursor.side_dist;
                let min = s.min_element();
                let tied = s.to_array().iter().filter(|&&v| v == min).count() > 1;

                let cell = cursor.next().unwrap();
                let diff = cell - prev;
                assert_eq!(diff.abs().element_sum(), 1, "one axis, one cell per step");

                // `min` is the entry distance of the new cell, before rounding.
                let t = min;
                assert!((cursor.distance() - t).abs() < 1e-3);
                if prev_tied {
                    assert!(t >= prev_t, "entry distance must not decrease");
                } else {
                    assert!(t > prev_t, "entry distance must strictly increase");
                }
                prev_t = t;
                prev_tied = tied;
                prev = cell;
            }
        }
    }
}
