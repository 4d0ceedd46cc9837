//! Fixed-step ray marching through the grid.
use crate::core::maze::{Cell, Maze};

/// One sample taken along a ray.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RaySample {
    /// Distance travelled before this sample was taken.
    pub distance: f32,
    pub cell: Cell,
}

/// Walks a point from `(ox, oy)` along `angle` in steps of `step`.
///
/// Positions are recomputed from the origin each step rather than
/// accumulated, so long rays do not drift.
pub struct RayMarch<'a> {
    maze: &'a Maze,
    ox: f32,
    oy: f32,
    dx: f32,
    dy: f32,
    step: f32,
    n: u32,
}

impl<'a> RayMarch<'a> {
    pub fn new(maze: &'a Maze, ox: f32, oy: f32, angle: f32, step: f32) -> Self {
        assert!(step > 0.0, "ray step must be positive");
        Self { maze, ox, oy, dx: angle.cos(), dy: angle.sin(), step, n: 0 }
    }
}

impl Iterator for RayMarch<'_> {
    type Item = RaySample;

    fn next(&mut self) -> Option<RaySample> {
        let distance = self.n as f32 * self.step;
        self.n = self.n.checked_add(1)?;
        let t = self.n as f32 * self.step;
        let cell = self.maze.cell_at_pos(self.ox + self.dx * t, self.oy + self.dy * t);
        Some(RaySample { distance, cell })
    }
}

/// Distance from `(ox, oy)` to the first blocking cell along `angle`, or
/// `max_distance` if nothing is hit first.
///
/// The returned distance excludes the step that entered the wall, so a ray
/// starting against a wall reports (close to) zero.
pub fn cast_ray(maze: &Maze, ox: f32, oy: f32, angle: f32, max_distance: f32, step: f32) -> f32 {
    for sample in RayMarch::new(maze, ox, oy, angle, step) {
        if sample.distance >= max_distance {
            return max_distance;
        }
        if sample.cell.is_blocking() {
            return sample.distance;
        }
    }
    max_distance
}
