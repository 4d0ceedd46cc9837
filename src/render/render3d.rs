//! Column projection and distance shading for walls.
use raylib::prelude::*;

use crate::core::maze::Maze;
use crate::core::player::Player;
use crate::render::casters::cast_ray;
use crate::settings::RenderSettings;

/// Distances below this are floored before dividing.
pub const MIN_DISTANCE: f32 = 1e-3;

/// One projected screen column.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WallColumn {
    pub x: u32,
    pub height: f32,
    pub top: f32,
    /// 0 = black, 1 = full brightness.
    pub shade: f32,
}

impl WallColumn {
    #[inline]
    pub fn color(&self) -> Color {
        shade_color(self.shade)
    }
}

/// Angle of the ray for `column` out of `width`, spanning `fov` around `facing`.
#[inline]
pub fn ray_angle(facing: f32, fov: f32, column: u32, width: u32) -> f32 {
    facing - fov * 0.5 + (column as f32 / width as f32) * fov
}

/// On-screen wall height for a wall `distance` cells away.
#[inline]
pub fn line_height(screen_h: f32, distance: f32) -> f32 {
    screen_h / distance.max(MIN_DISTANCE)
}

/// Brightness for a wall `distance` cells away. Near walls are dark and far
/// walls bright, saturating at `range`.
#[inline]
pub fn shade(distance: f32, range: f32) -> f32 {
    let s = distance / range;
    // NaN falls through both comparisons in clamp, so pin it to black
    if s.is_nan() { 0.0 } else { s.clamp(0.0, 1.0) }
}

#[inline]
pub fn shade_color(shade: f32) -> Color {
    let v = (shade.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::new(v, v, v, 255)
}

/// Casts one ray per column and projects each hit into a wall slice.
pub fn render_3d(
    maze: &Maze,
    player: &Player,
    settings: &RenderSettings,
    width: u32,
    height: u32,
) -> Vec<WallColumn> {
    let h = height as f32;
    (0..width)
        .map(|x| {
            let a = ray_angle(player.a, settings.fov, x, width);
            let d = cast_ray(maze, player.pos.x, player.pos.y, a, settings.max_distance, settings.step_size);
            let col_h = line_height(h, d);
            WallColumn {
                x,
                height: col_h,
                top: (h - col_h) * 0.5,
                shade: shade(d, settings.shade_range),
            }
        })
        .collect()
}
