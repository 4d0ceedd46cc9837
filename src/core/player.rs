//! Player data and defaults.
use raylib::prelude::*;

pub const START_X: f32 = 3.5;
pub const START_Y: f32 = 3.5;
pub const START_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

#[derive(Copy, Clone, Debug)]
pub struct Player {
    /// Position in map-cell units.
    pub pos: Vector2,
    pub a: f32,              // facing angle, radians, never wrapped
    pub move_speed: f32,     // cells per tick
    pub rotation_speed: f32, // radians per tick
}

impl Player {
    pub fn new(x: f32, y: f32, angle: f32) -> Self {
        Self {
            pos: Vector2::new(x, y),
            a: angle,
            move_speed: 0.1,
            rotation_speed: 0.05,
        }
    }

    pub fn with_speeds(mut self, move_speed: f32, rotation_speed: f32) -> Self {
        self.move_speed = move_speed;
        self.rotation_speed = rotation_speed;
        self
    }

    /// Unit vector the player is facing.
    #[inline]
    pub fn dir(&self) -> (f32, f32) {
        (self.a.cos(), self.a.sin())
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(START_X, START_Y, START_ANGLE)
    }
}
