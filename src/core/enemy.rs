//! Static enemy roster.
use raylib::prelude::*;

#[derive(Copy, Clone, Debug)]
pub struct Enemy {
    pub pos: Vector2,
}

impl Enemy {
    pub fn new(x: f32, y: f32) -> Self {
        Self { pos: Vector2::new(x, y) }
    }

    /// Straight-line distance to a map position.
    #[inline]
    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        let dx = self.pos.x - x;
        let dy = self.pos.y - y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Enemies placed in the compiled-in level, in draw order.
pub fn default_roster() -> Vec<Enemy> {
    vec![Enemy::new(4.0, 4.0), Enemy::new(6.0, 6.0)]
}
