//! Simulation state owned by the tick loop.
use crate::core::enemy::{default_roster, Enemy};
use crate::core::maze::Maze;
use crate::core::player::Player;
use crate::settings::MotionSettings;

/// Everything that persists from one tick to the next.
#[derive(Clone, Debug)]
pub struct GameState {
    pub maze: Maze,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    /// See-through mode.
    pub overlay: bool,
    pub ticks: u64,
}

impl GameState {
    pub fn new(maze: Maze, player: Player, enemies: Vec<Enemy>) -> Self {
        Self { maze, player, enemies, overlay: false, ticks: 0 }
    }

    /// Compiled-in level and roster with the player placed per `motion`.
    pub fn from_settings(motion: &MotionSettings) -> Self {
        let player = Player::new(motion.start_x, motion.start_y, motion.start_angle)
            .with_speeds(motion.move_speed, motion.rotation_speed);
        Self::new(Maze::beyond_death(), player, default_roster())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Maze::beyond_death(), Player::default(), default_roster())
    }
}
