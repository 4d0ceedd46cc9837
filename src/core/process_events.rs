//! Per-tick movement, rotation and overlay toggling.
use crate::core::input::InputIntent;
use crate::core::maze::Maze;
use crate::core::player::Player;
use crate::core::state::GameState;

/// Moves the player by `(dx, dy)`, accepting each axis separately so the
/// player slides along walls. X is resolved first and Y is checked from the
/// resolved X.
pub fn try_move_with_slide(maze: &Maze, player: &mut Player, dx: f32, dy: f32) -> bool {
    let mut moved = false;
    let nx = player.pos.x + dx;
    if !maze.cell_at_pos(nx, player.pos.y).is_blocking() {
        player.pos.x = nx;
        moved = true;
    }
    let ny = player.pos.y + dy;
    if !maze.cell_at_pos(player.pos.x, ny).is_blocking() {
        player.pos.y = ny;
        moved = true;
    }
    moved
}

/// Applies translation and rotation intents to the player.
pub fn process_events(player: &mut Player, intent: &InputIntent, maze: &Maze) {
    let (cos, sin) = player.dir();
    let step = player.move_speed;
    if intent.move_forward {
        try_move_with_slide(maze, player, cos * step, sin * step);
    }
    if intent.move_backward {
        try_move_with_slide(maze, player, -cos * step, -sin * step);
    }
    if intent.rotate_left {
        player.a -= player.rotation_speed;
    }
    if intent.rotate_right {
        player.a += player.rotation_speed;
    }
}

/// Advances the simulation by one fixed tick.
pub fn tick(state: &mut GameState, intent: &InputIntent) {
    if intent.overlay_toggle_edge {
        state.overlay = !state.overlay;
        log::debug!("see-through mode {}", if state.overlay { "on" } else { "off" });
    }
    process_events(&mut state.player, intent, &state.maze);
    state.ticks += 1;
}
