//! Core game types and logic (map, player, enemies, input, tick).
//!
//! Re-exports:
//! - `maze`: Occupancy grid and the compiled-in level
//! - `player`: Player data and defaults
//! - `enemy`: Static enemy roster
//! - `input`: Actions, held-key state and per-tick intents
//! - `state`: Simulation state
//! - `process_events`: Movement with wall sliding and the tick entry point

pub mod enemy;
pub mod input;
pub mod maze;
pub mod player;
pub mod process_events;
pub mod state;
