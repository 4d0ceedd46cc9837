//! Beyond-Death 3D: a grid raycaster with a see-through enemy overlay.
//!
//! - `core`: simulation state and the per-tick update
//! - `render`: ray casting and frame composition
//! - `settings`: runtime tuning

pub mod core;
pub mod render;
pub mod settings;

pub use crate::core::input::{Action, InputIntent, InputState};
pub use crate::core::process_events::tick;
pub use crate::core::state::GameState;
pub use crate::render::frame::{render_frame, DrawCommand, Frame};
pub use crate::settings::{Settings, SettingsError};
