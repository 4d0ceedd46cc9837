//! Rendering: ray casting, wall projection, see-through overlay.
//!
//! Re-exports:
//! - `casters`: Fixed-step ray march
//! - `render3d`: Column projection and shading
//! - `sprites`: See-through enemy markers
//! - `frame`: Per-tick frame and draw commands
//! - `framebuffer`: CPU rasterizer for draw commands

pub mod casters;
pub mod frame;
pub mod framebuffer;
pub mod render3d;
pub mod sprites;
