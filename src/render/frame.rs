//! Frame composition and the draw commands handed to the display.
use raylib::prelude::*;

use crate::core::state::GameState;
use crate::render::render3d::{render_3d, WallColumn};
use crate::render::sprites::{overlay_markers, EnemyMarker, MARKER_COLOR, OVERLAY_TINT};
use crate::settings::RenderSettings;

pub const HUD_FONT_SIZE: i32 = 10;
pub const HUD_COLOR: Color = Color::WHITE;

/// Backend-neutral drawing primitive, in screen pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect { x: f32, y: f32, w: f32, h: f32, color: Color },
    FillCircle { cx: f32, cy: f32, diameter: f32, color: Color },
    Text { text: String, x: i32, y: i32, size: i32, color: Color },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: i32,
    pub y: i32,
}

/// Everything drawn for one tick.
#[derive(Clone, Debug)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub columns: Vec<WallColumn>,
    /// Present only while see-through mode is on.
    pub markers: Option<Vec<EnemyMarker>>,
    pub labels: Vec<Label>,
}

impl Frame {
    /// Walls left to right, then the tint and markers, then labels.
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let mut cmds = Vec::with_capacity(self.columns.len() + 8);
        cmds.extend(self.columns.iter().map(|c| DrawCommand::FillRect {
            x: c.x as f32,
            y: c.top,
            w: 1.0,
            h: c.height,
            color: c.color(),
        }));
        if let Some(markers) = &self.markers {
            cmds.push(DrawCommand::FillRect {
                x: 0.0,
                y: 0.0,
                w: self.width as f32,
                h: self.height as f32,
                color: OVERLAY_TINT,
            });
            cmds.extend(markers.iter().map(|m| DrawCommand::FillCircle {
                cx: m.screen_x,
                cy: m.screen_y,
                diameter: m.size,
                color: MARKER_COLOR,
            }));
        }
        cmds.extend(self.labels.iter().map(|l| DrawCommand::Text {
            text: l.text.clone(),
            x: l.x,
            y: l.y,
            size: HUD_FONT_SIZE,
            color: HUD_COLOR,
        }));
        cmds
    }
}

fn hud_labels(overlay: bool) -> Vec<Label> {
    let mut labels = Vec::with_capacity(2);
    if overlay {
        labels.push(Label { text: "SEE-THROUGH MODE ACTIVE".into(), x: 10, y: 40 });
    }
    labels.push(Label {
        text: format!("See-Through Mode: {}", if overlay { "ON" } else { "OFF" }),
        x: 10,
        y: 20,
    });
    labels
}

/// Builds the frame for the current state. Pure: reads `state`, touches nothing else.
pub fn render_frame(state: &GameState, settings: &RenderSettings, width: u32, height: u32) -> Frame {
    let columns = render_3d(&state.maze, &state.player, settings, width, height);
    let markers = state
        .overlay
        .then(|| overlay_markers(&state.enemies, &state.player, settings, width, height));
    Frame { width, height, columns, markers, labels: hud_labels(state.overlay) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_frame_has_columns_and_status() {
        let state = GameState::default();
        let frame = render_frame(&state, &RenderSettings::default(), 32, 20);
        assert!(frame.markers.is_none());
        let cmds = frame.draw_commands();
        assert_eq!(cmds.len(), 33);
        assert!(cmds[..32].iter().all(|c| matches!(c, DrawCommand::FillRect { w, .. } if *w == 1.0)));
        match &cmds[32] {
            DrawCommand::Text { text, x, y, .. } => {
                assert_eq!(text, "See-Through Mode: OFF");
                assert_eq!((*x, *y), (10, 20));
            }
            other => panic!("expected status label, got {other:?}"),
        }
    }

    #[test]
    fn test_overlay_frame_layers_tint_markers_and_labels() {
        let mut state = GameState::default();
        state.overlay = true;
        let frame = render_frame(&state, &RenderSettings::default(), 32, 20);
        assert!(frame.markers.is_some());
        let cmds = frame.draw_commands();
        // 32 columns, tint, 2 markers, 2 labels
        assert_eq!(cmds.len(), 37);
        assert_eq!(
            cmds[32],
            DrawCommand::FillRect { x: 0.0, y: 0.0, w: 32.0, h: 20.0, color: OVERLAY_TINT }
        );
        assert!(matches!(cmds[33], DrawCommand::FillCircle { .. }));
        assert!(matches!(cmds[34], DrawCommand::FillCircle { .. }));
        let texts: Vec<&str> = cmds[35..]
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["SEE-THROUGH MODE ACTIVE", "See-Through Mode: ON"]);
    }

    #[test]
    fn test_columns_render_left_to_right() {
        let state = GameState::default();
        let frame = render_frame(&state, &RenderSettings::default(), 16, 16);
        let xs: Vec<u32> = frame.columns.iter().map(|c| c.x).collect();
        assert_eq!(xs, (0..16).collect::<Vec<_>>());
    }
}
