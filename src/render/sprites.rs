//! See-through enemy markers.
//!
//! Markers are placed by the enemy's map offset from the player, not by its
//! bearing relative to the view, and are never depth tested against walls.
use raylib::prelude::*;

use crate::core::enemy::Enemy;
use crate::core::player::Player;
use crate::settings::RenderSettings;

pub const OVERLAY_TINT: Color = Color::new(0, 255, 0, 100);
pub const MARKER_COLOR: Color = Color::RED;

/// A projected enemy, ready to draw as a filled circle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EnemyMarker {
    pub screen_x: f32,
    pub screen_y: f32,
    /// Diameter in pixels.
    pub size: f32,
}

/// Projects one enemy, or `None` when it is at or beyond the cutoff.
pub fn project_enemy(
    enemy: &Enemy,
    player: &Player,
    settings: &RenderSettings,
    width: f32,
    height: f32,
) -> Option<EnemyMarker> {
    let distance = enemy.distance_to(player.pos.x, player.pos.y);
    if distance.is_nan() || distance >= settings.overlay_cutoff {
        return None;
    }
    let k = settings.overlay_scale;
    Some(EnemyMarker {
        screen_x: (enemy.pos.x - player.pos.x) * width / k + width * 0.5,
        screen_y: (enemy.pos.y - player.pos.y) * height / k + height * 0.5,
        size: height / (distance + 1.0),
    })
}

/// Markers for every enemy within range, in roster order.
pub fn overlay_markers(
    enemies: &[Enemy],
    player: &Player,
    settings: &RenderSettings,
    width: u32,
    height: u32,
) -> Vec<EnemyMarker> {
    let (w, h) = (width as f32, height as f32);
    enemies
        .iter()
        .filter_map(|e| project_enemy(e, player, settings, w, h))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32) -> Player {
        Player::new(x, y, 0.0)
    }

    #[test]
    fn test_enemy_on_player_fills_height() {
        let settings = RenderSettings::default();
        let m = project_enemy(&Enemy::new(3.0, 3.0), &at(3.0, 3.0), &settings, 600.0, 400.0)
            .expect("enemy on player is visible");
        assert_eq!(m.size, 400.0);
        assert_eq!((m.screen_x, m.screen_y), (300.0, 200.0));
    }

    #[test]
    fn test_cutoff_is_exclusive() {
        let settings = RenderSettings::default();
        let player = at(0.0, 0.0);
        let near = project_enemy(&Enemy::new(9.999, 0.0), &player, &settings, 600.0, 400.0);
        assert!(near.is_some());
        let edge = project_enemy(&Enemy::new(10.0, 0.0), &player, &settings, 600.0, 400.0);
        assert!(edge.is_none());
        let far = project_enemy(&Enemy::new(6.0, 8.5), &player, &settings, 600.0, 400.0);
        assert!(far.is_none());
    }

    #[test]
    fn test_position_ignores_facing() {
        let settings = RenderSettings::default();
        let enemy = Enemy::new(5.0, 4.0);
        let a = project_enemy(&enemy, &Player::new(3.0, 3.0, 0.0), &settings, 600.0, 400.0);
        let b = project_enemy(&enemy, &Player::new(3.0, 3.0, 2.5), &settings, 600.0, 400.0);
        assert_eq!(a, b);
        let m = a.expect("visible");
        // offset (2, 1) scaled by width/10 and height/10
        assert!((m.screen_x - 420.0).abs() < 1e-3);
        assert!((m.screen_y - 240.0).abs() < 1e-3);
        assert!((m.size - 400.0 / (5.0f32.sqrt() + 1.0)).abs() < 1e-3);
    }

    #[test]
    fn test_closer_enemies_are_bigger() {
        let settings = RenderSettings::default();
        let player = at(1.5, 1.5);
        let near = project_enemy(&Enemy::new(2.5, 1.5), &player, &settings, 600.0, 400.0);
        let far = project_enemy(&Enemy::new(6.5, 1.5), &player, &settings, 600.0, 400.0);
        assert!(near.expect("near").size > far.expect("far").size);
    }

    #[test]
    fn test_markers_keep_roster_order_and_skip_far() {
        let settings = RenderSettings::default();
        let enemies = vec![Enemy::new(20.0, 20.0), Enemy::new(4.0, 4.0), Enemy::new(6.0, 6.0)];
        let markers = overlay_markers(&enemies, &Player::default(), &settings, 600, 400);
        // player at (3.5, 3.5): offsets 0.5 and 2.5 cells, 60 px per cell
        let xs: Vec<f32> = markers.iter().map(|m| m.screen_x).collect();
        assert_eq!(xs, vec![330.0, 450.0]);
    }
}
