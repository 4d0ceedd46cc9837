//! Runtime settings
//!
//! Optional JSON file; every field falls back to the built-in defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming the settings file.
pub const SETTINGS_ENV: &str = "BEYOND_DEATH_SETTINGS";

/// Largest accepted window side, in pixels.
pub const MAX_WINDOW_SIDE: i32 = 8192;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: i32,
    pub height: i32,
    pub title: String,
    /// Fixed simulation tick in milliseconds
    pub tick_ms: u64,
    /// Maximum ticks run per rendered frame
    pub max_substeps: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            title: "Beyond-Death 3D".to_string(),
            tick_ms: 16,
            max_substeps: 8,
        }
    }
}

/// Projection and overlay tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Horizontal field of view (radians)
    pub fov: f32,
    pub max_distance: f32,
    pub step_size: f32,
    /// Distance at which walls reach full brightness
    pub shade_range: f32,
    /// Enemies at or past this distance are not drawn in see-through mode
    pub overlay_cutoff: f32,
    /// Map cells spanning the full screen in see-through mode
    pub overlay_scale: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            fov: std::f32::consts::FRAC_PI_2,
            max_distance: 10.0,
            step_size: 0.05,
            shade_range: 10.0,
            overlay_cutoff: 10.0,
            overlay_scale: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    pub start_x: f32,
    pub start_y: f32,
    pub start_angle: f32,
    /// Cells per tick
    pub move_speed: f32,
    /// Radians per tick
    pub rotation_speed: f32,
}

impl Default for MotionSettings {
    fn default() -> Self {
        use crate::core::player::{START_ANGLE, START_X, START_Y};
        Self {
            start_x: START_X,
            start_y: START_Y,
            start_angle: START_ANGLE,
            move_speed: 0.1,
            rotation_speed: 0.05,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub render: RenderSettings,
    pub motion: MotionSettings,
}

fn positive(field: &'static str, v: f32) -> Result<(), SettingsError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::Invalid { field, reason: "must be a positive number" })
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Loads from the file named by `BEYOND_DEATH_SETTINGS`, falling back to
    /// defaults when the variable is unset or the file is unusable.
    pub fn load() -> Self {
        Self::load_from(std::env::var(SETTINGS_ENV).ok().as_deref())
    }

    /// Loads from `path` if given, falling back to defaults on any error.
    pub fn load_from(path: Option<&str>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::from_file(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {path}");
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let r = &self.render;
        positive("render.fov", r.fov)?;
        positive("render.max_distance", r.max_distance)?;
        positive("render.step_size", r.step_size)?;
        positive("render.shade_range", r.shade_range)?;
        positive("render.overlay_cutoff", r.overlay_cutoff)?;
        positive("render.overlay_scale", r.overlay_scale)?;
        let w = &self.window;
        if w.width <= 0 || w.height <= 0 || w.width > MAX_WINDOW_SIDE || w.height > MAX_WINDOW_SIDE {
            return Err(SettingsError::Invalid { field: "window", reason: "size must be between 1 and 8192" });
        }
        if w.tick_ms == 0 {
            return Err(SettingsError::Invalid { field: "window.tick_ms", reason: "must be non-zero" });
        }
        if w.max_substeps == 0 {
            return Err(SettingsError::Invalid { field: "window.max_substeps", reason: "must be non-zero" });
        }
        if !self.motion.move_speed.is_finite() || !self.motion.rotation_speed.is_finite() {
            return Err(SettingsError::Invalid { field: "motion", reason: "speeds must be finite" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let s = Settings::default();
        assert!(s.validate().is_ok());
        assert_eq!(s.window.width, 600);
        assert_eq!(s.window.height, 400);
        assert_eq!(s.render.step_size, 0.05);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let s = Settings::from_json(r#"{ "render": { "step_size": 0.01 }, "window": { "title": "x" } }"#)
            .expect("valid settings");
        assert_eq!(s.render.step_size, 0.01);
        assert_eq!(s.render.max_distance, 10.0);
        assert_eq!(s.window.title, "x");
        assert_eq!(s.window.width, 600);
        assert_eq!(s.motion, MotionSettings::default());
    }

    #[test]
    fn test_rejects_zero_step() {
        let err = Settings::from_json(r#"{ "render": { "step_size": 0.0 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "render.step_size", .. }));
    }

    #[test]
    fn test_rejects_bad_window_and_tick() {
        let err = Settings::from_json(r#"{ "window": { "width": 0 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "window", .. }));
        let err = Settings::from_json(r#"{ "window": { "tick_ms": 0 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "window.tick_ms", .. }));
    }

    #[test]
    fn test_rejects_zero_substeps() {
        let err = Settings::from_json(r#"{ "window": { "max_substeps": 0 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "window.max_substeps", .. }));
        assert!(Settings::from_json(r#"{ "window": { "max_substeps": 1 } }"#).is_ok());
    }

    #[test]
    fn test_rejects_oversized_window() {
        let err = Settings::from_json(r#"{ "window": { "width": 70000, "height": 70000 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "window", .. }));
        let ok = Settings::from_json(r#"{ "window": { "width": 8192, "height": 8192 } }"#);
        assert!(ok.is_ok());
    }

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("beyond-death-{}-{name}", std::process::id()));
        fs::write(&path, contents).expect("write temp settings");
        path
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        assert_eq!(Settings::load_from(None), Settings::default());
    }

    #[test]
    fn test_load_falls_back_on_bad_file() {
        assert_eq!(Settings::load_from(Some("/nonexistent/beyond-death.json")), Settings::default());

        let bad = write_temp("bad.json", r#"{ "window": { "max_substeps": 0 } }"#);
        assert_eq!(Settings::load_from(bad.to_str()), Settings::default());
        let _ = fs::remove_file(&bad);

        let garbage = write_temp("garbage.json", "not json");
        assert_eq!(Settings::load_from(garbage.to_str()), Settings::default());
        let _ = fs::remove_file(&garbage);
    }

    #[test]
    fn test_load_reads_valid_file() {
        let good = write_temp("good.json", r#"{ "render": { "shade_range": 5.0 } }"#);
        let s = Settings::load_from(good.to_str());
        let _ = fs::remove_file(&good);
        assert_eq!(s.render.shade_range, 5.0);
        assert_eq!(s.window, WindowSettings::default());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::from_file("/nonexistent/beyond-death.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn test_round_trips_through_json() {
        let s = Settings::default();
        let json = serde_json::to_string(&s).expect("serialize");
        assert_eq!(Settings::from_json(&json).expect("parse"), s);
    }
}
