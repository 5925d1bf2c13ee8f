//! Startup settings read from an optional JSON file.
//!
//! Every field is optional; missing fields take the built-in defaults and all
//! values go through the same clamps the interactive keys use.
//!
//! ```json
//! {
//!   "tuning": { "far_plane": 800, "horizontal_divisions": 2 },
//!   "camera": { "x": 100, "y": 300, "height": 120 }
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{CameraState, RenderTuning};
use crate::types::{
    DEFAULT_FAR_PLANE, DEFAULT_HORIZONTAL_DIVISIONS, DEFAULT_SCALE_FACTOR, DEFAULT_STEP_GROWTH,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TuningSettings {
    pub far_plane: f32,
    pub scale_factor: f32,
    pub step_growth: f32,
    pub horizontal_divisions: u8,
}

impl Default for TuningSettings {
    fn default() -> Self {
        Self {
            far_plane: DEFAULT_FAR_PLANE,
            scale_factor: DEFAULT_SCALE_FACTOR,
            step_growth: DEFAULT_STEP_GROWTH,
            horizontal_divisions: DEFAULT_HORIZONTAL_DIVISIONS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraSettings {
    pub x: f32,
    pub y: f32,
    pub height: f32,
    pub yaw: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        let cam = CameraState::default();
        Self {
            x: cam.x,
            y: cam.y,
            height: cam.height(),
            yaw: cam.yaw,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub tuning: TuningSettings,
    pub camera: CameraSettings,
}

impl Settings {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn render_tuning(&self) -> RenderTuning {
        let t = &self.tuning;
        RenderTuning::new(t.far_plane, t.scale_factor, t.step_growth, t.horizontal_divisions)
    }

    pub fn camera_state(&self) -> CameraState {
        let c = &self.camera;
        CameraState::at(c.x, c.y, c.height, c.yaw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let s = Settings::from_json_str("{}").unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.render_tuning(), RenderTuning::default());
        assert_eq!(s.camera_state(), CameraState::default());
    }

    #[test]
    fn partial_sections_merge_with_defaults() {
        let s = Settings::from_json_str(r#"{"tuning": {"horizontal_divisions": 3}}"#).unwrap();
        let t = s.render_tuning();
        assert_eq!(t.horizontal_divisions(), 3);
        assert_eq!(t.far_plane(), DEFAULT_FAR_PLANE);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let s = Settings::from_json_str(
            r#"{"tuning": {"scale_factor": -4, "step_growth": 0}, "camera": {"height": 900}}"#,
        )
        .unwrap();
        assert_eq!(s.render_tuning().scale_factor(), 10.0);
        assert_eq!(s.render_tuning().step_growth(), 0.005);
        assert_eq!(s.camera_state().height(), 300.0);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(Settings::from_json_str(r#"{"tunning": {}}"#).is_err());
    }
}
