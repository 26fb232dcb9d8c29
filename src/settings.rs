//! Run settings
//!
//! Loaded from an optional JSON file; every field has a default, so a file
//! only needs to name what it changes. Defaults reproduce the reference run.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{FRAME_DELAY_MS, GRID_ROWS};
use crate::error::{Error, Result};
use crate::sim::SimParams;

/// How each step is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// ASCII room redrawn in the terminal
    #[default]
    Ascii,
    /// One JSON object per step on stdout
    Json,
    /// Steps reported through the logger only
    Log,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Ascii => "ascii",
            RenderMode::Json => "json",
            RenderMode::Log => "log",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ascii" | "terminal" => Some(RenderMode::Ascii),
            "json" | "jsonl" => Some(RenderMode::Json),
            "log" => Some(RenderMode::Log),
            _ => None,
        }
    }
}

/// Settings for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub render_mode: RenderMode,

    // === Display ===
    /// Delay between ASCII frames
    pub frame_delay_ms: u64,
    /// Rows drawn above the floor
    pub grid_rows: usize,
    /// Clear the terminal before each frame
    pub clear_screen: bool,

    /// Optional cap on steps, for parameter sets that may never spend the bounce budget
    pub max_steps: Option<u64>,

    /// Room and mass parameters
    pub physics: SimParams,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            render_mode: RenderMode::Ascii,
            frame_delay_ms: FRAME_DELAY_MS,
            grid_rows: GRID_ROWS,
            clear_screen: true,
            max_steps: None,
            physics: SimParams::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_rows == 0 {
            return Err(Error::InvalidParam("grid_rows must be > 0".to_string()));
        }
        if self.max_steps == Some(0) {
            return Err(Error::InvalidParam("max_steps must be > 0 when set".to_string()));
        }
        self.physics.validate()
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_mode_names() {
        for mode in [RenderMode::Ascii, RenderMode::Json, RenderMode::Log] {
            assert_eq!(RenderMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(RenderMode::from_str("JSONL"), Some(RenderMode::Json));
        assert_eq!(RenderMode::from_str("gif"), None);
    }

    #[test]
    fn test_empty_json_gives_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.frame_delay(), Duration::from_millis(30));
    }

    #[test]
    fn test_partial_physics_override() {
        let settings = Settings::from_json(
            r#"{ "render_mode": "json", "physics": { "max_bounces": 5, "initial_velocity": [3.0, 4.0] } }"#,
        )
        .unwrap();
        assert_eq!(settings.render_mode, RenderMode::Json);
        assert_eq!(settings.physics.max_bounces, 5);
        assert_eq!(settings.physics.initial_velocity.x, 3.0);
        assert_eq!(settings.physics.gravity, 9.81);
        assert_eq!(settings.grid_rows, 10);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            Settings::from_json(r#"{ "grid_rows": 0 }"#),
            Err(Error::InvalidParam(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "physics": { "dt": -0.1 } }"#),
            Err(Error::InvalidParam(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "render_mode": 7 }"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            max_steps: Some(1000),
            clear_screen: false,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = Settings::load("/nonexistent/bounce-room/settings.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
