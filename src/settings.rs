//! Game settings
//!
//! Loaded from an optional JSON file; every field has a default so partial
//! files are fine.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for setup and respawn RNG (`None` = random run)
    pub seed: Option<u64>,
    /// Target frames per second for real backends
    pub frame_rate: u32,
    /// Caught actors respawn at x in [0, respawn_span)
    pub respawn_span: i32,

    // === Scoring ===
    pub artifact_points: i32,
    pub bomb_points: i32,

    // === Population ===
    pub artifact_count: usize,
    pub bomb_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            frame_rate: DEFAULT_FRAME_RATE,
            respawn_span: RESPAWN_SPAN,
            artifact_points: ARTIFACT_POINTS,
            bomb_points: BOMB_POINTS,
            artifact_count: 40,
            bomb_count: 20,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    /// Load settings from `path`, falling back to defaults on any problem
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values that would make the game loop misbehave
    pub fn sanitized(mut self) -> Self {
        self.frame_rate = self.frame_rate.max(1);
        self.respawn_span = self.respawn_span.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.artifact_points, 100);
        assert_eq!(settings.bomb_points, -50);
        assert_eq!(settings.respawn_span, 600);
        assert_eq!(settings.frame_rate, 12);
        assert!(settings.seed.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "bomb_points": -75 }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.bomb_points, -75);
        assert_eq!(settings.artifact_count, 40);
    }

    #[test]
    fn test_sanitized_clamps_degenerate_values() {
        let settings = Settings::from_json(r#"{ "frame_rate": 0, "respawn_span": -3 }"#).unwrap();
        assert_eq!(settings.frame_rate, 1);
        assert_eq!(settings.respawn_span, 1);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ seed: }").is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load(Some(Path::new("/nonexistent/catcher.json")));
        assert_eq!(settings, Settings::default());
        assert_eq!(Settings::load(None), Settings::default());
    }
}
