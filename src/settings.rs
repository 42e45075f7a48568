//! Animation settings
//!
//! Defaults reproduce the stock animation. A JSON file can override any field.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::transition::LagSmoothing;

/// Errors from loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Tunable animation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of pentagons
    pub entity_count: usize,
    /// RNG seed; `None` picks a fresh one per run
    pub seed: Option<u64>,

    // === Lag smoothing ===
    /// Sample gaps at least this long (ms) are treated as a stall
    pub lag_threshold_ms: f64,
    /// A stall is perceived as this many ms
    pub lag_smooth_ms: f64,

    // === Transitions ===
    pub min_duration_ms: f64,
    pub max_duration_ms: f64,
    pub min_opacity: f64,
    pub max_opacity: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            entity_count: PENTAGON_COUNT,
            seed: None,

            lag_threshold_ms: LAG_THRESHOLD_MS,
            lag_smooth_ms: LAG_SMOOTH_MS,

            min_duration_ms: MIN_DURATION_MS,
            max_duration_ms: MAX_DURATION_MS,
            min_opacity: MIN_OPACITY,
            max_opacity: MAX_OPACITY,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and validate a JSON settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `path`, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("{err} ({}), using default settings", path.display());
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |msg: String| Err(SettingsError::Invalid(msg));

        if self.entity_count == 0 {
            return invalid("entity_count must be at least 1".into());
        }
        if !(self.lag_threshold_ms >= 0.0 && self.lag_smooth_ms >= 0.0) {
            return invalid("lag values must be non-negative".into());
        }
        if self.lag_smooth_ms > self.lag_threshold_ms {
            return invalid(format!(
                "lag_smooth_ms ({}) exceeds lag_threshold_ms ({})",
                self.lag_smooth_ms, self.lag_threshold_ms
            ));
        }
        if !(self.min_duration_ms >= 0.0 && self.min_duration_ms <= self.max_duration_ms) {
            return invalid(format!(
                "duration range {}..{} is empty or negative",
                self.min_duration_ms, self.max_duration_ms
            ));
        }
        let opacity_ok = |o: f64| o > 0.0 && o <= 1.0;
        if !(opacity_ok(self.min_opacity)
            && opacity_ok(self.max_opacity)
            && self.min_opacity <= self.max_opacity)
        {
            return invalid(format!(
                "opacity range {}..{} must lie in (0, 1]",
                self.min_opacity, self.max_opacity
            ));
        }
        Ok(())
    }

    pub fn lag_smoothing(&self) -> LagSmoothing {
        LagSmoothing {
            threshold_ms: self.lag_threshold_ms,
            smooth_ms: self.lag_smooth_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        let s = Settings::default();
        assert!(s.validate().is_ok());
        assert_eq!(s.entity_count, 18);
        assert_eq!(s.lag_smoothing(), LagSmoothing::default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{ "entity_count": 5, "seed": 42 }"#).unwrap();
        assert_eq!(s.entity_count, 5);
        assert_eq!(s.seed, Some(42));
        assert_eq!(s.max_duration_ms, MAX_DURATION_MS);
    }

    #[test]
    fn test_json_roundtrip() {
        let s = Settings {
            seed: Some(7),
            ..Settings::default()
        };
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_rejects_bad_values() {
        for json in [
            r#"{ "entity_count": 0 }"#,
            r#"{ "lag_smooth_ms": 600 }"#,
            r#"{ "lag_threshold_ms": -1 }"#,
            r#"{ "min_duration_ms": 70000 }"#,
            r#"{ "min_opacity": 0 }"#,
            r#"{ "max_opacity": 1.5 }"#,
        ] {
            assert!(
                matches!(Settings::from_json(json), Err(SettingsError::Invalid(_))),
                "accepted {json}"
            );
        }
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(Settings::from_json("{"), Err(SettingsError::Parse(_))));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let s = Settings::load_or_default("/nonexistent/pentagons.json");
        assert_eq!(s, Settings::default());
        assert!(matches!(
            Settings::load("/nonexistent/pentagons.json"),
            Err(SettingsError::Io(_))
        ));
    }
}
