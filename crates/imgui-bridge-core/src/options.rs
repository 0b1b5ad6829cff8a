//! Configuration options for the bridge.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, Result};

/// Configuration options for an overlay and its input bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeOptions {
    /// Whether the overlay installs an input bridge with the host.
    pub handle_input: bool,

    /// Pre-processor slot requested from the host (0 = front of the queue).
    pub input_priority: i32,

    /// Analog magnitude above which an analog key counts as pressed.
    pub analog_deadzone: f32,

    /// Whether consecutive commands with identical render state are merged.
    pub merge_batches: bool,

    /// Initial capacity of the per-list command scratch buffers.
    pub command_capacity: usize,

    /// Whether the library's requested cursor shape is applied to the host cursor.
    pub update_mouse_cursor: bool,
}

impl Default for BridgeOptions {
    fn default() -> Self {
        Self {
            handle_input: true,
            input_priority: 0,
            analog_deadzone: 0.1,
            merge_batches: true,
            command_capacity: 300,
            update_mouse_cursor: false,
        }
    }
}

impl BridgeOptions {
    /// Parses options from a JSON string. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let options = Self::from_json_str(&contents)?;
        log::debug!("loaded bridge options from {}", path.display());
        Ok(options)
    }

    /// Saves options as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.analog_deadzone.is_finite() || self.analog_deadzone < 0.0 {
            return Err(BridgeError::InvalidOption {
                name: "analog_deadzone",
                reason: format!("expected a finite value >= 0, got {}", self.analog_deadzone),
            });
        }
        if self.analog_deadzone >= 1.0 {
            return Err(BridgeError::InvalidOption {
                name: "analog_deadzone",
                reason: format!("deadzone {} would never register input", self.analog_deadzone),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = BridgeOptions::default();
        assert!(options.handle_input);
        assert_eq!(options.input_priority, 0);
        assert!((options.analog_deadzone - 0.1).abs() < f32::EPSILON);
        assert!(options.merge_batches);
        assert_eq!(options.command_capacity, 300);
        assert!(!options.update_mouse_cursor);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options = BridgeOptions::from_json_str(r#"{ "handle_input": false }"#).unwrap();
        assert!(!options.handle_input);
        assert!(options.merge_batches);
        assert_eq!(options.command_capacity, 300);
    }

    #[test]
    fn test_invalid_deadzone_rejected() {
        let err = BridgeOptions::from_json_str(r#"{ "analog_deadzone": -0.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::InvalidOption {
                name: "analog_deadzone",
                ..
            }
        ));

        let err = BridgeOptions::from_json_str(r#"{ "analog_deadzone": 1.5 }"#).unwrap_err();
        assert!(matches!(err, BridgeError::InvalidOption { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = BridgeOptions::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, BridgeError::JsonError(_)));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!(
            "imgui_bridge_options_{}.json",
            std::process::id()
        ));
        let options = BridgeOptions {
            input_priority: 3,
            update_mouse_cursor: true,
            ..BridgeOptions::default()
        };
        options.save(&path).unwrap();
        let loaded = BridgeOptions::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, options);
    }

    #[test]
    fn test_load_missing_file() {
        let err = BridgeOptions::load("/nonexistent/imgui_bridge.json").unwrap_err();
        assert!(matches!(err, BridgeError::IoError(_)));
    }
}
