//! Optional JSON configuration for the demo window and texture.
//!
//! Every field has a default so an empty `{}` file (or no file at all) is a
//! fully working configuration. A file that exists but fails to parse or
//! validate is a hard error; silently ignoring a typo would be worse than
//! refusing to start.

use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct DemoConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Path of the PNG drawn on the quad.
    #[serde(default = "default_texture")]
    pub texture: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            texture: default_texture(),
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<DemoConfig, String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;
    let config: DemoConfig = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse config JSON {}: {e}", path.display()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Load the config if the file exists; fall back to defaults when it doesn't.
pub fn load_config_or_default(path: &Path) -> Result<DemoConfig, String> {
    if !path.exists() {
        log::info!(
            "No config at '{}', using built-in defaults",
            path.display()
        );
        return Ok(DemoConfig::default());
    }
    load_config_from_path(path)
}

fn validate_config(config: &DemoConfig) -> Result<(), String> {
    if config.width == 0 || config.height == 0 {
        return Err(format!(
            "Config validation failed: window size {}x{} must be non-zero",
            config.width, config.height
        ));
    }
    if config.texture.is_empty() {
        return Err("Config validation failed: texture path is empty".to_string());
    }
    Ok(())
}

fn default_title() -> String {
    "Quadwrap".to_string()
}

const fn default_width() -> u32 {
    800
}

const fn default_height() -> u32 {
    600
}

fn default_texture() -> String {
    "assets/textures/bob.png".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config: DemoConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.title, "Quadwrap");
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.texture, "assets/textures/bob.png");
    }

    #[test]
    fn partial_config_overrides_only_named_fields() {
        let config: DemoConfig =
            serde_json::from_str(r#"{"width": 1280, "texture": "assets/textures/other.png"}"#)
                .unwrap();
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 600);
        assert_eq!(config.texture, "assets/textures/other.png");
    }

    #[test]
    fn zero_size_fails_validation() {
        let config: DemoConfig = serde_json::from_str(r#"{"width": 0}"#).unwrap();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn empty_texture_path_fails_validation() {
        let config: DemoConfig = serde_json::from_str(r#"{"texture": ""}"#).unwrap();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config =
            load_config_or_default(Path::new("definitely/does/not/exist.json")).unwrap();
        assert_eq!(config.width, DemoConfig::default().width);
    }

    #[test]
    fn malformed_json_is_an_error() {
        // Parse failure path, exercised without touching the filesystem.
        let result: Result<DemoConfig, _> = serde_json::from_str("{not json");
        assert!(result.is_err());
    }
}
