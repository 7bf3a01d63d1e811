//! TOML config file loading and creation.

use crate::schema::VerdantConfig;
use crate::validation;
use std::path::Path;
use tracing::{info, warn};
use verdant_common::ConfigError;

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the default config is returned.
pub fn load_from_path(path: &Path) -> Result<VerdantConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
    })?;

    let config: VerdantConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    // Validate and warn on errors, but still return a usable config
    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
        warn!("falling back to default config");
        return Ok(VerdantConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/verdant/config.toml`
/// On Linux: `~/.config/verdant/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<VerdantConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(VerdantConfig::default());
    }

    load_from_path(&path)
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        ConfigError::ParseError("could not determine config directory".into())
    })?;
    Ok(config_dir.join("verdant").join("config.toml"))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let content = default_config_toml();

    std::fs::write(path, content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

/// Generate the default TOML config content with comments.
fn default_config_toml() -> String {
    r##"# Verdant Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
title = "Verdant"
# width = 1280
# height = 800
# pixel_ratio = 2.0      # 1.0-4.0, offscreen supersampling factor
# background = "#000000"

[scene.sphere]
# radius = 3.0
# width_segments = 64    # 3-256
# height_segments = 64   # 2-256
# color = "#00ff83"
# roughness = 0.5        # 0.0-1.0

[scene.light]
# position = [0.0, 10.0, 10.0]
# intensity = 125.0

[scene.camera]
# fov_deg = 45.0         # 10-120
# near = 0.1
# far = 100.0
# distance = 20.0

[controls]
# auto_rotate_speed = 5.0  # 2.0 = one orbit per 30s
# damping = 0.05           # 0.0-1.0
# rotate_speed = 1.0
# enable_zoom = false
# enable_pan = false

[interaction]
# fixed_blue = 150
# tween_duration = 1.0   # seconds

[intro]
# enabled = true
# step_duration = 1.0    # seconds per timeline step

[overlay]
# enabled = true
# brand = "Sphere"
# links = ["Explore", "Create"]
# title = "Give it a spin"
# nav_font_size = 18.0
# title_font_size = 48.0
# color = "#ffffff"
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_nonexistent_returns_file_not_found() {
        let result = load_from_path(Path::new("/tmp/nonexistent_verdant_config.toml"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_valid_partial_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r##"
[window]
title = "Orbit Demo"
width = 640

[scene.sphere]
color = "#ff0000"
"##,
        )
        .unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.window.title, "Orbit Demo");
        assert_eq!(config.window.width, 640);
        assert_eq!(config.scene.sphere.color, "#ff0000");
        // Defaults preserved
        assert_eq!(config.window.height, 800);
        assert_eq!(config.scene.sphere.radius, 3.0);
        assert_eq!(config.interaction.fixed_blue, 150);
    }

    #[test]
    fn load_invalid_toml_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        let result = load_from_path(&path);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_config_with_invalid_values_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[scene.sphere]
roughness = 7.0
"#,
        )
        .unwrap();

        let config = load_from_path(&path).unwrap();
        // Should fall back to default since validation fails
        assert_eq!(config.scene.sphere.roughness, 0.5);
    }

    #[test]
    fn create_and_load_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("verdant").join("config.toml");

        create_default_config(&path).unwrap();
        assert!(path.exists());

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.window.title, "Verdant");
        assert_eq!(config.scene.sphere.color, "#00ff83");
    }

    #[test]
    fn default_config_toml_is_valid() {
        let content = default_config_toml();
        let config: VerdantConfig = toml::from_str(&content).unwrap();
        assert_eq!(config.window.title, "Verdant");
    }

    #[test]
    fn default_config_path_is_reasonable() {
        // This may not work in all CI environments, but should work locally
        if let Ok(path) = default_config_path() {
            let path_str = path.to_string_lossy();
            assert!(path_str.contains("verdant"));
            assert!(path_str.ends_with("config.toml"));
        }
    }
}
