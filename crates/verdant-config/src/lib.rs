//! Verdant configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use verdant_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod loader;
pub mod schema;
pub mod validation;

// Re-export core types for convenience
pub use loader::{default_config_path, load_from_path};
pub use schema::{
    CameraConfig, ControlsConfig, InteractionConfig, IntroConfig, LightConfig, OverlayConfig,
    SceneConfig, SphereConfig, VerdantConfig, WindowConfig, CONFIG_SCHEMA_VERSION,
};

use verdant_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<VerdantConfig, ConfigError> {
    let config = loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &VerdantConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = VerdantConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"scene\""));
        assert!(json.contains("\"controls\""));
        assert!(json.contains("\"interaction\""));
        assert!(json.contains("\"intro\""));
        assert!(json.contains("\"overlay\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = VerdantConfig::default();
        let json = config_to_json(&config);
        let parsed: VerdantConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.window.title, "Verdant");
        assert_eq!(parsed.scene.sphere.color, "#00ff83");
        assert_eq!(parsed.controls.auto_rotate_speed, 5.0);
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = VerdantConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: VerdantConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.scene.camera.distance, 20.0);
        assert_eq!(parsed.overlay.title, "Give it a spin");
    }
}
