//! Full configuration validation.
//!
//! Validates all numeric ranges and color formats.

use crate::schema::VerdantConfig;
use verdant_common::{Color, ConfigError};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &VerdantConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    // Window constraints
    validate_range(&mut errors, "window.width", config.window.width, 100, 8192);
    validate_range(&mut errors, "window.height", config.window.height, 100, 8192);
    validate_range_f64(
        &mut errors,
        "window.pixel_ratio",
        config.window.pixel_ratio,
        1.0,
        4.0,
    );
    validate_hex_color(&mut errors, "window.background", &config.window.background);

    // Sphere constraints
    validate_range_f32(&mut errors, "scene.sphere.radius", config.scene.sphere.radius, 0.01, 50.0);
    validate_range(
        &mut errors,
        "scene.sphere.width_segments",
        config.scene.sphere.width_segments,
        3,
        256,
    );
    validate_range(
        &mut errors,
        "scene.sphere.height_segments",
        config.scene.sphere.height_segments,
        2,
        256,
    );
    validate_range_f32(
        &mut errors,
        "scene.sphere.roughness",
        config.scene.sphere.roughness,
        0.0,
        1.0,
    );
    validate_hex_color(&mut errors, "scene.sphere.color", &config.scene.sphere.color);

    // Light constraints
    validate_range_f32(
        &mut errors,
        "scene.light.intensity",
        config.scene.light.intensity,
        0.0,
        10000.0,
    );

    // Camera constraints
    validate_range_f32(&mut errors, "scene.camera.fov_deg", config.scene.camera.fov_deg, 10.0, 120.0);
    validate_range_f32(&mut errors, "scene.camera.near", config.scene.camera.near, 0.001, 10.0);
    validate_range_f32(&mut errors, "scene.camera.far", config.scene.camera.far, 1.0, 10000.0);
    if config.scene.camera.near >= config.scene.camera.far {
        errors.push(format!(
            "scene.camera.near = {} must be less than scene.camera.far = {}",
            config.scene.camera.near, config.scene.camera.far
        ));
    }
    validate_range_f32(
        &mut errors,
        "scene.camera.distance",
        config.scene.camera.distance,
        0.5,
        1000.0,
    );

    // Controls constraints
    validate_range_f32(
        &mut errors,
        "controls.auto_rotate_speed",
        config.controls.auto_rotate_speed,
        0.0,
        60.0,
    );
    validate_range_f32(&mut errors, "controls.damping", config.controls.damping, 0.0, 1.0);
    validate_range_f32(
        &mut errors,
        "controls.rotate_speed",
        config.controls.rotate_speed,
        0.0,
        10.0,
    );

    // Interaction constraints
    validate_range_f32(
        &mut errors,
        "interaction.tween_duration",
        config.interaction.tween_duration,
        0.0,
        30.0,
    );

    // Intro constraints
    validate_range_f32(
        &mut errors,
        "intro.step_duration",
        config.intro.step_duration,
        0.0,
        30.0,
    );

    // Overlay constraints
    validate_range_f32(
        &mut errors,
        "overlay.nav_font_size",
        config.overlay.nav_font_size,
        6.0,
        72.0,
    );
    validate_range_f32(
        &mut errors,
        "overlay.title_font_size",
        config.overlay.title_font_size,
        6.0,
        200.0,
    );
    validate_hex_color(&mut errors, "overlay.color", &config.overlay.color);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_range_f32(errors: &mut Vec<String>, name: &str, value: f32, min: f32, max: f32) {
    if !value.is_finite() || value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_range_f64(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    if !value.is_finite() || value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_hex_color(errors: &mut Vec<String>, name: &str, value: &str) {
    if Color::from_hex(value).is_none() {
        errors.push(format!("{name} = {value:?} is not a valid hex color"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = VerdantConfig::default();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn catches_roughness_over_one() {
        let mut config = VerdantConfig::default();
        config.scene.sphere.roughness = 1.5;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("scene.sphere.roughness"));
    }

    #[test]
    fn catches_roughness_negative() {
        let mut config = VerdantConfig::default();
        config.scene.sphere.roughness = -0.1;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("scene.sphere.roughness"));
    }

    #[test]
    fn catches_segments_too_few() {
        let mut config = VerdantConfig::default();
        config.scene.sphere.width_segments = 2;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("scene.sphere.width_segments"));
    }

    #[test]
    fn catches_segments_too_many() {
        let mut config = VerdantConfig::default();
        config.scene.sphere.height_segments = 1000;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("scene.sphere.height_segments"));
    }

    #[test]
    fn catches_pixel_ratio_out_of_range() {
        let mut config = VerdantConfig::default();
        config.window.pixel_ratio = 8.0;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("window.pixel_ratio"));
    }

    #[test]
    fn catches_bad_hex_color() {
        let mut config = VerdantConfig::default();
        config.scene.sphere.color = "greenish".into();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("scene.sphere.color"));
    }

    #[test]
    fn catches_damping_out_of_range() {
        let mut config = VerdantConfig::default();
        config.controls.damping = 1.5;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("controls.damping"));
    }

    #[test]
    fn catches_near_not_less_than_far() {
        let mut config = VerdantConfig::default();
        config.scene.camera.near = 5.0;
        config.scene.camera.far = 5.0;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("scene.camera.near"));
    }

    #[test]
    fn catches_nonfinite_values() {
        let mut config = VerdantConfig::default();
        config.scene.camera.fov_deg = f32::NAN;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("scene.camera.fov_deg"));
    }

    #[test]
    fn collects_multiple_errors() {
        let mut config = VerdantConfig::default();
        config.scene.sphere.roughness = 3.0;
        config.controls.damping = -1.0;
        config.window.pixel_ratio = 0.5;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("scene.sphere.roughness"));
        assert!(err.contains("controls.damping"));
        assert!(err.contains("window.pixel_ratio"));
    }
}
