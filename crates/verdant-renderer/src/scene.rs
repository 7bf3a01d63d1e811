//! Live scene state: material color, light, and geometry parameters.

use verdant_common::{srgb_to_linear, Color};
use verdant_config::SceneConfig;

/// The mutable scene the frame loop renders.
///
/// The sphere color is kept as sRGB components in 0..1 because that is the
/// space the pointer interaction and the color tween operate in; it is
/// converted to linear only when uniforms are built.
#[derive(Debug, Clone)]
pub struct Scene {
    pub sphere_color: [f32; 3],
    pub roughness: f32,
    pub light_position: [f32; 3],
    pub light_intensity: f32,
}

impl Scene {
    pub fn from_config(config: &SceneConfig) -> Self {
        let color = Color::from_hex(&config.sphere.color).unwrap_or_else(|| {
            tracing::warn!(
                "invalid sphere color {:?}, using default",
                config.sphere.color
            );
            Color::from_rgb(0, 255, 131)
        });

        Self {
            sphere_color: color.to_srgb_rgb(),
            roughness: config.sphere.roughness.clamp(0.0, 1.0),
            light_position: config.light.position,
            light_intensity: config.light.intensity,
        }
    }

    pub fn set_sphere_color(&mut self, srgb: [f32; 3]) {
        self.sphere_color = srgb;
    }

    /// Sphere color converted to linear RGB for shading.
    pub fn linear_sphere_color(&self) -> [f32; 3] {
        [
            srgb_to_linear(self.sphere_color[0]),
            srgb_to_linear(self.sphere_color[1]),
            srgb_to_linear(self.sphere_color[2]),
        ]
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_parses_the_default_green() {
        let scene = Scene::from_config(&SceneConfig::default());
        assert!((scene.sphere_color[0]).abs() < 1e-6);
        assert!((scene.sphere_color[1] - 1.0).abs() < 1e-6);
        assert!((scene.sphere_color[2] - 131.0 / 255.0).abs() < 1e-6);
        assert_eq!(scene.light_position, [0.0, 10.0, 10.0]);
        assert_eq!(scene.light_intensity, 125.0);
    }

    #[test]
    fn invalid_hex_falls_back_to_default_green() {
        let mut config = SceneConfig::default();
        config.sphere.color = "not-a-color".into();
        let scene = Scene::from_config(&config);
        assert!((scene.sphere_color[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn linear_color_darkens_midtones() {
        let mut scene = Scene::from_config(&SceneConfig::default());
        scene.set_sphere_color([0.5, 0.5, 0.5]);
        let linear = scene.linear_sphere_color();
        for c in linear {
            assert!(c < 0.5 && c > 0.0);
        }
    }

    #[test]
    fn linear_color_preserves_black_and_white() {
        let mut scene = Scene::from_config(&SceneConfig::default());
        scene.set_sphere_color([0.0, 1.0, 0.0]);
        let linear = scene.linear_sphere_color();
        assert_eq!(linear[0], 0.0);
        assert!((linear[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn roughness_is_clamped() {
        let mut config = SceneConfig::default();
        config.sphere.roughness = 2.0;
        let scene = Scene::from_config(&config);
        assert_eq!(scene.roughness, 1.0);
    }
}
