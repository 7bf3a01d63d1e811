//! Scene configuration: sphere geometry, material, lighting, camera.

use serde::{Deserialize, Serialize};

/// Everything that goes into the 3D scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub sphere: SphereConfig,
    pub light: LightConfig,
    pub camera: CameraConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            sphere: SphereConfig::default(),
            light: LightConfig::default(),
            camera: CameraConfig::default(),
        }
    }
}

/// Sphere geometry and material.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    pub radius: f32,
    /// Longitudinal segment count (meridians).
    pub width_segments: u32,
    /// Latitudinal segment count (parallels).
    pub height_segments: u32,
    /// Base material color as a hex string.
    pub color: String,
    /// Material roughness in [0, 1]. Lower is shinier.
    pub roughness: f32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: 3.0,
            width_segments: 64,
            height_segments: 64,
            color: "#00ff83".into(),
            roughness: 0.5,
        }
    }
}

/// Single point light.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    /// World-space position.
    pub position: [f32; 3],
    /// Physical-style intensity; attenuated by squared distance.
    pub intensity: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 10.0, 10.0],
            intensity: 125.0,
        }
    }
}

/// Perspective camera parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    /// Distance from the orbit target along +Z at rest.
    pub distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: 45.0,
            near: 0.1,
            far: 100.0,
            distance: 20.0,
        }
    }
}
