//! Orbit control configuration.

use serde::{Deserialize, Serialize};

/// Orbit behavior around the sphere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Idle spin speed in orbits-per-minute style units: a value of 2.0
    /// completes one revolution every 30 seconds.
    pub auto_rotate_speed: f32,
    /// Exponential damping factor applied to drag velocity each frame.
    pub damping: f32,
    /// Multiplier on drag-induced rotation.
    pub rotate_speed: f32,
    pub enable_zoom: bool,
    pub enable_pan: bool,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            auto_rotate_speed: 5.0,
            damping: 0.05,
            rotate_speed: 1.0,
            enable_zoom: false,
            enable_pan: false,
        }
    }
}
