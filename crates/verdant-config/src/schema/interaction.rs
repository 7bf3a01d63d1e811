//! Pointer-driven color interaction configuration.

use serde::{Deserialize, Serialize};

/// Press-and-drag color mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Blue channel is held constant while red/green track the pointer.
    pub fixed_blue: u8,
    /// Seconds for the material color to glide to a new target.
    pub tween_duration: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            fixed_blue: 150,
            tween_duration: 1.0,
        }
    }
}
