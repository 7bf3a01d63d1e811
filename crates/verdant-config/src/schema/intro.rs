//! Entrance animation configuration.

use serde::{Deserialize, Serialize};

/// Startup timeline: sphere scale-in, then nav fade, then title fade.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroConfig {
    pub enabled: bool,
    /// Seconds per timeline step.
    pub step_duration: f32,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            step_duration: 1.0,
        }
    }
}
