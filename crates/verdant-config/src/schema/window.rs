//! Window and surface configuration types.

use serde::{Deserialize, Serialize};

/// Window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels.
    pub width: u32,
    /// Initial inner height in logical pixels.
    pub height: u32,
    /// Supersampling factor for the sphere pass. The original page pinned
    /// its renderer pixel ratio at 2; here the sphere renders offscreen at
    /// `pixel_ratio ×` the surface size and is downsampled on composite.
    pub pixel_ratio: f64,
    /// Surface clear color behind the sphere.
    pub background: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Verdant".into(),
            width: 1280,
            height: 800,
            pixel_ratio: 2.0,
            background: "#000000".into(),
        }
    }
}
