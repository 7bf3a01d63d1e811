//! Text overlay configuration: nav bar and centered title.

use serde::{Deserialize, Serialize};

/// 2D text drawn over the scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub enabled: bool,
    /// Brand text on the left of the nav row.
    pub brand: String,
    /// Link labels on the right of the nav row.
    pub links: Vec<String>,
    /// Headline under the nav.
    pub title: String,
    pub nav_font_size: f32,
    pub title_font_size: f32,
    /// Text color as a hex string.
    pub color: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            brand: "Sphere".into(),
            links: vec!["Explore".into(), "Create".into()],
            title: "Give it a spin".into(),
            nav_font_size: 18.0,
            title_font_size: 48.0,
            color: "#ffffff".into(),
        }
    }
}
