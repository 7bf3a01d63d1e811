//! Configuration schema.
//!
//! Every section derives `Deserialize` with `#[serde(default)]` so a partial
//! TOML file only overrides the fields it names.

mod controls;
mod interaction;
mod intro;
mod overlay;
mod scene;
mod window;

pub use controls::ControlsConfig;
pub use interaction::InteractionConfig;
pub use intro::IntroConfig;
pub use overlay::OverlayConfig;
pub use scene::{CameraConfig, LightConfig, SceneConfig, SphereConfig};
pub use window::WindowConfig;

use serde::{Deserialize, Serialize};

/// Bumped when a released schema change breaks older files.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VerdantConfig {
    pub window: WindowConfig,
    pub scene: SceneConfig,
    pub controls: ControlsConfig,
    pub interaction: InteractionConfig,
    pub intro: IntroConfig,
    pub overlay: OverlayConfig,
}
