//! VerdantApp struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use verdant_config::VerdantConfig;
use verdant_renderer::{ColorTween, FrameTimer, IntroTimeline, OrbitControls, RenderState, Scene};

use super::interaction::PointerState;

/// Top-level application state.
pub struct VerdantApp {
    pub(super) config: VerdantConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    // Interaction
    pub(super) controls: OrbitControls,
    pub(super) pointer: PointerState,

    // Scene and animation
    pub(super) scene: Scene,
    pub(super) color_tween: ColorTween,
    pub(super) intro: IntroTimeline,

    // Frame pacing
    pub(super) frame_timer: FrameTimer,
    pub(super) frames_rendered: u64,

    // Whether the app should exit
    pub(super) should_exit: bool,
}

impl VerdantApp {
    pub fn new(config: VerdantConfig) -> Self {
        let controls = OrbitControls::from_config(&config.controls);
        let scene = Scene::from_config(&config.scene);
        let color_tween =
            ColorTween::resting(scene.sphere_color, config.interaction.tween_duration);
        let intro = if config.intro.enabled {
            IntroTimeline::new(config.intro.step_duration)
        } else {
            IntroTimeline::completed()
        };

        Self {
            config,
            window: None,
            render_state: None,
            controls,
            pointer: PointerState::default(),
            scene,
            color_tween,
            intro,
            frame_timer: FrameTimer::new(),
            frames_rendered: 0,
            should_exit: false,
        }
    }

    /// Request a clean shutdown; the event loop exits on the next pass.
    pub(super) fn stop(&mut self) {
        self.should_exit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_starts_with_intro_pending() {
        let app = VerdantApp::new(VerdantConfig::default());
        assert!(!app.intro.finished());
        assert_eq!(app.intro.sphere_scale(), 0.0);
        assert!(!app.should_exit);
    }

    #[test]
    fn disabling_the_intro_starts_fully_visible() {
        let mut config = VerdantConfig::default();
        config.intro.enabled = false;
        let app = VerdantApp::new(config);
        assert!(app.intro.finished());
        assert_eq!(app.intro.sphere_scale(), 1.0);
        assert_eq!(app.intro.title_opacity(), 1.0);
    }

    #[test]
    fn color_tween_rests_at_the_configured_color() {
        let app = VerdantApp::new(VerdantConfig::default());
        assert!(app.color_tween.finished());
        assert_eq!(app.color_tween.value(), app.scene.sphere_color);
    }
}
