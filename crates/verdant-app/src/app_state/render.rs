//! Per-frame animation advance and rendering.

use verdant_renderer::FrameParams;

use super::core::VerdantApp;

/// Frames between FPS log lines.
const FPS_LOG_INTERVAL: u64 = 300;

impl VerdantApp {
    /// Advance all animation state by one frame's worth of time, then
    /// render it.
    pub(super) fn advance_and_render(&mut self) {
        let dt = self.frame_timer.tick().as_secs_f32();

        self.controls.update(dt);
        self.intro.advance(dt);
        self.color_tween.advance(dt);
        self.scene.set_sphere_color(self.color_tween.value());

        let params = FrameParams {
            yaw: self.controls.yaw,
            pitch: self.controls.pitch,
            mesh_scale: self.intro.sphere_scale(),
            nav_opacity: self.intro.nav_opacity(),
            title_opacity: self.intro.title_opacity(),
        };

        let Some(ref mut rs) = self.render_state else {
            return;
        };

        let mut fatal = false;
        match rs.render_frame(&self.scene, &params) {
            Ok(()) => {}
            Err(e) if e.surface_needs_reconfigure() => {
                tracing::warn!("Surface lost, reconfiguring");
                rs.gpu.reconfigure();
            }
            Err(e) if e.surface_out_of_memory() => {
                tracing::error!("Surface out of memory, exiting");
                fatal = true;
            }
            Err(e) => {
                tracing::error!("Render error: {e}");
            }
        }
        if fatal {
            self.stop();
        }

        self.frames_rendered += 1;
        if self.frames_rendered % FPS_LOG_INTERVAL == 0 {
            tracing::debug!(
                "fps: {:.1} ({:.2} ms/frame)",
                self.frame_timer.fps(),
                self.frame_timer.frame_time_ms()
            );
        }
    }
}
