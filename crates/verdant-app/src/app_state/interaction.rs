//! Pointer handling: orbit dragging and press-to-paint color mapping.

use super::core::VerdantApp;

/// Tracked pointer state shared by mouse and touch input.
#[derive(Debug, Default)]
pub(super) struct PointerState {
    /// Last known position in physical pixels.
    pub position: (f64, f64),
    pub pressed: bool,
    /// Touch id currently driving the pointer, if any.
    pub active_touch: Option<u64>,
}

impl VerdantApp {
    /// Begin a drag at the given position.
    pub(super) fn pointer_pressed(&mut self, x: f64, y: f64) {
        self.pointer.position = (x, y);
        self.pointer.pressed = true;
        self.controls.begin_drag();
    }

    /// Track the pointer; while pressed, spin the orbit and retarget the
    /// sphere color from the position.
    pub(super) fn pointer_moved(&mut self, x: f64, y: f64) {
        let (last_x, last_y) = self.pointer.position;
        self.pointer.position = (x, y);

        if !self.pointer.pressed {
            return;
        }

        let (width, height) = self.surface_size();
        self.controls
            .drag((x - last_x) as f32, (y - last_y) as f32, height as f32);

        let rgb = color_for_pointer(x, y, width, height, self.config.interaction.fixed_blue);
        self.color_tween.retarget([
            rgb[0] as f32 / 255.0,
            rgb[1] as f32 / 255.0,
            rgb[2] as f32 / 255.0,
        ]);
    }

    pub(super) fn pointer_released(&mut self) {
        self.pointer.pressed = false;
        self.pointer.active_touch = None;
        self.controls.end_drag();
    }

    fn surface_size(&self) -> (u32, u32) {
        match self.render_state {
            Some(ref rs) => (rs.gpu.size.width, rs.gpu.size.height),
            None => (1, 1),
        }
    }
}

/// Map a pointer position to the sphere's target color.
///
/// Red follows the horizontal axis, green the vertical, blue stays fixed.
/// Positions outside the window are clamped to the edge.
pub(super) fn color_for_pointer(x: f64, y: f64, width: u32, height: u32, fixed_blue: u8) -> [u8; 3] {
    let fx = (x / width.max(1) as f64).clamp(0.0, 1.0);
    let fy = (y / height.max(1) as f64).clamp(0.0, 1.0);
    [
        (fx * 255.0).round() as u8,
        (fy * 255.0).round() as u8,
        fixed_blue,
    ]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_config::VerdantConfig;

    #[test]
    fn center_maps_to_mid_red_and_green() {
        assert_eq!(color_for_pointer(500.0, 250.0, 1000, 500, 150), [128, 128, 150]);
    }

    #[test]
    fn corners_span_the_full_range() {
        assert_eq!(color_for_pointer(0.0, 0.0, 800, 600, 150), [0, 0, 150]);
        assert_eq!(color_for_pointer(800.0, 600.0, 800, 600, 150), [255, 255, 150]);
    }

    #[test]
    fn out_of_window_positions_are_clamped() {
        assert_eq!(color_for_pointer(-50.0, -10.0, 800, 600, 150), [0, 0, 150]);
        assert_eq!(color_for_pointer(5000.0, 9000.0, 800, 600, 150), [255, 255, 150]);
    }

    #[test]
    fn degenerate_window_size_does_not_panic() {
        let c = color_for_pointer(10.0, 10.0, 0, 0, 150);
        assert_eq!(c[2], 150);
    }

    #[test]
    fn blue_channel_comes_from_config() {
        assert_eq!(color_for_pointer(0.0, 0.0, 100, 100, 42)[2], 42);
    }

    #[test]
    fn press_move_release_drives_drag_state() {
        let mut app = VerdantApp::new(VerdantConfig::default());

        app.pointer_pressed(100.0, 100.0);
        assert!(app.controls.is_dragging());

        app.pointer_moved(150.0, 100.0);
        assert_eq!(app.pointer.position, (150.0, 100.0));

        app.pointer_released();
        assert!(!app.controls.is_dragging());
        assert!(!app.pointer.pressed);
    }

    #[test]
    fn moving_while_pressed_retargets_the_color() {
        let mut app = VerdantApp::new(VerdantConfig::default());
        let resting = app.color_tween.target();

        // Unpressed movement leaves the tween alone
        app.pointer_moved(3.0, 4.0);
        assert_eq!(app.color_tween.target(), resting);

        app.pointer_pressed(0.0, 0.0);
        app.pointer_moved(1.0, 1.0);
        let target = app.color_tween.target();
        assert_eq!(target[2], 150.0 / 255.0);
        assert_ne!(target, resting);
    }
}
