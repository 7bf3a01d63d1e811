//! Damped orbit controls.
//!
//! The controls track a yaw/pitch pair that orbits the camera around the
//! origin at a fixed distance. Pointer drags and the idle auto-rotation both
//! feed a pending rotation that is released exponentially, giving the
//! glide-to-rest feel of damped orbit controls.

use std::f32::consts::TAU;
use verdant_config::ControlsConfig;

/// Pitch stops just short of the poles so the camera never flips over.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Reference update rate the damping factor is defined against.
const DAMPING_RATE: f32 = 60.0;

#[derive(Debug, Clone)]
pub struct OrbitControls {
    /// Orbit angle around the world Y axis, radians.
    pub yaw: f32,
    /// Elevation above the equatorial plane, radians, clamped.
    pub pitch: f32,
    auto_rotate: bool,
    auto_rotate_speed: f32,
    rotate_speed: f32,
    damping: f32,
    pending_yaw: f32,
    pending_pitch: f32,
    dragging: bool,
}

impl OrbitControls {
    pub fn from_config(config: &ControlsConfig) -> Self {
        if config.enable_zoom || config.enable_pan {
            tracing::warn!("zoom and pan are not supported; ignoring");
        }
        Self {
            yaw: 0.0,
            pitch: 0.0,
            auto_rotate: config.auto_rotate_speed != 0.0,
            auto_rotate_speed: config.auto_rotate_speed,
            rotate_speed: config.rotate_speed,
            damping: config.damping.clamp(0.0, 1.0),
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            dragging: false,
        }
    }

    /// A drag gesture started; auto-rotation pauses until it ends.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// The drag gesture ended. Pending rotation keeps gliding out.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Feed a pointer movement of (`dx`, `dy`) pixels. A drag across the full
    /// viewport height corresponds to one full revolution.
    pub fn drag(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if !self.dragging || viewport_height <= 0.0 {
            return;
        }
        let per_pixel = TAU * self.rotate_speed / viewport_height;
        self.pending_yaw += dx * per_pixel;
        self.pending_pitch += dy * per_pixel;
    }

    /// Advance by `dt` seconds: accumulate auto-rotation, release pending
    /// rotation through the damping filter, clamp pitch.
    pub fn update(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }

        if self.auto_rotate && !self.dragging {
            // A speed of 2.0 completes one orbit every 30 seconds
            self.pending_yaw += self.auto_rotate_speed * TAU / 60.0 * dt;
        }

        if self.damping > 0.0 {
            let keep = (1.0 - self.damping).powf(dt * DAMPING_RATE);
            let release = 1.0 - keep;
            self.yaw += self.pending_yaw * release;
            self.pitch += self.pending_pitch * release;
            self.pending_yaw *= keep;
            self.pending_pitch *= keep;
        } else {
            self.yaw += self.pending_yaw;
            self.pitch += self.pending_pitch;
            self.pending_yaw = 0.0;
            self.pending_pitch = 0.0;
        }

        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn controls(damping: f32, auto_rotate_speed: f32) -> OrbitControls {
        OrbitControls::from_config(&ControlsConfig {
            auto_rotate_speed,
            damping,
            rotate_speed: 1.0,
            enable_zoom: false,
            enable_pan: false,
        })
    }

    #[test]
    fn auto_rotation_rate_matches_speed() {
        // damping 1.0 releases the full pending rotation every update
        let mut c = controls(1.0, 2.0);
        c.update(1.0);
        // speed 2.0 → one orbit per 30 s → TAU/30 per second
        assert!((c.yaw - TAU / 30.0).abs() < 1e-4, "yaw = {}", c.yaw);
    }

    #[test]
    fn auto_rotation_pauses_while_dragging() {
        let mut c = controls(1.0, 5.0);
        c.begin_drag();
        c.update(1.0);
        assert_eq!(c.yaw, 0.0);
        c.end_drag();
        c.update(1.0);
        assert!(c.yaw > 0.0);
    }

    #[test]
    fn full_height_drag_is_one_revolution() {
        let mut c = controls(0.0, 0.0);
        c.begin_drag();
        c.drag(0.0, 250.0, 500.0);
        c.update(1.0 / 60.0);
        // Half the viewport height → half a revolution of pitch before clamping
        assert!((c.pitch - PITCH_LIMIT).abs() < 1e-5);

        let mut c = controls(0.0, 0.0);
        c.begin_drag();
        c.drag(125.0, 0.0, 500.0);
        c.update(1.0 / 60.0);
        assert!((c.yaw - TAU / 4.0).abs() < 1e-4);
    }

    #[test]
    fn drag_ignored_when_not_pressed() {
        let mut c = controls(0.0, 0.0);
        c.drag(100.0, 100.0, 500.0);
        c.update(1.0 / 60.0);
        assert_eq!(c.yaw, 0.0);
        assert_eq!(c.pitch, 0.0);
    }

    #[test]
    fn damped_release_converges_to_drag_total() {
        let mut c = controls(0.05, 0.0);
        c.begin_drag();
        c.drag(100.0, 0.0, 1000.0);
        c.end_drag();

        let expected = TAU * 100.0 / 1000.0;
        for _ in 0..600 {
            c.update(1.0 / 60.0);
        }
        // Ten simulated seconds of damping releases nearly all of it
        assert!((c.yaw - expected).abs() < expected * 0.01, "yaw = {}", c.yaw);
    }

    #[test]
    fn damping_is_frame_rate_independent() {
        let mut fine = controls(0.05, 0.0);
        let mut coarse = controls(0.05, 0.0);
        for c in [&mut fine, &mut coarse] {
            c.begin_drag();
            c.drag(200.0, 0.0, 1000.0);
            c.end_drag();
        }

        for _ in 0..120 {
            fine.update(1.0 / 120.0);
        }
        for _ in 0..30 {
            coarse.update(1.0 / 30.0);
        }
        assert!((fine.yaw - coarse.yaw).abs() < 1e-3);
    }

    #[test]
    fn pitch_clamps_at_the_poles() {
        let mut c = controls(1.0, 0.0);
        c.begin_drag();
        for _ in 0..10 {
            c.drag(0.0, 400.0, 500.0);
            c.update(1.0 / 60.0);
        }
        assert!(c.pitch <= PITCH_LIMIT + 1e-6);

        for _ in 0..20 {
            c.drag(0.0, -400.0, 500.0);
            c.update(1.0 / 60.0);
        }
        assert!(c.pitch >= -PITCH_LIMIT - 1e-6);
    }

    #[test]
    fn zero_auto_rotate_speed_disables_idle_spin() {
        let mut c = controls(1.0, 0.0);
        c.update(5.0);
        assert_eq!(c.yaw, 0.0);
    }
}
