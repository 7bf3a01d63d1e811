//! Time-driven interpolation tasks, advanced explicitly each frame.

use super::easing::{lerp, Easing};

// ---------------------------------------------------------------------------
// Tween
// ---------------------------------------------------------------------------

/// Interpolates a scalar from `start` to `end` over `duration` seconds.
#[derive(Debug, Clone)]
pub struct Tween {
    start: f32,
    end: f32,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl Tween {
    pub fn new(start: f32, end: f32, duration: f32, easing: Easing) -> Self {
        Self {
            start,
            end,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
        }
    }

    /// Advance by up to `dt` seconds and return the unconsumed remainder.
    ///
    /// The remainder is 0 while the tween is running; once it completes,
    /// leftover time flows to whatever runs next (sequential timelines).
    pub fn advance(&mut self, dt: f32) -> f32 {
        if self.duration <= 0.0 {
            return dt;
        }
        let before = self.elapsed;
        self.elapsed = (self.elapsed + dt).min(self.duration);
        dt - (self.elapsed - before)
    }

    /// Current interpolated value.
    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.end;
        }
        let t = self.easing.apply(self.elapsed / self.duration);
        lerp(self.start, self.end, t)
    }

    /// Raw (un-eased) progress in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            self.elapsed / self.duration
        }
    }

    pub fn finished(&self) -> bool {
        self.duration <= 0.0 || self.elapsed >= self.duration
    }

    /// Jump straight to the end value.
    pub fn skip_to_end(&mut self) {
        self.elapsed = self.duration;
    }
}

// ---------------------------------------------------------------------------
// ColorTween
// ---------------------------------------------------------------------------

/// Interpolates an RGB triple toward a target, with retargeting.
///
/// A new target while in flight restarts the glide from the current
/// in-between color, so rapid pointer movement never causes jumps.
#[derive(Debug, Clone)]
pub struct ColorTween {
    start: [f32; 3],
    end: [f32; 3],
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl ColorTween {
    /// A tween already resting at `color`.
    pub fn resting(color: [f32; 3], duration: f32) -> Self {
        Self {
            start: color,
            end: color,
            duration: duration.max(0.0),
            elapsed: duration.max(0.0),
            easing: Easing::default(),
        }
    }

    /// Begin gliding from the current value toward `target`.
    pub fn retarget(&mut self, target: [f32; 3]) {
        self.start = self.value();
        self.end = target;
        self.elapsed = 0.0;
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    pub fn value(&self) -> [f32; 3] {
        if self.duration <= 0.0 {
            return self.end;
        }
        let t = self.easing.apply(self.elapsed / self.duration);
        [
            lerp(self.start[0], self.end[0], t),
            lerp(self.start[1], self.end[1], t),
            lerp(self.start[2], self.end[2], t),
        ]
    }

    pub fn target(&self) -> [f32; 3] {
        self.end
    }

    pub fn finished(&self) -> bool {
        self.duration <= 0.0 || self.elapsed >= self.duration
    }
}

// =============================================================================
// Tests
// =============================================================================
