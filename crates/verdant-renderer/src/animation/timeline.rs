//! Entrance timeline: three sequential tweens played at startup.
//!
//! Order matches the page it recreates: the sphere scales in, then the nav
//! row fades, then the title. Steps never overlap; leftover frame time at a
//! step boundary flows into the next step.

use super::easing::Easing;
use super::tween::Tween;

const STEP_COUNT: usize = 3;

/// Index meanings for the step array.
const SPHERE_SCALE: usize = 0;
const NAV_FADE: usize = 1;
const TITLE_FADE: usize = 2;

#[derive(Debug, Clone)]
pub struct IntroTimeline {
    steps: [Tween; STEP_COUNT],
    current: usize,
}

impl IntroTimeline {
    /// A fresh timeline with every step at its starting value.
    pub fn new(step_duration: f32) -> Self {
        Self {
            steps: std::array::from_fn(|_| {
                Tween::new(0.0, 1.0, step_duration, Easing::default())
            }),
            current: 0,
        }
    }

    /// A timeline that has already played out; used when the intro is
    /// disabled so the scene starts fully visible.
    pub fn completed() -> Self {
        let mut timeline = Self::new(0.0);
        timeline.current = STEP_COUNT;
        timeline
    }

    /// Advance by `dt` seconds, spilling leftover time across step
    /// boundaries so a slow frame cannot stall the sequence.
    pub fn advance(&mut self, dt: f32) {
        let mut remaining = dt;
        while remaining > 0.0 && self.current < STEP_COUNT {
            remaining = self.steps[self.current].advance(remaining);
            if self.steps[self.current].finished() {
                self.current += 1;
            } else {
                break;
            }
        }
    }

    /// Jump to the final state of every step.
    pub fn skip_to_end(&mut self) {
        for step in &mut self.steps {
            step.skip_to_end();
        }
        self.current = STEP_COUNT;
    }

    pub fn finished(&self) -> bool {
        self.current >= STEP_COUNT
    }

    /// Sphere scale multiplier in [0, 1].
    pub fn sphere_scale(&self) -> f32 {
        self.step_value(SPHERE_SCALE)
    }

    /// Nav row opacity in [0, 1]. Stays 0 until the sphere has scaled in.
    pub fn nav_opacity(&self) -> f32 {
        self.step_value(NAV_FADE)
    }

    /// Title opacity in [0, 1]. Stays 0 until the nav has faded in.
    pub fn title_opacity(&self) -> f32 {
        self.step_value(TITLE_FADE)
    }

    fn step_value(&self, index: usize) -> f32 {
        if self.current >= STEP_COUNT {
            return 1.0;
        }
        self.steps[index].value()
    }
}

// =============================================================================
// Tests
// =============================================================================
