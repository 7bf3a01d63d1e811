//! Easing curves for tweens.

/// Maps linear progress in [0, 1] to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Quadratic ease-out: fast start, gentle landing.
    #[default]
    QuadOut,
    /// Smooth-step ease-in-out.
    SmoothStep,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::SmoothStep => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// Linear interpolation between two values.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
