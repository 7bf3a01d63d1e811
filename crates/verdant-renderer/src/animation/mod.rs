//! Frame-stepped animation primitives: easing curves, tweens, and the
//! entrance timeline. Everything here is advanced explicitly with a frame
//! delta; nothing owns a clock.

mod easing;
mod timeline;
mod tween;

pub use easing::{lerp, Easing};
pub use timeline::IntroTimeline;
pub use tween::{ColorTween, Tween};
