//! GPU rendering for verdant: the orbiting sphere, its supersampled
//! resolve, and the text overlay.
//!
//! Built on wgpu for drawing and glyphon for text. [`RenderState`] owns the
//! whole chain; the app drives it with one [`render_state::FrameParams`]
//! per frame.

pub mod animation;
pub mod camera;
pub mod controls;
pub mod gpu;
pub mod overlay;
pub mod perf;
pub mod render_state;
pub mod scene;
pub mod sphere;

pub use animation::{ColorTween, Easing, IntroTimeline, Tween};
pub use camera::PerspectiveCamera;
pub use controls::OrbitControls;
pub use gpu::{GpuContext, RendererError};
pub use overlay::OverlayRenderer;
pub use perf::FrameTimer;
pub use render_state::{FrameParams, RenderState};
pub use scene::Scene;
