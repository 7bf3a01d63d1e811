//! Render state: GPU context plus the frame pipeline chain.

mod composite;
mod frame;
mod state;

pub use composite::CompositePipeline;
pub use frame::{build_sphere_uniforms, FrameParams};
pub use state::RenderState;
