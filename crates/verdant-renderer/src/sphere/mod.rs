//! Sphere rendering: mesh generation, MVP math, and the wgpu pipeline.
//!
//! The sphere draws to an offscreen `rgba16float` texture at the configured
//! supersampling factor; the composite pass resolves it onto the surface.

pub mod matrix;
mod mesh;
mod pipeline;
mod types;

pub use mesh::*;
pub use pipeline::*;
pub use types::*;
