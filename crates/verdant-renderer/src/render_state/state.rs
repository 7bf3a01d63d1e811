use std::sync::Arc;
use winit::window::Window;

use verdant_common::{srgb_to_linear, Color};
use verdant_config::VerdantConfig;

use super::composite::CompositePipeline;
use crate::camera::PerspectiveCamera;
use crate::gpu::{GpuContext, RendererError};
use crate::overlay::OverlayRenderer;
use crate::sphere::{generate_sphere_mesh, SpherePipeline};

/// Core rendering state holding the GPU context and all pipelines.
///
/// The sphere draws into a supersampled offscreen target, the composite
/// pass resolves it onto the surface, and the overlay draws text on top.
pub struct RenderState {
    pub gpu: GpuContext,
    pub sphere: SpherePipeline,
    pub composite: CompositePipeline,
    pub overlay: OverlayRenderer,
    pub camera: PerspectiveCamera,
    pub clear_color: wgpu::Color,
    pixel_ratio: f64,
}

impl RenderState {
    /// Create a fully initialized render state from a window.
    pub async fn new(window: Arc<Window>, config: &VerdantConfig) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window).await?;

        let pixel_ratio = config.window.pixel_ratio.max(1.0);
        let (offscreen_w, offscreen_h) = offscreen_extent(&gpu, pixel_ratio);
        tracing::info!(
            "offscreen target: {}x{} (pixel ratio {})",
            offscreen_w,
            offscreen_h,
            pixel_ratio
        );

        let mesh = generate_sphere_mesh(
            config.scene.sphere.radius,
            config.scene.sphere.width_segments,
            config.scene.sphere.height_segments,
        );
        let sphere = SpherePipeline::new(&gpu.device, &mesh, offscreen_w, offscreen_h);
        let composite = CompositePipeline::new(&gpu.device, &sphere.offscreen_view, gpu.format());
        let overlay = OverlayRenderer::new(&gpu.device, &gpu.queue, gpu.format(), &config.overlay);

        let camera = PerspectiveCamera::from_config(&config.scene.camera, gpu.size.aspect());
        let clear_color = background_clear_color(&config.window.background);

        Ok(Self {
            gpu,
            sphere,
            composite,
            overlay,
            camera,
            clear_color,
            pixel_ratio,
        })
    }

    /// Handle a window resize: reconfigure the surface and rebuild the
    /// offscreen chain at the new supersampled size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        self.camera.set_aspect(self.gpu.size.aspect());

        let (offscreen_w, offscreen_h) = offscreen_extent(&self.gpu, self.pixel_ratio);
        self.sphere.resize(&self.gpu.device, offscreen_w, offscreen_h);
        self.composite
            .resize(&self.gpu.device, &self.sphere.offscreen_view);
    }
}

/// Offscreen target size: surface size scaled by the pixel ratio, clamped
/// to what the device can allocate.
fn offscreen_extent(gpu: &GpuContext, pixel_ratio: f64) -> (u32, u32) {
    let max_dim = gpu.max_texture_dimension();
    let scale = |v: u32| ((v as f64 * pixel_ratio).round() as u32).clamp(1, max_dim);
    (scale(gpu.size.width), scale(gpu.size.height))
}

/// Parse the background hex color into a linear-space clear color.
fn background_clear_color(hex: &str) -> wgpu::Color {
    let color = Color::from_hex(hex).unwrap_or_else(|| {
        tracing::warn!("invalid background color {:?}, using black", hex);
        Color::from_rgb(0, 0, 0)
    });
    wgpu::Color {
        r: srgb_to_linear(color.r as f32 / 255.0) as f64,
        g: srgb_to_linear(color.g as f32 / 255.0) as f64,
        b: srgb_to_linear(color.b as f32 / 255.0) as f64,
        a: 1.0,
    }
}
