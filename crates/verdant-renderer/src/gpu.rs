use std::sync::Arc;
use verdant_common::Viewport;
use winit::window::Window;

// ---------------------------------------------------------------------------
// RendererError
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    /// The swapchain could not produce a frame. The caller decides whether
    /// this is recoverable (reconfigure) or fatal (out of memory).
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("failed to create surface: {0}")]
    SurfaceCreation(String),

    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    #[error("device error: {0}")]
    DeviceError(String),
}

impl RendererError {
    /// The surface was lost or outdated; reconfiguring recovers it.
    pub fn surface_needs_reconfigure(&self) -> bool {
        matches!(
            self,
            RendererError::Surface(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)
        )
    }

    /// The GPU has no memory left for surface frames.
    pub fn surface_out_of_memory(&self) -> bool {
        matches!(self, RendererError::Surface(wgpu::SurfaceError::OutOfMemory))
    }
}

impl From<wgpu::RequestDeviceError> for RendererError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RendererError::DeviceError(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// GpuContext
// ---------------------------------------------------------------------------

pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub surface_config: wgpu::SurfaceConfiguration,
    pub size: Viewport,
    pub scale_factor: f64,
}

impl GpuContext {
    /// Initialize wgpu: create instance, surface, adapter, device, and configure
    /// the surface for rendering.
    pub async fn new(window: Arc<Window>) -> Result<Self, RendererError> {
        let inner_size = window.inner_size();
        let scale_factor = window.scale_factor();
        let size = Viewport::new(inner_size.width, inner_size.height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

        let surface = instance
            .create_surface(window)
            .map_err(|e| RendererError::SurfaceCreation(e.to_string()))?;

        // Prefer a hardware GPU, retry with the software fallback
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await;

        let adapter = match adapter {
            Some(a) => a,
            None => {
                tracing::warn!("No hardware GPU adapter found, trying software fallback");
                instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::LowPower,
                        force_fallback_adapter: true,
                        compatible_surface: Some(&surface),
                    })
                    .await
                    .ok_or(RendererError::AdapterNotFound)?
            }
        };

        let adapter_info = adapter.get_info();
        tracing::info!(
            "GPU adapter: {} ({:?}, {:?})",
            adapter_info.name,
            adapter_info.device_type,
            adapter_info.backend,
        );

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("verdant device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .first()
            .copied()
            .unwrap_or(wgpu::TextureFormat::Bgra8UnormSrgb);
        tracing::info!(
            "Surface format: {format:?} (available: {:?})",
            surface_caps.formats
        );

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            desired_maximum_frame_latency: 2,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            view_formats: vec![],
        };
        surface.configure(&device, &surface_config);

        Ok(Self {
            device,
            queue,
            surface,
            surface_config,
            size,
            scale_factor,
        })
    }

    /// Reconfigure the surface after a window resize. Safe to call with the
    /// current size (e.g. to recover a lost surface).
    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = Viewport::new(width, height);
        self.surface_config.width = self.size.width;
        self.surface_config.height = self.size.height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Reconfigure with the current size after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Get the next frame's surface texture.
    pub fn current_texture(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    /// Return the surface texture format.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.surface_config.format
    }

    /// Largest texture edge the device supports; caps the supersampled
    /// offscreen target.
    pub fn max_texture_dimension(&self) -> u32 {
        self.device.limits().max_texture_dimension_2d
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_creation_display() {
        let err = RendererError::SurfaceCreation("window gone".to_string());
        assert_eq!(err.to_string(), "failed to create surface: window gone");
    }

    #[test]
    fn renderer_error_device_display() {
        let err = RendererError::DeviceError("out of memory".to_string());
        assert_eq!(err.to_string(), "device error: out of memory");
    }

    #[test]
    fn renderer_error_from_surface_error() {
        let err = RendererError::from(wgpu::SurfaceError::Lost);
        assert!(matches!(err, RendererError::Surface(wgpu::SurfaceError::Lost)));
    }

    #[test]
    fn surface_error_classification() {
        assert!(RendererError::from(wgpu::SurfaceError::Lost).surface_needs_reconfigure());
        assert!(RendererError::from(wgpu::SurfaceError::Outdated).surface_needs_reconfigure());
        assert!(RendererError::from(wgpu::SurfaceError::OutOfMemory).surface_out_of_memory());
        assert!(!RendererError::from(wgpu::SurfaceError::Timeout).surface_needs_reconfigure());
        assert!(!RendererError::AdapterNotFound.surface_out_of_memory());
    }
}
