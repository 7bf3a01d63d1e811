use super::state::RenderState;
use crate::camera::PerspectiveCamera;
use crate::gpu::RendererError;
use crate::scene::Scene;
use crate::sphere::matrix::{mul, scale};
use crate::sphere::SphereUniforms;

/// Per-frame inputs from the interaction and animation layers.
#[derive(Debug, Clone, Copy)]
pub struct FrameParams {
    /// Orbit angle around the Y axis, radians.
    pub yaw: f32,
    /// Orbit elevation, radians.
    pub pitch: f32,
    /// Sphere scale from the entrance animation.
    pub mesh_scale: f32,
    pub nav_opacity: f32,
    pub title_opacity: f32,
}

impl RenderState {
    /// Render a complete frame: sphere offscreen, then resolve + overlay
    /// onto the surface.
    pub fn render_frame(&mut self, scene: &Scene, params: &FrameParams) -> Result<(), RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(e) => {
                tracing::warn!("surface texture unavailable: {e}");
                return Err(RendererError::Surface(e));
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("verdant frame encoder"),
            });

        let uniforms = build_sphere_uniforms(scene, &self.camera, params);
        self.sphere.update_uniforms(&self.gpu.queue, &uniforms);

        self.overlay.prepare(
            &self.gpu.device,
            &self.gpu.queue,
            params.nav_opacity,
            params.title_opacity,
            self.gpu.size.width,
            self.gpu.size.height,
            self.gpu.scale_factor,
        );

        self.sphere.render(&mut encoder);

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("verdant main pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.composite.render(&mut pass);
            self.overlay.render(&mut pass);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(())
    }
}

/// Assemble the sphere uniforms for one frame.
///
/// The model matrix carries only the entrance scale; the orbit angles live
/// in the view matrix so the world-space light stays put while the eye
/// moves.
pub fn build_sphere_uniforms(
    scene: &Scene,
    camera: &PerspectiveCamera,
    params: &FrameParams,
) -> SphereUniforms {
    let model = scale(params.mesh_scale);
    let view = camera.view(params.yaw, params.pitch);
    let mvp = mul(&camera.projection(), &mul(&view, &model));

    let color = scene.linear_sphere_color();
    let eye = camera.eye(params.yaw, params.pitch);
    let light = scene.light_position;

    SphereUniforms {
        mvp,
        model,
        base_color: [color[0], color[1], color[2], 1.0],
        light: [light[0], light[1], light[2], scene.light_intensity],
        camera: [eye[0], eye[1], eye[2], 0.0],
        params: [scene.roughness, 0.0, 0.0, 0.0],
    }
}

/// Log the first frame presentation (once only).
fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?})",
            width,
            height,
            format,
        );
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::matrix::transform_point;
    use verdant_config::{CameraConfig, SceneConfig};

    fn test_inputs() -> (Scene, PerspectiveCamera) {
        let scene = Scene::from_config(&SceneConfig::default());
        let camera = PerspectiveCamera::from_config(&CameraConfig::default(), 1.6);
        (scene, camera)
    }

    fn params(yaw: f32, pitch: f32, mesh_scale: f32) -> FrameParams {
        FrameParams {
            yaw,
            pitch,
            mesh_scale,
            nav_opacity: 1.0,
            title_opacity: 1.0,
        }
    }

    #[test]
    fn uniforms_carry_linear_color_and_light() {
        let (scene, camera) = test_inputs();
        let u = build_sphere_uniforms(&scene, &camera, &params(0.0, 0.0, 1.0));

        // Default color #00ff83: red off, green at full
        assert_eq!(u.base_color[0], 0.0);
        assert!((u.base_color[1] - 1.0).abs() < 1e-6);
        assert!(u.base_color[2] > 0.0 && u.base_color[2] < 0.5);

        assert_eq!(u.light, [0.0, 10.0, 10.0, 125.0]);
        assert!((u.params[0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn sphere_center_projects_to_screen_center() {
        let (scene, camera) = test_inputs();
        let u = build_sphere_uniforms(&scene, &camera, &params(1.3, 0.5, 1.0));
        let p = transform_point(&u.mvp, [0.0, 0.0, 0.0]);
        assert!((p[0] / p[3]).abs() < 1e-5);
        assert!((p[1] / p[3]).abs() < 1e-5);
    }

    #[test]
    fn zero_scale_collapses_the_mesh() {
        let (scene, camera) = test_inputs();
        let u = build_sphere_uniforms(&scene, &camera, &params(0.0, 0.0, 0.0));
        // Every vertex lands on the sphere center
        let p = transform_point(&u.mvp, [3.0, -3.0, 3.0]);
        let q = transform_point(&u.mvp, [0.0, 0.0, 0.0]);
        assert!((p[0] / p[3] - q[0] / q[3]).abs() < 1e-5);
        assert!((p[1] / p[3] - q[1] / q[3]).abs() < 1e-5);
    }

    #[test]
    fn model_matrix_excludes_the_orbit() {
        let (scene, camera) = test_inputs();
        let u = build_sphere_uniforms(&scene, &camera, &params(2.0, 1.0, 1.0));
        // World position of a vertex is independent of the orbit angles
        let p = transform_point(&u.model, [3.0, 0.0, 0.0]);
        assert!((p[0] - 3.0).abs() < 1e-5);
        assert!(p[1].abs() < 1e-5 && p[2].abs() < 1e-5);
    }

    #[test]
    fn eye_uniform_tracks_the_orbit() {
        let (scene, camera) = test_inputs();
        let front = build_sphere_uniforms(&scene, &camera, &params(0.0, 0.0, 1.0));
        let side = build_sphere_uniforms(&scene, &camera, &params(std::f32::consts::FRAC_PI_2, 0.0, 1.0));
        assert!((front.camera[2] - 20.0).abs() < 1e-4);
        assert!((side.camera[0] + 20.0).abs() < 1e-4);
        assert!(side.camera[2].abs() < 1e-3);
    }
}
