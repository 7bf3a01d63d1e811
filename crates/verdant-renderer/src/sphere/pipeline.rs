//! wgpu render pipeline for the sphere.
//!
//! The sphere draws into an offscreen `rgba16float` texture sized at the
//! configured supersampling factor; the composite pass downsamples it onto
//! the surface.

use super::types::SphereVertex;

/// Per-draw uniforms: transforms, material, light, and camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereUniforms {
    /// Model-View-Projection matrix (column-major).
    pub mvp: [f32; 16],
    /// Model matrix for world-space normals.
    pub model: [f32; 16],
    /// Material base color, linear RGB + alpha.
    pub base_color: [f32; 4],
    /// Light position (xyz) and intensity (w).
    pub light: [f32; 4],
    /// Camera eye position (xyz).
    pub camera: [f32; 4],
    /// x = material roughness; remaining lanes unused.
    pub params: [f32; 4],
}

const SHADER_SOURCE: &str = r#"
struct SphereUniforms {
    mvp: mat4x4<f32>,
    model: mat4x4<f32>,
    base_color: vec4<f32>,
    light: vec4<f32>,
    camera: vec4<f32>,
    params: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> u: SphereUniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    let world = u.model * vec4<f32>(in.position, 1.0);
    out.clip_position = u.mvp * vec4<f32>(in.position, 1.0);
    out.world_pos = world.xyz;
    // Model is a uniform scale, so normals transform directly
    out.normal = (u.model * vec4<f32>(in.normal, 0.0)).xyz;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let n = normalize(in.normal);
    let to_light = u.light.xyz - in.world_pos;
    let dist = length(to_light);
    let l = to_light / dist;
    let v = normalize(u.camera.xyz - in.world_pos);
    let h = normalize(l + v);

    // Point light with inverse-square falloff
    let radiance = u.light.w / (dist * dist);
    let ndotl = max(dot(n, l), 0.0);

    // Roughness broadens and dims the highlight
    let roughness = clamp(u.params.x, 0.05, 1.0);
    let shininess = exp2((1.0 - roughness) * 7.0);
    let spec = pow(max(dot(n, h), 0.0), shininess) * (1.0 - roughness);

    let lit = (u.base_color.rgb + vec3<f32>(spec)) * ndotl * radiance;
    return vec4<f32>(lit, 1.0);
}
"#;

/// Pipeline, buffers, and offscreen target for the sphere pass.
pub struct SpherePipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub vertex_buffer: wgpu::Buffer,
    pub vertex_count: u32,
    pub uniform_buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub offscreen_texture: wgpu::Texture,
    pub offscreen_view: wgpu::TextureView,
}

impl SpherePipeline {
    /// Create the sphere pipeline with a pre-generated mesh and an offscreen
    /// target of `width` × `height` (already supersampled).
    pub fn new(
        device: &wgpu::Device,
        vertices: &[SphereVertex],
        width: u32,
        height: u32,
    ) -> Self {
        use wgpu::util::DeviceExt;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sphere shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere vertex buffer"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sphere uniforms"),
            size: std::mem::size_of::<SphereUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("sphere bind group layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: std::num::NonZeroU64::new(std::mem::size_of::<
                            SphereUniforms,
                        >() as u64),
                    },
                    count: None,
                }],
            });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sphere bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sphere pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sphere pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[SphereVertex::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: wgpu::TextureFormat::Rgba16Float,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let (offscreen_texture, offscreen_view) =
            Self::create_offscreen_texture(device, width, height);

        Self {
            pipeline,
            vertex_buffer,
            vertex_count: vertices.len() as u32,
            uniform_buffer,
            bind_group,
            offscreen_texture,
            offscreen_view,
        }
    }

    /// Recreate the offscreen texture after a resize.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        let (tex, view) = Self::create_offscreen_texture(device, width, height);
        self.offscreen_texture = tex;
        self.offscreen_view = view;
    }

    /// Upload this frame's uniforms.
    pub fn update_uniforms(&self, queue: &wgpu::Queue, uniforms: &SphereUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Record the sphere pass into the offscreen texture.
    pub fn render(&self, encoder: &mut wgpu::CommandEncoder) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("sphere pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &self.offscreen_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.draw(0..self.vertex_count, 0..1);
    }

    fn create_offscreen_texture(
        device: &wgpu::Device,
        width: u32,
        height: u32,
    ) -> (wgpu::Texture, wgpu::TextureView) {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("sphere offscreen"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba16Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        (texture, view)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniforms_size_is_192_bytes() {
        // 2 mat4 + 4 vec4, matching the WGSL struct layout
        assert_eq!(std::mem::size_of::<SphereUniforms>(), 192);
    }

    #[test]
    fn uniforms_are_pod() {
        let u = SphereUniforms {
            mvp: [0.0; 16],
            model: [0.0; 16],
            base_color: [0.0, 1.0, 0.5, 1.0],
            light: [0.0, 10.0, 10.0, 125.0],
            camera: [0.0, 0.0, 20.0, 0.0],
            params: [0.5, 0.0, 0.0, 0.0],
        };
        let bytes = bytemuck::bytes_of(&u);
        assert_eq!(bytes.len(), 192);
    }
}
