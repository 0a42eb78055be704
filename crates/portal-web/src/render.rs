//! WebGPU renderer. Consumes the render-parameter sinks the engine
//! fills in each frame: fog as the clear color, a fullscreen sky
//! gradient, the portal disc, and the instanced dust particles.

use glam::Vec3;
use portal_core::{SceneSinks, PARTICLE_COUNT};
use web_sys as web;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    fog_color: [f32; 3],
    time: f32,
    edge_color: [f32; 3],
    hold: f32,
    key_color: [f32; 3],
    key_intensity: f32,
    cam_right: [f32; 3],
    hover: f32,
    cam_up: [f32; 3],
    particle_opacity: f32,
    mouse: [f32; 2],
    portal_y: f32,
    _pad: f32,
}

const SHADER_SRC: &str = r#"
struct Scene {
  view_proj: mat4x4<f32>,
  fog_color: vec3<f32>, time: f32,
  edge_color: vec3<f32>, hold: f32,
  key_color: vec3<f32>, key_intensity: f32,
  cam_right: vec3<f32>, hover: f32,
  cam_up: vec3<f32>, particle_opacity: f32,
  mouse: vec2<f32>, portal_y: f32, _pad: f32,
};
@group(0) @binding(0) var<uniform> u: Scene;

// ---- sky: fullscreen triangle, gold/purple gradient by hold ----

struct SkyOut {
  @builtin(position) pos: vec4<f32>,
  @location(0) uv: vec2<f32>,
};

@vertex
fn vs_sky(@builtin(vertex_index) vi: u32) -> SkyOut {
  var out: SkyOut;
  let x = f32(i32(vi & 1u) * 4 - 1);
  let y = f32(i32(vi >> 1u) * 4 - 1);
  out.pos = vec4<f32>(x, y, 1.0, 1.0);
  out.uv = vec2<f32>(x, y) * 0.5 + 0.5;
  return out;
}

@fragment
fn fs_sky(inf: SkyOut) -> @location(0) vec4<f32> {
  let gold_top = vec3<f32>(0.55, 0.72, 0.92);
  let purple_top = vec3<f32>(0.40, 0.42, 0.78);
  let top = mix(gold_top, purple_top, u.hold);
  let band = 0.04 * sin(inf.uv.x * 9.0 + u.time * 0.3);
  let t = clamp(inf.uv.y + band, 0.0, 1.0);
  let col = mix(u.fog_color, top, t);
  return vec4<f32>(col, 1.0);
}

// ---- portal disc ----

struct PortalOut {
  @builtin(position) pos: vec4<f32>,
  @location(0) local: vec2<f32>,
};

@vertex
fn vs_portal(@location(0) corner: vec2<f32>) -> PortalOut {
  let radius = 1.1;
  let center = vec3<f32>(0.0, u.portal_y + 0.2, 0.0);
  let world = center + vec3<f32>(corner.x * 2.0 * radius, corner.y * 2.0 * radius, 0.0);
  var out: PortalOut;
  out.pos = u.view_proj * vec4<f32>(world, 1.0);
  out.local = corner * 2.0;
  return out;
}

@fragment
fn fs_portal(inf: PortalOut) -> @location(0) vec4<f32> {
  let p = inf.local - u.mouse * 0.05;
  let r = length(p);
  let theta = atan2(p.y, p.x);
  let swirl = 0.5 + 0.5 * sin(theta * 3.0 - u.time * 0.8 + r * 6.0);
  let core = 1.0 - smoothstep(0.0, 0.9, r);
  let rim = smoothstep(0.82, 0.97, r) * (1.0 - smoothstep(0.97, 1.0, r));
  var col = u.key_color * (0.35 + 0.65 * swirl) * u.key_intensity * 0.4;
  col += u.edge_color * rim * 2.0;
  col *= 1.0 + u.hover * 0.6;
  let alpha = clamp(core + rim, 0.0, 1.0) * (1.0 - smoothstep(0.98, 1.0, r));
  return vec4<f32>(col, alpha);
}

// ---- dust particles: camera-facing instanced quads ----

struct ParticleOut {
  @builtin(position) pos: vec4<f32>,
  @location(0) local: vec2<f32>,
};

@vertex
fn vs_particle(@location(0) corner: vec2<f32>, @location(1) i_pos: vec3<f32>) -> ParticleOut {
  let size = 0.05;
  let world = i_pos + u.cam_right * corner.x * size + u.cam_up * corner.y * size;
  var out: ParticleOut;
  out.pos = u.view_proj * vec4<f32>(world, 1.0);
  out.local = corner * 2.0;
  return out;
}

@fragment
fn fs_particle(inf: ParticleOut) -> @location(0) vec4<f32> {
  let r = length(inf.local);
  let alpha = (1.0 - smoothstep(0.6, 1.0, r)) * u.particle_opacity;
  return vec4<f32>(vec3<f32>(1.0, 0.97, 0.88), alpha);
}
"#;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    sky_pipeline: wgpu::RenderPipeline,
    portal_pipeline: wgpu::RenderPipeline,
    particle_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    quad_vb: wgpu::Buffer,
    particle_vb: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SRC.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        // Quad corners shared by the portal and the particle billboards
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let particle_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("particle_vb"),
            size: (std::mem::size_of::<f32>() * 3 * PARTICLE_COUNT) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let quad_layout = wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 2) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: 0,
            }],
        };
        let particle_instance_layout = wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 3) as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 1,
            }],
        };

        let sky_pipeline = make_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            "sky",
            "vs_sky",
            "fs_sky",
            &[],
            None,
        );
        let portal_pipeline = make_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            "portal",
            "vs_portal",
            "fs_portal",
            std::slice::from_ref(&quad_layout),
            Some(wgpu::BlendState::ALPHA_BLENDING),
        );
        let particle_pipeline = make_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            "particles",
            "vs_particle",
            "fs_particle",
            &[quad_layout.clone(), particle_instance_layout],
            Some(wgpu::BlendState::ALPHA_BLENDING),
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            sky_pipeline,
            portal_pipeline,
            particle_pipeline,
            uniform_buffer,
            quad_vb,
            particle_vb,
            bind_group,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Reacquire the surface after a Lost/Outdated error.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn uniforms_from(&self, sinks: &SceneSinks) -> SceneUniforms {
        let view = sinks.camera.view_matrix();
        // World-space camera basis for the particle billboards
        let cam_right = Vec3::new(view.x_axis.x, view.y_axis.x, view.z_axis.x);
        let cam_up = Vec3::new(view.x_axis.y, view.y_axis.y, view.z_axis.y);

        let lights = &sinks.lights;
        let gi = lights.gold.intensity;
        let pi = lights.purple.intensity;
        let sum = (gi + pi).max(1e-3);
        let key_color = [
            (lights.gold.color[0] * gi + lights.purple.color[0] * pi) / sum,
            (lights.gold.color[1] * gi + lights.purple.color[1] * pi) / sum,
            (lights.gold.color[2] * gi + lights.purple.color[2] * pi) / sum,
        ];

        let glow = 1.0 + sinks.edge.emissive_intensity;
        SceneUniforms {
            view_proj: sinks.camera.view_proj().to_cols_array_2d(),
            fog_color: sinks.fog.color,
            time: sinks.sky.u_time,
            edge_color: [
                sinks.edge.color[0] * glow,
                sinks.edge.color[1] * glow,
                sinks.edge.color[2] * glow,
            ],
            hold: sinks.sky.u_hold,
            key_color,
            key_intensity: gi + pi,
            cam_right: cam_right.to_array(),
            hover: sinks.portal_inner.u_hover,
            cam_up: cam_up.to_array(),
            particle_opacity: sinks.particles.opacity,
            mouse: sinks.portal_inner.u_mouse,
            portal_y: sinks.portal_frame.y,
            _pad: 0.0,
        }
    }

    pub fn render(&mut self, sinks: &mut SceneSinks) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&self.uniforms_from(sinks)),
        );
        if sinks.particles.needs_upload {
            self.queue.write_buffer(
                &self.particle_vb,
                0,
                bytemuck::cast_slice(&sinks.particles.positions),
            );
            sinks.particles.needs_upload = false;
        }

        let fog = sinks.fog.color;
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("scene"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: fog[0] as f64,
                        g: fog[1] as f64,
                        b: fog[2] as f64,
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        rpass.set_bind_group(0, &self.bind_group, &[]);

        rpass.set_pipeline(&self.sky_pipeline);
        rpass.draw(0..3, 0..1);

        rpass.set_pipeline(&self.portal_pipeline);
        rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
        rpass.draw(0..6, 0..1);

        rpass.set_pipeline(&self.particle_pipeline);
        rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
        rpass.set_vertex_buffer(1, self.particle_vb.slice(..));
        rpass.draw(0..6, 0..(sinks.particles.len() as u32));

        drop(rpass);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

#[allow(clippy::too_many_arguments)]
fn make_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    label: &str,
    vs: &str,
    fs: &str,
    buffers: &[wgpu::VertexBufferLayout],
    blend: Option<wgpu::BlendState>,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(vs),
            buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(fs),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}
