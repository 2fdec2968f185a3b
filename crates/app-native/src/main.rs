use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use wgpu::util::DeviceExt;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::{Fullscreen, WindowBuilder},
};

use app_core::{
    DeviceClass, FrameInput, PointInstance, Scene, SceneConfig, SceneUniforms, FOG_END, FOG_START,
    SCROLL_FACTOR_PER_PX,
};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use glam::Vec2;

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    capacity: usize,
    width: u32,
    height: u32,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window, capacity: usize) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(app_core::SCENE_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        // Quad vertices for two triangles
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_vb"),
            size: (std::mem::size_of::<PointInstance>() * capacity.max(1)) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
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
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_buffers = [
            // slot 0: quad positions
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: instance data
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<PointInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 12,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 16,
                        shader_location: 3,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 32,
                        shader_location: 4,
                    },
                ],
            },
        ];
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            quad_vb,
            instance_vb,
            bind_group,
            capacity: capacity.max(1),
            width: size.width.max(1),
            height: size.height.max(1),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn render(
        &mut self,
        instances: &[PointInstance],
        uniforms: &SceneUniforms,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
        let count = instances.len().min(self.capacity);
        self.queue.write_buffer(
            &self.instance_vb,
            0,
            bytemuck::cast_slice(&instances[..count]),
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.0,
                            g: 0.0,
                            b: 0.008,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
            rpass.draw(0..6, 0..(count as u32));
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(42);
    let scene =
        Scene::new(SceneConfig::for_device(DeviceClass::Desktop), seed).expect("scene config");
    log::info!(
        "[scene] seed={} instances={}",
        seed,
        scene.instance_capacity()
    );

    // Ambient audio pad (looping, toggled with M)
    let audio_muted = Arc::new(AtomicBool::new(false));
    let _audio_stream = start_ambient_audio(Arc::clone(&audio_muted));

    let event_loop = EventLoop::new().expect("event loop");
    let window = WindowBuilder::new()
        .with_title("Candala (native)")
        .build(&event_loop)
        .expect("window");

    let capacity = scene.instance_capacity();
    let mut state = pollster::block_on(GpuState::new(&window, capacity)).expect("gpu");

    let mut scene = scene;
    let mut instances: Vec<PointInstance> = Vec::with_capacity(capacity);
    let mut scroll_px: f32 = 0.0;
    let mut pointer_ndc = Vec2::ZERO;
    let mut last_frame = Instant::now();
    // a full wheel sweep covers the range where the scroll factor saturates
    let max_scroll = 1.0 / SCROLL_FACTOR_PER_PX;

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => state.resize(size),
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => elwt.exit(),
            Event::WindowEvent {
                event: WindowEvent::CursorMoved { position, .. },
                ..
            } => {
                let size = state.window.inner_size();
                if size.width > 0 && size.height > 0 {
                    pointer_ndc = Vec2::new(
                        (position.x as f32 / size.width as f32) * 2.0 - 1.0,
                        -((position.y as f32 / size.height as f32) * 2.0 - 1.0),
                    );
                }
            }
            Event::WindowEvent {
                event: WindowEvent::MouseWheel { delta, .. },
                ..
            } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y * 60.0,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                };
                scroll_px = (scroll_px - dy).clamp(0.0, max_scroll);
            }
            Event::WindowEvent {
                event:
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                logical_key,
                                state: ElementState::Pressed,
                                ..
                            },
                        ..
                    },
                ..
            } => match logical_key {
                Key::Named(NamedKey::Enter) => {
                    if state.window.fullscreen().is_some() {
                        state.window.set_fullscreen(None);
                    } else {
                        state
                            .window
                            .set_fullscreen(Some(Fullscreen::Borderless(None)));
                    }
                }
                Key::Named(NamedKey::Escape) => state.window.set_fullscreen(None),
                Key::Character(ch) if ch == "m" || ch == "M" => {
                    let muted = !audio_muted.load(Ordering::Relaxed);
                    audio_muted.store(muted, Ordering::Relaxed);
                    log::info!("[audio] muted={muted}");
                }
                _ => {}
            },
            Event::AboutToWait => {
                let now = Instant::now();
                let dt_sec = (now - last_frame).as_secs_f32().min(0.1);
                last_frame = now;

                scene.step(&FrameInput {
                    dt_sec,
                    scroll_px,
                    pointer_ndc,
                });
                scene.build_instances(&mut instances);

                let aspect = state.width as f32 / state.height as f32;
                let (right, up) = scene.camera.billboard_axes();
                let uniforms = SceneUniforms {
                    view_proj: scene.camera.view_proj(aspect).to_cols_array_2d(),
                    cam_right: [right.x, right.y, right.z, 0.0],
                    cam_up: [up.x, up.y, up.z, 0.0],
                    fog: [FOG_START, FOG_END, 0.0, 0.0],
                };
                match state.render(&instances, &uniforms) {
                    Ok(_) => state.window.request_redraw(),
                    Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                    Err(_) => {}
                }
            }
            _ => {}
        })
        .unwrap();
}

// ---------------- Native audio (cpal) ----------------

/// Slow ambient pad: three detuned sines under a long LFO swell. Stands in
/// for the web build's looping background track.
fn start_ambient_audio(muted: Arc<AtomicBool>) -> Option<cpal::Stream> {
    let host = cpal::default_host();
    let device = host.default_output_device()?;
    let config = device.default_output_config().ok()?;
    if config.sample_format() != cpal::SampleFormat::F32 {
        log::warn!("unsupported output sample format; ambient audio disabled");
        return None;
    }
    let sample_rate = config.sample_rate().0 as f32;
    let channels = config.channels() as usize;

    let mut phases = [0.0f32; 3];
    let freqs = [55.0f32, 55.7, 110.3];
    let gains = [0.5f32, 0.35, 0.2];
    let mut lfo_phase = 0.0f32;
    let lfo_rate = 0.08f32;

    let stream = device
        .build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let level = if muted.load(Ordering::Relaxed) {
                    0.0
                } else {
                    0.12
                };
                for frame in data.chunks_mut(channels) {
                    let mut sample = 0.0f32;
                    for i in 0..3 {
                        sample += phases[i].sin() * gains[i];
                        phases[i] += std::f32::consts::TAU * freqs[i] / sample_rate;
                        if phases[i] > std::f32::consts::TAU {
                            phases[i] -= std::f32::consts::TAU;
                        }
                    }
                    lfo_phase += std::f32::consts::TAU * lfo_rate / sample_rate;
                    if lfo_phase > std::f32::consts::TAU {
                        lfo_phase -= std::f32::consts::TAU;
                    }
                    let swell = 0.75 + 0.25 * lfo_phase.sin();
                    let value = sample * level * swell;
                    for out in frame.iter_mut() {
                        *out = value;
                    }
                }
            },
            |err| log::error!("audio stream error: {err}"),
            None,
        )
        .ok()?;
    if let Err(e) = stream.play() {
        log::error!("audio stream play error: {e}");
        return None;
    }
    Some(stream)
}
