//! Breathing Field
//!
//! Particles tethered to their home positions, pushed aside by the pointer
//! and sprung back once it leaves.

mod config;

use clap::Parser;
use config::Args;
use field_renderer::{Background, Camera, FieldRenderer, RenderError};
use field_simulation::{
    Canvas, ParticleField, PointerSignal, PointerTracker, ViewportMapping,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

/// Frames between debug reports of the field's kinetic energy
const ENERGY_LOG_INTERVAL: u64 = 600;

struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    renderer: FieldRenderer,
    camera: Camera,
}

impl GpuState {
    async fn new(window: Arc<Window>, field_size: Vec2, vsync: bool) -> Result<Self, RenderError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("✓ Using GPU: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                experimental_features: wgpu::ExperimentalFeatures::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        // Colors are linear, so prefer an sRGB surface
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or(RenderError::UnsupportedSurface)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: if vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = FieldRenderer::new(&device, config.format);
        log::info!("✓ Renderer initialized ({:?})", config.format);

        let camera = Camera::new(field_size, config.width, config.height);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            renderer,
            camera,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.camera.resize(new_size.width, new_size.height);
        }
    }

    /// Advance the field one frame and draw it. Returns the number of
    /// particles drawn.
    fn render(
        &mut self,
        field: &mut ParticleField,
        tracker: &PointerTracker,
        background: Background,
    ) -> Result<usize, wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.fill_background(background.color());

        #[cfg(feature = "parallel")]
        let drawn = {
            field.step(tracker.pointer());
            field.draw(&mut self.renderer)
        };
        #[cfg(not(feature = "parallel"))]
        let drawn = field.frame(tracker.pointer(), &mut self.renderer);

        self.renderer
            .render(&self.device, &self.queue, &view, &self.camera);
        output.present();

        Ok(drawn)
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    error: Option<RenderError>,

    field: ParticleField,
    tracker: PointerTracker,
    background: Background,
    vsync: bool,

    last_cursor_pos: Option<Vec2>,

    frame_times: VecDeque<f32>,
    last_frame_time: Instant,
    frame_counter: u64,
}

impl App {
    fn new(field: ParticleField, tracker: PointerTracker, background: Background, vsync: bool) -> Self {
        Self {
            window: None,
            gpu_state: None,
            error: None,
            field,
            tracker,
            background,
            vsync,
            last_cursor_pos: None,
            frame_times: VecDeque::with_capacity(100),
            last_frame_time: Instant::now(),
            frame_counter: 0,
        }
    }

    /// Rolling average over the last 100 frames: (fps, frame time in ms)
    fn track_frame_time(&mut self) -> (f32, f32) {
        let now = Instant::now();
        let frame_time = (now - self.last_frame_time).as_secs_f32() * 1000.0;
        self.last_frame_time = now;

        if self.frame_times.len() == 100 {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(frame_time);

        let avg = self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32;
        let fps = if avg > 0.0 { 1000.0 / avg } else { 0.0 };
        (fps, avg)
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let field_size = self.field.size();
        let window_attributes = Window::default_attributes()
            .with_title("Breathing Field")
            .with_inner_size(winit::dpi::LogicalSize::new(
                field_size.x as f64,
                field_size.y as f64,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(GpuState::new(window.clone(), field_size, self.vsync)) {
            Ok(gpu_state) => {
                let size = window.inner_size();
                self.tracker
                    .resize(Vec2::new(size.width as f32, size.height as f32));
                self.gpu_state = Some(gpu_state);
                self.window = Some(window);
            }
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),

            WindowEvent::Resized(physical_size) => {
                log::debug!(
                    "Resized to {}x{}",
                    physical_size.width,
                    physical_size.height
                );
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
                self.tracker.resize(Vec2::new(
                    physical_size.width as f32,
                    physical_size.height as f32,
                ));
            }

            WindowEvent::CursorEntered { .. } => self.tracker.handle(PointerSignal::Entered),

            WindowEvent::CursorLeft { .. } => self.tracker.handle(PointerSignal::Left),

            WindowEvent::CursorMoved { position, .. } => {
                let position = Vec2::new(position.x as f32, position.y as f32);
                self.last_cursor_pos = Some(position);
                self.tracker.handle(PointerSignal::Moved(position));
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    if let Some(position) = self.last_cursor_pos {
                        self.tracker.handle(PointerSignal::Pressed(position));
                    }
                }
                ElementState::Released => self.tracker.handle(PointerSignal::Released),
            },

            WindowEvent::RedrawRequested => {
                let (fps, frame_time) = self.track_frame_time();

                if let (Some(window), Some(gpu_state)) = (&self.window, &mut self.gpu_state) {
                    match gpu_state.render(&mut self.field, &self.tracker, self.background) {
                        Ok(drawn) => {
                            self.frame_counter += 1;
                            if self.frame_counter % ENERGY_LOG_INTERVAL == 0 {
                                log::debug!(
                                    "frame {}: kinetic energy {:.4}, pointer engaged: {}",
                                    self.frame_counter,
                                    self.field.kinetic_energy(),
                                    self.tracker.is_engaged()
                                );
                            }
                            window.set_title(&format!(
                                "Breathing Field - {:.0} FPS ({:.2}ms) - {} particles",
                                fps, frame_time, drawn
                            ));
                        }
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            gpu_state.resize(window.inner_size())
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("GPU out of memory");
                            event_loop.exit()
                        }
                        Err(e) => log::warn!("Render error: {:?}", e),
                    }
                }
            }

            _ => {}
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> ExitCode {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Starting breathing field ({:?} preset)...", args.preset);

    let params = args.field_params();
    let mut rng = args
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let field = match ParticleField::seed(&params, &mut rng) {
        Ok(field) => field,
        Err(e) => {
            log::error!("Invalid field parameters: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mapping = ViewportMapping::new(params.size, params.size);
    let tracker = PointerTracker::new(mapping, params.engage_on);
    let mut app = App::new(field, tracker, args.background(), args.vsync);

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return ExitCode::FAILURE;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop terminated: {}", e);
        return ExitCode::FAILURE;
    }

    match app.error {
        Some(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
        None => ExitCode::SUCCESS,
    }
}
