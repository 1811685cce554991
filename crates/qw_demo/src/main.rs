//! Quadwrap -- textured quad filter/wrap demo, main loop and entry point.
//!
//! Architecture: winit drives the event loop via `ApplicationHandler`; all
//! per-frame work happens inside `RedrawRequested`. There is no simulation and
//! no fixed timestep -- the only mutable state is the current [`DisplayMode`],
//! advanced when Space is *released* (matching the original demo's key-up
//! handling) or when the overlay's Cycle button is clicked.
//!
//! GPU resources are created once in `resumed`: the quad pipeline, the two
//! meshes (unit UVs vs. 4x2 tiled UVs), and six texture bind groups -- one per
//! display mode, each pairing the same texture view with a differently
//! configured sampler. A mode change is therefore just an index change; the
//! render pass binds `mode_bind_groups[mode.index()]` and draws the mesh the
//! mode's [`QuadVariant`] selects.

mod config;

use std::path::Path;
use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use config::{load_config_or_default, DemoConfig};
use qw_core::{DisplayMode, FrameClock, InputState, Key, QuadVariant};
use qw_devtools::{HintOverlay, OverlayStats};
use qw_platform::window::PlatformConfig;
use qw_render::{GpuContext, QuadMesh, QuadPipeline, Texture};

const CONFIG_PATH: &str = "assets/quadwrap.json";
const FALLBACK_TEXTURE_BYTES: &[u8] = include_bytes!("../../../assets/textures/bob.png");

struct DemoState {
    window: Arc<Window>,
    gpu: GpuContext,
    clock: FrameClock,
    input: InputState,
    pipeline: QuadPipeline,
    overlay: HintOverlay,

    small_quad: QuadMesh,
    tiled_quad: QuadMesh,
    /// One bind group per display mode, indexed by `DisplayMode::index()`.
    /// Same texture view throughout; only the sampler differs.
    mode_bind_groups: Vec<wgpu::BindGroup>,
    mode: DisplayMode,
}

impl DemoState {
    fn new(window: Arc<Window>, config: &DemoConfig) -> Self {
        let gpu = GpuContext::new(window.clone());
        let pipeline = QuadPipeline::new(&gpu.device, gpu.config.format);
        let overlay = HintOverlay::new(&gpu.device, gpu.config.format, &window);

        let texture = load_quad_texture(&gpu.device, &gpu.queue, &config.texture);
        let mode_bind_groups = DisplayMode::ALL
            .iter()
            .map(|&mode| pipeline.create_mode_bind_group(&gpu.device, &texture, mode))
            .collect();

        let small_quad = QuadMesh::new(&gpu.device, QuadVariant::Small);
        let tiled_quad = QuadMesh::new(&gpu.device, QuadVariant::Tiled);

        let mode = DisplayMode::default();
        log::info!("Display mode: {} ({})", mode, sampler_detail(mode));

        Self {
            window,
            gpu,
            clock: FrameClock::new(),
            input: InputState::new(),
            pipeline,
            overlay,
            small_quad,
            tiled_quad,
            mode_bind_groups,
            mode,
        }
    }

    fn advance_mode(&mut self) {
        self.mode = self.mode.next();
        log::info!(
            "Display mode: {} ({})",
            self.mode,
            sampler_detail(self.mode)
        );
    }

    fn current_mesh(&self) -> &QuadMesh {
        match self.mode.quad_variant() {
            QuadVariant::Small => &self.small_quad,
            QuadVariant::Tiled => &self.tiled_quad,
        }
    }
}

struct App {
    config: DemoConfig,
    state: Option<DemoState>,
}

impl App {
    fn new(config: DemoConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        let platform_config = PlatformConfig {
            title: self.config.title.clone(),
            width: self.config.width,
            height: self.config.height,
        };
        let window = qw_platform::window::create_window(event_loop, &platform_config);
        log::info!(
            "Window created: {}x{}",
            self.config.width,
            self.config.height
        );
        self.state = Some(DemoState::new(window, &self.config));
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let state = match self.state.as_mut() {
            Some(s) => s,
            None => return,
        };

        let egui_consumed = state.overlay.handle_window_event(&state.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                let w = physical_size.width;
                let h = physical_size.height;
                if w > 0 && h > 0 {
                    state.gpu.resize(w, h);
                    log::info!("Resized to {}x{}", w, h);
                }
            }

            WindowEvent::KeyboardInput { event, .. } if !egui_consumed => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    if let Some(demo_key) = map_key(key_code) {
                        match event.state {
                            ElementState::Pressed => state.input.key_down(demo_key),
                            ElementState::Released => state.input.key_up(demo_key),
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if state.gpu.size.0 == 0 || state.gpu.size.1 == 0 {
                    return;
                }
                state.clock.begin_frame();

                if state.input.is_just_pressed(Key::Escape) {
                    event_loop.exit();
                    return;
                }
                if state.input.is_just_pressed(Key::F3) {
                    state.overlay.toggle_stats();
                }
                // The original advances on key *release*, not press.
                if state.input.is_just_released(Key::Space) {
                    state.advance_mode();
                }

                let Some((output, view)) = state.gpu.begin_frame() else {
                    return;
                };

                let stats = OverlayStats {
                    mode: state.mode,
                    sampler_detail: sampler_detail(state.mode),
                    quad_label: match state.mode.quad_variant() {
                        QuadVariant::Small => "small (1x1 UV)",
                        QuadVariant::Tiled => "tiled (4x2 UV)",
                    },
                };
                let (egui_primitives, egui_textures_delta, overlay_actions) =
                    state.overlay.prepare(&state.window, &state.clock, &stats);
                if overlay_actions.cycle_mode {
                    state.advance_mode();
                }

                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: [state.gpu.size.0, state.gpu.size.1],
                    pixels_per_point: state.window.scale_factor() as f32,
                };

                let mut encoder =
                    state
                        .gpu
                        .device
                        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("Quadwrap Encoder"),
                        });

                {
                    let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("Quad Render Pass"),
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                                store: wgpu::StoreOp::Store,
                            },
                        })],
                        depth_stencil_attachment: None,
                        ..Default::default()
                    });

                    render_pass.set_pipeline(&state.pipeline.render_pipeline);
                    render_pass.set_bind_group(
                        0,
                        &state.mode_bind_groups[state.mode.index()],
                        &[],
                    );
                    state.current_mesh().draw(&mut render_pass);
                }

                state.overlay.upload(
                    &state.gpu.device,
                    &state.gpu.queue,
                    &mut encoder,
                    &egui_primitives,
                    &egui_textures_delta,
                    &screen_descriptor,
                );

                {
                    let mut egui_pass = encoder
                        .begin_render_pass(&wgpu::RenderPassDescriptor {
                            label: Some("Overlay Render Pass"),
                            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                                view: &view,
                                resolve_target: None,
                                ops: wgpu::Operations {
                                    load: wgpu::LoadOp::Load,
                                    store: wgpu::StoreOp::Store,
                                },
                            })],
                            depth_stencil_attachment: None,
                            ..Default::default()
                        })
                        .forget_lifetime();

                    state
                        .overlay
                        .paint(&mut egui_pass, &egui_primitives, &screen_descriptor);
                }

                state.overlay.cleanup(&egui_textures_delta);

                state.gpu.queue.submit(std::iter::once(encoder.finish()));
                output.present();

                state.input.end_frame();
            }

            _ => {}
        }
    }
}

fn map_key(key_code: KeyCode) -> Option<Key> {
    match key_code {
        KeyCode::Space => Some(Key::Space),
        KeyCode::Escape => Some(Key::Escape),
        KeyCode::F3 => Some(Key::F3),
        _ => None,
    }
}

fn sampler_detail(mode: DisplayMode) -> String {
    let p = mode.sampling_params();
    format!(
        "min/mag: {:?}/{:?}  wrap: {:?}/{:?}",
        p.min_filter, p.mag_filter, p.wrap_s, p.wrap_t
    )
}

fn load_quad_texture(device: &wgpu::Device, queue: &wgpu::Queue, path: &str) -> Texture {
    match std::fs::read(path) {
        Ok(bytes) => match Texture::from_bytes(device, queue, &bytes, path) {
            Ok(texture) => return texture,
            Err(err) => log::warn!("{err}. Falling back to built-in texture."),
        },
        Err(err) => log::warn!(
            "Failed to read texture '{}': {}. Falling back to built-in texture.",
            path,
            err
        ),
    }
    // The compiled-in bytes are known-good; failing to decode them is a bug.
    Texture::from_bytes(device, queue, FALLBACK_TEXTURE_BYTES, "builtin checker")
        .expect("Built-in fallback texture failed to decode")
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Quadwrap starting...");

    let config = match load_config_or_default(Path::new(CONFIG_PATH)) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
