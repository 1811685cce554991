//! Text overlay rendered via egui on top of the quad.
//!
//! Two pieces of UI: the always-visible key hint anchored at the bottom-left
//! (the original draws its bitmap font at x=10, 20px above the bottom edge),
//! and a stats window toggled with F3.
//!
//! Integration pattern: egui requires a three-phase render split because
//! `egui_wgpu::Renderer::render()` needs a `RenderPass<'static>`, while
//! `begin_render_pass` borrows the encoder. The phases are:
//!
//!   1. `prepare()` -- run egui UI logic, produce tessellated primitives
//!   2. `upload()`  -- upload textures and update GPU buffers (borrows encoder mutably)
//!   3. `paint()`   -- render into a new render pass with `forget_lifetime()`
//!   4. `cleanup()` -- free textures egui no longer references
//!
//! egui event handling stays active even while the stats window is hidden so
//! it can intercept clicks whenever it is shown again.

use qw_core::time::FrameClock;
use qw_core::DisplayMode;
use winit::window::Window;

const HINT_TEXT: &str = "Hit space baby";
const HINT_X: f32 = 10.0;
const HINT_MARGIN_BOTTOM: f32 = 20.0;

#[derive(Debug, Clone)]
pub struct OverlayStats {
    pub mode: DisplayMode,
    /// "min/mag = Nearest, wrap = Repeat/Repeat" style detail line.
    pub sampler_detail: String,
    pub quad_label: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct OverlayActions {
    /// User clicked the mode cycle button (same effect as releasing Space).
    pub cycle_mode: bool,
}

pub struct HintOverlay {
    pub egui_ctx: egui::Context,
    pub egui_winit_state: egui_winit::State,
    pub egui_renderer: egui_wgpu::Renderer,
    pub stats_visible: bool,
}

impl HintOverlay {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        window: &Window,
    ) -> Self {
        let egui_ctx = egui::Context::default();
        let egui_winit_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            window,
            None,
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(device, surface_format, None, 1, false);

        Self {
            egui_ctx,
            egui_winit_state,
            egui_renderer,
            stats_visible: false,
        }
    }

    pub fn handle_window_event(
        &mut self,
        window: &Window,
        event: &winit::event::WindowEvent,
    ) -> bool {
        let response = self.egui_winit_state.on_window_event(window, event);
        response.consumed
    }

    pub fn toggle_stats(&mut self) {
        self.stats_visible = !self.stats_visible;
        log::info!(
            "Stats overlay: {}",
            if self.stats_visible { "ON" } else { "OFF" }
        );
    }

    pub fn prepare(
        &mut self,
        window: &Window,
        clock: &FrameClock,
        stats: &OverlayStats,
    ) -> (
        Vec<egui::ClippedPrimitive>,
        egui::TexturesDelta,
        OverlayActions,
    ) {
        let mut actions = OverlayActions::default();
        let raw_input = self.egui_winit_state.take_egui_input(window);
        let stats_visible = self.stats_visible;
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            // Always-on hint, pinned above the bottom-left corner.
            egui::Area::new(egui::Id::new("hint"))
                .anchor(
                    egui::Align2::LEFT_BOTTOM,
                    [HINT_X, -HINT_MARGIN_BOTTOM],
                )
                .interactable(false)
                .show(ctx, |ui| {
                    ui.label(
                        egui::RichText::new(HINT_TEXT)
                            .color(egui::Color32::WHITE)
                            .size(18.0),
                    );
                });

            if stats_visible {
                egui::Window::new("Quadwrap")
                    .default_pos([10.0, 10.0])
                    .show(ctx, |ui| {
                        ui.label(format!("FPS: {:.1}", clock.smoothed_fps));
                        ui.label(format!(
                            "Frame time: {:.2} ms",
                            clock.smoothed_frame_time_ms
                        ));
                        ui.label(format!("Frame: {}", clock.frame_count));
                        ui.separator();
                        ui.horizontal(|ui| {
                            ui.label(format!("Mode: {}", stats.mode));
                            if ui.button("Cycle").clicked() {
                                actions.cycle_mode = true;
                            }
                        });
                        ui.label(&stats.sampler_detail);
                        ui.label(format!("Quad: {}", stats.quad_label));
                    });
            }
        });

        self.egui_winit_state
            .handle_platform_output(window, full_output.platform_output);

        let primitives = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        (primitives, full_output.textures_delta, actions)
    }

    /// Upload textures and update buffers. Call before creating the egui render pass.
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        primitives: &[egui::ClippedPrimitive],
        textures_delta: &egui::TexturesDelta,
        screen_descriptor: &egui_wgpu::ScreenDescriptor,
    ) {
        for (id, image_delta) in &textures_delta.set {
            self.egui_renderer
                .update_texture(device, queue, *id, image_delta);
        }

        self.egui_renderer
            .update_buffers(device, queue, encoder, primitives, screen_descriptor);
    }

    /// Render into an existing render pass. Call after `upload()`.
    pub fn paint(
        &self,
        render_pass: &mut wgpu::RenderPass<'static>,
        primitives: &[egui::ClippedPrimitive],
        screen_descriptor: &egui_wgpu::ScreenDescriptor,
    ) {
        self.egui_renderer
            .render(render_pass, primitives, screen_descriptor);
    }

    /// Free textures that egui no longer needs. Call after rendering.
    pub fn cleanup(&mut self, textures_delta: &egui::TexturesDelta) {
        for id in &textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
    }
}
