use anyhow::Result;
use clap::Parser;
use egui::Context as EguiContext;
use shadowbox_input::Action;
use shadowbox_render_wgpu::WgpuRenderer;
use shadowbox_scene::Scene;
use shadowbox_tools::SceneInspector;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "shadowbox-desktop", about = "Shadow mapping demo application")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Start in the shadow-map view instead of the camera view
    #[arg(long)]
    overlay: bool,
}

/// Application state.
struct AppState {
    scene: Scene,
    show_overlay: bool,
    show_hud: bool,
    fps: f32,
    last_frame: Instant,
}

impl AppState {
    fn new(show_overlay: bool) -> Self {
        Self {
            scene: Scene::new(),
            show_overlay,
            show_hud: true,
            fps: 0.0,
            last_frame: Instant::now(),
        }
    }

    fn update(&mut self, dt: f32) {
        self.scene.advance(dt);
        // Sampled once a second; one frame's delta stands in for the average.
        if self.scene.frame() % 60 == 0 && dt > 0.0 {
            self.fps = 1.0 / dt;
        }
    }

    /// Toggles fire on key release.
    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            return;
        }
        self.apply(action_for_key(key));
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::ToggleOverlay => {
                self.show_overlay = !self.show_overlay;
                if self.show_overlay {
                    tracing::info!("switching to shadow map view");
                } else {
                    tracing::info!("switching to camera view");
                }
            }
            Action::ToggleHud => {
                self.show_hud = !self.show_hud;
            }
            Action::Noop => {}
        }
    }

    fn draw_ui(&mut self, ctx: &EguiContext) {
        if !self.show_hud {
            return;
        }

        let summary = SceneInspector::summary(&self.scene);

        egui::SidePanel::left("scene_panel")
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.heading("Shadowbox");
                ui.separator();
                ui.label(format!("{} FPS", self.fps as u32));
                ui.label(format!(
                    "Frame: {}  t: {:.1}s",
                    summary.frame, summary.time_seconds
                ));
                ui.label(format!(
                    "Camera: ({:.1}, {:.1}, {:.1})",
                    summary.camera_position[0],
                    summary.camera_position[1],
                    summary.camera_position[2]
                ));
                ui.label(format!(
                    "Light: ({:.1}, {:.1}, {:.1})",
                    summary.light_position[0],
                    summary.light_position[1],
                    summary.light_position[2]
                ));
                ui.label(format!("Shadow map: {0}x{0}", summary.shadow_map_size));
                ui.separator();

                ui.heading("Objects");
                for info in SceneInspector::objects(&self.scene) {
                    ui.label(info.to_string());
                }

                ui.separator();
                ui.label(if self.show_overlay {
                    "View: shadow map"
                } else {
                    "View: camera"
                });
                ui.small("Enter: Toggle View | F1: Toggle Panel");
            });
    }
}

fn action_for_key(key: KeyCode) -> Action {
    match key {
        KeyCode::Enter => Action::ToggleOverlay,
        KeyCode::F1 => Action::ToggleHud,
        _ => Action::Noop,
    }
}

struct GpuApp {
    state: AppState,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<WgpuRenderer>,
    egui_ctx: EguiContext,
    egui_winit: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
}

impl GpuApp {
    fn new(show_overlay: bool) -> Self {
        Self {
            state: AppState::new(show_overlay),
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
            egui_ctx: EguiContext::default(),
            egui_winit: None,
            egui_renderer: None,
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Shadowbox")
            .with_inner_size(PhysicalSize::new(1280u32, 720));
        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("find adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("shadowbox_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .expect("create device");

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        self.state.scene.camera.aspect = size.width as f32 / size.height.max(1) as f32;

        let renderer = WgpuRenderer::new(&device, surface_format, size.width, size.height);

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer =
            egui_wgpu::Renderer::new(&device, renderer.surface_format(), None, 1, false);

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);
        self.egui_winit = Some(egui_winit);
        self.egui_renderer = Some(egui_renderer);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(egui_winit) = &mut self.egui_winit {
            let response = egui_winit.on_window_event(self.window.as_ref().unwrap(), &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(surface), Some(device), Some(config)) =
                    (&self.surface, &self.device, &mut self.config)
                {
                    config.width = new_size.width.max(1);
                    config.height = new_size.height.max(1);
                    surface.configure(device, config);
                    self.state.scene.camera.aspect =
                        config.width as f32 / config.height.max(1) as f32;
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(device, config.width, config.height);
                    }
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                self.state
                    .handle_key(key, key_state == ElementState::Pressed);
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = (now - self.state.last_frame).as_secs_f32().min(0.1);
                self.state.last_frame = now;
                self.state.update(dt);

                let (Some(surface), Some(device), Some(queue)) =
                    (&self.surface, &self.device, &self.queue)
                else {
                    return;
                };

                let output = match surface.get_current_texture() {
                    Ok(t) => t,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        if let Some(config) = &self.config {
                            surface.configure(device, config);
                        }
                        return;
                    }
                    Err(e) => {
                        tracing::error!("surface error: {e}");
                        return;
                    }
                };

                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                if let Some(renderer) = &self.renderer {
                    renderer.render(
                        device,
                        queue,
                        &view,
                        &self.state.scene,
                        self.state.show_overlay,
                    );
                }

                let raw_input = self
                    .egui_winit
                    .as_mut()
                    .unwrap()
                    .take_egui_input(self.window.as_ref().unwrap());
                let full_output = self.egui_ctx.run(raw_input, |ctx| {
                    self.state.draw_ui(ctx);
                });

                self.egui_winit.as_mut().unwrap().handle_platform_output(
                    self.window.as_ref().unwrap(),
                    full_output.platform_output,
                );

                let paint_jobs = self
                    .egui_ctx
                    .tessellate(full_output.shapes, full_output.pixels_per_point);

                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: [
                        self.config.as_ref().unwrap().width,
                        self.config.as_ref().unwrap().height,
                    ],
                    pixels_per_point: full_output.pixels_per_point,
                };

                {
                    let egui_renderer = self.egui_renderer.as_mut().unwrap();
                    for (id, image_delta) in &full_output.textures_delta.set {
                        egui_renderer.update_texture(device, queue, *id, image_delta);
                    }
                    let mut encoder =
                        device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("egui_encoder"),
                        });
                    egui_renderer.update_buffers(
                        device,
                        queue,
                        &mut encoder,
                        &paint_jobs,
                        &screen_descriptor,
                    );
                    {
                        let mut pass = encoder
                            .begin_render_pass(&wgpu::RenderPassDescriptor {
                                label: Some("egui_pass"),
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
                        egui_renderer.render(&mut pass, &paint_jobs, &screen_descriptor);
                    }
                    queue.submit(std::iter::once(encoder.finish()));
                    for id in &full_output.textures_delta.free {
                        egui_renderer.free_texture(id);
                    }
                }

                output.present();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("shadowbox-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(cli.overlay);
    event_loop.run_app(&mut app)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_toggles_the_overlay_on_release() {
        let mut state = AppState::new(false);
        state.handle_key(KeyCode::Enter, true);
        assert!(!state.show_overlay);
        state.handle_key(KeyCode::Enter, false);
        assert!(state.show_overlay);
        state.handle_key(KeyCode::Enter, false);
        assert!(!state.show_overlay);
    }

    #[test]
    fn f1_toggles_the_hud() {
        let mut state = AppState::new(false);
        assert!(state.show_hud);
        state.apply(Action::ToggleHud);
        assert!(!state.show_hud);
    }

    #[test]
    fn unbound_keys_are_noops() {
        assert_eq!(action_for_key(KeyCode::KeyQ), Action::Noop);
        assert_eq!(action_for_key(KeyCode::Enter), Action::ToggleOverlay);
    }

    #[test]
    fn update_advances_scene_and_samples_fps() {
        let mut state = AppState::new(false);
        for _ in 0..60 {
            state.update(1.0 / 60.0);
        }
        assert_eq!(state.scene.frame(), 60);
        assert!((state.fps - 60.0).abs() < 1.0);
    }
}
