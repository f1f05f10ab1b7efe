use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use touch_rig::camera::{Camera, KeyboardMovement};
use touch_rig::cli::Cli;
use touch_rig::core::clock::FrameClock;
use touch_rig::core::input_adapter::WinitInput;
use touch_rig::core::{MobileControls, SensitivityConfig};
use touch_rig::layout::{ControlsLayout, WindowDimensions};
use touch_rig::renderer::{FrameView, OverlayRenderer};

// === Constants ===

const FPS_UPDATE_INTERVAL_MS: f32 = 1000.0;
const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;

// === Application ===

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<OverlayRenderer>,
    controls: MobileControls<Camera>,
    input: WinitInput,
    clock: FrameClock,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    fn new(cli: Cli, sensitivity: SensitivityConfig) -> Self {
        let layout = ControlsLayout::for_window(WindowDimensions::new(
            INITIAL_WINDOW_WIDTH as f32,
            INITIAL_WINDOW_HEIGHT as f32,
        ));

        let mut controls = MobileControls::new(
            layout.move_stick.geometry(),
            layout.look_stick.geometry(),
            sensitivity,
            Some(Camera::default()),
        )
        .with_mapping(cli.mapping());
        controls.set_enabled(!cli.touch_only);

        let input = WinitInput::new(layout, 1.0)
            .with_mouse_as_touch(!cli.no_mouse_touch)
            .with_activate_on_touch(cli.touch_only);

        Self {
            cli,
            window: None,
            renderer: None,
            controls,
            input,
            clock: FrameClock::new(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta_ms: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta_ms;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL_MS {
            self.fps = self.frame_count as f32 * 1000.0 / self.fps_update_timer;
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    fn relayout(&mut self, window: &Window) {
        let size = window.inner_size();
        let scale = window.scale_factor();
        let layout = ControlsLayout::for_window(WindowDimensions::from_physical(size.width, size.height, scale));
        self.input.set_layout(layout, scale, &mut self.controls);
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(camera) = self.controls.detach_camera() {
            info!("Final camera position: {:?}", camera.position);
        }
        event_loop.exit();
    }

    fn redraw(&mut self) {
        let delta_ms = self.clock.tick_ms();
        self.update_fps(delta_ms);
        self.controls
            .on_tick_with(delta_ms, &KeyboardMovement::new(&self.input));

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };
        let view = FrameView {
            controls: &mut self.controls,
            layout: self.input.layout(),
            fps: self.fps,
            show_hud: !self.cli.no_ui,
        };
        match renderer.render(window, view) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(e) => error!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Touch Rig")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(OverlayRenderer::new(window.clone())) {
            Ok(r) => r,
            Err(e) => {
                error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        self.relayout(&window);
        self.window = Some(window);
        self.renderer = Some(renderer);
        self.clock.reset();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.clone() else {
            return;
        };

        // egui owns the pointer while the settings dialog is up, but lifts always reach the sticks
        if let Some(renderer) = &mut self.renderer {
            let consumed = renderer.handle_event(&window, &event);
            if self.controls.settings_open()
                && (consumed || renderer.wants_pointer())
                && !WinitInput::is_release(&event)
            {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => self.shutdown(event_loop),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                if self.controls.settings_open() {
                    self.controls.on_settings_close();
                } else {
                    self.shutdown(event_loop);
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
                self.relayout(&window);
            }
            WindowEvent::ScaleFactorChanged { .. } => self.relayout(&window),
            WindowEvent::Focused(true) => self.clock.reset(),
            WindowEvent::RedrawRequested => self.redraw(),
            other => {
                self.input.process_event(&other, &mut self.controls);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let sensitivity = match cli.sensitivity() {
        Ok(config) => config,
        Err(e) => {
            warn!("{:#}; using default sensitivity", e);
            cli.apply_overrides(SensitivityConfig::default())
        }
    };

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, sensitivity);

    println!("Touch Rig - drag the left stick to move, the right stick to look, WASD works too. Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
