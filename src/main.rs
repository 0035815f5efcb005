use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use glam::Vec3;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{WindowAttributes, WindowId},
};

use free_look_camera::cli::Cli;
use free_look_camera::core::gamepad::default_bindings;
use free_look_camera::core::{Clock, FixedHz, GilrsActions, WinitInput};
use free_look_camera::traits::NoActions;
use free_look_camera::window::Window;
use free_look_camera::{CameraPose, FreeLookCamera, FreeLookConfig};

// === Constants ===

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;
const MAX_FRAME_DELTA: Duration = Duration::from_millis(100);
const START_POSITION: Vec3 = Vec3::new(0.0, 1.5, 5.0);

struct App {
    camera: FreeLookCamera,
    input: WinitInput,
    gamepad: Option<GilrsActions>,
    window: Option<Window>,
    clock: Clock,
    log_timer: FixedHz,
}

impl App {
    fn new(cli: &Cli, config: FreeLookConfig) -> Self {
        let gamepad = if cli.no_gamepad {
            None
        } else {
            open_gamepad(&config)
        };

        let pose = CameraPose::new(START_POSITION, 0.0, 0.0);
        let camera = match &gamepad {
            Some(pad) => FreeLookCamera::with_pose(config, pose, pad),
            None => FreeLookCamera::with_pose(config, pose, &NoActions),
        };

        Self {
            camera,
            input: WinitInput::new(),
            gamepad,
            window: None,
            clock: Clock::new().with_max_delta(MAX_FRAME_DELTA),
            log_timer: FixedHz::every(cli.log_interval.max(0.05)),
        }
    }

    fn redraw(&mut self) {
        let dt = self.clock.tick();
        let Some(window) = self.window.as_mut() else {
            return;
        };

        self.camera.drain_events(window);
        match self.gamepad.as_mut() {
            Some(pad) => {
                pad.poll();
                self.camera.update(dt, &*pad, window);
            }
            None => {
                self.camera.update(dt, &NoActions, window);
            }
        }

        if self.log_timer.tick(dt) {
            let pose = self.camera.pose();
            let summary = format!(
                "pos ({:.2}, {:.2}, {:.2})  yaw {:.1}°  pitch {:.1}°",
                pose.position.x,
                pose.position.y,
                pose.position.z,
                pose.yaw.to_degrees(),
                pose.pitch.to_degrees(),
            );
            log::info!("{summary}");
            window.set_title(&format!("free-look - {summary}"));
        }

        window.request_redraw();
    }
}

fn open_gamepad(config: &FreeLookConfig) -> Option<GilrsActions> {
    match gilrs::Gilrs::new() {
        Ok(gilrs) => {
            let actions = GilrsActions::new(gilrs, default_bindings(&config.gamepad));
            log::info!("{} gamepad(s) connected", actions.connected());
            Some(actions)
        }
        Err(e) => {
            log::warn!("gamepad support unavailable: {e}");
            None
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = WindowAttributes::default()
            .with_title("free-look")
            .with_inner_size(winit::dpi::PhysicalSize::new(
                INITIAL_WINDOW_WIDTH,
                INITIAL_WINDOW_HEIGHT,
            ));

        match event_loop.create_window(attributes) {
            Ok(window) => {
                log::info!("hold Ctrl to look around, WASD to move, Esc to quit");
                let window = Window::new(Arc::new(window));
                window.request_redraw();
                self.window = Some(window);
                self.clock.reset();
            }
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::KeyboardInput { event: key, .. }
                if key.physical_key == PhysicalKey::Code(KeyCode::Escape)
                    && key.state.is_pressed() =>
            {
                event_loop.exit();
                return;
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
                return;
            }
            _ => {}
        }

        let camera = &mut self.camera;
        self.input.window_event(&event, |e| camera.queue_event(e));
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _id: DeviceId, event: DeviceEvent) {
        let camera = &mut self.camera;
        self.input.device_event(&event, |e| camera.queue_event(e));
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.load_config()?;

    let event_loop = EventLoop::new().context("creating event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(&cli, config);
    event_loop.run_app(&mut app).context("running event loop")?;
    Ok(())
}
