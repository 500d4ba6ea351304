use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use glam::DVec3;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window as WinitWindow, WindowId},
};

use trackball_camera::camera::{Camera, Perspective, ViewState};
use trackball_camera::cli::Cli;
use trackball_camera::core::event::Event;
use trackball_camera::core::input_adapter::WinitInput;
use trackball_camera::core::script::EventScript;
use trackball_camera::core::viewer::Viewer;
use trackball_camera::traits::{WindowContext, WindowExtent};
use trackball_camera::window::Window;

/// Starting view of the demo: looking at the origin from (1,1,1), Z up
fn demo_view() -> ViewState {
    ViewState::new(DVec3::ONE, DVec3::ZERO, DVec3::Z)
}

fn build_viewer(cli: &Cli, view: ViewState) -> Viewer {
    let (width, height) = cli.window_size();
    let camera = Camera::look_at(Perspective::for_extent(width, height), view);

    let mut viewer = Viewer::new(camera, WindowExtent::new(width, height))
        .with_frame_rate_logging(cli.print_frame_rate);
    if let Some(frames) = cli.frames {
        viewer = viewer.with_frame_limit(frames);
    }
    viewer.add_trackball(cli.home_key);
    viewer
}

fn describe(view: &ViewState) -> String {
    format!(
        "eye ({:.3}, {:.3}, {:.3})  center ({:.3}, {:.3}, {:.3})",
        view.eye.x, view.eye.y, view.eye.z, view.center.x, view.center.y, view.center.z
    )
}

/// Replay a recorded script and print the final view as JSON
fn run_script(cli: &Cli, script: EventScript) -> Result<()> {
    let mut viewer = build_viewer(cli, script.view.unwrap_or_else(demo_view));
    log::info!(
        "replaying {} events over {} frames",
        script.event_count(),
        script.frames.len()
    );

    for events in &script.frames {
        let Some((frame, _matrices)) = viewer.frame(events) else {
            break;
        };
        if let Some(view) = viewer.camera().look_at_state() {
            log::debug!("frame {}: {}", frame.number, describe(view));
        }
    }

    let view = viewer
        .camera()
        .look_at_state()
        .context("camera lost its look-at view")?;
    println!("{}", serde_json::to_string_pretty(view)?);
    Ok(())
}

struct App {
    viewer: Viewer,
    input: WinitInput,
    window: Option<Window>,
    pending: Vec<Event>,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(viewer: Viewer) -> Self {
        Self {
            viewer,
            input: WinitInput::new(),
            window: None,
            pending: Vec::new(),
            error: None,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let events = std::mem::take(&mut self.pending);
        if self.viewer.frame(&events).is_none() {
            event_loop.exit();
            return;
        }

        if let (Some(window), Some(view)) = (&self.window, self.viewer.camera().look_at_state()) {
            window.set_title(&format!("Trackball - {}", describe(view)));
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let extent = self.viewer.extent();
        let attributes = WinitWindow::default_attributes()
            .with_title("Trackball")
            .with_inner_size(winit::dpi::PhysicalSize::new(extent.width, extent.height));

        match event_loop.create_window(attributes) {
            Ok(w) => {
                let window = Window::new(Arc::new(w));
                let extent = window.extent();
                self.pending.push(Event::Expose {
                    width: extent.width,
                    height: extent.height,
                });
                self.window = Some(window);
            }
            Err(e) => {
                self.error = Some(anyhow::Error::new(e).context("Failed to create window"));
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
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            other => {
                let events = self.input.process_event(&other);
                self.pending.extend(events);
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

    if let Some(path) = &cli.script {
        let script = EventScript::load(path)?;
        return run_script(&cli, script);
    }

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(build_viewer(&cli, demo_view()));

    log::info!(
        "Trackball - left drag rotates, middle pans, right zooms, wheel dollies, {:?} resets, Escape quits",
        cli.home_key
    );
    event_loop.run_app(&mut app)?;

    match app.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
