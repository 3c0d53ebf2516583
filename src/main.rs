//! Hyperview - interactive 4D projection viewer
//!
//! Shows a tumbling cube or a tesseract rotating in one of the six 4D
//! planes, projected 4D -> 3D -> screen.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use hyperview::config::AppConfig;
use hyperview::scene::SolidSet;
use hyperview::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};
use hyperview_input::{InputAction, InputMapper};

/// Everything that exists once the window is up
struct Viewer {
    window: WindowSystem,
    render: RenderSystem,
    solids: SolidSet,
}

/// Main application state
struct App {
    config: AppConfig,
    viewer: Option<Viewer>,
    simulation: SimulationSystem,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let simulation = SimulationSystem::new(config.animation.max_delta);
        Self {
            config,
            viewer: None,
            simulation,
        }
    }

    fn create_viewer(&self, event_loop: &ActiveEventLoop) -> Result<Viewer, Box<dyn std::error::Error>> {
        let window = WindowSystem::create(event_loop, &self.config.window)?;
        let mut render = RenderSystem::new(
            window.window().clone(),
            &self.config.camera,
            &self.config.rendering,
            self.config.window.vsync,
        )?;
        let solids = SolidSet::new(render.backend_mut(), &self.config.animation)?;

        Ok(Viewer {
            window,
            render,
            solids,
        })
    }

    fn handle_action(&mut self, event_loop: &ActiveEventLoop, action: InputAction) {
        let Some(viewer) = &mut self.viewer else {
            return;
        };

        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ToggleFullscreen => viewer.window.toggle_fullscreen(),
            InputAction::TogglePause => {
                self.simulation.toggle_pause();
            }
            other => {
                viewer.solids.apply(other);
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.simulation.tick();
        let paused = self.simulation.is_paused();

        let Some(viewer) = &mut self.viewer else {
            return;
        };

        viewer.solids.update(dt);
        viewer.window.update_title(&viewer.solids.status(), paused);

        match viewer.render.render_frame(&viewer.solids) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => viewer.render.recover_surface(),
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e @ RenderError::Core(_)) => {
                log::error!("{}", e);
                event_loop.exit();
            }
            Err(e) => log::warn!("{}", e),
        }

        viewer.window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.viewer.is_some() {
            return;
        }

        match self.create_viewer(event_loop) {
            Ok(viewer) => {
                let (width, height) = viewer.render.size();
                log::info!("Viewer ready at {}x{}", width, height);
                viewer.window.request_redraw();
                self.viewer = Some(viewer);
            }
            Err(e) => {
                log::error!("Failed to initialize viewer: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(viewer) = &mut self.viewer {
                    viewer.render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state, event.repeat) {
                        log::debug!("Key {:?} -> {:?}", key, action);
                        self.handle_action(event_loop, action);
                    }
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

fn main() {
    // Load configuration before logging so the configured level applies
    let config = AppConfig::load();
    let log_level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // RUST_LOG still overrides the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    log::info!("Starting Hyperview");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        std::process::exit(1);
    }
}
