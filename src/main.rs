//! Bounce2D - 2D physics playground
//!
//! A dynamic box bounces around a staircase of platforms under keyboard
//! control while a kinematic platform sweeps the scene. Arrow keys push
//! the actor, Space pushes it up, R resets it, F/N switch fullscreen,
//! W/S toggle wireframe, Escape exits.

use std::time::{Duration, Instant};

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use bounce2d::config::AppConfig;
use bounce2d::input::{InputAction, InputMapper};
use bounce2d::scene::{standard_scene, GameScene};
use bounce2d::systems::{RenderError, RenderSystem, SimulationSystem, SimulationTuning, WindowSystem};
use bounce2d_input::{HeldKeys, MoveKey};

/// Main application state
struct App {
    config: AppConfig,
    scene: GameScene,
    simulation: SimulationSystem,
    held_keys: HeldKeys,
    window_system: Option<WindowSystem>,
    render_system: Option<RenderSystem>,
    wireframe: bool,
    tick_interval: Duration,
    next_tick: Instant,
}

impl App {
    fn new() -> Self {
        // Load configuration
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        // Build the fixed world once; bodies live for the whole run
        let scene = standard_scene(config.physics.to_physics_config());
        log::info!(
            "Scene ready: {} bodies, {} static obstacles",
            scene.physics.body_count(),
            scene.obstacles.len()
        );

        let simulation = SimulationSystem::new(SimulationTuning {
            forces: config.input.to_force_tuning(),
            boundary_x: config.physics.boundary_x,
        });

        let tick_interval = Duration::from_millis(config.physics.tick_interval_ms);

        Self {
            config,
            scene,
            simulation,
            held_keys: HeldKeys::new(),
            window_system: None,
            render_system: None,
            wireframe: false,
            tick_interval,
            next_tick: Instant::now(),
        }
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ResetActor => {
                self.simulation.reset_actor(&mut self.scene);
                log::info!("Actor reset to origin");
            }
            InputAction::Fullscreen => {
                if let Some(window_system) = &self.window_system {
                    window_system.fullscreen();
                }
            }
            InputAction::Windowed => {
                if let Some(window_system) = &self.window_system {
                    window_system.windowed();
                }
            }
            InputAction::WireframeOn | InputAction::WireframeOff => {
                let wanted = action == InputAction::WireframeOn;
                if let Some(render_system) = &mut self.render_system {
                    self.wireframe = render_system.set_wireframe(wanted);
                    if self.wireframe != wanted {
                        log::warn!("Wireframe rendering not supported on this adapter");
                    }
                }
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window_system.is_none() {
            let window_system = WindowSystem::create(event_loop, &self.config.window)
                .expect("Failed to create window");

            let render_system = RenderSystem::new(
                window_system.window().clone(),
                self.config.rendering.clone(),
                self.config.camera.to_camera(),
                self.config.window.vsync,
            );

            self.window_system = Some(window_system);
            self.render_system = Some(render_system);
            self.next_tick = Instant::now() + self.tick_interval;
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    // Movement keys feed the held-key set
                    if let Some(move_key) = MoveKey::from_key_code(key) {
                        match event.state {
                            ElementState::Pressed => self.held_keys.press(move_key),
                            ElementState::Released => self.held_keys.release(move_key),
                        }
                        return;
                    }

                    // Everything else is a one-shot action
                    if !event.repeat {
                        if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                            self.handle_action(action, event_loop);
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let (Some(render_system), Some(window_system)) =
                    (&mut self.render_system, &self.window_system)
                else {
                    return;
                };

                match render_system.render_frame(&self.scene) {
                    Ok(()) => {}
                    Err(RenderError::SurfaceLost) => {
                        render_system.recover_surface();
                        window_system.request_redraw();
                    }
                    Err(RenderError::OutOfMemory) => {
                        log::error!("GPU out of memory, exiting");
                        event_loop.exit();
                    }
                    Err(e) => {
                        log::warn!("Render error: {}", e);
                    }
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Open-loop tick timer: every expiry advances the world by one
        // fixed step, however late the wakeup was. No catch-up ticks.
        let now = Instant::now();
        if now >= self.next_tick {
            self.simulation.tick(&mut self.scene, &self.held_keys);
            if let Some(window_system) = &self.window_system {
                window_system.request_redraw();
            }
            self.next_tick = now + self.tick_interval;
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_tick));
    }
}

fn main() {
    env_logger::init();
    log::info!("Starting Bounce2D");

    let event_loop = EventLoop::new().expect("Failed to create event loop");

    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
