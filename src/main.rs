//! Ballpit entry point
//!
//! Platform layer: window and surface creation, per-frame event drain,
//! and the fixed-cadence loop around the simulation core. Everything in
//! here is plumbing; the physics lives in `ballpit::sim`.

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use ballpit::SimConfig;
use ballpit::consts::{FRAME_DELAY_MS, VIEW_HEIGHT, VIEW_WIDTH};
use ballpit::renderer;
use ballpit::sim::{Event, FrameInput, World, advance};

struct App {
    world: World,
    /// Events drained since the last frame, applied between steps
    input: FrameInput,
    cursor: PhysicalPosition<f64>,
    frame_started: Instant,
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
}

impl App {
    fn new(world: World) -> Self {
        Self {
            world,
            input: FrameInput::default(),
            cursor: PhysicalPosition::new(0.0, 0.0),
            frame_started: Instant::now(),
            window: None,
            pixels: None,
        }
    }

    /// Queue a spawn at the surface pixel under the cursor
    fn queue_spawn(&mut self) {
        let Some(pixels) = self.pixels.as_ref() else {
            return;
        };
        let pos = (self.cursor.x as f32, self.cursor.y as f32);
        if let Ok((x, y)) = pixels.window_pos_to_pixel(pos) {
            info!("spawn disc at ({x}, {y})");
            self.input.events.push(Event::SpawnAt {
                x: x as i32,
                y: y as i32,
            });
        }
    }

    /// Run one frame: step the drained input, rasterize, present, pace
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let input = std::mem::take(&mut self.input);
        if !advance(&mut self.world, &input) {
            event_loop.exit();
            return;
        }

        if let Some(pixels) = self.pixels.as_mut() {
            renderer::render(&self.world, pixels.frame_mut(), VIEW_WIDTH, VIEW_HEIGHT);
            if let Err(err) = pixels.render() {
                error!("surface present failed: {err}");
                event_loop.exit();
                return;
            }
        }

        // Fixed cadence: block out the rest of the frame budget
        let elapsed = self.frame_started.elapsed();
        let budget = Duration::from_millis(FRAME_DELAY_MS);
        if elapsed < budget {
            std::thread::sleep(budget - elapsed);
        } else {
            debug!("frame overran its {FRAME_DELAY_MS} ms budget: {elapsed:?}");
        }
        self.frame_started = Instant::now();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("ballpit")
            .with_inner_size(LogicalSize::new(VIEW_WIDTH, VIEW_HEIGHT))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .expect("failed to create window"),
        );

        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, window.clone());
        let pixels = Pixels::new(VIEW_WIDTH, VIEW_HEIGHT, surface)
            .expect("failed to create pixel surface");
        info!(
            "surface ready: {}x{} buffer in a {}x{} window",
            VIEW_WIDTH, VIEW_HEIGHT, size.width, size.height
        );

        window.request_redraw();
        self.window = Some(window);
        self.pixels = Some(pixels);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.input.events.push(Event::Quit);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                self.input.events.push(Event::Quit);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = position;
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.queue_spawn();
            }
            WindowEvent::Resized(size) => {
                if let Some(pixels) = self.pixels.as_mut() {
                    if let Err(err) = pixels.resize_surface(size.width, size.height) {
                        error!("surface resize failed: {err}");
                        event_loop.exit();
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
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

fn main() {
    env_logger::init();

    // Seed only feeds spawn colors; wall-clock is fine outside tests
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    info!("ballpit {VIEW_WIDTH}x{VIEW_HEIGHT}, color seed {seed}");

    let event_loop = EventLoop::new().expect("failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(World::new(SimConfig::default(), seed));
    let _ = event_loop.run_app(&mut app);
}
