use std::sync::Arc;
use std::time::Instant;

use crate::engine::EngineResult;
use crate::engine::animation::AnimationEngine;
use crate::engine::graphics::Renderer;
use crate::engine::renderable::{self, Renderable};

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowAttributes, WindowId};

/// Minimal winit wrapper (ApplicationHandler style).
///
/// Owns the frame loop: every `RedrawRequested` becomes one engine tick with
/// a monotonic timestamp in seconds, and every tick requests the next frame,
/// so the animation runs until the host closes the window.
pub struct Windowing;

impl Windowing {
    pub fn run_app(engine: AnimationEngine, renderer: Renderer) -> EngineResult<()> {
        let event_loop = EventLoop::new()?;
        // Keep frames coming; the scheduler's FPS measurement depends on a
        // steady tick cadence, not on input events.
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App {
            window: None,
            engine,
            renderer,
            started: None,
        };

        event_loop.run_app(&mut app)?;

        Ok(())
    }
}

struct App {
    window: Option<Arc<Window>>,
    engine: AnimationEngine,
    renderer: Renderer,
    started: Option<Instant>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs: WindowAttributes = Window::default_attributes()
            .with_title("globe-tour")
            .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 768.0));

        let window = event_loop
            .create_window(attrs)
            .expect("failed to create window");
        let window = Arc::new(window);

        let size = window.inner_size();
        self.renderer
            .resize(f64::from(size.width), f64::from(size.height));
        self.engine.set_viewport_width(f64::from(size.width));

        self.started = Some(Instant::now());
        self.window = Some(window);

        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => event_loop.exit(),

            WindowEvent::Resized(size) => {
                // Same thread as the tick path, so this is ordered before
                // the next render with no synchronization.
                self.renderer
                    .resize(f64::from(size.width), f64::from(size.height));
                self.engine.set_viewport_width(f64::from(size.width));

                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                let started = *self.started.get_or_insert_with(Instant::now);
                let timestamp = started.elapsed().as_secs_f64();

                let command = self.engine.tick(timestamp);
                renderable::apply_command(&mut self.renderer, &command).expect("draw failed");

                if let Some(w) = &self.window {
                    w.pre_present_notify();
                    w.request_redraw();
                }
            }

            _ => {}
        }
    }
}
