//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, Touch, TouchPhase, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use super::core::VerdantApp;

impl ApplicationHandler for VerdantApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut rs) = self.render_state {
                        rs.resize(size.width, size.height);
                    }
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.pointer_moved(position.x, position.y);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    match state {
                        ElementState::Pressed => {
                            let (x, y) = self.pointer.position;
                            self.pointer_pressed(x, y);
                        }
                        ElementState::Released => self.pointer_released(),
                    }
                }
            }

            WindowEvent::Touch(touch) => {
                self.handle_touch(touch);
            }

            WindowEvent::RedrawRequested => {
                if self.should_exit {
                    event_loop.exit();
                    return;
                }
                self.advance_and_render();
                // The scene animates continuously, so keep frames coming
                self.request_redraw();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
        }
    }
}

impl VerdantApp {
    pub(super) fn request_redraw(&self) {
        if let Some(ref w) = self.window {
            w.request_redraw();
        }
    }

    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }
        if let Key::Named(NamedKey::Escape) = event.logical_key {
            tracing::info!("Escape pressed, exiting");
            self.stop();
        }
    }

    /// Route touch input through the pointer path, tracking one finger.
    fn handle_touch(&mut self, touch: Touch) {
        match touch.phase {
            TouchPhase::Started => {
                if self.pointer.active_touch.is_none() {
                    self.pointer.active_touch = Some(touch.id);
                    self.pointer_pressed(touch.location.x, touch.location.y);
                }
            }
            TouchPhase::Moved => {
                if self.pointer.active_touch == Some(touch.id) {
                    self.pointer_moved(touch.location.x, touch.location.y);
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.pointer.active_touch == Some(touch.id) {
                    self.pointer_released();
                }
            }
        }
    }
}
