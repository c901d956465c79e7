//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use folio_common::{Rect, SurfaceId};
use folio_scene::OrbitCamera;
use folio_ui::Page;

use super::core::FolioApp;
use super::keys::{classify_key, KeyInput};
use super::pointer::{cursor_zone, drag_mode, wheel_scroll, DragMode, OrbitDrag, WheelScroll};

impl ApplicationHandler for FolioApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.start_live_reload();
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
                    self.request_redraw();
                }
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(ref mut rs) = self.render_state {
                    rs.set_scale_factor(scale_factor);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let scale = self.scale_factor();
                let pos = ((position.x / scale) as f32, (position.y / scale) as f32);
                self.handle_cursor_moved(pos);
            }

            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                self.page.set_pointer(None);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.handle_mouse_input(state, button);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.handle_mouse_wheel(delta);
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            WindowEvent::RedrawRequested => {
                if self.should_exit {
                    event_loop.exit();
                    return;
                }
                self.render_frame();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

/// The orbit camera shown on `surface`.
fn surface_camera(page: &mut Page, surface: SurfaceId) -> &mut OrbitCamera {
    match surface {
        SurfaceId::Hero => page.hero_mut().camera_mut(),
        SurfaceId::Playground => page.playground_mut().camera_mut(),
    }
}

impl FolioApp {
    /// The 3D surface under `(x, y)` in the last built frame.
    fn surface_at(&self, x: f32, y: f32) -> Option<(SurfaceId, Rect)> {
        [SurfaceId::Playground, SurfaceId::Hero]
            .into_iter()
            .find_map(|id| {
                let rect = self.page.surface_rect(id)?;
                rect.contains(x, y).then_some((id, rect))
            })
    }

    /// Track the pointer, feed an active orbit drag and update the cursor icon.
    fn handle_cursor_moved(&mut self, pos: (f32, f32)) {
        self.cursor = Some(pos);
        self.page.set_pointer(Some(pos));

        if let Some(mut drag) = self.drag {
            let (dx, dy) = drag.advance(pos);
            self.drag = Some(drag);
            match self.page.surface_rect(drag.surface) {
                Some(rect) => {
                    let camera = surface_camera(&mut self.page, drag.surface);
                    match drag.mode {
                        DragMode::Rotate => camera.rotate(dx, dy, rect.height),
                        DragMode::Pan => camera.pan(dx, dy, rect.height),
                    }
                }
                // Scrolled out of view mid-drag.
                None => self.end_drag(),
            }
        }

        self.update_cursor_icon();
    }

    fn update_cursor_icon(&mut self) {
        let Some((x, y)) = self.cursor else {
            return;
        };
        let zone = cursor_zone(
            self.list.hit_test(x, y),
            self.surface_at(x, y).is_some(),
            self.drag.is_some(),
        );
        let icon = zone.icon();
        if icon != self.cursor_icon {
            self.cursor_icon = icon;
            if let Some(ref w) = self.window {
                w.set_cursor(icon);
            }
        }
    }

    /// Clicks dispatch the action under the pointer; presses elsewhere blur
    /// the form and may start an orbit drag.
    fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        match state {
            ElementState::Pressed => {
                let Some((x, y)) = self.cursor else {
                    return;
                };

                if button == MouseButton::Left {
                    if let Some(hit) = self.list.hit_test(x, y) {
                        let action = hit.action.clone();
                        tracing::debug!(action = action.label(), "click");
                        self.dispatch(action);
                        return;
                    }
                    self.page.blur_form();
                }

                let Some(mode) = drag_mode(button, self.modifiers.shift_key()) else {
                    return;
                };
                if let Some((surface, _)) = self.surface_at(x, y) {
                    surface_camera(&mut self.page, surface).set_dragging(true);
                    self.drag = Some(OrbitDrag {
                        surface,
                        mode,
                        last: (x, y),
                    });
                    self.update_cursor_icon();
                }
            }
            ElementState::Released => {
                if self.drag.is_some() {
                    self.end_drag();
                    self.update_cursor_icon();
                }
            }
        }
    }

    fn end_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            surface_camera(&mut self.page, drag.surface).set_dragging(false);
        }
    }

    /// Wheel zooms a surface whose camera allows it, otherwise scrolls the page.
    fn handle_mouse_wheel(&mut self, delta: MouseScrollDelta) {
        let scroll = wheel_scroll(delta, self.scale_factor());
        let line_px = self.config.animation.wheel_line_px as f32;

        if let Some((surface, _)) = self.cursor.and_then(|(x, y)| self.surface_at(x, y)) {
            let camera = surface_camera(&mut self.page, surface);
            if camera.controls.enable_zoom {
                camera.zoom(scroll.zoom_steps(line_px));
                return;
            }
        }

        match scroll {
            WheelScroll::Lines(n) => self.page.scroll_lines(-n),
            WheelScroll::Pixels(p) => self.page.scroll_by(-p),
        }
    }

    /// Process a keyboard input event: edit the focused field or dispatch
    /// an action.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }
        let Some(input) = classify_key(&event.logical_key, event.text.as_deref(), self.modifiers)
        else {
            return;
        };

        match input {
            KeyInput::Action(action) => self.dispatch(action),
            KeyInput::Backspace => {
                self.page.backspace();
            }
            KeyInput::Enter => {
                self.page.enter();
            }
            KeyInput::Escape => self.page.blur_form(),
            KeyInput::ScrollLines(n) => self.page.scroll_lines(n),
            KeyInput::Text(text) => {
                // Space pages down when no field has focus.
                if !self.page.type_text(&text) && text == " " {
                    self.page.page_down();
                }
            }
        }
    }
}
