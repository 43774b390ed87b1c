use std::collections::HashSet;

use glam::Vec2;
use winit::event::{DeviceEvent, ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Scale applied to pixel-based scroll deltas so trackpads land in the
/// same range as one mouse wheel line.
const PIXELS_PER_LINE: f32 = 0.01;

/// Per-frame input snapshot.
///
/// Accumulates winit window and device events between frames and exposes
/// the read-only queries the controller needs: held keys, edge-triggered
/// presses, raw mouse deltas, and scroll lines. The host must call
/// [`end_frame`](Self::end_frame) once per frame after the update so
/// edge state and deltas do not leak into the next frame.
///
/// Mouse deltas come from [`DeviceEvent::MouseMotion`], i.e. raw,
/// sensitivity-independent motion rather than accelerated cursor
/// positions.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<KeyCode>,
    just_pressed: HashSet<KeyCode>,
    mouse_delta: Vec2,
    scroll_delta: f32,
}

impl InputState {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a window event (keyboard and scroll wheel).
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let PhysicalKey::Code(code) = key_event.physical_key {
                    match key_event.state {
                        ElementState::Pressed => self.press(code),
                        ElementState::Released => self.release(code),
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => {
                        pos.y as f32 * PIXELS_PER_LINE
                    }
                };
                self.add_scroll(lines);
            }
            _ => {}
        }
    }

    /// Feed a device event (raw mouse motion).
    pub fn handle_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.add_mouse_delta(Vec2::new(*dx as f32, *dy as f32));
        }
    }

    /// Mark a key as pressed. Repeated presses of an already-held key
    /// (OS key repeat) do not re-trigger the edge state.
    pub fn press(&mut self, key: KeyCode) {
        if self.held.insert(key) {
            let _ = self.just_pressed.insert(key);
        }
    }

    /// Mark a key as released.
    pub fn release(&mut self, key: KeyCode) {
        let _ = self.held.remove(&key);
    }

    /// Accumulate raw mouse motion for this frame.
    pub fn add_mouse_delta(&mut self, delta: Vec2) {
        self.mouse_delta += delta;
    }

    /// Accumulate scroll lines for this frame (positive = away from the
    /// user).
    pub fn add_scroll(&mut self, lines: f32) {
        self.scroll_delta += lines;
    }

    /// Whether the key is currently held down.
    #[must_use]
    pub fn held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Whether the key transitioned from released to pressed this frame.
    #[must_use]
    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.just_pressed.contains(&key)
    }

    /// Raw mouse motion accumulated this frame.
    #[must_use]
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    /// Scroll lines accumulated this frame.
    #[must_use]
    pub fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }

    /// Clear per-frame state. Held keys persist until released.
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.mouse_delta = Vec2::ZERO;
        self.scroll_delta = 0.0;
    }
}
