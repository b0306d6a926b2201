//! Native window backed by minifb.
//!
//! minifb only exposes polled state, so the input queue is rebuilt each frame
//! by comparing the current pointer/button/key state with the previous one.

use std::fmt::{self, Display};

use minifb::{Key as MinifbKey, KeyRepeat, MouseButton, MouseMode, ScaleMode, Window, WindowOptions};

use super::*;

#[derive(Debug)]
pub enum WindowError {
    /// Creating the window failed
    Init(String),
    /// Pushing the framebuffer to the window failed
    Update(String),
}

impl Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowError::Init(s) => write!(f, "window init error: {s}"),
            WindowError::Update(s) => write!(f, "window update error: {s}"),
        }
    }
}

impl std::error::Error for WindowError {}

const BUTTONS: [(MouseButton, Button); 3] = [
    (MouseButton::Left, Button::Left),
    (MouseButton::Right, Button::Right),
    (MouseButton::Middle, Button::Middle),
];

const KEYS: [(MinifbKey, Key); 4] = [
    (MinifbKey::F1, Key::F1),
    (MinifbKey::F2, Key::F2),
    (MinifbKey::C, Key::C),
    (MinifbKey::Escape, Key::Escape),
];

/// Resizable window showing a fixed size `Canvas` stretched to the window.
/// Mouse positions are reported in canvas coordinates.
pub struct CanvasWindow {
    window: Window,
    canvas: Canvas,
    pointer: Option<Vec2>,
    buttons_down: [bool; 3],
}

impl CanvasWindow {
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, WindowError> {
        let options = WindowOptions {
            resize: true,
            scale_mode: ScaleMode::Stretch,
            ..WindowOptions::default()
        };
        let window = Window::new(title, width, height, options).map_err(|e| WindowError::Init(e.to_string()))?;
        log::info!("opened {}x{} window", width, height);
        Ok(CanvasWindow {
            window,
            canvas: Canvas::new(width, height),
            pointer: None,
            buttons_down: [false; 3],
        })
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Collect the input that happened since the last call, in the order
    /// quit, keys, pointer motion, button changes, scroll.
    pub fn poll_events(&mut self) -> Vec<InputEvent<Vec2>> {
        let mut events = Vec::new();
        if !self.window.is_open() {
            events.push(InputEvent::Quit);
            return events;
        }

        for key in self.window.get_keys_pressed(KeyRepeat::No) {
            let key = KEYS
                .iter()
                .find(|(k, _)| *k == key)
                .map_or(Key::Other, |(_, key)| *key);
            events.push(InputEvent::KeyDown(key));
        }

        let position = self
            .window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| self.to_canvas(x, y));
        if let Some(position) = position {
            if self.pointer != Some(position) {
                events.push(InputEvent::PointerMove(position));
                self.pointer = Some(position);
            }
        }

        for (i, (mouse_button, button)) in BUTTONS.iter().enumerate() {
            let down = self.window.get_mouse_down(*mouse_button);
            if down != self.buttons_down[i] {
                self.buttons_down[i] = down;
                match (down, position.or(self.pointer)) {
                    (true, Some(position)) => events.push(InputEvent::ButtonDown(*button, position)),
                    (true, None) => {}
                    (false, _) => events.push(InputEvent::ButtonUp(*button)),
                }
            }
        }

        if let Some((_, delta_y)) = self.window.get_scroll_wheel() {
            if delta_y != 0.0 {
                events.push(InputEvent::Scroll(delta_y));
            }
        }
        events
    }

    /// Map window pixels to canvas coordinates when the window was resized
    fn to_canvas(&self, x: f32, y: f32) -> Vec2 {
        let (w, h) = self.window.get_size();
        let sx = self.canvas.width() as f32 / w.max(1) as f32;
        let sy = self.canvas.height() as f32 / h.max(1) as f32;
        Vec2::new(x * sx, y * sy)
    }
}

impl Renderer for CanvasWindow {
    type Error = WindowError;

    fn clear(&mut self, color: Color) {
        self.canvas.clear(color);
    }

    fn draw_line(&mut self, begin: Vec2, end: Vec2, color: Color) {
        self.canvas.draw_line(begin, end, color);
    }

    fn fill_rect(&mut self, top_left: Vec2, size: Vec2, color: Color) {
        self.canvas.fill_rect(top_left, size, color);
    }

    fn present(&mut self) -> Result<(), WindowError> {
        self.window
            .update_with_buffer(self.canvas.pixels(), self.canvas.width(), self.canvas.height())
            .map_err(|e| WindowError::Update(e.to_string()))
    }
}
