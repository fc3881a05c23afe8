//! Pick input from window events.
//!
//! `Input` follows the cursor and the Alt modifier across winit window events
//! and turns an Alt + left click into a pick request in normalized device
//! coordinates. The host drains requests once per frame and hands them to
//! [`SimulationState::pick`](crate::SimulationState::pick).
//!
//! # Usage
//!
//! ```ignore
//! // In the winit event handler:
//! input.handle_event(&event);
//!
//! // Once per frame, before ticking:
//! if let Some(ndc) = input.take_pick() {
//!     let _ = sim.pick(&camera, ndc);
//! }
//! ```

use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};

/// Convert a pixel position to normalized device coordinates.
///
/// X grows to the right and Y grows upward, both spanning `[-1, 1]` across
/// the window. Returns `None` for an empty window.
pub fn pixel_to_ndc(pixel: Vec2, window_size: (u32, u32)) -> Option<Vec2> {
    let (w, h) = window_size;
    if w == 0 || h == 0 {
        return None;
    }
    Some(Vec2::new(
        pixel.x * 2.0 / w as f32 - 1.0,
        1.0 - pixel.y * 2.0 / h as f32, // Y flipped
    ))
}

/// Cursor and modifier tracking for picking.
#[derive(Debug, Default)]
pub struct Input {
    // Cursor position in pixels
    cursor: Vec2,
    alt_held: bool,
    pending_pick: Option<Vec2>,
    window_size: (u32, u32),
}

impl Input {
    /// Create an input tracker for a window of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            window_size: (width, height),
            ..Default::default()
        }
    }

    /// Cursor position in pixels.
    pub fn cursor_position(&self) -> Vec2 {
        self.cursor
    }

    /// Cursor position in normalized device coordinates.
    pub fn cursor_ndc(&self) -> Option<Vec2> {
        pixel_to_ndc(self.cursor, self.window_size)
    }

    /// Whether Alt is currently held.
    pub fn alt_held(&self) -> bool {
        self.alt_held
    }

    /// Update window size for NDC calculations.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }

    /// Take the pending pick request, if any. Only the latest click is kept.
    pub fn take_pick(&mut self) -> Option<Vec2> {
        self.pending_pick.take()
    }

    /// Process a winit window event.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::Resized(size) => {
                self.set_window_size(size.width, size.height);
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.alt_held = modifiers.state().alt_key();
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.left_pressed(),

            _ => {}
        }
    }

    fn left_pressed(&mut self) {
        if !self.alt_held {
            return;
        }
        if let Some(ndc) = self.cursor_ndc() {
            log::debug!("Pick requested at pixel {} (ndc {})", self.cursor, ndc);
            self.pending_pick = Some(ndc);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_to_ndc() {
        let center = pixel_to_ndc(Vec2::new(400.0, 300.0), (800, 600)).unwrap();
        assert!(center.length() < 1e-6);

        let top_left = pixel_to_ndc(Vec2::ZERO, (800, 600)).unwrap();
        assert_eq!(top_left, Vec2::new(-1.0, 1.0));

        let bottom_right = pixel_to_ndc(Vec2::new(800.0, 600.0), (800, 600)).unwrap();
        assert_eq!(bottom_right, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_pixel_to_ndc_empty_window() {
        assert_eq!(pixel_to_ndc(Vec2::new(1.0, 1.0), (0, 600)), None);
    }

    #[test]
    fn test_click_without_alt_is_ignored() {
        let mut input = Input::new(800, 600);
        input.cursor = Vec2::new(200.0, 150.0);

        input.left_pressed();
        assert_eq!(input.take_pick(), None);
    }

    #[test]
    fn test_alt_click_queues_pick() {
        let mut input = Input::new(800, 600);
        input.cursor = Vec2::new(200.0, 150.0);
        input.alt_held = true;

        input.left_pressed();
        assert_eq!(input.take_pick(), Some(Vec2::new(-0.5, 0.5)));
        // Drained after taking
        assert_eq!(input.take_pick(), None);
    }

    #[test]
    fn test_latest_click_wins() {
        let mut input = Input::new(100, 100);
        input.alt_held = true;

        input.cursor = Vec2::new(0.0, 0.0);
        input.left_pressed();
        input.cursor = Vec2::new(100.0, 100.0);
        input.left_pressed();

        assert_eq!(input.take_pick(), Some(Vec2::new(1.0, -1.0)));
    }
}
