//! Per-frame pointer state
//!
//! Tracks the cursor, which buttons are held, and which buttons changed state
//! during the current frame.

use knit_core::Point;
use rustc_hash::FxHashSet;

use crate::input::{InputEvent, MouseButton, MouseEvent, TouchEvent};

/// Cursor position reported after the pointer leaves the window
pub const OFF_SCREEN: Point = Point::new(i32::MIN, i32::MIN);

/// Pointer queries widgets make while handling input
pub trait PointerInput {
    /// Current cursor position in screen coordinates
    fn cursor_position(&self) -> Point;

    /// Whether `button` is currently held down
    fn is_button_pressed(&self, button: MouseButton) -> bool;

    /// Whether `button` went down during this frame
    fn is_button_just_pressed(&self, button: MouseButton) -> bool;

    /// Whether `button` went up during this frame
    fn is_button_just_released(&self, button: MouseButton) -> bool;
}

/// Pointer state assembled from platform input events
#[derive(Clone, Debug, Default)]
pub struct PointerState {
    position: Point,
    held: FxHashSet<MouseButton>,
    just_pressed: FxHashSet<MouseButton>,
    just_released: FxHashSet<MouseButton>,
    /// Touch currently standing in for the left button
    primary_touch: Option<u64>,
}

impl PointerState {
    /// Cursor at the origin, nothing held
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one platform event
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse),
            InputEvent::Touch(touch) => self.handle_touch(touch),
        }
    }

    fn handle_mouse(&mut self, event: &MouseEvent) {
        match *event {
            MouseEvent::Moved { x, y } => self.move_to(to_point(x, y)),
            MouseEvent::ButtonPressed { button, x, y } => {
                self.move_to(to_point(x, y));
                self.press(button);
            }
            MouseEvent::ButtonReleased { button, x, y } => {
                self.move_to(to_point(x, y));
                self.release(button);
            }
            MouseEvent::Left => {
                tracing::trace!(position = %self.position, "pointer left window");
                self.move_to(OFF_SCREEN);
            }
        }
    }

    fn handle_touch(&mut self, event: &TouchEvent) {
        let id = event.id();
        match self.primary_touch {
            Some(primary) if primary != id => return,
            None if !matches!(event, TouchEvent::Started { .. }) => return,
            _ => {}
        }

        if let Some((x, y)) = event.position() {
            self.move_to(to_point(x, y));
        }

        match event {
            TouchEvent::Started { .. } => {
                self.primary_touch = Some(id);
                self.press(MouseButton::Left);
            }
            TouchEvent::Moved { .. } => {}
            TouchEvent::Ended { .. } => {
                self.primary_touch = None;
                self.release(MouseButton::Left);
            }
            TouchEvent::Cancelled { .. } => {
                // Cancelled touches never count as a release
                self.primary_touch = None;
                self.held.remove(&MouseButton::Left);
            }
        }
    }

    /// Move the cursor
    pub fn move_to(&mut self, position: Point) {
        self.position = position;
    }

    /// Mark `button` as pressed this frame
    pub fn press(&mut self, button: MouseButton) {
        if self.held.insert(button) {
            tracing::trace!(?button, position = %self.position, "button down");
            self.just_pressed.insert(button);
        }
    }

    /// Mark `button` as released this frame
    pub fn release(&mut self, button: MouseButton) {
        if self.held.remove(&button) {
            tracing::trace!(?button, position = %self.position, "button up");
            self.just_released.insert(button);
        }
    }

    /// Forget this frame's press/release edges. Call after the input pass.
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

impl PointerInput for PointerState {
    fn cursor_position(&self) -> Point {
        self.position
    }

    fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.held.contains(&button)
    }

    fn is_button_just_pressed(&self, button: MouseButton) -> bool {
        self.just_pressed.contains(&button)
    }

    fn is_button_just_released(&self, button: MouseButton) -> bool {
        self.just_released.contains(&button)
    }
}

fn to_point(x: f32, y: f32) -> Point {
    Point::new(x.floor() as i32, y.floor() as i32)
}
