//! Pointer events delivered by the host engine
//!
//! Coordinates are window pixels as floats; [`PointerState`](crate::PointerState)
//! floors them onto the integer grid widgets work in.

/// One raw pointer event
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    Mouse(MouseEvent),
    Touch(TouchEvent),
}

#[derive(Clone, Debug, PartialEq)]
pub enum MouseEvent {
    Moved { x: f32, y: f32 },
    ButtonPressed { button: MouseButton, x: f32, y: f32 },
    ButtonReleased { button: MouseButton, x: f32, y: f32 },
    /// The cursor left the window; nothing is hovered until the next move
    Left,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Touch contacts, identified by a platform-assigned id.
///
/// Only the first active contact is tracked; it acts as the left button.
#[derive(Clone, Debug, PartialEq)]
pub enum TouchEvent {
    Started { id: u64, x: f32, y: f32 },
    Moved { id: u64, x: f32, y: f32 },
    Ended { id: u64, x: f32, y: f32 },
    /// Withdrawn by the system, e.g. for a gesture. Not a release.
    Cancelled { id: u64 },
}

impl TouchEvent {
    pub fn id(&self) -> u64 {
        match *self {
            TouchEvent::Started { id, .. }
            | TouchEvent::Moved { id, .. }
            | TouchEvent::Ended { id, .. }
            | TouchEvent::Cancelled { id } => id,
        }
    }

    /// Contact position, `None` for a cancelled touch
    pub fn position(&self) -> Option<(f32, f32)> {
        match *self {
            TouchEvent::Started { x, y, .. }
            | TouchEvent::Moved { x, y, .. }
            | TouchEvent::Ended { x, y, .. } => Some((x, y)),
            TouchEvent::Cancelled { .. } => None,
        }
    }
}
