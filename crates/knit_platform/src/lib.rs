//! Knit Platform Layer
//!
//! Input types delivered by the host engine and the per-frame pointer state
//! widgets query while handling input.
//!
//! The host feeds raw [`InputEvent`]s into a [`PointerState`] as they arrive
//! and calls [`PointerState::end_frame`] once the frame's input pass is done.
//! Widgets only see the [`PointerInput`] query trait.
//!
//! # Example
//!
//! ```rust
//! use knit_platform::prelude::*;
//!
//! let mut pointer = PointerState::new();
//! pointer.handle_event(&InputEvent::Mouse(MouseEvent::ButtonPressed {
//!     button: MouseButton::Left,
//!     x: 12.0,
//!     y: 4.5,
//! }));
//!
//! assert!(pointer.is_button_just_pressed(MouseButton::Left));
//! assert_eq!(pointer.cursor_position(), Point::new(12, 4));
//!
//! pointer.end_frame();
//! assert!(!pointer.is_button_just_pressed(MouseButton::Left));
//! assert!(pointer.is_button_pressed(MouseButton::Left));
//! ```

mod input;
mod pointer;

pub use input::{InputEvent, MouseButton, MouseEvent, TouchEvent};
pub use pointer::{PointerInput, PointerState, OFF_SCREEN};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::input::{InputEvent, MouseButton, MouseEvent, TouchEvent};
    pub use crate::pointer::{PointerInput, PointerState};
    pub use knit_core::Point;
}
