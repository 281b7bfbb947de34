//! Knit Widget Library
//!
//! A small retained-mode widget layer drawn through a host engine's
//! immediate-mode primitives.
//!
//! # Architecture
//!
//! - [`Widget`] is a closed set of widget kinds ([`Panel`], [`Label`],
//!   [`Button`]) sharing two operations: `handle_input` reports whether the
//!   pointer event was consumed, `draw` paints into a region.
//! - Regions are integer rectangles. Leaves store a region relative to the
//!   region their parent hands them and translate it to screen space
//!   themselves; panels pass their region through unchanged.
//! - [`Ui`] owns the root widget, the [`Skin`], and the uploaded button
//!   texture, and drives one input pass and one draw pass per frame.
//!
//! # Example
//!
//! ```rust
//! use knit_core::{Color, Rect, RecordingContext};
//! use knit_platform::PointerState;
//! use knit_widgets::prelude::*;
//!
//! let mut ctx = RecordingContext::new();
//! let root = Panel::new()
//!     .background(Color::WHITE)
//!     .child(Label::new(Rect::from_xywh(8, 8, 200, 16), "Hello"))
//!     .child(
//!         Button::new(Rect::from_xywh(8, 32, 80, 24), "Quit")
//!             .on_click(|b| b.set_text("Bye")),
//!     );
//!
//! let mut ui = Ui::new(&mut ctx, Skin::default(), root)?;
//! let pointer = PointerState::new();
//! let viewport = Rect::from_xywh(0, 0, 320, 240);
//!
//! ui.handle_input(&pointer, viewport);
//! ui.draw(&mut ctx, viewport);
//! assert!(!ctx.commands().is_empty());
//! # Ok::<(), knit_widgets::WidgetError>(())
//! ```

pub mod button;
pub mod error;
pub mod label;
pub mod nine_patch;
pub mod painter;
pub mod panel;
pub mod skin;
pub mod text;
pub mod ui;
pub mod widget;

#[cfg(test)]
mod test_util;

pub use button::{Button, ButtonState};
pub use error::{Result, WidgetError};
pub use label::Label;
pub use nine_patch::{ButtonTexture, NinePatch};
pub use painter::Painter;
pub use panel::Panel;
pub use skin::{Skin, MAX_GLYPH_SIZE, MAX_PATCH_SIZE};
pub use text::{text_at, HorizontalAlign, VerticalAlign};
pub use ui::Ui;
pub use widget::Widget;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::button::{Button, ButtonState};
    pub use crate::label::Label;
    pub use crate::panel::Panel;
    pub use crate::skin::Skin;
    pub use crate::text::{HorizontalAlign, VerticalAlign};
    pub use crate::ui::Ui;
    pub use crate::widget::Widget;
}
