//! Knit Core
//!
//! Foundational types shared by every Knit crate:
//!
//! - **Geometry**: integer [`Point`] and half-open [`Rect`] regions
//! - **Color**: 8-bit RGBA colors with hex (de)serialization
//! - **Bitmap font**: fixed-cell font metrics used for text placement
//! - **Images**: raw RGBA pixel buffers and the handles the host hands back
//! - **Draw Context**: the immediate-mode drawing surface widgets render into
//!
//! # Example
//!
//! ```rust
//! use knit_core::{Color, DrawCommand, DrawContext, Rect, RecordingContext};
//!
//! let mut ctx = RecordingContext::new();
//! ctx.fill_rect(Rect::from_xywh(10, 10, 100, 20), Color::WHITE);
//!
//! assert!(matches!(ctx.commands()[0], DrawCommand::FillRect { .. }));
//! ```

pub mod color;
pub mod draw;
pub mod error;
pub mod font;
pub mod geometry;
pub mod image;

pub use color::Color;
pub use draw::{DrawCommand, DrawContext, RecordingContext};
pub use error::{DrawError, Result};
pub use font::BitmapFont;
pub use geometry::{Point, Rect};
pub use image::{ImageData, ImageId};
