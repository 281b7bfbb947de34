//! Drawing surface
//!
//! [`DrawContext`] is the immediate-mode API the host engine exposes to
//! widgets: filled rectangles, bitmap text, and stretched images uploaded from
//! raw pixel buffers. [`RecordingContext`] implements it by recording
//! [`DrawCommand`]s, which is what headless hosts and tests replay.

use rustc_hash::FxHashMap;

use crate::color::Color;
use crate::error::{DrawError, Result};
use crate::font::BitmapFont;
use crate::geometry::{Point, Rect};
use crate::image::{ImageData, ImageId};

/// The drawing operations a host engine provides
pub trait DrawContext {
    /// Fill a rectangle with a solid color
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a single line of text with its baseline-left corner at `origin`
    fn draw_text(&mut self, text: &str, font: &BitmapFont, origin: Point, color: Color);

    /// Upload a pixel buffer and return a handle for [`draw_image`](Self::draw_image)
    fn create_image(&mut self, image: &ImageData) -> Result<ImageId>;

    /// Draw the `src` part of an uploaded image stretched over `dst`
    fn draw_image(&mut self, image: ImageId, src: Rect, dst: Rect);
}

/// A draw command that can be recorded and replayed
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    DrawText {
        text: String,
        font: BitmapFont,
        origin: Point,
        color: Color,
    },
    DrawImage {
        image: ImageId,
        src: Rect,
        dst: Rect,
    },
}

/// A draw context that records commands for later execution
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    images: FxHashMap<ImageId, ImageData>,
    next_image_id: u64,
    image_capacity: Option<usize>,
}

impl RecordingContext {
    /// Create a new recording context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context that refuses uploads once `capacity` images are stored
    pub fn with_image_capacity(capacity: usize) -> Self {
        Self {
            image_capacity: Some(capacity),
            ..Self::default()
        }
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Clear recorded commands; uploaded images are kept
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Look up an uploaded image
    pub fn image(&self, id: ImageId) -> Result<&ImageData> {
        self.images.get(&id).ok_or(DrawError::UnknownImage(id))
    }

    /// Number of uploaded images
    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

impl DrawContext for RecordingContext {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_text(&mut self, text: &str, font: &BitmapFont, origin: Point, color: Color) {
        self.commands.push(DrawCommand::DrawText {
            text: text.to_string(),
            font: *font,
            origin,
            color,
        });
    }

    fn create_image(&mut self, image: &ImageData) -> Result<ImageId> {
        if let Some(capacity) = self.image_capacity {
            if self.images.len() >= capacity {
                tracing::warn!(capacity, "image upload rejected: capacity exhausted");
                return Err(DrawError::ImageCapacity(capacity));
            }
        }

        let id = ImageId(self.next_image_id);
        self.next_image_id += 1;
        self.images.insert(id, image.clone());
        Ok(id)
    }

    fn draw_image(&mut self, image: ImageId, src: Rect, dst: Rect) {
        self.commands.push(DrawCommand::DrawImage { image, src, dst });
    }
}
