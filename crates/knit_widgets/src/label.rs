//! Static text

use knit_core::Rect;
use knit_platform::PointerInput;

use crate::painter::Painter;
use crate::text::{HorizontalAlign, VerticalAlign};

/// A line of text aligned inside a region. Labels never consume input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    region: Rect,
    text: String,
    horizontal: HorizontalAlign,
    vertical: VerticalAlign,
}

impl Label {
    /// Create a label aligned to the top-left of `region`
    pub fn new(region: Rect, text: impl Into<String>) -> Self {
        Self {
            region,
            text: text.into(),
            horizontal: HorizontalAlign::Start,
            vertical: VerticalAlign::Top,
        }
    }

    /// Set horizontal alignment
    pub fn align(mut self, horizontal: HorizontalAlign) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Set vertical alignment
    pub fn valign(mut self, vertical: VerticalAlign) -> Self {
        self.vertical = vertical;
        self
    }

    /// Region relative to the parent's region
    pub fn region(&self) -> Rect {
        self.region
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn horizontal_align(&self) -> HorizontalAlign {
        self.horizontal
    }

    pub fn vertical_align(&self) -> VerticalAlign {
        self.vertical
    }

    /// Labels are inert: always returns false
    pub fn handle_input(&mut self, _input: &dyn PointerInput, _region: Rect) -> bool {
        false
    }

    /// Draw the text aligned inside the label's absolute region
    pub fn draw(&self, painter: &mut Painter<'_>, region: Rect) {
        let r = Rect::absolute(self.region, region);
        if r.is_empty() {
            tracing::trace!(region = %r, "skipping empty label");
            return;
        }
        painter.text(&self.text, r, self.horizontal, self.vertical);
    }
}
