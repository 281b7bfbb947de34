//! Container widget

use knit_core::{Color, Rect};
use knit_platform::PointerInput;

use crate::painter::Painter;
use crate::widget::Widget;

/// An ordered list of children drawn over an optional background.
///
/// The panel covers whatever region it is given and hands that same region to
/// every child; children position themselves relative to it. Insertion order
/// is both draw order and input order.
#[derive(Debug, Default)]
pub struct Panel {
    children: Vec<Widget>,
    background: Option<Color>,
}

impl Panel {
    /// Empty panel without a background
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the panel's region with `color` before drawing children
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Append a child
    pub fn child(mut self, child: impl Into<Widget>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children
    pub fn children<I, W>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<Widget>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a child to a panel already in use
    pub fn push(&mut self, child: impl Into<Widget>) {
        self.children.push(child.into());
    }

    /// Change or remove the background fill
    pub fn set_background(&mut self, color: Option<Color>) {
        self.background = color;
    }

    /// Current background fill, if any
    pub fn background_color(&self) -> Option<Color> {
        self.background
    }

    /// Child at `index` in draw order
    pub fn get(&self, index: usize) -> Option<&Widget> {
        self.children.get(index)
    }

    /// Mutable child at `index` in draw order
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Widget> {
        self.children.get_mut(index)
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Children in draw order
    pub fn iter(&self) -> impl Iterator<Item = &Widget> {
        self.children.iter()
    }

    /// Poll children in order until one consumes the input.
    ///
    /// Children after the consuming one are not polled. A panel reports the
    /// input as consumed even when none of its children did.
    pub fn handle_input(&mut self, input: &dyn PointerInput, region: Rect) -> bool {
        for child in &mut self.children {
            if child.handle_input(input, region) {
                return true;
            }
        }
        true
    }

    /// Fill the background over `region`, then draw every child into the
    /// same region
    pub fn draw(&self, painter: &mut Painter<'_>, region: Rect) {
        if region.is_empty() {
            tracing::trace!(%region, "skipping empty panel");
            return;
        }

        if let Some(color) = self.background {
            painter.fill_rect(region, color);
        }

        for child in &self.children {
            child.draw(painter, region);
        }
    }
}
