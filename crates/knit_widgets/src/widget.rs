//! The widget set

use knit_core::Rect;
use knit_platform::PointerInput;

use crate::button::Button;
use crate::label::Label;
use crate::painter::Painter;
use crate::panel::Panel;

/// Every kind of widget. New kinds are added as variants.
#[derive(Debug)]
pub enum Widget {
    Panel(Panel),
    Label(Label),
    Button(Button),
}

impl Widget {
    /// Let the widget react to the current pointer state. `region` is the
    /// parent's region; returns whether the input was consumed.
    pub fn handle_input(&mut self, input: &dyn PointerInput, region: Rect) -> bool {
        match self {
            Widget::Panel(panel) => panel.handle_input(input, region),
            Widget::Label(label) => label.handle_input(input, region),
            Widget::Button(button) => button.handle_input(input, region),
        }
    }

    /// Draw the widget inside the parent's `region`
    pub fn draw(&self, painter: &mut Painter<'_>, region: Rect) {
        match self {
            Widget::Panel(panel) => panel.draw(painter, region),
            Widget::Label(label) => label.draw(painter, region),
            Widget::Button(button) => button.draw(painter, region),
        }
    }

    /// The panel inside, for editing a mounted tree
    pub fn as_panel_mut(&mut self) -> Option<&mut Panel> {
        match self {
            Widget::Panel(panel) => Some(panel),
            _ => None,
        }
    }
}

impl From<Panel> for Widget {
    fn from(panel: Panel) -> Self {
        Widget::Panel(panel)
    }
}

impl From<Label> for Widget {
    fn from(label: Label) -> Self {
        Widget::Label(label)
    }
}

impl From<Button> for Widget {
    fn from(button: Button) -> Self {
        Widget::Button(button)
    }
}
