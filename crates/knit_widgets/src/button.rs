//! Button widget
//!
//! A button is a framed caption with a two-state press machine, polled once
//! per frame:
//!
//! | state   | pointer | input                          | next    | effect    |
//! |---------|---------|--------------------------------|---------|-----------|
//! | any     | outside | -                              | idle    | -         |
//! | idle    | inside  | left button just pressed       | pressed | -         |
//! | idle    | inside  | otherwise                      | idle    | -         |
//! | pressed | inside  | left button held               | pressed | -         |
//! | pressed | inside  | left button just released      | idle    | on_click  |
//! | pressed | inside  | neither held nor just released | pressed | -         |
//!
//! Leaving the button while pressed cancels the click. A hovered button
//! consumes input whatever its state.

use std::fmt;

use knit_core::Rect;
use knit_platform::{MouseButton, PointerInput};

use crate::painter::Painter;
use crate::text::{HorizontalAlign, VerticalAlign};

type ClickHandler = Box<dyn FnMut(&mut Button)>;

/// Interaction state of a [`Button`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonState {
    #[default]
    Idle,
    Pressed,
}

pub struct Button {
    region: Rect,
    text: String,
    on_click: Option<ClickHandler>,
    state: ButtonState,
}

impl Button {
    /// Create an idle button with no callback
    pub fn new(region: Rect, text: impl Into<String>) -> Self {
        Self {
            region,
            text: text.into(),
            on_click: None,
            state: ButtonState::Idle,
        }
    }

    /// Set the click callback. It runs synchronously inside
    /// [`handle_input`](Self::handle_input) and may modify the button.
    pub fn on_click<F: FnMut(&mut Button) + 'static>(mut self, callback: F) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    /// Replace the click callback in place. Called from inside a running
    /// callback, the new handler takes effect from the next click.
    pub fn set_on_click<F: FnMut(&mut Button) + 'static>(&mut self, callback: F) {
        self.on_click = Some(Box::new(callback));
    }

    /// Region relative to the parent's region
    pub fn region(&self) -> Rect {
        self.region
    }

    /// Caption drawn centered in the button
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Current press state
    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn is_pressed(&self) -> bool {
        self.state == ButtonState::Pressed
    }

    /// Advance the press machine for this frame. Returns true while the
    /// pointer is over the button.
    pub fn handle_input(&mut self, input: &dyn PointerInput, region: Rect) -> bool {
        let r = Rect::absolute(self.region, region);
        if !r.contains(input.cursor_position()) {
            if self.is_pressed() {
                tracing::trace!(text = %self.text, "press cancelled: pointer left button");
            }
            self.state = ButtonState::Idle;
            return false;
        }

        match self.state {
            ButtonState::Pressed => {
                if input.is_button_pressed(MouseButton::Left)
                    || !input.is_button_just_released(MouseButton::Left)
                {
                    return true;
                }
                self.state = ButtonState::Idle;
                self.click();
            }
            ButtonState::Idle => {
                if input.is_button_just_pressed(MouseButton::Left) {
                    tracing::trace!(text = %self.text, "button pressed");
                    self.state = ButtonState::Pressed;
                }
            }
        }
        true
    }

    fn click(&mut self) {
        tracing::debug!(text = %self.text, "button clicked");
        if let Some(mut callback) = self.on_click.take() {
            callback(self);
            // A handler installed by the callback wins
            if self.on_click.is_none() {
                self.on_click = Some(callback);
            }
        }
    }

    /// Draw the nine-patch frame and the caption
    pub fn draw(&self, painter: &mut Painter<'_>, region: Rect) {
        let r = Rect::absolute(self.region, region);
        if r.is_empty() {
            tracing::trace!(region = %r, "skipping empty button");
            return;
        }
        painter.button_frame(r);
        painter.text(&self.text, r, HorizontalAlign::Center, VerticalAlign::Middle);
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("region", &self.region)
            .field("text", &self.text)
            .field("state", &self.state)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{pointer_at, Fixture};
    use knit_core::{DrawCommand, Point};
    use knit_platform::PointerState;
    use std::cell::Cell;
    use std::rc::Rc;

    const SCREEN: Rect = Rect {
        min: Point { x: 0, y: 0 },
        max: Point { x: 320, y: 240 },
    };

    fn counting_button(count: &Rc<Cell<u32>>) -> Button {
        let count = Rc::clone(count);
        Button::new(Rect::from_xywh(10, 10, 80, 24), "OK")
            .on_click(move |_| count.set(count.get() + 1))
    }

    /// One polled frame: apply `f` to the pointer, poll, then end the frame
    fn frame(
        button: &mut Button,
        pointer: &mut PointerState,
        f: impl FnOnce(&mut PointerState),
    ) -> bool {
        f(pointer);
        let consumed = button.handle_input(pointer, SCREEN);
        pointer.end_frame();
        consumed
    }

    #[test]
    fn test_press_release_inside_clicks_once() {
        let count = Rc::new(Cell::new(0));
        let mut button = counting_button(&count);
        let mut pointer = pointer_at(20, 20);

        assert!(frame(&mut button, &mut pointer, |p| p.press(MouseButton::Left)));
        assert_eq!(button.state(), ButtonState::Pressed);

        assert!(frame(&mut button, &mut pointer, |_| {}));
        assert_eq!(button.state(), ButtonState::Pressed);
        assert_eq!(count.get(), 0);

        assert!(frame(&mut button, &mut pointer, |p| p.release(MouseButton::Left)));
        assert_eq!(button.state(), ButtonState::Idle);
        assert_eq!(count.get(), 1);

        // Nothing further happens on later frames
        frame(&mut button, &mut pointer, |_| {});
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_leaving_before_release_cancels() {
        let count = Rc::new(Cell::new(0));
        let mut button = counting_button(&count);
        let mut pointer = pointer_at(20, 20);

        frame(&mut button, &mut pointer, |p| p.press(MouseButton::Left));
        assert!(button.is_pressed());

        let consumed = frame(&mut button, &mut pointer, |p| p.move_to(Point::new(200, 200)));
        assert!(!consumed);
        assert_eq!(button.state(), ButtonState::Idle);

        frame(&mut button, &mut pointer, |p| {
            p.move_to(Point::new(20, 20));
            p.release(MouseButton::Left);
        });
        assert_eq!(count.get(), 0);
        assert_eq!(button.state(), ButtonState::Idle);
    }

    #[test]
    fn test_pointer_leaving_window_cancels_press() {
        use knit_platform::{InputEvent, MouseEvent};

        let count = Rc::new(Cell::new(0));
        let mut button = counting_button(&count);
        let mut pointer = pointer_at(20, 20);

        frame(&mut button, &mut pointer, |p| p.press(MouseButton::Left));
        let consumed = frame(&mut button, &mut pointer, |p| {
            p.handle_event(&InputEvent::Mouse(MouseEvent::Left))
        });
        assert!(!consumed);
        assert_eq!(button.state(), ButtonState::Idle);

        frame(&mut button, &mut pointer, |p| {
            p.move_to(Point::new(20, 20));
            p.release(MouseButton::Left);
        });
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_press_outside_then_release_inside_does_not_click() {
        let count = Rc::new(Cell::new(0));
        let mut button = counting_button(&count);
        let mut pointer = pointer_at(200, 200);

        frame(&mut button, &mut pointer, |p| p.press(MouseButton::Left));
        frame(&mut button, &mut pointer, |p| p.move_to(Point::new(20, 20)));
        assert_eq!(button.state(), ButtonState::Idle);
        frame(&mut button, &mut pointer, |p| p.release(MouseButton::Left));

        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_stale_press_stays_pressed() {
        let count = Rc::new(Cell::new(0));
        let mut button = counting_button(&count);
        let mut pointer = pointer_at(20, 20);

        // Press and release inside the same frame: the release edge is gone by
        // the next poll, so the button keeps its press without firing
        frame(&mut button, &mut pointer, |p| {
            p.press(MouseButton::Left);
            p.release(MouseButton::Left);
        });
        assert!(button.is_pressed());

        assert!(frame(&mut button, &mut pointer, |_| {}));
        assert!(button.is_pressed());
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_hover_consumes_input_regardless_of_state() {
        let mut button = Button::new(Rect::from_xywh(10, 10, 80, 24), "OK");
        let region = Rect::from_xywh(100, 100, 200, 200);

        // Absolute region is (110,110)-(190,134)
        assert!(button.handle_input(&pointer_at(110, 110), region));
        assert!(button.handle_input(&pointer_at(189, 133), region));
        assert!(!button.handle_input(&pointer_at(109, 120), region));
        assert!(!button.handle_input(&pointer_at(190, 120), region));
        assert!(!button.handle_input(&pointer_at(20, 20), region));

        let mut held = pointer_at(150, 120);
        held.press(MouseButton::Left);
        assert!(button.handle_input(&held, region));
        assert!(button.is_pressed());
        held.end_frame();
        assert!(button.handle_input(&held, region));
    }

    #[test]
    fn test_right_button_is_ignored() {
        let mut button = Button::new(Rect::from_xywh(0, 0, 10, 10), "R");
        let mut pointer = pointer_at(5, 5);
        pointer.press(MouseButton::Right);

        assert!(button.handle_input(&pointer, SCREEN));
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_callback_can_modify_button() {
        let mut button = Button::new(Rect::from_xywh(0, 0, 50, 20), "0").on_click(|b| {
            let n: u32 = b.text().parse().unwrap_or(0);
            b.set_text((n + 1).to_string());
        });
        let mut pointer = pointer_at(5, 5);

        for _ in 0..3 {
            frame(&mut button, &mut pointer, |p| p.press(MouseButton::Left));
            frame(&mut button, &mut pointer, |p| p.release(MouseButton::Left));
        }

        assert_eq!(button.text(), "3");
    }

    #[test]
    fn test_callback_can_replace_itself() {
        let log = Rc::new(std::cell::RefCell::new(Vec::new()));
        let first = Rc::clone(&log);
        let mut button = Button::new(Rect::from_xywh(0, 0, 50, 20), "once").on_click(move |b| {
            first.borrow_mut().push("first");
            let second = Rc::clone(&first);
            b.set_on_click(move |_| second.borrow_mut().push("second"));
        });
        let mut pointer = pointer_at(5, 5);

        for _ in 0..3 {
            frame(&mut button, &mut pointer, |p| p.press(MouseButton::Left));
            frame(&mut button, &mut pointer, |p| p.release(MouseButton::Left));
        }

        assert_eq!(*log.borrow(), ["first", "second", "second"]);
    }

    #[test]
    fn test_set_on_click_outside_callback() {
        let count = Rc::new(Cell::new(0));
        let mut button = Button::new(Rect::from_xywh(0, 0, 50, 20), "late");
        let c = Rc::clone(&count);
        button.set_on_click(move |_| c.set(c.get() + 10));
        let mut pointer = pointer_at(5, 5);

        frame(&mut button, &mut pointer, |p| p.press(MouseButton::Left));
        frame(&mut button, &mut pointer, |p| p.release(MouseButton::Left));
        assert_eq!(count.get(), 10);
    }

    #[test]
    fn test_click_without_callback() {
        let mut button = Button::new(Rect::from_xywh(0, 0, 50, 20), "noop");
        let mut pointer = pointer_at(5, 5);

        frame(&mut button, &mut pointer, |p| p.press(MouseButton::Left));
        assert!(frame(&mut button, &mut pointer, |p| p.release(MouseButton::Left)));
        assert_eq!(button.state(), ButtonState::Idle);
    }

    #[test]
    fn test_draw_frame_then_centered_caption() {
        let mut fx = Fixture::new();
        let texture = fx.texture.image();
        let button = Button::new(Rect::from_xywh(10, 10, 80, 24), "OK");

        let commands = fx.paint(|p| button.draw(p, Rect::from_xywh(100, 0, 200, 200)));

        assert_eq!(commands.len(), 10);
        assert!(commands[..9]
            .iter()
            .all(|c| matches!(c, DrawCommand::DrawImage { image, .. } if *image == texture)));
        match &commands[9] {
            DrawCommand::DrawText { text, origin, .. } => {
                assert_eq!(text, "OK");
                // (110,10)-(190,34): 12px caption centered
                assert_eq!(*origin, Point::new(110 + 34, 10 + 6 + 10));
            }
            other => panic!("expected caption, got {other:?}"),
        }
    }

    #[test]
    fn test_degenerate_button_draws_nothing() {
        let mut fx = Fixture::new();
        let button = Button::new(Rect::from_xywh(0, 0, 80, 0), "flat");

        let commands = fx.paint(|p| button.draw(p, SCREEN));
        assert!(commands.is_empty());
    }
}
