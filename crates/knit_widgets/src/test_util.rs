//! Shared fixtures for widget unit tests

use knit_core::{DrawCommand, Point, RecordingContext};
use knit_platform::PointerState;

use crate::nine_patch::ButtonTexture;
use crate::painter::Painter;
use crate::skin::Skin;

pub(crate) struct Fixture {
    pub ctx: RecordingContext,
    pub skin: Skin,
    pub texture: ButtonTexture,
}

impl Fixture {
    pub fn new() -> Self {
        let skin = Skin::default();
        let mut ctx = RecordingContext::new();
        let texture = ButtonTexture::upload(&mut ctx, &skin).unwrap();
        Self { ctx, skin, texture }
    }

    /// Run `f` against a fresh painter and return what it drew
    pub fn paint(&mut self, f: impl FnOnce(&mut Painter<'_>)) -> Vec<DrawCommand> {
        let mut painter = Painter::new(&mut self.ctx, &self.skin, &self.texture);
        f(&mut painter);
        self.ctx.take_commands()
    }
}

pub(crate) fn pointer_at(x: i32, y: i32) -> PointerState {
    let mut pointer = PointerState::new();
    pointer.move_to(Point::new(x, y));
    pointer
}
