//! Painter - the drawing surface plus the resources widgets draw with

use knit_core::{Color, DrawContext, Rect};

use crate::nine_patch::ButtonTexture;
use crate::skin::Skin;
use crate::text::{text_at, HorizontalAlign, VerticalAlign};

/// Drawing handle passed down the widget tree during a draw pass
pub struct Painter<'a> {
    ctx: &'a mut dyn DrawContext,
    skin: &'a Skin,
    button: &'a ButtonTexture,
}

impl<'a> Painter<'a> {
    pub fn new(ctx: &'a mut dyn DrawContext, skin: &'a Skin, button: &'a ButtonTexture) -> Self {
        Self { ctx, skin, button }
    }

    pub fn skin(&self) -> &Skin {
        self.skin
    }

    /// Fill `rect` with a solid color
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.fill_rect(rect, color);
    }

    /// Draw one line of text aligned inside `region` in the skin's font and
    /// text color
    pub fn text(
        &mut self,
        text: &str,
        region: Rect,
        horizontal: HorizontalAlign,
        vertical: VerticalAlign,
    ) {
        if text.is_empty() {
            return;
        }
        let font = self.skin.font;
        let origin = text_at(&font, text, region, horizontal, vertical);
        self.ctx.draw_text(text, &font, origin, self.skin.text_color);
    }

    /// Draw the button frame stretched over `rect`
    pub fn button_frame(&mut self, rect: Rect) {
        self.button.draw(&mut *self.ctx, rect);
    }
}
