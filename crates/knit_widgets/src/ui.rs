//! Ui root - owns the widget tree and its drawing resources

use knit_core::{DrawContext, Rect};
use knit_platform::PointerInput;

use crate::error::Result;
use crate::nine_patch::ButtonTexture;
use crate::painter::Painter;
use crate::skin::Skin;
use crate::widget::Widget;

/// A widget tree ready to be driven by the host's frame loop.
///
/// Each frame the host calls [`handle_input`](Self::handle_input) and then
/// [`draw`](Self::draw) with the same viewport region.
#[derive(Debug)]
pub struct Ui {
    root: Widget,
    skin: Skin,
    button_texture: ButtonTexture,
}

impl Ui {
    /// Validate `skin` and upload the textures it needs to `ctx`.
    ///
    /// Fails when the skin is inconsistent or the drawing surface refuses the
    /// button texture.
    pub fn new(ctx: &mut dyn DrawContext, skin: Skin, root: impl Into<Widget>) -> Result<Self> {
        skin.validate()?;
        let button_texture = ButtonTexture::upload(ctx, &skin)?;
        Ok(Self {
            root: root.into(),
            skin,
            button_texture,
        })
    }

    /// Root of the widget tree
    pub fn root(&self) -> &Widget {
        &self.root
    }

    /// Mutable root, for editing the tree between frames
    pub fn root_mut(&mut self) -> &mut Widget {
        &mut self.root
    }

    /// Skin the tree is drawn with
    pub fn skin(&self) -> &Skin {
        &self.skin
    }

    pub fn button_texture(&self) -> &ButtonTexture {
        &self.button_texture
    }

    /// Run the input pass over the tree
    pub fn handle_input(&mut self, input: &dyn PointerInput, region: Rect) -> bool {
        self.root.handle_input(input, region)
    }

    /// Run the draw pass over the tree
    pub fn draw(&self, ctx: &mut dyn DrawContext, region: Rect) {
        let mut painter = Painter::new(ctx, &self.skin, &self.button_texture);
        self.root.draw(&mut painter, region);
    }
}
