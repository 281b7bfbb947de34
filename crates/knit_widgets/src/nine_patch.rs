//! Nine-patch images
//!
//! A nine-patch is a small source image split into a 3x3 grid: the corners
//! keep their size, the edges stretch along one axis and the center stretches
//! along both. Buttons use one synthesized from the skin: a ring of
//! `button_border` around a `button_fill` interior.

use knit_core::{DrawContext, ImageData, ImageId, Rect};

use crate::error::Result;
use crate::skin::Skin;

/// Source pixels of a nine-patch plus the size of its fixed corners
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NinePatch {
    image: ImageData,
    border: u32,
}

impl NinePatch {
    /// Wrap an existing image. `border` is clamped so the center keeps at
    /// least one pixel where the image allows it.
    pub fn new(image: ImageData, border: u32) -> Self {
        let max_border = image.width().min(image.height()).saturating_sub(1) / 2;
        Self {
            image,
            border: border.min(max_border),
        }
    }

    /// Synthesize the button pattern described by `skin`
    pub fn button(skin: &Skin) -> Result<Self> {
        let size = skin.patch_size;
        let b = skin.patch_border;
        let far = size.saturating_sub(b);
        let image = ImageData::from_fn(size, size, |x, y| {
            if x < b || y < b || x >= far || y >= far {
                skin.button_border
            } else {
                skin.button_fill
            }
        })?;
        Ok(Self::new(image, b))
    }

    pub fn image(&self) -> &ImageData {
        &self.image
    }

    pub fn border(&self) -> u32 {
        self.border
    }

    /// The (source, destination) pairs that stretch this patch over `dst`.
    ///
    /// Corners shrink evenly when `dst` is smaller than two borders. Slices
    /// that would cover no pixels are left out.
    pub fn slices(&self, dst: Rect) -> Vec<(Rect, Rect)> {
        if dst.is_empty() {
            return Vec::new();
        }

        let b = self.border as i32;
        let src_cols = bands(0, self.image.width() as i32, b, b);
        let src_rows = bands(0, self.image.height() as i32, b, b);
        let cx = b.min(dst.width() / 2);
        let cy = b.min(dst.height() / 2);
        let dst_cols = bands(dst.min.x, dst.max.x, cx, cx);
        let dst_rows = bands(dst.min.y, dst.max.y, cy, cy);

        let mut out = Vec::with_capacity(9);
        for (src_row, dst_row) in src_rows.iter().zip(&dst_rows) {
            for (src_col, dst_col) in src_cols.iter().zip(&dst_cols) {
                let src = Rect::new(src_col.0, src_row.0, src_col.1, src_row.1);
                let dst = Rect::new(dst_col.0, dst_row.0, dst_col.1, dst_row.1);
                if !src.is_empty() && !dst.is_empty() {
                    out.push((src, dst));
                }
            }
        }
        out
    }

    /// Draw the uploaded copy of this patch (`image`) stretched over `dst`
    pub fn draw(&self, ctx: &mut dyn DrawContext, image: ImageId, dst: Rect) {
        for (src, dst) in self.slices(dst) {
            ctx.draw_image(image, src, dst);
        }
    }
}

/// Split `[start, end)` into leading, middle and trailing bands
fn bands(start: i32, end: i32, lead: i32, trail: i32) -> [(i32, i32); 3] {
    [
        (start, start + lead),
        (start + lead, end - trail),
        (end - trail, end),
    ]
}

/// A nine-patch uploaded to the drawing surface
#[derive(Clone, Debug)]
pub struct ButtonTexture {
    patch: NinePatch,
    image: ImageId,
}

impl ButtonTexture {
    /// Synthesize the button patch for `skin` and upload it.
    ///
    /// Upload failure is returned to the caller; there is no fallback texture.
    pub fn upload(ctx: &mut dyn DrawContext, skin: &Skin) -> Result<Self> {
        let patch = NinePatch::button(skin)?;
        let image = ctx.create_image(patch.image())?;
        tracing::debug!(
            ?image,
            size = skin.patch_size,
            border = skin.patch_border,
            "uploaded button texture"
        );
        Ok(Self { patch, image })
    }

    pub fn patch(&self) -> &NinePatch {
        &self.patch
    }

    pub fn image(&self) -> ImageId {
        self.image
    }

    /// Draw the button frame stretched over `dst`
    pub fn draw(&self, ctx: &mut dyn DrawContext, dst: Rect) {
        self.patch.draw(ctx, self.image, dst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knit_core::{Color, DrawCommand, DrawError, RecordingContext};

    #[test]
    fn test_button_pattern_pixels() {
        let patch = NinePatch::button(&Skin::default()).unwrap();
        let img = patch.image();

        assert_eq!((img.width(), img.height()), (16, 16));
        assert_eq!(img.pixel(0, 0), Some(Color::rgb(0x33, 0x33, 0x33)));
        assert_eq!(img.pixel(15, 15), Some(Color::rgb(0x33, 0x33, 0x33)));
        assert_eq!(img.pixel(15, 0), Some(Color::DARK_GRAY));
        assert_eq!(img.pixel(0, 8), Some(Color::DARK_GRAY));
        assert_eq!(img.pixel(8, 8), Some(Color::rgb(0xcc, 0xcc, 0xcc)));
        assert_eq!(img.pixel(1, 1), Some(Color::LIGHT_GRAY));
        assert_eq!(img.pixel(14, 14), Some(Color::LIGHT_GRAY));
    }

    #[test]
    fn test_slices_cover_destination() {
        let patch = NinePatch::button(&Skin::default()).unwrap();
        let dst = Rect::from_xywh(10, 20, 80, 24);
        let slices = patch.slices(dst);

        assert_eq!(slices.len(), 9);
        // Corners keep the border size
        assert_eq!(slices[0], (Rect::new(0, 0, 1, 1), Rect::new(10, 20, 11, 21)));
        assert_eq!(
            slices[8],
            (Rect::new(15, 15, 16, 16), Rect::new(89, 43, 90, 44))
        );
        // Center stretches
        assert_eq!(
            slices[4],
            (Rect::new(1, 1, 15, 15), Rect::new(11, 21, 89, 43))
        );

        let area: i32 = slices.iter().map(|(_, d)| d.width() * d.height()).sum();
        assert_eq!(area, 80 * 24);
    }

    #[test]
    fn test_slices_of_thin_destination() {
        let patch = NinePatch::button(&Skin::default()).unwrap();

        // One pixel wide: corners collapse, only the middle column remains
        let slices = patch.slices(Rect::from_xywh(0, 0, 1, 10));
        assert_eq!(slices.len(), 3);
        assert!(slices.iter().all(|(_, d)| d.width() == 1));

        assert!(patch.slices(Rect::from_xywh(0, 0, 0, 10)).is_empty());
    }

    #[test]
    fn test_border_clamped_to_image() {
        let img = ImageData::from_fn(4, 4, |_, _| Color::WHITE).unwrap();
        assert_eq!(NinePatch::new(img, 10).border(), 1);
    }

    #[test]
    fn test_upload_and_draw() {
        let mut ctx = RecordingContext::new();
        let texture = ButtonTexture::upload(&mut ctx, &Skin::default()).unwrap();
        assert_eq!(ctx.image(texture.image()).unwrap().width(), 16);

        texture.draw(&mut ctx, Rect::from_xywh(0, 0, 40, 20));
        assert_eq!(ctx.commands().len(), 9);
        assert!(ctx
            .commands()
            .iter()
            .all(|c| matches!(c, DrawCommand::DrawImage { image, .. } if *image == texture.image())));
    }

    #[test]
    fn test_upload_failure_is_surfaced() {
        let mut ctx = RecordingContext::with_image_capacity(0);
        let err = ButtonTexture::upload(&mut ctx, &Skin::default()).unwrap_err();
        assert!(matches!(
            err,
            crate::WidgetError::Draw(DrawError::ImageCapacity(0))
        ));
    }
}
