//! Software rasterizer for recorded draw commands
//!
//! Fills are alpha-blended, images are stretched with nearest-neighbour
//! sampling, and text is drawn as solid glyph cells: scenarios check where
//! text lands, not its letterforms.

use anyhow::Result;
use image::{Rgba, RgbaImage};
use knit_core::{BitmapFont, Color, DrawCommand, ImageData, Point, Rect, RecordingContext};

/// Renders [`DrawCommand`]s into an RGBA canvas
pub struct Rasterizer {
    canvas: RgbaImage,
}

impl Rasterizer {
    /// Create a canvas cleared to `background`
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            canvas: RgbaImage::from_pixel(width, height, Rgba(background.to_array())),
        }
    }

    /// Execute `commands`, resolving images through `images`
    pub fn render(&mut self, commands: &[DrawCommand], images: &RecordingContext) -> Result<()> {
        for command in commands {
            match command {
                DrawCommand::FillRect { rect, color } => self.fill_rect(*rect, *color),
                DrawCommand::DrawText {
                    text,
                    font,
                    origin,
                    color,
                } => self.draw_text(text, font, *origin, *color),
                DrawCommand::DrawImage { image, src, dst } => {
                    let data = images.image(*image)?;
                    self.draw_image(data, *src, *dst);
                }
            }
        }
        Ok(())
    }

    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    pub fn into_image(self) -> RgbaImage {
        self.canvas
    }

    fn bounds(&self) -> Rect {
        Rect::from_xywh(
            0,
            0,
            self.canvas.width() as i32,
            self.canvas.height() as i32,
        )
    }

    /// Canvas pixels covered by `rect`, as half-open ranges
    fn clip(&self, rect: Rect) -> Option<(std::ops::Range<i32>, std::ops::Range<i32>)> {
        let b = self.bounds();
        let x0 = rect.min.x.max(b.min.x);
        let y0 = rect.min.y.max(b.min.y);
        let x1 = rect.max.x.min(b.max.x);
        let y1 = rect.max.y.min(b.max.y);
        (x0 < x1 && y0 < y1).then(|| (x0..x1, y0..y1))
    }

    fn blend(&mut self, x: i32, y: i32, color: Color) {
        let dst = self.canvas.get_pixel_mut(x as u32, y as u32);
        let a = color.a as u32;
        if a == 0xff {
            *dst = Rgba(color.to_array());
            return;
        }
        let inv = 0xff - a;
        let src = color.to_array();
        for c in 0..3 {
            dst.0[c] = ((src[c] as u32 * a + dst.0[c] as u32 * inv) / 0xff) as u8;
        }
        dst.0[3] = (a + dst.0[3] as u32 * inv / 0xff).min(0xff) as u8;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some((xs, ys)) = self.clip(rect) else {
            return;
        };
        for y in ys {
            for x in xs.clone() {
                self.blend(x, y, color);
            }
        }
    }

    fn draw_image(&mut self, image: &ImageData, src: Rect, dst: Rect) {
        if src.is_empty() || dst.is_empty() {
            return;
        }
        let Some((xs, ys)) = self.clip(dst) else {
            return;
        };
        for y in ys {
            let sy = src.min.y + (y - dst.min.y) * src.height() / dst.height();
            for x in xs.clone() {
                let sx = src.min.x + (x - dst.min.x) * src.width() / dst.width();
                if let Some(color) = image.pixel(sx as u32, sy as u32) {
                    self.blend(x, y, color);
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, font: &BitmapFont, origin: Point, color: Color) {
        let top = origin.y - font.ascent;
        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let x = origin.x + i as i32 * font.glyph_width;
            // Leave a one pixel gutter between cells and above the cap line
            let cell = Rect::new(x, top + 2, x + font.glyph_width - 1, origin.y);
            self.fill_rect(cell, color);
        }
    }
}

/// Convert pixel data to an `image` buffer
pub fn to_rgba_image(data: &ImageData) -> RgbaImage {
    // Dimensions and length are validated by ImageData
    RgbaImage::from_fn(data.width(), data.height(), |x, y| {
        Rgba(data.pixel(x, y).unwrap_or(Color::TRANSPARENT).to_array())
    })
}
