//! Fixed-cell bitmap font metrics
//!
//! Text is placed by its baseline-left origin, the same convention the
//! drawing surface uses for [`DrawContext::draw_text`](crate::DrawContext::draw_text).

use serde::{Deserialize, Serialize};

/// Metrics of a monospaced bitmap font
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BitmapFont {
    /// Horizontal advance of every glyph
    pub glyph_width: i32,
    /// Height of one line of text
    pub line_height: i32,
    /// Distance from the top of a line to its baseline
    pub ascent: i32,
}

impl BitmapFont {
    /// 6x12 cell font, baseline 10 pixels below the top of the line
    pub const GOTHIC_12: BitmapFont = BitmapFont {
        glyph_width: 6,
        line_height: 12,
        ascent: 10,
    };

    pub const fn new(glyph_width: i32, line_height: i32, ascent: i32) -> Self {
        Self {
            glyph_width,
            line_height,
            ascent,
        }
    }

    /// Advance width of `text` in pixels, saturating at `i32::MAX`
    pub fn measure(&self, text: &str) -> i32 {
        i32::try_from(text.chars().count())
            .unwrap_or(i32::MAX)
            .saturating_mul(self.glyph_width)
    }

    /// Distance from the baseline to the bottom of a line
    pub fn descent(&self) -> i32 {
        self.line_height - self.ascent
    }
}

impl Default for BitmapFont {
    fn default() -> Self {
        Self::GOTHIC_12
    }
}
