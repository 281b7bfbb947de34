//! Text alignment

use knit_core::{BitmapFont, Point, Rect};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalAlign {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Baseline-left origin for drawing `text` aligned inside `region`.
///
/// The text box is `font.measure(text)` wide and one line high. Text larger
/// than the region overflows it symmetrically when centered. Coordinates
/// saturate instead of wrapping for extreme metrics.
pub fn text_at(
    font: &BitmapFont,
    text: &str,
    region: Rect,
    horizontal: HorizontalAlign,
    vertical: VerticalAlign,
) -> Point {
    let width = font.measure(text);

    let x = match horizontal {
        HorizontalAlign::Start => region.min.x,
        HorizontalAlign::Center => region
            .min
            .x
            .saturating_add(region.width().saturating_sub(width) / 2),
        HorizontalAlign::End => region.max.x.saturating_sub(width),
    };

    let top = match vertical {
        VerticalAlign::Top => region.min.y,
        VerticalAlign::Middle => region
            .min
            .y
            .saturating_add(region.height().saturating_sub(font.line_height) / 2),
        VerticalAlign::Bottom => region.max.y.saturating_sub(font.line_height),
    };

    Point::new(x, top.saturating_add(font.ascent))
}
