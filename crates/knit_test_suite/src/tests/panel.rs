//! Panel scenarios

use anyhow::ensure;
use knit_core::{Color, DrawCommand, Rect};
use knit_widgets::{Button, Label, Panel};

use crate::runner::TestSuite;

/// Create the panel suite
pub fn suite() -> TestSuite {
    let mut suite = TestSuite::new("panel");

    suite.add("background_fill", |ctx| {
        ctx.mount(Panel::new().background(Color::from_hex(0xf0e0d0)))?;
        ctx.frame(&[])?;

        let viewport = ctx.viewport;
        ensure!(
            ctx.commands()
                == [DrawCommand::FillRect {
                    rect: viewport,
                    color: Color::from_hex(0xf0e0d0),
                }],
            "expected a single viewport fill, got {:?}",
            ctx.commands()
        );
        Ok(())
    });

    suite.add("zero_area_viewport", |ctx| {
        ctx.mount(
            Panel::new()
                .background(Color::WHITE)
                .child(Label::new(Rect::from_xywh(0, 0, 100, 20), "hidden"))
                .child(Button::new(Rect::from_xywh(0, 30, 60, 20), "hidden")),
        )?;

        for viewport in [Rect::from_xywh(0, 0, 0, 240), Rect::from_xywh(0, 0, 320, 0)] {
            ctx.viewport = viewport;
            ctx.frame(&[])?;
            ensure!(
                ctx.commands().is_empty(),
                "drew {} commands into {}",
                ctx.commands().len(),
                viewport
            );
        }

        ctx.viewport = Rect::from_xywh(0, 0, 320, 240);
        ctx.frame(&[])?;
        Ok(())
    });

    suite.add("nested_panels_share_region", |ctx| {
        ctx.mount(
            Panel::new().background(Color::WHITE).child(
                Panel::new()
                    .background(Color::from_hex(0xddeeff))
                    .child(Label::new(Rect::from_xywh(16, 16, 200, 16), "inner")),
            ),
        )?;
        ctx.frame(&[])?;

        let fills = ctx
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { rect, .. } if *rect == ctx.viewport))
            .count();
        ensure!(fills == 2, "both panels should fill the viewport, got {fills}");
        ensure!(ctx.drawn_text() == ["inner"]);
        Ok(())
    });

    suite.add("empty_panel_claims_input", |ctx| {
        ctx.mount(Panel::new().background(Color::WHITE))?;
        ensure!(ctx.move_to(5, 5)?, "panels report input as consumed");
        Ok(())
    });

    suite
}
