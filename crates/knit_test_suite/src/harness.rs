//! Test harness for widget scenarios
//!
//! Provides infrastructure for running scenarios, including:
//! - A recording drawing surface and scripted pointer input
//! - Frame-by-frame driving of a mounted widget tree
//! - Offscreen rendering to PNG files
//! - Reference image comparison

use anyhow::{anyhow, Context, Result};
use image::{ImageBuffer, Rgba, RgbaImage};
use knit_core::{Color, DrawCommand, Point, Rect, RecordingContext};
use knit_platform::{InputEvent, MouseButton, MouseEvent, PointerInput, PointerState};
use knit_widgets::{Skin, Ui, Widget};
use std::path::PathBuf;

use crate::raster::Rasterizer;

/// Result of a scenario
#[derive(Debug)]
pub enum TestResult {
    /// Scenario passed
    Passed,
    /// Scenario passed and its reference image was created
    PassedWithNewReference,
    /// A behavioral check failed
    Failed { reason: String },
    /// Render differs from the reference image
    Mismatch { difference: f32, diff_path: PathBuf },
}

impl TestResult {
    pub fn is_passed(&self) -> bool {
        matches!(
            self,
            TestResult::Passed | TestResult::PassedWithNewReference
        )
    }
}

/// Context for a single scenario
pub struct TestContext {
    /// Scenario name
    pub name: String,
    /// Recording surface; holds the commands of the last drawn frame
    pub ctx: RecordingContext,
    /// Scripted pointer
    pub pointer: PointerState,
    /// Region handed to the root widget every frame
    pub viewport: Rect,
    /// Canvas color behind the widgets
    pub clear_color: Color,
    ui: Option<Ui>,
    frames: u32,
}

impl TestContext {
    /// Create a new test context
    pub fn new(name: &str, width: i32, height: i32) -> Self {
        Self {
            name: name.to_string(),
            ctx: RecordingContext::new(),
            pointer: PointerState::new(),
            viewport: Rect::from_xywh(0, 0, width, height),
            clear_color: Color::from_hex(0x808080),
            ui: None,
            frames: 0,
        }
    }

    /// Mount a widget tree with the default skin
    pub fn mount(&mut self, root: impl Into<Widget>) -> Result<()> {
        self.mount_with_skin(Skin::default(), root)
    }

    /// Mount a widget tree with a custom skin
    pub fn mount_with_skin(&mut self, skin: Skin, root: impl Into<Widget>) -> Result<()> {
        let ui = Ui::new(&mut self.ctx, skin, root).context("Failed to mount widget tree")?;
        self.ui = Some(ui);
        Ok(())
    }

    pub fn ui(&self) -> Result<&Ui> {
        self.ui.as_ref().ok_or_else(|| anyhow!("no widget tree mounted"))
    }

    pub fn ui_mut(&mut self) -> Result<&mut Ui> {
        self.ui.as_mut().ok_or_else(|| anyhow!("no widget tree mounted"))
    }

    /// Run one frame: apply `events`, poll input, then redraw.
    ///
    /// Returns whether the root consumed the input.
    pub fn frame(&mut self, events: &[InputEvent]) -> Result<bool> {
        for event in events {
            self.pointer.handle_event(event);
        }

        let viewport = self.viewport;
        let ui = self.ui.as_mut().ok_or_else(|| anyhow!("no widget tree mounted"))?;
        let consumed = ui.handle_input(&self.pointer, viewport);
        self.pointer.end_frame();

        self.ctx.clear();
        ui.draw(&mut self.ctx, viewport);
        self.frames += 1;

        tracing::trace!(
            frame = self.frames,
            consumed,
            commands = self.ctx.commands().len(),
            "frame done"
        );
        Ok(consumed)
    }

    /// Frame with the pointer moved to (x, y)
    pub fn move_to(&mut self, x: i32, y: i32) -> Result<bool> {
        self.frame(&[InputEvent::Mouse(MouseEvent::Moved {
            x: x as f32,
            y: y as f32,
        })])
    }

    /// Frame with the left button pressed at the current position
    pub fn press(&mut self) -> Result<bool> {
        let Point { x, y } = self.pointer.cursor_position();
        self.frame(&[InputEvent::Mouse(MouseEvent::ButtonPressed {
            button: MouseButton::Left,
            x: x as f32,
            y: y as f32,
        })])
    }

    /// Frame with the left button released at the current position
    pub fn release(&mut self) -> Result<bool> {
        let Point { x, y } = self.pointer.cursor_position();
        self.frame(&[InputEvent::Mouse(MouseEvent::ButtonReleased {
            button: MouseButton::Left,
            x: x as f32,
            y: y as f32,
        })])
    }

    /// Move, press and release over three frames
    pub fn click(&mut self, x: i32, y: i32) -> Result<()> {
        self.move_to(x, y)?;
        self.press()?;
        self.release()?;
        Ok(())
    }

    /// Commands of the last drawn frame
    pub fn commands(&self) -> &[DrawCommand] {
        self.ctx.commands()
    }

    /// Text of every caption drawn in the last frame, in draw order
    pub fn drawn_text(&self) -> Vec<&str> {
        self.commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::DrawText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of frames run so far
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Rasterize the last drawn frame
    pub fn render(&self) -> Result<RgbaImage> {
        let (width, height) = self.viewport.size();
        let mut raster = Rasterizer::new(width.max(1) as u32, height.max(1) as u32, self.clear_color);
        raster.render(self.commands(), &self.ctx)?;
        Ok(raster.into_image())
    }
}

/// Configuration for test harness
#[derive(Debug, Clone)]
pub struct TestHarnessConfig {
    /// Output directory for test results
    pub output_dir: PathBuf,
    /// Reference image directory
    pub reference_dir: PathBuf,
    /// Default viewport size
    pub default_size: (i32, i32),
    /// Difference threshold for visual comparison (0.0-1.0)
    pub threshold: f32,
}

impl Default for TestHarnessConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("test_output"),
            reference_dir: PathBuf::from("test_output/references"),
            default_size: (320, 240),
            // The rasterizer is deterministic
            threshold: 0.0,
        }
    }
}

/// Test harness for running scenarios
pub struct TestHarness {
    config: TestHarnessConfig,
}

impl TestHarness {
    /// Create a new test harness with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(TestHarnessConfig::default())
    }

    /// Create a new test harness with custom configuration
    pub fn with_config(config: TestHarnessConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.output_dir).context("Failed to create output directory")?;
        std::fs::create_dir_all(&config.reference_dir)
            .context("Failed to create reference directory")?;
        Ok(Self { config })
    }

    /// Run a scenario, render its last frame and compare with the reference
    pub fn run_test<F>(&self, name: &str, test_fn: F) -> Result<TestResult>
    where
        F: FnOnce(&mut TestContext) -> Result<()>,
    {
        let (width, height) = self.config.default_size;
        let mut ctx = TestContext::new(name, width, height);

        if let Err(e) = test_fn(&mut ctx) {
            tracing::warn!("Test '{}' FAILED: {:#}", name, e);
            return Ok(TestResult::Failed {
                reason: format!("{e:#}"),
            });
        }

        let output_img = ctx.render()?;
        let output_path = self.output_path(name);
        output_img
            .save(&output_path)
            .with_context(|| format!("Failed to save {}", output_path.display()))?;
        tracing::info!(
            "Rendered test '{}' ({} frames, {} commands) to {:?}",
            name,
            ctx.frames(),
            ctx.commands().len(),
            output_path
        );

        let reference_path = self.reference_path(name);
        if !reference_path.exists() {
            std::fs::copy(&output_path, &reference_path)
                .context("Failed to create reference image")?;
            tracing::info!(
                "Test '{}' created new reference at {:?}",
                name,
                reference_path
            );
            return Ok(TestResult::PassedWithNewReference);
        }

        let reference_img = image::open(&reference_path)
            .context("Failed to open reference image")?
            .to_rgba8();
        let difference = Self::compare_images(&output_img, &reference_img);

        if difference <= self.config.threshold {
            tracing::debug!("Test '{}' PASSED (diff: {:.4}%)", name, difference * 100.0);
            return Ok(TestResult::Passed);
        }

        let diff_path = self.diff_path(name);
        if let Some(diff_img) = Self::generate_diff_image(&output_img, &reference_img) {
            diff_img
                .save(&diff_path)
                .with_context(|| format!("Failed to save {}", diff_path.display()))?;
        }
        tracing::warn!(
            "Test '{}' FAILED (diff: {:.4}%, threshold: {:.4}%)",
            name,
            difference * 100.0,
            self.config.threshold * 100.0
        );
        Ok(TestResult::Mismatch {
            difference,
            diff_path,
        })
    }

    /// Compare two images and return the difference ratio (0.0 = identical, 1.0 = completely different)
    pub fn compare_images(img1: &RgbaImage, img2: &RgbaImage) -> f32 {
        if img1.dimensions() != img2.dimensions() {
            return 1.0;
        }

        let (width, height) = img1.dimensions();
        let total_pixels = (width as f64) * (height as f64);
        if total_pixels == 0.0 {
            return 0.0;
        }

        let diff_sum: f64 = img1
            .pixels()
            .zip(img2.pixels())
            .map(|(p1, p2)| {
                p1.0.iter()
                    .zip(p2.0.iter())
                    .map(|(a, b)| (*a as f64 - *b as f64).abs() / 255.0)
                    .sum::<f64>()
                    / 4.0
            })
            .sum();

        (diff_sum / total_pixels) as f32
    }

    /// Generate a diff image highlighting differences between two images
    pub fn generate_diff_image(img1: &RgbaImage, img2: &RgbaImage) -> Option<RgbaImage> {
        if img1.dimensions() != img2.dimensions() {
            return None;
        }

        let (width, height) = img1.dimensions();
        let diff = ImageBuffer::from_fn(width, height, |x, y| {
            let p1 = img1.get_pixel(x, y);
            let p2 = img2.get_pixel(x, y);
            if p1 != p2 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([p1[0] / 3, p1[1] / 3, p1[2] / 3, 128])
            }
        });

        Some(diff)
    }

    /// Get the reference image path for a test
    pub fn reference_path(&self, name: &str) -> PathBuf {
        self.config.reference_dir.join(format!("{}.png", name))
    }

    /// Get the output image path for a test
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.config.output_dir.join(format!("{}.png", name))
    }

    /// Get the diff image path for a test
    pub fn diff_path(&self, name: &str) -> PathBuf {
        self.config.output_dir.join(format!("{}_diff.png", name))
    }
}
