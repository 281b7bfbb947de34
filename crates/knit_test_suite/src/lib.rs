//! Knit Scenario Suite
//!
//! Headless scenarios for the Knit widget layer. Each scenario mounts a
//! widget tree, drives it with scripted pointer input frame by frame, checks
//! the widgets' behavior, and renders the last frame's draw commands with a
//! software rasterizer. Renders are compared against reference PNGs.
//!
//! # Test Categories
//!
//! - **panel**: background fills, nesting, degenerate regions
//! - **label**: alignment inside a region
//! - **button**: press/release state machine and callbacks
//! - **nine_patch**: the synthesized button pattern and its stretching

pub mod harness;
pub mod raster;
pub mod runner;
pub mod tests;

pub use harness::{TestContext, TestHarness, TestHarnessConfig, TestResult};
pub use raster::Rasterizer;
pub use runner::TestRunner;
