//! Skin configuration
//!
//! A skin collects every visual constant the widgets use. It can be built in
//! code or loaded from TOML; missing keys fall back to the defaults:
//!
//! ```toml
//! text_color = "#000000"
//! button_border = "#333333"
//! button_fill = "#cccccc"
//! patch_size = 16
//! patch_border = 1
//!
//! [font]
//! glyph_width = 6
//! line_height = 12
//! ascent = 10
//! ```

use std::fs;
use std::path::Path;

use knit_core::{BitmapFont, Color};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WidgetError};

/// Largest accepted side length of the button nine-patch source
pub const MAX_PATCH_SIZE: u32 = 256;

/// Largest accepted glyph width and line height
pub const MAX_GLYPH_SIZE: i32 = 256;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skin {
    /// Color of label and button captions
    pub text_color: Color,
    /// Outer ring of the button nine-patch
    pub button_border: Color,
    /// Interior of the button nine-patch
    pub button_fill: Color,
    /// Font used for all text
    pub font: BitmapFont,
    /// Side length of the square button nine-patch source
    pub patch_size: u32,
    /// Border thickness of the nine-patch; also the size of its fixed corners
    pub patch_border: u32,
}

impl Default for Skin {
    fn default() -> Self {
        Self {
            text_color: Color::BLACK,
            button_border: Color::DARK_GRAY,
            button_fill: Color::LIGHT_GRAY,
            font: BitmapFont::GOTHIC_12,
            patch_size: 16,
            patch_border: 1,
        }
    }
}

impl Skin {
    /// Parse a skin from TOML and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let skin: Skin = toml::from_str(content)?;
        skin.validate()?;
        Ok(skin)
    }

    /// Load a skin file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| WidgetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let skin = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded skin");
        Ok(skin)
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check that the values describe a drawable skin
    pub fn validate(&self) -> Result<()> {
        if self.patch_size > MAX_PATCH_SIZE {
            return Err(WidgetError::InvalidSkin(format!(
                "patch_size {} exceeds {MAX_PATCH_SIZE}",
                self.patch_size
            )));
        }
        let too_thick = self
            .patch_border
            .checked_mul(2)
            .map_or(true, |twice| self.patch_size <= twice);
        if self.patch_border == 0 || too_thick {
            return Err(WidgetError::InvalidSkin(format!(
                "patch_size {} must exceed twice patch_border {}",
                self.patch_size, self.patch_border
            )));
        }
        let font = &self.font;
        let cell = 1..=MAX_GLYPH_SIZE;
        if !cell.contains(&font.glyph_width) || !cell.contains(&font.line_height) {
            return Err(WidgetError::InvalidSkin(format!(
                "font cell {}x{} must lie within 1..={MAX_GLYPH_SIZE}",
                font.glyph_width, font.line_height
            )));
        }
        if font.ascent < 0 || font.ascent > font.line_height {
            return Err(WidgetError::InvalidSkin(format!(
                "font ascent {} must lie within line height {}",
                font.ascent, font.line_height
            )));
        }
        Ok(())
    }
}
