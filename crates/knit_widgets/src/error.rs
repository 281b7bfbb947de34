//! Widget layer errors

use std::path::PathBuf;

use knit_core::DrawError;
use thiserror::Error;

/// Errors raised while setting up widgets
#[derive(Error, Debug)]
pub enum WidgetError {
    /// The drawing surface rejected a resource
    #[error("Drawing surface error: {0}")]
    Draw(#[from] DrawError),

    /// Skin file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Skin TOML could not be parsed
    #[error("Failed to parse skin: {0}")]
    Config(#[from] toml::de::Error),

    /// Skin could not be serialized
    #[error("Failed to serialize skin: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Skin values are inconsistent
    #[error("Invalid skin: {0}")]
    InvalidSkin(String),
}

/// Result type for widget setup
pub type Result<T> = std::result::Result<T, WidgetError>;
