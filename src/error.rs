//! Rendering error taxonomy.
//!
//! Every load or upload failure surfaces as a [`RenderError`]. The library only
//! propagates them; the binary treats all of them as fatal.

use std::fmt;
use std::path::{Path, PathBuf};

/// Failure while acquiring a rendering resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The file is missing, corrupt or cannot be decoded (images and fonts).
    AssetLoad { path: PathBuf, reason: String },
    /// The decoded image could not be uploaded to the backend.
    TextureCreation(String),
    /// The font could not rasterize the requested text.
    TextRender(String),
}

impl RenderError {
    pub fn asset_load(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        RenderError::AssetLoad {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::AssetLoad { path, reason } => {
                write!(f, "Failed to load asset {}: {}", path.display(), reason)
            }
            RenderError::TextureCreation(reason) => {
                write!(f, "Failed to create texture: {}", reason)
            }
            RenderError::TextRender(reason) => write!(f, "Failed to render text: {}", reason),
        }
    }
}

impl std::error::Error for RenderError {}
