//! Core types for image decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{ComponentLayout, GridError, PixelGrid};

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(String),

    /// The file format is not recognized or supported.
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    Corrupted(String),

    /// The decoder produced pixel data that does not form a grid.
    #[error("Invalid pixel grid: {0}")]
    InvalidGrid(#[from] GridError),
}

impl From<image::ImageError> for DecodeError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => DecodeError::Io(e.to_string()),
            image::ImageError::Unsupported(e) => DecodeError::UnsupportedFormat(e.to_string()),
            other => DecodeError::Corrupted(other.to_string()),
        }
    }
}

/// Description of a decoded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Component layout of the decoded grid.
    pub layout: ComponentLayout,
    /// Color type reported by the decoder (e.g. "Rgb16").
    pub source_color: String,
    /// Whether samples were narrowed from a wider type to 8 bits.
    pub narrowed: bool,
}

/// A decoded image: the pixel grid plus what the decoder reported about it.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub grid: PixelGrid,
    pub info: ImageInfo,
}
