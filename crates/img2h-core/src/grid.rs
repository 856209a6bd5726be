//! Pixel grid and component layout types.
//!
//! A [`PixelGrid`] holds decoded 8-bit samples in the decoder's native
//! order: row-major, row 0 at the top, components interleaved per pixel.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when constructing a pixel grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// Sample buffer length doesn't match the grid dimensions.
    #[error("Invalid sample data: expected {expected} samples (width * height * components), got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },

    /// Component count is outside the supported 1..=4 range.
    #[error("Unsupported component count: {0} (expected 1 to 4)")]
    UnsupportedComponents(usize),
}

/// Ordered channel tuple of every pixel in a grid.
///
/// Only the number of channels matters to the encoder; the names are kept
/// for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentLayout {
    /// Luminance.
    L,
    /// Luminance + alpha.
    La,
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue, alpha.
    Rgba,
}

impl ComponentLayout {
    /// Number of components per pixel.
    #[inline]
    pub fn components(self) -> usize {
        match self {
            ComponentLayout::L => 1,
            ComponentLayout::La => 2,
            ComponentLayout::Rgb => 3,
            ComponentLayout::Rgba => 4,
        }
    }

    /// Channel names in emission order.
    pub fn channel_names(self) -> &'static [&'static str] {
        match self {
            ComponentLayout::L => &["L"],
            ComponentLayout::La => &["L", "A"],
            ComponentLayout::Rgb => &["R", "G", "B"],
            ComponentLayout::Rgba => &["R", "G", "B", "A"],
        }
    }

    /// Layout for a component count, or `None` outside 1..=4.
    pub fn from_components(components: usize) -> Option<Self> {
        match components {
            1 => Some(ComponentLayout::L),
            2 => Some(ComponentLayout::La),
            3 => Some(ComponentLayout::Rgb),
            4 => Some(ComponentLayout::Rgba),
            _ => None,
        }
    }
}

impl fmt::Display for ComponentLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.channel_names().concat())
    }
}

/// Decoded image samples with their dimensions and layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    layout: ComponentLayout,
    samples: Vec<u8>,
}

impl PixelGrid {
    /// Create a grid from top-down, row-major interleaved samples.
    ///
    /// # Errors
    ///
    /// Returns `GridError::SampleCountMismatch` unless
    /// `samples.len() == width * height * layout.components()`.
    /// Zero-sized grids are accepted here and rejected by the encoder.
    pub fn new(
        width: u32,
        height: u32,
        layout: ComponentLayout,
        samples: Vec<u8>,
    ) -> Result<Self, GridError> {
        let expected = (width as usize) * (height as usize) * layout.components();
        if samples.len() != expected {
            return Err(GridError::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }

        Ok(Self {
            width,
            height,
            layout,
            samples,
        })
    }

    /// Create a grid from a raw component count (1 to 4).
    pub fn with_components(
        width: u32,
        height: u32,
        components: usize,
        samples: Vec<u8>,
    ) -> Result<Self, GridError> {
        let layout = ComponentLayout::from_components(components)
            .ok_or(GridError::UnsupportedComponents(components))?;
        Self::new(width, height, layout, samples)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn layout(&self) -> ComponentLayout {
        self.layout
    }

    /// Number of components per pixel.
    #[inline]
    pub fn components(&self) -> usize {
        self.layout.components()
    }

    /// All samples in decoder order.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Total number of samples (width * height * components).
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Check if this grid has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Components of the pixel at column `x` of decoder row `y`.
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let c = self.components();
        let start = ((y as usize) * (self.width as usize) + (x as usize)) * c;
        &self.samples[start..start + c]
    }
}
