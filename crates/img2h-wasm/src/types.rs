//! WASM-compatible wrapper type for pixel grids.

use img2h_core::{DecodedImage, PixelGrid};
use wasm_bindgen::prelude::*;

/// A pixel grid wrapper for JavaScript.
///
/// Holds samples in row-major order with row 0 at the top, components
/// interleaved per pixel.
///
/// # Memory Management
///
/// The samples live in WASM memory. `pixels()` copies them out to a
/// `Uint8Array`. wasm-bindgen's generated `free()` releases a large grid early.
#[wasm_bindgen]
pub struct JsPixelGrid {
    inner: PixelGrid,
}

#[wasm_bindgen]
impl JsPixelGrid {
    /// Create a grid from dimensions, component count (1-4) and samples.
    ///
    /// # Errors
    /// Returns an error if the component count is unsupported or the sample
    /// count doesn't match `width * height * components`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: u32,
        height: u32,
        components: usize,
        pixels: Vec<u8>,
    ) -> Result<JsPixelGrid, JsValue> {
        PixelGrid::with_components(width, height, components, pixels)
            .map(|inner| JsPixelGrid { inner })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Components per pixel (1 = L, 2 = LA, 3 = RGB, 4 = RGBA).
    #[wasm_bindgen(getter)]
    pub fn components(&self) -> usize {
        self.inner.components()
    }

    /// Layout name, e.g. "RGBA".
    #[wasm_bindgen(getter)]
    pub fn layout(&self) -> String {
        self.inner.layout().to_string()
    }

    /// Returns the samples as a Uint8Array (copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.samples().to_vec()
    }
}

impl JsPixelGrid {
    pub(crate) fn from_decoded(decoded: DecodedImage) -> Self {
        Self {
            inner: decoded.grid,
        }
    }

    pub(crate) fn grid(&self) -> &PixelGrid {
        &self.inner
    }
}
