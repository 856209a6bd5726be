//! Image inspection WASM bindings.
//!
//! # Functions
//!
//! - [`decode_image`] - Decode an image file into a JsPixelGrid
//! - [`image_info`] - Report dimensions, layout and source color type
//!
//! # Example
//!
//! ```typescript
//! const info = image_info(bytes);
//! console.log(`${info.width}x${info.height} ${info.layout} (${info.source_color})`);
//! ```

use crate::types::JsPixelGrid;
use img2h_core::{decode, DecodedImage};
use wasm_bindgen::prelude::*;

/// Decode an image file into a pixel grid (8 bits per sample, top row first).
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsPixelGrid, JsValue> {
    decode_to_core(bytes).map(JsPixelGrid::from_decoded)
}

/// Describe an image file without keeping its pixels.
///
/// # Returns
///
/// An object `{ width, height, layout, source_color, narrowed }` where
/// `layout` is one of `"L"`, `"La"`, `"Rgb"`, `"Rgba"`.
#[wasm_bindgen]
pub fn image_info(bytes: &[u8]) -> Result<JsValue, JsValue> {
    let decoded = decode_to_core(bytes)?;
    serde_wasm_bindgen::to_value(&decoded.info)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize image info: {}", e)))
}

fn decode_to_core(bytes: &[u8]) -> Result<DecodedImage, JsValue> {
    decode::decode_bytes(bytes).map_err(|e| JsValue::from_str(&e.to_string()))
}
