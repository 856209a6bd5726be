//! C array literal WASM bindings.
//!
//! # Functions
//!
//! - [`encode_pixels`] - Encode raw samples to a C array literal
//! - [`encode_grid`] - Encode a JsPixelGrid to a C array literal
//! - [`encode_image_bytes`] - Decode an image file and encode it in one call
//!
//! # Example
//!
//! ```typescript
//! import { encode_pixels, encode_image_bytes } from '@img2h/wasm';
//!
//! // 2x1 RGB image
//! const header = encode_pixels(new Uint8Array([1, 2, 3, 4, 5, 6]), 2, 1, 3, 'row');
//!
//! // Whole image file
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const marker = encode_image_bytes(bytes, 'marker');
//! ```

use crate::types::JsPixelGrid;
use img2h_core::{decode, encode, PixelGrid};
use wasm_bindgen::prelude::*;

/// Encode raw samples as a `const unsigned char` array literal.
///
/// # Arguments
///
/// * `pixels` - Samples as a `Uint8Array` (row-major, top row first)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `components` - Components per pixel (1 to 4)
/// * `name` - Array name; must be a valid C identifier
///
/// # Errors
///
/// Returns an error if:
/// - The component count is outside 1-4
/// - The sample count doesn't match width * height * components
/// - Width or height is zero
/// - The name is not a valid C identifier
#[wasm_bindgen]
pub fn encode_pixels(
    pixels: &[u8],
    width: u32,
    height: u32,
    components: usize,
    name: &str,
) -> Result<String, JsValue> {
    let grid = PixelGrid::with_components(width, height, components, pixels.to_vec())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    encode_to_string(&grid, name)
}

/// Encode a JsPixelGrid as a `const unsigned char` array literal.
#[wasm_bindgen]
pub fn encode_grid(grid: &JsPixelGrid, name: &str) -> Result<String, JsValue> {
    encode_to_string(grid.grid(), name)
}

/// Decode an image file and encode it as a `const unsigned char` array literal.
///
/// # Errors
///
/// Returns an error if the bytes are not a supported image, or if the
/// name is not a valid C identifier.
#[wasm_bindgen]
pub fn encode_image_bytes(bytes: &[u8], name: &str) -> Result<String, JsValue> {
    let decoded = decode::decode_bytes(bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;
    encode_to_string(&decoded.grid, name)
}

fn encode_to_string(grid: &PixelGrid, name: &str) -> Result<String, JsValue> {
    encode::encode(grid, name)
        .map(|literal| literal.into_string())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Tests for encode bindings.
///
/// Functions returning `Result<T, JsValue>` only work on wasm32 targets;
/// the underlying behavior is covered in `img2h_core::encode`.
#[cfg(test)]
mod tests {
    use img2h_core::ComponentLayout;

    // Tests that work on all targets

    #[test]
    fn test_core_encode_from_raw_samples() {
        let grid = img2h_core::PixelGrid::with_components(1, 1, 1, vec![5]).unwrap();
        assert_eq!(grid.layout(), ComponentLayout::L);

        let text = img2h_core::encode(&grid, "px").unwrap().into_string();
        assert_eq!(text, "const unsigned char px[] = {\n    5\n};\n");
    }
}
