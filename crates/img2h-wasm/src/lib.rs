//! img2h WASM - WebAssembly bindings for img2h
//!
//! This crate exposes the img2h-core decoder and encoder to JavaScript so a
//! web page can turn a dropped image file into a C header without a server.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper type for pixel grids
//! - `decode` - Image decoding and inspection bindings
//! - `encode` - C array literal bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { encode_image_bytes } from '@img2h/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const header = encode_image_bytes(bytes, 'marker');
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod types;

// Re-export public types
pub use decode::{decode_image, image_info};
pub use encode::{encode_grid, encode_image_bytes, encode_pixels};
pub use types::JsPixelGrid;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
