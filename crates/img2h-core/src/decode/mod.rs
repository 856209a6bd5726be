//! Image decoding for img2h.
//!
//! This module provides functionality for:
//! - Decoding image files or in-memory bytes into a [`PixelGrid`](crate::PixelGrid)
//! - Reporting the source color type and component layout
//!
//! The format is guessed from the file contents, so the extension of the
//! input does not matter. Every sample is delivered as 8 bits per channel;
//! 16-bit and floating point images are narrowed by the `image` crate.
//!
//! # Examples
//!
//! ```ignore
//! use img2h_core::decode::decode_file;
//!
//! let decoded = decode_file("marker.png".as_ref()).unwrap();
//! println!("{}x{} {}", decoded.info.width, decoded.info.height, decoded.info.layout);
//! ```

mod reader;
mod types;

pub use reader::{decode_bytes, decode_file};
pub use types::{DecodeError, DecodedImage, ImageInfo};
