//! Pixel buffer to source literal encoding.
//!
//! This module provides functionality for:
//! - Encoding a [`PixelGrid`](crate::PixelGrid) as a C `const unsigned char` array
//! - Mapping output rows to decoder rows (bottom-up flip)
//!
//! # Output Format
//!
//! ```text
//! const unsigned char row[] = {
//!     1,   2,   3,
//!     4,   5,   6
//! };
//! ```
//!
//! One pixel per line, each sample right-justified to three characters.
//! The encoder is pure: writing the text somewhere is up to the caller.

mod literal;

pub use literal::{encode, source_row, EncodeError, EncodedLiteral};
