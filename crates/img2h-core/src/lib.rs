//! img2h Core - image to C byte-table conversion
//!
//! This crate turns a decoded raster image into a `const unsigned char`
//! array literal that can be compiled into a host program. The table is
//! laid out bottom-up, one pixel per line, so it can initialize image data
//! structures whose row 0 is the bottom scan line.
//!
//! # Module Structure
//!
//! - `grid` - Pixel grid and component layout types
//! - `encode` - Pixel buffer to source literal encoder
//! - `decode` - Image file decoding (built on the `image` crate)
//! - `identifier` - C identifier validation and derivation from paths
//!
//! # Example
//!
//! ```ignore
//! use img2h_core::{encode, ComponentLayout, PixelGrid};
//!
//! let grid = PixelGrid::new(2, 1, ComponentLayout::Rgb, vec![1, 2, 3, 4, 5, 6]).unwrap();
//! let literal = encode(&grid, "row").unwrap();
//! print!("{}", literal);
//! ```

pub mod decode;
pub mod encode;
pub mod grid;
pub mod identifier;

pub use decode::{decode_bytes, decode_file, DecodeError, DecodedImage, ImageInfo};
pub use encode::{encode, source_row, EncodeError, EncodedLiteral};
pub use grid::{ComponentLayout, GridError, PixelGrid};
pub use identifier::{identifier_from_path, validate_identifier, IdentifierError};
