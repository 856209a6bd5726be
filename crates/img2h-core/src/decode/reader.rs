//! Image file decoding via the `image` crate.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageReader};

use super::{DecodeError, DecodedImage, ImageInfo};
use crate::grid::{ComponentLayout, PixelGrid};

/// Decode an image file into an 8-bit pixel grid.
///
/// # Errors
///
/// Returns `DecodeError::Io` if the path cannot be read,
/// `DecodeError::UnsupportedFormat` if the format is not recognized, and
/// `DecodeError::Corrupted` if the data is truncated or invalid.
pub fn decode_file(path: &Path) -> Result<DecodedImage, DecodeError> {
    log::debug!("Decoding image file {}", path.display());

    let img = ImageReader::open(path)
        .map_err(|e| DecodeError::Io(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| DecodeError::Io(e.to_string()))?
        .decode()?;

    into_decoded(img)
}

/// Decode in-memory image bytes into an 8-bit pixel grid.
pub fn decode_bytes(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::Io(e.to_string()))?
        .decode()?;

    into_decoded(img)
}

/// Convert a decoded image to a grid, keeping its channel layout.
///
/// Palette images arrive here already expanded to RGB(A).
fn into_decoded(img: DynamicImage) -> Result<DecodedImage, DecodeError> {
    let color = img.color();
    let (width, height) = (img.width(), img.height());
    let narrowed = color.bytes_per_pixel() > color.channel_count();

    let (layout, samples) = match (color.has_color(), color.has_alpha()) {
        (false, false) => (ComponentLayout::L, img.into_luma8().into_raw()),
        (false, true) => (ComponentLayout::La, img.into_luma_alpha8().into_raw()),
        (true, false) => (ComponentLayout::Rgb, img.into_rgb8().into_raw()),
        (true, true) => (ComponentLayout::Rgba, img.into_rgba8().into_raw()),
    };

    log::debug!(
        "Decoded {}x{} {:?} as {} ({} samples)",
        width,
        height,
        color,
        layout,
        samples.len()
    );

    let grid = PixelGrid::new(width, height, layout, samples)?;
    Ok(DecodedImage {
        grid,
        info: ImageInfo {
            width,
            height,
            layout,
            source_color: format!("{:?}", color),
            narrowed,
        },
    })
}
