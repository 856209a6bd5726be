//! C array literal encoding.

use std::fmt::{self, Write as _};
use std::io;

use thiserror::Error;

use crate::grid::PixelGrid;
use crate::identifier::{validate_identifier, IdentifierError};

/// Indentation in front of every pixel line.
const INDENT: &str = "  ";

/// Separator between components of one pixel.
const COMPONENT_SEPARATOR: &str = ", ";

/// Errors that can occur during literal encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width, height or component count is zero
    #[error("Invalid grid: width ({width}), height ({height}) and components ({components}) must be non-zero")]
    InvalidGrid {
        width: u32,
        height: u32,
        components: usize,
    },

    /// Array name is not a legal C identifier
    #[error("Invalid array name: {0}")]
    InvalidName(#[from] IdentifierError),

    /// Formatting into the output buffer failed
    #[error("Formatting failed")]
    Format(#[from] fmt::Error),
}

/// A formatted C array declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedLiteral {
    name: String,
    text: String,
}

impl EncodedLiteral {
    /// The array identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full declaration text, including the trailing newline.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Write the declaration to a sink.
    pub fn write_to<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(self.text.as_bytes())?;
        out.flush()
    }
}

impl fmt::Display for EncodedLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Decoder row that holds output row `row` of a grid `height` rows tall.
///
/// Decoders store row 0 at the top; the table is emitted bottom-up.
/// `row` must be less than `height`.
#[inline]
pub fn source_row(row: u32, height: u32) -> u32 {
    debug_assert!(row < height, "row {} out of range for height {}", row, height);
    height - 1 - row
}

/// Encode a pixel grid as a `const unsigned char` array named `name`.
///
/// # Arguments
///
/// * `grid` - Decoded samples (row 0 at the top)
/// * `name` - Array identifier; must be a legal C identifier
///
/// # Returns
///
/// The complete declaration, or an error if the grid is empty or the name
/// is not a valid identifier. Nothing is written anywhere.
///
/// # Example
///
/// ```
/// use img2h_core::{encode, ComponentLayout, PixelGrid};
///
/// let grid = PixelGrid::new(1, 1, ComponentLayout::L, vec![5]).unwrap();
/// let literal = encode(&grid, "px").unwrap();
/// assert_eq!(literal.as_str(), "const unsigned char px[] = {\n    5\n};\n");
/// ```
pub fn encode(grid: &PixelGrid, name: &str) -> Result<EncodedLiteral, EncodeError> {
    if grid.is_empty() || grid.components() == 0 {
        return Err(EncodeError::InvalidGrid {
            width: grid.width(),
            height: grid.height(),
            components: grid.components(),
        });
    }

    validate_identifier(name)?;

    let mut text = String::with_capacity(estimated_len(grid, name));
    write_literal(&mut text, grid, name)?;

    Ok(EncodedLiteral {
        name: name.to_string(),
        text,
    })
}

/// Upper bound on the output size, used to pre-size the buffer.
fn estimated_len(grid: &PixelGrid, name: &str) -> usize {
    let c = grid.components();
    let pixels = (grid.width() as usize) * (grid.height() as usize);
    let line = INDENT.len() + c * 3 + (c - 1) * COMPONENT_SEPARATOR.len() + 2;
    name.len() + 32 + pixels * line
}

fn write_literal<W: fmt::Write>(out: &mut W, grid: &PixelGrid, name: &str) -> fmt::Result {
    let (width, height) = (grid.width(), grid.height());

    writeln!(out, "const unsigned char {}[] = {{", name)?;

    for row in 0..height {
        let y = source_row(row, height);
        let last_row = row + 1 == height;

        for x in 0..width {
            out.write_str(INDENT)?;
            for (i, sample) in grid.pixel(x, y).iter().enumerate() {
                if i > 0 {
                    out.write_str(COMPONENT_SEPARATOR)?;
                }
                write!(out, "{:>3}", sample)?;
            }

            if !(last_row && x + 1 == width) {
                out.write_char(',')?;
            }
            out.write_char('\n')?;
        }
    }

    out.write_str("};\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ComponentLayout;

    fn body(literal: &EncodedLiteral) -> &str {
        let text = literal.as_str();
        let start = text.find('\n').unwrap() + 1;
        let end = text.rfind("};").unwrap();
        &text[start..end]
    }

    #[test]
    fn test_encode_single_luminance_pixel() {
        let grid = PixelGrid::new(1, 1, ComponentLayout::L, vec![5]).unwrap();
        let literal = encode(&grid, "px").unwrap();

        assert_eq!(literal.as_str(), "const unsigned char px[] = {\n    5\n};\n");
        assert_eq!(literal.name(), "px");
    }

    #[test]
    fn test_encode_rgb_row() {
        let grid = PixelGrid::new(2, 1, ComponentLayout::Rgb, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let literal = encode(&grid, "row").unwrap();

        assert_eq!(
            literal.as_str(),
            "const unsigned char row[] = {\n    1,   2,   3,\n    4,   5,   6\n};\n"
        );
    }

    #[test]
    fn test_encode_flips_rows() {
        // Column of two pixels: decoder row 0 (top) = 10, row 1 (bottom) = 20
        let grid = PixelGrid::new(1, 2, ComponentLayout::L, vec![10, 20]).unwrap();
        let literal = encode(&grid, "col").unwrap();

        assert_eq!(body(&literal), "   20,\n   10\n");
    }

    #[test]
    fn test_encode_flip_keeps_left_to_right() {
        // 2x2 L: top row (1, 2), bottom row (3, 4)
        let grid = PixelGrid::new(2, 2, ComponentLayout::L, vec![1, 2, 3, 4]).unwrap();
        let literal = encode(&grid, "quad").unwrap();

        assert_eq!(body(&literal), "    3,\n    4,\n    1,\n    2\n");
    }

    #[test]
    fn test_encode_component_order() {
        let grid = PixelGrid::new(1, 1, ComponentLayout::Rgb, vec![10, 20, 30]).unwrap();
        let literal = encode(&grid, "rgb").unwrap();

        assert_eq!(body(&literal), "   10,  20,  30\n");
    }

    #[test]
    fn test_encode_rgba_full_range() {
        let grid = PixelGrid::new(1, 1, ComponentLayout::Rgba, vec![0, 9, 99, 255]).unwrap();
        let literal = encode(&grid, "rgba").unwrap();

        assert_eq!(body(&literal), "    0,   9,  99, 255\n");
    }

    #[test]
    fn test_encode_luminance_alpha() {
        let grid = PixelGrid::new(2, 1, ComponentLayout::La, vec![128, 255, 64, 0]).unwrap();
        let literal = encode(&grid, "la").unwrap();

        assert_eq!(body(&literal), "  128, 255,\n   64,   0\n");
    }

    #[test]
    fn test_encode_declaration_line() {
        let grid = PixelGrid::new(3, 2, ComponentLayout::Rgb, vec![7u8; 18]).unwrap();
        let literal = encode(&grid, "foo").unwrap();

        assert_eq!(literal.as_str().lines().next(), Some("const unsigned char foo[] = {"));
        assert!(literal.as_str().ends_with("\n};\n"));
    }

    #[test]
    fn test_encode_zero_width() {
        let grid = PixelGrid::new(0, 4, ComponentLayout::Rgb, vec![]).unwrap();
        let result = encode(&grid, "empty");

        assert!(matches!(
            result,
            Err(EncodeError::InvalidGrid {
                width: 0,
                height: 4,
                components: 3
            })
        ));
    }

    #[test]
    fn test_encode_zero_height() {
        let grid = PixelGrid::new(4, 0, ComponentLayout::L, vec![]).unwrap();
        assert!(matches!(encode(&grid, "empty"), Err(EncodeError::InvalidGrid { .. })));
    }

    #[test]
    fn test_encode_invalid_name() {
        let grid = PixelGrid::new(1, 1, ComponentLayout::L, vec![0]).unwrap();

        assert!(matches!(
            encode(&grid, ""),
            Err(EncodeError::InvalidName(IdentifierError::Empty))
        ));
        assert!(matches!(
            encode(&grid, "bad-name"),
            Err(EncodeError::InvalidName(IdentifierError::InvalidCharacter { .. }))
        ));
    }

    #[test]
    fn test_encode_grid_checked_before_name() {
        let grid = PixelGrid::new(0, 0, ComponentLayout::L, vec![]).unwrap();
        assert!(matches!(encode(&grid, ""), Err(EncodeError::InvalidGrid { .. })));
    }

    #[test]
    fn test_source_row() {
        assert_eq!(source_row(0, 1), 0);
        assert_eq!(source_row(0, 5), 4);
        assert_eq!(source_row(4, 5), 0);
        assert_eq!(source_row(2, 5), 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn test_source_row_rejects_row_past_height() {
        source_row(3, 3);
    }

    #[test]
    fn test_write_to() {
        let grid = PixelGrid::new(1, 1, ComponentLayout::L, vec![42]).unwrap();
        let literal = encode(&grid, "answer").unwrap();

        let mut sink = Vec::new();
        literal.write_to(&mut sink).unwrap();
        assert_eq!(sink, literal.as_str().as_bytes());
    }

    #[test]
    fn test_display_matches_text() {
        let grid = PixelGrid::new(2, 1, ComponentLayout::L, vec![1, 2]).unwrap();
        let literal = encode(&grid, "pair").unwrap();
        assert_eq!(literal.to_string(), literal.as_str());
    }

    #[test]
    fn test_estimated_len_is_upper_bound() {
        let grid = PixelGrid::new(4, 3, ComponentLayout::Rgba, vec![255u8; 4 * 3 * 4]).unwrap();
        let literal = encode(&grid, "bound").unwrap();
        assert!(estimated_len(&grid, "bound") >= literal.as_str().len());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
