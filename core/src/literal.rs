//! Source-code and debug text renderings of pixel data.

use alloc::string::String;
use core::fmt::Write;

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

use crate::{bitmap::PackedBitmap, grid::Grid};

pub const DEFAULT_ARRAY_NAME: &str = "image_array";

/// Renders a C `uint16_t name[H][W]` declaration, one `{...}` per row and
/// every value as `0xHHHH`.
pub fn serialize_as_array_literal(image: &Grid<u16>, name: &str) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_array_literal(&mut out, image, name);
    out
}

pub fn write_array_literal(
    out: &mut impl Write,
    image: &Grid<u16>,
    name: &str,
) -> core::fmt::Result {
    writeln!(out, "uint16_t {}[{}][{}] = {{", name, image.height(), image.width())?;
    let last = image.height().saturating_sub(1);
    for (y, row) in image.rows().enumerate() {
        out.write_str("    {")?;
        for (x, value) in row.iter().enumerate() {
            if x != 0 {
                out.write_str(", ")?;
            }
            write!(out, "0x{:04X}", value)?;
        }
        if y != last {
            out.write_str("},\n")?;
        } else {
            out.write_str("}\n")?;
        }
    }
    out.write_str("};\n")
}

/// One line per byte-row, bytes as two lowercase hex digits.
pub fn hex_rows(bitmap: &PackedBitmap) -> String {
    let mut out = String::new();
    for row in 0..bitmap.byte_rows() {
        for (i, byte) in bitmap.byte_row(row).iter().enumerate() {
            if i != 0 {
                out.push(',');
            }
            let _ = write!(out, "{:02x}", byte);
        }
        out.push('\n');
    }
    out
}

/// One line per pixel row, pixels as `rrggbb`.
pub fn rgb_hex_rows(image: &Grid<Rgb888>) -> String {
    let mut out = String::new();
    for row in image.rows() {
        for (i, color) in row.iter().enumerate() {
            if i != 0 {
                out.push(',');
            }
            let _ = write!(out, "{:02x}{:02x}{:02x}", color.r(), color.g(), color.b());
        }
        out.push('\n');
    }
    out
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_literal_layout() {
        let image = Grid::from_vec(2, 2, alloc::vec![0x0000, 0xFFFF, 0x1234, 0xabcd]).unwrap();
        let text = serialize_as_array_literal(&image, DEFAULT_ARRAY_NAME);
        assert_eq!(text, "\
uint16_t image_array[2][2] = {
    {0x0000, 0xFFFF},
    {0x1234, 0xABCD}
};
");
    }

    #[test]
    fn array_literal_pads_to_four_digits() {
        let image = Grid::from_vec(3, 1, alloc::vec![0x1, 0x2A, 0x3B0]).unwrap();
        let text = serialize_as_array_literal(&image, "logo");
        assert_eq!(text, "uint16_t logo[1][3] = {\n    {0x0001, 0x002A, 0x03B0}\n};\n");
    }

    #[test]
    fn array_literal_dimensions_are_height_then_width() {
        let image = Grid::new(5, 3, 0u16);
        let text = serialize_as_array_literal(&image, "img");
        assert!(text.starts_with("uint16_t img[3][5] = {\n"));
        assert_eq!(text.lines().count(), 5);
        assert_eq!(text.matches("0x0000").count(), 15);
    }

    #[test]
    fn byte_rows_as_hex() {
        let data = [0x00, 0x80, 0xC0, 0x0F, 0xFF, 0x03];
        let bitmap = PackedBitmap::new(2, 3, &data).unwrap();
        assert_eq!(hex_rows(&bitmap), "00,80,c0\n0f,ff,03\n");
    }

    #[test]
    fn rgb_rows_as_hex() {
        let image = Grid::from_vec(2, 1, alloc::vec![Rgb888::WHITE, Rgb888::new(1, 2, 171)]).unwrap();
        assert_eq!(rgb_hex_rows(&image), "ffffff,0102ab\n");
    }
}
