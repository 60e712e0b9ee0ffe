//! Page-addressed monochrome bitmaps.
//!
//! Each byte covers one column of an 8-row band, the layout used by SSD1306
//! style OLED controllers and most small-display font tables. A block of
//! `byte_rows` x `columns` bytes expands to `byte_rows * 8` x `columns` pixels.

use alloc::vec::Vec;

use embedded_graphics::pixelcolor::{BinaryColor, Rgb888, RgbColor};
use log::debug;

use crate::grid::Grid;

/// Rows per packed byte.
pub const BAND_HEIGHT: usize = 8;

/// Which bit of a byte lands on the top row of its band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitOrder {
    /// Bit 0 is the topmost row.
    #[default]
    LsbTop,
    /// Bit 7 is the topmost row.
    MsbTop,
}

impl BitOrder {
    /// Row offset inside the band for `bit`.
    fn row_of(self, bit: usize) -> usize {
        match self {
            BitOrder::LsbTop => bit,
            BitOrder::MsbTop => BAND_HEIGHT - 1 - bit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitmapError {
    ShapeMismatch { expected: usize, actual: usize },
    /// A zero dimension, or a pixel count that does not fit in `usize`.
    InvalidDimensions { width: usize, height: usize },
}

impl core::fmt::Display for BitmapError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitmapError::ShapeMismatch { expected, actual } => {
                write!(f, "shape mismatch: expected {expected} values, got {actual}")
            }
            BitmapError::InvalidDimensions { width, height } => {
                write!(f, "invalid dimensions {width}x{height}")
            }
        }
    }
}

impl core::error::Error for BitmapError {}

type Result<T> = core::result::Result<T, BitmapError>;

#[derive(Debug, Clone, Copy)]
pub struct PackedBitmap<'a> {
    byte_rows: usize,
    columns: usize,
    data: &'a [u8],
    bit_order: BitOrder,
}

impl<'a> PackedBitmap<'a> {
    /// Both dimensions must be non-zero and the expanded pixel count must
    /// fit in `usize`.
    pub fn new(byte_rows: usize, columns: usize, data: &'a [u8]) -> Result<Self> {
        let invalid = BitmapError::InvalidDimensions {
            width: columns,
            height: byte_rows,
        };
        if byte_rows == 0 || columns == 0 {
            return Err(invalid);
        }
        let expected = byte_rows.checked_mul(columns).ok_or(invalid)?;
        // expand allocates 8 pixels per byte
        expected.checked_mul(BAND_HEIGHT).ok_or(invalid)?;
        if data.len() != expected {
            return Err(BitmapError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            byte_rows,
            columns,
            data,
            bit_order: BitOrder::default(),
        })
    }

    pub fn with_bit_order(mut self, bit_order: BitOrder) -> Self {
        self.bit_order = bit_order;
        self
    }

    pub fn byte_rows(&self) -> usize {
        self.byte_rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn bit_order(&self) -> BitOrder {
        self.bit_order
    }

    /// Bytes of one byte-row.
    pub fn byte_row(&self, row: usize) -> &'a [u8] {
        &self.data[row * self.columns..(row + 1) * self.columns]
    }

    pub fn pixel_height(&self) -> usize {
        // bounded by the check in new
        self.byte_rows * BAND_HEIGHT
    }
}

/// Expands every bit into one pixel, set bits become [`BinaryColor::On`] (white).
pub fn expand(bitmap: &PackedBitmap) -> Grid<BinaryColor> {
    let mut grid = Grid::new(bitmap.columns, bitmap.pixel_height(), BinaryColor::Off);
    for y in 0..bitmap.byte_rows {
        for (x, &byte) in bitmap.byte_row(y).iter().enumerate() {
            for bit in 0..BAND_HEIGHT {
                let row = y * BAND_HEIGHT + bitmap.bit_order.row_of(bit);
                if (byte >> bit) & 1 == 1 {
                    grid.set(x, row, BinaryColor::On);
                }
            }
        }
    }
    debug!(
        "Expanded {}x{} bytes into {}x{} pixels ({:?})",
        bitmap.byte_rows,
        bitmap.columns,
        grid.width(),
        grid.height(),
        bitmap.bit_order
    );
    grid
}

/// Inverse of [`expand`]. The grid height must be a whole number of bands.
pub fn pack(grid: &Grid<BinaryColor>, bit_order: BitOrder) -> Result<Vec<u8>> {
    if grid.height() % BAND_HEIGHT != 0 {
        return Err(BitmapError::ShapeMismatch {
            expected: grid.height().next_multiple_of(BAND_HEIGHT),
            actual: grid.height(),
        });
    }
    let byte_rows = grid.height() / BAND_HEIGHT;
    let mut data = alloc::vec![0u8; byte_rows * grid.width()];
    for y in 0..byte_rows {
        for x in 0..grid.width() {
            let mut byte = 0u8;
            for bit in 0..BAND_HEIGHT {
                let row = y * BAND_HEIGHT + bit_order.row_of(bit);
                if grid.get(x, row) == Some(&BinaryColor::On) {
                    byte |= 1 << bit;
                }
            }
            data[y * grid.width() + x] = byte;
        }
    }
    Ok(data)
}

/// Renders white/black pixels as full-intensity RGB.
pub fn to_rgb(grid: &Grid<BinaryColor>) -> Grid<Rgb888> {
    grid.map(|pixel| match pixel {
        BinaryColor::On => Rgb888::WHITE,
        BinaryColor::Off => Rgb888::BLACK,
    })
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::res::logo;

    fn column(grid: &Grid<BinaryColor>, x: usize) -> Vec<BinaryColor> {
        (0..grid.height()).map(|y| *grid.get(x, y).unwrap()).collect()
    }

    #[test]
    fn lsb_maps_to_top_row() {
        let data = [0b0000_0001];
        let bitmap = PackedBitmap::new(1, 1, &data).unwrap();
        let grid = expand(&bitmap);
        assert_eq!(grid.get(0, 0), Some(&BinaryColor::On));
        for y in 1..8 {
            assert_eq!(grid.get(0, y), Some(&BinaryColor::Off), "row {y}");
        }
    }

    #[test]
    fn msb_top_mirrors_each_band() {
        let data = [0b0000_0001];
        let bitmap = PackedBitmap::new(1, 1, &data).unwrap().with_bit_order(BitOrder::MsbTop);
        let grid = expand(&bitmap);
        assert_eq!(grid.get(0, 7), Some(&BinaryColor::On));
        assert_eq!(column(&grid, 0).iter().filter(|&&p| p == BinaryColor::On).count(), 1);
    }

    #[test]
    fn full_and_empty_bytes() {
        let data = [0xFF, 0x00];
        let bitmap = PackedBitmap::new(1, 2, &data).unwrap();
        let grid = expand(&bitmap);
        assert_eq!(column(&grid, 0), [BinaryColor::On; 8]);
        assert_eq!(column(&grid, 1), [BinaryColor::Off; 8]);
    }

    #[test]
    fn second_band_starts_at_row_eight() {
        // column 0: band 0 empty, band 1 has bit 2 set
        let data = [0x00, 0x00, 0b0000_0100, 0x00];
        let bitmap = PackedBitmap::new(2, 2, &data).unwrap();
        let grid = expand(&bitmap);
        let lit: Vec<usize> = column(&grid, 0)
            .iter()
            .enumerate()
            .filter(|(_, p)| **p == BinaryColor::On)
            .map(|(y, _)| y)
            .collect();
        assert_eq!(lit, [10]);
        assert!(column(&grid, 1).iter().all(|&p| p == BinaryColor::Off));
    }

    #[test]
    fn expanded_shape() {
        for rows in 1..5 {
            for columns in 1..9 {
                let data = alloc::vec![0xA5u8; rows * columns];
                let grid = expand(&PackedBitmap::new(rows, columns, &data).unwrap());
                assert_eq!((grid.width(), grid.height()), (columns, rows * 8));
            }
        }
    }

    #[test]
    fn rejects_wrong_length() {
        let data = [0u8; 5];
        let err = PackedBitmap::new(2, 3, &data).unwrap_err();
        assert_eq!(err, BitmapError::ShapeMismatch { expected: 6, actual: 5 });
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(PackedBitmap::new(0, 4, &[]).unwrap_err(), BitmapError::InvalidDimensions { width: 4, height: 0 });
        assert_eq!(PackedBitmap::new(4, 0, &[]).unwrap_err(), BitmapError::InvalidDimensions { width: 0, height: 4 });
    }

    #[test]
    fn rejects_overflowing_dimensions() {
        // byte_rows * columns wraps to 0 without a checked multiply
        assert!(PackedBitmap::new(usize::MAX / 2 + 1, 2, &[]).is_err());
        // byte count fits, pixel count does not
        assert_eq!(
            PackedBitmap::new(usize::MAX / 4, 1, &[]).unwrap_err(),
            BitmapError::InvalidDimensions { width: 1, height: usize::MAX / 4 }
        );
    }

    #[test]
    fn bit_order_defaults_to_lsb_top() {
        let data = [0u8; 2];
        let bitmap = PackedBitmap::new(1, 2, &data).unwrap();
        assert_eq!(bitmap.bit_order(), BitOrder::LsbTop);
        assert_eq!(bitmap.with_bit_order(BitOrder::MsbTop).bit_order(), BitOrder::MsbTop);
    }

    #[test]
    fn pack_inverts_expand() {
        let bitmap = PackedBitmap::new(logo::BYTE_ROWS, logo::COLUMNS, &logo::LOGO).unwrap();
        for order in [BitOrder::LsbTop, BitOrder::MsbTop] {
            let bitmap = bitmap.with_bit_order(order);
            assert_eq!(pack(&expand(&bitmap), order).unwrap(), logo::LOGO);
        }
    }

    #[test]
    fn pack_requires_whole_bands() {
        let grid = Grid::new(4, 12, BinaryColor::Off);
        assert_eq!(pack(&grid, BitOrder::LsbTop), Err(BitmapError::ShapeMismatch { expected: 16, actual: 12 }));
    }

    #[test]
    fn rgb_rendering() {
        let data = [0b0000_0010];
        let grid = to_rgb(&expand(&PackedBitmap::new(1, 1, &data).unwrap()));
        assert_eq!(grid.get(0, 0), Some(&Rgb888::BLACK));
        assert_eq!(grid.get(0, 1), Some(&Rgb888::new(255, 255, 255)));
    }
}
