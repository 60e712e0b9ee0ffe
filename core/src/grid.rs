//! Generic row-major pixel storage shared by the bitmap and RGB565 codecs.

use alloc::vec::Vec;

use embedded_graphics::prelude::{OriginDimensions, Size};

use crate::bitmap::BitmapError;

/// Row-major 2D pixel array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// # Panics
    /// If `width * height` overflows `usize`. Sizes from untrusted input go
    /// through [`Grid::from_vec`] or [`crate::PackedBitmap::new`] instead.
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        let len = width
            .checked_mul(height)
            .expect("grid dimensions overflow usize");
        Self {
            width,
            height,
            data: alloc::vec![fill; len],
        }
    }
}

impl<T> Grid<T> {
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, BitmapError> {
        let expected = width
            .checked_mul(height)
            .ok_or(BitmapError::InvalidDimensions { width, height })?;
        if data.len() != expected {
            return Err(BitmapError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x)
    }

    /// Writes outside the grid are ignored, like the framebuffer's `set_pixel`.
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        if x < self.width && y < self.height {
            self.data[y * self.width + x] = value;
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics, an empty grid simply has no rows
        self.data.chunks(self.width.max(1)).take(self.height)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Element-wise transform keeping the dimensions.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T> OriginDimensions for Grid<T> {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}
