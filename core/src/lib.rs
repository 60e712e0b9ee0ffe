/*!
Pixel format conversions for small embedded displays.

- [`bitmap`]: page-addressed 1bpp tables to pixel grids and back
- [`rgb565`]: RGB888 <-> RGB565 quantization
- [`literal`]: C array literals and hex dumps for firmware sources
- [`blob`]: constant-filled binary images

## Usage
```
# use pixconv_core::{bitmap, literal, res::logo, rgb565};
let logo = bitmap::PackedBitmap::new(logo::BYTE_ROWS, logo::COLUMNS, &logo::LOGO)?;
let pixels = bitmap::to_rgb(&bitmap::expand(&logo));
let packed = rgb565::encode_image(&pixels);
let source = literal::serialize_as_array_literal(&packed, literal::DEFAULT_ARRAY_NAME);
assert!(source.starts_with("uint16_t image_array[32][128] = {"));
# Ok::<(), bitmap::BitmapError>(())
```
*/

#![no_std]

pub mod bitmap;
pub mod blob;
pub mod grid;
pub mod literal;
pub mod res;
pub mod rgb565;

extern crate alloc;

pub use bitmap::{BitOrder, BitmapError, PackedBitmap};
pub use grid::Grid;
