//! Built-in 128x32 wordmark in page-addressed layout, bit 0 on top.

pub const BYTE_ROWS: usize = 4;
pub const COLUMNS: usize = 128;

#[rustfmt::skip]
pub static LOGO: [u8; BYTE_ROWS * COLUMNS] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00,
    0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFF, 0xFF, 0xFF, 0x03, 0x83, 0xF3, 0x38,
    0xF3, 0x83, 0x03, 0xFF, 0xFF, 0x7F, 0x03, 0x03, 0x00, 0xC0, 0xF0, 0xF8, 0xB8, 0xBC, 0x9C, 0x9C,
    0x9C, 0x9C, 0xBC, 0xB8, 0xF8, 0xF0, 0xC0, 0x00, 0x00, 0x00, 0x01, 0x01, 0x01, 0x01, 0xFF, 0xFF,
    0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0xF0, 0xF8, 0x78, 0x3C, 0x1C, 0x1C,
    0x1C, 0x1C, 0x3C, 0x78, 0xFC, 0xFC, 0x00, 0x00, 0x00, 0xC0, 0xE0, 0xF0, 0x78, 0x3C, 0x1C, 0x1C,
    0x1C, 0x1C, 0x3C, 0x78, 0xF0, 0xF0, 0xC0, 0x00, 0x1C, 0xFC, 0xFC, 0xFC, 0x38, 0x1C, 0x1C, 0xFC,
    0xF8, 0xF8, 0x3C, 0x1C, 0x1C, 0xFC, 0xF8, 0xF0, 0x00, 0xC0, 0xF0, 0xF8, 0xB8, 0xBC, 0x9C, 0x9C,
    0x9C, 0x9C, 0xBC, 0xB8, 0xF8, 0xF0, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0x7F, 0x7C, 0x1F, 0x03, 0x00,
    0x03, 0x1F, 0x7C, 0x7F, 0x7F, 0x00, 0x00, 0x00, 0x00, 0x07, 0x1F, 0x3F, 0x3D, 0x79, 0x71, 0x71,
    0x71, 0x71, 0x71, 0x71, 0x39, 0x39, 0x39, 0x00, 0x00, 0x70, 0x70, 0x70, 0x70, 0x70, 0x7F, 0x7F,
    0x7F, 0x70, 0x70, 0x70, 0x70, 0x70, 0x00, 0x00, 0x00, 0x07, 0x1F, 0x3F, 0x38, 0x78, 0x70, 0x70,
    0x70, 0x70, 0x70, 0x70, 0x38, 0x38, 0x18, 0x00, 0x00, 0x07, 0x1F, 0x3F, 0x3C, 0x78, 0x70, 0x70,
    0x70, 0x70, 0x78, 0x3C, 0x3F, 0x1F, 0x07, 0x00, 0x70, 0x7F, 0x7F, 0x7F, 0x70, 0x70, 0x00, 0x7F,
    0x7F, 0x7F, 0x70, 0x70, 0x00, 0x7F, 0x7F, 0x7F, 0x00, 0x07, 0x1F, 0x3F, 0x3D, 0x79, 0x71, 0x71,
    0x71, 0x71, 0x71, 0x71, 0x39, 0x39, 0x39, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];
