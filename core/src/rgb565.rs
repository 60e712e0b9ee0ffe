//! RGB888 <-> RGB565 quantization.
//!
//! Layout of a packed value: bits 15-11 red, 10-5 green, 4-0 blue.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use log::debug;

use crate::grid::Grid;

const RED_MASK: u16 = 0x1F;
const GREEN_MASK: u16 = 0x3F;
const BLUE_MASK: u16 = 0x1F;

#[inline(always)]
fn clamp_channel(value: i32) -> u16 {
    value.clamp(0, 255) as u16
}

/// Packs one colour. Channels outside `0..=255` are clamped, not rejected.
#[inline(always)]
pub fn encode(r: i32, g: i32, b: i32) -> u16 {
    let r5 = (clamp_channel(r) >> 3) & RED_MASK;
    let g6 = (clamp_channel(g) >> 2) & GREEN_MASK;
    let b5 = (clamp_channel(b) >> 3) & BLUE_MASK;
    (r5 << 11) | (g6 << 5) | b5
}

#[inline(always)]
pub fn encode_color(color: Rgb888) -> u16 {
    encode(color.r().into(), color.g().into(), color.b().into())
}

/// Unpacks one colour, filling the vacated low bits with the channel's own
/// high bits so that full scale maps back to 255.
#[inline(always)]
pub fn decode(value: u16) -> (u8, u8, u8) {
    let r5 = (value >> 11) & RED_MASK;
    let g6 = (value >> 5) & GREEN_MASK;
    let b5 = value & BLUE_MASK;
    // Use high bits for empty low bits
    let r = (r5 << 3) | (r5 >> 2);
    let g = (g6 << 2) | (g6 >> 4);
    let b = (b5 << 3) | (b5 >> 2);
    // 5 and 6 bit inputs replicate to at most 0xFF
    debug_assert!(r <= 0xFF && g <= 0xFF && b <= 0xFF);
    (r as u8, g as u8, b as u8)
}

#[inline(always)]
pub fn decode_color(value: u16) -> Rgb888 {
    let (r, g, b) = decode(value);
    Rgb888::new(r, g, b)
}

pub fn encode_image(image: &Grid<Rgb888>) -> Grid<u16> {
    debug!("Encoding {}x{} image to RGB565", image.width(), image.height());
    image.map(|&color| encode_color(color))
}

pub fn decode_image(image: &Grid<u16>) -> Grid<Rgb888> {
    debug!("Decoding {}x{} RGB565 image", image.width(), image.height());
    image.map(|&value| decode_color(value))
}
