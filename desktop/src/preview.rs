use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use log::info;
use pixconv_core::Grid;

use crate::error::Result;

/// Packs a pixel into minifb's `0RGB` layout.
pub fn to_0rgb(color: Rgb888) -> u32 {
    (u32::from(color.r()) << 16) | (u32::from(color.g()) << 8) | u32::from(color.b())
}

/// Small assets are hard to see at 1:1, pick the largest scale that stays
/// on a typical screen.
fn scale_for(width: usize, height: usize) -> minifb::Scale {
    match width.max(height) {
        0..=160 => minifb::Scale::X4,
        161..=480 => minifb::Scale::X2,
        _ => minifb::Scale::X1,
    }
}

/// Shows `image` until the window is closed or Escape is pressed.
pub fn show(title: &str, image: &Grid<Rgb888>) -> Result<()> {
    let (width, height) = (image.width(), image.height());
    let buffer: Vec<u32> = image.as_slice().iter().map(|&c| to_0rgb(c)).collect();

    let options = minifb::WindowOptions {
        borderless: false,
        title: true,
        resize: true,
        scale: scale_for(width, height),
        ..minifb::WindowOptions::default()
    };
    let mut window = minifb::Window::new(title, width, height, options)?;
    window.set_target_fps(30);
    info!("Showing {}x{} preview, press Escape to close", width, height);

    while window.is_open() && !window.is_key_down(minifb::Key::Escape) {
        window.update_with_buffer(&buffer, width, height)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_0rgb() {
        assert_eq!(to_0rgb(Rgb888::new(0x12, 0x34, 0x56)), 0x0012_3456);
        assert_eq!(to_0rgb(Rgb888::WHITE), 0x00FF_FFFF);
    }

    #[test]
    fn scale_shrinks_with_size() {
        assert!(matches!(scale_for(128, 32), minifb::Scale::X4));
        assert!(matches!(scale_for(320, 240), minifb::Scale::X2));
        assert!(matches!(scale_for(800, 480), minifb::Scale::X1));
    }
}
