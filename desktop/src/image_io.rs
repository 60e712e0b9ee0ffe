use std::path::Path;

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use image::{ImageError, RgbImage};
use log::{info, trace};
use pixconv_core::Grid;

use crate::error::{Result, ToolError};

/// Decodes any supported image file into 8-bit RGB without colour management.
pub fn load_rgb(path: &Path) -> Result<Grid<Rgb888>> {
    if !path.exists() {
        return Err(ToolError::FileNotFound(path.to_path_buf()));
    }
    let image = image::open(path)?.into_rgb8();
    info!("Image size: {}x{}", image.width(), image.height());
    Ok(from_rgb_image(&image))
}

pub fn from_rgb_image(image: &RgbImage) -> Grid<Rgb888> {
    let mut grid = Grid::new(image.width() as usize, image.height() as usize, Rgb888::BLACK);
    for (x, y, pixel) in image.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        trace!("Pixel ({}, {}): ({}, {}, {})", x, y, r, g, b);
        grid.set(x as usize, y as usize, Rgb888::new(r, g, b));
    }
    grid
}

pub fn to_rgb_bytes(grid: &Grid<Rgb888>) -> Vec<u8> {
    grid.as_slice()
        .iter()
        .flat_map(|color| [color.r(), color.g(), color.b()])
        .collect()
}

/// Saves `grid`, the format follows the file extension.
pub fn save_rgb(grid: &Grid<Rgb888>, path: &Path) -> Result<()> {
    let bytes = to_rgb_bytes(grid);
    image::save_buffer(
        path,
        &bytes,
        grid.width() as u32,
        grid.height() as u32,
        image::ColorType::Rgb8,
    )
    .map_err(|err| match err {
        ImageError::IoError(io) => ToolError::WriteFailure(path.to_path_buf(), io.kind()),
        other => ToolError::Image(other),
    })?;
    info!("Saved {}x{} image to {}", grid.width(), grid.height(), path.display());
    Ok(())
}
