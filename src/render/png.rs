//! PNG output for rendered images.
//!
//! Colours are clamped and quantized here; the grid is flipped so the row
//! nearest `ymin` ends up at the bottom of the file.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::error::{RasterError, Result};

use super::RenderedImage;

/// Convert a rendered image to an 8-bit RGB image buffer.
pub fn to_rgb_image(rendered: &RenderedImage) -> RgbImage {
    let width = rendered.width() as u32;
    let height = rendered.height() as u32;

    let mut img: RgbImage = ImageBuffer::new(width, height);

    for (j, row) in rendered.rows().iter().enumerate() {
        let y = height - 1 - j as u32;
        for (i, color) in row.iter().enumerate() {
            img.put_pixel(i as u32, y, Rgb(color.to_rgb8()));
        }
    }

    img
}

/// Write a rendered image to a PNG file.
pub fn write_png(rendered: &RenderedImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| RasterError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    to_rgb_image(rendered).save(path).map_err(|e| RasterError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
