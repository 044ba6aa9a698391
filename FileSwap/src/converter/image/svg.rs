//! SVG rasterization using resvg

use std::fs;
use std::path::Path;

use image::{DynamicImage, RgbaImage};
use resvg::{tiny_skia, usvg};

use crate::error::{Error, Result};

/// Rasterize an SVG file at its intrinsic size.
///
/// # Errors
/// Returns an error if the file cannot be read or the SVG cannot be parsed.
pub fn rasterize<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let data = fs::read(path)?;
    rasterize_bytes(&data)
}

/// Rasterize SVG bytes at their intrinsic size.
///
/// # Errors
/// Returns [`Error::ImageConversionFailed`] if the SVG is invalid or has no area.
pub fn rasterize_bytes(data: &[u8]) -> Result<DynamicImage> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())
        .map_err(|e| Error::ImageConversionFailed(format!("Failed to parse SVG: {e}")))?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    tracing::debug!("Rasterizing SVG at {width}x{height}");

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::ImageConversionFailed("SVG has zero size".to_string()))?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha
    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    let buffer = RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| Error::ImageConversionFailed("Failed to create image buffer".to_string()))?;

    Ok(DynamicImage::ImageRgba8(buffer))
}
