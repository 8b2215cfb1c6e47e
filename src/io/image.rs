//! Room image loading and debug raster rendering

use crate::io::configuration::DEBUG_BACKGROUND;
use crate::io::error::{ExtractionError, Result, WithPath};
use crate::model::wall::WallSegment;
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use std::path::Path;

/// Check whether a path has an extension the decoder can read
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(ImageFormat::from_extension)
        .is_some_and(|format| format.reading_enabled())
}

/// Load a room image as 8-bit RGB, discarding any alpha channel
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_room_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|source| ExtractionError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgb8())
}

/// Draw walls as solid rectangles on a white canvas
///
/// Each rectangle spans `[x, x + length] × [y, y + thickness]` for horizontal
/// walls and `[x, x + thickness] × [y, y + length]` for vertical ones, both
/// ends inclusive, clipped to the canvas.
pub fn render_debug_image(
    walls: &[WallSegment],
    width: u32,
    height: u32,
    color: [u8; 3],
) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(width, height, Rgb(DEBUG_BACKGROUND));

    for wall in walls {
        let (span_x, span_y) = wall.size();
        let rect = Rect::at(wall.start.x as i32, wall.start.y as i32)
            .of_size(span_x as u32 + 1, span_y as u32 + 1);
        draw_filled_rect_mut(&mut canvas, rect, Rgb(color));
    }

    canvas
}

/// Save a debug raster, creating the parent directory if needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_debug_image(image: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    image
        .save(output_path)
        .map_err(|source| ExtractionError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}
