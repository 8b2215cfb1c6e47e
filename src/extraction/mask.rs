//! Binary mask of pixels matching the wall color

use image::RgbImage;
use ndarray::Array2;

/// Boolean grid indexed `(row, col)` marking wall-colored pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMask {
    cells: Array2<bool>,
}

impl ColorMask {
    /// Mark every pixel whose channels all lie within `tolerance` of `target`
    ///
    /// The distance is taken per channel, not as a Euclidean norm.
    pub fn from_image(image: &RgbImage, target: [u8; 3], tolerance: u8) -> Self {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let cells = Array2::from_shape_fn((height, width), |(row, col)| {
            let pixel = image.get_pixel(col as u32, row as u32);
            within_tolerance(pixel.0, target, tolerance)
        });
        Self { cells }
    }

    /// Wrap an existing `(row, col)` grid
    pub const fn from_cells(cells: Array2<bool>) -> Self {
        Self { cells }
    }

    /// Mask width in pixels
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Mask height in pixels
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Check a pixel; out-of-range coordinates are never wall
    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        self.cells.get((y, x)).copied().unwrap_or(false)
    }

    /// Number of wall-colored pixels
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// True when no pixel matched the wall color
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&cell| cell)
    }
}

fn within_tolerance(pixel: [u8; 3], target: [u8; 3], tolerance: u8) -> bool {
    pixel
        .iter()
        .zip(target.iter())
        .all(|(&channel, &wanted)| channel.abs_diff(wanted) <= tolerance)
}
