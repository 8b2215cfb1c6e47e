//! Pure per-room pipeline from pixels to a room record
//!
//! Nothing here touches the filesystem; callers load the image and persist the
//! result.

use crate::extraction::filter::filter_walls;
use crate::extraction::mask::ColorMask;
use crate::extraction::merger::merge_segments;
use crate::extraction::scanner::scan_mask;
use crate::io::configuration::ExtractionConfig;
use crate::model::room::RoomRecord;
use crate::model::wall::WallSegment;
use image::RgbImage;
use log::debug;

/// Walls found in one image plus counts from each stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallExtraction {
    /// Wall-colored pixels in the mask
    pub mask_pixels: usize,
    /// Runs emitted by both scan passes
    pub raw_segments: usize,
    /// Rectangles left after merging
    pub merged_segments: usize,
    /// Rectangles surviving the size filter
    pub walls: Vec<WallSegment>,
}

/// Run mask, scan, merge and filter over an image
pub fn extract_walls(image: &RgbImage, config: &ExtractionConfig) -> WallExtraction {
    let mask = ColorMask::from_image(image, config.target_color, config.tolerance);
    let mask_pixels = mask.count();

    let segments = scan_mask(&mask, config.claim_policy);
    let raw_segments = segments.len();

    let merged = merge_segments(segments);
    let merged_segments = merged.len();

    let walls = filter_walls(merged, config.min_wall_length, config.min_wall_thickness);

    WallExtraction {
        mask_pixels,
        raw_segments,
        merged_segments,
        walls,
    }
}

/// Build the record for one room image
///
/// An image without wall-colored pixels yields a room with no walls.
pub fn build_room(room_id: &str, image: &RgbImage, config: &ExtractionConfig) -> RoomRecord {
    let extraction = extract_walls(image, config);

    if extraction.mask_pixels == 0 {
        debug!("{room_id}: no pixels match the wall color");
    } else {
        debug!(
            "{room_id}: {} mask pixels, {} runs, {} merged, {} walls kept",
            extraction.mask_pixels,
            extraction.raw_segments,
            extraction.merged_segments,
            extraction.walls.len()
        );
    }

    RoomRecord::new(
        room_id,
        image.width() as usize,
        image.height() as usize,
        extraction.walls,
    )
}
