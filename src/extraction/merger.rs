//! Reassembles thick walls from the one-pixel stripes produced by scanning

use crate::model::wall::WallSegment;

/// Merge stacked parallel stripes into thicker rectangles
///
/// Segments are stably sorted by `(orientation, x, y)` and folded in a single
/// pass. Each segment is compared only against the most recently merged wall:
/// if it has the same orientation and length and lies directly against that
/// wall's far side, the wall absorbs its thickness. A matching stripe separated
/// from its partner by any other segment in sort order stays separate.
pub fn merge_segments(mut segments: Vec<WallSegment>) -> Vec<WallSegment> {
    segments.sort_by_key(WallSegment::sort_key);

    let mut merged: Vec<WallSegment> = Vec::with_capacity(segments.len());
    for segment in segments {
        match merged.last_mut() {
            Some(last) if last.is_stacked_by(&segment) => {
                last.thickness += segment.thickness;
            }
            _ => merged.push(segment),
        }
    }

    merged
}
