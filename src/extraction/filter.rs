use crate::model::wall::WallSegment;

/// Drop walls too short or too thin to be structural
///
/// Keeps walls with `length >= min_length` and `thickness >= min_thickness`,
/// preserving input order.
pub fn filter_walls(
    walls: Vec<WallSegment>,
    min_length: usize,
    min_thickness: usize,
) -> Vec<WallSegment> {
    walls
        .into_iter()
        .filter(|wall| wall.length >= min_length && wall.thickness >= min_thickness)
        .collect()
}
