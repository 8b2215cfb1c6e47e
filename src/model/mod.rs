//! Room, world and wall data shapes
//!
//! This module contains the serializable records produced by extraction:
//! - Wall rectangles and their JSON wire format
//! - Per-room records
//! - The sorted world aggregate

/// Per-room record and classification
pub mod room;
/// Wall rectangles, orientations and coordinates
pub mod wall;
/// Aggregate of all rooms in a batch
pub mod world;

pub use room::{RoomRecord, RoomType};
pub use wall::{Orientation, Point, WallSegment};
pub use world::WorldRecord;
