//! Per-room record written as `<room_id>.json`

use crate::model::wall::{Point, WallSegment};
use serde::{Deserialize, Serialize};

/// Substring marking a room id as a corridor
const HALL_MARKER: &str = "hallway";

/// Room classification derived from the room id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    /// Any ordinary room
    Room,
    /// Corridor, detected by `hallway` in the id
    Hall,
}

impl RoomType {
    /// Classify a room id, ignoring case
    pub fn from_room_id(room_id: &str) -> Self {
        if room_id.to_lowercase().contains(HALL_MARKER) {
            Self::Hall
        } else {
            Self::Room
        }
    }
}

/// Structured description of a single room image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    /// Source file name without extension
    pub id: String,
    /// Display name, identical to the id
    pub name: String,
    /// Room classification
    #[serde(rename = "type")]
    pub room_type: RoomType,
    /// Integer midpoint of the source image
    pub center: Point,
    /// Filtered walls in merge order
    pub walls: Vec<WallSegment>,
    /// Door openings; never detected, always empty
    pub doors: Vec<serde_json::Value>,
}

impl RoomRecord {
    /// Assemble a record for an image of the given dimensions
    pub fn new(room_id: &str, width: usize, height: usize, walls: Vec<WallSegment>) -> Self {
        Self {
            id: room_id.to_string(),
            name: room_id.to_string(),
            room_type: RoomType::from_room_id(room_id),
            center: Point::new(width / 2, height / 2),
            walls,
            doors: Vec::new(),
        }
    }
}
