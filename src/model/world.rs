//! Aggregate of every processed room, written once as `world.json`

use crate::model::room::RoomRecord;
use serde::{Deserialize, Serialize};

/// All rooms of a batch ordered by name
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorldRecord {
    /// Rooms sorted case-insensitively by name
    pub rooms: Vec<RoomRecord>,
}

impl WorldRecord {
    /// Build the world from rooms in processing order
    ///
    /// Sorting is stable, so names differing only in case keep their input order.
    pub fn from_rooms(mut rooms: Vec<RoomRecord>) -> Self {
        rooms.sort_by_cached_key(|room| room.name.to_lowercase());
        Self { rooms }
    }

    /// Room names in output order
    pub fn room_names(&self) -> Vec<&str> {
        self.rooms.iter().map(|room| room.name.as_str()).collect()
    }

    /// Total number of walls across all rooms
    pub fn wall_count(&self) -> usize {
        self.rooms.iter().map(|room| room.walls.len()).sum()
    }
}
