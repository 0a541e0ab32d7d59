use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::room::{Room, RoomNumber};

/// In-memory room registry keyed by room number
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomInventory {
    rooms: BTreeMap<RoomNumber, Room>,
}

impl RoomInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a room. Room numbers are unique.
    pub fn add(&mut self, room: Room) -> Result<(), InventoryError> {
        let number = room.number();
        if self.rooms.contains_key(&number) {
            return Err(InventoryError::DuplicateRoom(number));
        }

        info!(room_number = number, room_type = %room.room_type(), "Room registered");
        self.rooms.insert(number, room);
        Ok(())
    }

    pub fn get(&self, number: RoomNumber) -> Result<&Room, InventoryError> {
        self.rooms.get(&number).ok_or(InventoryError::NotFound(number))
    }

    pub fn get_mut(&mut self, number: RoomNumber) -> Result<&mut Room, InventoryError> {
        self.rooms.get_mut(&number).ok_or(InventoryError::NotFound(number))
    }

    /// Rooms that can currently be booked, lowest number first
    pub fn available(&self) -> Vec<&Room> {
        let rooms: Vec<&Room> = self.rooms.values().filter(|r| r.is_available()).collect();
        debug!(available = rooms.len(), total = self.rooms.len(), "Room search");
        rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InventoryError {
    #[error("Room not found: {0}")]
    NotFound(RoomNumber),

    #[error("Room already registered: {0}")]
    DuplicateRoom(RoomNumber),
}
