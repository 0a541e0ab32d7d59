use chrono::{DateTime, Utc};
use innkeep_catalog::{Room, RoomNumber};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::guest::Guest;

/// Booking status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Confirmed => f.write_str("Confirmed"),
            BookingStatus::Cancelled => f.write_str("Cancelled"),
        }
    }
}

/// A reservation of one room by one guest.
///
/// The booking refers to its guest by id and to its room by number; the
/// entities themselves stay with whoever owns them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    id: Uuid,
    guest_id: Uuid,
    room_number: RoomNumber,
    check_in: String,
    check_out: String,
    status: BookingStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Booking {
    /// Book `room` for `guest`.
    ///
    /// Either all three effects happen (room taken, booking confirmed, booking
    /// appended to the guest's history) or, when the room is already taken,
    /// none of them do and [`BookingError::InvalidState`] is returned.
    pub fn new(
        guest: &mut Guest,
        room: &mut Room,
        check_in: impl Into<String>,
        check_out: impl Into<String>,
    ) -> Result<Self, BookingError> {
        if !room.book() {
            warn!(room_number = room.number(), guest_id = %guest.id(), "Room not available");
            return Err(BookingError::InvalidState("room not available".to_string()));
        }

        let now = Utc::now();
        let booking = Self {
            id: Uuid::new_v4(),
            guest_id: guest.id(),
            room_number: room.number(),
            check_in: check_in.into(),
            check_out: check_out.into(),
            status: BookingStatus::Confirmed,
            created_at: now,
            updated_at: now,
        };
        guest.add_reservation(booking.id);

        debug!(?booking, "Booking confirmed");
        Ok(booking)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn guest_id(&self) -> Uuid {
        self.guest_id
    }

    pub fn room_number(&self) -> RoomNumber {
        self.room_number
    }

    pub fn check_in(&self) -> &str {
        &self.check_in
    }

    pub fn check_out(&self) -> &str {
        &self.check_out
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Transition: Confirmed → Cancelled, reopening the room.
    ///
    /// There is no guard on the current status: cancelling an already
    /// cancelled booking reopens the room again. `room` must be the booked room.
    pub fn cancel(&mut self, room: &mut Room) -> Result<(), BookingError> {
        if room.number() != self.room_number {
            return Err(BookingError::RoomMismatch {
                expected: self.room_number,
                actual: room.number(),
            });
        }

        room.cancel();
        self.status = BookingStatus::Cancelled;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn describe(&self, guest: &Guest, room: &Room) -> String {
        format!(
            "Booking for {} in {} from {} to {}. Status: {}",
            guest, room, self.check_in, self.check_out, self.status
        )
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingError {
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Booking is for room {expected}, got room {actual}")]
    RoomMismatch {
        expected: RoomNumber,
        actual: RoomNumber,
    },
}
