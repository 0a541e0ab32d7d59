use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type RoomNumber = u32;

/// Room categories offered by the hotel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    Single,
    Double,
    Twin,
    Suite,
}

impl RoomType {
    pub fn label(&self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Twin => "Twin",
            RoomType::Suite => "Suite",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RoomType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(RoomType::Single),
            "double" => Ok(RoomType::Double),
            "twin" => Ok(RoomType::Twin),
            "suite" => Ok(RoomType::Suite),
            _ => Err(CatalogError::UnknownRoomType(s.to_string())),
        }
    }
}

/// A bookable hotel room.
///
/// Availability is the only mutable state: it is `false` exactly between a
/// successful [`Room::book`] and the next [`Room::cancel`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    number: RoomNumber,
    room_type: RoomType,
    amenities: Vec<String>,
    price: i64,
    available: bool,
}

impl Room {
    /// New rooms start out available.
    pub fn new<I, S>(number: RoomNumber, room_type: RoomType, amenities: I, price: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            number,
            room_type,
            amenities: amenities.into_iter().map(Into::into).collect(),
            price,
            available: true,
        }
    }

    pub fn number(&self) -> RoomNumber {
        self.number
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn amenities(&self) -> &[String] {
        &self.amenities
    }

    /// Nightly price. Not validated, a negative price is stored as given.
    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Claim the room. Returns `false` without touching anything if it is already taken.
    pub fn book(&mut self) -> bool {
        if !self.available {
            return false;
        }
        self.available = false;
        true
    }

    /// Release the room. Releasing an available room is a no-op.
    pub fn cancel(&mut self) {
        self.available = true;
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room {}: {}, Amenities: {}, Price: ${}, Available: {}",
            self.number,
            self.room_type,
            self.amenities.join(", "),
            self.price,
            self.available
        )
    }
}

/// Catalog-related errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown room type: {0}")]
    UnknownRoomType(String),
}
