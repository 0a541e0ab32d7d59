use innkeep_shared::Masked;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A hotel guest and their reservation history.
///
/// Email and contact number are wrapped in [`Masked`] so `?guest` in a log
/// line never prints them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    id: Uuid,
    name: String,
    email: Masked<String>,
    contact: Masked<String>,
    loyalty_points: u32,
    reservations: Vec<Uuid>,
}

impl Guest {
    pub fn new(name: impl Into<String>, email: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: Masked::new(email.into()),
            contact: Masked::new(contact.into()),
            loyalty_points: 0,
            reservations: Vec::new(),
        }
    }

    pub fn with_loyalty_points(mut self, points: u32) -> Self {
        self.loyalty_points = points;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        self.email.expose()
    }

    pub fn contact(&self) -> &str {
        self.contact.expose()
    }

    pub fn loyalty_points(&self) -> u32 {
        self.loyalty_points
    }

    /// Append a booking to the history. No dedup, and the caller vouches
    /// that the booking belongs to this guest.
    pub fn add_reservation(&mut self, booking_id: Uuid) {
        self.reservations.push(booking_id);
    }

    /// Booking ids in the order they were made
    pub fn reservations(&self) -> &[Uuid] {
        &self.reservations
    }
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Guest: {}, Email: {}, Contact: {}, Loyalty Points: {}",
            self.name,
            self.email.expose(),
            self.contact.expose(),
            self.loyalty_points
        )
    }
}
