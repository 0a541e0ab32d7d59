use chrono::{DateTime, Utc};
use innkeep_catalog::{RateCard, RoomNumber};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::booking::Booking;

/// Manual charges and discount applied on top of the room charge
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvoiceAdjustments {
    pub extra_charges: i64,
    pub discount: i64,
}

impl InvoiceAdjustments {
    pub fn new(extra_charges: i64, discount: i64) -> Self {
        Self { extra_charges, discount }
    }
}

/// Billing summary for a booking. The total is fixed when the invoice is issued.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    id: Uuid,
    booking_id: Uuid,
    room_number: RoomNumber,
    extra_charges: i64,
    discount: i64,
    total: i64,
    issued_at: DateTime<Utc>,
}

impl Invoice {
    pub fn issue(booking: &Booking, rate_card: &RateCard, adjustments: InvoiceAdjustments) -> Self {
        let room_number = booking.room_number();
        let total = rate_card
            .room_charge(room_number)
            .saturating_add(adjustments.extra_charges)
            .saturating_sub(adjustments.discount);

        Self {
            id: Uuid::new_v4(),
            booking_id: booking.id(),
            room_number,
            extra_charges: adjustments.extra_charges,
            discount: adjustments.discount,
            total,
            issued_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn booking_id(&self) -> Uuid {
        self.booking_id
    }

    pub fn room_number(&self) -> RoomNumber {
        self.room_number
    }

    pub fn extra_charges(&self) -> i64 {
        self.extra_charges
    }

    pub fn discount(&self) -> i64 {
        self.discount
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// `booking_details` is the rendered booking, see [`Booking::describe`].
    pub fn describe(&self, booking_details: &str) -> String {
        format!(
            "Invoice: {}, Extra Charges: ${}, Discount: ${}, Total: ${}",
            booking_details, self.extra_charges, self.discount, self.total
        )
    }
}
