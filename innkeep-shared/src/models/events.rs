use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct RoomBookedEvent {
    pub booking_id: Uuid,
    pub guest_id: Uuid,
    pub room_number: u32,
    pub check_in: String,
    pub check_out: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct BookingCancelledEvent {
    pub booking_id: Uuid,
    pub room_number: u32,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct InvoiceIssuedEvent {
    pub invoice_id: Uuid,
    pub booking_id: Uuid,
    pub total: i64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct PaymentProcessedEvent {
    pub payment_id: Uuid,
    pub invoice_id: Uuid,
    pub method: String,
    pub settled: bool,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct FeedbackSubmittedEvent {
    pub guest_id: Uuid,
    pub rating: i32,
    pub occurred_at: DateTime<Utc>,
}

/// Everything the front desk records in its journal, in the order it happened.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LodgeEvent {
    RoomBooked(RoomBookedEvent),
    BookingCancelled(BookingCancelledEvent),
    InvoiceIssued(InvoiceIssuedEvent),
    PaymentProcessed(PaymentProcessedEvent),
    FeedbackSubmitted(FeedbackSubmittedEvent),
}

impl LodgeEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            LodgeEvent::RoomBooked(_) => "ROOM_BOOKED",
            LodgeEvent::BookingCancelled(_) => "BOOKING_CANCELLED",
            LodgeEvent::InvoiceIssued(_) => "INVOICE_ISSUED",
            LodgeEvent::PaymentProcessed(_) => "PAYMENT_PROCESSED",
            LodgeEvent::FeedbackSubmitted(_) => "FEEDBACK_SUBMITTED",
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            LodgeEvent::RoomBooked(e) => e.occurred_at,
            LodgeEvent::BookingCancelled(e) => e.occurred_at,
            LodgeEvent::InvoiceIssued(e) => e.occurred_at,
            LodgeEvent::PaymentProcessed(e) => e.occurred_at,
            LodgeEvent::FeedbackSubmitted(e) => e.occurred_at,
        }
    }

    /// JSON payload as it would be handed to an outbox.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
