use chrono::Utc;
use innkeep_catalog::{InventoryError, RateCard, Room, RoomInventory, RoomNumber};
use innkeep_core::Settings;
use innkeep_shared::models::{
    BookingCancelledEvent, FeedbackSubmittedEvent, InvoiceIssuedEvent, LodgeEvent,
    PaymentProcessedEvent, RoomBookedEvent,
};
use std::collections::HashMap;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::booking::{Booking, BookingError};
use crate::feedback::Feedback;
use crate::guest::Guest;
use crate::invoice::{Invoice, InvoiceAdjustments};
use crate::payment::{Payment, PaymentMethod, PaymentOutcome};

/// Owns the hotel's rooms, guests and paperwork, and resolves ids to the
/// entities each operation needs.
///
/// Every mutating call takes `&mut self`. Share one across tasks behind a
/// mutex; that keeps "one confirmed booking per room" intact.
#[derive(Debug, Default)]
pub struct FrontDesk {
    rate_card: RateCard,
    inventory: RoomInventory,
    guests: HashMap<Uuid, Guest>,
    bookings: HashMap<Uuid, Booking>,
    invoices: HashMap<Uuid, Invoice>,
    payments: HashMap<Uuid, Payment>,
    feedback: Vec<Feedback>,
    journal: Vec<LodgeEvent>,
}

impl FrontDesk {
    pub fn new(rate_card: RateCard) -> Self {
        Self {
            rate_card,
            ..Self::default()
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(RateCard::from_settings(&settings.pricing))
    }

    pub fn rate_card(&self) -> &RateCard {
        &self.rate_card
    }

    pub fn register_room(&mut self, room: Room) -> FrontDeskResult<()> {
        Ok(self.inventory.add(room)?)
    }

    /// Register a guest. Guest ids are unique; registering a copy of a known
    /// guest would discard its reservation history, so it is refused.
    pub fn register_guest(&mut self, guest: Guest) -> FrontDeskResult<Uuid> {
        let id = guest.id();
        if self.guests.contains_key(&id) {
            return Err(FrontDeskError::DuplicateGuest(id));
        }

        info!(guest_id = %id, name = guest.name(), "Guest registered");
        self.guests.insert(id, guest);
        Ok(id)
    }

    /// Room search: everything currently bookable, lowest number first
    pub fn available_rooms(&self) -> Vec<&Room> {
        self.inventory.available()
    }

    pub fn room(&self, number: RoomNumber) -> FrontDeskResult<&Room> {
        Ok(self.inventory.get(number)?)
    }

    pub fn guest(&self, guest_id: Uuid) -> FrontDeskResult<&Guest> {
        self.guests.get(&guest_id).ok_or(FrontDeskError::GuestNotFound(guest_id))
    }

    pub fn booking(&self, booking_id: Uuid) -> FrontDeskResult<&Booking> {
        self.bookings.get(&booking_id).ok_or(FrontDeskError::BookingNotFound(booking_id))
    }

    pub fn invoice(&self, invoice_id: Uuid) -> FrontDeskResult<&Invoice> {
        self.invoices.get(&invoice_id).ok_or(FrontDeskError::InvoiceNotFound(invoice_id))
    }

    pub fn payment(&self, payment_id: Uuid) -> FrontDeskResult<&Payment> {
        self.payments.get(&payment_id).ok_or(FrontDeskError::PaymentNotFound(payment_id))
    }

    /// Events recorded so far, oldest first
    pub fn journal(&self) -> &[LodgeEvent] {
        &self.journal
    }

    /// Book a room for a registered guest. See [`Booking::new`] for the
    /// all-or-nothing contract.
    #[instrument(skip(self, check_in, check_out))]
    pub fn book(
        &mut self,
        guest_id: Uuid,
        room_number: RoomNumber,
        check_in: impl Into<String>,
        check_out: impl Into<String>,
    ) -> FrontDeskResult<Uuid> {
        let guest = self
            .guests
            .get_mut(&guest_id)
            .ok_or(FrontDeskError::GuestNotFound(guest_id))?;
        let room = self.inventory.get_mut(room_number)?;

        let booking = Booking::new(guest, room, check_in, check_out)?;
        let booking_id = booking.id();

        self.record(LodgeEvent::RoomBooked(RoomBookedEvent {
            booking_id,
            guest_id,
            room_number,
            check_in: booking.check_in().to_string(),
            check_out: booking.check_out().to_string(),
            occurred_at: booking.created_at(),
        }));
        self.bookings.insert(booking_id, booking);

        info!(%booking_id, "Booking confirmed");
        Ok(booking_id)
    }

    /// Cancel a booking and reopen its room. Repeating the call reopens the
    /// room again, whatever has happened to it since.
    #[instrument(skip(self))]
    pub fn cancel_booking(&mut self, booking_id: Uuid) -> FrontDeskResult<()> {
        let booking = self
            .bookings
            .get_mut(&booking_id)
            .ok_or(FrontDeskError::BookingNotFound(booking_id))?;
        let room_number = booking.room_number();
        let room = self.inventory.get_mut(room_number)?;

        booking.cancel(room)?;

        self.record(LodgeEvent::BookingCancelled(BookingCancelledEvent {
            booking_id,
            room_number,
            occurred_at: Utc::now(),
        }));
        info!(room_number, "Booking cancelled");
        Ok(())
    }

    /// The guest's bookings in the order they were made. A history entry the
    /// desk has no booking for fails with [`FrontDeskError::BookingNotFound`].
    pub fn reservations_of(&self, guest_id: Uuid) -> FrontDeskResult<Vec<&Booking>> {
        let guest = self.guest(guest_id)?;
        guest
            .reservations()
            .iter()
            .map(|id| self.booking(*id))
            .collect()
    }

    pub fn describe_booking(&self, booking_id: Uuid) -> FrontDeskResult<String> {
        let booking = self.booking(booking_id)?;
        let guest = self.guest(booking.guest_id())?;
        let room = self.room(booking.room_number())?;
        Ok(booking.describe(guest, room))
    }

    #[instrument(skip(self))]
    pub fn issue_invoice(
        &mut self,
        booking_id: Uuid,
        adjustments: InvoiceAdjustments,
    ) -> FrontDeskResult<Uuid> {
        let booking = self.booking(booking_id)?;
        let invoice = Invoice::issue(booking, &self.rate_card, adjustments);
        let invoice_id = invoice.id();

        self.record(LodgeEvent::InvoiceIssued(InvoiceIssuedEvent {
            invoice_id,
            booking_id,
            total: invoice.total(),
            occurred_at: invoice.issued_at(),
        }));
        info!(%invoice_id, total = invoice.total(), "Invoice issued");
        self.invoices.insert(invoice_id, invoice);
        Ok(invoice_id)
    }

    pub fn describe_invoice(&self, invoice_id: Uuid) -> FrontDeskResult<String> {
        let invoice = self.invoice(invoice_id)?;
        let booking_details = self.describe_booking(invoice.booking_id())?;
        Ok(invoice.describe(&booking_details))
    }

    pub fn open_payment(
        &mut self,
        invoice_id: Uuid,
        method: impl Into<PaymentMethod>,
    ) -> FrontDeskResult<Uuid> {
        let payment = Payment::new(self.invoice(invoice_id)?, method);
        let payment_id = payment.id();
        debug!(?payment, "Payment opened");
        self.payments.insert(payment_id, payment);
        Ok(payment_id)
    }

    #[instrument(skip(self))]
    pub fn process_payment(&mut self, payment_id: Uuid) -> FrontDeskResult<PaymentOutcome> {
        let payment = self
            .payments
            .get_mut(&payment_id)
            .ok_or(FrontDeskError::PaymentNotFound(payment_id))?;
        let outcome = payment.process();

        let event = PaymentProcessedEvent {
            payment_id,
            invoice_id: payment.invoice_id(),
            method: payment.method().to_string(),
            settled: outcome.is_settled(),
            occurred_at: Utc::now(),
        };
        self.record(LodgeEvent::PaymentProcessed(event));
        Ok(outcome)
    }

    pub fn submit_feedback(
        &mut self,
        guest_id: Uuid,
        rating: i32,
        comment: impl Into<String>,
    ) -> FrontDeskResult<()> {
        let feedback = Feedback::new(self.guest(guest_id)?, rating, comment);

        self.record(LodgeEvent::FeedbackSubmitted(FeedbackSubmittedEvent {
            guest_id,
            rating,
            occurred_at: feedback.submitted_at(),
        }));
        info!(%guest_id, rating, "Feedback submitted");
        self.feedback.push(feedback);
        Ok(())
    }

    pub fn feedback_for(&self, guest_id: Uuid) -> Vec<&Feedback> {
        self.feedback.iter().filter(|f| f.guest_id() == guest_id).collect()
    }

    pub fn describe_feedback(&self, guest_id: Uuid) -> FrontDeskResult<Vec<String>> {
        let guest = self.guest(guest_id)?;
        Ok(self
            .feedback_for(guest_id)
            .into_iter()
            .map(|f| f.describe(guest))
            .collect())
    }

    fn record(&mut self, event: LodgeEvent) {
        debug!(kind = event.kind(), payload = %event.to_json(), "Journal");
        self.journal.push(event);
    }
}

pub type FrontDeskResult<T> = Result<T, FrontDeskError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrontDeskError {
    #[error("Guest not found: {0}")]
    GuestNotFound(Uuid),

    #[error("Guest already registered: {0}")]
    DuplicateGuest(Uuid),

    #[error("Booking not found: {0}")]
    BookingNotFound(Uuid),

    #[error("Invoice not found: {0}")]
    InvoiceNotFound(Uuid),

    #[error("Payment not found: {0}")]
    PaymentNotFound(Uuid),

    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::BookingStatus;
    use crate::payment::PaymentStatus;
    use innkeep_catalog::RoomType;

    fn desk() -> FrontDesk {
        let mut desk = FrontDesk::new(RateCard::default());
        desk.register_room(Room::new(103, RoomType::Suite, ["WiFi", "TV", "Mini-bar", "Balcony"], 200))
            .unwrap();
        desk.register_room(Room::new(104, RoomType::Double, ["WiFi", "TV"], 120))
            .unwrap();
        desk
    }

    #[test]
    fn test_stay_lifecycle() {
        let mut desk = desk();
        let guest_id = desk.register_guest(Guest::new("Bob Brown", "bob@example.com", "5555555555")).unwrap();

        // Book
        let booking_id = desk.book(guest_id, 104, "2025-05-01", "2025-05-03").unwrap();
        assert_eq!(desk.booking(booking_id).unwrap().status(), BookingStatus::Confirmed);
        assert!(!desk.room(104).unwrap().is_available());

        // Invoice
        let invoice_id = desk
            .issue_invoice(booking_id, InvoiceAdjustments::new(50, 10))
            .unwrap();
        assert_eq!(desk.invoice(invoice_id).unwrap().total(), 10_440);
        assert!(desk.describe_invoice(invoice_id).unwrap().contains("Invoice:"));

        // Pay
        let payment_id = desk.open_payment(invoice_id, "Credit Card").unwrap();
        let outcome = desk.process_payment(payment_id).unwrap();
        assert!(outcome.description().contains("successful"));
        assert_eq!(desk.payment(payment_id).unwrap().status(), PaymentStatus::Paid);

        // Cancel
        desk.cancel_booking(booking_id).unwrap();
        assert_eq!(desk.booking(booking_id).unwrap().status(), BookingStatus::Cancelled);
        assert!(desk.room(104).unwrap().is_available());

        let kinds: Vec<&str> = desk.journal().iter().map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            vec!["ROOM_BOOKED", "INVOICE_ISSUED", "PAYMENT_PROCESSED", "BOOKING_CANCELLED"]
        );
    }

    #[test]
    fn test_refused_booking_leaves_no_trace() {
        let mut desk = desk();
        let alice = desk.register_guest(Guest::new("Alice Johnson", "alice@example.com", "1234567890")).unwrap();
        let bob = desk.register_guest(Guest::new("Bob Brown", "bob@example.com", "5555555555")).unwrap();

        desk.book(alice, 103, "2025-04-01", "2025-04-05").unwrap();
        let result = desk.book(bob, 103, "2025-04-02", "2025-04-04");

        assert_eq!(
            result,
            Err(FrontDeskError::Booking(BookingError::InvalidState(
                "room not available".to_string()
            )))
        );
        assert!(desk.reservations_of(bob).unwrap().is_empty());
        assert_eq!(desk.journal().len(), 1);
    }

    #[test]
    fn test_unknown_ids() {
        let mut desk = desk();
        let ghost = Uuid::new_v4();
        let guest_id = desk.register_guest(Guest::new("Alice Johnson", "alice@example.com", "1234567890")).unwrap();

        assert_eq!(desk.book(ghost, 103, "a", "b"), Err(FrontDeskError::GuestNotFound(ghost)));
        assert_eq!(
            desk.book(guest_id, 999, "a", "b"),
            Err(FrontDeskError::Inventory(InventoryError::NotFound(999)))
        );
        assert_eq!(desk.cancel_booking(ghost), Err(FrontDeskError::BookingNotFound(ghost)));
        assert_eq!(
            desk.issue_invoice(ghost, InvoiceAdjustments::default()),
            Err(FrontDeskError::BookingNotFound(ghost))
        );
        assert_eq!(desk.open_payment(ghost, "Credit Card"), Err(FrontDeskError::InvoiceNotFound(ghost)));
        assert_eq!(desk.process_payment(ghost), Err(FrontDeskError::PaymentNotFound(ghost)));
        assert_eq!(desk.submit_feedback(ghost, 5, "?"), Err(FrontDeskError::GuestNotFound(ghost)));

        // Failed lookups must not have claimed room 103
        assert!(desk.room(103).unwrap().is_available());
        assert!(desk.journal().is_empty());
    }

    #[test]
    fn test_duplicate_room_registration() {
        let mut desk = desk();
        let result = desk.register_room(Room::new(103, RoomType::Single, ["TV"], 50));
        assert_eq!(result, Err(FrontDeskError::Inventory(InventoryError::DuplicateRoom(103))));
    }

    #[test]
    fn test_duplicate_guest_registration_keeps_history() {
        let mut desk = desk();
        let guest = Guest::new("Alice Johnson", "alice@example.com", "1234567890");
        let copy = guest.clone();
        let alice = desk.register_guest(guest).unwrap();
        let booking_id = desk.book(alice, 103, "2025-04-01", "2025-04-05").unwrap();

        assert_eq!(desk.register_guest(copy), Err(FrontDeskError::DuplicateGuest(alice)));

        let history: Vec<Uuid> = desk.reservations_of(alice).unwrap().iter().map(|b| b.id()).collect();
        assert_eq!(history, vec![booking_id]);
        assert!(!desk.room(103).unwrap().is_available());
    }

    #[test]
    fn test_history_entry_without_booking_is_reported() {
        let mut desk = desk();
        let mut guest = Guest::new("Alice Johnson", "alice@example.com", "1234567890");
        let stray = Uuid::new_v4();
        guest.add_reservation(stray);
        let alice = desk.register_guest(guest).unwrap();

        assert_eq!(desk.reservations_of(alice), Err(FrontDeskError::BookingNotFound(stray)));
    }

    #[test]
    fn test_feedback_per_guest() {
        let mut desk = desk();
        let david = desk.register_guest(Guest::new("David Black", "david@example.com", "3333333333")).unwrap();
        let alice = desk.register_guest(Guest::new("Alice Johnson", "alice@example.com", "1234567890")).unwrap();

        desk.submit_feedback(david, 5, "Amazing stay!").unwrap();
        desk.submit_feedback(alice, 3, "Noisy corridor").unwrap();
        desk.submit_feedback(david, 4, "Back again").unwrap();
        // Ratings are stored as given, negative ones included
        desk.submit_feedback(alice, -2, "Never again").unwrap();
        assert_eq!(desk.feedback_for(alice)[1].rating(), -2);

        let comments: Vec<&str> = desk.feedback_for(david).iter().map(|f| f.comment()).collect();
        assert_eq!(comments, vec!["Amazing stay!", "Back again"]);

        let text = desk.describe_feedback(david).unwrap();
        assert!(text[0].contains("rated 5/5: Amazing stay!"));
    }

    #[test]
    fn test_rate_card_from_settings() {
        let mut settings = Settings::default();
        settings.pricing.rate_per_unit = 10;
        let desk = FrontDesk::from_settings(&settings);
        assert_eq!(desk.rate_card().room_charge(104), 1_040);
    }
}
