//! Guests, bookings and the paperwork that follows them.
//!
//! [`Booking::new`] is where multi-entity rules live: it is the only call that
//! changes a room and a guest together. [`FrontDesk`] keeps the entities in
//! id-keyed maps and wires the calls together for callers that do not want
//! to hold the rooms and guests themselves.

pub mod guest;
pub mod booking;
pub mod invoice;
pub mod payment;
pub mod feedback;
pub mod front_desk;

pub use guest::Guest;
pub use booking::{Booking, BookingError, BookingStatus};
pub use invoice::{Invoice, InvoiceAdjustments};
pub use payment::{Payment, PaymentMethod, PaymentOutcome, PaymentStatus};
pub use feedback::Feedback;
pub use front_desk::{FrontDesk, FrontDeskError, FrontDeskResult};
