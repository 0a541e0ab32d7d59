//! Types shared across the innkeep crates: journal events and PII wrappers.

pub mod models;
pub mod pii;

pub use models::LodgeEvent;
pub use pii::Masked;
