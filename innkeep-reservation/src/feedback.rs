use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::guest::Guest;

/// A guest's review. Not tied to any particular booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feedback {
    guest_id: Uuid,
    rating: i32,
    comment: String,
    submitted_at: DateTime<Utc>,
}

impl Feedback {
    /// `rating` is meant to be out of 5 but is stored as given.
    pub fn new(guest: &Guest, rating: i32, comment: impl Into<String>) -> Self {
        Self {
            guest_id: guest.id(),
            rating,
            comment: comment.into(),
            submitted_at: Utc::now(),
        }
    }

    pub fn guest_id(&self) -> Uuid {
        self.guest_id
    }

    pub fn rating(&self) -> i32 {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    pub fn describe(&self, guest: &Guest) -> String {
        format!("{} rated {}/5: {}", guest, self.rating, self.comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_text() {
        let guest = Guest::new("David Black", "david@example.com", "3333333333");
        let feedback = Feedback::new(&guest, 5, "Amazing stay!");

        assert_eq!(feedback.guest_id(), guest.id());
        assert!(feedback.describe(&guest).contains("Amazing stay!"));
        assert_eq!(
            feedback.describe(&guest),
            "Guest: David Black, Email: david@example.com, Contact: 3333333333, Loyalty Points: 0 rated 5/5: Amazing stay!"
        );
    }

    #[test]
    fn test_out_of_range_rating_is_stored() {
        // Ratings are not range-checked
        let guest = Guest::new("David Black", "david@example.com", "3333333333");
        let feedback = Feedback::new(&guest, 9, "");
        assert_eq!(feedback.rating(), 9);
        assert_eq!(feedback.comment(), "");

        let negative = Feedback::new(&guest, -3, "Cold room");
        assert_eq!(negative.rating(), -3);
        assert!(negative.describe(&guest).ends_with("rated -3/5: Cold room"));
    }
}
