use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Wraps guest contact details so they never leak through `Debug` output.
///
/// `tracing` fields recorded with `?guest` go through `Debug`, which prints a
/// fixed placeholder. Serialization keeps the real value because the record
/// itself still has to round-trip.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Masked<T>(pub T);

const PLACEHOLDER: &str = "********";

impl<T> Masked<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the underlying value for display surfaces that are allowed to show it.
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PLACEHOLDER)
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl From<String> for Masked<String> {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Masked<String> {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_value() {
        let email = Masked::from("alice@example.com");
        assert_eq!(format!("{:?}", email), "********");
        assert_eq!(email.expose(), "alice@example.com");
    }

    #[test]
    fn test_serializes_real_value() {
        let contact = Masked::from("1234567890");
        let json = serde_json::to_string(&contact).unwrap();
        assert_eq!(json, "\"1234567890\"");

        let back: Masked<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.into_inner(), "1234567890");
    }
}
