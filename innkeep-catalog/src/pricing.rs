use innkeep_core::app_config::{PricingSettings, DEFAULT_RATE_PER_UNIT};
use serde::{Deserialize, Serialize};

use crate::room::RoomNumber;

/// Placeholder tariff used for invoicing.
///
/// The room charge is `room_number * rate_per_unit`. It ignores the room's
/// listed price and the length of stay; it is a stand-in, not real pricing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateCard {
    rate_per_unit: i64,
}

impl RateCard {
    pub fn new(rate_per_unit: i64) -> Self {
        Self { rate_per_unit }
    }

    pub fn from_settings(settings: &PricingSettings) -> Self {
        Self::new(settings.rate_per_unit)
    }

    pub fn rate_per_unit(&self) -> i64 {
        self.rate_per_unit
    }

    /// Base charge for a stay in the given room
    pub fn room_charge(&self, room_number: RoomNumber) -> i64 {
        i64::from(room_number).saturating_mul(self.rate_per_unit)
    }
}

impl Default for RateCard {
    fn default() -> Self {
        Self::new(DEFAULT_RATE_PER_UNIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_formula() {
        let card = RateCard::default();
        assert_eq!(card.rate_per_unit(), 100);
        assert_eq!(card.room_charge(104), 10_400);
    }

    #[test]
    fn test_extreme_rate_saturates() {
        assert_eq!(RateCard::new(i64::MAX).room_charge(104), i64::MAX);
        assert_eq!(RateCard::new(i64::MIN).room_charge(2), i64::MIN);
    }

    #[test]
    fn test_rate_from_settings() {
        let card = RateCard::from_settings(&PricingSettings { rate_per_unit: 75 });
        assert_eq!(card.room_charge(2), 150);
    }
}
