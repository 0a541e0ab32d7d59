use serde::Deserialize;
use std::env;

use crate::CoreResult;

pub const DEFAULT_RATE_PER_UNIT: i64 = 100;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Settings {
    pub pricing: PricingSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PricingSettings {
    /// Charge per unit of room number used by the placeholder rate card.
    #[serde(default = "default_rate_per_unit")]
    pub rate_per_unit: i64,
}

fn default_rate_per_unit() -> i64 {
    DEFAULT_RATE_PER_UNIT
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            rate_per_unit: DEFAULT_RATE_PER_UNIT,
        }
    }
}

impl Settings {
    /// Load settings from the `config/` directory of the working directory.
    pub fn load() -> CoreResult<Self> {
        Self::load_from("config")
    }

    /// Layers built-in defaults, `{dir}/default`, `{dir}/{RUN_MODE}`,
    /// `{dir}/local` and `INNKEEP__*` environment variables, later sources winning.
    /// Every file is optional.
    pub fn load_from(dir: &str) -> CoreResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .set_default("pricing.rate_per_unit", DEFAULT_RATE_PER_UNIT)?
            .add_source(config::File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            // Eg. `INNKEEP__PRICING__RATE_PER_UNIT=150`
            .add_source(
                config::Environment::with_prefix("INNKEEP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = s.try_deserialize()?;
        tracing::debug!(?settings, "Settings loaded");
        Ok(settings)
    }
}
