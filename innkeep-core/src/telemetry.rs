use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{CoreError, CoreResult};

const DEFAULT_FILTER: &str = "innkeep_core=info,innkeep_catalog=info,innkeep_reservation=info";

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over the built-in filter. Calling this twice returns
/// [`CoreError::Telemetry`] instead of panicking, so tests can call it freely.
pub fn init_tracing() -> CoreResult<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| CoreError::Telemetry(e.to_string()))
}
