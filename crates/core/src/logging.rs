//! Tracing setup for native hosts
//!
//! Browser builds log through `liveconf-frontend-common` instead.

use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Instrumentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentationConfig {
    /// Service name attached to the startup event
    pub service_name: String,
    /// Log level filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for InstrumentationConfig {
    fn default() -> Self {
        Self {
            service_name: "liveconf".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl From<&crate::ClientSettings> for InstrumentationConfig {
    fn from(settings: &crate::ClientSettings) -> Self {
        Self {
            log_level: settings.log_level.clone(),
            ..Self::default()
        }
    }
}

/// Initialize the global tracing subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed
pub fn init_tracing(config: &InstrumentationConfig) -> CoreResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| CoreError::internal_error(format!("tracing already initialized: {e}")))?;

    tracing::info!(service = %config.service_name, "Tracing initialized");
    Ok(())
}
