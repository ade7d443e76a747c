// Logging setup.
// Installs a tracing subscriber writing to stderr.

use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Result, StoreError};

static INIT: OnceLock<()> = OnceLock::new();

/// Install the global subscriber with the given filter directive.
/// Later calls are no-ops, whatever filter they pass.
pub fn init(filter: &str) -> Result<()> {
    if INIT.get().is_some() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_new(filter).map_err(|e| StoreError::Other(e.to_string()))?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    if let Err(err) = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
    {
        tracing::debug!(%err, "keeping previously installed tracing subscriber");
    }

    let _ = INIT.set(());
    Ok(())
}
