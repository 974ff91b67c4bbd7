use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` wins when set, `info` otherwise.
///
/// Fails instead of panicking when a subscriber is already installed, which
/// happens under `test-log` and in embedding applications.
pub fn init_logging() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;
    Ok(())
}
