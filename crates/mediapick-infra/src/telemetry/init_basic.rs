use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "mediapick=debug";

/// Install the global fmt subscriber, filtered by `RUST_LOG`.
///
/// `ansi` turns colored output on or off; the CLI disables it when writing
/// to a pipe. Fails if a global subscriber is already installed.
pub fn init_telemetry(ansi: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(ansi)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    tracing::debug!(default_filter = DEFAULT_FILTER, "Tracing initialized");
    Ok(())
}

pub fn shutdown_telemetry() {
    tracing::debug!("Telemetry shutdown");
}
