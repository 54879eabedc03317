//! Telemetry helpers for applications embedding `sparkline-rs`.
//!
//! Chart building logs through `tracing` only. Hosts either call
//! `init_default_tracing` or wire their own subscriber and filters.

/// Environment variable consulted before `RUST_LOG` for the default filter.
pub const LOG_FILTER_ENV: &str = "SPARKLINE_LOG";

/// Installs a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// The filter comes from `SPARKLINE_LOG`, then `RUST_LOG`, then `info`.
/// Returns `false` when the feature is disabled or the host application already
/// installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
