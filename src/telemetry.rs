//! Telemetry helpers for dashboards embedding `chart-plan`.
//!
//! The pipeline emits `tracing` events (plan build summaries at `debug`,
//! per-reshape details at `trace`, degraded bindings at `warn`). Installing a
//! subscriber stays the host's decision: call `init_default_tracing` or wire
//! your own subscriber and filters.

/// Filter used when `RUST_LOG` is unset: host crates at `warn`, this crate at `info`.
pub const DEFAULT_FILTER: &str = "warn,chart_plan=info";

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// The filter is read from `RUST_LOG` and falls back to [`DEFAULT_FILTER`].
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
