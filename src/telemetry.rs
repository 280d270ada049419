//! Telemetry helpers for applications embedding `plot-rs`.
//!
//! Domain rebuilds and viewport lifecycle log at `debug`, per-gesture
//! transform updates at `trace`. Consumers can either call one of the init
//! helpers below or wire their own `tracing` subscriber.

/// Initializes a compact `tracing` subscriber filtered by `RUST_LOG`,
/// falling back to `info`.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_default_filter("info")
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback filter,
/// e.g. `"plot_rs=trace"` to follow every gesture.
#[must_use]
pub fn init_tracing_with_default_filter(default_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_filter;
        false
    }
}
