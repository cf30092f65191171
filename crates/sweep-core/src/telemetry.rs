// File: crates/sweep-core/src/telemetry.rs
// Summary: Opt-in tracing setup for the sweep binaries (feature `telemetry`).

/// Filter used when `RUST_LOG` is unset: sweep crates at `info`, dependencies at `warn`.
pub const DEFAULT_FILTER: &str = "warn,sweep_core=info,sweep_demo=info,sweep_window_demo=info";

/// Install a compact fmt subscriber filtered by `RUST_LOG`, or by `DEFAULT_FILTER`.
///
/// `false` when the feature is off or a global subscriber already exists.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback filter.
#[must_use]
pub fn init_tracing(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback))
            .unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}

#[cfg(all(test, feature = "telemetry"))]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
