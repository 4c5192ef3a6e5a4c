//! Telemetry helpers for applications embedding `plot-markers`.
//!
//! Marker painters log skipped draws (`debug`, with a `reason` field) and
//! emitted shapes (`trace`) under the `plot_markers::markers::painter`
//! target; renderers log replayed frames under `plot_markers::render`.

/// Environment variable read before `RUST_LOG` by [`init_default_tracing`].
pub const LOG_ENV_VAR: &str = "PLOT_MARKERS_LOG";

/// Filter used when neither [`LOG_ENV_VAR`] nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn,plot_markers=info";

/// Installs a compact `tracing` subscriber when the `telemetry` feature is
/// enabled.
///
/// Returns `false` when the feature is disabled or the host application
/// already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

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
