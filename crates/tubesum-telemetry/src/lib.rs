//! Logging setup for tubesum
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a `fmt`
//! layer, in either human-readable or JSON form.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tubesum_config::{LogFormat, TelemetryConfig};

/// Resolve the filter: `RUST_LOG` first, then the configured directive, then `default_filter`
fn build_filter(config: &TelemetryConfig, default_filter: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let directive = config.log_filter.as_deref().unwrap_or(default_filter);
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize logging for the process
///
/// Log lines go to stderr so that command output on stdout stays clean.
pub fn init(config: &TelemetryConfig, default_filter: &str) {
    let filter = build_filter(config, default_filter);

    match config.format {
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(std::io::stderr);

            tracing_subscriber::registry().with(filter).with(fmt_layer).init();
        }
        LogFormat::Pretty => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr);

            tracing_subscriber::registry().with(filter).with(fmt_layer).init();
        }
    }
}
