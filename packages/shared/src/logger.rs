//! Logging setup utilities for DrawTogether binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// Sets up logging for the DrawTogether crates and the binary itself.
/// The log level can be overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "drawtogether-server")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use drawtogether_shared::logger::setup_logger;
///
/// setup_logger("drawtogether-server", "debug");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the fallback filter directive used when `RUST_LOG` is not set.
///
/// Binary names use `-` while tracing targets use `_`, so both the library
/// crates and the binary target are listed.
fn default_filter(binary_name: &str, default_log_level: &str) -> String {
    let binary_target = binary_name.replace('-', "_");
    format!(
        "drawtogether_shared={level},drawtogether_server={level},drawtogether_client={level},{binary}={level},tower_http={level}",
        level = default_log_level,
        binary = binary_target,
    )
}
