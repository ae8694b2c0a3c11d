//! Logging setup utilities for the Yamabiko relay.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Library crates whose logs are enabled alongside the binary's own target.
const WORKSPACE_TARGETS: [&str; 3] = ["yamabiko_server", "yamabiko_client", "yamabiko_shared"];

/// Build the default filter directives used when `RUST_LOG` is not set.
///
/// Binary names may contain `-`, which tracing targets never do, so they are
/// normalised to `_` the same way Cargo does for crate names. A binary that
/// shares its name with a workspace crate is not listed twice.
pub fn default_directives(binary_name: &str, default_log_level: &str) -> String {
    let binary_target = binary_name.replace('-', "_");
    let mut targets: Vec<&str> = WORKSPACE_TARGETS.to_vec();
    if !targets.contains(&binary_target.as_str()) {
        targets.push(&binary_target);
    }

    targets
        .iter()
        .map(|target| format!("{}={}", target, default_log_level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the tracing subscriber with the specified default log level.
///
/// The log level can be overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "yamabiko-server")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use yamabiko_shared::logger::setup_logger;
///
/// setup_logger("yamabiko-server", "debug");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
