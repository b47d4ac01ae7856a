//! Structured logging for `--log`.

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber. `RUST_LOG` overrides the default filter,
/// which shows every policy report.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("charseq=debug,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
