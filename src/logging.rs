use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so the scrapers' inherited stdout stays clean.
/// Verbosity follows `RUST_LOG`, defaulting to warnings only.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
