use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Honors `RUST_LOG`; defaults to warnings only so interactive and
/// `--json` output stays clean. Events go to stderr, never stdout.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
