use tracing_subscriber::EnvFilter;

/// Initializes logging to stderr. Diagnostics never mix with the report,
/// which is the only thing written to stdout.
pub fn init() {
    // Use RUST_LOG if set, otherwise default to INFO
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
