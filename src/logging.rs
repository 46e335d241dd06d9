use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `RUST_LOG` overrides the default of
/// warnings from this crate only; stdout stays reserved for the report.
pub fn enable_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}=warn", env!("CARGO_CRATE_NAME"))));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: logging disabled ({})", e);
    }
}
