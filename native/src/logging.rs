use tracing_subscriber::EnvFilter;

/// Filter used when neither an explicit filter nor RUST_LOG is given.
const DEFAULT_FILTER: &str = "warn";

fn build_filter(filter: Option<&str>) -> EnvFilter {
    match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Install a stderr tracing subscriber. `filter` uses EnvFilter syntax and
/// defaults to RUST_LOG, then "warn". Returns false if a global subscriber
/// was already set; the existing one is left in place.
pub fn init_logging(filter: Option<&str>) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(filter))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
