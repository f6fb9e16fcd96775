// * Telemetry - JSON Logging
// * Structured logs go to stderr so stdout only carries the result line

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// * Default filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Builds a filter from `directives`, falling back to `default_level` when
/// they are absent or unparseable
pub fn filter_for(directives: Option<&str>, default_level: &str) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level))
}

/// Initializes JSON tracing, honouring RUST_LOG
pub fn init_tracing() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    init_tracing_with_filter(filter_for(directives.as_deref(), DEFAULT_LOG_FILTER));
}

fn init_tracing_with_filter(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_target(false).with_writer(std::io::stderr))
        .init();
}
