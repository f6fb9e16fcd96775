// * Operations: logging infrastructure for the capture binary

pub mod telemetry;

// * Re-exports for convenient access
pub use telemetry::init_tracing;
