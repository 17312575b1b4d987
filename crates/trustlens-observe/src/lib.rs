//! Observability setup for the TrustLens assistant.
//!
//! Installs the global `tracing` subscriber used by the `tlens` binary.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, shutdown_tracing, TracingOptions};
