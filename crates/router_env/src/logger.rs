//!
//! Logger of the payment builders.
//!

pub use tracing::{debug, error, info, instrument, trace, warn, Level};

pub mod config;
mod setup;

pub use setup::{setup, TelemetryGuard};
