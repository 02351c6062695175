#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

//!
//! Environment of the payment builders: logger and environment awareness.
//!

pub mod env;
pub mod logger;

#[doc(inline)]
pub use logger::*;
pub use tracing;

#[doc(inline)]
pub use self::env::*;
