#![forbid(unsafe_code)]
#![warn(missing_docs)]

//!
//! Enumerated tags used to describe a transaction request.
//!

pub mod enums;

pub use enums::*;
