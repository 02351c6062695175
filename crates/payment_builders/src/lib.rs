#![forbid(unsafe_code)]
#![warn(missing_docs)]

//!
//! Transaction request builders of the payment SDK.
//!
//! A [`TransactionRequestBuilder`] accumulates the parameters of one request through chained
//! setters. Executing it runs the configured [`validations::Validations`] and hands the builder
//! to the [`services::TransactionExecutor`] registered for the chosen configuration.
//!

pub mod payment_methods;
pub mod services;
pub mod settings;
pub mod transaction_builder;
pub mod types;
pub mod validations;

pub use common_enums::{PaymentMethodType, TransactionModifier, TransactionType};
pub use common_utils::errors::{CustomResult, TransactionError};
pub use transaction_builder::TransactionRequestBuilder;
