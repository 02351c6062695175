//! Errors and error specific types for universal use

use common_enums::{TransactionModifier, TransactionType};

/// Custom Result
/// A custom datatype that wraps the error variant <E> into a report, allowing
/// error_stack::Report<E> specific extendability
///
/// Effectively, equivalent to `Result<T, error_stack::Report<E>>`
///
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Validation errors raised while constructing payment method values.
#[allow(missing_docs)] // Only to prevent warnings about struct fields not being documented
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The provided input is missing a required field.
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: String },

    /// An incorrect value was provided for the field specified by `field_name`.
    #[error("Incorrect value provided for field: {field_name}")]
    IncorrectValueProvided { field_name: &'static str },

    /// An invalid input was provided.
    #[error("{message}")]
    InvalidValue { message: String },
}

/// Errors surfaced to the caller when a transaction request is submitted.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransactionError {
    /// Required fields for the transaction type and modifier combination are missing or
    /// hold values the combination does not accept.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// No executor is registered under the requested configuration name.
    #[error("No executor is configured under the name `{config_name}`")]
    Configuration { config_name: String },

    /// The gateway processed the request and rejected it.
    #[error("Gateway rejected the request with code {response_code}: {response_message}")]
    Gateway {
        response_code: String,
        response_message: String,
    },

    /// The executor does not handle this transaction type and modifier.
    #[error("Transaction type `{transaction_type}` with modifier `{modifier}` is not supported")]
    Unsupported {
        transaction_type: TransactionType,
        modifier: TransactionModifier,
    },
}

impl TransactionError {
    /// Shorthand for [`TransactionError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
