//!
//! Fluent builder accumulating the parameters of one transaction request.
//!

use std::collections::HashMap;

use common_enums::{TransactionModifier, TransactionType};
use common_utils::errors::{CustomResult, TransactionError};
use error_stack::report;
use router_env::{instrument, logger};

use crate::{
    payment_methods::PaymentMethod,
    services::ServicesContainer,
    types::Transaction,
    validations::Validations,
};

/// Parameters of a single transaction request.
///
/// A builder describes exactly one request and is owned by the caller assembling it. Setters
/// never fail; required field combinations are checked by [`Validations`] when the request is
/// executed.
#[derive(Clone, Debug)]
pub struct TransactionRequestBuilder {
    transaction_type: TransactionType,
    transaction_modifier: TransactionModifier,
    payment_method: Option<Box<dyn PaymentMethod>>,
    allow_duplicates: Option<bool>,
    supplementary_data: HashMap<String, String>,
    multi_capture: Option<bool>,
    multi_capture_sequence: Option<u32>,
    multi_capture_payment_count: Option<u32>,
}

impl TransactionRequestBuilder {
    /// Creates a builder for `transaction_type`, optionally carrying a payment method.
    pub fn create(
        transaction_type: TransactionType,
        payment_method: Option<Box<dyn PaymentMethod>>,
    ) -> Self {
        Self {
            transaction_type,
            transaction_modifier: TransactionModifier::default(),
            payment_method,
            allow_duplicates: None,
            supplementary_data: HashMap::new(),
            multi_capture: None,
            multi_capture_sequence: None,
            multi_capture_payment_count: None,
        }
    }

    /// Creates a builder for `transaction_type` without a payment method.
    pub fn new(transaction_type: TransactionType) -> Self {
        Self::create(transaction_type, None)
    }

    /// Sets the request transaction type.
    pub fn with_transaction_type(mut self, transaction_type: TransactionType) -> Self {
        self.transaction_type = transaction_type;
        self
    }

    /// Sets the request transaction modifier.
    pub fn with_modifier(mut self, modifier: TransactionModifier) -> Self {
        self.transaction_modifier = modifier;
        self
    }

    /// Sets the payment method, replacing any earlier one.
    pub fn with_payment_method(mut self, payment_method: impl PaymentMethod + 'static) -> Self {
        self.payment_method = Some(Box::new(payment_method));
        self
    }

    /// Asks the executor to skip duplicate transaction detection; the last call wins.
    pub fn with_allow_duplicates(mut self, allow_duplicates: bool) -> Self {
        self.allow_duplicates = Some(allow_duplicates);
        self
    }

    /// Marks the request as part `sequence` of `payment_count` captures against one
    /// authorization.
    pub fn with_multi_capture(mut self, sequence: u32, payment_count: u32) -> Self {
        self.multi_capture = Some(true);
        self.multi_capture_sequence = Some(sequence);
        self.multi_capture_payment_count = Some(payment_count);
        self
    }

    /// Stores one supplementary data pair, overwriting an earlier value for the same key.
    ///
    /// An empty key or the key `"0"` is ignored.
    pub fn with_supplementary_data(
        self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.with_optional_supplementary_data(key, Some(value))
    }

    /// Stores one supplementary data pair when both the key and the value are present.
    ///
    /// An empty key, the key `"0"` or a `None` value leaves the supplementary data untouched.
    pub fn with_optional_supplementary_data<V: Into<String>>(
        mut self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> Self {
        let key = key.into();
        match value {
            Some(value) if !is_blank_key(&key) => {
                self.supplementary_data.insert(key, value.into());
            }
            _ => logger::trace!(%key, "ignoring supplementary data pair without key or value"),
        }
        self
    }

    /// Merges every pair of `supplementary_data`, in iteration order, under the same rules as
    /// [`Self::with_supplementary_data`]. Later pairs win on key collision.
    pub fn with_supplementary_data_map<K, V>(
        self,
        supplementary_data: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.with_optional_supplementary_data_map(
            supplementary_data
                .into_iter()
                .map(|(key, value)| (key, Some(value))),
        )
    }

    /// Merges every pair of `supplementary_data` under the rules of
    /// [`Self::with_optional_supplementary_data`], skipping entries without a value.
    pub fn with_optional_supplementary_data_map<K, V>(
        self,
        supplementary_data: impl IntoIterator<Item = (K, Option<V>)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        supplementary_data
            .into_iter()
            .fold(self, |builder, (key, value)| {
                builder.with_optional_supplementary_data(key, value)
            })
    }

    /// Request transaction type.
    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    /// Request transaction modifier.
    pub fn transaction_modifier(&self) -> TransactionModifier {
        self.transaction_modifier
    }

    /// Request payment method, if any.
    pub fn payment_method(&self) -> Option<&dyn PaymentMethod> {
        self.payment_method.as_deref()
    }

    /// Duplicate check bypass flag, `None` when never set.
    pub fn allow_duplicates(&self) -> Option<bool> {
        self.allow_duplicates
    }

    /// Supplementary data merged so far.
    pub fn supplementary_data(&self) -> &HashMap<String, String> {
        &self.supplementary_data
    }

    /// Multi-capture flag, `None` when never set.
    pub fn multi_capture(&self) -> Option<bool> {
        self.multi_capture
    }

    /// Position of this capture within a multi-capture sequence.
    pub fn multi_capture_sequence(&self) -> Option<u32> {
        self.multi_capture_sequence
    }

    /// Total number of captures in a multi-capture sequence.
    pub fn multi_capture_payment_count(&self) -> Option<u32> {
        self.multi_capture_payment_count
    }

    /// Checks the request against `validations`.
    pub fn validate(&self, validations: &Validations) -> CustomResult<(), TransactionError> {
        validations.validate(self)
    }

    /// Executes the request with the container's default configuration.
    pub fn execute(
        &self,
        services: &ServicesContainer,
    ) -> CustomResult<Transaction, TransactionError> {
        self.execute_with_config(services, services.default_config_name())
    }

    /// Validates the request and hands it to the executor registered under `config_name`.
    ///
    /// Errors from the validations and the executor are returned as they were raised.
    #[instrument(
        skip_all,
        fields(transaction_type = %self.transaction_type, config_name = %config_name)
    )]
    pub fn execute_with_config(
        &self,
        services: &ServicesContainer,
        config_name: &str,
    ) -> CustomResult<Transaction, TransactionError> {
        let executor = services.executor(config_name)?;
        self.validate(services.validations())?;

        if !executor.supports(self.transaction_type, self.transaction_modifier) {
            return Err(report!(TransactionError::Unsupported {
                transaction_type: self.transaction_type,
                modifier: self.transaction_modifier,
            }));
        }

        logger::debug!(
            modifier = %self.transaction_modifier,
            supplementary_keys = self.supplementary_data.len(),
            "executing transaction request"
        );

        let transaction = executor.process(self).inspect_err(|error| {
            logger::warn!(?error, "executor failed to process transaction request");
        })?;

        logger::debug!(
            transaction_id = %transaction.transaction_id,
            response_code = %transaction.response_code,
            "transaction request processed"
        );
        Ok(transaction)
    }
}

/// Keys the gateway treats as absent.
fn is_blank_key(key: &str) -> bool {
    key.is_empty() || key == "0"
}
