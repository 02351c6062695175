//!
//! Required-field checks run against a builder before it is handed to an executor.
//!
//! Rules are declared per set of transaction types, optionally narrowed to one modifier and
//! guarded by a precondition on another field:
//!
//! ```
//! use common_enums::{PaymentMethodType, TransactionType};
//! use payment_builders::validations::{BuilderField, Clause, ValidationRule, Validations};
//!
//! let validations = Validations::empty().rule(
//!     ValidationRule::of([TransactionType::Void])
//!         .check(BuilderField::PaymentMethod, Clause::IsNotNull)
//!         .check(
//!             BuilderField::PaymentMethod,
//!             Clause::IsInstanceOf(PaymentMethodType::Reference),
//!         ),
//! );
//! assert_eq!(validations.rules().len(), 1);
//! ```
//!

use common_enums::{PaymentMethodType, TransactionModifier, TransactionType};
use common_utils::errors::{CustomResult, TransactionError};
use error_stack::report;
use router_env::logger;
use strum::IntoEnumIterator;

use crate::transaction_builder::TransactionRequestBuilder;

/// Builder fields a rule can inspect.
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum BuilderField {
    /// Attached payment method.
    PaymentMethod,
    /// Duplicate check bypass flag.
    AllowDuplicates,
    /// Supplementary key/value data; unset while empty.
    SupplementaryData,
    /// Multi-capture flag.
    MultiCapture,
    /// Position of this capture within a multi-capture sequence.
    MultiCaptureSequence,
    /// Total number of captures in a multi-capture sequence.
    MultiCapturePaymentCount,
}

/// What a rule sees when it reads a [`BuilderField`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldValue {
    /// The field was never set.
    Unset,
    /// A boolean flag.
    Flag(bool),
    /// A payment method of the given kind.
    PaymentMethod(PaymentMethodType),
    /// Any other populated value.
    Present,
}

impl BuilderField {
    /// Reads this field out of `builder`.
    pub fn value_in(self, builder: &TransactionRequestBuilder) -> FieldValue {
        match self {
            Self::PaymentMethod => builder
                .payment_method()
                .map_or(FieldValue::Unset, |payment_method| {
                    FieldValue::PaymentMethod(payment_method.payment_method_type())
                }),
            Self::AllowDuplicates => builder
                .allow_duplicates()
                .map_or(FieldValue::Unset, FieldValue::Flag),
            Self::SupplementaryData => {
                if builder.supplementary_data().is_empty() {
                    FieldValue::Unset
                } else {
                    FieldValue::Present
                }
            }
            Self::MultiCapture => builder
                .multi_capture()
                .map_or(FieldValue::Unset, FieldValue::Flag),
            Self::MultiCaptureSequence => builder
                .multi_capture_sequence()
                .map_or(FieldValue::Unset, |_| FieldValue::Present),
            Self::MultiCapturePaymentCount => builder
                .multi_capture_payment_count()
                .map_or(FieldValue::Unset, |_| FieldValue::Present),
        }
    }
}

/// Condition a field value has to satisfy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Clause {
    /// The field must be set.
    IsNotNull,
    /// The field must not be set.
    IsNull,
    /// The field must be a flag set to `true`.
    IsTrue,
    /// The field must be a flag set to `false`.
    IsFalse,
    /// The field must be a payment method of the given kind.
    IsInstanceOf(PaymentMethodType),
}

impl Clause {
    /// Whether `value` satisfies the clause.
    pub fn holds(self, value: FieldValue) -> bool {
        match (self, value) {
            (Self::IsNotNull, value) => value != FieldValue::Unset,
            (Self::IsNull, value) => value == FieldValue::Unset,
            (Self::IsTrue, FieldValue::Flag(flag)) => flag,
            (Self::IsFalse, FieldValue::Flag(flag)) => !flag,
            (Self::IsInstanceOf(expected), FieldValue::PaymentMethod(actual)) => expected == actual,
            (Self::IsTrue | Self::IsFalse | Self::IsInstanceOf(_), _) => false,
        }
    }

    fn describe(self) -> String {
        match self {
            Self::IsNotNull => "cannot be null".to_string(),
            Self::IsNull => "cannot be set".to_string(),
            Self::IsTrue => "must be true".to_string(),
            Self::IsFalse => "must be false".to_string(),
            Self::IsInstanceOf(payment_method_type) => {
                format!("must be of type {payment_method_type}")
            }
        }
    }
}

/// One declarative rule: for these transaction types (and modifier), when the precondition
/// holds, every check must hold.
#[derive(Clone, Debug)]
pub struct ValidationRule {
    transaction_types: Vec<TransactionType>,
    modifier: Option<TransactionModifier>,
    precondition: Option<(BuilderField, Clause)>,
    checks: Vec<(BuilderField, Clause)>,
}

impl ValidationRule {
    /// Starts a rule applying to the given transaction types.
    pub fn of(transaction_types: impl IntoIterator<Item = TransactionType>) -> Self {
        Self {
            transaction_types: transaction_types.into_iter().collect(),
            modifier: None,
            precondition: None,
            checks: Vec::new(),
        }
    }

    /// Narrows the rule to requests carrying `modifier`.
    pub fn with(mut self, modifier: TransactionModifier) -> Self {
        self.modifier = Some(modifier);
        self
    }

    /// Only enforces the checks when `field` satisfies `clause`.
    pub fn when(mut self, field: BuilderField, clause: Clause) -> Self {
        self.precondition = Some((field, clause));
        self
    }

    /// Adds a check; checks run in the order they were added.
    pub fn check(mut self, field: BuilderField, clause: Clause) -> Self {
        self.checks.push((field, clause));
        self
    }

    /// Whether the rule covers `builder`.
    pub fn applies_to(&self, builder: &TransactionRequestBuilder) -> bool {
        self.transaction_types.contains(&builder.transaction_type())
            && self
                .modifier
                .map_or(true, |modifier| modifier == builder.transaction_modifier())
            && self
                .precondition
                .map_or(true, |(field, clause)| clause.holds(field.value_in(builder)))
    }

    fn enforce(&self, builder: &TransactionRequestBuilder) -> CustomResult<(), TransactionError> {
        for (field, clause) in &self.checks {
            if !clause.holds(field.value_in(builder)) {
                let message = format!(
                    "{field} {} for transaction type `{}` with modifier `{}`",
                    clause.describe(),
                    builder.transaction_type(),
                    builder.transaction_modifier(),
                );
                logger::debug!(%message, "transaction request failed validation");
                return Err(report!(TransactionError::invalid_argument(message)));
            }
        }
        Ok(())
    }
}

/// Ordered set of [`ValidationRule`]s.
#[derive(Clone, Debug)]
pub struct Validations {
    rules: Vec<ValidationRule>,
}

impl Validations {
    /// A rule set that accepts every request.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule.
    pub fn rule(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[ValidationRule] {
        &self.rules
    }

    /// Runs every applicable rule; the first failing check is reported as
    /// [`TransactionError::InvalidArgument`].
    pub fn validate(
        &self,
        builder: &TransactionRequestBuilder,
    ) -> CustomResult<(), TransactionError> {
        self.rules
            .iter()
            .filter(|rule| rule.applies_to(builder))
            .try_for_each(|rule| rule.enforce(builder))
    }
}

impl Default for Validations {
    /// Stock rules every executor relies on.
    fn default() -> Self {
        use TransactionType as T;

        Self::empty()
            .rule(
                ValidationRule::of([
                    T::Auth,
                    T::Sale,
                    T::Refund,
                    T::Verify,
                    T::Balance,
                    T::AddValue,
                    T::Activate,
                    T::Tokenize,
                ])
                .check(BuilderField::PaymentMethod, Clause::IsNotNull),
            )
            .rule(
                ValidationRule::of(T::iter().filter(|t| t.is_follow_up()))
                    .check(BuilderField::PaymentMethod, Clause::IsNotNull)
                    .check(
                        BuilderField::PaymentMethod,
                        Clause::IsInstanceOf(PaymentMethodType::Reference),
                    ),
            )
            .rule(
                ValidationRule::of([T::Capture])
                    .when(BuilderField::MultiCapture, Clause::IsTrue)
                    .check(BuilderField::MultiCaptureSequence, Clause::IsNotNull)
                    .check(BuilderField::MultiCapturePaymentCount, Clause::IsNotNull),
            )
            .rule(
                ValidationRule::of(T::iter().filter(|t| *t != T::Capture))
                    .check(BuilderField::MultiCapture, Clause::IsNull),
            )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn clauses_against_values() {
        assert!(Clause::IsNotNull.holds(FieldValue::Flag(false)));
        assert!(!Clause::IsNotNull.holds(FieldValue::Unset));
        assert!(Clause::IsNull.holds(FieldValue::Unset));
        assert!(Clause::IsTrue.holds(FieldValue::Flag(true)));
        assert!(!Clause::IsTrue.holds(FieldValue::Present));
        assert!(Clause::IsFalse.holds(FieldValue::Flag(false)));
        assert!(Clause::IsInstanceOf(PaymentMethodType::Reference)
            .holds(FieldValue::PaymentMethod(PaymentMethodType::Reference)));
        assert!(!Clause::IsInstanceOf(PaymentMethodType::Reference)
            .holds(FieldValue::PaymentMethod(PaymentMethodType::Credit)));
        assert!(!Clause::IsInstanceOf(PaymentMethodType::Reference).holds(FieldValue::Unset));
    }

    #[test]
    fn modifier_narrows_a_rule() {
        let rule = ValidationRule::of([TransactionType::Sale])
            .with(TransactionModifier::Recurring)
            .check(BuilderField::PaymentMethod, Clause::IsNotNull);

        let plain_sale = TransactionRequestBuilder::new(TransactionType::Sale);
        let recurring_sale = TransactionRequestBuilder::new(TransactionType::Sale)
            .with_modifier(TransactionModifier::Recurring);

        assert!(!rule.applies_to(&plain_sale));
        assert!(rule.applies_to(&recurring_sale));
    }

    #[test]
    fn follow_up_types_need_a_reference() {
        use crate::payment_methods::{CreditCardData, TransactionReference};

        let validations = Validations::default();
        for transaction_type in TransactionType::iter().filter(|t| t.is_follow_up()) {
            let with_card = TransactionRequestBuilder::new(transaction_type)
                .with_payment_method(CreditCardData::new("4111111111111111", 12, 2030).unwrap());
            let with_reference = TransactionRequestBuilder::new(transaction_type)
                .with_payment_method(TransactionReference::new("txn_1"));

            assert!(validations.validate(&with_card).is_err());
            assert!(validations.validate(&with_reference).is_ok());
        }

        let sale = TransactionRequestBuilder::new(TransactionType::Sale)
            .with_payment_method(CreditCardData::new("4111111111111111", 12, 2030).unwrap());
        assert!(validations.validate(&sale).is_ok());
    }

    #[test]
    fn empty_rule_set_accepts_everything() {
        let builder = TransactionRequestBuilder::new(TransactionType::Sale);
        assert!(Validations::empty().validate(&builder).is_ok());
    }

    #[test]
    fn failure_message_names_field_type_and_modifier() {
        let builder = TransactionRequestBuilder::new(TransactionType::Sale);
        let error = Validations::default().validate(&builder).unwrap_err();

        assert_eq!(
            error.current_context(),
            &TransactionError::invalid_argument(
                "payment_method cannot be null for transaction type `sale` with modifier `none`"
            )
        );
    }
}
