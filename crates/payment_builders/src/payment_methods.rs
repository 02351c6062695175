//!
//! Payment methods that can be attached to a transaction request.
//!

use std::fmt;

use common_enums::PaymentMethodType;
use common_utils::{
    consts,
    errors::{CustomResult, ValidationError},
    validation,
};
use error_stack::report;
use serde::{Deserialize, Serialize};

/// Capabilities shared by every payment method a builder can carry.
///
/// The builder only stores payment methods behind this trait; gateways downcast through the
/// accessor methods when they need the concrete data.
pub trait PaymentMethod: dyn_clone::DynClone + fmt::Debug + Send + Sync {
    /// Kind of the payment method.
    fn payment_method_type(&self) -> PaymentMethodType;

    /// Whether funds can be taken from this payment method (sale, authorization).
    fn is_chargeable(&self) -> bool {
        false
    }

    /// Whether funds can be returned to this payment method.
    fn is_refundable(&self) -> bool {
        false
    }

    /// Whether a gateway can exchange this payment method for a reusable token.
    fn is_tokenizable(&self) -> bool {
        false
    }

    /// Returns the transaction reference when the payment method points at an earlier
    /// transaction.
    fn as_transaction_reference(&self) -> Option<&TransactionReference> {
        None
    }
}

dyn_clone::clone_trait_object!(PaymentMethod);

/// Card entered manually or read from a card on file.
#[derive(Clone)]
pub struct CreditCardData {
    number: String,
    exp_month: u8,
    exp_year: u16,
    cvn: Option<String>,
    card_holder_name: Option<String>,
}

impl CreditCardData {
    /// Validates the card number and expiry, whitespace in the number is ignored.
    pub fn new(number: &str, exp_month: u8, exp_year: u16) -> CustomResult<Self, ValidationError> {
        let number = validation::validate_card_number(number)?;
        validation::validate_card_expiry(exp_month, exp_year)?;

        Ok(Self {
            number,
            exp_month,
            exp_year,
            cvn: None,
            card_holder_name: None,
        })
    }

    /// Attaches the card verification number; it must hold 3 or 4 digits.
    pub fn with_cvn(mut self, cvn: impl Into<String>) -> CustomResult<Self, ValidationError> {
        let cvn = cvn.into();
        if !(3..=4).contains(&cvn.len()) || !cvn.chars().all(|c| c.is_ascii_digit()) {
            return Err(report!(ValidationError::IncorrectValueProvided { field_name: "cvn" }));
        }
        self.cvn = Some(cvn);
        Ok(self)
    }

    /// Sets the card holder name.
    pub fn with_card_holder_name(mut self, card_holder_name: impl Into<String>) -> Self {
        self.card_holder_name = Some(card_holder_name.into());
        self
    }

    /// Full card number, without whitespace.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Leading six digits identifying the issuer.
    pub fn card_isin(&self) -> String {
        self.number.chars().take(consts::CARD_BIN_LENGTH).collect()
    }

    /// Trailing four digits.
    pub fn last4(&self) -> String {
        let skip = self.number.len().saturating_sub(4);
        self.number.chars().skip(skip).collect()
    }

    /// Expiry month, 1 to 12.
    pub fn exp_month(&self) -> u8 {
        self.exp_month
    }

    /// Four digit expiry year.
    pub fn exp_year(&self) -> u16 {
        self.exp_year
    }

    /// Card verification number, when one was supplied.
    pub fn cvn(&self) -> Option<&str> {
        self.cvn.as_deref()
    }

    /// Card holder name, when one was supplied.
    pub fn card_holder_name(&self) -> Option<&str> {
        self.card_holder_name.as_deref()
    }
}

impl fmt::Debug for CreditCardData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCardData")
            .field(
                "number",
                &validation::mask_after(&self.number, consts::CARD_BIN_LENGTH),
            )
            .field("exp_month", &self.exp_month)
            .field("exp_year", &self.exp_year)
            .field("cvn", &self.cvn.as_ref().map(|_| "***"))
            .field("card_holder_name", &self.card_holder_name)
            .finish()
    }
}

impl PaymentMethod for CreditCardData {
    fn payment_method_type(&self) -> PaymentMethodType {
        PaymentMethodType::Credit
    }

    fn is_chargeable(&self) -> bool {
        true
    }

    fn is_refundable(&self) -> bool {
        true
    }

    fn is_tokenizable(&self) -> bool {
        true
    }
}

/// Token issued by a gateway in place of stored card data.
#[derive(Clone)]
pub struct TokenData {
    token: String,
    payment_method_type: PaymentMethodType,
}

impl TokenData {
    /// Token standing in for a credit card.
    pub fn new(token: impl Into<String>) -> CustomResult<Self, ValidationError> {
        Self::with_type(token, PaymentMethodType::Credit)
    }

    /// Token standing in for a payment method of the given kind.
    pub fn with_type(
        token: impl Into<String>,
        payment_method_type: PaymentMethodType,
    ) -> CustomResult<Self, ValidationError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(report!(ValidationError::MissingRequiredField {
                field_name: "token".to_string()
            }));
        }

        Ok(Self {
            token,
            payment_method_type,
        })
    }

    /// The stored token.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for TokenData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenData")
            .field(
                "token",
                &validation::mask_before_last(&self.token, consts::ACCOUNT_LAST_DIGITS),
            )
            .field("payment_method_type", &self.payment_method_type)
            .finish()
    }
}

impl PaymentMethod for TokenData {
    fn payment_method_type(&self) -> PaymentMethodType {
        self.payment_method_type
    }

    fn is_chargeable(&self) -> bool {
        true
    }

    fn is_refundable(&self) -> bool {
        true
    }
}

/// Kind of bank account debited by an eCheck.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AccountType {
    /// Checking account.
    #[default]
    Checking,
    /// Savings account.
    Savings,
}

/// Bank account debited through the ACH network.
#[derive(Clone)]
pub struct EcheckData {
    routing_number: String,
    account_number: String,
    account_type: AccountType,
    check_holder_name: Option<String>,
}

impl EcheckData {
    /// Validates the routing number checksum and requires a non empty account number.
    pub fn new(
        routing_number: impl Into<String>,
        account_number: impl Into<String>,
        account_type: AccountType,
    ) -> CustomResult<Self, ValidationError> {
        let routing_number = routing_number.into();
        let account_number = account_number.into();

        validation::validate_routing_number(&routing_number)?;
        if account_number.is_empty() {
            return Err(report!(ValidationError::MissingRequiredField {
                field_name: "account_number".to_string()
            }));
        }

        Ok(Self {
            routing_number,
            account_number,
            account_type,
            check_holder_name: None,
        })
    }

    /// Sets the name of the account holder.
    pub fn with_check_holder_name(mut self, check_holder_name: impl Into<String>) -> Self {
        self.check_holder_name = Some(check_holder_name.into());
        self
    }

    /// Nine digit ABA routing number.
    pub fn routing_number(&self) -> &str {
        &self.routing_number
    }

    /// Bank account number.
    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// Checking or savings.
    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    /// Account holder name, when one was supplied.
    pub fn check_holder_name(&self) -> Option<&str> {
        self.check_holder_name.as_deref()
    }
}

impl fmt::Debug for EcheckData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcheckData")
            .field("routing_number", &self.routing_number)
            .field(
                "account_number",
                &validation::mask_before_last(&self.account_number, consts::ACCOUNT_LAST_DIGITS),
            )
            .field("account_type", &self.account_type)
            .field("check_holder_name", &self.check_holder_name)
            .finish()
    }
}

impl PaymentMethod for EcheckData {
    fn payment_method_type(&self) -> PaymentMethodType {
        PaymentMethodType::Ach
    }

    fn is_chargeable(&self) -> bool {
        true
    }

    fn is_refundable(&self) -> bool {
        true
    }
}

/// Points at a transaction processed earlier; used by captures, voids, reversals and edits.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TransactionReference {
    /// Gateway identifier of the referenced transaction.
    pub transaction_id: String,
    /// Authorization code returned for the referenced transaction.
    pub authorization_code: Option<String>,
    /// Kind of payment method used by the referenced transaction.
    pub original_payment_method_type: Option<PaymentMethodType>,
}

impl TransactionReference {
    /// Reference to the transaction with the given gateway identifier.
    pub fn new(transaction_id: impl Into<String>) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            authorization_code: None,
            original_payment_method_type: None,
        }
    }

    /// Sets the authorization code of the referenced transaction.
    pub fn with_authorization_code(mut self, authorization_code: impl Into<String>) -> Self {
        self.authorization_code = Some(authorization_code.into());
        self
    }
}

impl PaymentMethod for TransactionReference {
    fn payment_method_type(&self) -> PaymentMethodType {
        PaymentMethodType::Reference
    }

    fn is_refundable(&self) -> bool {
        true
    }

    fn as_transaction_reference(&self) -> Option<&TransactionReference> {
        Some(self)
    }
}
