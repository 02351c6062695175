//!
//! Results handed back by executors.
//!

use std::collections::HashMap;

use common_enums::{PaymentMethodType, TransactionType};
use serde::{Deserialize, Serialize};

use crate::payment_methods::TransactionReference;

/// Response code gateways use for an approved request.
pub const APPROVED_RESPONSE_CODE: &str = "00";

/// Outcome of a processed transaction request.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Gateway identifier of the transaction.
    pub transaction_id: String,
    /// Gateway response code, [`APPROVED_RESPONSE_CODE`] when approved.
    pub response_code: String,
    /// Human readable gateway response.
    pub response_message: String,
    /// Authorization code issued for approved charges.
    pub authorization_code: Option<String>,
    /// Type of the request that produced this transaction.
    pub transaction_type: TransactionType,
    /// Kind of payment method the request was made with.
    pub payment_method_type: Option<PaymentMethodType>,
    /// Supplementary data echoed back by the gateway.
    #[serde(default)]
    pub supplementary_data: HashMap<String, String>,
}

impl Transaction {
    /// Whether the gateway approved the request.
    pub fn is_approved(&self) -> bool {
        self.response_code == APPROVED_RESPONSE_CODE
    }

    /// Reference usable as the payment method of a follow-up request (capture, void, refund).
    pub fn reference(&self) -> TransactionReference {
        TransactionReference {
            transaction_id: self.transaction_id.clone(),
            authorization_code: self.authorization_code.clone(),
            original_payment_method_type: self.payment_method_type,
        }
    }
}
