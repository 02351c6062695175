//! Transaction classification enums.

/// Category of the financial operation requested from a gateway.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[allow(missing_docs)]
pub enum TransactionType {
    Decline,
    Verify,
    Capture,
    Auth,
    Refund,
    Reversal,
    Sale,
    Edit,
    Void,
    AddValue,
    Balance,
    Activate,
    Alias,
    Replace,
    Reward,
    Deactivate,
    Clear,
    Create,
    Fetch,
    Search,
    Update,
    Tokenize,
    DetokenizeRequest,
    Cashout,
    Payment,
    Reauth,
    Confirm,
}

impl TransactionType {
    /// Follow-up operations act on a previously processed transaction rather than on a
    /// fresh payment method.
    pub fn is_follow_up(self) -> bool {
        matches!(
            self,
            Self::Capture | Self::Void | Self::Reversal | Self::Edit | Self::Reauth
        )
    }
}

/// Secondary classification refining how a gateway treats a [`TransactionType`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[allow(missing_docs)]
pub enum TransactionModifier {
    #[default]
    None,
    Incremental,
    Additional,
    Offline,
    #[serde(rename = "level_ii")]
    #[strum(serialize = "level_ii")]
    LevelII,
    FraudDecline,
    ChipDecline,
    CashBack,
    Voucher,
    #[serde(rename = "secure_3d")]
    #[strum(serialize = "secure_3d")]
    Secure3D,
    HostedRequest,
    Recurring,
    EncryptedMobile,
    AlternativePaymentMethod,
    DecryptedMobile,
}

/// Kind of payment method attached to a request.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentMethodType {
    /// Reference to a transaction processed earlier.
    Reference,
    /// Credit card.
    Credit,
    /// Debit card.
    Debit,
    /// Bank account debited through the ACH network.
    Ach,
    /// Stored value or gift card.
    Gift,
    /// Stored payment method used for recurring billing.
    Recurring,
    /// Electronic benefits card.
    Ewic,
    /// Anything not covered above.
    Other,
}
