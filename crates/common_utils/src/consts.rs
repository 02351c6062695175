//! Commonly used constants

/// Name under which an executor is registered when the caller does not pick one
pub const DEFAULT_CONFIG_NAME: &str = "default";

/// Prefix of environment variables that override file based settings
pub const ENV_PREFIX: &str = "PAYMENT_SDK";

/// Separator between nested keys of environment variable overrides
pub const ENV_SEPARATOR: &str = "__";

/// Number of leading card digits that stay readable when a card number is masked
pub const CARD_BIN_LENGTH: usize = 6;

/// Number of trailing account digits that stay readable when an account number is masked
pub const ACCOUNT_LAST_DIGITS: usize = 4;
