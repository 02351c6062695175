//! Custom validations for payment method inputs.

use error_stack::report;

use crate::errors::{CustomResult, ValidationError};

/// Normalizes a card number by dropping whitespace and checks it against the Luhn checksum.
///
/// It returns a [ValidationError::InvalidValue] for numbers with non digit characters, an
/// unexpected length or a failing checksum.
pub fn validate_card_number(card_number: &str) -> CustomResult<String, ValidationError> {
    let normalized: String = card_number.split_whitespace().collect();

    if normalized.is_empty() {
        return Err(report!(ValidationError::MissingRequiredField {
            field_name: "card_number".to_string()
        }));
    }

    if !normalized.chars().all(|c| c.is_ascii_digit()) || !(12..=19).contains(&normalized.len())
    {
        return Err(report!(ValidationError::InvalidValue {
            message: "card number must hold 12 to 19 digits".to_string()
        }));
    }

    if luhn::valid(&normalized) {
        Ok(normalized)
    } else {
        Err(report!(ValidationError::InvalidValue {
            message: "not a valid credit card number".to_string()
        }))
    }
}

/// Checks a card expiry month and four digit year.
pub fn validate_card_expiry(month: u8, year: u16) -> CustomResult<(), ValidationError> {
    if !(1..=12).contains(&month) {
        return Err(report!(ValidationError::InvalidValue {
            message: "invalid card expiration month".to_string()
        }));
    }

    if year < 1997 {
        return Err(report!(ValidationError::InvalidValue {
            message: "invalid card expiration year".to_string()
        }));
    }

    Ok(())
}

/// Validates a nine digit ABA routing number, including its weighted checksum.
pub fn validate_routing_number(routing_number: &str) -> CustomResult<(), ValidationError> {
    let digits = routing_number
        .chars()
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<u32>>>()
        .filter(|digits| digits.len() == 9)
        .ok_or_else(|| {
            report!(ValidationError::IncorrectValueProvided {
                field_name: "routing_number"
            })
        })?;

    let checksum: u32 = digits
        .iter()
        .zip([3, 7, 1].iter().cycle())
        .map(|(digit, weight)| digit * weight)
        .sum();

    if checksum % 10 == 0 {
        Ok(())
    } else {
        Err(report!(ValidationError::IncorrectValueProvided {
            field_name: "routing_number"
        }))
    }
}

/// Keeps the first `visible` characters of `value` and replaces the rest with asterisks.
pub fn mask_after(value: &str, visible: usize) -> String {
    value
        .chars()
        .enumerate()
        .map(|(index, c)| if index < visible { c } else { '*' })
        .collect()
}

/// Keeps the last `visible` characters of `value` and replaces the rest with asterisks.
pub fn mask_before_last(value: &str, visible: usize) -> String {
    let hidden = value.chars().count().saturating_sub(visible);
    value
        .chars()
        .enumerate()
        .map(|(index, c)| if index < hidden { '*' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use proptest::prop_assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("4111111111111111", "4111111111111111" ; "visa")]
    #[test_case("3714 4963 5398 431", "371449635398431" ; "amex with spaces")]
    #[test_case("5555555555554444", "5555555555554444" ; "mastercard")]
    fn valid_card_numbers(input: &str, expected: &str) {
        assert_eq!(validate_card_number(input).unwrap(), expected);
    }

    #[test_case("" ; "empty")]
    #[test_case("4111111111111112" ; "bad checksum")]
    #[test_case("4111-1111-1111-1111" ; "dashes")]
    #[test_case("371446431" ; "too short")]
    fn invalid_card_numbers(input: &str) {
        assert!(validate_card_number(input).is_err());
    }

    #[test]
    fn card_expiry_bounds() {
        assert!(validate_card_expiry(12, 2030).is_ok());
        assert!(validate_card_expiry(0, 2030).is_err());
        assert!(validate_card_expiry(13, 2030).is_err());
        assert!(validate_card_expiry(1, 1996).is_err());
    }

    #[test_case("122000661", true ; "valid routing number")]
    #[test_case("011000015", true ; "federal reserve routing number")]
    #[test_case("122000662", false ; "bad checksum")]
    #[test_case("12200066", false ; "too short")]
    #[test_case("12200066a", false ; "non digit")]
    fn routing_numbers(input: &str, valid: bool) {
        assert_eq!(validate_routing_number(input).is_ok(), valid);
    }

    #[test]
    fn masking_helpers() {
        assert_eq!(mask_after("4111111111111111", 6), "411111**********");
        assert_eq!(mask_before_last("123456789", 4), "*****6789");
        assert_eq!(mask_before_last("12", 4), "12");
    }

    proptest::proptest! {
        #[test]
        fn masking_preserves_length(value in "[0-9]{0,24}", visible in 0usize..8) {
            prop_assert_eq!(mask_after(&value, visible).len(), value.len());
            prop_assert_eq!(mask_before_last(&value, visible).len(), value.len());
        }
    }
}
