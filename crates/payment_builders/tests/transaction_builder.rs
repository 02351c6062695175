#![allow(clippy::unwrap_used)]

use std::collections::HashMap;

use payment_builders::{
    payment_methods::{CreditCardData, PaymentMethod, TokenData},
    PaymentMethodType, TransactionModifier, TransactionRequestBuilder, TransactionType,
};
use proptest::prop_assert_eq;
use strum::IntoEnumIterator;
use test_case::test_case;

fn card() -> CreditCardData {
    CreditCardData::new("4111111111111111", 12, 2030).unwrap()
}

fn supplementary(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[test]
fn create_keeps_type_and_defaults_modifier() {
    for transaction_type in TransactionType::iter() {
        let builder = TransactionRequestBuilder::new(transaction_type);

        assert_eq!(builder.transaction_type(), transaction_type);
        assert_eq!(builder.transaction_modifier(), TransactionModifier::None);
    }
}

#[test]
fn create_with_only_a_type_leaves_payment_method_absent() {
    let builder = TransactionRequestBuilder::create(TransactionType::Refund, None);
    assert!(builder.payment_method().is_none());
}

#[test]
fn create_with_a_payment_method_keeps_it() {
    let builder = TransactionRequestBuilder::create(TransactionType::Sale, Some(Box::new(card())));

    assert_eq!(
        builder.payment_method().map(|pm| pm.payment_method_type()),
        Some(PaymentMethodType::Credit)
    );
}

#[test]
fn with_payment_method_replaces_earlier_one() {
    let builder = TransactionRequestBuilder::new(TransactionType::Sale)
        .with_payment_method(card())
        .with_payment_method(TokenData::with_type("tok_9876", PaymentMethodType::Debit).unwrap());

    assert_eq!(
        builder.payment_method().map(|pm| pm.payment_method_type()),
        Some(PaymentMethodType::Debit)
    );
}

#[test]
fn with_transaction_type_replaces_type() {
    let builder = TransactionRequestBuilder::new(TransactionType::Auth)
        .with_transaction_type(TransactionType::Sale);
    assert_eq!(builder.transaction_type(), TransactionType::Sale);
}

#[test_case(TransactionModifier::Recurring)]
#[test_case(TransactionModifier::Incremental)]
#[test_case(TransactionModifier::None)]
fn modifier_reads_back_and_repeating_it_changes_nothing(modifier: TransactionModifier) {
    let once = TransactionRequestBuilder::new(TransactionType::Sale).with_modifier(modifier);
    let twice = once.clone().with_modifier(modifier);

    assert_eq!(once.transaction_modifier(), modifier);
    assert_eq!(twice.transaction_modifier(), once.transaction_modifier());
    assert_eq!(twice.transaction_type(), once.transaction_type());
}

#[test_case(&[true, false], false ; "true then false")]
#[test_case(&[false, true], true ; "false then true")]
#[test_case(&[true, true], true ; "true twice")]
fn allow_duplicates_last_write_wins(writes: &[bool], expected: bool) {
    let builder = writes.iter().fold(
        TransactionRequestBuilder::new(TransactionType::Sale),
        |builder, allow| builder.with_allow_duplicates(*allow),
    );

    assert_eq!(builder.allow_duplicates(), Some(expected));
}

#[test]
fn single_pair_overwrites_merged_map_entry() {
    let builder = TransactionRequestBuilder::new(TransactionType::Sale)
        .with_supplementary_data_map(supplementary(&[("a", "1"), ("b", "2")]))
        .with_supplementary_data("b", "3");

    assert_eq!(
        builder.supplementary_data(),
        &supplementary(&[("a", "1"), ("b", "3")])
    );
}

#[test]
fn later_pairs_win_within_one_merge() {
    let builder = TransactionRequestBuilder::new(TransactionType::Sale)
        .with_supplementary_data_map(vec![("a", "1"), ("a", "2"), ("", "skipped")]);

    assert_eq!(builder.supplementary_data(), &supplementary(&[("a", "2")]));
}

#[test]
fn pairs_without_key_or_value_are_ignored() {
    let base =
        TransactionRequestBuilder::new(TransactionType::Sale).with_supplementary_data("a", "1");

    let empty_key = base.clone().with_supplementary_data("", "x");
    let missing_value = base.clone().with_optional_supplementary_data("k", None::<String>);

    assert_eq!(empty_key.supplementary_data(), base.supplementary_data());
    assert_eq!(missing_value.supplementary_data(), base.supplementary_data());
}

#[test]
fn zero_key_is_ignored_in_pair_and_map_forms() {
    let builder = TransactionRequestBuilder::new(TransactionType::Sale)
        .with_supplementary_data("0", "x")
        .with_optional_supplementary_data("0", Some("x"))
        .with_supplementary_data_map(vec![("0", "y"), ("00", "z")]);

    assert_eq!(builder.supplementary_data(), &supplementary(&[("00", "z")]));
}

#[test]
fn optional_map_skips_entries_without_value() {
    let builder = TransactionRequestBuilder::new(TransactionType::Sale)
        .with_supplementary_data("b", "kept")
        .with_optional_supplementary_data_map(vec![
            ("a", Some("1")),
            ("b", None),
            ("", Some("skipped")),
            ("c", Some("")),
        ]);

    assert_eq!(
        builder.supplementary_data(),
        &supplementary(&[("a", "1"), ("b", "kept"), ("c", "")])
    );
}

#[test]
fn optional_pair_with_value_is_stored() {
    let builder = TransactionRequestBuilder::new(TransactionType::Sale)
        .with_optional_supplementary_data("k", Some("v"));

    assert_eq!(builder.supplementary_data(), &supplementary(&[("k", "v")]));
}

proptest::proptest! {
    #[test]
    fn merging_keeps_every_keyed_pair(
        pairs in proptest::collection::hash_map("[a-z]{0,3}", "[a-z0-9]{0,3}", 0..8)
    ) {
        let builder = TransactionRequestBuilder::new(TransactionType::Auth)
            .with_supplementary_data_map(pairs.clone());

        let expected: HashMap<String, String> =
            pairs.into_iter().filter(|(key, _)| !key.is_empty()).collect();
        prop_assert_eq!(builder.supplementary_data(), &expected);
    }
}
