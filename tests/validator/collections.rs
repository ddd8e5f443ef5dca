use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use valid_rail::validator::{collections, constraints};
use valid_rail::{codes, ValidationConfig, ValidationError, ValidationResult, Validator};

fn counting(calls: &Arc<AtomicUsize>) -> Validator<i32> {
    let calls = Arc::clone(calls);
    Validator::from_fn(move |n: i32| {
        calls.fetch_add(1, Ordering::SeqCst);
        ValidationResult::valid(n)
    })
}

#[test]
fn oversized_collection_skips_element_validators() {
    let calls = Arc::new(AtomicUsize::new(0));
    let validator = collections::vec_of(counting(&calls));
    let config = ValidationConfig::with_max_collection_size(10);

    let errors = validator.validate_with((0..11).collect(), &config).into_errors().unwrap();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code(), Some(codes::COLLECTION_SIZE_EXCEEDED));
    assert_eq!(errors[0].severity(), Some(codes::SEVERITY_SECURITY));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn collection_at_the_limit_validates_every_element() {
    let calls = Arc::new(AtomicUsize::new(0));
    let validator = counting(&calls).each();
    let config = ValidationConfig::with_max_collection_size(10);

    assert!(validator.validate_with((0..10).collect(), &config).is_valid());
    assert_eq!(calls.load(Ordering::SeqCst), 10);
}

#[test]
fn element_errors_are_indexed_and_typed() {
    let validator = collections::vec_of(constraints::non_negative::<i32>());
    let errors = validator.validate(vec![0, -1, 2, -3]).into_errors().unwrap();

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].field_path().collect::<Vec<_>>(), vec!["[1]"]);
    assert!(errors[0].message().starts_with("field '[1]' (i32): "));
    assert_eq!(errors[1].path_string(), "[3]");
}

#[test]
fn bad_key_and_bad_value_yield_two_errors() {
    let validator = collections::btree_map_of(
        constraints::non_empty::<String>(),
        constraints::positive::<i32>(),
    );
    let map: BTreeMap<String, i32> =
        [(String::new(), 1), ("b".to_string(), 0)].into_iter().collect();

    let errors = validator.validate(map).into_errors().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].path_string(), "key");
    assert_eq!(errors[1].path_string(), "value");
}

#[test]
fn map_size_counts_entries() {
    let validator = collections::hash_map_of(Validator::<u8>::pass_through(), Validator::<u8>::pass_through());
    let map: HashMap<u8, u8> = (0..5).map(|i| (i, i)).collect();

    let errors = validator
        .validate_with(map, &ValidationConfig::with_max_collection_size(4))
        .into_errors()
        .unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].actual(), Some("5"));
}

#[test]
fn optional_validator_accepts_none() {
    let validator = constraints::positive::<i32>().optional();
    assert_eq!(validator.validate(None).into_value(), Some(None));
    assert!(validator.validate(Some(-1)).is_invalid());
}

#[test]
fn arrays_keep_their_shape() {
    let validator = collections::array_of::<_, 3>(constraints::non_negative::<i8>());
    assert_eq!(validator.validate([1, 2, 3]).into_value(), Some([1, 2, 3]));

    let errors = validator.validate([-1, 2, -3]).into_errors().unwrap();
    let paths: Vec<_> = errors.iter().map(ValidationError::path_string).collect();
    assert_eq!(paths, ["[0]", "[2]"]);
}
