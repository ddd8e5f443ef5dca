use valid_rail::{ValidationError, ValidationResult};

#[test]
fn iter_mut_updates_valid_value() {
    let mut valid = ValidationResult::<i32>::valid(3);
    if let Some(value) = valid.iter_mut().next() {
        *value = 4;
    }
    assert_eq!(valid.into_value(), Some(4));
}

#[test]
fn iter_errors_walks_every_error() {
    let invalid: ValidationResult<i32> =
        ValidationResult::invalid_many([ValidationError::new("x"), ValidationError::new("y")]);

    let messages: Vec<_> = invalid.iter_errors().map(ValidationError::message).collect();
    assert_eq!(messages, ["x", "y"]);
    assert_eq!(invalid.error_count(), 2);
    assert_eq!(invalid.iter().count(), 0);
}

#[test]
fn valid_results_have_no_errors() {
    let valid = ValidationResult::<&str>::valid("ok");
    assert_eq!(valid.iter_errors().count(), 0);
    assert_eq!(valid.error_count(), 0);

    let values: Vec<_> = valid.into_iter().collect();
    assert_eq!(values, ["ok"]);
}
