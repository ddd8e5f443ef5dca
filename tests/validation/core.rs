use valid_rail::{codes, Errors, ValidationError, ValidationResult};

fn invalid<A>(messages: &[&str]) -> ValidationResult<A> {
    ValidationResult::invalid_many(messages.iter().map(|m| ValidationError::new(*m)))
}

fn messages<A>(result: ValidationResult<A>) -> Vec<String> {
    result
        .into_errors()
        .map(|errors| errors.iter().map(|e| e.message().to_string()).collect())
        .unwrap_or_default()
}

#[test]
fn map_and_and_then_chain_success_values() {
    let result = ValidationResult::<i32>::valid(4)
        .map(|x| x * 2)
        .and_then(|x| if x == 8 { ValidationResult::valid(x + 1) } else { invalid(&["unexpected"]) });

    assert_eq!(result.into_value(), Some(9));
}

#[test]
fn and_then_is_fail_fast() {
    let mut called = false;
    let result = invalid::<i32>(&["first"]).and_then(|x| {
        called = true;
        ValidationResult::valid(x)
    });

    assert!(!called);
    assert_eq!(messages(result), ["first"]);
}

#[test]
fn zip_accumulates_left_first() {
    let result = invalid::<i32>(&["a", "b"]).zip(invalid::<String>(&["c"]));
    assert_eq!(messages(result), ["a", "b", "c"]);
}

#[test]
fn zip_fail_fast_keeps_first_invalid() {
    let result = invalid::<i32>(&["a"]).zip_fail_fast(invalid::<i32>(&["b"]));
    assert_eq!(messages(result), ["a"]);

    let result = ValidationResult::valid(1).zip_fail_fast(invalid::<i32>(&["b"]));
    assert_eq!(messages(result), ["b"]);
}

#[test]
fn or_prefers_first_valid_and_merges_errors() {
    let result = ValidationResult::<i32>::valid(1).or(ValidationResult::valid(2));
    assert_eq!(result.into_value(), Some(1));

    let result = invalid::<i32>(&["x"]).or(invalid(&["y"]));
    assert_eq!(messages(result), ["x", "y"]);
}

#[test]
fn or_else_is_lazy() {
    let mut evaluated = false;
    let result = ValidationResult::valid(1).or_else(|_: Errors| {
        evaluated = true;
        ValidationResult::valid(2)
    });

    assert!(!evaluated);
    assert_eq!(result.into_value(), Some(1));
}

#[test]
fn recover_and_fold() {
    assert_eq!(invalid::<i32>(&["bad"]).recover(7).into_value(), Some(7));

    let summary = invalid::<i32>(&["a", "b"]).fold(|v| v.to_string(), |e| format!("{} errors", e.len()));
    assert_eq!(summary, "2 errors");
}

#[test]
fn into_result_round_trips() {
    let originals = [ValidationResult::valid(5), invalid::<i32>(&["x", "y"])];

    for original in originals {
        let through_errors: ValidationResult<i32> = original.clone().into_result().into();
        assert_eq!(through_errors, original);

        let through_vec = ValidationResult::from_result(original.clone().into_result().map_err(Errors::into_vec));
        assert_eq!(through_vec, original);
    }
}

#[test]
fn empty_error_list_is_programmer_error() {
    let result: ValidationResult<i32> = ValidationResult::from_result(Err(Vec::new()));
    let errors = result.into_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code(), Some(codes::EMPTY_ERRORS));
}

#[test]
fn into_first_error_surfaces_only_the_first() {
    let err = invalid::<i32>(&["first", "second"]).into_first_error().unwrap_err();
    assert_eq!(err.message(), "first");
}

#[test]
fn option_and_vec_conversions_drop_errors() {
    assert_eq!(ValidationResult::<i32>::valid(3).into_vec(), vec![3]);
    assert!(invalid::<i32>(&["x"]).into_vec().is_empty());
    assert_eq!(invalid::<i32>(&["x"]).ok(), None);
}

#[test]
fn map_errors_and_annotate_field() {
    let result = invalid::<u8>(&["too small"])
        .map_errors(|e| e.with_code("small"))
        .annotate_field("age", "u8");

    let errors = result.into_errors().unwrap();
    assert_eq!(errors[0].code(), Some("small"));
    assert_eq!(errors[0].message(), "field 'age' (u8): too small");
}

#[test]
fn custom_error_containers() {
    let left: ValidationResult<i32, Vec<&str>> = ValidationResult::Invalid(vec!["a"]);
    let right: ValidationResult<i32, Vec<&str>> = ValidationResult::Invalid(vec!["b"]);
    assert_eq!(left.zip(right), ValidationResult::Invalid(vec!["a", "b"]));

    let mapped = ValidationResult::<i32, &str>::Invalid("boom").map_err(|e| e.len());
    assert_eq!(mapped, ValidationResult::Invalid(4));
}
