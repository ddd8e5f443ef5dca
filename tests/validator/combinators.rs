use valid_rail::validator::constraints;
use valid_rail::{codes, Union, Validate, ValidationError, ValidationResult, Validator};

fn reject<A: 'static>(messages: &'static [&'static str]) -> Validator<A> {
    Validator::from_fn(move |_: A| {
        ValidationResult::invalid_many(messages.iter().map(|m| ValidationError::new(*m)))
    })
}

#[test]
fn union_takes_the_valid_branch() {
    let validator = Validator::union(constraints::positive::<i32>(), Validator::<String>::pass_through());
    assert_eq!(validator.validate(Union::Left(4)).into_value(), Some(Union::Left(4)));
    assert_eq!(
        validator.validate(Union::Right("x".to_string())).into_value(),
        Some(Union::Right("x".to_string()))
    );
}

#[test]
fn exhausted_union_carries_both_branches() {
    let validator = Validator::union(reject::<i32>(&["a1", "a2"]), reject::<String>(&["b1"]));
    let errors = validator.validate(Union::Left(1)).into_errors().unwrap();

    assert_eq!(errors.len(), 1);
    let error = &errors[0];
    assert_eq!(error.code(), Some(codes::UNION_EXHAUSTED));
    assert_eq!(error.expected(), Some("i32 | String"));

    // left branch errors, then the mismatch reported by the right branch
    assert_eq!(error.children().len(), 3);
    assert_eq!(error.children()[2].code(), Some(codes::TYPE_MISMATCH));
}

#[test]
fn or_counts_every_branch_error() {
    let validator = reject::<u8>(&["a1", "a2"]).or(reject(&["b1", "b2", "b3"]));
    let errors = validator.validate(0).into_errors().unwrap();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].children().len(), 5);
}

#[test]
fn or_accepts_when_either_branch_does() {
    let validator = reject::<u8>(&["nope"]).or(Validator::pass_through());
    assert_eq!(validator.validate(9).into_value(), Some(9));
}

#[test]
fn and_requires_both_and_keeps_first_value() {
    let first = Validator::from_fn(|s: String| ValidationResult::valid(s.trim().to_string()));
    let second = constraints::max_length::<String>(4);
    let both = first.and(second);

    assert_eq!(both.validate(" ab ".to_string()).into_value(), Some("ab".to_string()));
    assert!(both.validate("abcdef".to_string()).is_invalid());

    let errors = reject::<u8>(&["x"]).and(reject(&["y"])).validate(1).into_errors().unwrap();
    assert_eq!(errors.len(), 2);
}

#[test]
fn union_validate_uses_branch_types() {
    let value: Union<u8, Vec<u8>> = Union::Right(vec![1, 2]);
    assert!(value.validate().is_valid());
}
