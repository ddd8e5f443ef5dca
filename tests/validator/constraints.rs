use valid_rail::codes;
use valid_rail::validator::constraints;

#[test]
fn sign_constraints() {
    assert!(constraints::non_negative::<i32>().validate(0).is_valid());
    assert!(constraints::positive::<i32>().validate(0).is_invalid());

    let errors = constraints::non_negative::<i64>().validate(-5).into_errors().unwrap();
    assert_eq!(errors[0].code(), Some(codes::NON_NEGATIVE));
    assert_eq!(errors[0].actual(), Some("-5"));
}

#[test]
fn range_is_inclusive() {
    let percent = constraints::in_range(0u8, 100);
    assert!(percent.validate(0).is_valid());
    assert!(percent.validate(100).is_valid());

    let errors = percent.validate(101).into_errors().unwrap();
    assert_eq!(errors[0].code(), Some(codes::OUT_OF_RANGE));
    assert_eq!(errors[0].expected(), Some("between 0 and 100"));
}

#[test]
fn finite_rejects_nan_and_infinity() {
    let finite = constraints::finite::<f64>();
    assert!(finite.validate(1.5).is_valid());
    assert!(finite.validate(f64::NAN).is_invalid());
    assert!(finite.validate(f64::INFINITY).is_invalid());
}

#[test]
fn lengths_count_characters() {
    let short = constraints::max_length::<String>(3);
    assert!(short.validate("日本語".to_string()).is_valid());

    let long_enough = constraints::min_length::<Vec<u8>>(2);
    let errors = long_enough.validate(vec![1]).into_errors().unwrap();
    assert_eq!(errors[0].code(), Some(codes::MIN_LENGTH));

    assert!(constraints::non_empty::<&str>().validate("").is_invalid());
}

#[test]
fn length_messages_do_not_assume_elements() {
    let errors = constraints::max_length::<String>(3).validate("abcd".to_string()).into_errors().unwrap();
    assert_eq!(errors[0].message(), "length must be at most 3");
    assert_eq!(errors[0].actual(), Some("length 4"));

    let errors = constraints::min_length::<Vec<u8>>(2).validate(vec![1]).into_errors().unwrap();
    assert_eq!(errors[0].message(), "length must be at least 2");
}

#[test]
fn predicate_uses_given_message() {
    let even = constraints::predicate("must be even", |n: &u32| n % 2 == 0);
    let errors = even.validate(3).into_errors().unwrap();
    assert_eq!(errors[0].message(), "must be even");
    assert_eq!(errors[0].code(), Some(codes::PREDICATE));
}

#[cfg(feature = "pattern")]
#[test]
fn pattern_must_match_whole_value() {
    let slug = constraints::matches_pattern("[a-z]+(-[a-z]+)*");
    assert!(slug.validate("valid-rail".to_string()).is_valid());
    assert!(slug.validate("Valid-rail".to_string()).is_invalid());
    assert!(slug.validate("rail-".to_string()).is_invalid());

    let broken = constraints::matches_pattern("[");
    let errors = broken.validate("anything".to_string()).into_errors().unwrap();
    assert_eq!(errors[0].code(), Some(codes::INVALID_PATTERN));
}
