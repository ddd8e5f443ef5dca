use valid_rail::record::RecordValidation;
use valid_rail::validator::constraints;
use valid_rail::{record_validator, ValidationConfig, ValidationResult};

struct Person {
    name: String,
    age: i32,
}

struct Range(u32, u32);

#[test]
fn record_validator_reports_every_field() {
    let person = record_validator!(Person {
        name: constraints::non_empty(),
        age: constraints::non_negative(),
    });

    let errors = person
        .validate(Person { name: String::new(), age: -1 })
        .into_errors()
        .unwrap();

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].field_path().collect::<Vec<_>>(), vec!["name"]);
    assert_eq!(errors[1].field_path().collect::<Vec<_>>(), vec!["age"]);
    assert!(errors[0].message().starts_with("field 'name' (String): "));
}

#[test]
fn record_validator_returns_record_when_valid() {
    let person = record_validator!(Person {
        name: constraints::non_empty(),
        age: constraints::non_negative(),
    });

    let valid = person.validate(Person { name: "Ada".into(), age: 36 }).into_value().unwrap();
    assert_eq!(valid.name, "Ada");
    assert_eq!(valid.age, 36);
}

#[test]
fn positional_record_validator_uses_labels() {
    let range = record_validator!(Range(start: constraints::positive(), end: constraints::positive()));

    let errors = range.validate(Range(0, 0)).into_errors().unwrap();
    let paths: Vec<_> = errors.iter().map(|e| e.path_string()).collect();
    assert_eq!(paths, ["start", "end"]);

    let valid = range.validate(Range(1, 2)).into_value().unwrap();
    assert_eq!((valid.0, valid.1), (1, 2));
}

#[test]
fn nested_record_paths_compose() {
    let mut outer = RecordValidation::new("Order");
    let inner: ValidationResult<Vec<i32>> = constraints::non_negative::<i32>()
        .each()
        .validate_with(vec![1, -1], &ValidationConfig::default());
    assert!(outer.field("quantities", inner).is_none());

    let result: ValidationResult<()> = outer.finish(|| Some(()));
    let errors = result.into_errors().unwrap();
    assert_eq!(errors[0].path_string(), "quantities[1]");
}
