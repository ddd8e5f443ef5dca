use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use valid_rail::record::{Record, RecordShape};
use valid_rail::validator::constraints;
use valid_rail::{codes, Validate, ValidationConfig, ValidationResult, Validator};

#[derive(Debug, Validate)]
struct Person {
    #[validate(with = constraints::non_empty())]
    name: String,
    #[validate(with = constraints::non_negative())]
    age: i32,
}

#[derive(Debug, Validate)]
struct Address {
    #[validate(with = constraints::non_empty())]
    street: String,
    #[validate(with = constraints::in_range(10000, 99999))]
    zip: u32,
}

#[derive(Debug, Validate)]
struct Customer {
    person: Person,
    addresses: Vec<Address>,
    #[validate(required, with = constraints::non_empty())]
    email: Option<String>,
    #[validate(skip)]
    cache_key: u64,
}

#[derive(Debug, PartialEq, Validate)]
struct Meters(#[validate(with = constraints::non_negative(), rename = "value")] f64);

#[derive(Debug, PartialEq, Validate)]
struct Marker;

#[derive(Debug, Validate)]
struct Tagged<T> {
    tags: BTreeMap<String, T>,
}

static BUILDS: AtomicUsize = AtomicUsize::new(0);

fn counted() -> Validator<String> {
    BUILDS.fetch_add(1, Ordering::SeqCst);
    constraints::non_empty()
}

#[derive(Debug, Validate)]
struct Account {
    #[validate(with = counted())]
    login: String,
}

fn person(name: &str, age: i32) -> Person {
    Person { name: name.to_string(), age }
}

fn address(street: &str, zip: u32) -> Address {
    Address { street: street.to_string(), zip }
}

#[test]
fn empty_name_and_negative_age_yield_two_errors() {
    let errors = person("", -1).validate().into_errors().unwrap();

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].field_path().collect::<Vec<_>>(), vec!["name"]);
    assert_eq!(errors[1].field_path().collect::<Vec<_>>(), vec!["age"]);
    assert_eq!(errors[1].code(), Some(codes::NON_NEGATIVE));
}

#[test]
fn valid_record_is_returned_unchanged() {
    let customer = Customer {
        person: person("Ada", 36),
        addresses: vec![address("Main St", 12345)],
        email: Some("ada@example.com".to_string()),
        cache_key: 7,
    };

    let validated = customer.validate().into_value().unwrap();
    assert_eq!(validated.person.name, "Ada");
    assert_eq!(validated.addresses[0].zip, 12345);
    assert_eq!(validated.email.as_deref(), Some("ada@example.com"));
    assert_eq!(validated.cache_key, 7);
}

#[test]
fn error_count_is_the_sum_of_field_errors() {
    let customer = Customer {
        person: person("", -5),
        addresses: vec![address("", 1), address("Elm", 12345), address("Oak", 2)],
        email: None,
        cache_key: 0,
    };

    let errors = customer.validate().into_errors().unwrap();
    // person: 2, addresses: 3, email: 1
    assert_eq!(errors.len(), 6);

    let roots: Vec<_> = errors.iter().map(|e| e.field_path().next().unwrap().to_string()).collect();
    assert_eq!(roots, ["person", "person", "addresses", "addresses", "addresses", "email"]);

    assert_eq!(errors[0].path_string(), "person.name");
    assert_eq!(errors[2].path_string(), "addresses[0].street");
    assert_eq!(errors[4].path_string(), "addresses[2].zip");
}

#[test]
fn missing_required_field_is_reported_without_running_validator() {
    let customer = Customer {
        person: person("Ada", 1),
        addresses: Vec::new(),
        email: None,
        cache_key: 0,
    };

    let errors = customer.validate().into_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code(), Some(codes::REQUIRED));
    assert_eq!(errors[0].message(), "field 'email' (Option<String>): must not be null");
}

#[test]
fn nested_collections_respect_size_limits() {
    let customer = Customer {
        person: person("Ada", 1),
        addresses: vec![address("a", 10000), address("b", 10000), address("c", 10000)],
        email: Some("a@b".to_string()),
        cache_key: 0,
    };

    let errors = customer
        .validate_with(&ValidationConfig::with_max_collection_size(2))
        .into_errors()
        .unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code(), Some(codes::COLLECTION_SIZE_EXCEEDED));
    assert_eq!(errors[0].path_string(), "addresses");
}

#[test]
fn tuple_struct_uses_renamed_label() {
    let errors = Meters(-1.0).validate().into_errors().unwrap();
    assert_eq!(errors[0].path_string(), "value");
    assert_eq!(Meters(2.5).validate(), ValidationResult::valid(Meters(2.5)));
}

#[test]
fn unit_struct_is_always_valid() {
    assert_eq!(Marker.validate(), ValidationResult::valid(Marker));
}

#[test]
fn generic_records_validate_their_parameters() {
    let tagged = Tagged { tags: [("a".to_string(), vec![1u8])].into_iter().collect() };
    assert!(tagged.validate().is_valid());

    let tagged = Tagged { tags: [("a".to_string(), vec![1u8, 2, 3])].into_iter().collect() };
    let errors = tagged
        .validate_with(&ValidationConfig::with_max_collection_size(2))
        .into_errors()
        .unwrap();
    assert_eq!(errors[0].path_string(), "tags.value");
}

#[test]
fn record_metadata_lists_fields_in_order() {
    assert_eq!(Customer::NAME, "Customer");
    assert_eq!(Customer::SHAPE, RecordShape::Nominal);

    let names: Vec<_> = Customer::FIELDS.iter().map(|f| f.name()).collect();
    assert_eq!(names, ["person", "addresses", "email", "cache_key"]);

    assert_eq!(Customer::FIELDS[1].type_name(), "Vec<Address>");
    assert!(Customer::FIELDS[2].is_required());
    assert!(Customer::FIELDS[3].is_skipped());

    assert_eq!(Meters::SHAPE, RecordShape::Positional);
    assert_eq!(Meters::FIELDS[0].name(), "value");
    assert_eq!(Marker::SHAPE, RecordShape::Unit);
    assert!(Marker::FIELDS.is_empty());
}

#[test]
fn attribute_validator_is_built_once() {
    for login in ["ada", "", "grace"] {
        let _ = Account { login: login.to_string() }.validate();
    }

    assert_eq!(BUILDS.load(Ordering::SeqCst), 1);
}
