use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use valid_rail::async_ext::{AsyncValidate, AsyncValidator};
use valid_rail::validator::constraints;
use valid_rail::{codes, ValidationConfig, ValidationError, ValidationResult, Validator};

fn username_free() -> AsyncValidator<String> {
    AsyncValidator::from_fn(|name: String| async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        if name == "admin" {
            ValidationResult::invalid(ValidationError::new("username is taken"))
        } else {
            ValidationResult::valid(name)
        }
    })
}

fn exploding() -> AsyncValidator<String> {
    AsyncValidator::from_fn(|name: String| async move {
        if name == "boom" {
            panic!("lookup table missing");
        }
        ValidationResult::valid(name)
    })
}

#[derive(Debug, AsyncValidate)]
struct Signup {
    #[validate(with_async = username_free())]
    username: String,
    #[validate(with = constraints::positive())]
    age: u32,
    #[validate(required, with = constraints::non_empty())]
    email: Option<String>,
    tags: Vec<String>,
    #[validate(skip)]
    source: &'static str,
}

#[derive(Debug, AsyncValidate)]
struct Lookup {
    #[validate(with_async = exploding())]
    name: String,
}

#[derive(Debug, AsyncValidate)]
struct Ping;

fn slow_check() -> AsyncValidator<String> {
    AsyncValidator::from_fn(|value: String| async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        ValidationResult::valid(value)
    })
}

#[derive(Debug, AsyncValidate)]
struct Profile {
    #[validate(with_async = slow_check())]
    name: String,
    #[validate(with_async = slow_check())]
    bio: String,
    #[validate(required, with_async = slow_check())]
    site: Option<String>,
}

static ASYNC_BUILDS: AtomicUsize = AtomicUsize::new(0);
static LIFTED_BUILDS: AtomicUsize = AtomicUsize::new(0);

fn counted_async() -> AsyncValidator<String> {
    ASYNC_BUILDS.fetch_add(1, Ordering::SeqCst);
    AsyncValidator::from_fn(|value: String| async move { ValidationResult::valid(value) })
}

fn counted_sync() -> Validator<String> {
    LIFTED_BUILDS.fetch_add(1, Ordering::SeqCst);
    constraints::non_empty()
}

#[derive(Debug, AsyncValidate)]
struct Handle {
    #[validate(with_async = counted_async())]
    name: String,
    #[validate(required, with = counted_sync())]
    alias: Option<String>,
}

fn signup(username: &str, age: u32, email: Option<&str>) -> Signup {
    Signup {
        username: username.to_string(),
        age,
        email: email.map(str::to_string),
        tags: vec!["beta".to_string()],
        source: "web",
    }
}

#[tokio::test]
async fn valid_record_is_rebuilt() {
    let validated = signup("ada", 36, Some("ada@example.com"))
        .validate_async(&ValidationConfig::default())
        .await
        .into_value()
        .unwrap();

    assert_eq!(validated.username, "ada");
    assert_eq!(validated.email.as_deref(), Some("ada@example.com"));
    assert_eq!(validated.tags, ["beta"]);
    assert_eq!(validated.source, "web");
}

#[tokio::test]
async fn errors_follow_declaration_order() {
    // The username check finishes last but is reported first.
    let errors = signup("admin", 0, None)
        .validate_async(&ValidationConfig::default())
        .await
        .into_errors()
        .unwrap();

    let paths: Vec<_> = errors.iter().map(|e| e.path_string()).collect();
    assert_eq!(paths, ["username", "age", "email"]);
    assert_eq!(errors[1].code(), Some(codes::POSITIVE));
    assert_eq!(errors[2].code(), Some(codes::REQUIRED));
    assert_eq!(errors[2].message(), "field 'email' (Option<String>): must not be null");
}

#[tokio::test]
async fn config_reaches_nested_fields() {
    let mut record = signup("ada", 1, Some("a@b"));
    record.tags = vec!["a".into(), "b".into(), "c".into()];

    let errors = record
        .validate_async(&ValidationConfig::with_max_collection_size(2))
        .await
        .into_errors()
        .unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path_string(), "tags");
    assert_eq!(errors[0].code(), Some(codes::COLLECTION_SIZE_EXCEEDED));
}

#[tokio::test]
async fn panicking_field_validator_becomes_one_error() {
    let result = Lookup { name: "boom".to_string() }
        .validate_async(&ValidationConfig::default())
        .await;

    let errors = result.into_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code(), Some(codes::ASYNC_FAILURE));
    assert!(errors[0].message().contains("asynchronous validation failed unexpectedly"));
    assert_eq!(errors[0].path_string(), "name");
}

#[tokio::test]
async fn derived_records_nest() {
    let records = vec![signup("ada", 1, Some("a")), signup("admin", 1, Some("b"))];
    let errors = AsyncValidator::<Vec<Signup>>::of()
        .validate(records)
        .await
        .into_errors()
        .unwrap();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path_string(), "[1].username");
}

#[tokio::test]
async fn unit_record_is_valid() {
    assert!(Ping.validate_async(&ValidationConfig::strict()).await.is_valid());
}

#[tokio::test]
async fn fields_are_validated_concurrently() {
    let profile = Profile { name: "ada".into(), bio: "math".into(), site: Some("ada.dev".into()) };

    let started = Instant::now();
    let result = profile.validate_async(&ValidationConfig::default()).await;
    let elapsed = started.elapsed();

    assert!(result.is_valid());
    assert!(elapsed < Duration::from_millis(200), "took {elapsed:?}");
}

#[tokio::test]
async fn attribute_validators_are_built_once() {
    for _ in 0..3 {
        let handle = Handle { name: "ada".into(), alias: Some("countess".into()) };
        assert!(handle.validate_async(&ValidationConfig::default()).await.is_valid());
    }

    assert_eq!(ASYNC_BUILDS.load(Ordering::SeqCst), 1);
    assert_eq!(LIFTED_BUILDS.load(Ordering::SeqCst), 1);
}
