use std::future::ready;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use valid_rail::async_ext::{validate_all_async, validate_seq_async};
use valid_rail::{ValidationError, ValidationResult};

fn delayed(value: i32, millis: u64) -> BoxFuture<'static, ValidationResult<i32>> {
    async move {
        tokio::time::sleep(Duration::from_millis(millis)).await;
        if value < 0 {
            ValidationResult::invalid(ValidationError::new(format!("{value} is negative")))
        } else {
            ValidationResult::valid(value)
        }
    }
    .boxed()
}

#[tokio::test]
async fn all_async_keeps_input_order() {
    let result = validate_all_async(vec![delayed(1, 30), delayed(2, 10), delayed(3, 0)]).await;
    assert_eq!(result.into_value(), Some(vec![1, 2, 3]));
}

#[tokio::test]
async fn all_async_accumulates_every_error() {
    let result = validate_all_async(vec![delayed(-1, 20), delayed(2, 0), delayed(-3, 0)]).await;

    let messages: Vec<_> = result.into_errors().unwrap().iter().map(|e| e.message().to_string()).collect();
    assert_eq!(messages, ["-1 is negative", "-3 is negative"]);
}

#[tokio::test]
async fn all_async_of_nothing_is_valid() {
    let result = validate_all_async(Vec::<BoxFuture<'static, ValidationResult<i32>>>::new()).await;
    assert_eq!(result.into_value(), Some(Vec::new()));
}

type Step = Box<dyn FnOnce(i32) -> BoxFuture<'static, ValidationResult<i32>>>;

fn step(f: impl FnOnce(i32) -> ValidationResult<i32> + 'static) -> Step {
    Box::new(move |n| ready(f(n)).boxed())
}

#[tokio::test]
async fn seq_async_threads_the_value() {
    let steps = vec![step(|n| ValidationResult::valid(n + 1)), step(|n| ValidationResult::valid(n * 10))];

    let result = validate_seq_async(1, steps).await;
    assert_eq!(result.into_value(), Some(20));
}

#[tokio::test]
async fn seq_async_stops_at_first_failure() {
    let later = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&later);

    let steps = vec![
        step(|_| ValidationResult::invalid(ValidationError::new("first"))),
        step(move |n| {
            seen.fetch_add(1, Ordering::SeqCst);
            ValidationResult::valid(n)
        }),
    ];

    let errors = validate_seq_async(1, steps).await.into_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message(), "first");
    assert_eq!(later.load(Ordering::SeqCst), 0);
}
