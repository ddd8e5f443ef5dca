use std::collections::BTreeSet;

use smallvec::SmallVec;
use valid_rail::{ValidationError, ValidationResult, ZipAll};

fn check(n: i32) -> ValidationResult<i32> {
    if n >= 0 {
        ValidationResult::valid(n)
    } else {
        ValidationResult::invalid(ValidationError::new(format!("{n} is negative")))
    }
}

#[test]
fn collecting_accumulates_every_error_in_order() {
    let collected: ValidationResult<Vec<i32>> = [1, -2, 3, -4].into_iter().map(check).collect();
    let messages: Vec<_> = collected.iter_errors().map(|e| e.message().to_string()).collect();
    assert_eq!(messages, ["-2 is negative", "-4 is negative"]);
}

#[test]
fn collecting_into_other_collections() {
    let collected: ValidationResult<BTreeSet<i32>> = [3, 1, 2].into_iter().map(check).collect();
    assert_eq!(collected.into_value().unwrap().into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);

    let collected: ValidationResult<SmallVec<[i32; 4]>> = [1, -1].into_iter().map(check).collect();
    assert_eq!(collected.error_count(), 1);
}

#[test]
fn zip_all_accumulates_across_tuple() {
    let result = (check(1), check(-1), check(2), check(-2)).zip_all();
    assert_eq!(result.error_count(), 2);

    let result = (check(1), check(2)).zip_all();
    assert_eq!(result.into_value(), Some((1, 2)));
}

#[test]
fn map_n_over_eight_results() {
    let sum = (check(1), check(2), check(3), check(4), check(5), check(6), check(7), check(8))
        .map_n(|(a, b, c, d, e, f, g, h)| a + b + c + d + e + f + g + h);
    assert_eq!(sum.into_value(), Some(36));
}
