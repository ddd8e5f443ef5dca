use std::collections::{BTreeSet, VecDeque};

use smallvec::{smallvec, SmallVec};
use valid_rail::{ErrorAccumulator, Errors, ValidationError};

fn errors(messages: &[&str]) -> Errors {
    Errors::try_from_iter(messages.iter().map(|m| ValidationError::new(*m))).unwrap()
}

#[test]
fn errors_concatenate_left_first() {
    let combined = errors(&["a", "b"]).combine(errors(&["c"]));
    let messages: Vec<_> = combined.iter().map(ValidationError::message).collect();
    assert_eq!(messages, ["a", "b", "c"]);
}

#[test]
fn combine_is_associative_for_sequences() {
    let (a, b, c) = (vec![1], vec![2, 3], vec![4]);
    let left = a.clone().combine(b.clone()).combine(c.clone());
    let right = a.combine(b.combine(c));
    assert_eq!(left, right);

    let deque: VecDeque<_> = VecDeque::from(vec![1]).combine(VecDeque::from(vec![2]));
    assert_eq!(deque, VecDeque::from(vec![1, 2]));

    let small: SmallVec<[u8; 2]> = smallvec![1];
    assert_eq!(small.combine(smallvec![2, 3]).as_slice(), &[1, 2, 3]);
}

#[test]
fn sets_combine_by_union() {
    let left: BTreeSet<_> = [1, 2].into_iter().collect();
    let right: BTreeSet<_> = [2, 3].into_iter().collect();
    let combined = left.combine(right);
    assert_eq!(combined.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn duplicates_are_kept_in_sequences() {
    let combined = errors(&["same"]).combine(errors(&["same"]));
    assert_eq!(combined.len(), 2);
}
