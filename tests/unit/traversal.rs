//! Traversal handles and concurrent modification detection.

use super::common::{contents, list_of};
use catena::TraversalError;

#[test]
fn test_direct_remove_invalidates_traversal() {
    let mut list = list_of(&[1, 2, 3]);
    let mut walk = list.traverse();
    assert_eq!(walk.next(&list), Ok(&1));

    assert_eq!(list.remove(1), Ok(2));

    let err = walk.next(&list).unwrap_err();
    assert!(matches!(err, TraversalError::ConcurrentModification { .. }));
}

#[test]
fn test_clear_invalidates_traversal() {
    let mut list = list_of(&[1, 2]);
    let walk = list.traverse();
    list.clear().unwrap();
    assert!(matches!(
        walk.has_next(&list),
        Err(TraversalError::ConcurrentModification { .. })
    ));
}

#[test]
fn test_remove_through_handle_keeps_it_valid() {
    let mut list = list_of(&[10, 20, 30, 40]);
    let mut walk = list.traverse();
    walk.next(&list).unwrap();
    walk.next(&list).unwrap();
    assert_eq!(walk.remove(&mut list), Ok(20));
    assert_eq!(walk.next(&list), Ok(&30));
    assert_eq!(walk.index(), 2);
    assert_eq!(contents(&list), vec![10, 30, 40]);
}

#[test]
fn test_drain_everything_through_handle() {
    let mut list = list_of(&[1, 2, 3]);
    let mut walk = list.traverse();
    while walk.has_next(&list).unwrap() {
        walk.next(&list).unwrap();
        walk.remove(&mut list).unwrap();
    }
    assert!(list.is_empty());
    assert_eq!(walk.next(&list), Err(TraversalError::NoSuchElement));
}

#[test]
fn test_fresh_traversal_after_invalidation() {
    let mut list = list_of(&[1, 2]);
    let stale = list.traverse();
    list.add_first(0).unwrap();
    assert!(stale.has_next(&list).is_err());

    let mut walk = list.traverse();
    assert_eq!(walk.next(&list), Ok(&0));
}

#[test]
fn test_error_messages_are_descriptive() {
    let err = TraversalError::ConcurrentModification {
        expected: 3,
        found: 4,
    };
    assert!(err.to_string().contains("expected modification count 3"));
    assert!(TraversalError::IllegalState.to_string().contains("remove"));
}
