//! Corrupted containers must be caught at the next operation boundary.

use super::common::{
    corrupt_list_size, corrupt_queue_size, corrupt_stack_size, list_invariant, list_of,
    misplace_queue_tail, queue_invariant, queue_of, sever_back_link, stack_invariant, stack_of,
};
use catena::{ContractConfig, ContractViolation, InvariantError, LinkedStack};

#[test]
fn test_stack_with_wrong_size_reports_invariant() {
    let mut stack = stack_of(&[1, 2]);
    corrupt_stack_size(&mut stack, 5);
    assert!(stack_invariant(&stack).is_err());

    let err = stack.push(3).unwrap_err();
    assert!(err.is_invariant());
    assert_eq!(err.operation(), "LinkedStack::push");
}

#[test]
fn test_queue_with_wrong_size_reports_invariant() {
    let mut queue = queue_of(&[1, 2, 3]);
    corrupt_queue_size(&mut queue, 2);
    assert_eq!(
        queue_invariant(&queue),
        Err(InvariantError::CountMismatch {
            claimed: 2,
            counted: 3
        })
    );
    assert!(queue.front().unwrap_err().is_invariant());
}

#[test]
fn test_queue_with_misplaced_tail_reports_invariant() {
    let mut queue = queue_of(&[1, 2, 3]);
    misplace_queue_tail(&mut queue);
    assert_eq!(queue_invariant(&queue), Err(InvariantError::SharedEnds { size: 3 }));
    assert!(queue.enqueue(4).unwrap_err().is_invariant());
}

#[test]
fn test_list_with_zero_size_but_links() {
    let mut list = list_of(&[1]);
    corrupt_list_size(&mut list, 0);
    assert_eq!(list_invariant(&list), Err(InvariantError::EmptyButLinked));
    assert!(matches!(
        list.add_last(2),
        Err(ContractViolation::Invariant {
            error: InvariantError::EmptyButLinked,
            ..
        })
    ));
}

#[test]
fn test_list_back_link_damage_is_located() {
    let mut list = list_of(&[1, 2, 3, 4]);
    assert!(sever_back_link(&mut list, 2));
    assert_eq!(
        list_invariant(&list),
        Err(InvariantError::BrokenBackLink { position: 2 })
    );
    assert!(list.get(0).unwrap_err().is_invariant());
    assert!(!sever_back_link(&mut list, 10));
}

#[test]
fn test_deep_copy_of_corrupt_list_is_empty() {
    let mut list = list_of(&[1, 2, 3]);
    corrupt_list_size(&mut list, 7);
    let copy = list.deep_copy();
    assert!(copy.is_empty());
    assert!(list_invariant(&copy).is_ok());
}

#[test]
fn test_preconditions_only_skips_walks() {
    let mut stack: LinkedStack<i64> = LinkedStack::with_config(ContractConfig::preconditions_only());
    stack.push(1).unwrap();
    stack.push(2).unwrap();
    corrupt_stack_size(&mut stack, 3);
    // The walk is off, so the mismatch goes unnoticed at the boundary.
    assert_eq!(stack.peek(), Ok(&2));
    assert!(stack_invariant(&stack).is_err());
}
