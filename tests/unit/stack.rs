//! LinkedStack behaviour through the `Stack` trait and inherent API.

use super::common::stack_of;
use catena::{ContractConfig, ContractViolation, LinkedStack, Stack};

#[test]
fn test_push_peek_pop_sizes() {
    let mut stack = LinkedStack::new();
    stack.push(1).unwrap();
    assert_eq!(stack.len(), 1);
    stack.push(2).unwrap();
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.peek(), Ok(&2));
    assert_eq!(stack.pop(), Ok(2));
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.peek(), Ok(&1));
}

#[test]
fn test_pop_empty_is_precondition_violation() {
    let mut stack: LinkedStack<i64> = LinkedStack::new();
    assert_eq!(
        stack.pop(),
        Err(ContractViolation::Precondition {
            operation: "LinkedStack::pop",
            condition: "stack is not empty",
        })
    );
    assert!(stack.is_empty());
}

#[test]
fn test_generic_stack_usage() {
    fn drain<S: Stack<i64>>(stack: &mut S) -> Vec<i64> {
        let mut out = Vec::new();
        while !stack.is_empty() {
            out.push(stack.pop().unwrap());
        }
        out
    }

    let mut stack = stack_of(&[1, 2, 3]);
    assert_eq!(Stack::size(&stack), 3);
    assert_eq!(drain(&mut stack), vec![3, 2, 1]);
}

#[test]
fn test_deep_copy_keeps_order_and_independence() {
    let stack = stack_of(&[1, 2, 3]);
    let mut copy = Stack::deep_copy(&stack);
    assert_eq!(copy, stack);
    copy.pop().unwrap();
    copy.push(9).unwrap();
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    assert_eq!(copy.iter().copied().collect::<Vec<_>>(), vec![9, 2, 1]);
}

#[test]
fn test_preconditions_only_config_is_kept_by_copy() {
    let mut stack = LinkedStack::with_config(ContractConfig::preconditions_only());
    stack.push(1).unwrap();
    assert_eq!(stack.deep_copy().config(), ContractConfig::preconditions_only());
}

#[test]
fn test_interleaved_pushes_and_pops() {
    let mut stack = LinkedStack::new();
    let mut pushes = 0;
    let mut pops = 0;
    for round in 0..50i64 {
        stack.push(round).unwrap();
        pushes += 1;
        if round % 3 == 0 {
            stack.pop().unwrap();
            pops += 1;
        }
        assert_eq!(stack.len(), pushes - pops);
    }
}
