//! Algebraic laws that must hold for any reachable container state.

use super::common::{
    list_invariant, list_of, queue_invariant, queue_of, stack_invariant, stack_of,
    value_strategy,
};
use catena::LinkedList;
use proptest::prelude::*;

fn values() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(value_strategy(), 0..32)
}

proptest! {
    #[test]
    fn prop_stack_size_is_pushes_minus_pops(pushes in values(), pops in 0usize..40) {
        let mut stack = stack_of(&[]);
        for value in &pushes {
            stack.push(*value).unwrap();
        }
        let mut popped = 0;
        for _ in 0..pops {
            if stack.pop().is_ok() {
                popped += 1;
            }
        }
        prop_assert_eq!(popped, pops.min(pushes.len()));
        prop_assert_eq!(stack.len(), pushes.len() - popped);
        prop_assert_eq!(stack.is_empty(), stack.len() == 0);
        prop_assert!(stack_invariant(&stack).is_ok());
    }

    #[test]
    fn prop_queue_preserves_arrival_order(input in values()) {
        let mut queue = queue_of(&input);
        let mut out = Vec::new();
        while !queue.is_empty() {
            out.push(queue.dequeue().unwrap());
            prop_assert!(queue_invariant(&queue).is_ok());
        }
        prop_assert_eq!(out, input);
    }

    #[test]
    fn prop_add_last_remove_last_is_identity(input in values(), extra in value_strategy()) {
        let mut list = list_of(&input);
        list.add_last(extra).unwrap();
        prop_assert_eq!(list.remove_last(), Ok(extra));
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), input);
        prop_assert!(list_invariant(&list).is_ok());
    }

    #[test]
    fn prop_set_then_get(input in prop::collection::vec(value_strategy(), 1..32), index in any::<prop::sample::Index>(), value in value_strategy()) {
        let mut list = list_of(&input);
        let i = index.index(input.len());
        prop_assert_eq!(list.set(i, value), Ok(input[i]));
        prop_assert_eq!(list.get(i), Ok(&value));
        prop_assert_eq!(list.len(), input.len());
    }

    #[test]
    fn prop_index_of_bounds_last_index_of(input in values(), probe in value_strategy()) {
        let list = list_of(&input);
        let first = list.index_of(&probe).unwrap();
        let last = list.last_index_of(&probe).unwrap();
        match (first, last) {
            (None, None) => prop_assert!(!input.contains(&probe)),
            (Some(f), Some(l)) => {
                prop_assert!(f <= l);
                prop_assert_eq!(input[f], probe);
                prop_assert_eq!(input[l], probe);
                if input.iter().filter(|v| **v == probe).count() == 1 {
                    prop_assert_eq!(f, l);
                }
            }
            _ => prop_assert!(false, "index_of and last_index_of disagree on presence"),
        }
    }

    #[test]
    fn prop_deep_copy_equal_then_independent(input in values(), extra in value_strategy()) {
        let list: LinkedList<i64> = list_of(&input);
        let mut copy = list.deep_copy();
        prop_assert_eq!(&copy, &list);
        copy.add_first(extra).unwrap();
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), input);
        prop_assert!(list_invariant(&copy).is_ok());
    }

    #[test]
    fn prop_invariant_holds_through_positional_edits(
        input in values(),
        edits in prop::collection::vec((any::<prop::sample::Index>(), value_strategy(), any::<bool>()), 0..24),
    ) {
        let mut list = list_of(&input);
        for (index, value, insert) in edits {
            if insert {
                let i = index.index(list.len() + 1);
                list.add(i, value).unwrap();
            } else if !list.is_empty() {
                let i = index.index(list.len());
                list.remove(i).unwrap();
            }
            prop_assert!(list_invariant(&list).is_ok());
            prop_assert_eq!(list.is_empty(), list.len() == 0);
            prop_assert_eq!(list.iter().rev().count(), list.len());
        }
    }

    #[test]
    fn prop_serde_preserves_sequence(input in values()) {
        let list = list_of(&input);
        let json = serde_json::to_string(&list).unwrap();
        let back: Vec<i64> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, input);
    }
}
