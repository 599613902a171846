//! LinkedList positional operations.

use super::common::{contents, list_of};
use catena::{ContractViolation, LinkedList, List};

#[test]
fn test_remove_by_value_scenario() {
    let mut list = LinkedList::new();
    for value in [1, 2, 3] {
        list.add_last(value).unwrap();
    }
    assert_eq!(list.remove_elem(&2), Ok(true));
    assert_eq!(contents(&list), vec![1, 3]);
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0), Ok(&1));
    assert_eq!(list.index_of(&3), Ok(Some(1)));
}

#[test]
fn test_add_last_then_remove_last_restores_list() {
    let mut list = list_of(&[4, 5, 6]);
    let before = contents(&list);
    list.add_last(7).unwrap();
    assert_eq!(list.remove_last(), Ok(7));
    assert_eq!(contents(&list), before);
}

#[test]
fn test_set_then_get_at_every_index() {
    let mut list = list_of(&[0, 0, 0, 0]);
    for i in 0..list.len() {
        list.set(i, i as i64 * 10).unwrap();
        assert_eq!(list.get(i), Ok(&(i as i64 * 10)));
    }
    assert_eq!(contents(&list), vec![0, 10, 20, 30]);
}

#[test]
fn test_single_occurrence_index_agreement() {
    let list = list_of(&[3, 8, 1, 9]);
    for value in [3, 8, 1, 9] {
        assert_eq!(list.index_of(&value), list.last_index_of(&value));
    }
    assert_eq!(list.index_of(&42), Ok(None));
    assert_eq!(list.last_index_of(&42), Ok(None));
}

#[test]
fn test_index_domains() {
    let mut list = list_of(&[1, 2]);
    assert!(list.add(2, 3).is_ok());
    assert!(matches!(
        list.add(4, 0),
        Err(ContractViolation::Precondition { operation: "LinkedList::add", .. })
    ));
    assert!(matches!(
        list.get(3),
        Err(ContractViolation::Precondition { operation: "LinkedList::get", .. })
    ));
    assert!(matches!(
        list.remove(3),
        Err(ContractViolation::Precondition { operation: "LinkedList::remove", .. })
    ));
    assert_eq!(contents(&list), vec![1, 2, 3]);
}

#[test]
fn test_ends_track_mutations() {
    let mut list = LinkedList::new();
    list.add_first(2).unwrap();
    list.add_first(1).unwrap();
    list.add_last(3).unwrap();
    assert_eq!(list.get_first(), Ok(&1));
    assert_eq!(list.get_last(), Ok(&3));
    assert_eq!(list.remove_first(), Ok(1));
    assert_eq!(list.remove_last(), Ok(3));
    assert_eq!(list.get_first(), Ok(&2));
    assert_eq!(list.get_last(), Ok(&2));
}

#[test]
fn test_contains_after_removals() {
    let mut list = list_of(&[5, 5, 6]);
    assert_eq!(list.contains(&5), Ok(true));
    assert_eq!(list.remove_elem(&5), Ok(true));
    assert_eq!(list.contains(&5), Ok(true));
    assert_eq!(list.remove_elem(&5), Ok(true));
    assert_eq!(list.contains(&5), Ok(false));
    assert_eq!(contents(&list), vec![6]);
}

#[test]
fn test_list_trait_generic_usage() {
    fn reverse_into<L: List<i64>>(list: &mut L, values: &[i64]) {
        for value in values {
            list.add_first(*value).unwrap();
        }
    }

    let mut list = LinkedList::new();
    reverse_into(&mut list, &[1, 2, 3]);
    assert_eq!(contents(&list), vec![3, 2, 1]);
    assert_eq!(List::size(&list), 3);
}

#[test]
fn test_deep_copy_and_clone_agree() {
    let list = list_of(&[1, 2, 3]);
    let copy = list.deep_copy();
    let cloned = list.clone();
    assert_eq!(copy, cloned);
    assert_eq!(copy, list);
}

#[test]
fn test_extend_and_reverse_iteration() {
    let mut list = list_of(&[1]);
    list.extend([2, 3]);
    assert_eq!(
        list.iter().rev().copied().collect::<Vec<_>>(),
        vec![3, 2, 1]
    );
    assert_eq!((&list).into_iter().len(), 3);
}

#[test]
fn test_hash_matches_for_equal_lists() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(list: &LinkedList<i64>) -> u64 {
        let mut hasher = DefaultHasher::new();
        list.hash(&mut hasher);
        hasher.finish()
    }

    let a = list_of(&[1, 2, 3]);
    let b = a.deep_copy();
    assert_eq!(hash_of(&a), hash_of(&b));
}
