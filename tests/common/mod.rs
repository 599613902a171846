//! Shared test utilities and fixtures.

#![allow(dead_code)]

use catena::replay::{Op, Script};
use catena::{LinkedList, LinkedQueue, LinkedStack};
use proptest::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

// Re-export canonical corruption helpers from catena::testing
pub use catena::testing::{
    corrupt_list_size, corrupt_queue_size, corrupt_stack_size, list_invariant,
    misplace_queue_tail, queue_invariant, sever_back_link, stack_invariant,
};

// ============================================================================
// BUILDERS
// ============================================================================

pub fn list_of(values: &[i64]) -> LinkedList<i64> {
    values.iter().copied().collect()
}

pub fn queue_of(values: &[i64]) -> LinkedQueue<i64> {
    values.iter().copied().collect()
}

/// Stack with `values` pushed in order, so the last value is on top.
pub fn stack_of(values: &[i64]) -> LinkedStack<i64> {
    values.iter().copied().collect()
}

pub fn contents(list: &LinkedList<i64>) -> Vec<i64> {
    list.iter().copied().collect()
}

/// Write `script` to a temporary JSON file that lives as long as the handle.
pub fn script_file(script: &Script) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    let json = serde_json::to_string(script).expect("Failed to encode script");
    file.write_all(json.as_bytes())
        .expect("Failed to write script");
    file
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small values so that duplicates and membership hits are common.
pub fn value_strategy() -> impl Strategy<Value = i64> {
    -4i64..8
}

/// Indices slightly past any size the generated sequences reach, so the
/// out-of-range paths get exercised too.
pub fn index_strategy() -> impl Strategy<Value = usize> {
    0usize..24
}

pub fn list_op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        value_strategy().prop_map(|value| Op::AddFirst { value }),
        value_strategy().prop_map(|value| Op::AddLast { value }),
        (index_strategy(), value_strategy()).prop_map(|(index, value)| Op::Add { index, value }),
        index_strategy().prop_map(|index| Op::Get { index }),
        (index_strategy(), value_strategy()).prop_map(|(index, value)| Op::Set { index, value }),
        index_strategy().prop_map(|index| Op::Remove { index }),
        value_strategy().prop_map(|value| Op::RemoveElem { value }),
        Just(Op::RemoveFirst),
        Just(Op::RemoveLast),
        Just(Op::GetFirst),
        Just(Op::GetLast),
        value_strategy().prop_map(|value| Op::Contains { value }),
        value_strategy().prop_map(|value| Op::IndexOf { value }),
        value_strategy().prop_map(|value| Op::LastIndexOf { value }),
        Just(Op::Clear),
        Just(Op::Len),
    ]
}

pub fn stack_op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => value_strategy().prop_map(|value| Op::Push { value }),
        2 => Just(Op::Pop),
        1 => Just(Op::Peek),
        1 => Just(Op::Len),
    ]
}

pub fn queue_op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => value_strategy().prop_map(|value| Op::Enqueue { value }),
        2 => Just(Op::Dequeue),
        1 => Just(Op::Front),
        1 => Just(Op::Len),
    ]
}
