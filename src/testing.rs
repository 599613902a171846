// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. The helpers
//! reach into container internals to simulate corruption, which no public
//! operation can produce.

#![doc(hidden)]

use crate::list::LinkedList;
use crate::queue::LinkedQueue;
use crate::stack::LinkedStack;
use crate::verify::InvariantError;

/// Overwrite the stored size without touching the chain.
pub fn corrupt_stack_size<T>(stack: &mut LinkedStack<T>, size: usize) {
    stack.size = size;
}

pub fn corrupt_queue_size<T>(queue: &mut LinkedQueue<T>, size: usize) {
    queue.size = size;
}

pub fn corrupt_list_size<T>(list: &mut LinkedList<T>, size: usize) {
    list.size = size;
}

/// Clear the back-reference of the node at `index`.
///
/// Returns false when `index` is out of range.
pub fn sever_back_link<T>(list: &mut LinkedList<T>, index: usize) -> bool {
    let mut cursor = list.head;
    for _ in 0..index {
        cursor = cursor.and_then(|key| list.nodes.get(key)).and_then(|node| node.next);
    }
    match cursor.and_then(|key| list.nodes.get_mut(key)) {
        Some(node) => {
            node.prev = None;
            true
        }
        None => false,
    }
}

/// Point the queue's tail at its head, detaching the real tail.
pub fn misplace_queue_tail<T>(queue: &mut LinkedQueue<T>) {
    queue.last = queue.first;
}

pub fn stack_invariant<T>(stack: &LinkedStack<T>) -> Result<(), InvariantError> {
    stack.check_invariant()
}

pub fn queue_invariant<T>(queue: &LinkedQueue<T>) -> Result<(), InvariantError> {
    queue.check_invariant()
}

pub fn list_invariant<T>(list: &LinkedList<T>) -> Result<(), InvariantError> {
    list.check_invariant()
}
