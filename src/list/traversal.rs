// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fail-fast forward traversal with removal.
//!
//! A [`Traversal`] is a detached cursor: it holds keys, not a borrow, and is
//! handed the list on every step. That lets the caller remove the element it
//! just visited through the handle while still catching any other structural
//! change made behind its back.
//!
//! ```text
//!   next() ──▶ last_visited = node, cursor = node.next, index += 1
//!   remove() ─▶ unlink last_visited, index -= 1, resync expected count
//!   any other insert/remove on the list ─▶ ConcurrentModification
//! ```

use super::LinkedList;
use crate::arena::NodeKey;
use crate::verify::contracts::broken;
use crate::verify::{InvariantError, TraversalError};

const NEXT: &str = "Traversal::next";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    list_id: u64,
    cursor: Option<NodeKey>,
    last_visited: Option<NodeKey>,
    expected_mod_count: u64,
    index: usize,
}

impl Traversal {
    pub(super) fn new(list_id: u64, head: Option<NodeKey>, mod_count: u64) -> Self {
        Self {
            list_id,
            cursor: head,
            last_visited: None,
            expected_mod_count: mod_count,
            index: 0,
        }
    }

    /// Position of the element the next call to [`next`](Self::next) yields.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn has_next<T>(&self, list: &LinkedList<T>) -> Result<bool, TraversalError> {
        self.check(list)?;
        Ok(self.index < list.size)
    }

    pub fn next<'a, T>(&mut self, list: &'a LinkedList<T>) -> Result<&'a T, TraversalError> {
        if !self.has_next(list)? {
            return Err(TraversalError::NoSuchElement);
        }
        let key = self
            .cursor
            .ok_or_else(|| broken(NEXT, InvariantError::CountMismatch {
                claimed: list.size,
                counted: self.index,
            }))?;
        let node = list
            .nodes
            .get(key)
            .ok_or_else(|| broken(NEXT, InvariantError::DanglingLink { key: key.get() }))?;

        self.last_visited = Some(key);
        self.cursor = node.next;
        self.index += 1;
        Ok(&node.elem)
    }

    /// Remove the element returned by the last call to [`next`](Self::next).
    ///
    /// The removal goes through the list's own contract protocol. Afterwards
    /// the handle adopts the list's new modification count, so traversal can
    /// continue.
    pub fn remove<T>(&mut self, list: &mut LinkedList<T>) -> Result<T, TraversalError> {
        self.check(list)?;
        let key = self.last_visited.take().ok_or(TraversalError::IllegalState)?;

        let elem = list.remove_node(key)?;

        self.index -= 1;
        self.expected_mod_count = list.mod_count;
        Ok(elem)
    }

    fn check<T>(&self, list: &LinkedList<T>) -> Result<(), TraversalError> {
        if list.id != self.list_id {
            return Err(TraversalError::ForeignList);
        }
        if list.mod_count != self.expected_mod_count {
            tracing::debug!(
                expected = self.expected_mod_count,
                found = list.mod_count,
                "traversal invalidated"
            );
            return Err(TraversalError::ConcurrentModification {
                expected: self.expected_mod_count,
                found: list.mod_count,
            });
        }
        Ok(())
    }
}
