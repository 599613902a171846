// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Positional doubly linked list.
//!
//! Nodes live in an arena owned by the list. Forward links and back-references
//! are both [`NodeKey`]s; only the arena keeps nodes alive.
//!
//! ```text
//!  head                               tail
//!    │                                  │
//!    ▼                                  ▼
//! ┌─────┬──▶┌─────┬──▶┌─────┬──▶┌─────┐
//! │  a  │   │  b  │   │  c  │   │  d  ├──▶ ∅
//! └─────┘◀──┴─────┘◀──┴─────┘◀──┴─────┘
//!    ▲
//!    ∅ (prev)
//! ```
//!
//! # Invariant
//!
//! - size 0 ⇔ `head` and `tail` are none
//! - size 1 ⇔ `head == tail`
//! - size ≥ 1 ⇒ `head` has no back-reference and `tail` has no successor
//! - walking forward from `head` visits exactly `size` nodes and ends at `tail`
//! - every forward link is mirrored by its target's back-reference
//!
//! # Modification counter
//!
//! Every structural change (insert, remove, clear) bumps `mod_count`.
//! A [`Traversal`] remembers the count it was created with and refuses to
//! step once the two disagree. `set` replaces a value in place and is not
//! structural.

mod iter;
mod traversal;

pub use iter::{IntoIter, Iter};
pub use traversal::Traversal;

use crate::arena::{Arena, NodeKey};
use crate::node::DoublyLinkedNode;
use crate::traits::List;
use crate::verify::contracts::{broken, require, ContractConfig};
use crate::verify::{InvariantError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

const ADD_FIRST: &str = "LinkedList::add_first";
const ADD_LAST: &str = "LinkedList::add_last";
const GET_FIRST: &str = "LinkedList::get_first";
const GET_LAST: &str = "LinkedList::get_last";
const REMOVE_FIRST: &str = "LinkedList::remove_first";
const REMOVE_LAST: &str = "LinkedList::remove_last";
const CONTAINS: &str = "LinkedList::contains";
const REMOVE_ELEM: &str = "LinkedList::remove_elem";
const CLEAR: &str = "LinkedList::clear";
const GET: &str = "LinkedList::get";
const SET: &str = "LinkedList::set";
const ADD: &str = "LinkedList::add";
const REMOVE: &str = "LinkedList::remove";
const INDEX_OF: &str = "LinkedList::index_of";
const LAST_INDEX_OF: &str = "LinkedList::last_index_of";
const DEEP_COPY: &str = "LinkedList::deep_copy";
const REMOVE_VISITED: &str = "Traversal::remove";

/// Source of list identities, so a traversal handle can tell lists apart.
static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

pub struct LinkedList<T> {
    pub(crate) nodes: Arena<DoublyLinkedNode<T>>,
    pub(crate) head: Option<NodeKey>,
    pub(crate) tail: Option<NodeKey>,
    pub(crate) size: usize,
    pub(crate) mod_count: u64,
    pub(crate) id: u64,
    config: ContractConfig,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self::with_config(ContractConfig::default())
    }

    pub fn with_config(config: ContractConfig) -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
            size: 0,
            mod_count: 0,
            id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
            config,
        }
    }

    pub fn config(&self) -> ContractConfig {
        self.config
    }

    /// Number of structural modifications since construction.
    pub fn modifications(&self) -> u64 {
        self.mod_count
    }

    pub fn add_first(&mut self, elem: T) -> Result<()> {
        let config = self.config;
        config.invariant(ADD_FIRST, || self.check_invariant())?;
        let old_size = self.size;

        let key = self.link_front(elem).map_err(|e| broken(ADD_FIRST, e))?;

        config.ensure(ADD_FIRST, "new node is the head and size grew by one", || {
            self.head == Some(key) && self.size == old_size + 1
        })?;
        config.invariant(ADD_FIRST, || self.check_invariant())
    }

    pub fn add_last(&mut self, elem: T) -> Result<()> {
        let config = self.config;
        config.invariant(ADD_LAST, || self.check_invariant())?;
        let old_size = self.size;

        let key = self.link_back(elem).map_err(|e| broken(ADD_LAST, e))?;

        config.ensure(ADD_LAST, "new node is the tail and size grew by one", || {
            self.tail == Some(key) && self.size == old_size + 1
        })?;
        config.invariant(ADD_LAST, || self.check_invariant())
    }

    pub fn get_first(&self) -> Result<&T> {
        self.config.invariant(GET_FIRST, || self.check_invariant())?;
        require(self.size > 0, GET_FIRST, "list is not empty")?;

        let head = self
            .head
            .ok_or_else(|| broken(GET_FIRST, InvariantError::MissingEnd { end: "head" }))?;
        let elem = &self.node(head).map_err(|e| broken(GET_FIRST, e))?.elem;

        self.config
            .ensure(GET_FIRST, "returned element is the one at index 0", || {
                self.key_at(0).ok() == Some(head)
            })?;
        self.config.invariant(GET_FIRST, || self.check_invariant())?;
        Ok(elem)
    }

    pub fn get_last(&self) -> Result<&T> {
        self.config.invariant(GET_LAST, || self.check_invariant())?;
        require(self.size > 0, GET_LAST, "list is not empty")?;

        let tail = self
            .tail
            .ok_or_else(|| broken(GET_LAST, InvariantError::MissingEnd { end: "tail" }))?;
        let elem = &self.node(tail).map_err(|e| broken(GET_LAST, e))?.elem;

        self.config
            .ensure(GET_LAST, "returned element is the one at index size - 1", || {
                self.key_at(self.size - 1).ok() == Some(tail)
            })?;
        self.config.invariant(GET_LAST, || self.check_invariant())?;
        Ok(elem)
    }

    pub fn remove_first(&mut self) -> Result<T> {
        let config = self.config;
        config.invariant(REMOVE_FIRST, || self.check_invariant())?;
        require(self.size > 0, REMOVE_FIRST, "list is not empty")?;
        let old_size = self.size;

        let head = self
            .head
            .ok_or_else(|| broken(REMOVE_FIRST, InvariantError::MissingEnd { end: "head" }))?;
        let elem = self.unlink(head).map_err(|e| broken(REMOVE_FIRST, e))?;

        config.ensure(REMOVE_FIRST, "size shrank by one", || {
            self.size == old_size - 1
        })?;
        config.invariant(REMOVE_FIRST, || self.check_invariant())?;
        Ok(elem)
    }

    pub fn remove_last(&mut self) -> Result<T> {
        let config = self.config;
        config.invariant(REMOVE_LAST, || self.check_invariant())?;
        require(self.size > 0, REMOVE_LAST, "list is not empty")?;
        let old_size = self.size;

        let tail = self
            .tail
            .ok_or_else(|| broken(REMOVE_LAST, InvariantError::MissingEnd { end: "tail" }))?;
        let elem = self.unlink(tail).map_err(|e| broken(REMOVE_LAST, e))?;

        config.ensure(REMOVE_LAST, "size shrank by one", || {
            self.size == old_size - 1
        })?;
        config.invariant(REMOVE_LAST, || self.check_invariant())?;
        Ok(elem)
    }

    /// Drop every element.
    pub fn clear(&mut self) -> Result<()> {
        let config = self.config;
        config.invariant(CLEAR, || self.check_invariant())?;

        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.size = 0;
        self.mod_count = self.mod_count.wrapping_add(1);

        config.ensure(CLEAR, "list is empty", || self.size == 0)?;
        config.invariant(CLEAR, || self.check_invariant())
    }

    /// Element at `index`, walking from the head.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.config.invariant(GET, || self.check_invariant())?;
        require(index < self.size, GET, "index is within [0, size)")?;

        let key = self.key_at(index).map_err(|e| broken(GET, e))?;
        let elem = &self.node(key).map_err(|e| broken(GET, e))?.elem;

        self.config.invariant(GET, || self.check_invariant())?;
        Ok(elem)
    }

    /// Replace the element at `index` and return the previous one.
    pub fn set(&mut self, index: usize, elem: T) -> Result<T> {
        let config = self.config;
        config.invariant(SET, || self.check_invariant())?;
        require(index < self.size, SET, "index is within [0, size)")?;
        let old_size = self.size;

        let key = self.key_at(index).map_err(|e| broken(SET, e))?;
        let node = self.node_mut(key).map_err(|e| broken(SET, e))?;
        let old = std::mem::replace(&mut node.elem, elem);

        config.ensure(SET, "same node at index and size unchanged", || {
            self.key_at(index).ok() == Some(key) && self.size == old_size
        })?;
        config.invariant(SET, || self.check_invariant())?;
        Ok(old)
    }

    /// Insert `elem` so that it ends up at `index`.
    pub fn add(&mut self, index: usize, elem: T) -> Result<()> {
        let config = self.config;
        config.invariant(ADD, || self.check_invariant())?;
        require(index <= self.size, ADD, "index is within [0, size]")?;
        let old_size = self.size;

        let key = if index == 0 {
            self.add_first(elem)?;
            self.head
        } else if index == self.size {
            self.add_last(elem)?;
            self.tail
        } else {
            let after = self.key_at(index).map_err(|e| broken(ADD, e))?;
            let before = self
                .node(after)
                .map_err(|e| broken(ADD, e))?
                .prev
                .ok_or_else(|| broken(ADD, InvariantError::BrokenBackLink { position: index }))?;
            Some(
                self.link_between(before, after, elem)
                    .map_err(|e| broken(ADD, e))?,
            )
        };

        config.ensure(ADD, "new node is at index and size grew by one", || {
            key.is_some() && self.key_at(index).ok() == key && self.size == old_size + 1
        })?;
        config.invariant(ADD, || self.check_invariant())
    }

    /// Remove and return the element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let config = self.config;
        config.invariant(REMOVE, || self.check_invariant())?;
        require(index < self.size, REMOVE, "index is within [0, size)")?;
        let old_size = self.size;

        let elem = if index == 0 {
            self.remove_first()?
        } else if index == self.size - 1 {
            self.remove_last()?
        } else {
            let key = self.key_at(index).map_err(|e| broken(REMOVE, e))?;
            self.unlink(key).map_err(|e| broken(REMOVE, e))?
        };

        config.ensure(REMOVE, "size shrank by one", || self.size == old_size - 1)?;
        config.invariant(REMOVE, || self.check_invariant())?;
        Ok(elem)
    }

    pub fn is_empty(&self) -> bool {
        self.debug_check();
        self.size == 0
    }

    pub fn len(&self) -> usize {
        self.debug_check();
        self.size
    }

    /// Borrowing iterator from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.head, self.tail, self.size)
    }

    /// Start a fresh traversal at the head.
    ///
    /// The handle does not borrow the list, so the list can still be mutated
    /// while it is live; doing so without going through
    /// [`Traversal::remove`] invalidates it.
    pub fn traverse(&self) -> Traversal {
        Traversal::new(self.id, self.head, self.mod_count)
    }

    /// Independent list with the same sequence, or an empty list if either
    /// side fails its structural check.
    pub fn deep_copy(&self) -> Self
    where
        T: Clone,
    {
        let mut copy = Self::with_config(self.config);
        if let Err(error) = self.check_invariant() {
            tracing::error!(operation = DEEP_COPY, %error, "source is corrupt, returning empty copy");
            return copy;
        }

        for elem in self.iter() {
            if let Err(error) = copy.link_back(elem.clone()) {
                tracing::error!(operation = DEEP_COPY, %error, "copy failed, returning empty copy");
                return Self::with_config(self.config);
            }
        }

        if copy.size != self.size || copy.check_invariant().is_err() {
            tracing::error!(operation = DEEP_COPY, "copy is malformed, returning empty copy");
            return Self::with_config(self.config);
        }
        copy
    }

    /// Contract-checked removal of a specific node, used by [`Traversal`].
    pub(crate) fn remove_node(&mut self, key: NodeKey) -> Result<T> {
        let config = self.config;
        config.invariant(REMOVE_VISITED, || self.check_invariant())?;
        require(
            self.nodes.get(key).is_some(),
            REMOVE_VISITED,
            "visited node is still in the list",
        )?;
        let old_size = self.size;

        let elem = self.unlink(key).map_err(|e| broken(REMOVE_VISITED, e))?;

        config.ensure(REMOVE_VISITED, "size shrank by one", || {
            self.size == old_size - 1
        })?;
        config.invariant(REMOVE_VISITED, || self.check_invariant())?;
        Ok(elem)
    }

    // ------------------------------------------------------------------------
    // Unchecked link surgery. Callers wrap these in the contract protocol.
    // ------------------------------------------------------------------------

    fn link_front(&mut self, elem: T) -> std::result::Result<NodeKey, InvariantError> {
        let key = self.nodes.insert(DoublyLinkedNode::new(elem, self.head, None));
        match self.head {
            Some(old_head) => self.node_mut(old_head)?.prev = Some(key),
            None => self.tail = Some(key),
        }
        self.head = Some(key);
        self.size += 1;
        self.mod_count = self.mod_count.wrapping_add(1);
        Ok(key)
    }

    fn link_back(&mut self, elem: T) -> std::result::Result<NodeKey, InvariantError> {
        let key = self.nodes.insert(DoublyLinkedNode::new(elem, None, self.tail));
        match self.tail {
            Some(old_tail) => self.node_mut(old_tail)?.next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
        self.size += 1;
        self.mod_count = self.mod_count.wrapping_add(1);
        Ok(key)
    }

    fn link_between(
        &mut self,
        before: NodeKey,
        after: NodeKey,
        elem: T,
    ) -> std::result::Result<NodeKey, InvariantError> {
        let key = self
            .nodes
            .insert(DoublyLinkedNode::new(elem, Some(after), Some(before)));
        self.node_mut(before)?.next = Some(key);
        self.node_mut(after)?.prev = Some(key);
        self.size += 1;
        self.mod_count = self.mod_count.wrapping_add(1);
        Ok(key)
    }

    /// Splice `key` out by relinking its neighbours, or moving `head`/`tail`
    /// when it sits at an end.
    fn unlink(&mut self, key: NodeKey) -> std::result::Result<T, InvariantError> {
        let node = self
            .nodes
            .remove(key)
            .ok_or(InvariantError::DanglingLink { key: key.get() })?;
        match node.prev {
            Some(prev) => self.node_mut(prev)?.next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next)?.prev = node.prev,
            None => self.tail = node.prev,
        }
        self.size -= 1;
        self.mod_count = self.mod_count.wrapping_add(1);
        Ok(node.elem)
    }

    fn key_at(&self, index: usize) -> std::result::Result<NodeKey, InvariantError> {
        let mut cursor = self.head;
        for _ in 0..index {
            let key = cursor.ok_or(InvariantError::CountMismatch {
                claimed: self.size,
                counted: index,
            })?;
            cursor = self.node(key)?.next;
        }
        cursor.ok_or(InvariantError::CountMismatch {
            claimed: self.size,
            counted: index,
        })
    }

    fn node(&self, key: NodeKey) -> std::result::Result<&DoublyLinkedNode<T>, InvariantError> {
        self.nodes
            .get(key)
            .ok_or(InvariantError::DanglingLink { key: key.get() })
    }

    fn node_mut(
        &mut self,
        key: NodeKey,
    ) -> std::result::Result<&mut DoublyLinkedNode<T>, InvariantError> {
        self.nodes
            .get_mut(key)
            .ok_or(InvariantError::DanglingLink { key: key.get() })
    }

    pub(crate) fn check_invariant(&self) -> std::result::Result<(), InvariantError> {
        match (self.size, self.head, self.tail) {
            (0, None, None) => return self.check_live(),
            (0, _, _) => return Err(InvariantError::EmptyButLinked),
            (_, None, _) => return Err(InvariantError::MissingEnd { end: "head" }),
            (_, _, None) => return Err(InvariantError::MissingEnd { end: "tail" }),
            (size, Some(head), Some(tail)) => {
                if size == 1 && head != tail {
                    return Err(InvariantError::SingleNotShared);
                }
                if size > 1 && head == tail {
                    return Err(InvariantError::SharedEnds { size });
                }
                if self.node(head)?.prev.is_some() {
                    return Err(InvariantError::HeadHasPredecessor);
                }
                if self.node(tail)?.next.is_some() {
                    return Err(InvariantError::TailHasSuccessor);
                }
            }
        }

        let mut counted = 0;
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(key) = cursor {
            if counted > self.size {
                break;
            }
            let node = self.node(key)?;
            if node.prev != prev {
                return Err(InvariantError::BrokenBackLink { position: counted });
            }
            counted += 1;
            prev = Some(key);
            cursor = node.next;
        }
        if counted != self.size {
            return Err(InvariantError::CountMismatch {
                claimed: self.size,
                counted,
            });
        }
        if prev != self.tail {
            return Err(InvariantError::TailUnreachable);
        }
        self.check_live()
    }

    fn check_live(&self) -> std::result::Result<(), InvariantError> {
        if self.nodes.live() != self.size {
            return Err(InvariantError::ArenaMismatch {
                claimed: self.size,
                live: self.nodes.live(),
            });
        }
        Ok(())
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert!(
            !self.config.invariants || self.check_invariant().is_ok(),
            "Contract violation: LinkedList invariant - {:?}",
            self.check_invariant()
        );
    }
}

impl<T: PartialEq> LinkedList<T> {
    pub fn contains(&self, elem: &T) -> Result<bool> {
        self.config.invariant(CONTAINS, || self.check_invariant())?;

        let found = self.first_match(elem).is_some();

        self.config.invariant(CONTAINS, || self.check_invariant())?;
        Ok(found)
    }

    /// Remove the first element equal to `elem`. No-op when absent.
    ///
    /// Returns whether an element was removed.
    pub fn remove_elem(&mut self, elem: &T) -> Result<bool> {
        let config = self.config;
        config.invariant(REMOVE_ELEM, || self.check_invariant())?;
        let old_size = self.size;

        let found = self.first_match(elem);
        if let Some((_, key)) = found {
            self.unlink(key).map_err(|e| broken(REMOVE_ELEM, e))?;
        }

        config.ensure(
            REMOVE_ELEM,
            "element is absent or size shrank by one",
            || self.first_match(elem).is_none() || self.size + 1 == old_size,
        )?;
        config.invariant(REMOVE_ELEM, || self.check_invariant())?;
        Ok(found.is_some())
    }

    /// Position of the first element equal to `elem`.
    pub fn index_of(&self, elem: &T) -> Result<Option<usize>> {
        self.config.invariant(INDEX_OF, || self.check_invariant())?;

        let index = self.first_match(elem).map(|(index, _)| index);

        self.config
            .ensure(INDEX_OF, "a found index holds an equal element", || {
                index.map_or(true, |i| self.elem_at(i) == Some(elem))
            })?;
        self.config.invariant(INDEX_OF, || self.check_invariant())?;
        Ok(index)
    }

    /// Position of the last element equal to `elem`, scanning back from the tail.
    pub fn last_index_of(&self, elem: &T) -> Result<Option<usize>> {
        self.config
            .invariant(LAST_INDEX_OF, || self.check_invariant())?;

        let mut index = None;
        let mut position = self.size;
        let mut cursor = self.tail;
        while let Some(key) = cursor {
            if position == 0 {
                break;
            }
            position -= 1;
            let node = self.node(key).map_err(|e| broken(LAST_INDEX_OF, e))?;
            if node.elem == *elem {
                index = Some(position);
                break;
            }
            cursor = node.prev;
        }

        self.config.ensure(
            LAST_INDEX_OF,
            "not found, or contained and not before the first index",
            || match index {
                None => true,
                Some(last) => self
                    .first_match(elem)
                    .is_some_and(|(first, _)| last >= first),
            },
        )?;
        self.config
            .invariant(LAST_INDEX_OF, || self.check_invariant())?;
        Ok(index)
    }

    fn first_match(&self, elem: &T) -> Option<(usize, NodeKey)> {
        let mut cursor = self.head;
        let mut position = 0;
        while let Some(key) = cursor {
            if position >= self.size {
                return None;
            }
            let node = self.nodes.get(key)?;
            if node.elem == *elem {
                return Some((position, key));
            }
            position += 1;
            cursor = node.next;
        }
        None
    }

    fn elem_at(&self, index: usize) -> Option<&T> {
        let key = self.key_at(index).ok()?;
        self.nodes.get(key).map(|node| &node.elem)
    }
}

impl<T> List<T> for LinkedList<T> {
    fn add_first(&mut self, elem: T) -> Result<()> {
        LinkedList::add_first(self, elem)
    }

    fn add_last(&mut self, elem: T) -> Result<()> {
        LinkedList::add_last(self, elem)
    }

    fn get_first(&self) -> Result<&T> {
        LinkedList::get_first(self)
    }

    fn get_last(&self) -> Result<&T> {
        LinkedList::get_last(self)
    }

    fn remove_first(&mut self) -> Result<T> {
        LinkedList::remove_first(self)
    }

    fn remove_last(&mut self) -> Result<T> {
        LinkedList::remove_last(self)
    }

    fn contains(&self, elem: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        LinkedList::contains(self, elem)
    }

    fn remove_elem(&mut self, elem: &T) -> Result<bool>
    where
        T: PartialEq,
    {
        LinkedList::remove_elem(self, elem)
    }

    fn clear(&mut self) -> Result<()> {
        LinkedList::clear(self)
    }

    fn get(&self, index: usize) -> Result<&T> {
        LinkedList::get(self, index)
    }

    fn set(&mut self, index: usize, elem: T) -> Result<T> {
        LinkedList::set(self, index, elem)
    }

    fn add(&mut self, index: usize, elem: T) -> Result<()> {
        LinkedList::add(self, index, elem)
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        LinkedList::remove(self, index)
    }

    fn index_of(&self, elem: &T) -> Result<Option<usize>>
    where
        T: PartialEq,
    {
        LinkedList::index_of(self, elem)
    }

    fn last_index_of(&self, elem: &T) -> Result<Option<usize>>
    where
        T: PartialEq,
    {
        LinkedList::last_index_of(self, elem)
    }

    fn is_empty(&self) -> bool {
        LinkedList::is_empty(self)
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn deep_copy(&self) -> Self
    where
        T: Clone,
    {
        LinkedList::deep_copy(self)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.deep_copy()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        for elem in self.iter() {
            elem.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, elem) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", elem)?;
        }
        write!(f, "]")
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            if let Err(error) = self.link_back(elem) {
                tracing::error!(operation = "LinkedList::extend", %error, "stopped extending");
                break;
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<T: Serialize> Serialize for LinkedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for LinkedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let elems = Vec::<T>::deserialize(deserializer)?;
        Ok(elems.into_iter().collect())
    }
}
