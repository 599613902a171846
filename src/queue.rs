// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! FIFO queue over singly linked nodes with head and tail links.
//!
//! ```text
//!  first                         last
//!    │                             │
//!    ▼                             ▼
//! ┌─────┐   ┌─────┐   ┌─────┐   ┌─────┐
//! │  1  ├──▶│  2  ├──▶│  3  ├──▶│  4  ├──▶ ∅
//! └─────┘   └─────┘   └─────┘   └─────┘
//! ```
//!
//! # Invariant
//!
//! - size 0 ⇔ `first` and `last` are both none
//! - size 1 ⇔ `first == last` and it has no successor
//! - size ≥ 2 ⇔ `first != last`, `first` has a successor, `last` has none,
//!   exactly `size` nodes are reachable, and the walk ends at `last`

use crate::arena::{Arena, NodeKey};
use crate::node::{LinkedIter, LinkedNode};
use crate::traits::Queue;
use crate::verify::contracts::{broken, require, ContractConfig};
use crate::verify::{InvariantError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

const ENQUEUE: &str = "LinkedQueue::enqueue";
const DEQUEUE: &str = "LinkedQueue::dequeue";
const FRONT: &str = "LinkedQueue::front";
const DEEP_COPY: &str = "LinkedQueue::deep_copy";

pub struct LinkedQueue<T> {
    pub(crate) nodes: Arena<LinkedNode<T>>,
    pub(crate) first: Option<NodeKey>,
    pub(crate) last: Option<NodeKey>,
    pub(crate) size: usize,
    config: ContractConfig,
}

impl<T> LinkedQueue<T> {
    pub fn new() -> Self {
        Self::with_config(ContractConfig::default())
    }

    pub fn with_config(config: ContractConfig) -> Self {
        Self {
            nodes: Arena::new(),
            first: None,
            last: None,
            size: 0,
            config,
        }
    }

    pub fn config(&self) -> ContractConfig {
        self.config
    }

    /// Append `elem` behind the current last element.
    pub fn enqueue(&mut self, elem: T) -> Result<()> {
        let config = self.config;
        config.invariant(ENQUEUE, || self.check_invariant())?;
        let old_size = self.size;

        let key = self.link_back(elem).map_err(|error| broken(ENQUEUE, error))?;

        config.ensure(
            ENQUEUE,
            "a sole element is the front and size grew by one",
            || (self.size != 1 || self.first == Some(key)) && self.size == old_size + 1,
        )?;
        config.invariant(ENQUEUE, || self.check_invariant())
    }

    /// Remove and return the front element.
    pub fn dequeue(&mut self) -> Result<T> {
        let config = self.config;
        config.invariant(DEQUEUE, || self.check_invariant())?;
        require(self.size > 0, DEQUEUE, "queue is not empty")?;
        let old_size = self.size;

        let first = self
            .first
            .ok_or_else(|| broken(DEQUEUE, InvariantError::MissingEnd { end: "first" }))?;
        let node = self
            .nodes
            .remove(first)
            .ok_or_else(|| broken(DEQUEUE, InvariantError::DanglingLink { key: first.get() }))?;
        self.first = node.next;
        self.size -= 1;
        if self.size == 0 {
            self.last = None;
        }

        config.ensure(DEQUEUE, "size shrank by one", || self.size == old_size - 1)?;
        config.invariant(DEQUEUE, || self.check_invariant())?;
        Ok(node.elem)
    }

    /// The front element, without removing it.
    pub fn front(&self) -> Result<&T> {
        self.config.invariant(FRONT, || self.check_invariant())?;
        require(self.size > 0, FRONT, "queue is not empty")?;

        let first = self
            .first
            .ok_or_else(|| broken(FRONT, InvariantError::MissingEnd { end: "first" }))?;
        let node = self
            .nodes
            .get(first)
            .ok_or_else(|| broken(FRONT, InvariantError::DanglingLink { key: first.get() }))?;

        self.config.invariant(FRONT, || self.check_invariant())?;
        Ok(&node.elem)
    }

    pub fn is_empty(&self) -> bool {
        self.debug_check();
        self.size == 0
    }

    pub fn len(&self) -> usize {
        self.debug_check();
        self.size
    }

    /// Elements from front to back.
    pub fn iter(&self) -> LinkedIter<'_, T> {
        LinkedIter::new(&self.nodes, self.first, self.size)
    }

    /// Independent queue with the same front-to-back order, or an empty queue
    /// if either side fails its structural check.
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

    /// Unchecked append shared by `enqueue`, `deep_copy` and `FromIterator`.
    fn link_back(&mut self, elem: T) -> std::result::Result<NodeKey, InvariantError> {
        let key = self.nodes.insert(LinkedNode::new(elem, None));
        match self.last {
            Some(last) if self.size > 0 => {
                self.nodes
                    .get_mut(last)
                    .ok_or(InvariantError::DanglingLink { key: last.get() })?
                    .next = Some(key);
            }
            _ => self.first = Some(key),
        }
        self.last = Some(key);
        self.size += 1;
        Ok(key)
    }

    pub(crate) fn check_invariant(&self) -> std::result::Result<(), InvariantError> {
        match (self.size, self.first, self.last) {
            (0, None, None) => return self.check_live(),
            (0, _, _) => return Err(InvariantError::EmptyButLinked),
            (_, None, _) => return Err(InvariantError::MissingEnd { end: "first" }),
            (_, _, None) => return Err(InvariantError::MissingEnd { end: "last" }),
            (1, Some(first), Some(last)) => {
                if first != last {
                    return Err(InvariantError::SingleNotShared);
                }
                if self.node(first)?.next.is_some() {
                    return Err(InvariantError::SingleWithSuccessor);
                }
                return self.check_live();
            }
            (size, Some(first), Some(last)) => {
                if first == last {
                    return Err(InvariantError::SharedEnds { size });
                }
                if self.node(first)?.next.is_none() {
                    return Err(InvariantError::MissingSuccessor { size });
                }
                if self.node(last)?.next.is_some() {
                    return Err(InvariantError::TailHasSuccessor);
                }
            }
        }

        let mut counted = 0;
        let mut end = None;
        let mut cursor = self.first;
        while let Some(key) = cursor {
            if counted > self.size {
                break;
            }
            counted += 1;
            end = Some(key);
            cursor = self.node(key)?.next;
        }
        if counted != self.size {
            return Err(InvariantError::CountMismatch {
                claimed: self.size,
                counted,
            });
        }
        if end != self.last {
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

    fn node(&self, key: NodeKey) -> std::result::Result<&LinkedNode<T>, InvariantError> {
        self.nodes
            .get(key)
            .ok_or(InvariantError::DanglingLink { key: key.get() })
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert!(
            !self.config.invariants || self.check_invariant().is_ok(),
            "Contract violation: LinkedQueue invariant - {:?}",
            self.check_invariant()
        );
    }
}

impl<T> Queue<T> for LinkedQueue<T> {
    fn enqueue(&mut self, elem: T) -> Result<()> {
        LinkedQueue::enqueue(self, elem)
    }

    fn dequeue(&mut self) -> Result<T> {
        LinkedQueue::dequeue(self)
    }

    fn front(&self) -> Result<&T> {
        LinkedQueue::front(self)
    }

    fn is_empty(&self) -> bool {
        LinkedQueue::is_empty(self)
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn deep_copy(&self) -> Self
    where
        T: Clone,
    {
        LinkedQueue::deep_copy(self)
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedQueue<T> {
    fn clone(&self) -> Self {
        self.deep_copy()
    }
}

impl<T: PartialEq> PartialEq for LinkedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedQueue<T> {}

impl<T: Hash> Hash for LinkedQueue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        for elem in self.iter() {
            elem.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedQueue<T> {
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

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        for elem in iter {
            // A fresh queue has no links to dangle.
            let _ = queue.link_back(elem);
        }
        queue
    }
}

/// Serialized front to back.
impl<T: Serialize> Serialize for LinkedQueue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for LinkedQueue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let elems = Vec::<T>::deserialize(deserializer)?;
        Ok(elems.into_iter().collect())
    }
}
