// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! LIFO stack over singly linked nodes.
//!
//! ```text
//!   top
//!    │
//!    ▼
//! ┌─────┐   ┌─────┐   ┌─────┐
//! │  3  ├──▶│  2  ├──▶│  1  ├──▶ ∅
//! └─────┘   └─────┘   └─────┘
//! ```
//!
//! # Invariant
//!
//! - size 0 ⇔ `top` is none
//! - size 1 ⇔ `top` exists and has no successor
//! - size ≥ 2 ⇔ `top` exists and has a successor
//! - exactly `size` nodes are reachable from `top`

use crate::arena::{Arena, NodeKey};
use crate::node::{LinkedIter, LinkedNode};
use crate::traits::Stack;
use crate::verify::contracts::{broken, require, ContractConfig};
use crate::verify::{InvariantError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

const PUSH: &str = "LinkedStack::push";
const POP: &str = "LinkedStack::pop";
const PEEK: &str = "LinkedStack::peek";
const DEEP_COPY: &str = "LinkedStack::deep_copy";

pub struct LinkedStack<T> {
    pub(crate) nodes: Arena<LinkedNode<T>>,
    pub(crate) top: Option<NodeKey>,
    pub(crate) size: usize,
    config: ContractConfig,
}

impl<T> LinkedStack<T> {
    /// An empty stack with every contract check enabled.
    pub fn new() -> Self {
        Self::with_config(ContractConfig::default())
    }

    pub fn with_config(config: ContractConfig) -> Self {
        Self {
            nodes: Arena::new(),
            top: None,
            size: 0,
            config,
        }
    }

    pub fn config(&self) -> ContractConfig {
        self.config
    }

    pub fn push(&mut self, elem: T) -> Result<()> {
        let config = self.config;
        config.invariant(PUSH, || self.check_invariant())?;
        let old_size = self.size;

        let key = self.nodes.insert(LinkedNode::new(elem, self.top));
        self.top = Some(key);
        self.size += 1;

        config.ensure(PUSH, "new node is on top and size grew by one", || {
            self.top == Some(key) && self.size != 0 && self.size == old_size + 1
        })?;
        config.invariant(PUSH, || self.check_invariant())
    }

    /// Remove and return the top element.
    pub fn pop(&mut self) -> Result<T> {
        let config = self.config;
        config.invariant(POP, || self.check_invariant())?;
        require(self.size > 0, POP, "stack is not empty")?;
        let old_size = self.size;

        let top = self
            .top
            .ok_or_else(|| broken(POP, InvariantError::MissingEnd { end: "top" }))?;
        let node = self
            .nodes
            .remove(top)
            .ok_or_else(|| broken(POP, InvariantError::DanglingLink { key: top.get() }))?;
        self.top = node.next;
        self.size -= 1;

        config.ensure(POP, "size shrank by one", || self.size == old_size - 1)?;
        config.invariant(POP, || self.check_invariant())?;
        Ok(node.elem)
    }

    /// The top element, without removing it.
    pub fn peek(&self) -> Result<&T> {
        self.config.invariant(PEEK, || self.check_invariant())?;
        require(self.size > 0, PEEK, "stack is not empty")?;

        let top = self
            .top
            .ok_or_else(|| broken(PEEK, InvariantError::MissingEnd { end: "top" }))?;
        let node = self
            .nodes
            .get(top)
            .ok_or_else(|| broken(PEEK, InvariantError::DanglingLink { key: top.get() }))?;

        self.config.invariant(PEEK, || self.check_invariant())?;
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

    /// Elements from top to bottom.
    pub fn iter(&self) -> LinkedIter<'_, T> {
        LinkedIter::new(&self.nodes, self.top, self.size)
    }

    /// Independent stack with the same top-to-bottom order.
    ///
    /// Builds a fresh chain node by node. If the source or the copy fails its
    /// structural check the result is an empty stack.
    pub fn deep_copy(&self) -> Self
    where
        T: Clone,
    {
        let mut copy = Self::with_config(self.config);
        if let Err(error) = self.check_invariant() {
            tracing::error!(operation = DEEP_COPY, %error, "source is corrupt, returning empty copy");
            return copy;
        }

        let mut prev: Option<NodeKey> = None;
        for elem in self.iter() {
            let key = copy.nodes.insert(LinkedNode::new(elem.clone(), None));
            match prev.and_then(|p| copy.nodes.get_mut(p)) {
                Some(prev_node) => prev_node.next = Some(key),
                None => copy.top = Some(key),
            }
            prev = Some(key);
            copy.size += 1;
        }

        if copy.size != self.size || copy.check_invariant().is_err() {
            tracing::error!(operation = DEEP_COPY, "copy is malformed, returning empty copy");
            return Self::with_config(self.config);
        }
        copy
    }

    pub(crate) fn check_invariant(&self) -> std::result::Result<(), InvariantError> {
        match (self.size, self.top) {
            (0, None) => {}
            (0, Some(_)) => return Err(InvariantError::EmptyButLinked),
            (_, None) => return Err(InvariantError::MissingEnd { end: "top" }),
            (1, Some(top)) => {
                if self.node(top)?.next.is_some() {
                    return Err(InvariantError::SingleWithSuccessor);
                }
            }
            (size, Some(top)) => {
                if self.node(top)?.next.is_none() {
                    return Err(InvariantError::MissingSuccessor { size });
                }
            }
        }

        let mut counted = 0;
        let mut cursor = self.top;
        while let Some(key) = cursor {
            if counted > self.size {
                break;
            }
            counted += 1;
            cursor = self.node(key)?.next;
        }
        if counted != self.size {
            return Err(InvariantError::CountMismatch {
                claimed: self.size,
                counted,
            });
        }
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
            "Contract violation: LinkedStack invariant - {:?}",
            self.check_invariant()
        );
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn push(&mut self, elem: T) -> Result<()> {
        LinkedStack::push(self, elem)
    }

    fn pop(&mut self) -> Result<T> {
        LinkedStack::pop(self)
    }

    fn peek(&self) -> Result<&T> {
        LinkedStack::peek(self)
    }

    fn is_empty(&self) -> bool {
        LinkedStack::is_empty(self)
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn deep_copy(&self) -> Self
    where
        T: Clone,
    {
        LinkedStack::deep_copy(self)
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedStack<T> {
    fn clone(&self) -> Self {
        self.deep_copy()
    }
}

impl<T: PartialEq> PartialEq for LinkedStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedStack<T> {}

impl<T: Hash> Hash for LinkedStack<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        for elem in self.iter() {
            elem.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedStack<T> {
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

/// Pushes in iteration order, so the last item ends up on top.
impl<T> FromIterator<T> for LinkedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::with_config(ContractConfig::preconditions_only());
        for elem in iter {
            let key = stack.nodes.insert(LinkedNode::new(elem, stack.top));
            stack.top = Some(key);
            stack.size += 1;
        }
        stack.config = ContractConfig::default();
        stack
    }
}

/// Serialized top to bottom.
impl<T: Serialize> Serialize for LinkedStack<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for LinkedStack<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let elems = Vec::<T>::deserialize(deserializer)?;
        Ok(elems.into_iter().rev().collect())
    }
}
