// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Slab storage for linked nodes.
//!
//! A container owns one arena; the arena owns every node. Links between nodes
//! are [`NodeKey`]s, so a back-reference is just a key that keeps nothing
//! alive, and no reference cycle can form.
//!
//! Freed slots are reused. A key held past its node's removal may therefore
//! resolve to a different node later. Containers never leak keys to callers
//! except inside a [`Traversal`](crate::Traversal), which re-validates against
//! the modification counter before touching one.

use std::num::NonZeroUsize;

/// Non-zero, 1-based handle to a slot in an [`Arena`].
///
/// `Option<NodeKey>` is the size of a `usize`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(NonZeroUsize);

impl NodeKey {
    /// The 1-based slot number.
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }

    #[inline]
    fn from_slot(slot: usize) -> Self {
        // slot + 1 cannot be zero for any in-memory Vec index
        Self(NonZeroUsize::MIN.saturating_add(slot))
    }

    #[inline]
    fn slot(self) -> usize {
        self.0.get() - 1
    }
}

impl std::fmt::Display for NodeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeKey({})", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Arena<N> {
    slots: Vec<Option<N>>,
    free: Vec<usize>,
    live: usize,
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Arena<N> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Store `node`, reusing a freed slot when one exists.
    pub fn insert(&mut self, node: N) -> NodeKey {
        self.live += 1;
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                NodeKey::from_slot(slot)
            }
            None => {
                self.slots.push(Some(node));
                NodeKey::from_slot(self.slots.len() - 1)
            }
        }
    }

    /// Take the node out of its slot. `None` if the slot is already free.
    pub fn remove(&mut self, key: NodeKey) -> Option<N> {
        let node = self.slots.get_mut(key.slot())?.take()?;
        self.free.push(key.slot());
        self.live -= 1;
        Some(node)
    }

    #[inline]
    pub fn get(&self, key: NodeKey) -> Option<&N> {
        self.slots.get(key.slot())?.as_ref()
    }

    #[inline]
    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut N> {
        self.slots.get_mut(key.slot())?.as_mut()
    }

    /// Number of occupied slots.
    #[inline]
    pub fn live(&self) -> usize {
        self.live
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.live = 0;
    }
}
