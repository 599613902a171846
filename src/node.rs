// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Link cells for the containers.
//!
//! | Node               | Links                              | Used by        |
//! |--------------------|------------------------------------|----------------|
//! | `LinkedNode`       | `next` key                         | stack, queue   |
//! | `DoublyLinkedNode` | `next` key, non-owning `prev` key  | list           |
//! | `BinaryNode`       | owned `left` / `right` boxes       | tree merge     |

use crate::arena::{Arena, NodeKey};
use std::iter::FusedIterator;

/// Singly linked cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedNode<T> {
    pub(crate) elem: T,
    pub(crate) next: Option<NodeKey>,
}

impl<T> LinkedNode<T> {
    pub(crate) fn new(elem: T, next: Option<NodeKey>) -> Self {
        Self { elem, next }
    }

    pub fn elem(&self) -> &T {
        &self.elem
    }

    pub fn next(&self) -> Option<NodeKey> {
        self.next
    }
}

/// Borrowing walk along a chain of [`LinkedNode`]s.
///
/// Stops after `remaining` elements even if the chain is longer, so a
/// corrupted cycle cannot make it spin forever.
#[derive(Debug)]
pub struct LinkedIter<'a, T> {
    nodes: &'a Arena<LinkedNode<T>>,
    next: Option<NodeKey>,
    remaining: usize,
}

impl<'a, T> LinkedIter<'a, T> {
    pub(crate) fn new(nodes: &'a Arena<LinkedNode<T>>, start: Option<NodeKey>, len: usize) -> Self {
        Self {
            nodes,
            next: start,
            remaining: len,
        }
    }
}

impl<T> Clone for LinkedIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for LinkedIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.next?)?;
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl<T> FusedIterator for LinkedIter<'_, T> {}

/// Doubly linked cell. `prev` is a back-reference and owns nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoublyLinkedNode<T> {
    pub(crate) elem: T,
    pub(crate) next: Option<NodeKey>,
    pub(crate) prev: Option<NodeKey>,
}

impl<T> DoublyLinkedNode<T> {
    pub(crate) fn new(elem: T, next: Option<NodeKey>, prev: Option<NodeKey>) -> Self {
        Self { elem, next, prev }
    }

    pub fn elem(&self) -> &T {
        &self.elem
    }

    pub fn next(&self) -> Option<NodeKey> {
        self.next
    }

    pub fn prev(&self) -> Option<NodeKey> {
        self.prev
    }
}

/// Owned binary tree cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryNode<T> {
    pub elem: T,
    pub left: Option<Box<BinaryNode<T>>>,
    pub right: Option<Box<BinaryNode<T>>>,
}

impl<T> BinaryNode<T> {
    /// A node without children.
    pub fn leaf(elem: T) -> Box<Self> {
        Box::new(Self {
            elem,
            left: None,
            right: None,
        })
    }

    pub fn with_children(
        elem: T,
        left: Option<Box<BinaryNode<T>>>,
        right: Option<Box<BinaryNode<T>>>,
    ) -> Box<Self> {
        Box::new(Self { elem, left, right })
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
