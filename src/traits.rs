// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Container interfaces.
//!
//! `Stack`, `Queue` and `List` are implemented by [`LinkedStack`],
//! [`LinkedQueue`] and [`LinkedList`]. `BinaryTree` is the target contract for
//! a tree abstraction and has no implementation in this crate; only the
//! free-standing [`merge_trees`](crate::merge_trees) routine exists.
//!
//! [`LinkedStack`]: crate::LinkedStack
//! [`LinkedQueue`]: crate::LinkedQueue
//! [`LinkedList`]: crate::LinkedList

use crate::list::LinkedList;
use crate::node::BinaryNode;
use crate::verify::Result;

/// Last-in, first-out container.
pub trait Stack<T> {
    fn push(&mut self, elem: T) -> Result<()>;

    /// Remove and return the top element. Requires a non-empty stack.
    fn pop(&mut self) -> Result<T>;

    /// The top element. Requires a non-empty stack.
    fn peek(&self) -> Result<&T>;

    fn is_empty(&self) -> bool;

    fn size(&self) -> usize;

    /// Independent copy with the same top-to-bottom order.
    fn deep_copy(&self) -> Self
    where
        Self: Sized,
        T: Clone;
}

/// First-in, first-out container.
pub trait Queue<T> {
    fn enqueue(&mut self, elem: T) -> Result<()>;

    /// Remove and return the front element. Requires a non-empty queue.
    fn dequeue(&mut self) -> Result<T>;

    /// The front element. Requires a non-empty queue.
    fn front(&self) -> Result<&T>;

    fn is_empty(&self) -> bool;

    fn size(&self) -> usize;

    fn deep_copy(&self) -> Self
    where
        Self: Sized,
        T: Clone;
}

/// Positional sequence.
///
/// Access uses the index domain `[0, size)`, insertion `[0, size]`.
pub trait List<T> {
    fn add_first(&mut self, elem: T) -> Result<()>;
    fn add_last(&mut self, elem: T) -> Result<()>;
    fn get_first(&self) -> Result<&T>;
    fn get_last(&self) -> Result<&T>;
    fn remove_first(&mut self) -> Result<T>;
    fn remove_last(&mut self) -> Result<T>;

    fn contains(&self, elem: &T) -> Result<bool>
    where
        T: PartialEq;

    /// Remove the first element equal to `elem`. Returns whether one was found.
    fn remove_elem(&mut self, elem: &T) -> Result<bool>
    where
        T: PartialEq;

    fn clear(&mut self) -> Result<()>;

    fn get(&self, index: usize) -> Result<&T>;

    /// Replace the element at `index`, returning the old one.
    fn set(&mut self, index: usize, elem: T) -> Result<T>;

    fn add(&mut self, index: usize, elem: T) -> Result<()>;
    fn remove(&mut self, index: usize) -> Result<T>;

    fn index_of(&self, elem: &T) -> Result<Option<usize>>
    where
        T: PartialEq;

    fn last_index_of(&self, elem: &T) -> Result<Option<usize>>
    where
        T: PartialEq;

    fn is_empty(&self) -> bool;
    fn size(&self) -> usize;

    fn deep_copy(&self) -> Self
    where
        Self: Sized,
        T: Clone;
}

/// Binary tree abstraction.
///
/// Traversals return their visit order as a [`LinkedList`].
pub trait BinaryTree<T> {
    fn root(&self) -> Option<&BinaryNode<T>>;
    fn left_child(&self) -> Option<&BinaryNode<T>>;
    fn right_child(&self) -> Option<&BinaryNode<T>>;

    fn is_empty(&self) -> bool;
    fn make_empty(&mut self);

    /// Whether the heights of every node's subtrees differ by at most one.
    fn is_balanced(&self) -> bool;

    fn height(&self) -> usize;
    fn size(&self) -> usize;
    fn leaves(&self) -> usize;

    fn preorder(&self) -> LinkedList<T>
    where
        T: Clone;
    fn inorder(&self) -> LinkedList<T>
    where
        T: Clone;
    fn postorder(&self) -> LinkedList<T>
    where
        T: Clone;
    fn levelorder(&self) -> LinkedList<T>
    where
        T: Clone;

    /// Overlay `other` onto `self`; see [`merge_trees`](crate::merge_trees).
    fn merge(&mut self, other: Self)
    where
        Self: Sized;

    fn deep_copy(&self) -> Self
    where
        Self: Sized,
        T: Clone;
}
