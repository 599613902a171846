// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structural merge of two binary trees.
//!
//! Where both trees have a node, the second tree's value wins and the first
//! tree's node is reused. Where only one tree has a node, that whole subtree
//! is taken as is.
//!
//! ```text
//!        1              4                4
//!       / \            / \              / \
//!      2   3     +    1   7     =>     1   7
//!     / \   \        /   / \          / \  / \
//!    4   5   6      3   2   6        3  5 2   6
//! ```

use crate::node::BinaryNode;

pub type Tree<T> = Option<Box<BinaryNode<T>>>;

/// Merge `t2` into `t1` and return the merged root.
pub fn merge_trees<T>(t1: Tree<T>, t2: Tree<T>) -> Tree<T> {
    match (t1, t2) {
        (None, other) | (other, None) => other,
        (Some(mut left), Some(right)) => {
            let BinaryNode {
                elem,
                left: right_left,
                right: right_right,
            } = *right;
            left.elem = elem;
            left.left = merge_trees(left.left.take(), right_left);
            left.right = merge_trees(left.right.take(), right_right);
            Some(left)
        }
    }
}

/// Values in left, root, right order.
pub fn inorder<T>(root: &Tree<T>) -> Vec<&T> {
    let mut out = Vec::new();
    let mut pending: Vec<&BinaryNode<T>> = Vec::new();
    let mut cursor = root.as_deref();

    while cursor.is_some() || !pending.is_empty() {
        while let Some(node) = cursor {
            pending.push(node);
            cursor = node.left.as_deref();
        }
        if let Some(node) = pending.pop() {
            out.push(&node.elem);
            cursor = node.right.as_deref();
        }
    }
    out
}

/// First tree of the `merge` demonstration.
pub fn demo_left() -> Tree<i32> {
    Some(BinaryNode::with_children(
        1,
        Some(BinaryNode::with_children(
            2,
            Some(BinaryNode::leaf(4)),
            Some(BinaryNode::leaf(5)),
        )),
        Some(BinaryNode::with_children(3, None, Some(BinaryNode::leaf(6)))),
    ))
}

/// Second tree of the `merge` demonstration.
pub fn demo_right() -> Tree<i32> {
    Some(BinaryNode::with_children(
        4,
        Some(BinaryNode::with_children(1, Some(BinaryNode::leaf(3)), None)),
        Some(BinaryNode::with_children(
            7,
            Some(BinaryNode::leaf(2)),
            Some(BinaryNode::leaf(6)),
        )),
    ))
}
