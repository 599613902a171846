// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Linked data structures with runtime contracts.
//!
//! Every mutating or reading operation checks its preconditions, its
//! postconditions and the container's structural invariant, and reports any
//! failure as a [`ContractViolation`] instead of corrupting itself.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────────────┐
//! │   arena.rs   │────▶│   node.rs    │────▶│ stack.rs / queue.rs /    │
//! │ (NodeKey,    │     │ (LinkedNode, │     │ list/ (containers)       │
//! │  free list)  │     │  Doubly..)   │     └──────────────────────────┘
//! └──────────────┘     └──────────────┘                  │
//!                                                        ▼
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                           verify/                                 │
//! │  (require / ensure / invariant, ContractConfig, error types)     │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `tree.rs` holds the binary tree merge, which runs without contracts, and
//! `replay.rs` drives any container from a serialized operation script.
//!
//! # Usage
//!
//! ```
//! use catena::{LinkedList, ContractViolation};
//!
//! let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
//! assert_eq!(list.remove_elem(&2), Ok(true));
//! assert_eq!(list.to_string(), "[1, 3]");
//!
//! let err = list.get(5).unwrap_err();
//! assert!(matches!(err, ContractViolation::Precondition { .. }));
//! ```

// Module declarations
mod arena;
pub mod list;
pub mod node;
mod queue;
pub mod replay;
mod stack;
pub mod traits;
pub mod tree;
mod verify;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use arena::NodeKey;
pub use list::{LinkedList, Traversal};
pub use queue::LinkedQueue;
pub use stack::LinkedStack;
pub use traits::{BinaryTree, List, Queue, Stack};
pub use tree::merge_trees;
pub use verify::contracts;
pub use verify::contracts::ContractConfig;
pub use verify::{ContractViolation, InvariantError, Result, TraversalError};
