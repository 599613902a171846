// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for contract and traversal failures.
//!
//! Three tiers for contracts, mirroring where in an operation the check runs:
//!
//! | Variant                           | Raised                     | Container state     |
//! |-----------------------------------|----------------------------|---------------------|
//! | `ContractViolation::Precondition` | before the mutation        | unchanged           |
//! | `ContractViolation::Postcondition`| after the mutation         | already changed     |
//! | `ContractViolation::Invariant`    | at entry or exit           | corrupt             |
//!
//! Traversal failures live in their own enum. A stale cursor is a caller
//! problem, not a broken container.

use std::fmt;

/// A structural property of a container that does not hold.
///
/// Produced by the `check_invariant` walks of the stack, queue and list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Size is zero but an end link is still set.
    EmptyButLinked,
    /// Size is non-zero but the named end link is missing.
    MissingEnd { end: &'static str },
    /// Size is one but the two ends are different nodes.
    SingleNotShared,
    /// Size is one but the only node has a successor.
    SingleWithSuccessor,
    /// Size is at least two but both ends are the same node.
    SharedEnds { size: usize },
    /// Size is at least two but the first node has no successor.
    MissingSuccessor { size: usize },
    /// The head node has a back-reference.
    HeadHasPredecessor,
    /// The tail node has a forward link.
    TailHasSuccessor,
    /// Walking the chain visited a different number of nodes than `size`.
    CountMismatch { claimed: usize, counted: usize },
    /// Walking forward from the first node did not end at the recorded tail.
    TailUnreachable,
    /// A forward link is not mirrored by its target's back-reference.
    BrokenBackLink { position: usize },
    /// A link points at a slot that holds no node.
    DanglingLink { key: usize },
    /// The node storage holds a different number of live nodes than `size`.
    ArenaMismatch { claimed: usize, live: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::EmptyButLinked => write!(f, "size is 0 but an end link is set"),
            InvariantError::MissingEnd { end } => {
                write!(f, "size is non-zero but `{}` is missing", end)
            }
            InvariantError::SingleNotShared => {
                write!(f, "size is 1 but the ends are different nodes")
            }
            InvariantError::SingleWithSuccessor => {
                write!(f, "size is 1 but the only node has a successor")
            }
            InvariantError::SharedEnds { size } => {
                write!(f, "size is {} but both ends are the same node", size)
            }
            InvariantError::MissingSuccessor { size } => {
                write!(f, "size is {} but the first node has no successor", size)
            }
            InvariantError::HeadHasPredecessor => write!(f, "head has a back-reference"),
            InvariantError::TailHasSuccessor => write!(f, "tail has a forward link"),
            InvariantError::CountMismatch { claimed, counted } => {
                write!(f, "size is {} but {} nodes are reachable", claimed, counted)
            }
            InvariantError::TailUnreachable => {
                write!(f, "walking forward does not end at the recorded tail")
            }
            InvariantError::BrokenBackLink { position } => {
                write!(
                    f,
                    "node at position {} is not the back-reference of its successor",
                    position
                )
            }
            InvariantError::DanglingLink { key } => {
                write!(f, "link to slot {} which holds no node", key)
            }
            InvariantError::ArenaMismatch { claimed, live } => {
                write!(f, "size is {} but storage holds {} live nodes", claimed, live)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// A failed `require`, `ensure` or `invariant` guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// Invalid input or invalid state for the call. Nothing was mutated.
    Precondition {
        operation: &'static str,
        condition: &'static str,
    },
    /// The operation's result broke its documented guarantee.
    Postcondition {
        operation: &'static str,
        condition: &'static str,
    },
    /// The container's structural invariant does not hold.
    Invariant {
        operation: &'static str,
        error: InvariantError,
    },
}

impl ContractViolation {
    /// Name of the operation whose guard failed, e.g. `LinkedList::add`.
    pub fn operation(&self) -> &'static str {
        match self {
            ContractViolation::Precondition { operation, .. }
            | ContractViolation::Postcondition { operation, .. }
            | ContractViolation::Invariant { operation, .. } => operation,
        }
    }

    pub fn is_precondition(&self) -> bool {
        matches!(self, ContractViolation::Precondition { .. })
    }

    pub fn is_postcondition(&self) -> bool {
        matches!(self, ContractViolation::Postcondition { .. })
    }

    pub fn is_invariant(&self) -> bool {
        matches!(self, ContractViolation::Invariant { .. })
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractViolation::Precondition {
                operation,
                condition,
            } => write!(f, "precondition violated in {}: {}", operation, condition),
            ContractViolation::Postcondition {
                operation,
                condition,
            } => write!(f, "postcondition violated in {}: {}", operation, condition),
            ContractViolation::Invariant { operation, error } => {
                write!(f, "invariant violated in {}: {}", operation, error)
            }
        }
    }
}

impl std::error::Error for ContractViolation {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContractViolation::Invariant { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Failure of a [`Traversal`](crate::Traversal) step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalError {
    /// The list was structurally modified outside the traversal handle.
    ConcurrentModification { expected: u64, found: u64 },
    /// `next` was called with no elements left.
    NoSuchElement,
    /// `remove` was called without a preceding `next`.
    IllegalState,
    /// The handle was created by a different list.
    ForeignList,
    /// The list operation the traversal delegated to failed a contract.
    Contract(ContractViolation),
}

impl fmt::Display for TraversalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalError::ConcurrentModification { expected, found } => write!(
                f,
                "list modified during traversal (expected modification count {}, found {})",
                expected, found
            ),
            TraversalError::NoSuchElement => write!(f, "traversal has no more elements"),
            TraversalError::IllegalState => {
                write!(f, "remove called before next or twice for the same element")
            }
            TraversalError::ForeignList => {
                write!(f, "traversal handle belongs to a different list")
            }
            TraversalError::Contract(violation) => write!(f, "{}", violation),
        }
    }
}

impl std::error::Error for TraversalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TraversalError::Contract(violation) => Some(violation),
            _ => None,
        }
    }
}

impl From<ContractViolation> for TraversalError {
    fn from(violation: ContractViolation) -> Self {
        TraversalError::Contract(violation)
    }
}

/// Result alias used by every contract-checked operation.
pub type Result<T, E = ContractViolation> = std::result::Result<T, E>;
