// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contract guards.
//!
//! Every public container operation runs the same protocol:
//!
//! ```text
//! invariant ──▶ require ──▶ mutate ──▶ ensure ──▶ invariant
//! ```
//!
//! The guards are plain function calls placed at entry and exit of each
//! operation, so the checks stay visible next to the code they protect.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! Each container's `check_invariant` walks the whole chain. That is O(n) per
//! boundary. [`ContractConfig::preconditions_only`] switches the walks and the
//! postconditions off; preconditions are never skipped.
//!
//! # Usage
//!
//! ```
//! use catena::contracts::{require, ContractConfig};
//!
//! let len = 0;
//! assert!(require(len > 0, "Example::pop", "container is not empty").is_err());
//!
//! let config = ContractConfig::default();
//! assert!(config.ensure("Example::push", "size increased by one", || true).is_ok());
//! ```

use super::types::{ContractViolation, InvariantError, Result};

/// Which guards run besides preconditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContractConfig {
    /// Walk the structural invariant at entry and exit of every operation.
    pub invariants: bool,
    /// Check postconditions after every mutation.
    pub postconditions: bool,
}

impl ContractConfig {
    /// Every guard enabled. This is the default.
    pub const fn strict() -> Self {
        Self {
            invariants: true,
            postconditions: true,
        }
    }

    /// Only preconditions. Operations keep their O(1) cost.
    pub const fn preconditions_only() -> Self {
        Self {
            invariants: false,
            postconditions: false,
        }
    }

    /// Run `ensure` when postconditions are enabled.
    ///
    /// The condition is a closure so that a disabled check costs nothing.
    #[inline]
    pub fn ensure(
        &self,
        operation: &'static str,
        condition: &'static str,
        holds: impl FnOnce() -> bool,
    ) -> Result<()> {
        if self.postconditions {
            ensure(holds(), operation, condition)
        } else {
            Ok(())
        }
    }

    /// Run `invariant` when invariant walks are enabled.
    #[inline]
    pub fn invariant(
        &self,
        operation: &'static str,
        check: impl FnOnce() -> std::result::Result<(), InvariantError>,
    ) -> Result<()> {
        if self.invariants {
            invariant(check(), operation)
        } else {
            Ok(())
        }
    }
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self::strict()
    }
}

/// Precondition guard: fails when the caller passed invalid input or called
/// in an invalid state.
#[inline]
pub fn require(holds: bool, operation: &'static str, condition: &'static str) -> Result<()> {
    if holds {
        return Ok(());
    }
    tracing::warn!(operation, condition, "precondition violated");
    Err(ContractViolation::Precondition {
        operation,
        condition,
    })
}

/// Postcondition guard: fails when an operation broke its own guarantee.
#[inline]
pub fn ensure(holds: bool, operation: &'static str, condition: &'static str) -> Result<()> {
    if holds {
        return Ok(());
    }
    tracing::error!(operation, condition, "postcondition violated");
    Err(ContractViolation::Postcondition {
        operation,
        condition,
    })
}

/// Invariant guard: fails when the structural check reported a broken property.
#[inline]
pub fn invariant(
    check: std::result::Result<(), InvariantError>,
    operation: &'static str,
) -> Result<()> {
    check.map_err(|error| broken(operation, error))
}

/// Build an invariant violation for corruption found mid-operation, such as a
/// missing end link after the entry check was skipped.
pub fn broken(operation: &'static str, error: InvariantError) -> ContractViolation {
    tracing::error!(operation, %error, "invariant violated");
    ContractViolation::Invariant { operation, error }
}
