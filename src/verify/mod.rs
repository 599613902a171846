// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: contract guards and the errors they raise.
//!
//! Two pieces:
//!
//! 1. **Guards** (`require`, `ensure`, `invariant`) called explicitly at the
//!    entry and exit of every container operation.
//!
//! 2. **Error types** (`ContractViolation`, `InvariantError`, `TraversalError`)
//!    that say which guard failed, in which operation, and why.
//!
//! The structural checks themselves live next to each container, since only
//! the container knows its own shape.

mod types;
pub mod contracts;

pub use types::*;
