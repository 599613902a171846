// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for traversal with interleaved removals.
//!
//! Removing through the handle must never invalidate it; any direct
//! structural change must.

#![no_main]

use catena::{LinkedList, TraversalError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<i16>, Vec<u8>)| {
    let (values, actions) = input;
    let mut list: LinkedList<i16> = values.iter().copied().collect();
    let mut walk = list.traverse();
    let mut kept = Vec::new();

    for action in actions {
        match action % 4 {
            // Step and keep
            0 | 1 => match walk.next(&list) {
                Ok(value) => kept.push(*value),
                Err(TraversalError::NoSuchElement) => break,
                Err(e) => panic!("unexpected traversal error: {}", e),
            },
            // Step and remove through the handle
            2 => match walk.next(&list) {
                Ok(_) => {
                    walk.remove(&mut list).expect("handle removal must succeed");
                }
                Err(TraversalError::NoSuchElement) => break,
                Err(e) => panic!("unexpected traversal error: {}", e),
            },
            // Direct mutation invalidates the handle
            _ => {
                list.add_first(0).expect("add_first must succeed");
                assert!(matches!(
                    walk.has_next(&list),
                    Err(TraversalError::ConcurrentModification { .. })
                ));
                return;
            }
        }
    }

    // Everything the handle returned and did not remove is still there, in order.
    let remaining: Vec<i16> = list.iter().copied().collect();
    assert_eq!(&remaining[..kept.len()], &kept[..]);
});
