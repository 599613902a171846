// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for scripted container operations.
//!
//! Any sequence of operations may be refused by a precondition, but a correct
//! container never reports a postcondition or invariant failure.

#![no_main]

use arbitrary::Arbitrary;
use catena::replay::{self, CheckLevel, ContainerKind, Failure, Op, Script};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum FuzzContainer {
    Stack,
    Queue,
    List,
}

#[derive(Debug, Arbitrary)]
enum FuzzOp {
    Push(i8),
    Pop,
    Peek,
    Enqueue(i8),
    Dequeue,
    Front,
    AddFirst(i8),
    AddLast(i8),
    Add(u8, i8),
    Get(u8),
    Set(u8, i8),
    Remove(u8),
    RemoveElem(i8),
    RemoveFirst,
    RemoveLast,
    GetFirst,
    GetLast,
    Contains(i8),
    IndexOf(i8),
    LastIndexOf(i8),
    Clear,
    Len,
}

impl From<FuzzOp> for Op {
    fn from(op: FuzzOp) -> Self {
        let v = |value: i8| i64::from(value);
        let i = |index: u8| usize::from(index);
        match op {
            FuzzOp::Push(value) => Op::Push { value: v(value) },
            FuzzOp::Pop => Op::Pop,
            FuzzOp::Peek => Op::Peek,
            FuzzOp::Enqueue(value) => Op::Enqueue { value: v(value) },
            FuzzOp::Dequeue => Op::Dequeue,
            FuzzOp::Front => Op::Front,
            FuzzOp::AddFirst(value) => Op::AddFirst { value: v(value) },
            FuzzOp::AddLast(value) => Op::AddLast { value: v(value) },
            FuzzOp::Add(index, value) => Op::Add {
                index: i(index),
                value: v(value),
            },
            FuzzOp::Get(index) => Op::Get { index: i(index) },
            FuzzOp::Set(index, value) => Op::Set {
                index: i(index),
                value: v(value),
            },
            FuzzOp::Remove(index) => Op::Remove { index: i(index) },
            FuzzOp::RemoveElem(value) => Op::RemoveElem { value: v(value) },
            FuzzOp::RemoveFirst => Op::RemoveFirst,
            FuzzOp::RemoveLast => Op::RemoveLast,
            FuzzOp::GetFirst => Op::GetFirst,
            FuzzOp::GetLast => Op::GetLast,
            FuzzOp::Contains(value) => Op::Contains { value: v(value) },
            FuzzOp::IndexOf(value) => Op::IndexOf { value: v(value) },
            FuzzOp::LastIndexOf(value) => Op::LastIndexOf { value: v(value) },
            FuzzOp::Clear => Op::Clear,
            FuzzOp::Len => Op::Len,
        }
    }
}

fuzz_target!(|input: (FuzzContainer, Vec<FuzzOp>)| {
    let (container, ops) = input;
    let container = match container {
        FuzzContainer::Stack => ContainerKind::Stack,
        FuzzContainer::Queue => ContainerKind::Queue,
        FuzzContainer::List => ContainerKind::List,
    };
    let script = Script {
        container,
        checks: CheckLevel::Strict,
        ops: ops.into_iter().map(Op::from).collect(),
    };

    let report = replay::run(&script);

    match report.failure {
        None | Some(Failure::Precondition { .. }) | Some(Failure::Unsupported { .. }) => {}
        Some(other) => panic!("container broke its own contract: {}", other),
    }
});
