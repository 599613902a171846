// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scripted operation replay.
//!
//! A [`Script`] names one container, a check level and a list of operations.
//! [`run`] applies them in order to a fresh container of `i64`s and stops at
//! the first failure.
//!
//! ```json
//! {
//!   "container": "list",
//!   "checks": "strict",
//!   "ops": [
//!     { "op": "add_last", "value": 1 },
//!     { "op": "add", "index": 0, "value": 2 },
//!     { "op": "remove", "index": 5 }
//!   ]
//! }
//! ```
//!
//! Operations that do not belong to the chosen container (`push` on a queue,
//! for example) end the run as [`Failure::Unsupported`].

use crate::list::LinkedList;
use crate::queue::LinkedQueue;
use crate::stack::LinkedStack;
use crate::traits::{List, Queue, Stack};
use crate::verify::contracts::ContractConfig;
use crate::verify::ContractViolation;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    Stack,
    Queue,
    List,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContainerKind::Stack => "stack",
            ContainerKind::Queue => "queue",
            ContainerKind::List => "list",
        };
        f.write_str(name)
    }
}

/// How much checking the container does besides preconditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckLevel {
    #[default]
    Strict,
    Preconditions,
}

impl From<CheckLevel> for ContractConfig {
    fn from(level: CheckLevel) -> Self {
        match level {
            CheckLevel::Strict => ContractConfig::strict(),
            CheckLevel::Preconditions => ContractConfig::preconditions_only(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    Push { value: i64 },
    Pop,
    Peek,
    Enqueue { value: i64 },
    Dequeue,
    Front,
    AddFirst { value: i64 },
    AddLast { value: i64 },
    Add { index: usize, value: i64 },
    Get { index: usize },
    Set { index: usize, value: i64 },
    Remove { index: usize },
    RemoveElem { value: i64 },
    RemoveFirst,
    RemoveLast,
    GetFirst,
    GetLast,
    Contains { value: i64 },
    IndexOf { value: i64 },
    LastIndexOf { value: i64 },
    Clear,
    Len,
}

impl Op {
    /// Wire name, as written in the `op` field.
    pub fn name(&self) -> &'static str {
        match self {
            Op::Push { .. } => "push",
            Op::Pop => "pop",
            Op::Peek => "peek",
            Op::Enqueue { .. } => "enqueue",
            Op::Dequeue => "dequeue",
            Op::Front => "front",
            Op::AddFirst { .. } => "add_first",
            Op::AddLast { .. } => "add_last",
            Op::Add { .. } => "add",
            Op::Get { .. } => "get",
            Op::Set { .. } => "set",
            Op::Remove { .. } => "remove",
            Op::RemoveElem { .. } => "remove_elem",
            Op::RemoveFirst => "remove_first",
            Op::RemoveLast => "remove_last",
            Op::GetFirst => "get_first",
            Op::GetLast => "get_last",
            Op::Contains { .. } => "contains",
            Op::IndexOf { .. } => "index_of",
            Op::LastIndexOf { .. } => "last_index_of",
            Op::Clear => "clear",
            Op::Len => "len",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub container: ContainerKind,
    #[serde(default)]
    pub checks: CheckLevel,
    #[serde(default)]
    pub ops: Vec<Op>,
}

/// What a successful step produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    Done,
    Value(i64),
    Flag(bool),
    Position(Option<usize>),
    Size(usize),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Done => write!(f, "ok"),
            Outcome::Value(value) => write!(f, "{}", value),
            Outcome::Flag(flag) => write!(f, "{}", flag),
            Outcome::Position(Some(index)) => write!(f, "at {}", index),
            Outcome::Position(None) => write!(f, "not found"),
            Outcome::Size(size) => write!(f, "size {}", size),
        }
    }
}

/// Why a run stopped early.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Failure {
    Precondition { operation: String, message: String },
    Postcondition { operation: String, message: String },
    Invariant { operation: String, message: String },
    Unsupported { op: String, container: ContainerKind },
}

impl From<ContractViolation> for Failure {
    fn from(violation: ContractViolation) -> Self {
        let operation = violation.operation().to_string();
        let message = violation.to_string();
        match violation {
            ContractViolation::Precondition { .. } => Failure::Precondition { operation, message },
            ContractViolation::Postcondition { .. } => {
                Failure::Postcondition { operation, message }
            }
            ContractViolation::Invariant { .. } => Failure::Invariant { operation, message },
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Precondition { message, .. }
            | Failure::Postcondition { message, .. }
            | Failure::Invariant { message, .. } => f.write_str(message),
            Failure::Unsupported { op, container } => {
                write!(f, "operation '{}' is not supported by a {}", op, container)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub index: usize,
    pub op: Op,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub container: ContainerKind,
    pub checks: CheckLevel,
    /// Steps that completed, in order.
    pub steps: Vec<Step>,
    /// Contents after the last completed step, front/top first.
    pub contents: Vec<i64>,
    pub failure: Option<Failure>,
}

impl Report {
    pub fn succeeded(&self) -> bool {
        self.failure.is_none()
    }
}

/// Run `script` against a fresh container.
pub fn run(script: &Script) -> Report {
    let config = ContractConfig::from(script.checks);
    let (steps, contents, failure) = match script.container {
        ContainerKind::Stack => {
            let mut stack: LinkedStack<i64> = LinkedStack::with_config(config);
            let (steps, failure) = drive(&script.ops, |op| apply_stack(&mut stack, op));
            (steps, stack.iter().copied().collect(), failure)
        }
        ContainerKind::Queue => {
            let mut queue: LinkedQueue<i64> = LinkedQueue::with_config(config);
            let (steps, failure) = drive(&script.ops, |op| apply_queue(&mut queue, op));
            (steps, queue.iter().copied().collect(), failure)
        }
        ContainerKind::List => {
            let mut list: LinkedList<i64> = LinkedList::with_config(config);
            let (steps, failure) = drive(&script.ops, |op| apply_list(&mut list, op));
            (steps, list.iter().copied().collect(), failure)
        }
    };

    match &failure {
        Some(failure) => tracing::info!(
            container = %script.container,
            completed = steps.len(),
            %failure,
            "replay stopped"
        ),
        None => tracing::info!(
            container = %script.container,
            completed = steps.len(),
            "replay finished"
        ),
    }

    Report {
        container: script.container,
        checks: script.checks,
        steps,
        contents,
        failure,
    }
}

fn drive(
    ops: &[Op],
    mut apply: impl FnMut(&Op) -> Result<Outcome, Failure>,
) -> (Vec<Step>, Option<Failure>) {
    let mut steps = Vec::with_capacity(ops.len());
    for (index, op) in ops.iter().enumerate() {
        match apply(op) {
            Ok(outcome) => {
                tracing::debug!(step = index, op = op.name(), %outcome, "step");
                steps.push(Step {
                    index,
                    op: op.clone(),
                    outcome,
                });
            }
            Err(failure) => return (steps, Some(failure)),
        }
    }
    (steps, None)
}

fn unsupported(op: &Op, container: ContainerKind) -> Failure {
    Failure::Unsupported {
        op: op.name().to_string(),
        container,
    }
}

fn apply_stack<S: Stack<i64>>(stack: &mut S, op: &Op) -> Result<Outcome, Failure> {
    let outcome = match op {
        Op::Push { value } => {
            stack.push(*value)?;
            Outcome::Done
        }
        Op::Pop => Outcome::Value(stack.pop()?),
        Op::Peek => Outcome::Value(*stack.peek()?),
        Op::Len => Outcome::Size(stack.size()),
        other => return Err(unsupported(other, ContainerKind::Stack)),
    };
    Ok(outcome)
}

fn apply_queue<Q: Queue<i64>>(queue: &mut Q, op: &Op) -> Result<Outcome, Failure> {
    let outcome = match op {
        Op::Enqueue { value } => {
            queue.enqueue(*value)?;
            Outcome::Done
        }
        Op::Dequeue => Outcome::Value(queue.dequeue()?),
        Op::Front => Outcome::Value(*queue.front()?),
        Op::Len => Outcome::Size(queue.size()),
        other => return Err(unsupported(other, ContainerKind::Queue)),
    };
    Ok(outcome)
}

fn apply_list<L: List<i64>>(list: &mut L, op: &Op) -> Result<Outcome, Failure> {
    let outcome = match op {
        Op::AddFirst { value } => {
            list.add_first(*value)?;
            Outcome::Done
        }
        Op::AddLast { value } => {
            list.add_last(*value)?;
            Outcome::Done
        }
        Op::Add { index, value } => {
            list.add(*index, *value)?;
            Outcome::Done
        }
        Op::Get { index } => Outcome::Value(*list.get(*index)?),
        Op::Set { index, value } => Outcome::Value(list.set(*index, *value)?),
        Op::Remove { index } => Outcome::Value(list.remove(*index)?),
        Op::RemoveElem { value } => Outcome::Flag(list.remove_elem(value)?),
        Op::RemoveFirst => Outcome::Value(list.remove_first()?),
        Op::RemoveLast => Outcome::Value(list.remove_last()?),
        Op::GetFirst => Outcome::Value(*list.get_first()?),
        Op::GetLast => Outcome::Value(*list.get_last()?),
        Op::Contains { value } => Outcome::Flag(list.contains(value)?),
        Op::IndexOf { value } => Outcome::Position(list.index_of(value)?),
        Op::LastIndexOf { value } => Outcome::Position(list.last_index_of(value)?),
        Op::Clear => {
            list.clear()?;
            Outcome::Done
        }
        Op::Len => Outcome::Size(list.size()),
        other => return Err(unsupported(other, ContainerKind::List)),
    };
    Ok(outcome)
}
