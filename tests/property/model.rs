//! Differential tests: every container against a standard library model.
//!
//! The model runs the same operations on a `Vec` or `VecDeque`. A model step
//! returns `None` where the container must refuse with a precondition
//! violation, after which both sides stop.

use super::common::{list_op_strategy, queue_op_strategy, stack_op_strategy};
use catena::replay::{self, CheckLevel, ContainerKind, Failure, Op, Outcome, Script};
use proptest::prelude::*;
use std::collections::VecDeque;

struct Expected {
    outcomes: Vec<Outcome>,
    contents: Vec<i64>,
    refused: bool,
}

fn model_stack(ops: &[Op]) -> Expected {
    let mut model: Vec<i64> = Vec::new();
    let mut outcomes = Vec::new();
    for op in ops {
        let outcome = match op {
            Op::Push { value } => {
                model.push(*value);
                Some(Outcome::Done)
            }
            Op::Pop => model.pop().map(Outcome::Value),
            Op::Peek => model.last().copied().map(Outcome::Value),
            Op::Len => Some(Outcome::Size(model.len())),
            _ => unreachable!("stack strategy only yields stack ops"),
        };
        match outcome {
            Some(outcome) => outcomes.push(outcome),
            None => {
                return Expected {
                    outcomes,
                    contents: model.into_iter().rev().collect(),
                    refused: true,
                }
            }
        }
    }
    Expected {
        outcomes,
        contents: model.into_iter().rev().collect(),
        refused: false,
    }
}

fn model_queue(ops: &[Op]) -> Expected {
    let mut model: VecDeque<i64> = VecDeque::new();
    let mut outcomes = Vec::new();
    for op in ops {
        let outcome = match op {
            Op::Enqueue { value } => {
                model.push_back(*value);
                Some(Outcome::Done)
            }
            Op::Dequeue => model.pop_front().map(Outcome::Value),
            Op::Front => model.front().copied().map(Outcome::Value),
            Op::Len => Some(Outcome::Size(model.len())),
            _ => unreachable!("queue strategy only yields queue ops"),
        };
        match outcome {
            Some(outcome) => outcomes.push(outcome),
            None => {
                return Expected {
                    outcomes,
                    contents: model.into_iter().collect(),
                    refused: true,
                }
            }
        }
    }
    Expected {
        outcomes,
        contents: model.into_iter().collect(),
        refused: false,
    }
}

fn model_list_step(model: &mut VecDeque<i64>, op: &Op) -> Option<Outcome> {
    let len = model.len();
    match op {
        Op::AddFirst { value } => {
            model.push_front(*value);
            Some(Outcome::Done)
        }
        Op::AddLast { value } => {
            model.push_back(*value);
            Some(Outcome::Done)
        }
        Op::Add { index, value } => (*index <= len).then(|| {
            model.insert(*index, *value);
            Outcome::Done
        }),
        Op::Get { index } => model.get(*index).copied().map(Outcome::Value),
        Op::Set { index, value } => model
            .get_mut(*index)
            .map(|slot| Outcome::Value(std::mem::replace(slot, *value))),
        Op::Remove { index } => model.remove(*index).map(Outcome::Value),
        Op::RemoveElem { value } => {
            let found = model.iter().position(|v| v == value);
            if let Some(i) = found {
                model.remove(i);
            }
            Some(Outcome::Flag(found.is_some()))
        }
        Op::RemoveFirst => model.pop_front().map(Outcome::Value),
        Op::RemoveLast => model.pop_back().map(Outcome::Value),
        Op::GetFirst => model.front().copied().map(Outcome::Value),
        Op::GetLast => model.back().copied().map(Outcome::Value),
        Op::Contains { value } => Some(Outcome::Flag(model.contains(value))),
        Op::IndexOf { value } => Some(Outcome::Position(
            model.iter().position(|v| v == value),
        )),
        Op::LastIndexOf { value } => Some(Outcome::Position(
            model.iter().rposition(|v| v == value),
        )),
        Op::Clear => {
            model.clear();
            Some(Outcome::Done)
        }
        Op::Len => Some(Outcome::Size(len)),
        _ => unreachable!("list strategy only yields list ops"),
    }
}

fn model_list(ops: &[Op]) -> Expected {
    let mut model = VecDeque::new();
    let mut outcomes = Vec::new();
    for op in ops {
        match model_list_step(&mut model, op) {
            Some(outcome) => outcomes.push(outcome),
            None => {
                return Expected {
                    outcomes,
                    contents: model.into_iter().collect(),
                    refused: true,
                }
            }
        }
    }
    Expected {
        outcomes,
        contents: model.into_iter().collect(),
        refused: false,
    }
}

fn check_against_model(container: ContainerKind, checks: CheckLevel, ops: Vec<Op>, expected: Expected) {
    let report = replay::run(&Script {
        container,
        checks,
        ops,
    });
    let outcomes: Vec<Outcome> = report.steps.iter().map(|s| s.outcome.clone()).collect();
    assert_eq!(outcomes, expected.outcomes);
    assert_eq!(report.contents, expected.contents);
    if expected.refused {
        assert!(
            matches!(report.failure, Some(Failure::Precondition { .. })),
            "expected a precondition refusal, got {:?}",
            report.failure
        );
    } else {
        assert_eq!(report.failure, None);
    }
}

fn checks_strategy() -> impl Strategy<Value = CheckLevel> {
    prop_oneof![Just(CheckLevel::Strict), Just(CheckLevel::Preconditions)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_stack_matches_vec(
        ops in prop::collection::vec(stack_op_strategy(), 0..64),
        checks in checks_strategy(),
    ) {
        let expected = model_stack(&ops);
        check_against_model(ContainerKind::Stack, checks, ops, expected);
    }

    #[test]
    fn prop_queue_matches_vecdeque(
        ops in prop::collection::vec(queue_op_strategy(), 0..64),
        checks in checks_strategy(),
    ) {
        let expected = model_queue(&ops);
        check_against_model(ContainerKind::Queue, checks, ops, expected);
    }

    #[test]
    fn prop_list_matches_vecdeque(
        ops in prop::collection::vec(list_op_strategy(), 0..64),
        checks in checks_strategy(),
    ) {
        let expected = model_list(&ops);
        check_against_model(ContainerKind::List, checks, ops, expected);
    }
}
