// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the catena command-line interface.
//!
//! Two subcommands: `merge` prints the demonstration tree merge, and `replay`
//! runs a JSON operation script against one of the containers.

pub mod display;

use catena::replay::CheckLevel;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "catena",
    about = "Contract-checked linked data structures",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge the two demonstration trees and print the in-order walk
    Merge,

    /// Replay a JSON operation script against a container
    Replay {
        /// Path to the script file
        file: PathBuf,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Override the script's check level
        #[arg(long, value_enum)]
        checks: Option<Checks>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Checks {
    /// Preconditions, postconditions and invariant walks
    Strict,
    /// Preconditions only
    Preconditions,
}

impl From<Checks> for CheckLevel {
    fn from(checks: Checks) -> Self {
        match checks {
            Checks::Strict => CheckLevel::Strict,
            Checks::Preconditions => CheckLevel::Preconditions,
        }
    }
}
