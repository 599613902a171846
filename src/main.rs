// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use catena::replay::{self, Script};
use catena::tree::{demo_left, demo_right, inorder, merge_trees, Tree};

mod cli;
use cli::{display, Checks, Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Merge => run_merge().map(|()| true),
        Commands::Replay { file, json, checks } => run_replay(&file, json, checks),
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    }
}

fn walk(tree: &Tree<i32>) -> Vec<i64> {
    inorder(tree).into_iter().map(|&v| i64::from(v)).collect()
}

fn run_merge() -> Result<()> {
    let left = demo_left();
    let right = demo_right();
    let (left_walk, right_walk) = (walk(&left), walk(&right));
    let merged = merge_trees(left, right);
    display::print_merge(&left_walk, &right_walk, &walk(&merged));
    Ok(())
}

/// Returns whether every step passed.
fn run_replay(file: &Path, json: bool, checks: Option<Checks>) -> Result<bool> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("failed to read script {}", file.display()))?;
    let mut script: Script = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse script {}", file.display()))?;
    if let Some(checks) = checks {
        script.checks = checks.into();
    }

    let report = replay::run(&script);
    if json {
        let out = serde_json::to_string_pretty(&report).context("failed to encode report")?;
        println!("{}", out);
    } else {
        display::print_report(&report);
    }
    Ok(report.succeeded())
}
