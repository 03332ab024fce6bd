//! Shared test utilities for integration tests.
//!
//! Provides helpers for writing markdown drafts into temporary directories
//! and running the marklet binary against them.

use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Writes markdown draft into a new temporary directory.
///
/// # Returns
///
/// Temporary directory and path of the written draft
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_draft(name: &str, content: &str) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join(name);
    std::fs::write(&path, content)?;
    Ok((dir, path))
}

/// Runs marklet binary with arguments.
///
/// # Errors
///
/// Returns error if the process cannot be spawned
pub fn run_marklet(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_marklet")).args(args).output()?)
}

/// Runs marklet binary feeding `input` through stdin.
///
/// # Errors
///
/// Returns error if the process cannot be spawned or stdin write fails
pub fn run_marklet_stdin(args: &[&str], input: &str) -> Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_marklet"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input.as_bytes())?;
    }

    Ok(child.wait_with_output()?)
}

/// Converts path to UTF8 string for command arguments.
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("Test path should be valid UTF8")
}
