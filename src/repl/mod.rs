//! Line-oriented session loop connecting a manager to reader and writer.

use std::io::{BufRead, Write};

use anyhow::Context;

use crate::core::AppResult;
use crate::manager::Manager;

/// Sentinel token that ends a session without producing a response line.
const EXIT_SENTINEL: &str = "exit";

/// Drive a manager from a line source until end-of-input or the exit
/// sentinel.
///
/// Every line is dispatched as one command and answered with exactly one
/// response line, in order. A line whose first token is `exit` ends the
/// session silently. Only real I/O failures surface as errors; every
/// command-level problem is already a response string.
pub fn run<R: BufRead, W: Write>(
    manager: &mut Manager,
    input: R,
    mut output: W,
) -> AppResult<()> {
    let mut dispatched = 0usize;
    for line in input.lines() {
        let line = line.context("failed to read command line")?;
        if line.split_whitespace().next() == Some(EXIT_SENTINEL) {
            tracing::debug!("exit sentinel received");
            break;
        }
        let response = manager.dispatch(&line);
        writeln!(output, "{response}").context("failed to write response line")?;
        dispatched += 1;
    }
    output.flush().context("failed to flush output")?;
    tracing::info!("session ended after {} commands", dispatched);
    Ok(())
}
