//! Fixture application check.
//!
//! Spawns the hello binary, captures its stdout, and verifies the
//! greeting byte-for-byte after stripping the trailing line break.
//! A non-zero exit or a spawn failure is a failed verdict carrying
//! the captured stderr.

use anyhow::Result;
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::FixtureCheck;
use crate::types::{HarnessError, Mismatch, Verdict};

const CHECK_NAME: &str = "fixture binary output";

/// Verifies the fixture application's stdout and exit status.
pub struct BinaryCheck {
    program: String,
    expected: String,
}

impl BinaryCheck {
    pub fn new(program: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            expected: expected.into(),
        }
    }

    /// Strip one trailing line break (`\n` or `\r\n`) from process output.
    /// Anything beyond that single break is part of the comparison.
    fn strip_line_break(output: &str) -> &str {
        output
            .strip_suffix("\r\n")
            .or_else(|| output.strip_suffix('\n'))
            .unwrap_or(output)
    }
}

#[async_trait]
impl FixtureCheck for BinaryCheck {
    fn name(&self) -> &str {
        CHECK_NAME
    }

    async fn run(&self) -> Result<Verdict> {
        debug!(program = %self.program, "Spawning fixture application");

        // The runner drops this future on timeout; the child must not
        // outlive the step.
        let output = match Command::new(&self.program).kill_on_drop(true).output().await {
            Ok(output) => output,
            Err(e) => {
                let err = HarnessError::Fixture {
                    name: self.program.clone(),
                    message: e.to_string(),
                };
                return Ok(Verdict::failed(err.to_string()));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let message = if stderr.is_empty() {
                output.status.to_string()
            } else {
                format!("{} ({stderr})", output.status)
            };
            let err = HarnessError::Fixture {
                name: self.program.clone(),
                message,
            };
            return Ok(Verdict::failed(err.to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let got = Self::strip_line_break(&stdout);
        if let Some(mismatch) = Mismatch::check(got, &self.expected) {
            return Ok(Verdict::failed(mismatch.to_string()));
        }

        debug!(program = %self.program, "Fixture output verified");
        Ok(Verdict::passed())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
