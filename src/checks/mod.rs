//! Conformance checks against the greeting fixture.
//!
//! Defines the `FixtureCheck` trait and provides implementations for:
//! - in-process — calls the greeting function directly
//! - binary — spawns the fixture application and compares its stdout
//! - result file — verifies what an external runner recorded

pub mod binary;
pub mod in_process;
pub mod result_file;

use anyhow::Result;
use async_trait::async_trait;

use crate::types::Verdict;

/// Abstraction over conformance checks.
///
/// Implementors verify one property of the fixture and report a verdict.
/// A failed verification is a `Failed` verdict, not an `Err`; errors are
/// reserved for a check that could not run at all.
#[async_trait]
pub trait FixtureCheck: Send + Sync {
    /// Step name for logs and reports.
    fn name(&self) -> &str;

    /// Run the check once against the fixture.
    async fn run(&self) -> Result<Verdict>;
}
