//! Shared types for the HERALD harness.
//!
//! These types form the data model used across all modules.
//! They are designed to be stable so that check, runner, and
//! parser modules can depend on them without circular references.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Process exit code for a run in which no step failed.
pub const SUCCESS_EXIT_CODE: i32 = 0;
/// Process exit code for a run with at least one failed step.
pub const FAIL_EXIT_CODE: i32 = 1;

// ---------------------------------------------------------------------------
// Test status
// ---------------------------------------------------------------------------

/// Outcome of a single test case or scenario step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
}

impl TestStatus {
    /// All known statuses (useful for iteration).
    pub const ALL: &'static [TestStatus] = &[
        TestStatus::Passed,
        TestStatus::Failed,
        TestStatus::Skipped,
    ];

    /// Whether this status counts against the run.
    pub fn is_failure(&self) -> bool {
        matches!(self, TestStatus::Failed)
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Passed => write!(f, "✔ PASSED"),
            TestStatus::Failed => write!(f, "✘ FAILED"),
            TestStatus::Skipped => write!(f, "○ SKIPPED"),
        }
    }
}

// ---------------------------------------------------------------------------
// Mismatch
// ---------------------------------------------------------------------------

/// An equality-check failure between observed and expected output.
///
/// Renders as `got "..." want "..."` with both values quoted and
/// escaped, so the exact bytes that differed are visible in logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub got: String,
    pub want: String,
}

impl Mismatch {
    /// Compare observed output against the expected literal.
    /// Returns `None` when they are byte-for-byte equal.
    pub fn check(got: &str, want: &str) -> Option<Self> {
        if got == want {
            None
        } else {
            Some(Mismatch {
                got: got.to_string(),
                want: want.to_string(),
            })
        }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "got {:?} want {:?}", self.got, self.want)
    }
}

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// Result of running one conformance check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub status: TestStatus,
    pub message: Option<String>,
}

impl Verdict {
    pub fn passed() -> Self {
        Verdict {
            status: TestStatus::Passed,
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Verdict {
            status: TestStatus::Failed,
            message: Some(message.into()),
        }
    }

    pub fn skipped(message: impl Into<String>) -> Self {
        Verdict {
            status: TestStatus::Skipped,
            message: Some(message.into()),
        }
    }

    /// Whether this verdict counts against the run.
    pub fn is_failure(&self) -> bool {
        self.status.is_failure()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}: {}", self.status, msg),
            None => write!(f, "{}", self.status),
        }
    }
}

// ---------------------------------------------------------------------------
// Parsed result file types
// ---------------------------------------------------------------------------

/// Failure, error, or skip detail attached to a test case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDetail {
    /// The `message` attribute, when present.
    pub message: Option<String>,
    /// The `type` attribute, when present.
    pub type_name: Option<String>,
    /// Element body, usually a stack trace or captured output.
    pub body: Option<String>,
}

/// One test case parsed from a JUnit-style result file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    pub name: String,
    pub classname: Option<String>,
    pub time_secs: f64,
    pub status: TestStatus,
    pub detail: Option<CaseDetail>,
}

impl CaseResult {
    /// The most useful one-line reason for a non-passing case:
    /// the detail `message` attribute, falling back to the body.
    pub fn reason(&self) -> Option<&str> {
        let detail = self.detail.as_ref()?;
        detail
            .message
            .as_deref()
            .or(detail.body.as_deref())
            .map(str::trim)
    }

    /// Whether this case counts against the run.
    pub fn is_failure(&self) -> bool {
        self.status.is_failure()
    }

    /// Helper to build a passing test case with sensible defaults.
    #[cfg(test)]
    pub fn sample(name: &str) -> Self {
        CaseResult {
            name: name.to_string(),
            classname: Some("greeting_test".to_string()),
            time_secs: 0.01,
            status: TestStatus::Passed,
            detail: None,
        }
    }
}

impl fmt::Display for CaseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({:.2}s)", self.status, self.name, self.time_secs)?;
        if let Some(reason) = self.reason() {
            write!(f, ": {reason}")?;
        }
        Ok(())
    }
}

/// One test suite parsed from a JUnit-style result file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteResult {
    pub name: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub hostname: Option<String>,
    /// Declared counts from the suite attributes.
    pub tests: u32,
    pub failures: u32,
    pub errors: u32,
    pub time_secs: f64,
    pub package: Option<String>,
    pub cases: Vec<CaseResult>,
}

impl SuiteResult {
    /// Suite status from the declared counts: failed as soon as the
    /// file reports any failure or error.
    pub fn status(&self) -> TestStatus {
        if self.failures > 0 || self.errors > 0 {
            TestStatus::Failed
        } else {
            TestStatus::Passed
        }
    }

    /// First case that did not pass, if any.
    pub fn first_failure(&self) -> Option<&CaseResult> {
        self.cases.iter().find(|c| c.is_failure())
    }

    /// Helper to build a passing suite with sensible defaults.
    #[cfg(test)]
    pub fn sample() -> Self {
        SuiteResult {
            name: "greeting_test".to_string(),
            timestamp: None,
            hostname: Some("localhost".to_string()),
            tests: 1,
            failures: 0,
            errors: 0,
            time_secs: 0.02,
            package: Some("fixture".to_string()),
            cases: vec![CaseResult::sample("test_say_hello")],
        }
    }
}

impl fmt::Display for SuiteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} tests ({} failures, {} errors) in {:.2}s",
            self.status(),
            self.name,
            self.tests,
            self.failures,
            self.errors,
            self.time_secs,
        )
    }
}

// ---------------------------------------------------------------------------
// Run report
// ---------------------------------------------------------------------------

/// Outcome of one scenario step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    pub name: String,
    pub status: TestStatus,
    pub duration_secs: f64,
    pub message: Option<String>,
}

impl StepRecord {
    /// Whether this step counts against the run.
    pub fn is_failure(&self) -> bool {
        self.status.is_failure()
    }
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({:.2}s)", self.status, self.name, self.duration_secs)?;
        if let Some(msg) = &self.message {
            write!(f, ": {msg}")?;
        }
        Ok(())
    }
}

/// Summary of a single harness run, persisted after each scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: String,
    pub harness: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub steps: Vec<StepRecord>,
}

impl RunReport {
    /// Number of steps with the given status.
    pub fn count(&self, status: TestStatus) -> usize {
        self.steps.iter().filter(|s| s.status == status).count()
    }

    pub fn passed(&self) -> usize {
        self.count(TestStatus::Passed)
    }

    pub fn failed(&self) -> usize {
        self.count(TestStatus::Failed)
    }

    pub fn skipped(&self) -> usize {
        self.count(TestStatus::Skipped)
    }

    /// Whether the run recorded no failing step.
    pub fn is_success(&self) -> bool {
        !self.steps.iter().any(|s| s.is_failure())
    }

    /// Process exit code for this run.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            SUCCESS_EXIT_CODE
        } else {
            FAIL_EXIT_CODE
        }
    }

    /// Wall-clock duration of the run in seconds.
    pub fn duration_secs(&self) -> f64 {
        (self.finished_at - self.started_at)
            .num_milliseconds()
            .max(0) as f64
            / 1000.0
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Run {}: {} steps ({} passed, {} failed, {} skipped) in {:.2}s → {}",
            self.run_id,
            self.steps.len(),
            self.passed(),
            self.failed(),
            self.skipped(),
            self.duration_secs(),
            if self.is_success() { "SUCCESS" } else { "FAIL" },
        )
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types for HERALD.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("got {got:?} want {want:?}")]
    Mismatch { got: String, want: String },

    #[error("Fixture process error ({name}): {message}")]
    Fixture { name: String, message: String },

    #[error("Result file error ({path}): {message}")]
    ResultFile { path: String, message: String },

    #[error("Step timed out after {seconds}s: {step}")]
    Timeout { step: String, seconds: u64 },
}

impl From<Mismatch> for HarnessError {
    fn from(m: Mismatch) -> Self {
        HarnessError::Mismatch {
            got: m.got,
            want: m.want,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
