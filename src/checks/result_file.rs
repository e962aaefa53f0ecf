//! Recorded result check.
//!
//! Verifies what an external runner recorded about the fixture: reads a
//! JUnit-style `test.xml` and requires a clean bill from every suite.
//! Skipped cases are tolerated; failures and errors are not.

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use super::FixtureCheck;
use crate::junit;
use crate::types::{HarnessError, SuiteResult, TestStatus, Verdict};

const CHECK_NAME: &str = "recorded test results";

/// Verifies a runner-produced `test.xml` against the fixture contract.
pub struct ResultFileCheck {
    path: String,
}

impl ResultFileCheck {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// One-line reason for a suite that did not come back clean.
    fn failure_reason(suite: &SuiteResult) -> String {
        match suite.first_failure() {
            Some(case) => match case.reason() {
                Some(reason) => format!("{} in {}: {reason}", case.name, suite.name),
                None => format!("{} in {}", case.name, suite.name),
            },
            None => format!(
                "suite {} reports {} failures, {} errors",
                suite.name, suite.failures, suite.errors,
            ),
        }
    }
}

#[async_trait]
impl FixtureCheck for ResultFileCheck {
    fn name(&self) -> &str {
        CHECK_NAME
    }

    async fn run(&self) -> Result<Verdict> {
        let suites = match junit::read_suites(&self.path) {
            Ok(suites) => suites,
            Err(e) => {
                let err = HarnessError::ResultFile {
                    path: self.path.clone(),
                    message: format!("{e:#}"),
                };
                return Ok(Verdict::failed(err.to_string()));
            }
        };

        if suites.is_empty() {
            return Ok(Verdict::failed(format!(
                "no suites recorded in {}",
                self.path,
            )));
        }

        for suite in &suites {
            if suite.status() == TestStatus::Failed || suite.first_failure().is_some() {
                return Ok(Verdict::failed(Self::failure_reason(suite)));
            }
        }

        let cases: usize = suites.iter().map(|s| s.cases.len()).sum();
        debug!(
            check = CHECK_NAME,
            suites = suites.len(),
            cases = cases,
            "All recorded cases passed"
        );
        Ok(Verdict::passed())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
