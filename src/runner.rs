//! Sequential scenario runner.
//!
//! Executes the configured checks in order, one at a time, turning each
//! outcome into a step record. A check error or timeout becomes a failed
//! record rather than a crash; the report and exit code carry the news.

use chrono::Utc;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::{info, warn};
use uuid::Uuid;

use crate::checks::FixtureCheck;
use crate::types::{HarnessError, RunReport, StepRecord, TestStatus};

// ---------------------------------------------------------------------------
// Scenario
// ---------------------------------------------------------------------------

/// An ordered list of named checks executed as a single run.
pub struct Scenario {
    name: String,
    steps: Vec<Box<dyn FixtureCheck>>,
    fail_fast: bool,
    step_timeout: Duration,
}

impl Scenario {
    pub fn new(name: impl Into<String>, fail_fast: bool, step_timeout: Duration) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
            fail_fast,
            step_timeout,
        }
    }

    /// Append a check. Steps run in insertion order.
    pub fn add_step(&mut self, step: Box<dyn FixtureCheck>) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order and collect the report.
    ///
    /// With `fail_fast`, steps after the first failure are neither
    /// executed nor recorded.
    pub async fn run(&self) -> RunReport {
        let run_id = Uuid::new_v4().to_string();
        let started_at = Utc::now();

        info!(
            run_id = %run_id,
            scenario = %self.name,
            steps = self.steps.len(),
            "Scenario starting"
        );

        let mut records = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            let record = self.run_step(step.as_ref()).await;
            match record.status {
                TestStatus::Passed => {
                    info!(step = %record.name, duration_secs = record.duration_secs, "Step passed");
                }
                TestStatus::Skipped => {
                    info!(
                        step = %record.name,
                        reason = record.message.as_deref().unwrap_or(""),
                        "Step skipped"
                    );
                }
                TestStatus::Failed => {
                    warn!(
                        step = %record.name,
                        message = record.message.as_deref().unwrap_or(""),
                        "Step failed"
                    );
                }
            }

            let failed = record.is_failure();
            records.push(record);

            if failed && self.fail_fast {
                warn!(scenario = %self.name, "Fail-fast enabled, remaining steps not executed");
                break;
            }
        }

        RunReport {
            run_id,
            harness: self.name.clone(),
            started_at,
            finished_at: Utc::now(),
            steps: records,
        }
    }

    /// Run one step, converting errors and timeouts into failed records.
    async fn run_step(&self, step: &dyn FixtureCheck) -> StepRecord {
        let started = Instant::now();
        let outcome = timeout(self.step_timeout, step.run()).await;
        let duration_secs = started.elapsed().as_secs_f64();

        let (status, message) = match outcome {
            Ok(Ok(verdict)) => (verdict.status, verdict.message),
            Ok(Err(e)) => (TestStatus::Failed, Some(format!("{e:#}"))),
            Err(_) => {
                let err = HarnessError::Timeout {
                    step: step.name().to_string(),
                    seconds: self.step_timeout.as_secs(),
                };
                (TestStatus::Failed, Some(err.to_string()))
            }
        };

        StepRecord {
            name: step.name().to_string(),
            status,
            duration_secs,
            message,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
