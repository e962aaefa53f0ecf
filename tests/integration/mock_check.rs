//! Mock check for integration testing.
//!
//! Provides a deterministic `FixtureCheck` implementation with a
//! scriptable verdict, forced errors, and artificial latency — all
//! in-memory with no external dependencies.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use herald::checks::FixtureCheck;
use herald::types::Verdict;

/// A mock conformance check for deterministic testing.
///
/// All state is behind `Arc<Mutex<_>>`, so a clone kept in test code
/// observes and controls the instance handed to the scenario.
pub struct MockCheck {
    name: String,
    verdict: Arc<Mutex<Verdict>>,
    delay: Arc<Mutex<Option<Duration>>>,
    /// If set, `run` returns this error instead of a verdict.
    force_error: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<u32>>,
}

impl MockCheck {
    /// Create a mock that reports the given verdict on every run.
    pub fn new(name: &str, verdict: Verdict) -> Self {
        Self {
            name: name.to_string(),
            verdict: Arc::new(Mutex::new(verdict)),
            delay: Arc::new(Mutex::new(None)),
            force_error: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a passing mock.
    pub fn passing(name: &str) -> Self {
        Self::new(name, Verdict::passed())
    }

    /// Create a failing mock with the given message.
    pub fn failing(name: &str, message: &str) -> Self {
        Self::new(name, Verdict::failed(message))
    }

    /// Create a skipped mock with the given reason.
    pub fn skipping(name: &str, reason: &str) -> Self {
        Self::new(name, Verdict::skipped(reason))
    }

    /// Replace the verdict reported on subsequent runs.
    #[allow(dead_code)]
    pub fn set_verdict(&self, verdict: Verdict) {
        *self.verdict.lock().unwrap() = verdict;
    }

    /// Force all subsequent runs to return an error.
    pub fn set_error(&self, msg: &str) {
        *self.force_error.lock().unwrap() = Some(msg.to_string());
    }

    /// Clear any forced error.
    pub fn clear_error(&self) {
        *self.force_error.lock().unwrap() = None;
    }

    /// Delay each run by the given duration before reporting.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    /// Number of times `run` has been invoked.
    pub fn call_count(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

impl Clone for MockCheck {
    /// Clones share state with the original.
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            verdict: Arc::clone(&self.verdict),
            delay: Arc::clone(&self.delay),
            force_error: Arc::clone(&self.force_error),
            calls: Arc::clone(&self.calls),
        }
    }
}

#[async_trait]
impl FixtureCheck for MockCheck {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self) -> Result<Verdict> {
        *self.calls.lock().unwrap() += 1;

        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(msg) = self.force_error.lock().unwrap().clone() {
            return Err(anyhow!("{msg}"));
        }

        Ok(self.verdict.lock().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald::types::TestStatus;

    #[tokio::test]
    async fn test_mock_reports_configured_verdict() {
        let mock = MockCheck::failing("broken", "boom");
        let verdict = mock.run().await.unwrap();
        assert_eq!(verdict.status, TestStatus::Failed);
        assert_eq!(verdict.message.as_deref(), Some("boom"));
    }

    #[tokio::test]
    async fn test_mock_counts_calls() {
        let mock = MockCheck::passing("counted");
        assert_eq!(mock.call_count(), 0);

        mock.run().await.unwrap();
        mock.run().await.unwrap();
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_forced_error() {
        let mock = MockCheck::passing("flaky");
        mock.set_error("machinery broke");
        assert!(mock.run().await.is_err());

        mock.clear_error();
        assert!(mock.run().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_clone_shares_state() {
        let mock = MockCheck::passing("shared");
        let handle = mock.clone();

        mock.run().await.unwrap();
        assert_eq!(handle.call_count(), 1);
    }
}
