//! In-process greeting check.
//!
//! The fastest check: calls the greeting function directly and verifies
//! both the literal value and the repeat-call property.

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use super::FixtureCheck;
use crate::greeting;
use crate::types::{Mismatch, Verdict};

const CHECK_NAME: &str = "greeting literal";

/// Verifies the greeting function against the expected literal.
pub struct InProcessCheck {
    expected: String,
}

impl InProcessCheck {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

#[async_trait]
impl FixtureCheck for InProcessCheck {
    fn name(&self) -> &str {
        CHECK_NAME
    }

    async fn run(&self) -> Result<Verdict> {
        let first = greeting::say_hello();
        if let Some(mismatch) = Mismatch::check(first, &self.expected) {
            return Ok(Verdict::failed(mismatch.to_string()));
        }

        // The fixture is stateless; a second call must not diverge.
        let second = greeting::say_hello();
        if let Some(mismatch) = Mismatch::check(second, first) {
            return Ok(Verdict::failed(format!("second call diverged: {mismatch}")));
        }

        debug!(check = CHECK_NAME, "Greeting literal verified");
        Ok(Verdict::passed())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
