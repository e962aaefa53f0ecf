//! JUnit-style `test.xml` result parsing.
//!
//! External runners write one `test.xml` per test target. The harness
//! reads those files back to verify what the runner recorded about the
//! fixture.
//!
//! Root: `<testsuites>` wrapping suites, or a bare `<testsuite>`.
//! Counts: taken from the suite attributes, defaulting to 0.
//! Timestamps: ISO 8601, with or without a trailing zone designator.
//! Unknown attributes and elements are ignored.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use roxmltree::{Document, Node};
use std::fs;
use tracing::debug;

use crate::types::{CaseDetail, CaseResult, SuiteResult, TestStatus};

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a `test.xml` document into suite results.
///
/// Accepts either a `<testsuites>` root or a single bare `<testsuite>`.
/// Any other root element is an error.
pub fn parse_suites(xml: &str) -> Result<Vec<SuiteResult>> {
    let doc = Document::parse(xml).context("Failed to parse test result XML")?;
    let root = doc.root_element();

    match root.tag_name().name() {
        "testsuites" => Ok(root
            .children()
            .filter(|n| n.has_tag_name("testsuite"))
            .map(parse_suite)
            .collect()),
        "testsuite" => Ok(vec![parse_suite(root)]),
        other => anyhow::bail!("Unexpected root element <{other}> in test result XML"),
    }
}

/// Read and parse a `test.xml` file from disk.
pub fn read_suites(path: &str) -> Result<Vec<SuiteResult>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read test results from {path}"))?;
    let suites = parse_suites(&raw)
        .with_context(|| format!("Failed to parse test results from {path}"))?;

    debug!(path = %path, suites = suites.len(), "Test result file parsed");
    Ok(suites)
}

// -- Internal helpers --------------------------------------------------------

fn parse_suite(node: Node<'_, '_>) -> SuiteResult {
    SuiteResult {
        name: attr_string(node, "name").unwrap_or_default(),
        timestamp: attr_string(node, "timestamp")
            .as_deref()
            .and_then(parse_timestamp),
        hostname: attr_string(node, "hostname"),
        tests: attr_u32(node, "tests"),
        failures: attr_u32(node, "failures"),
        errors: attr_u32(node, "errors"),
        time_secs: attr_f64(node, "time"),
        package: attr_string(node, "package"),
        cases: node
            .children()
            .filter(|n| n.has_tag_name("testcase"))
            .map(parse_case)
            .collect(),
    }
}

fn parse_case(node: Node<'_, '_>) -> CaseResult {
    // Outcome precedence mirrors the result format: an error outranks
    // a failure, which outranks a skip.
    let (status, detail) = if let Some(d) = child_detail(node, "error") {
        (TestStatus::Failed, Some(d))
    } else if let Some(d) = child_detail(node, "failure") {
        (TestStatus::Failed, Some(d))
    } else if let Some(d) = child_detail(node, "skipped") {
        (TestStatus::Skipped, Some(d))
    } else {
        (TestStatus::Passed, None)
    };

    CaseResult {
        name: attr_string(node, "name").unwrap_or_default(),
        classname: attr_string(node, "classname"),
        time_secs: attr_f64(node, "time"),
        status,
        detail,
    }
}

/// Extract a `<failure>`, `<error>`, or `<skipped>` child element.
/// A self-closing empty tag is valid and yields an all-empty detail.
fn child_detail(node: Node<'_, '_>, name: &str) -> Option<CaseDetail> {
    let child = node.children().find(|n| n.has_tag_name(name))?;
    Some(CaseDetail {
        message: child.attribute("message").map(str::to_string),
        type_name: child.attribute("type").map(str::to_string),
        body: child
            .text()
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string),
    })
}

fn attr_string(node: Node<'_, '_>, name: &str) -> Option<String> {
    node.attribute(name).map(str::to_string)
}

fn attr_u32(node: Node<'_, '_>, name: &str) -> u32 {
    node.attribute(name)
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

fn attr_f64(node: Node<'_, '_>, name: &str) -> f64 {
    node.attribute(name)
        .and_then(|v| v.parse().ok())
        .unwrap_or(0.0)
}

/// Parse a result-file timestamp. Runners disagree on whether the
/// value carries a zone designator, so both forms are accepted.
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = s.parse::<DateTime<Utc>>() {
        return Some(dt);
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
