//! The greeting fixture under test.
//!
//! A single pure function returning a fixed literal. The harness
//! checks this exact value in process, through the fixture binary,
//! and through external result files.

/// Return the fixed greeting.
///
/// No inputs, no side effects, no failure path. Every call returns
/// the same `'static` literal.
pub fn say_hello() -> &'static str {
    "hello world"
}
