//! HERALD — Hello Fixture Conformance Harness
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry points.

pub mod config;
pub mod types;
pub mod greeting;
pub mod junit;
pub mod checks;
pub mod runner;
pub mod storage;
