//! Configuration loading from TOML with environment variable resolution.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! Paths that depend on the invoking environment (the fixture binary,
//! a runner-produced result file) may be given as `env:VAR_NAME` and
//! are resolved at runtime via `std::env::var`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub harness: HarnessConfig,
    pub fixture: FixtureConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HarnessConfig {
    pub name: String,
    #[serde(default)]
    pub fail_fast: bool,
    #[serde(default = "default_step_timeout_secs")]
    pub step_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FixtureConfig {
    /// The literal every check compares against.
    #[serde(default = "default_expected_output")]
    pub expected_output: String,
    /// Fixture application path. Accepts `env:VAR_NAME` indirection.
    #[serde(default)]
    pub binary: Option<String>,
    /// Runner-produced result file. Accepts `env:VAR_NAME` indirection.
    #[serde(default)]
    pub junit_xml: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ReportConfig {
    /// Where to persist the run report. Defaults to the storage path.
    #[serde(default)]
    pub path: Option<String>,
}

fn default_expected_output() -> String {
    "hello world".to_string()
}

fn default_step_timeout_secs() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        Ok(config)
    }

    /// Resolve a config value, dereferencing `env:VAR_NAME` indirection.
    pub fn resolve_value(value: &str) -> Result<String> {
        match value.strip_prefix("env:") {
            Some(var) => Self::resolve_env(var),
            None => Ok(value.to_string()),
        }
    }

    /// Resolve an environment variable name to its value.
    pub fn resolve_env(env_name: &str) -> Result<String> {
        std::env::var(env_name)
            .with_context(|| format!("Environment variable not set: {env_name}"))
    }
}

impl FixtureConfig {
    /// The fixture binary path with `env:` indirection applied.
    pub fn resolve_binary(&self) -> Result<Option<String>> {
        self.binary
            .as_deref()
            .map(AppConfig::resolve_value)
            .transpose()
    }

    /// The result file path with `env:` indirection applied.
    pub fn resolve_junit_xml(&self) -> Result<Option<String>> {
        self.junit_xml
            .as_deref()
            .map(AppConfig::resolve_value)
            .transpose()
    }
}
