//! HERALD — Hello Fixture Conformance Harness
//!
//! Entry point. Loads configuration, initialises structured logging,
//! assembles the conformance scenario from the configured checks, runs
//! it once, persists the report, and exits with the run's status.

use anyhow::Result;
use std::time::Duration;
use tracing::info;

use herald::checks::binary::BinaryCheck;
use herald::checks::in_process::InProcessCheck;
use herald::checks::result_file::ResultFileCheck;
use herald::config::AppConfig;
use herald::runner::Scenario;
use herald::storage;
use herald::types::RunReport;

const BANNER: &str = r#"
 _   _ _____ ____      _    _     ____
| | | | ____|  _ \    / \  | |   |  _ \
| |_| |  _| | |_) |  / _ \ | |   | | | |
|  _  | |___|  _ <  / ___ \| |___| |_| |
|_| |_|_____|_| \_\/_/   \_\_____|____/

  Hello Fixture Conformance Harness
  v0.1.0
"#;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    // Load configuration from TOML
    let cfg = AppConfig::load("config.toml")?;

    // Initialise structured logging
    init_logging();

    // Print startup banner
    println!("{BANNER}");
    info!(
        harness_name = %cfg.harness.name,
        fail_fast = cfg.harness.fail_fast,
        step_timeout_secs = cfg.harness.step_timeout_secs,
        expected_output = %cfg.fixture.expected_output,
        "HERALD starting up"
    );

    // -- Assemble and run the scenario ------------------------------------

    let scenario = build_scenario(&cfg)?;
    info!(steps = scenario.len(), "Scenario assembled");

    let report = scenario.run().await;
    log_run_report(&report);

    // Persist the report before exiting
    storage::save_report(&report, cfg.report.path.as_deref())?;

    std::process::exit(report.exit_code());
}

/// Build the check sequence from configuration.
///
/// The in-process check always runs. The binary and recorded-results
/// checks join the scenario only when their paths are configured.
fn build_scenario(cfg: &AppConfig) -> Result<Scenario> {
    let mut scenario = Scenario::new(
        cfg.harness.name.clone(),
        cfg.harness.fail_fast,
        Duration::from_secs(cfg.harness.step_timeout_secs),
    );

    scenario.add_step(Box::new(InProcessCheck::new(
        cfg.fixture.expected_output.clone(),
    )));

    match cfg.fixture.resolve_binary()? {
        Some(program) => {
            scenario.add_step(Box::new(BinaryCheck::new(
                program,
                cfg.fixture.expected_output.clone(),
            )));
        }
        None => info!("No fixture binary configured — binary check omitted"),
    }

    match cfg.fixture.resolve_junit_xml()? {
        Some(path) => {
            scenario.add_step(Box::new(ResultFileCheck::new(path)));
        }
        None => info!("No result file configured — recorded-results check omitted"),
    }

    Ok(scenario)
}

/// Log a human-readable run summary.
fn log_run_report(report: &RunReport) {
    info!(
        run_id = %report.run_id,
        steps = report.steps.len(),
        passed = report.passed(),
        failed = report.failed(),
        skipped = report.skipped(),
        duration_secs = format!("{:.2}", report.duration_secs()),
        success = report.is_success(),
        "Run complete"
    );
    for step in &report.steps {
        info!(step = %step, "Step result");
    }
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("herald=info"));

    let json_logging = std::env::var("HERALD_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    }
}
