//! Binary entrypoint: read one metrics request from stdin, write one result to stdout.
//!
//! On failure, an ErrorOutput object is written to stdout and the process exits 1.
//! Logs go to stderr (filter with RUST_LOG).

use chrono::Utc;
use repo_metrics::types::ErrorOutput;
use repo_metrics::{run_with, Config, MetricsError, MetricsRequest};
use std::io::{self, Read, Write};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Optional path to a JSON file overriding metric thresholds.
const CONFIG_ENV: &str = "REPO_METRICS_CONFIG";

fn main() {
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(io::stderr))
    .with(EnvFilter::from_default_env())
    .init();

  if let Err(e) = run_binary() {
    tracing::error!(error = %e, "repo-metrics failed");
    let err = match &e {
      MetricsError::Validation { field, reason } => {
        ErrorOutput::new(reason.clone()).with_field(field.clone())
      }
      _ => ErrorOutput::new(e.to_string()),
    };
    let mut out = io::stdout().lock();
    let _ = serde_json::to_writer(&mut out, &err);
    let _ = writeln!(out);
    std::process::exit(1);
  }
}

fn run_binary() -> Result<(), MetricsError> {
  let config = match std::env::var(CONFIG_ENV) {
    Ok(path) => Config::from_json(&std::fs::read_to_string(&path)?)?,
    Err(_) => Config::default(),
  };

  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;
  let request: MetricsRequest = serde_json::from_str(&raw)?;

  let out = run_with(&request, Utc::now(), &config)?;
  let json = serde_json::to_vec(&out)?;
  io::stdout().write_all(&json)?;
  Ok(())
}
