//! Binary entrypoint: read one analysis JSON object from stdin, write one report to stdout.
//!
//! On failure, an ErrorOutput object is written to stdout and the process exits 1.
//! Logs go to stderr (filter with RUST_LOG).

use plagiarism_engine::types::ErrorOutput;
use plagiarism_engine::{run_with, Config, EngineError, InboundAnalysis};
use std::io::{self, Read, Write};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Optional path to a JSON file overriding scoring thresholds.
const CONFIG_ENV: &str = "PLAGIARISM_ENGINE_CONFIG";

fn main() {
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(io::stderr))
    .with(EnvFilter::from_default_env())
    .init();

  if let Err(e) = run_binary() {
    tracing::error!(error = %e, "plagiarism-engine failed");
    let err = match &e {
      EngineError::Validation { field, reason } => {
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

fn run_binary() -> Result<(), EngineError> {
  let config = load_config()?;

  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;
  let input: InboundAnalysis = serde_json::from_str(&raw)?;

  let report = run_with(&input, &config)?;
  let json = serde_json::to_vec(&report)?;
  io::stdout().write_all(&json)?;
  Ok(())
}

fn load_config() -> Result<Config, EngineError> {
  match std::env::var(CONFIG_ENV) {
    Ok(path) => {
      tracing::debug!(%path, "loading config override");
      Config::from_json(&std::fs::read_to_string(&path)?)
    }
    Err(_) => Ok(Config::default()),
  }
}
