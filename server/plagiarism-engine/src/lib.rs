//! Repository plagiarism risk engine: rule-based, deterministic; no AI, no DB, no network.
//!
//! Flags suspicious commit history, code-per-contributor ratios, and
//! inconsistent quality scores, then folds them into a 0–100 risk score.
//! Used by the binary for stdin/stdout; can also be called as a library.

pub mod config;
pub mod error;
pub mod flags;
pub mod normalize;
pub mod score;
pub mod types;

use chrono::{SecondsFormat, Utc};

pub use config::Config;
pub use error::EngineError;
pub use types::{AnalysisRecord, InboundAnalysis, PlagiarismReport, RiskLevel, RiskReport};

/// Evaluate a record with the default thresholds.
pub fn evaluate(record: &AnalysisRecord) -> RiskReport {
  evaluate_with(record, &Config::default())
}

/// Evaluate a record. Pure apart from the report timestamp.
pub fn evaluate_with(record: &AnalysisRecord, config: &Config) -> RiskReport {
  let red_flags = flags::detect(record, config);
  let score = score::compute_score(&red_flags, config);
  let risk_level = score::risk_level(score, config);
  let recommendations = score::compute_recommendations(&red_flags);

  let metadata = types::RiskMetadata {
    total_commits: record.commits.len(),
    contributor_count: record.contributors.len(),
    languages_used: record.languages.keys().cloned().collect(),
  };

  tracing::info!(
    repository = %record.repository.name,
    score,
    risk_level = ?risk_level,
    flags = red_flags.len(),
    "risk evaluated"
  );

  RiskReport {
    score,
    risk_level,
    red_flags,
    recommendations,
    metadata,
    timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
  }
}

/// Normalize inbound JSON, evaluate it, and build the wire report.
pub fn run(input: &InboundAnalysis) -> Result<PlagiarismReport, EngineError> {
  run_with(input, &Config::default())
}

pub fn run_with(input: &InboundAnalysis, config: &Config) -> Result<PlagiarismReport, EngineError> {
  let record = normalize::normalize(input)?;
  let report = evaluate_with(&record, config);
  Ok(PlagiarismReport::from_report(record.repository.name, report))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::*;
  use chrono::{Duration, TimeZone};
  use indexmap::IndexMap;

  fn record(commits: Vec<Commit>, contributors: usize, bytes: u64) -> AnalysisRecord {
    AnalysisRecord {
      repository: Repository {
        name: "demo".into(),
      },
      commits,
      languages: IndexMap::from([("TypeScript".to_string(), bytes)]),
      contributors: (0..contributors).map(|i| format!("dev{}", i)).collect(),
      quality_scores: None,
    }
  }

  fn history(n: usize, step: Duration) -> Vec<Commit> {
    let start = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    (0..n)
      .map(|i| Commit {
        sha: format!("{:07x}", i),
        message: format!("commit {}", i),
        date: start + step * i as i32,
      })
      .collect()
  }

  #[test]
  fn evaluate_returns_valid_shape() {
    let out = evaluate(&record(history(3, Duration::hours(5)), 4, 10_000));
    assert!(out.score >= 0.0 && out.score <= 100.0);
    assert_eq!(out.metadata.total_commits, 3);
    assert_eq!(out.metadata.contributor_count, 4);
    assert_eq!(out.metadata.languages_used, vec!["TypeScript"]);
    assert!(out.timestamp.ends_with('Z'));
  }

  #[test]
  fn few_commits_scores_at_least_thirty() {
    let out = evaluate(&record(history(1, Duration::days(1)), 5, 1_000));
    assert!(out.score >= 30.0);
    assert!(out
      .red_flags
      .iter()
      .any(|f| f.kind == FlagKind::CommitPattern && f.severity == Severity::High));
  }

  #[test]
  fn stacked_flags_reach_medium_risk() {
    let mut rec = record(history(10, Duration::minutes(10)), 1, 3_000_000);
    for c in rec.commits.iter_mut() {
      c.message = "update".into();
    }
    rec.quality_scores = Some(IndexMap::from([
      ("style".to_string(), 0.0),
      ("tests".to_string(), 2.0),
    ]));
    let out = evaluate(&rec);
    // 2.0 + 0.6 + 1.0 + 0.6 = 4.2 -> 63
    assert_eq!(out.red_flags.len(), 4);
    assert!((out.score - 63.0).abs() < 1e-9);
    assert_eq!(out.risk_level, RiskLevel::Medium);
    assert_eq!(out.recommendations.len(), 6);
  }

  #[test]
  fn custom_config_changes_level() {
    let config = Config {
      score_scale: 40.0,
      ..Config::default()
    };
    let out = evaluate_with(&record(history(2, Duration::hours(1)), 5, 1_000), &config);
    assert!((out.score - 80.0).abs() < 1e-9);
    assert_eq!(out.risk_level, RiskLevel::High);
  }
}
