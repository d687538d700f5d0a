//! Scoring configuration. Defaults are the production constants.

use serde::Deserialize;

use crate::error::EngineError;

/// Tunable thresholds and weights for risk scoring.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Fewer commits than this is itself a high-severity flag.
  pub min_commits: usize,
  /// Commit span (days) at or under which the history looks like a bulk import.
  pub burst_window_days: f64,
  /// Commit span (days) at or under which the history is merely suspicious.
  pub short_window_days: f64,
  /// Distinct/total commit message ratio below which messages look automated.
  pub min_unique_message_ratio: f64,
  /// Bytes of code per contributor above which the ratio is suspicious.
  pub max_code_per_contributor: f64,
  /// The contributor-ratio flag only fires below this many contributors.
  pub min_contributors: usize,
  /// Population variance of quality sub-scores above which quality is inconsistent.
  pub max_quality_variance: f64,
  pub high_weight: f64,
  pub medium_weight: f64,
  pub low_weight: f64,
  /// Extra multiplier applied to commit_pattern flags.
  pub commit_pattern_multiplier: f64,
  /// Raw weighted sum -> 0..100 scale factor.
  pub score_scale: f64,
  /// Scores strictly above this are High risk.
  pub high_risk_threshold: f64,
  /// Scores strictly above this (and not High) are Medium risk.
  pub medium_risk_threshold: f64,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      min_commits: 2,
      burst_window_days: 2.0,
      short_window_days: 7.0,
      min_unique_message_ratio: 0.3,
      max_code_per_contributor: 1_000_000.0,
      min_contributors: 3,
      max_quality_variance: 0.5,
      high_weight: 1.0,
      medium_weight: 0.6,
      low_weight: 0.3,
      commit_pattern_multiplier: 2.0,
      score_scale: 15.0,
      high_risk_threshold: 70.0,
      medium_risk_threshold: 40.0,
    }
  }
}

impl Config {
  /// Parse a (possibly partial) JSON override; missing keys keep their defaults.
  pub fn from_json(raw: &str) -> Result<Self, EngineError> {
    let config: Config = serde_json::from_str(raw)?;
    if config.medium_risk_threshold > config.high_risk_threshold {
      return Err(EngineError::validation(
        "medium_risk_threshold",
        "must not exceed high_risk_threshold",
      ));
    }
    if config.burst_window_days > config.short_window_days {
      return Err(EngineError::validation(
        "burst_window_days",
        "must not exceed short_window_days",
      ));
    }
    Ok(config)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn partial_override_keeps_defaults() {
    let config = Config::from_json(r#"{"score_scale": 20.0}"#).unwrap();
    assert_eq!(config.score_scale, 20.0);
    assert_eq!(config.min_commits, 2);
    assert_eq!(config.high_risk_threshold, 70.0);
  }

  #[test]
  fn inverted_thresholds_are_rejected() {
    let err = Config::from_json(r#"{"medium_risk_threshold": 80.0}"#).unwrap_err();
    assert!(err.to_string().contains("medium_risk_threshold"));
  }
}
