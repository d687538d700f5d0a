//! Metrics configuration with sane defaults.

use serde::Deserialize;

use crate::error::MetricsError;

/// Tunable thresholds for quality scoring.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
  /// README longer than this (chars) counts as comprehensive.
  pub readme_detailed_length: usize,
  /// Repos at most this many days old are "very new".
  pub new_repo_days: i64,
  /// Repos at most this many days old are "relatively new".
  pub young_repo_days: i64,
  /// Engagement below this asks for more community involvement.
  pub low_engagement: f64,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      readme_detailed_length: 500,
      new_repo_days: 7,
      young_repo_days: 30,
      low_engagement: 0.3,
    }
  }
}

impl Config {
  pub fn from_json(raw: &str) -> Result<Self, MetricsError> {
    let config: Config = serde_json::from_str(raw)?;
    if config.new_repo_days > config.young_repo_days {
      return Err(MetricsError::validation(
        "new_repo_days",
        "must not exceed young_repo_days",
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
    let config = Config::from_json(r#"{"readme_detailed_length": 1000}"#).unwrap();
    assert_eq!(config.readme_detailed_length, 1000);
    assert_eq!(config.young_repo_days, 30);
  }

  #[test]
  fn inverted_age_windows_are_rejected() {
    let err = Config::from_json(r#"{"new_repo_days": 60}"#).unwrap_err();
    assert!(err.to_string().contains("new_repo_days"));
  }
}
