//! Aggregate risk score, risk level, and recommendations.

use crate::config::Config;
use crate::types::*;

impl Severity {
  pub fn weight(self, config: &Config) -> f64 {
    match self {
      Self::High => config.high_weight,
      Self::Medium => config.medium_weight,
      Self::Low => config.low_weight,
    }
  }
}

/// Weighted flag sum scaled to 0–100. Commit pattern flags count double.
pub fn compute_score(flags: &[RedFlag], config: &Config) -> f64 {
  let raw: f64 = flags
    .iter()
    .map(|flag| {
      let weight = flag.severity.weight(config);
      if flag.kind == FlagKind::CommitPattern {
        weight * config.commit_pattern_multiplier
      } else {
        weight
      }
    })
    .sum();
  (raw * config.score_scale).clamp(0.0, 100.0)
}

pub fn risk_level(score: f64, config: &Config) -> RiskLevel {
  if score > config.high_risk_threshold {
    RiskLevel::High
  } else if score > config.medium_risk_threshold {
    RiskLevel::Medium
  } else {
    RiskLevel::Low
  }
}

fn recommendations_for(kind: FlagKind) -> &'static [&'static str] {
  match kind {
    FlagKind::CommitPattern => &[
      "Investigate commit history for bulk copying of code",
      "Review git logs for signs of repository copying",
    ],
    FlagKind::ContributorRatio => &[
      "Review contributor permissions and access patterns",
      "Verify authenticity of large code contributions",
    ],
    FlagKind::CodeQuality => &[
      "Conduct detailed code review of inconsistent sections",
      "Check for mixing of different coding styles/standards",
    ],
    FlagKind::CommitMessages => &[],
  }
}

/// Recommendations in order of first appearance, without duplicates.
pub fn compute_recommendations(flags: &[RedFlag]) -> Vec<String> {
  let mut out: Vec<String> = Vec::new();
  for flag in flags {
    for rec in recommendations_for(flag.kind) {
      if !out.iter().any(|r| r == rec) {
        out.push(rec.to_string());
      }
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  fn flag(kind: FlagKind, severity: Severity) -> RedFlag {
    RedFlag::new(kind, severity, "test")
  }

  #[test]
  fn commit_pattern_counts_double() {
    let config = Config::default();
    let score = compute_score(&[flag(FlagKind::CommitPattern, Severity::High)], &config);
    assert!((score - 30.0).abs() < 1e-9);
    let score = compute_score(&[flag(FlagKind::ContributorRatio, Severity::High)], &config);
    assert!((score - 15.0).abs() < 1e-9);
  }

  #[test]
  fn score_is_capped_at_100() {
    let flags: Vec<_> = (0..10)
      .map(|_| flag(FlagKind::CommitPattern, Severity::High))
      .collect();
    assert_eq!(compute_score(&flags, &Config::default()), 100.0);
  }

  #[test]
  fn risk_level_thresholds_are_exclusive() {
    let config = Config::default();
    assert_eq!(risk_level(0.0, &config), RiskLevel::Low);
    assert_eq!(risk_level(40.0, &config), RiskLevel::Low);
    assert_eq!(risk_level(40.5, &config), RiskLevel::Medium);
    assert_eq!(risk_level(70.0, &config), RiskLevel::Medium);
    assert_eq!(risk_level(70.5, &config), RiskLevel::High);
  }

  #[test]
  fn recommendations_dedupe_and_keep_order() {
    let flags = vec![
      flag(FlagKind::CommitPattern, Severity::High),
      flag(FlagKind::CommitPattern, Severity::Medium),
      flag(FlagKind::CommitMessages, Severity::Medium),
      flag(FlagKind::ContributorRatio, Severity::High),
      flag(FlagKind::CodeQuality, Severity::Medium),
    ];
    let recs = compute_recommendations(&flags);
    assert_eq!(
      recs,
      vec![
        "Investigate commit history for bulk copying of code",
        "Review git logs for signs of repository copying",
        "Review contributor permissions and access patterns",
        "Verify authenticity of large code contributions",
        "Conduct detailed code review of inconsistent sections",
        "Check for mixing of different coding styles/standards",
      ]
    );
  }

  #[test]
  fn commit_messages_alone_has_no_recommendations() {
    let recs = compute_recommendations(&[flag(FlagKind::CommitMessages, Severity::Medium)]);
    assert!(recs.is_empty());
  }
}
