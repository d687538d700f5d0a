//! Red-flag detection: commit history, contributor ratio, quality variance.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::config::Config;
use crate::types::*;

const MS_PER_DAY: f64 = 86_400_000.0;

/// All red flags for a record, in detection order.
pub fn detect(record: &AnalysisRecord, config: &Config) -> Vec<RedFlag> {
  let mut flags = commit_pattern_flags(&record.commits, config);
  flags.extend(contributor_flags(&record.languages, &record.contributors, config));
  flags.extend(code_quality_flags(record.quality_scores.as_ref(), config));
  for flag in &flags {
    tracing::debug!(kind = ?flag.kind, severity = ?flag.severity, "red flag raised");
  }
  flags
}

/// Commit count, commit time span, and commit message variety.
pub fn commit_pattern_flags(commits: &[Commit], config: &Config) -> Vec<RedFlag> {
  let mut flags = Vec::new();

  if commits.len() < config.min_commits {
    flags.push(RedFlag::new(
      FlagKind::CommitPattern,
      Severity::High,
      "Repository has very few commits which is highly suspicious",
    ));
  } else if let Some(span_days) = commit_span_days(commits) {
    if span_days <= config.burst_window_days {
      flags.push(RedFlag::new(
        FlagKind::CommitPattern,
        Severity::High,
        format!(
          "All commits were made within {} days - highly suspicious for copied code",
          config.burst_window_days
        ),
      ));
    } else if span_days <= config.short_window_days {
      flags.push(RedFlag::new(
        FlagKind::CommitPattern,
        Severity::Medium,
        format!(
          "All commits were made within {} days - potentially suspicious activity",
          config.short_window_days
        ),
      ));
    }
  }

  if let Some(ratio) = unique_message_ratio(commits) {
    if ratio < config.min_unique_message_ratio {
      flags.push(RedFlag::new(
        FlagKind::CommitMessages,
        Severity::Medium,
        "Low variety in commit messages suggests automated or bulk commits",
      ));
    }
  }

  flags
}

/// Days between the earliest and latest commit. `None` for an empty history.
pub fn commit_span_days(commits: &[Commit]) -> Option<f64> {
  let mut dates: Vec<_> = commits.iter().map(|c| c.date).collect();
  dates.sort();
  let first = dates.first()?;
  let last = dates.last()?;
  Some((*last - *first).num_milliseconds() as f64 / MS_PER_DAY)
}

/// Distinct messages / total messages. `None` for an empty history.
pub fn unique_message_ratio(commits: &[Commit]) -> Option<f64> {
  if commits.is_empty() {
    return None;
  }
  let unique: HashSet<&str> = commits.iter().map(|c| c.message.as_str()).collect();
  Some(unique.len() as f64 / commits.len() as f64)
}

/// Large codebase owned by very few people.
pub fn contributor_flags(
  languages: &IndexMap<String, u64>,
  contributors: &[String],
  config: &Config,
) -> Vec<RedFlag> {
  // No contributors means no ratio; never flag.
  if contributors.is_empty() {
    return Vec::new();
  }
  // Summed as f64: byte counts near u64::MAX must not overflow.
  let total_bytes: f64 = languages.values().map(|&b| b as f64).sum();
  let per_contributor = total_bytes / contributors.len() as f64;

  if per_contributor > config.max_code_per_contributor
    && contributors.len() < config.min_contributors
  {
    vec![RedFlag::new(
      FlagKind::ContributorRatio,
      Severity::High,
      "Large codebase with suspiciously few contributors",
    )]
  } else {
    Vec::new()
  }
}

/// Inconsistent quality sub-scores across categories.
pub fn code_quality_flags(scores: Option<&IndexMap<String, f64>>, config: &Config) -> Vec<RedFlag> {
  match scores.and_then(|s| population_variance(s.values().copied())) {
    Some(variance) if variance > config.max_quality_variance => vec![RedFlag::new(
      FlagKind::CodeQuality,
      Severity::Medium,
      "Highly inconsistent code quality across codebase",
    )],
    _ => Vec::new(),
  }
}

/// Population variance (divides by n). `None` when there are no values.
pub fn population_variance(values: impl Iterator<Item = f64> + Clone) -> Option<f64> {
  let n = values.clone().count();
  if n == 0 {
    return None;
  }
  let mean = values.clone().sum::<f64>() / n as f64;
  Some(values.map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64)
}
