//! Normalize inbound repository info into RepoInfo.

use chrono::{DateTime, Utc};

use crate::error::MetricsError;
use crate::types::{InboundRepoInfo, RepoInfo};

pub fn normalize(raw: &InboundRepoInfo) -> Result<RepoInfo, MetricsError> {
  Ok(RepoInfo {
    stars: raw.stars,
    forks: raw.forks,
    watchers: raw.watchers,
    collaborators: raw.collaborators,
    tags: raw.tags,
    created_at: parse_timestamp("repository.created_at", &raw.created_at)?,
    last_updated: parse_timestamp("repository.last_updated", &raw.last_updated)?,
    total_commits: raw.total_commits,
    open_issues: raw.open_issues,
  })
}

fn parse_timestamp(field: &str, value: &str) -> Result<DateTime<Utc>, MetricsError> {
  DateTime::parse_from_rfc3339(value)
    .map(|t| t.with_timezone(&Utc))
    .map_err(|e| MetricsError::validation(field, &format!("invalid RFC3339: {}", e)))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn make_inbound() -> InboundRepoInfo {
    InboundRepoInfo {
      stars: 10,
      forks: 2,
      watchers: 4,
      collaborators: 1,
      tags: 0,
      created_at: "2024-01-01T00:00:00Z".into(),
      last_updated: "2025-01-01T12:00:00Z".into(),
      total_commits: 120,
      open_issues: 3,
    }
  }

  #[test]
  fn normalize_valid_info() {
    let info = normalize(&make_inbound()).unwrap();
    assert_eq!(info.stars, 10);
    assert_eq!(info.created_at.to_rfc3339(), "2024-01-01T00:00:00+00:00");
  }

  #[test]
  fn normalize_rejects_bad_timestamp() {
    let mut raw = make_inbound();
    raw.last_updated = "last week".into();
    let err = normalize(&raw).unwrap_err();
    assert!(err.to_string().contains("repository.last_updated"));
  }
}
