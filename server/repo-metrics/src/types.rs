//! Input/output types for the metrics engine (JSON contract with the backend).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Inbound types
// ---------------------------------------------------------------------------

/// One metrics request. Unknown fields are silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsRequest {
  #[serde(default)]
  pub repo_url: Option<String>,
  pub repository: InboundRepoInfo,
  #[serde(default)]
  pub files: Vec<RepoFile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundRepoInfo {
  #[serde(default)]
  pub stars: u64,
  #[serde(default)]
  pub forks: u64,
  #[serde(default, alias = "watchers_count")]
  pub watchers: u64,
  /// Number of collaborators.
  #[serde(default)]
  pub collaborators: u64,
  /// Number of release tags.
  #[serde(default)]
  pub tags: u64,
  pub created_at: String,
  pub last_updated: String,
  #[serde(default)]
  pub total_commits: u64,
  #[serde(default, alias = "open_issues_count")]
  pub open_issues: u64,
}

/// A sampled file from the repository root.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoFile {
  pub path: String,
  #[serde(default)]
  pub content: String,
}

// ---------------------------------------------------------------------------
// Internal normalized types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct RepoInfo {
  pub stars: u64,
  pub forks: u64,
  pub watchers: u64,
  pub collaborators: u64,
  pub tags: u64,
  pub created_at: DateTime<Utc>,
  pub last_updated: DateTime<Utc>,
  pub total_commits: u64,
  pub open_issues: u64,
}

/// `owner/repo` pair parsed from a GitHub URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoRef {
  pub owner: String,
  pub repo: String,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rating {
  Excellent,
  Good,
  Average,
  Poor,
  Bad,
}

impl Rating {
  pub fn from_score(score: f64) -> Self {
    if score >= 4.5 {
      Self::Excellent
    } else if score >= 3.5 {
      Self::Good
    } else if score >= 2.5 {
      Self::Average
    } else if score >= 1.5 {
      Self::Poor
    } else {
      Self::Bad
    }
  }

  /// Star value shown next to the rating badge (out of 5).
  pub fn stars(self) -> f64 {
    match self {
      Self::Excellent => 4.5,
      Self::Good => 3.5,
      Self::Average => 2.5,
      Self::Poor => 2.0,
      Self::Bad => 1.0,
    }
  }
}

/// Per-category scores, each in [0, 1].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreComponents {
  pub documentation: f64,
  pub structure: f64,
  pub engagement: f64,
  pub maintenance: f64,
  pub issues: f64,
  pub maturity: f64,
}

impl ScoreComponents {
  pub const COUNT: f64 = 6.0;

  pub fn total(&self) -> f64 {
    self.documentation + self.structure + self.engagement + self.maintenance + self.issues + self.maturity
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Findings {
  pub strengths: Vec<String>,
  pub areas_for_improvement: Vec<String>,
  pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QualityMetrics {
  /// 0–5, one decimal.
  pub score: f64,
  pub rating: Rating,
  pub stars: f64,
  pub components: ScoreComponents,
  pub findings: Findings,
}

/// Output: one JSON object to stdout.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsOutput {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub repository: Option<RepoRef>,
  #[serde(flatten)]
  pub metrics: QualityMetrics,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}
