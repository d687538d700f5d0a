//! Core types for the plagiarism engine (JSON contracts + internal models).

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Inbound types (JSON contract: what the backend sends)
// ---------------------------------------------------------------------------

/// One analysis record from the backend. Unknown fields are silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundAnalysis {
  pub repository: InboundRepository,
  pub commit_activity: InboundCommitActivity,
  pub languages: IndexMap<String, u64>,
  pub contributors: Vec<InboundContributor>,
  #[serde(default)]
  pub ai_analysis: Option<InboundAiAnalysis>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundRepository {
  pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundCommitActivity {
  pub recent_commits: Vec<InboundCommit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundCommit {
  #[serde(default)]
  pub sha: String,
  pub message: String,
  pub date: String,
}

/// Contributors arrive either as bare logins or as GitHub contributor objects.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum InboundContributor {
  Login(String),
  Detailed { login: String },
}

impl InboundContributor {
  pub fn login(&self) -> &str {
    match self {
      Self::Login(login) => login,
      Self::Detailed { login } => login,
    }
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundAiAnalysis {
  #[serde(default)]
  pub score_breakdown: Option<IndexMap<String, f64>>,
}

// ---------------------------------------------------------------------------
// Internal normalized types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
  pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
  pub sha: String,
  pub message: String,
  pub date: DateTime<Utc>,
}

/// Canonical analysis record after normalization + validation.
#[derive(Debug, Clone)]
pub struct AnalysisRecord {
  pub repository: Repository,
  /// Order as received; the scorer sorts its own copy by date.
  pub commits: Vec<Commit>,
  /// Language name -> bytes, in the order the backend reported them.
  pub languages: IndexMap<String, u64>,
  /// Distinct contributor logins.
  pub contributors: Vec<String>,
  /// Category -> score in [0, 1]. `None` when the AI gave no breakdown.
  pub quality_scores: Option<IndexMap<String, f64>>,
}

// ---------------------------------------------------------------------------
// Flags
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagKind {
  CommitPattern,
  CommitMessages,
  ContributorRatio,
  CodeQuality,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  High,
  Medium,
  Low,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RedFlag {
  #[serde(rename = "type")]
  pub kind: FlagKind,
  pub severity: Severity,
  pub description: String,
}

impl RedFlag {
  pub fn new(kind: FlagKind, severity: Severity, description: impl Into<String>) -> Self {
    Self {
      kind,
      severity,
      description: description.into(),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
  Low,
  Medium,
  High,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskMetadata {
  pub total_commits: usize,
  pub contributor_count: usize,
  pub languages_used: Vec<String>,
}

/// Result of one evaluation. Everything except `timestamp` is a pure
/// function of the input record.
#[derive(Debug, Clone, Serialize)]
pub struct RiskReport {
  pub score: f64,
  pub risk_level: RiskLevel,
  pub red_flags: Vec<RedFlag>,
  pub recommendations: Vec<String>,
  pub metadata: RiskMetadata,
  pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
  pub score: f64,
  pub risk_level: RiskLevel,
  pub red_flags: Vec<RedFlag>,
}

/// Wire report rendered by the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct PlagiarismReport {
  pub repository_name: String,
  pub analysis_timestamp: String,
  pub risk_assessment: RiskAssessment,
  pub recommendations: Vec<String>,
  pub metadata: RiskMetadata,
}

impl PlagiarismReport {
  pub fn from_report(repository_name: impl Into<String>, report: RiskReport) -> Self {
    Self {
      repository_name: repository_name.into(),
      analysis_timestamp: report.timestamp,
      risk_assessment: RiskAssessment {
        score: report.score,
        risk_level: report.risk_level,
        red_flags: report.red_flags,
      },
      recommendations: report.recommendations,
      metadata: report.metadata,
    }
  }
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
