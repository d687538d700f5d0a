//! Normalize inbound analysis JSON into a canonical AnalysisRecord.

use chrono::{DateTime, Utc};
use indexmap::{IndexMap, IndexSet};

use crate::error::EngineError;
use crate::types::*;

/// Parse and validate an InboundAnalysis. Runs before any scoring.
pub fn normalize(raw: &InboundAnalysis) -> Result<AnalysisRecord, EngineError> {
  let name = raw.repository.name.trim();
  if name.is_empty() {
    return Err(EngineError::validation("repository.name", "must not be empty"));
  }

  let commits = raw
    .commit_activity
    .recent_commits
    .iter()
    .enumerate()
    .map(|(i, c)| {
      let date: DateTime<Utc> = DateTime::parse_from_rfc3339(&c.date)
        .map_err(|e| {
          EngineError::validation(
            &format!("commit_activity.recent_commits[{}].date", i),
            &format!("invalid RFC3339: {}", e),
          )
        })?
        .with_timezone(&Utc);
      Ok(Commit {
        sha: c.sha.clone(),
        message: c.message.clone(),
        date,
      })
    })
    .collect::<Result<Vec<_>, EngineError>>()?;

  // Dedupe logins, first occurrence wins.
  let mut contributors: IndexSet<String> = IndexSet::with_capacity(raw.contributors.len());
  for (i, c) in raw.contributors.iter().enumerate() {
    let login = c.login().trim();
    if login.is_empty() {
      return Err(EngineError::validation(
        &format!("contributors[{}]", i),
        "login must not be empty",
      ));
    }
    contributors.insert(login.to_string());
  }

  let quality_scores = match raw.ai_analysis.as_ref().and_then(|a| a.score_breakdown.as_ref()) {
    Some(breakdown) => {
      let mut scores = IndexMap::with_capacity(breakdown.len());
      for (category, &value) in breakdown {
        if !value.is_finite() {
          return Err(EngineError::validation(
            &format!("ai_analysis.score_breakdown.{}", category),
            "must be a finite number",
          ));
        }
        scores.insert(category.clone(), value);
      }
      Some(scores)
    }
    None => None,
  };

  Ok(AnalysisRecord {
    repository: Repository {
      name: name.to_string(),
    },
    commits,
    languages: raw.languages.clone(),
    contributors: contributors.into_iter().collect(),
    quality_scores,
  })
}
