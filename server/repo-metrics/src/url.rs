//! GitHub repository URL parsing.

use crate::error::MetricsError;
use crate::types::RepoRef;

/// Extract `owner/repo` from a GitHub URL, e.g. `https://github.com/rust-lang/cargo/`.
pub fn parse_repo_url(url: &str) -> Result<RepoRef, MetricsError> {
  let trimmed = url.trim().trim_end_matches('/');
  let without_scheme = trimmed
    .split_once("://")
    .map(|(_, rest)| rest)
    .unwrap_or(trimmed);

  let segments: Vec<&str> = without_scheme.split('/').filter(|s| !s.is_empty()).collect();
  let (owner, repo) = match segments.as_slice() {
    [.., owner, repo] => (*owner, repo.strip_suffix(".git").unwrap_or(*repo)),
    _ => return Err(MetricsError::validation("repo_url", "expected <host>/<owner>/<repo>")),
  };

  // A dotted owner is the host itself (e.g. "github.com/cargo").
  if owner.contains('.') || owner.contains(':') || repo.is_empty() {
    return Err(MetricsError::validation("repo_url", "expected <host>/<owner>/<repo>"));
  }

  Ok(RepoRef {
    owner: owner.to_string(),
    repo: repo.to_string(),
  })
}
