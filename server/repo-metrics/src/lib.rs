//! Repository quality metrics engine: rule-based; no AI, no DB, no network.
//!
//! Scores a repository's documentation, structure, community engagement,
//! maintenance, issue backlog, and maturity, and rates it Excellent..Bad.
//! Used by the binary for stdin/stdout; can also be called as a library.

pub mod config;
pub mod error;
pub mod metrics;
pub mod normalize;
pub mod types;
pub mod url;

use chrono::{DateTime, Utc};

pub use config::Config;
pub use error::MetricsError;
pub use metrics::{generate_metrics, generate_metrics_with};
pub use types::{MetricsOutput, MetricsRequest, QualityMetrics, Rating};
pub use url::parse_repo_url;

/// Run the engine on a parsed request with default thresholds (no I/O).
pub fn run(request: &MetricsRequest, now: DateTime<Utc>) -> Result<MetricsOutput, MetricsError> {
  run_with(request, now, &Config::default())
}

pub fn run_with(
  request: &MetricsRequest,
  now: DateTime<Utc>,
  config: &Config,
) -> Result<MetricsOutput, MetricsError> {
  let repository = request
    .repo_url
    .as_deref()
    .map(parse_repo_url)
    .transpose()?;
  let info = normalize::normalize(&request.repository)?;
  let metrics = generate_metrics_with(&info, &request.files, now, config);
  Ok(MetricsOutput { repository, metrics })
}
