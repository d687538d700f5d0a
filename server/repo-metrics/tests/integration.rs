//! Integration tests for the metrics engine.

use chrono::{TimeZone, Utc};
use repo_metrics::{run, MetricsRequest, Rating};

fn fixture_request() -> MetricsRequest {
  let json = r#"{
    "repo_url": "https://github.com/acme/widgets/",
    "repository": {
      "name": "widgets",
      "stars": 40,
      "forks": 10,
      "watchers_count": 5,
      "collaborators": 2,
      "tags": 3,
      "created_at": "2024-01-01T00:00:00Z",
      "last_updated": "2025-05-20T00:00:00Z",
      "total_commits": 150,
      "open_issues_count": 12
    },
    "files": [
      {"path": "README.md", "content": "short readme"},
      {"path": "requirements.txt", "content": "flask\n"},
      {"path": "app.py", "content": "print('hi')"}
    ]
  }"#;
  serde_json::from_str(json).unwrap()
}

#[test]
fn fixture_produces_scored_output() {
  let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
  let out = run(&fixture_request(), now).unwrap();

  let repo = out.repository.as_ref().unwrap();
  assert_eq!(repo.owner, "acme");
  assert_eq!(repo.repo, "widgets");

  let m = &out.metrics;
  // docs 0.5, structure 0.4, engagement 0.95, maintenance 0.7, issues 0.6, maturity 1.0 -> 4.15
  assert!((m.components.engagement - 0.95).abs() < 1e-9);
  assert!((m.components.maintenance - 0.7).abs() < 1e-9);
  assert!((m.score - 3.5).abs() < 1e-9);
  assert_eq!(m.rating, Rating::Good);
  assert_eq!(m.stars, 3.5);
  assert!(m
    .findings
    .recommendations
    .contains(&"Add unit tests to ensure code quality".to_string()));
}

#[test]
fn output_json_is_flat() {
  let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
  let out = run(&fixture_request(), now).unwrap();
  let value = serde_json::to_value(&out).unwrap();
  assert_eq!(value["rating"], "Good");
  assert_eq!(value["repository"]["owner"], "acme");
  assert!(value["components"]["documentation"].is_number());
  assert!(value["findings"]["strengths"].is_array());
}

#[test]
fn deterministic_output_for_fixed_clock() {
  let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
  let a = serde_json::to_string(&run(&fixture_request(), now).unwrap()).unwrap();
  let b = serde_json::to_string(&run(&fixture_request(), now).unwrap()).unwrap();
  assert_eq!(a, b);
}

#[test]
fn bad_repo_url_gives_clear_error() {
  let mut request = fixture_request();
  request.repo_url = Some("https://github.com/".into());
  let err = run(&request, Utc::now()).unwrap_err();
  assert!(err.to_string().contains("repo_url"), "unexpected error: {}", err);
}

#[test]
fn missing_created_at_is_rejected() {
  let json = r#"{"repository": {"last_updated": "2025-01-01T00:00:00Z"}}"#;
  let err = serde_json::from_str::<MetricsRequest>(json).unwrap_err();
  assert!(err.to_string().contains("created_at"));
}
