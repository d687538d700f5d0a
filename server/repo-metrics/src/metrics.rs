//! Repository quality score from documentation, structure, engagement,
//! maintenance, open issues, and maturity.
//!
//! Each category contributes at most 1.0; the total is rescaled to 0–5 and
//! mapped to a rating. Every category also appends human-readable findings.

use chrono::{DateTime, Duration, Utc};

use crate::config::Config;
use crate::types::*;

/// Score a repository with the default thresholds.
pub fn generate_metrics(repo: &RepoInfo, files: &[RepoFile], now: DateTime<Utc>) -> QualityMetrics {
  generate_metrics_with(repo, files, now, &Config::default())
}

/// Score a repository. `now` is passed in so results are reproducible.
pub fn generate_metrics_with(
  repo: &RepoInfo,
  files: &[RepoFile],
  now: DateTime<Utc>,
  config: &Config,
) -> QualityMetrics {
  let mut findings = Findings::default();
  let age_days = whole_days(now - repo.created_at);
  let days_since_update = whole_days(now - repo.last_updated);
  let frequency = commits_per_month(repo.total_commits, age_days);

  // Order matters: findings are reported category by category.
  let documentation = documentation_score(files, config, &mut findings);
  let structure = structure_score(files, &mut findings);
  let engagement = engagement_score(repo, frequency, config, &mut findings);
  let maintenance = maintenance_score(frequency, days_since_update, &mut findings);
  let issues = issues_score(repo.open_issues, &mut findings);
  let maturity = maturity_score(age_days, config, &mut findings);

  let components = ScoreComponents {
    documentation,
    structure,
    engagement,
    maintenance,
    issues,
    maturity,
  };
  let score = round_to(components.total() / ScoreComponents::COUNT * 5.0, 1);
  let rating = Rating::from_score(score);

  tracing::debug!(?components, age_days, days_since_update, frequency, "quality components");
  tracing::info!(score, rating = ?rating, "quality metrics generated");

  QualityMetrics {
    score,
    rating,
    stars: rating.stars(),
    components,
    findings,
  }
}

/// Whole days elapsed, rounded toward negative infinity.
fn whole_days(elapsed: Duration) -> i64 {
  elapsed.num_seconds().div_euclid(86_400)
}

/// Commits per 30 days over the repository's lifetime; 0 for repos under a day old.
pub fn commits_per_month(total_commits: u64, age_days: i64) -> f64 {
  if age_days < 1 {
    0.0
  } else {
    total_commits as f64 * 30.0 / age_days as f64
  }
}

/// Round on the exact decimal expansion of `value`, so 1.4499.. stays 1.4.
fn round_to(value: f64, places: usize) -> f64 {
  format!("{:.*}", places, value).parse().unwrap_or(value)
}

fn documentation_score(files: &[RepoFile], config: &Config, findings: &mut Findings) -> f64 {
  let readme = files.iter().find(|f| f.path.to_lowercase() == "readme.md");
  match readme {
    Some(f) if f.content.chars().count() > config.readme_detailed_length => {
      findings.strengths.push("Comprehensive README documentation".into());
      1.0
    }
    Some(_) => {
      findings.areas_for_improvement.push("README could be more detailed".into());
      findings
        .recommendations
        .push("Expand README with installation, usage, and contribution guidelines".into());
      0.5
    }
    None => {
      findings.areas_for_improvement.push("Missing README documentation".into());
      findings
        .recommendations
        .push("Add a README.md file with project documentation".into());
      0.0
    }
  }
}

fn structure_score(files: &[RepoFile], findings: &mut Findings) -> f64 {
  let has_manifest = files.iter().any(|f| {
    f.path.ends_with(".txt") || f.path.ends_with(".toml") || f.path.ends_with("package.json")
  });
  let has_gitignore = files.iter().any(|f| f.path == ".gitignore");
  let has_tests = files.iter().any(|f| f.path.to_lowercase().contains("test"));

  let mut score = 0.0;
  if has_manifest {
    score += 0.4;
    findings.strengths.push("Dependency management files present".into());
  } else {
    findings
      .recommendations
      .push("Add dependency management files (requirements.txt/package.json)".into());
  }
  if has_gitignore {
    score += 0.3;
    findings
      .strengths
      .push("Proper git configuration with .gitignore".into());
  }
  if has_tests {
    score += 0.3;
    findings.strengths.push("Testing infrastructure present".into());
  } else {
    findings.areas_for_improvement.push("No tests found".into());
    findings
      .recommendations
      .push("Add unit tests to ensure code quality".into());
  }
  score
}

fn engagement_score(repo: &RepoInfo, frequency: f64, config: &Config, findings: &mut Findings) -> f64 {
  let factors = [
    (repo.stars as f64 / 100.0).min(0.3),
    (repo.forks as f64 / 50.0).min(0.2),
    (repo.watchers as f64 / 50.0).min(0.15),
    (repo.collaborators as f64 / 5.0).min(0.15),
    (repo.tags as f64 / 10.0).min(0.1),
    (frequency / 20.0).min(0.1),
  ];
  let score = round_to(factors.iter().sum::<f64>().min(1.0), 2);

  let mut details = Vec::new();
  if repo.stars > 0 {
    details.push(format!("{} stars", repo.stars));
  }
  if repo.forks > 0 {
    details.push(format!("{} forks", repo.forks));
  }
  if repo.watchers > 0 {
    details.push(format!("{} watchers", repo.watchers));
  }
  if !details.is_empty() {
    findings
      .strengths
      .push(format!("Community engagement: {}", details.join(", ")));
  }

  if score < config.low_engagement {
    findings
      .areas_for_improvement
      .push("Could benefit from more community engagement".into());
    findings
      .recommendations
      .push("Consider promoting the repository to attract more contributors".into());
  }
  score
}

fn maintenance_score(frequency: f64, days_since_update: i64, findings: &mut Findings) -> f64 {
  let frequency_score = if frequency >= 10.0 {
    0.6
  } else if frequency >= 4.0 {
    0.4
  } else if frequency >= 1.0 {
    0.2
  } else {
    0.1
  };
  let recency_score = match days_since_update {
    d if d < 7 => 0.4,
    d if d < 30 => 0.3,
    d if d < 90 => 0.2,
    _ => 0.0,
  };
  let score = frequency_score + recency_score;

  if score >= 0.8 {
    findings
      .strengths
      .push("Highly active maintenance with regular commits".into());
  } else if score >= 0.5 {
    findings.strengths.push("Regular maintenance activity".into());
  } else if score >= 0.3 {
    findings
      .areas_for_improvement
      .push("Repository could benefit from more frequent updates".into());
  } else {
    findings
      .areas_for_improvement
      .push("Repository appears to be unmaintained".into());
  }
  score
}

fn issues_score(open_issues: u64, findings: &mut Findings) -> f64 {
  match open_issues {
    0 => 1.0,
    n if n < 10 => 0.8,
    n if n < 50 => 0.6,
    n => {
      findings
        .areas_for_improvement
        .push(format!("Large number of open issues ({})", n));
      0.4
    }
  }
}

fn maturity_score(age_days: i64, config: &Config, findings: &mut Findings) -> f64 {
  if age_days <= config.new_repo_days {
    findings
      .areas_for_improvement
      .push("Repository is very new with limited commit history".into());
    findings
      .recommendations
      .push("Continue developing the project and making regular commits".into());
    0.2
  } else if age_days <= config.young_repo_days {
    findings
      .areas_for_improvement
      .push("Repository is relatively new".into());
    0.6
  } else {
    findings
      .strengths
      .push("Repository has established history".into());
    1.0
  }
}
