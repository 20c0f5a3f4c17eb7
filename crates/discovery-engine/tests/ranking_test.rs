use chrono::{DateTime, TimeZone, Utc};
use discovery_config::Config;
use discovery_core::{Persona, RepositoryProfile};
use discovery_engine::{RankingService, SearchResponse};

const PROFILES: &str = r#"[
  {
    "full_name": "acme/tinyjson",
    "name": "tinyjson",
    "description": "A small JSON parser",
    "topics": ["json", "parser"],
    "stars": 40,
    "forks": 3,
    "created_at": "2024-05-20T00:00:00Z",
    "pushed_at": "2024-05-31T00:00:00Z",
    "commits_last_30_days": 25,
    "releases_last_90_days": 2,
    "good_first_issues": 4,
    "issue_closure_rate": 0.5,
    "pr_merge_ratio": 0.9,
    "bus_factor": 1,
    "documentation_metrics": {
      "has_readme": true,
      "readme_length": 800,
      "readme_sections": 2,
      "has_badges": false,
      "license_type": "MIT",
      "has_contributing": false,
      "has_code_of_conduct": false,
      "has_docs_folder": false,
      "has_wiki": false
    },
    "readme_content": "tinyjson parses JSON\n\n## Usage\n"
  },
  {
    "full_name": "big/serde_json",
    "name": "serde_json",
    "description": "Strongly typed JSON library",
    "topics": ["json", "serde"],
    "stars": 5000,
    "forks": 500,
    "weekly_downloads": 2000000,
    "created_at": "2016-01-01T00:00:00Z",
    "pushed_at": "2024-05-30T00:00:00Z",
    "commits_last_30_days": 30,
    "releases_last_90_days": 2,
    "good_first_issues": 6,
    "issue_closure_rate": 0.8,
    "pr_merge_ratio": 0.7,
    "bus_factor": 4,
    "documentation_metrics": {
      "has_readme": true,
      "readme_length": 9000,
      "readme_sections": 8,
      "has_badges": true,
      "license_type": "Apache-2.0",
      "has_contributing": true,
      "has_code_of_conduct": true,
      "has_docs_folder": true,
      "has_wiki": false
    },
    "readme_content": "Serde JSON\n\n## Parsing JSON\n## Constructing JSON\n## Serializing"
  },
  {
    "full_name": "misc/yaml-rs",
    "name": "yaml-rs",
    "description": "YAML loader",
    "stars": 900,
    "forks": 90,
    "created_at": "2018-01-01T00:00:00Z",
    "pushed_at": "2023-01-01T00:00:00Z",
    "commits_last_30_days": 0,
    "releases_last_90_days": 0,
    "good_first_issues": 0,
    "issue_closure_rate": 0.1,
    "pr_merge_ratio": 0.2,
    "bus_factor": 1
  }
]"#;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

fn profiles() -> Vec<RepositoryProfile> {
    serde_json::from_str(PROFILES).unwrap()
}

#[test]
fn test_rank_json_batch_end_to_end() {
    let service = RankingService::new(Config::default());
    let ranked = service
        .rank(&profiles(), "json parser", Persona::Contributor, now())
        .unwrap();

    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].score_out_of_10, 10.0);
    assert_eq!(ranked[2].profile.full_name, "misc/yaml-rs");
    assert_eq!(ranked[2].score_out_of_10, 0.0);
    for result in &ranked[..2] {
        assert!(result.relevance_score > 0.0);
        assert!(result.score_out_of_10 > 0.0);
    }
}

#[test]
fn test_missing_optional_fields_default() {
    let yaml = &profiles()[2];
    assert_eq!(yaml.weekly_downloads, 0);
    assert!(yaml.topics.is_empty());
    assert_eq!(yaml.documentation_metrics.license_type, "NONE");
    assert!(yaml.readme_content.is_empty());
}

#[test]
fn test_response_from_ranked_batch() {
    let service = RankingService::new(Config::default());
    let ranked = service
        .rank_with_label(&profiles(), "json", "Enterprise", now())
        .unwrap();
    let response = SearchResponse::from_ranked("json", Persona::Enterprise, ranked, 2, now());

    assert_eq!(response.repositories.len(), 2);
    assert_eq!(response.metadata.total_ranked, 3);
    assert_eq!(response.repositories[0].score_out_of_10, 10.0);
}

#[test]
fn test_negative_count_fails_to_deserialize() {
    let bad = PROFILES.replacen("\"stars\": 40", "\"stars\": -40", 1);
    assert!(serde_json::from_str::<Vec<RepositoryProfile>>(&bad).is_err());
}
