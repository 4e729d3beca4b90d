//! Integration tests for the placement matcher

use chrono::Utc;
use placement_match::config::{Config, RankingConfig};
use placement_match::input::manager::InputManager;
use placement_match::matching::analytics::skill_demand;
use placement_match::matching::duplicates::DuplicateDetector;
use placement_match::matching::gaps::{analyze_gap, GapSeverity};
use placement_match::matching::ranking::{Ranker, ShortlistAction};
use placement_match::matching::scorer::MatchScorer;
use placement_match::models::{ApplicationStatus, SkillSet};
use placement_match::processing::analyzer::ResumeAnalyzer;
use placement_match::store::{ApplicationLookup, Dataset, DocumentLookup, StoredDocument};
use std::path::Path;

const DATASET: &str = "tests/fixtures/dataset.json";

async fn dataset() -> Dataset {
    let mut dataset = Dataset::load(Path::new(DATASET)).await.unwrap();
    dataset.expire_postings(Utc::now());
    dataset
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "expected {}, got {}", expected, actual);
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Acme Labs"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();

    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Node.js"));
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let first = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let second = manager.extract_text(path).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_and_missing_files() {
    let mut manager = InputManager::new();
    assert!(manager
        .extract_text_or_empty(Path::new("tests/fixtures/unsupported.xyz"))
        .await
        .is_err());
    assert!(manager
        .extract_text(Path::new("tests/fixtures/nonexistent.txt"))
        .await
        .is_err());
}

#[tokio::test]
async fn test_resume_analysis_pipeline() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let analyzer = ResumeAnalyzer::new(&Config::default().parsing).unwrap();
    let document = analyzer.analyze(&text, None);

    for skill in ["Python", "React", "Docker", "Postgresql", "Agile"] {
        assert!(document.skills.contains(skill), "missing {}", skill);
    }
    assert_eq!(
        document.education,
        "B.Tech in Computer Science, ABC University, 2021-2025 | Higher Secondary, XYZ College, 2021"
    );
    assert_eq!(
        document.experience,
        "Software Engineer Intern, Acme Labs, May 2024 - Jul 2024 \
         | Built a REST API project with Django and PostgreSQL \
         | Led the responsibility for unit testing and debugging"
    );
    // 25 skills + 15 education + 15 experience + 8 formatting
    assert_eq!(document.score, 63);
    assert_eq!(document.suggestions, vec!["Great skill set!"]);
}

#[tokio::test]
async fn test_resume_analysis_against_posting() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let analyzer = ResumeAnalyzer::new(&Config::default().parsing).unwrap();
    let posting: SkillSet = ["Python", "AWS", "Kubernetes"].into_iter().collect();
    let document = analyzer.analyze(&text, Some(&posting));

    assert_eq!(document.score, 71);
    assert!(document
        .suggestions
        .contains(&"Add these skills: aws, kubernetes".to_string()));
}

#[tokio::test]
async fn test_markdown_resume_sections() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();

    let analyzer = ResumeAnalyzer::new(&Config::default().parsing).unwrap();
    let document = analyzer.analyze(&text, None);

    assert_eq!(document.education, "B.Tech in Computer Science, ABC University, 2021-2025");
    assert!(document.experience.starts_with("Software Engineer Intern"));
}

#[tokio::test]
async fn test_loading_dataset_expires_postings() {
    let mut dataset = Dataset::load(Path::new(DATASET)).await.unwrap();
    assert_eq!(dataset.expire_postings(Utc::now()), 1);
    assert!(!dataset.posting(13).unwrap().is_active);
    assert!(dataset.posting(42).is_err());
}

#[tokio::test]
async fn test_recommend_postings_for_profile() {
    let dataset = dataset().await;
    let scorer = MatchScorer::default();
    let ranker = Ranker::new(&scorer, &RankingConfig::default());

    let profile = dataset.profile(1).unwrap();
    let ranked = ranker.rank_postings(profile, &dataset.postings, None, &dataset, 10);

    let ids: Vec<u64> = ranked.iter().map(|r| r.posting_id).collect();
    assert_eq!(ids, vec![10, 11]);
    assert_close(ranked[0].match_score, 85.0);
    assert_eq!(ranked[0].missing_skills, vec!["Aws"]);
    assert_close(ranked[1].match_score, 60.0);
}

#[tokio::test]
async fn test_applied_postings_are_not_recommended() {
    let dataset = dataset().await;
    let scorer = MatchScorer::default();
    let ranker = Ranker::new(&scorer, &RankingConfig::default());

    let profile = dataset.profile(2).unwrap();
    let ranked = ranker.rank_postings(profile, &dataset.postings, None, &dataset, 10);

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].posting_id, 10);
}

#[tokio::test]
async fn test_recommend_profiles_for_posting() {
    let dataset = dataset().await;
    let scorer = MatchScorer::default();
    let ranker = Ranker::new(&scorer, &RankingConfig::default());

    let posting = dataset.posting(10).unwrap();
    let ranked = ranker.rank_profiles(posting, &dataset.profiles, &dataset, 10);

    let ids: Vec<u64> = ranked.iter().map(|r| r.profile_id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    // Stored resume score 60 adds a 6 point bonus.
    assert_close(ranked[0].match_score, 91.0);
    assert_eq!(ranked[0].document_score, 60);
    assert_close(ranked[2].match_score, 25.0);
}

#[tokio::test]
async fn test_shortlist_updates_and_creates_applications() {
    let mut dataset = dataset().await;
    let scorer = MatchScorer::default();
    let ranker = Ranker::new(&scorer, &RankingConfig::default());

    let posting = dataset.posting(11).unwrap().clone();
    let profiles = dataset.profiles.clone();
    let entries = ranker.shortlist(&posting, &profiles, &mut dataset, 2);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].profile_id, 2);
    assert_eq!(entries[0].action, ShortlistAction::Updated);
    assert_eq!(entries[1].profile_id, 3);
    assert_eq!(entries[1].action, ShortlistAction::Created);

    assert_eq!(
        dataset.application_status(2, 11),
        Some(ApplicationStatus::Shortlisted)
    );
    assert_eq!(
        dataset.application_status(3, 11),
        Some(ApplicationStatus::Shortlisted)
    );
    assert!(!dataset.has_applied(1, 11));
}

#[tokio::test]
async fn test_duplicate_resume_is_flagged_and_stored() {
    let mut dataset = dataset().await;
    let analyzer = ResumeAnalyzer::new(&Config::default().parsing).unwrap();
    let document = analyzer.analyze("Skills: Python, React, SQL, Docker", None);

    let detector = DuplicateDetector::new(Config::default().duplicates.threshold);
    let duplicates = detector.detect(&document.skills, &dataset.documents, Some(1));
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].profile_id, 3);
    assert_close(duplicates[0].similarity, 100.0);

    let stored = StoredDocument::from_parsed(1, Some("jane.txt".to_string()), &document, &duplicates).unwrap();
    assert!(!dataset.upsert_document(stored));

    let saved = dataset.document_for(1).unwrap();
    assert!(saved.is_duplicate);
    assert_eq!(saved.duplicate_of, Some(3));

    // The profile's own document is never its duplicate.
    assert!(detector
        .detect(&document.skills, &dataset.documents, Some(3))
        .iter()
        .all(|d| d.profile_id != 3));
}

#[tokio::test]
async fn test_dataset_save_round_trip() {
    let mut dataset = dataset().await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dataset.json");

    dataset.save(&path).await.unwrap();
    let reloaded = Dataset::load(&path).await.unwrap();
    assert_eq!(reloaded, dataset);

    assert_eq!(dataset.expire_postings(Utc::now()), 0);
}

#[tokio::test]
async fn test_gap_analysis_and_demand() {
    let dataset = dataset().await;

    let gap = analyze_gap(dataset.profile(1).unwrap(), dataset.posting(10).unwrap());
    assert_eq!(gap.missing_skills, vec!["Aws"]);
    assert_close(gap.match_percentage, 75.0);
    assert_eq!(gap.severity, GapSeverity::Low);
    assert!(gap.learning_paths[0].roadmap.starts_with("Learn AWS"));
    assert!(gap.eligibility.eligible);

    let gap = analyze_gap(dataset.profile(2).unwrap(), dataset.posting(10).unwrap());
    assert!(!gap.eligibility.aptitude_eligible);
    assert!(!gap.eligibility.eligible);

    let demand = skill_demand(&dataset.postings, 2);
    assert_eq!(demand.postings_with_skills, 4);
    assert_eq!(demand.top_skills[0].skill, "Python");
    assert_eq!(demand.top_skills[0].count, 3);
    assert_eq!(demand.top_skills[1].skill, "Sql");
    assert_eq!(demand.top_skills[1].count, 2);
}
