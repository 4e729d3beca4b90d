//! Near-duplicate resume detection by skill-set overlap

use crate::matching::scorer::round2;
use crate::models::{ProfileId, SkillSet};
use crate::store::StoredDocument;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateMatch {
    pub profile_id: ProfileId,
    /// Jaccard similarity as a percentage, 2 decimals.
    pub similarity: f64,
}

/// |A ∩ B| / |A ∪ B| over case-folded skills; 0 when either set is empty.
pub fn jaccard_similarity(a: &SkillSet, b: &SkillSet) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let a = a.folded();
    let b = b.folded();
    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(&b).count() as f64 / union as f64
}

pub struct DuplicateDetector {
    threshold: f64,
}

impl DuplicateDetector {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Stored documents whose skills overlap `skills` by more than the threshold.
    ///
    /// Documents of `exclude` are not compared. Documents with undecodable
    /// skill data are skipped.
    pub fn detect<'a>(
        &self,
        skills: &SkillSet,
        documents: impl IntoIterator<Item = &'a StoredDocument>,
        exclude: Option<ProfileId>,
    ) -> Vec<DuplicateMatch> {
        let mut duplicates = Vec::new();

        for document in documents {
            if exclude == Some(document.profile_id) {
                continue;
            }

            let stored = match document.skill_set() {
                Ok(stored) => stored,
                Err(e) => {
                    debug!(
                        "Skipping document of profile {}: unreadable skills ({})",
                        document.profile_id, e
                    );
                    continue;
                }
            };

            let similarity = jaccard_similarity(skills, &stored);
            if similarity > self.threshold {
                duplicates.push(DuplicateMatch {
                    profile_id: document.profile_id,
                    similarity: round2(similarity * 100.0),
                });
            }
        }

        duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn set(items: &[&str]) -> SkillSet {
        items.iter().copied().collect()
    }

    fn stored(profile_id: ProfileId, skills: &str) -> StoredDocument {
        StoredDocument {
            profile_id,
            filename: None,
            skills: skills.to_string(),
            education: "Not found".to_string(),
            experience: "Fresher".to_string(),
            score: 0,
            is_duplicate: false,
            duplicate_of: None,
            parsed_at: Utc::now(),
        }
    }

    #[test]
    fn test_jaccard_values() {
        assert_eq!(
            jaccard_similarity(&set(&["python", "sql", "django"]), &set(&["python", "sql", "flask"])),
            0.5
        );
        assert_eq!(
            jaccard_similarity(&set(&["python", "sql", "django", "aws"]), &set(&["Python", "SQL", "Django"])),
            0.75
        );
    }

    #[test]
    fn test_jaccard_symmetric() {
        let a = set(&["rust", "go", "sql"]);
        let b = set(&["go", "docker"]);
        assert_eq!(jaccard_similarity(&a, &b), jaccard_similarity(&b, &a));
    }

    #[test]
    fn test_jaccard_empty_side_is_zero() {
        assert_eq!(jaccard_similarity(&SkillSet::new(), &set(&["python"])), 0.0);
        assert_eq!(jaccard_similarity(&set(&["python"]), &SkillSet::new()), 0.0);
        assert_eq!(jaccard_similarity(&SkillSet::new(), &SkillSet::new()), 0.0);
    }

    #[test]
    fn test_threshold_is_strict() {
        let detector = DuplicateDetector::new(0.7);
        let documents = vec![
            stored(2, r#"["Python", "Sql", "Flask"]"#),
            stored(3, r#"["Python", "Sql", "Django"]"#),
        ];

        let found = detector.detect(&set(&["python", "sql", "django", "aws"]), &documents, None);
        assert_eq!(found, vec![DuplicateMatch { profile_id: 3, similarity: 75.0 }]);

        let exact = DuplicateDetector::new(0.75);
        assert!(exact
            .detect(&set(&["python", "sql", "django", "aws"]), &documents, None)
            .is_empty());
    }

    #[test]
    fn test_excluded_and_malformed_documents_skipped() {
        let detector = DuplicateDetector::new(0.7);
        let documents = vec![
            stored(1, r#"["Python", "Sql"]"#),
            stored(2, "{broken"),
            stored(3, r#"["python", "sql"]"#),
        ];

        let found = detector.detect(&set(&["python", "sql"]), &documents, Some(1));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].profile_id, 3);
        assert_eq!(found[0].similarity, 100.0);
    }

    #[test]
    fn test_similarity_reported_as_percentage() {
        let detector = DuplicateDetector::new(0.5);
        let documents = vec![stored(4, r#"["Python", "Sql", "Django"]"#)];

        let found = detector.detect(&set(&["python", "sql", "django", "aws", "react"]), &documents, None);
        assert_eq!(found, vec![DuplicateMatch { profile_id: 4, similarity: 60.0 }]);

        let found = detector.detect(&set(&["python", "sql"]), &[stored(5, r#"["python", "sql", "go"]"#)], None);
        assert_eq!(found[0].similarity, 66.67);
    }
}
