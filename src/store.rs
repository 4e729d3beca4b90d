//! Storage collaborator: lookup traits and a JSON-file dataset

use crate::error::{PlacementError, Result};
use crate::matching::duplicates::DuplicateMatch;
use crate::models::{
    Application, ApplicationStatus, ParsedDocument, Posting, PostingId, Profile, ProfileId,
    SkillSet,
};
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// Answers whether a profile already has an application for a posting.
pub trait ApplicationLookup {
    fn application_status(&self, profile_id: ProfileId, posting_id: PostingId) -> Option<ApplicationStatus>;

    fn has_applied(&self, profile_id: ProfileId, posting_id: PostingId) -> bool {
        self.application_status(profile_id, posting_id).is_some()
    }
}

/// Records application changes.
pub trait ApplicationRegistry: ApplicationLookup {
    /// Set the status of an existing application, returning false when none exists.
    fn update_status(&mut self, profile_id: ProfileId, posting_id: PostingId, status: ApplicationStatus) -> bool;

    fn record(&mut self, application: Application);
}

/// Finds the live stored document of a profile.
pub trait DocumentLookup {
    fn document_for(&self, profile_id: ProfileId) -> Option<&StoredDocument>;
}

/// A parsed resume as persisted by storage.
///
/// `skills` holds a JSON array as text; it is decoded on demand and may be malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub profile_id: ProfileId,
    #[serde(default)]
    pub filename: Option<String>,
    pub skills: String,
    pub education: String,
    pub experience: String,
    pub score: u32,
    #[serde(default)]
    pub is_duplicate: bool,
    #[serde(default)]
    pub duplicate_of: Option<ProfileId>,
    pub parsed_at: DateTime<Utc>,
}

impl StoredDocument {
    pub fn from_parsed(
        profile_id: ProfileId,
        filename: Option<String>,
        document: &ParsedDocument,
        duplicates: &[DuplicateMatch],
    ) -> Result<Self> {
        Ok(Self {
            profile_id,
            filename,
            skills: serde_json::to_string(&document.skills)?,
            education: document.education.clone(),
            experience: document.experience.clone(),
            score: document.score,
            is_duplicate: !duplicates.is_empty(),
            duplicate_of: duplicates.first().map(|d| d.profile_id),
            parsed_at: Utc::now(),
        })
    }

    /// Decode the stored skills, lower-cased.
    pub fn skill_set(&self) -> Result<SkillSet> {
        let skills: Vec<String> = serde_json::from_str(&self.skills.to_lowercase())?;
        Ok(skills.into())
    }
}

/// Everything the matcher reads, persisted as a single JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub profiles: Vec<Profile>,
    pub postings: Vec<Posting>,
    pub documents: Vec<StoredDocument>,
    pub applications: Vec<Application>,
}

impl Dataset {
    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PlacementError::InvalidInput(format!(
                "Dataset does not exist: {}",
                path.display()
            )));
        }
        let content = fs::read_to_string(path).await?;
        let dataset: Dataset = serde_json::from_str(&content)?;
        info!(
            "Loaded dataset {}: {} profiles, {} postings, {} documents, {} applications",
            path.display(),
            dataset.profiles.len(),
            dataset.postings.len(),
            dataset.documents.len(),
            dataset.applications.len()
        );
        Ok(dataset)
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).await?;
        debug!("Saved dataset to {}", path.display());
        Ok(())
    }

    pub fn profile(&self, id: ProfileId) -> Result<&Profile> {
        self.profiles
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| PlacementError::profile_not_found(id))
    }

    pub fn posting(&self, id: PostingId) -> Result<&Posting> {
        self.postings
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| PlacementError::posting_not_found(id))
    }

    /// Store `document`, replacing any earlier document of the same profile.
    ///
    /// Returns true when an earlier document was replaced.
    pub fn upsert_document(&mut self, document: StoredDocument) -> bool {
        match self
            .documents
            .iter_mut()
            .find(|d| d.profile_id == document.profile_id)
        {
            Some(existing) => {
                *existing = document;
                true
            }
            None => {
                self.documents.push(document);
                false
            }
        }
    }

    /// Deactivate active postings whose expiry lies before `now`.
    pub fn expire_postings(&mut self, now: DateTime<Utc>) -> usize {
        let mut expired = 0;
        for posting in self.postings.iter_mut().filter(|p| p.is_active) {
            if posting.expires_at.is_some_and(|at| at < now) {
                posting.is_active = false;
                expired += 1;
            }
        }
        if expired > 0 {
            info!("Deactivated {} expired postings", expired);
        }
        expired
    }
}

impl ApplicationLookup for Dataset {
    fn application_status(&self, profile_id: ProfileId, posting_id: PostingId) -> Option<ApplicationStatus> {
        self.applications
            .iter()
            .find(|a| a.profile_id == profile_id && a.posting_id == posting_id)
            .map(|a| a.status)
    }
}

impl ApplicationRegistry for Dataset {
    fn update_status(&mut self, profile_id: ProfileId, posting_id: PostingId, status: ApplicationStatus) -> bool {
        match self
            .applications
            .iter_mut()
            .find(|a| a.profile_id == profile_id && a.posting_id == posting_id)
        {
            Some(application) => {
                application.status = status;
                true
            }
            None => false,
        }
    }

    fn record(&mut self, application: Application) {
        self.applications.push(application);
    }
}

impl DocumentLookup for Dataset {
    fn document_for(&self, profile_id: ProfileId) -> Option<&StoredDocument> {
        self.documents.iter().find(|d| d.profile_id == profile_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn stored(profile_id: ProfileId, skills: &str, score: u32) -> StoredDocument {
        StoredDocument {
            profile_id,
            filename: None,
            skills: skills.to_string(),
            education: "Not found".to_string(),
            experience: "Fresher".to_string(),
            score,
            is_duplicate: false,
            duplicate_of: None,
            parsed_at: Utc::now(),
        }
    }

    fn posting(id: PostingId, expires_at: Option<DateTime<Utc>>) -> Posting {
        Posting {
            id,
            title: format!("Posting {}", id),
            required_skills: SkillSet::new(),
            min_aptitude: 0.0,
            category: "all".to_string(),
            is_active: true,
            expires_at,
        }
    }

    #[test]
    fn test_upsert_keeps_one_document_per_profile() {
        let mut dataset = Dataset::default();
        assert!(!dataset.upsert_document(stored(1, r#"["Python"]"#, 40)));
        assert!(!dataset.upsert_document(stored(2, r#"["Sql"]"#, 30)));
        assert!(dataset.upsert_document(stored(1, r#"["Rust"]"#, 70)));

        assert_eq!(dataset.documents.len(), 2);
        assert_eq!(dataset.document_for(1).unwrap().score, 70);
    }

    #[test]
    fn test_stored_skill_set_decoding() {
        let document = stored(1, r#"["Python", "SQL"]"#, 0);
        let skills = document.skill_set().unwrap();
        assert_eq!(skills.as_slice(), &["python".to_string(), "sql".to_string()]);

        assert!(stored(1, "not json", 0).skill_set().is_err());
    }

    #[test]
    fn test_expire_postings() {
        let now = Utc::now();
        let mut dataset = Dataset {
            postings: vec![
                posting(1, Some(now - Duration::days(1))),
                posting(2, Some(now + Duration::days(1))),
                posting(3, None),
            ],
            ..Dataset::default()
        };

        assert_eq!(dataset.expire_postings(now), 1);
        assert!(!dataset.postings[0].is_active);
        assert!(dataset.postings[1].is_active);
        assert!(dataset.postings[2].is_active);
        assert_eq!(dataset.expire_postings(now), 0);
    }

    #[test]
    fn test_application_registry() {
        let mut dataset = Dataset::default();
        assert!(!dataset.has_applied(1, 1));
        assert!(!dataset.update_status(1, 1, ApplicationStatus::Shortlisted));

        dataset.record(Application {
            profile_id: 1,
            posting_id: 1,
            status: ApplicationStatus::Applied,
            match_percentage: 50.0,
            applied_at: Utc::now(),
        });
        assert!(dataset.update_status(1, 1, ApplicationStatus::Interview));
        assert_eq!(dataset.application_status(1, 1), Some(ApplicationStatus::Interview));
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json");

        let mut dataset = Dataset::default();
        dataset.postings.push(posting(7, None));
        dataset.upsert_document(stored(3, r#"["Go"]"#, 10));
        dataset.save(&path).await.unwrap();

        let loaded = Dataset::load(&path).await.unwrap();
        assert_eq!(loaded, dataset);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = Dataset::load(Path::new("does/not/exist.json")).await;
        assert!(matches!(result, Err(PlacementError::InvalidInput(_))));
    }
}
