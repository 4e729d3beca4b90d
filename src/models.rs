//! Records exchanged between the analyzer, the scorer and storage

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

pub type ProfileId = u64;
pub type PostingId = u64;

/// Placeholder education summary when nothing could be extracted.
pub const EDUCATION_NOT_FOUND: &str = "Not found";
/// Placeholder experience summary when nothing could be extracted.
pub const NO_EXPERIENCE: &str = "Fresher";

/// Ordered set of skill tags, unique after case-folding.
///
/// The first spelling of a skill is kept; later spellings that differ only
/// in case are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SkillSet {
    skills: Vec<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a skill, returning false when it (or a case variant) is already present.
    pub fn insert(&mut self, skill: impl Into<String>) -> bool {
        let skill = skill.into();
        let trimmed = skill.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return false;
        }
        self.skills.push(trimmed.to_string());
        true
    }

    pub fn contains(&self, skill: &str) -> bool {
        let folded = skill.trim().to_lowercase();
        self.skills.iter().any(|s| s.to_lowercase() == folded)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.skills
    }

    /// Lower-cased view used for set arithmetic.
    pub fn folded(&self) -> HashSet<String> {
        self.skills.iter().map(|s| s.to_lowercase()).collect()
    }
}

impl From<Vec<String>> for SkillSet {
    fn from(skills: Vec<String>) -> Self {
        skills.into_iter().collect()
    }
}

impl From<SkillSet> for Vec<String> {
    fn from(set: SkillSet) -> Self {
        set.skills
    }
}

impl<S: Into<String>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for skill in iter {
            set.insert(skill);
        }
        set
    }
}

impl<'a> IntoIterator for &'a SkillSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.skills.iter()
    }
}

/// A candidate as seen by the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    #[serde(default)]
    pub skills: SkillSet,
    /// GPA-like score on a 0-10 scale.
    pub aptitude: f64,
    /// Field of study, compared case-insensitively with postings.
    pub category: String,
}

/// A job or internship posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    pub id: PostingId,
    pub title: String,
    #[serde(default)]
    pub required_skills: SkillSet,
    #[serde(default)]
    pub min_aptitude: f64,
    /// Required category, or the configured wildcard for any category.
    pub category: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

/// Structured fragment produced from resume text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeFragment {
    pub skills: SkillSet,
    pub education: String,
    pub experience: String,
}

impl ResumeFragment {
    pub fn has_education(&self) -> bool {
        !self.education.is_empty() && self.education != EDUCATION_NOT_FOUND
    }

    pub fn has_experience(&self) -> bool {
        !self.experience.is_empty() && self.experience != NO_EXPERIENCE
    }
}

/// Result of analyzing one resume submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub skills: SkillSet,
    pub education: String,
    pub experience: String,
    /// Completeness score, 0-100.
    pub score: u32,
    pub suggestions: Vec<String>,
}

/// Skill overlap between a profile and a posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 0-100, rounded to 2 decimals.
    pub percentage: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Applied,
    Shortlisted,
    Interview,
    Rejected,
    Selected,
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Shortlisted => "Shortlisted",
            ApplicationStatus::Interview => "Interview",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Selected => "Selected",
        };
        f.write_str(label)
    }
}

/// A profile's application to a posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub profile_id: ProfileId,
    pub posting_id: PostingId,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub match_percentage: f64,
    pub applied_at: DateTime<Utc>,
}
