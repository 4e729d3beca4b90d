//! Report payloads produced by CLI commands

use crate::matching::analytics::{SkillCount, SkillDemand};
use crate::matching::duplicates::DuplicateMatch;
use crate::matching::gaps::GapAnalysis;
use crate::matching::ranking::{RankedPosting, RankedProfile, ShortlistEntry};
use crate::matching::scorer::ScoreBreakdown;
use crate::models::{ParsedDocument, PostingId, ProfileId};
use serde::{Deserialize, Serialize};

/// One command's result, ready for formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Report {
    Resume(ResumeReport),
    Match(MatchReport),
    PostingRecommendations(PostingRecommendations),
    ProfileRecommendations(ProfileRecommendations),
    Shortlist(ShortlistReport),
    Duplicates(DuplicateReport),
    Gap(GapAnalysis),
    Demand(DemandReport),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeReport {
    pub source: String,
    pub document: ParsedDocument,
    /// Set when the document was stored against a profile.
    pub profile_id: Option<ProfileId>,
    pub replaced_previous: bool,
    pub duplicates: Vec<DuplicateMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub profile_id: ProfileId,
    pub profile_name: String,
    pub posting_id: PostingId,
    pub posting_title: String,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostingRecommendations {
    pub profile_id: ProfileId,
    pub postings: Vec<RankedPosting>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecommendations {
    pub posting_id: PostingId,
    pub profiles: Vec<RankedProfile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortlistReport {
    pub posting_id: PostingId,
    pub dry_run: bool,
    pub entries: Vec<ShortlistEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateReport {
    pub profile_id: ProfileId,
    pub threshold: f64,
    pub duplicates: Vec<DuplicateMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandReport {
    pub demand: SkillDemand,
    /// Skills most common among applicants to active postings.
    pub applicant_skills: Vec<SkillCount>,
}
