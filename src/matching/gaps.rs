//! Skill gap analysis with learning-path suggestions

use crate::matching::scorer::round2;
use crate::models::{Posting, Profile, SkillSet};
use crate::processing::vocabulary::{learning_path, title_case};
use serde::{Deserialize, Serialize};
use std::fmt;

const MIN_ELIGIBLE_MATCH: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GapSeverity {
    Low,
    Medium,
    High,
}

impl GapSeverity {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 70.0 {
            GapSeverity::Low
        } else if percentage >= 40.0 {
            GapSeverity::Medium
        } else {
            GapSeverity::High
        }
    }
}

impl fmt::Display for GapSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GapSeverity::Low => write!(f, "Low"),
            GapSeverity::Medium => write!(f, "Medium"),
            GapSeverity::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    pub skill: String,
    pub roadmap: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub profile_id: u64,
    pub posting_id: u64,
    pub posting_title: String,
    pub current_skills_count: usize,
    pub required_skills_count: usize,
    /// Posting skills the profile has, in the posting's spelling.
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_percentage: f64,
    pub severity: GapSeverity,
    pub learning_paths: Vec<LearningPath>,
    pub recommendations: Vec<String>,
    pub eligibility: Eligibility,
}

/// Hard eligibility of a profile for a posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Eligibility {
    pub eligible: bool,
    pub reason: String,
    pub match_percentage: f64,
    pub aptitude_eligible: bool,
    pub skills_eligible: bool,
}

/// Posting skills absent from the profile, in title case.
pub fn missing_skills(profile_skills: &SkillSet, posting_skills: &SkillSet) -> Vec<String> {
    posting_skills
        .iter()
        .filter(|skill| !profile_skills.contains(skill))
        .map(|skill| title_case(&skill.to_lowercase()))
        .collect()
}

pub fn learning_paths(skills: &[String]) -> Vec<LearningPath> {
    skills
        .iter()
        .map(|skill| LearningPath {
            skill: title_case(&skill.to_lowercase()),
            roadmap: learning_path(skill),
        })
        .collect()
}

pub fn analyze_gap(profile: &Profile, posting: &Posting) -> GapAnalysis {
    let required = &posting.required_skills;
    let missing = missing_skills(&profile.skills, required);
    let match_percentage = coverage(required, missing.len());

    let matched_skills: Vec<String> = required
        .iter()
        .filter(|skill| profile.skills.contains(skill))
        .map(str::to_string)
        .collect();

    let mut recommendations = Vec::new();
    if !missing.is_empty() {
        recommendations.push(format!(
            "Learn {} missing skills to improve your chances",
            missing.len()
        ));
    }
    if match_percentage < 50.0 {
        recommendations.push("Consider adding more technical skills from job requirements".to_string());
    }

    GapAnalysis {
        profile_id: profile.id,
        posting_id: posting.id,
        posting_title: posting.title.clone(),
        current_skills_count: profile.skills.len(),
        required_skills_count: required.len(),
        matched_skills,
        learning_paths: learning_paths(&missing),
        missing_skills: missing,
        match_percentage,
        severity: GapSeverity::from_percentage(match_percentage),
        recommendations,
        eligibility: check_eligibility(profile, posting),
    }
}

/// Eligible when aptitude meets the posting minimum and at least half the
/// required skills are held.
pub fn check_eligibility(profile: &Profile, posting: &Posting) -> Eligibility {
    let missing = missing_skills(&profile.skills, &posting.required_skills).len();
    let match_percentage = coverage(&posting.required_skills, missing);

    let aptitude_eligible = profile.aptitude >= posting.min_aptitude;
    let skills_eligible = match_percentage >= MIN_ELIGIBLE_MATCH;

    let reason = if !aptitude_eligible {
        format!(
            "Aptitude {} is below minimum requirement of {}",
            profile.aptitude, posting.min_aptitude
        )
    } else if !skills_eligible {
        format!("Skill match ({:.1}%) is below 50% threshold", match_percentage)
    } else {
        format!("Aptitude meets requirement and skill match is {:.1}%", match_percentage)
    };

    Eligibility {
        eligible: aptitude_eligible && skills_eligible,
        reason,
        match_percentage,
        aptitude_eligible,
        skills_eligible,
    }
}

/// Share of required skills held, 0 when nothing is required.
fn coverage(required: &SkillSet, missing: usize) -> f64 {
    if required.is_empty() {
        0.0
    } else {
        round2((required.len() - missing) as f64 / required.len() as f64 * 100.0)
    }
}
