//! Additive completeness score for a parsed resume

use crate::models::{ResumeFragment, SkillSet};
use crate::processing::vocabulary::FORMATTING_KEYWORDS;
use serde::{Deserialize, Serialize};

const MAX_SCORE: u32 = 100;
const JOB_MATCH_POINTS: f64 = 25.0;
const SECTION_POINTS: u32 = 15;
const FORMATTING_POINTS_EACH: u32 = 4;
const FORMATTING_POINTS_MAX: u32 = 20;
const SUGGESTED_SKILLS_MAX: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeScore {
    pub score: u32,
    pub suggestions: Vec<String>,
}

/// Score a parsed resume out of 100, optionally against a posting's required skills.
///
/// Components: skill count (5/15/25), posting skill coverage (up to 25),
/// education (15), experience (15) and formatting keywords (up to 20).
pub fn calculate_resume_score(fragment: &ResumeFragment, posting_skills: Option<&SkillSet>) -> ResumeScore {
    let mut score = 0u32;
    let mut suggestions = Vec::new();

    let skill_count = fragment.skills.len();
    if skill_count >= 10 {
        score += 25;
        suggestions.push("Great skill set!".to_string());
    } else if skill_count >= 5 {
        score += 15;
        suggestions.push("Add more technical skills".to_string());
    } else {
        score += 5;
        suggestions.push("Add more skills to improve visibility".to_string());
    }

    if let Some(required) = posting_skills.filter(|s| !s.is_empty()) {
        let have = fragment.skills.folded();
        let unmatched: Vec<String> = required
            .iter()
            .map(str::to_lowercase)
            .filter(|s| !have.contains(s))
            .collect();
        let matched = required.len() - unmatched.len();
        let ratio = matched as f64 / required.len() as f64;

        score += (ratio * JOB_MATCH_POINTS).floor() as u32;
        if ratio < 0.5 {
            let named: Vec<&str> = unmatched.iter().take(SUGGESTED_SKILLS_MAX).map(String::as_str).collect();
            suggestions.push(format!("Add these skills: {}", named.join(", ")));
        }
    }

    if fragment.has_education() {
        score += SECTION_POINTS;
    } else {
        suggestions.push("Add education details".to_string());
    }

    if fragment.has_experience() {
        score += SECTION_POINTS;
    } else {
        suggestions.push("Add project/internship experience".to_string());
    }

    let section_text = format!("{} {}", fragment.education, fragment.experience).to_lowercase();
    let keyword_count = FORMATTING_KEYWORDS
        .iter()
        .filter(|k| section_text.contains(*k))
        .count() as u32;
    score += (keyword_count * FORMATTING_POINTS_EACH).min(FORMATTING_POINTS_MAX);

    ResumeScore {
        score: score.min(MAX_SCORE),
        suggestions,
    }
}
