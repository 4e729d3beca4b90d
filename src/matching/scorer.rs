//! Weighted compatibility between a profile and a posting

use crate::config::ScoringConfig;
use crate::models::{MatchResult, Posting, Profile};
use crate::processing::vocabulary::title_case;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const FULL_CREDIT: f64 = 100.0;
const HALF_CREDIT: f64 = 50.0;
const MAX_SCORE: f64 = 100.0;

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Share of posting skills held by the profile, case-insensitively.
///
/// When either side is empty the result is 0 with no matches and the
/// posting skills returned unchanged as missing.
pub fn calculate_skill_match(profile_skills: &[String], posting_skills: &[String]) -> MatchResult {
    if profile_skills.is_empty() || posting_skills.is_empty() {
        return MatchResult {
            percentage: 0.0,
            matched: Vec::new(),
            missing: posting_skills.to_vec(),
        };
    }

    let have: HashSet<String> = profile_skills.iter().map(|s| s.to_lowercase()).collect();
    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for skill in posting_skills {
        let folded = skill.to_lowercase();
        if have.contains(&folded) {
            matched.push(title_case(&folded));
        } else {
            missing.push(title_case(&folded));
        }
    }

    let percentage = matched.len() as f64 / posting_skills.len() as f64 * 100.0;

    MatchResult {
        percentage: round2(percentage),
        matched,
        missing,
    }
}

/// Per-component contributions of a composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill_match: MatchResult,
    pub skill_component: f64,
    pub aptitude_component: f64,
    pub category_component: f64,
    pub document_bonus: f64,
    /// Weighted sum, rounded and clamped to 0-100.
    pub total: f64,
}

/// Computes composite match scores with configurable weights.
#[derive(Debug, Clone)]
pub struct MatchScorer {
    config: ScoringConfig,
}

impl MatchScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Composite score in 0-100, rounded to 2 decimals.
    pub fn calculate_ai_match_score(
        &self,
        profile: &Profile,
        posting: &Posting,
        prior_document_score: Option<u32>,
    ) -> f64 {
        self.breakdown(profile, posting, prior_document_score).total
    }

    pub fn breakdown(
        &self,
        profile: &Profile,
        posting: &Posting,
        prior_document_score: Option<u32>,
    ) -> ScoreBreakdown {
        let skill_match = calculate_skill_match(
            profile.skills.as_slice(),
            posting.required_skills.as_slice(),
        );
        let skill_component = skill_match.percentage * self.config.skill_weight;
        let aptitude_component = self.aptitude_credit(profile.aptitude, posting.min_aptitude)
            * self.config.aptitude_weight;
        let category_component =
            self.category_credit(&profile.category, &posting.category) * self.config.category_weight;
        let document_bonus = prior_document_score
            .map(|score| f64::from(score) * self.config.document_bonus_weight)
            .unwrap_or(0.0);

        let raw = skill_component + aptitude_component + category_component + document_bonus;

        ScoreBreakdown {
            skill_match,
            skill_component,
            aptitude_component,
            category_component,
            document_bonus,
            total: round2(raw).clamp(0.0, MAX_SCORE),
        }
    }

    fn aptitude_credit(&self, aptitude: f64, minimum: f64) -> f64 {
        if aptitude >= minimum {
            FULL_CREDIT
        } else if aptitude >= minimum - self.config.aptitude_tolerance {
            HALF_CREDIT
        } else {
            0.0
        }
    }

    fn category_credit(&self, profile_category: &str, posting_category: &str) -> f64 {
        let posting_category = posting_category.trim().to_lowercase();
        if posting_category == self.config.category_wildcard.to_lowercase()
            || posting_category == profile_category.trim().to_lowercase()
        {
            FULL_CREDIT
        } else {
            0.0
        }
    }
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}
