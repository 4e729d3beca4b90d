//! Keyword-based skill extraction

use crate::config::MatchMode;
use crate::error::{PlacementError, Result};
use crate::models::SkillSet;
use crate::processing::vocabulary::{title_case, SKILL_VOCABULARY};
use aho_corasick::AhoCorasick;
use log::debug;

/// Finds vocabulary skills in free text.
pub struct SkillExtractor {
    matcher: AhoCorasick,
    vocabulary: Vec<String>,
    mode: MatchMode,
}

impl SkillExtractor {
    /// Create an extractor over the built-in vocabulary
    pub fn new(mode: MatchMode) -> Result<Self> {
        Self::with_custom_skills(mode, Vec::new())
    }

    /// Create an extractor with additional vocabulary entries
    pub fn with_custom_skills(mode: MatchMode, additional_skills: Vec<String>) -> Result<Self> {
        let mut vocabulary: Vec<String> = SKILL_VOCABULARY.iter().map(|s| s.to_string()).collect();
        for skill in additional_skills {
            let skill = skill.trim().to_lowercase();
            if !skill.is_empty() && !vocabulary.contains(&skill) {
                vocabulary.push(skill);
            }
        }

        // Standard match kind so overlapping keywords ("java" inside "javascript") all report.
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&vocabulary)
            .map_err(|e| PlacementError::Processing(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self {
            matcher,
            vocabulary,
            mode,
        })
    }

    /// Extract the set of vocabulary skills present in `text`, in vocabulary order.
    pub fn extract(&self, text: &str) -> SkillSet {
        let mut found = vec![false; self.vocabulary.len()];
        let lowered = text.to_lowercase();

        let matches = match self.matcher.try_find_overlapping_iter(lowered.as_str()) {
            Ok(matches) => matches,
            Err(e) => {
                debug!("Skill scan unavailable: {}", e);
                return SkillSet::new();
            }
        };

        for mat in matches {
            let id = mat.pattern().as_usize();
            if found[id] {
                continue;
            }
            if self.mode == MatchMode::WordBoundary
                && !is_word_bounded(&lowered, mat.start(), mat.end())
            {
                continue;
            }
            found[id] = true;
        }

        let skills: SkillSet = self
            .vocabulary
            .iter()
            .zip(found)
            .filter(|(_, hit)| *hit)
            .map(|(skill, _)| title_case(skill))
            .collect();

        debug!("Extracted {} skills", skills.len());
        skills
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn skill_count(&self) -> usize {
        self.vocabulary.len()
    }
}

fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text.get(..start).and_then(|s| s.chars().next_back());
    let after = text.get(end..).and_then(|s| s.chars().next());
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}
