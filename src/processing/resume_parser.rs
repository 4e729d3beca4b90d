//! Section extraction from unstructured resume text

use crate::config::ParsingConfig;
use crate::error::{PlacementError, Result};
use crate::models::{ResumeFragment, EDUCATION_NOT_FOUND, NO_EXPERIENCE};
use crate::processing::skill_extractor::SkillExtractor;
use crate::processing::vocabulary::EDUCATION_KEYWORDS;
use regex::Regex;

const EDUCATION_HEADERS: &[&str] = &["education", "academic"];
const EDUCATION_STOPS: &[&str] = &["experience", "skills", "projects"];
const EXPERIENCE_HEADERS: &[&str] = &["experience", "work history"];
const EXPERIENCE_STOPS: &[&str] = &["skills", "education", "projects", "achievements"];

const MIN_EDUCATION_LINE: usize = 5;
const MIN_EXPERIENCE_LINE: usize = 10;
const ENTRY_SEPARATOR: &str = " | ";

/// Turns resume text into skills, education and experience summaries.
pub struct ResumeParser {
    skill_extractor: SkillExtractor,
    degree_patterns: Vec<Regex>,
    max_education_entries: usize,
    max_experience_entries: usize,
}

impl ResumeParser {
    pub fn new(config: &ParsingConfig) -> Result<Self> {
        let skill_extractor =
            SkillExtractor::with_custom_skills(config.match_mode, config.additional_skills.clone())?;

        let degree_patterns = [
            r"(b\.?tech|m\.?tech|b\.?e|m\.?e|b\.?sc|m\.?sc|b\.?ca|m\.?ca)\s*[-–]?\s*(\d{4})?",
            r"(bachelor|master|phd)\s*(of|degree)?\s*(\w+)?\s*[-–]?\s*(\d{4})?",
            r"(\d{4})\s*[-–]\s*(\d{4})?",
        ]
        .iter()
        .map(|pattern| {
            Regex::new(pattern)
                .map_err(|e| PlacementError::Processing(format!("Invalid degree pattern: {}", e)))
        })
        .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            skill_extractor,
            degree_patterns,
            max_education_entries: config.max_education_entries,
            max_experience_entries: config.max_experience_entries,
        })
    }

    /// Run all extractors over `text`. Never fails; missing sections become sentinels.
    pub fn parse(&self, text: &str) -> ResumeFragment {
        ResumeFragment {
            skills: self.skill_extractor.extract(text),
            education: self.extract_education(text),
            experience: self.extract_experience(text),
        }
    }

    /// Education lines from an education section, falling back to degree patterns.
    pub fn extract_education(&self, text: &str) -> String {
        let mut entries = scan_section(text, EDUCATION_HEADERS, EDUCATION_STOPS, |line| {
            let lowered = line.to_lowercase();
            line.trim().chars().count() > MIN_EDUCATION_LINE
                && EDUCATION_KEYWORDS.iter().any(|k| lowered.contains(k))
        });

        if entries.is_empty() {
            entries = self.match_degree_patterns(&text.to_lowercase());
        }

        join_entries(entries, self.max_education_entries, EDUCATION_NOT_FOUND)
    }

    /// Lines of the experience section.
    pub fn extract_experience(&self, text: &str) -> String {
        let entries = scan_section(text, EXPERIENCE_HEADERS, EXPERIENCE_STOPS, |line| {
            line.trim().chars().count() > MIN_EXPERIENCE_LINE
        });

        join_entries(entries, self.max_experience_entries, NO_EXPERIENCE)
    }

    fn match_degree_patterns(&self, lowered: &str) -> Vec<String> {
        let mut entries = Vec::new();

        for pattern in &self.degree_patterns {
            for captures in pattern.captures_iter(lowered) {
                let entry = captures
                    .iter()
                    .skip(1)
                    .flatten()
                    .map(|m| m.as_str())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ");
                if !entry.is_empty() {
                    entries.push(entry);
                }
            }
        }

        entries
    }
}

/// Collect lines after a header line until a stop line.
///
/// The header line itself is never collected. A stop line is offered to
/// `keep` before the scan ends.
fn scan_section<F>(text: &str, headers: &[&str], stops: &[&str], keep: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut entries = Vec::new();
    let mut in_section = false;

    for line in text.lines() {
        let lowered = line.to_lowercase();

        if headers.iter().any(|h| lowered.contains(h)) {
            in_section = true;
            continue;
        }

        if !in_section {
            continue;
        }

        if keep(line) {
            entries.push(line.trim().to_string());
        }

        if stops.iter().any(|s| lowered.contains(s)) {
            break;
        }
    }

    entries
}

fn join_entries(entries: Vec<String>, max: usize, sentinel: &str) -> String {
    if entries.is_empty() {
        return sentinel.to_string();
    }
    entries
        .into_iter()
        .take(max)
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR)
}
