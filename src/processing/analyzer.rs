//! Resume analysis: parsing followed by scoring

use crate::config::ParsingConfig;
use crate::error::Result;
use crate::models::{ParsedDocument, SkillSet};
use crate::processing::resume_parser::ResumeParser;
use crate::processing::resume_score::calculate_resume_score;
use log::{debug, info};
use std::time::Instant;

/// Produces a [`ParsedDocument`] from plain resume text.
pub struct ResumeAnalyzer {
    parser: ResumeParser,
}

impl ResumeAnalyzer {
    pub fn new(config: &ParsingConfig) -> Result<Self> {
        Ok(Self {
            parser: ResumeParser::new(config)?,
        })
    }

    /// Parse and score `text`, optionally against a posting's required skills.
    pub fn analyze(&self, text: &str, posting_skills: Option<&SkillSet>) -> ParsedDocument {
        let start = Instant::now();

        let fragment = self.parser.parse(text);
        debug!(
            "Parsed resume: {} skills, education present: {}, experience present: {}",
            fragment.skills.len(),
            fragment.has_education(),
            fragment.has_experience()
        );

        let scored = calculate_resume_score(&fragment, posting_skills);
        info!(
            "Resume scored {} in {}ms",
            scored.score,
            start.elapsed().as_millis()
        );

        ParsedDocument {
            skills: fragment.skills,
            education: fragment.education,
            experience: fragment.experience,
            score: scored.score,
            suggestions: scored.suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EDUCATION_NOT_FOUND, NO_EXPERIENCE};

    #[test]
    fn test_empty_text_degrades_gracefully() {
        let analyzer = ResumeAnalyzer::new(&ParsingConfig::default()).unwrap();
        let document = analyzer.analyze("", None);

        assert!(document.skills.is_empty());
        assert_eq!(document.education, EDUCATION_NOT_FOUND);
        assert_eq!(document.experience, NO_EXPERIENCE);
        assert_eq!(document.score, 5);
    }

    #[test]
    fn test_full_resume() {
        let analyzer = ResumeAnalyzer::new(&ParsingConfig::default()).unwrap();
        let text = "\
Asha Verma
Education
B.Tech in Computer Engineering, National Institute of Technology
Experience
Backend intern at Finbox building REST API services
Owned the project to migrate jobs to Docker and Kubernetes
Introduced a testing framework for the payments team
Skills
Python, Django, Flask, SQL, PostgreSQL, Redis, AWS, Docker, Kubernetes, Git, Linux, Agile";

        let document = analyzer.analyze(text, None);

        assert!(document.skills.len() >= 10);
        assert!(document.education.starts_with("B.Tech in Computer Engineering"));
        assert!(document.experience.contains("Backend intern at Finbox"));
        // 25 + 15 + 15 + formatting (technology, project, framework)
        assert_eq!(document.score, 67);
        assert_eq!(document.suggestions, vec!["Great skill set!"]);
    }
}
