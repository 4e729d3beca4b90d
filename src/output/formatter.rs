//! Output formatters for command reports

use crate::config::OutputFormat;
use crate::error::{PlacementError, Result};
use crate::output::report::*;
use colored::Colorize;
use std::fmt::Write as _;

/// Trait for formatting command reports
pub trait OutputFormatter {
    fn format_report(&self, report: &Report) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for scripting and API responses
pub struct JsonFormatter {
    pretty: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn score(&self, value: f64) -> String {
        let text = format!("{:.2}%", value);
        if !self.use_colors {
            return text;
        }
        if value >= 70.0 {
            text.green().to_string()
        } else if value >= 40.0 {
            text.yellow().to_string()
        } else {
            text.red().to_string()
        }
    }

    fn write_list(out: &mut String, label: &str, items: &[String]) -> std::fmt::Result {
        if items.is_empty() {
            writeln!(out, "  {}: none", label)
        } else {
            writeln!(out, "  {}: {}", label, items.join(", "))
        }
    }

    fn render(&self, report: &Report) -> std::result::Result<String, std::fmt::Error> {
        let mut out = String::new();

        match report {
            Report::Resume(r) => {
                writeln!(out, "{}", self.heading(&format!("Resume analysis: {}", r.source)))?;
                writeln!(out, "  Score: {}", self.score(f64::from(r.document.score)))?;
                Self::write_list(&mut out, "Skills", r.document.skills.as_slice())?;
                writeln!(out, "  Education: {}", r.document.education)?;
                writeln!(out, "  Experience: {}", r.document.experience)?;
                if !r.document.suggestions.is_empty() {
                    writeln!(out, "  Suggestions:")?;
                    for suggestion in &r.document.suggestions {
                        writeln!(out, "    - {}", suggestion)?;
                    }
                }
                if let Some(profile_id) = r.profile_id {
                    let verb = if r.replaced_previous { "Replaced" } else { "Stored" };
                    writeln!(out, "  {} document for profile {}", verb, profile_id)?;
                }
                for duplicate in &r.duplicates {
                    writeln!(
                        out,
                        "  Possible duplicate of profile {} ({:.0}% skill overlap)",
                        duplicate.profile_id,
                        duplicate.similarity
                    )?;
                }
            }
            Report::Match(r) => {
                writeln!(
                    out,
                    "{}",
                    self.heading(&format!("{} vs {}", r.profile_name, r.posting_title))
                )?;
                writeln!(out, "  Match score: {}", self.score(r.breakdown.total))?;
                writeln!(out, "  Skill match: {:.2}%", r.breakdown.skill_match.percentage)?;
                writeln!(out, "  Skills component: {:.2}", r.breakdown.skill_component)?;
                writeln!(out, "  Aptitude component: {:.2}", r.breakdown.aptitude_component)?;
                writeln!(out, "  Category component: {:.2}", r.breakdown.category_component)?;
                writeln!(out, "  Resume bonus: {:.2}", r.breakdown.document_bonus)?;
                Self::write_list(&mut out, "Matched", &r.breakdown.skill_match.matched)?;
                Self::write_list(&mut out, "Missing", &r.breakdown.skill_match.missing)?;
            }
            Report::PostingRecommendations(r) => {
                writeln!(
                    out,
                    "{}",
                    self.heading(&format!("Recommended postings for profile {}", r.profile_id))
                )?;
                if r.postings.is_empty() {
                    writeln!(out, "  No open postings to recommend")?;
                }
                for (i, posting) in r.postings.iter().enumerate() {
                    writeln!(
                        out,
                        "  {}. [{}] {} - {}",
                        i + 1,
                        posting.posting_id,
                        posting.title,
                        self.score(posting.match_score)
                    )?;
                    if !posting.missing_skills.is_empty() {
                        writeln!(out, "     missing: {}", posting.missing_skills.join(", "))?;
                    }
                }
            }
            Report::ProfileRecommendations(r) => {
                writeln!(
                    out,
                    "{}",
                    self.heading(&format!("Top candidates for posting {}", r.posting_id))
                )?;
                for (i, profile) in r.profiles.iter().enumerate() {
                    let status = profile
                        .application_status
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "not applied".to_string());
                    writeln!(
                        out,
                        "  {}. [{}] {} - {} (resume {}, {})",
                        i + 1,
                        profile.profile_id,
                        profile.name,
                        self.score(profile.match_score),
                        profile.document_score,
                        status
                    )?;
                }
            }
            Report::Shortlist(r) => {
                let title = if r.dry_run {
                    format!("Shortlist preview for posting {}", r.posting_id)
                } else {
                    format!("Shortlisted for posting {}", r.posting_id)
                };
                writeln!(out, "{}", self.heading(&title))?;
                for entry in &r.entries {
                    writeln!(
                        out,
                        "  [{}] {} - {} ({:?})",
                        entry.profile_id,
                        entry.name,
                        self.score(entry.match_score),
                        entry.action
                    )?;
                }
            }
            Report::Duplicates(r) => {
                writeln!(
                    out,
                    "{}",
                    self.heading(&format!(
                        "Duplicate check for profile {} (threshold {:.0}%)",
                        r.profile_id,
                        r.threshold * 100.0
                    ))
                )?;
                if r.duplicates.is_empty() {
                    writeln!(out, "  No similar resumes found")?;
                }
                for duplicate in &r.duplicates {
                    writeln!(
                        out,
                        "  Profile {}: {:.2}% similar",
                        duplicate.profile_id,
                        duplicate.similarity
                    )?;
                }
            }
            Report::Gap(r) => {
                writeln!(
                    out,
                    "{}",
                    self.heading(&format!("Skill gaps for {}", r.posting_title))
                )?;
                writeln!(
                    out,
                    "  Match: {} ({} gap)",
                    self.score(r.match_percentage),
                    r.severity
                )?;
                Self::write_list(&mut out, "Matched", &r.matched_skills)?;
                Self::write_list(&mut out, "Missing", &r.missing_skills)?;
                for path in &r.learning_paths {
                    writeln!(out, "    - {}", path.roadmap)?;
                }
                for recommendation in &r.recommendations {
                    writeln!(out, "  * {}", recommendation)?;
                }
                let verdict = if r.eligibility.eligible { "Eligible" } else { "Not eligible" };
                writeln!(out, "  {}: {}", verdict, r.eligibility.reason)?;
            }
            Report::Demand(r) => {
                writeln!(
                    out,
                    "{}",
                    self.heading(&format!(
                        "Skill demand across {} postings",
                        r.demand.postings_with_skills
                    ))
                )?;
                for (i, entry) in r.demand.top_skills.iter().enumerate() {
                    writeln!(out, "  {}. {} ({})", i + 1, entry.skill, entry.count)?;
                }
                if !r.applicant_skills.is_empty() {
                    writeln!(out, "{}", self.heading("Common applicant skills"))?;
                    for (i, entry) in r.applicant_skills.iter().enumerate() {
                        writeln!(out, "  {}. {} ({})", i + 1, entry.skill, entry.count)?;
                    }
                }
            }
        }

        Ok(out)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        self.render(report)
            .map_err(|e| PlacementError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        json.map_err(|e| PlacementError::OutputFormatting(format!("JSON serialization failed: {}", e)))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

/// Pick the formatter for `format`.
pub fn formatter_for(format: OutputFormat, use_colors: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}
