//! CLI interface for the placement matcher

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "placement-match")]
#[command(about = "Resume parsing and candidate/posting match scoring")]
#[command(long_about = "Parse resumes into skills, education and experience, score them, and rank postings and candidates against each other")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: console, json (defaults to the configured format)
    #[arg(short, long, global = true)]
    pub output: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse and score a resume
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Comma-separated skills required by a posting
        #[arg(long, value_delimiter = ',')]
        posting_skills: Vec<String>,

        /// Dataset to store the parsed resume in (requires --profile)
        #[arg(short, long, requires = "profile")]
        dataset: Option<PathBuf>,

        /// Profile that owns the resume
        #[arg(short, long, requires = "dataset")]
        profile: Option<u64>,
    },

    /// Score one profile against one posting
    Match {
        #[arg(short, long)]
        dataset: PathBuf,

        #[arg(short, long)]
        profile: u64,

        #[arg(long)]
        posting: u64,
    },

    /// Rank postings for a profile or profiles for a posting
    Recommend {
        #[command(subcommand)]
        target: RecommendTarget,
    },

    /// Shortlist the best-matching profiles for a posting
    Shortlist {
        #[arg(short, long)]
        dataset: PathBuf,

        #[arg(long)]
        posting: u64,

        /// Number of profiles to shortlist
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Show the shortlist without saving it
        #[arg(long)]
        dry_run: bool,
    },

    /// Find stored resumes with near-identical skill sets
    Duplicates {
        #[arg(short, long)]
        dataset: PathBuf,

        #[arg(short, long)]
        profile: u64,
    },

    /// Skill gaps of a profile for a posting, with learning paths
    Gaps {
        #[arg(short, long)]
        dataset: PathBuf,

        #[arg(short, long)]
        profile: u64,

        #[arg(long)]
        posting: u64,
    },

    /// Most requested skills across postings
    Demand {
        #[arg(short, long)]
        dataset: PathBuf,

        /// Number of skills to list
        #[arg(short = 'n', long, default_value_t = 20)]
        top: usize,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum RecommendTarget {
    /// Open postings for a profile, excluding ones already applied to
    Postings {
        #[arg(short, long)]
        dataset: PathBuf,

        #[arg(short, long)]
        profile: u64,

        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Profiles for a posting, including ones that already applied
    Profiles {
        #[arg(short, long)]
        dataset: PathBuf,

        #[arg(long)]
        posting: u64,

        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &std::path::Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze_with_posting_skills() {
        let cli = Cli::parse_from([
            "placement-match",
            "analyze",
            "--resume",
            "cv.txt",
            "--posting-skills",
            "python,sql",
        ]);
        match cli.command {
            Commands::Analyze { posting_skills, dataset, .. } => {
                assert_eq!(posting_skills, vec!["python", "sql"]);
                assert!(dataset.is_none());
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_dataset_requires_profile() {
        let result = Cli::try_parse_from([
            "placement-match",
            "analyze",
            "--resume",
            "cv.txt",
            "--dataset",
            "data.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_file_extension_validation() {
        assert!(validate_file_extension(Path::new("cv.PDF"), &["pdf", "txt"]).is_ok());
        assert!(validate_file_extension(Path::new("cv.docx"), &["pdf", "txt"]).is_err());
        assert!(validate_file_extension(Path::new("cv"), &["pdf"]).is_err());
    }
}
