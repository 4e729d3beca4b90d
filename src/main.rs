//! placement-match: resume parsing and candidate/posting matching

use chrono::Utc;
use clap::Parser;
use log::{error, info, warn};
use placement_match::cli::{self, Cli, Commands, ConfigAction, RecommendTarget};
use placement_match::input::manager::InputManager;
use placement_match::matching::analytics::{skill_demand, top_applicant_skills};
use placement_match::matching::duplicates::DuplicateDetector;
use placement_match::matching::gaps::analyze_gap;
use placement_match::matching::ranking::Ranker;
use placement_match::matching::scorer::MatchScorer;
use placement_match::models::{PostingId, SkillSet};
use placement_match::output::formatter::formatter_for;
use placement_match::output::report::*;
use placement_match::processing::analyzer::ResumeAnalyzer;
use placement_match::store::{Dataset, DocumentLookup, StoredDocument};
use placement_match::{Config, PlacementError, Result};
use std::path::Path;
use std::process;

const APPLICANT_SKILLS_TOP: usize = 10;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) if path.exists() => Config::load_from(path),
        Some(path) => {
            warn!("No configuration at {}, using defaults", path.display());
            Ok(Config::default())
        }
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let format = match cli.output.as_deref().map(cli::parse_output_format) {
        Some(Ok(format)) => format,
        Some(Err(e)) => {
            error!("{}", e);
            process::exit(1);
        }
        None => config.output.format,
    };

    match run_command(cli.command, &config, cli.config.as_deref()).await {
        Ok(Some(report)) => {
            let formatter = formatter_for(format, config.output.color_output);
            match formatter.format_report(&report) {
                Ok(text) => print!("{}", text),
                Err(e) => {
                    error!("{}", e);
                    process::exit(1);
                }
            }
        }
        Ok(None) => {}
        Err(e) => {
            error!("Command failed: {}", e);
            process::exit(1);
        }
    }
}

async fn run_command(
    command: Commands,
    config: &Config,
    config_override: Option<&Path>,
) -> Result<Option<Report>> {
    let scorer = MatchScorer::new(config.scoring.clone());
    let ranker = Ranker::new(&scorer, &config.ranking);

    let report = match command {
        Commands::Analyze {
            resume,
            posting_skills,
            dataset,
            profile,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "txt", "md", "markdown"])
                .map_err(|e| PlacementError::InvalidInput(format!("Resume file: {}", e)))?;

            let mut input_manager = InputManager::new();
            let text = input_manager.extract_text_or_empty(&resume).await?;

            let posting_skills: SkillSet = posting_skills
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect();
            let analyzer = ResumeAnalyzer::new(&config.parsing)?;
            let document = analyzer.analyze(
                &text,
                (!posting_skills.is_empty()).then_some(&posting_skills),
            );

            let mut report = ResumeReport {
                source: resume.display().to_string(),
                document,
                profile_id: None,
                replaced_previous: false,
                duplicates: Vec::new(),
            };

            if let (Some(path), Some(profile_id)) = (dataset, profile) {
                let mut dataset = Dataset::load(&path).await?;
                dataset.profile(profile_id)?;

                let detector = DuplicateDetector::new(config.duplicates.threshold);
                let duplicates =
                    detector.detect(&report.document.skills, &dataset.documents, Some(profile_id));
                if !duplicates.is_empty() {
                    warn!(
                        "Resume for profile {} resembles {} stored resumes",
                        profile_id,
                        duplicates.len()
                    );
                }

                let filename = resume
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned());
                let stored =
                    StoredDocument::from_parsed(profile_id, filename, &report.document, &duplicates)?;
                report.replaced_previous = dataset.upsert_document(stored);
                dataset.save(&path).await?;

                report.profile_id = Some(profile_id);
                report.duplicates = duplicates;
            }

            Report::Resume(report)
        }

        Commands::Match {
            dataset,
            profile,
            posting,
        } => {
            let dataset = load_dataset(&dataset).await?;
            let profile = dataset.profile(profile)?;
            let posting = dataset.posting(posting)?;
            let document_score = dataset.document_for(profile.id).map(|d| d.score);

            Report::Match(MatchReport {
                profile_id: profile.id,
                profile_name: profile.name.clone(),
                posting_id: posting.id,
                posting_title: posting.title.clone(),
                breakdown: scorer.breakdown(profile, posting, document_score),
            })
        }

        Commands::Recommend { target } => match target {
            RecommendTarget::Postings {
                dataset,
                profile,
                limit,
            } => {
                let dataset = load_dataset(&dataset).await?;
                let profile = dataset.profile(profile)?;
                let document_score = dataset.document_for(profile.id).map(|d| d.score);
                let postings = ranker.rank_postings(
                    profile,
                    &dataset.postings,
                    document_score,
                    &dataset,
                    limit.unwrap_or(config.ranking.default_limit),
                );

                Report::PostingRecommendations(PostingRecommendations {
                    profile_id: profile.id,
                    postings,
                })
            }
            RecommendTarget::Profiles {
                dataset,
                posting,
                limit,
            } => {
                let dataset = load_dataset(&dataset).await?;
                let posting = dataset.posting(posting)?;
                let profiles = ranker.rank_profiles(
                    posting,
                    &dataset.profiles,
                    &dataset,
                    limit.unwrap_or(config.ranking.default_limit),
                );

                Report::ProfileRecommendations(ProfileRecommendations {
                    posting_id: posting.id,
                    profiles,
                })
            }
        },

        Commands::Shortlist {
            dataset: path,
            posting,
            count,
            dry_run,
        } => {
            let mut dataset = load_dataset(&path).await?;
            let posting = dataset.posting(posting)?.clone();
            let profiles = dataset.profiles.clone();
            let entries = ranker.shortlist(
                &posting,
                &profiles,
                &mut dataset,
                count.unwrap_or(config.ranking.shortlist_count),
            );

            if dry_run {
                info!("Dry run: shortlist not saved");
            } else {
                dataset.save(&path).await?;
            }

            Report::Shortlist(ShortlistReport {
                posting_id: posting.id,
                dry_run,
                entries,
            })
        }

        Commands::Duplicates { dataset, profile } => {
            let dataset = load_dataset(&dataset).await?;
            dataset.profile(profile)?;
            let document = dataset.document_for(profile).ok_or_else(|| {
                PlacementError::NotFound(format!("stored resume for profile {}", profile))
            })?;

            let detector = DuplicateDetector::new(config.duplicates.threshold);
            let duplicates =
                detector.detect(&document.skill_set()?, &dataset.documents, Some(profile));

            Report::Duplicates(DuplicateReport {
                profile_id: profile,
                threshold: detector.threshold(),
                duplicates,
            })
        }

        Commands::Gaps {
            dataset,
            profile,
            posting,
        } => {
            let dataset = load_dataset(&dataset).await?;
            let profile = dataset.profile(profile)?;
            let posting = dataset.posting(posting)?;

            Report::Gap(analyze_gap(profile, posting))
        }

        Commands::Demand { dataset, top } => {
            let dataset = load_dataset(&dataset).await?;
            let active: Vec<PostingId> = dataset
                .postings
                .iter()
                .filter(|p| p.is_active)
                .map(|p| p.id)
                .collect();

            Report::Demand(DemandReport {
                demand: skill_demand(&dataset.postings, top),
                applicant_skills: top_applicant_skills(
                    &dataset.applications,
                    &dataset.profiles,
                    &active,
                    top.min(APPLICANT_SKILLS_TOP),
                ),
            })
        }

        Commands::Config { action } => {
            let path = config_override
                .map(Path::to_path_buf)
                .unwrap_or_else(Config::config_path);
            run_config_action(action, config, &path)?;
            return Ok(None);
        }
    };

    Ok(Some(report))
}

/// Load a dataset and persist any postings that expired since it was saved.
async fn load_dataset(path: &Path) -> Result<Dataset> {
    let mut dataset = Dataset::load(path).await?;
    if dataset.expire_postings(Utc::now()) > 0 {
        dataset.save(path).await?;
    }
    Ok(dataset)
}

fn run_config_action(action: Option<ConfigAction>, config: &Config, path: &Path) -> Result<()> {
    match action {
        Some(ConfigAction::Show) | None => {
            let content = toml::to_string_pretty(config).map_err(|e| {
                PlacementError::Configuration(format!("Failed to serialize config: {}", e))
            })?;
            println!("# {}", path.display());
            print!("{}", content);
        }

        Some(ConfigAction::Reset) => {
            Config::default().save_to(path)?;
            info!("Configuration reset to defaults at {}", path.display());
        }

        Some(ConfigAction::Path) => {
            println!("{}", path.display());
        }
    }

    Ok(())
}
