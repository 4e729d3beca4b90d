//! Configuration management for the placement matcher

use crate::error::{PlacementError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub parsing: ParsingConfig,
    pub duplicates: DuplicateConfig,
    pub ranking: RankingConfig,
    pub output: OutputConfig,
}

/// Weights of the composite match score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub skill_weight: f64,
    pub aptitude_weight: f64,
    pub category_weight: f64,
    /// Multiplier applied to a prior resume score (0-100) as a bonus.
    pub document_bonus_weight: f64,
    /// Distance below the posting minimum that still earns half credit.
    pub aptitude_tolerance: f64,
    pub category_wildcard: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    pub match_mode: MatchMode,
    pub additional_skills: Vec<String>,
    pub max_education_entries: usize,
    pub max_experience_entries: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// A keyword found anywhere in the text counts, even inside a longer word.
    Substring,
    /// The characters around a keyword must not be alphanumeric.
    WordBoundary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuplicateConfig {
    /// Documents are flagged when the Jaccard similarity is strictly above this.
    pub threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub default_limit: usize,
    pub shortlist_count: usize,
    pub tie_break: TieBreak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Equal scores keep the order the candidates were supplied in.
    InputOrder,
    /// Equal scores are ordered by ascending id.
    Id,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            skill_weight: 0.6,
            aptitude_weight: 0.2,
            category_weight: 0.2,
            document_bonus_weight: 0.1,
            aptitude_tolerance: 1.0,
            category_wildcard: "all".to_string(),
        }
    }
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Substring,
            additional_skills: Vec::new(),
            max_education_entries: 3,
            max_experience_entries: 5,
        }
    }
}

impl Default for DuplicateConfig {
    fn default() -> Self {
        Self { threshold: 0.7 }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            shortlist_count: 10,
            tie_break: TieBreak::InputOrder,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
        }
    }
}

impl Config {
    /// Load the configuration from the default location, writing defaults on first use.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            PlacementError::Configuration(format!("Failed to parse config: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            PlacementError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("placement-match")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        let weights = [
            ("scoring.skill_weight", self.scoring.skill_weight),
            ("scoring.aptitude_weight", self.scoring.aptitude_weight),
            ("scoring.category_weight", self.scoring.category_weight),
            ("scoring.document_bonus_weight", self.scoring.document_bonus_weight),
            ("scoring.aptitude_tolerance", self.scoring.aptitude_tolerance),
        ];
        for (key, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(PlacementError::Configuration(format!(
                    "{} must be a non-negative number, got {}",
                    key, value
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.duplicates.threshold) {
            return Err(PlacementError::Configuration(format!(
                "duplicates.threshold must be within 0.0..=1.0, got {}",
                self.duplicates.threshold
            )));
        }

        Ok(())
    }
}
