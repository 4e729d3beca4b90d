//! Profile/posting scoring, ranking, duplicate detection and analytics

pub mod scorer;
pub mod ranking;
pub mod duplicates;
pub mod gaps;
pub mod analytics;
