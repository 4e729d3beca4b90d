//! Placement matcher library
//!
//! Resume text analysis (skills, education, experience, completeness score)
//! and profile/posting match scoring for a campus placement platform.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod matching;
pub mod models;
pub mod output;
pub mod processing;
pub mod store;

pub use config::Config;
pub use error::{PlacementError, Result};
