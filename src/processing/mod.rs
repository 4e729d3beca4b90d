//! Resume text processing: vocabulary, extraction and scoring

pub mod vocabulary;
pub mod skill_extractor;
pub mod resume_parser;
pub mod resume_score;
pub mod analyzer;
