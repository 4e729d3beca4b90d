//! Resume input handling
//! File detection, text extraction and extraction caching

pub mod file_detector;
pub mod text_extractor;
pub mod manager;
