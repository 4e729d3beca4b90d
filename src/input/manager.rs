//! Input manager routing resume files to the right extractor

use crate::error::{PlacementError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(PlacementError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(PlacementError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    /// Like [`extract_text`](Self::extract_text) for supported files, but an
    /// unreadable document yields empty text so analysis can still run.
    pub async fn extract_text_or_empty(&mut self, path: &Path) -> Result<String> {
        if !FileType::from_path(path).is_supported() {
            return Err(PlacementError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            )));
        }

        match self.extract_text(path).await {
            Ok(text) => Ok(text),
            Err(PlacementError::InvalidInput(msg)) => Err(PlacementError::InvalidInput(msg)),
            Err(e) => {
                warn!("Could not read {}: {}; analyzing empty text", path.display(), e);
                Ok(String::new())
            }
        }
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_broken_pdf_degrades_to_empty_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"definitely not a pdf").unwrap();

        let mut manager = InputManager::new();
        assert!(manager.extract_text(&path).await.is_err());
        assert_eq!(manager.extract_text_or_empty(&path).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_missing_file_is_still_an_error() {
        let mut manager = InputManager::new();
        let result = manager.extract_text_or_empty(Path::new("missing/resume.txt")).await;
        assert!(matches!(result, Err(PlacementError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_cache_can_be_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "Python").unwrap();

        let mut manager = InputManager::new().with_cache(false);
        manager.extract_text(&path).await.unwrap();
        assert_eq!(manager.cache_size(), 0);
    }
}
