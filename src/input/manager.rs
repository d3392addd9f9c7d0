//! Input manager for handling different file types

use crate::error::{Result, ResumeAnalyzerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone)]
struct CachedText {
    text: String,
    page_count: Option<usize>,
}

pub struct InputManager {
    cache: HashMap<String, CachedText>,
    last_page_count: Option<usize>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            last_page_count: None,
        }
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if let Some(cached) = self.cache.get(&path_str) {
            info!("Using cached text for: {}", path.display());
            self.last_page_count = cached.page_count;
            return Ok(cached.text.clone());
        }

        if !path.exists() {
            return Err(ResumeAnalyzerError::InvalidInput(
                format!("File does not exist: {}", path.display())
            ));
        }

        let file_type = self.detect_file_type(path)?;

        let (text, page_count) = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                let (text, pages) = PdfExtractor.extract_with_pages(path).await?;
                (text, Some(pages))
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                (PlainTextExtractor.extract(path).await?, None)
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                (MarkdownExtractor.extract(path).await?, None)
            }
            FileType::Unknown => {
                return Err(ResumeAnalyzerError::UnsupportedFormat(
                    format!("Unsupported file type for: {}", path.display())
                ));
            }
        };

        self.last_page_count = page_count;

        self.cache.insert(path_str, CachedText { text: text.clone(), page_count });

        Ok(text)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        FileType::from_path(path).ok_or_else(|| {
            ResumeAnalyzerError::InvalidInput(format!("File has no extension: {}", path.display()))
        })
    }

    /// Page count of the most recent extraction, if it was a PDF
    pub fn last_page_count(&self) -> Option<usize> {
        self.last_page_count
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
