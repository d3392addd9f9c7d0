//! Text extraction from various file formats

use crate::error::{Result, ResumeAnalyzerError};
use log::{debug, warn};
use lopdf::Document;
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Extract text from a PDF held in memory, one entry per page in page order.
///
/// A page whose text cannot be extracted contributes an empty string; only a
/// stream that does not parse as a PDF is an error.
pub fn extract_pdf_pages(bytes: &[u8]) -> Result<Vec<String>> {
    let doc = Document::load_mem(bytes)
        .map_err(|e| ResumeAnalyzerError::DocumentParse(format!("Failed to parse PDF: {}", e)))?;

    // get_pages is keyed by page number, so iteration is already in page order
    let pages = doc.get_pages();
    debug!("PDF has {} pages", pages.len());

    let texts = pages
        .keys()
        .map(|&page_num| match doc.extract_text(&[page_num]) {
            Ok(text) => {
                if text.trim().is_empty() {
                    warn!("Page {} has no extractable text", page_num);
                }
                text
            }
            Err(e) => {
                warn!("Failed to extract text from page {}: {}", page_num, e);
                String::new()
            }
        })
        .collect();

    Ok(texts)
}

/// Concatenated text of every page, without separators.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    Ok(extract_pdf_pages(bytes)?.concat())
}

pub struct PdfExtractor;

impl PdfExtractor {
    /// Same as `extract` but also reports the page count.
    pub async fn extract_with_pages(&self, path: &Path) -> Result<(String, usize)> {
        let bytes = fs::read(path).await?;

        let pages = extract_pdf_pages(&bytes).map_err(|e| match e {
            ResumeAnalyzerError::DocumentParse(msg) => {
                ResumeAnalyzerError::DocumentParse(format!("'{}': {}", path.display(), msg))
            }
            other => other,
        })?;
        let page_count = pages.len();
        Ok((pages.concat(), page_count))
    }
}

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let (text, _) = self.extract_with_pages(path).await?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Render Markdown to HTML and strip it back down to plain lines.
pub fn markdown_to_text(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    let tag_regex = Regex::new(r"<[^>]*>").expect("Invalid tag regex");
    let html_output = html_output.replace("<br />", "\n");
    let stripped = tag_regex.replace_all(&html_output, "");

    // Entities are decoded after tag stripping so escaped `<` survives
    let decoded = stripped
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    decoded
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
