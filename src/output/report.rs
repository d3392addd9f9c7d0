//! Report structure handed to the formatters

use crate::processing::analyzer::{text_preview, AnalysisResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub result: AnalysisResult,

    /// Leading characters of the extracted resume text
    pub resume_preview: String,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub resume_source: String,
    pub job_source: String,
    pub resume_chars: usize,
    pub job_chars: usize,
    /// Only set when the resume was a PDF
    pub resume_pages: Option<usize>,
    pub generated_at: DateTime<Utc>,
    pub processing_time_ms: u64,
    pub version: String,
}

/// Rating label for a match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchRating {
    Strong,
    Good,
    Fair,
    Weak,
}

impl MatchRating {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 80.0 => MatchRating::Strong,
            s if s >= 70.0 => MatchRating::Good,
            s if s >= 40.0 => MatchRating::Fair,
            _ => MatchRating::Weak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchRating::Strong => "STRONG MATCH",
            MatchRating::Good => "GOOD MATCH",
            MatchRating::Fair => "FAIR MATCH",
            MatchRating::Weak => "WEAK MATCH",
        }
    }
}

impl AnalysisReport {
    pub fn new(
        result: AnalysisResult,
        resume_text: &str,
        job_text: &str,
        preview_chars: usize,
        sources: ReportSources,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            result,
            resume_preview: text_preview(resume_text, preview_chars),
            metadata: ReportMetadata {
                resume_source: sources.resume_source,
                job_source: sources.job_source,
                resume_chars: resume_text.chars().count(),
                job_chars: job_text.chars().count(),
                resume_pages: sources.resume_pages,
                generated_at: Utc::now(),
                processing_time_ms,
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    pub fn rating(&self) -> MatchRating {
        MatchRating::from_score(self.result.match_score)
    }
}

/// Where the two documents came from
#[derive(Debug, Clone, Default)]
pub struct ReportSources {
    pub resume_source: String,
    pub job_source: String,
    pub resume_pages: Option<usize>,
}

#[cfg(test)]
pub(crate) fn sample_report(missing: &[&str]) -> AnalysisReport {
    let result = AnalysisResult {
        match_score: 42.17,
        missing_skills: missing.iter().map(|s| s.to_string()).collect(),
        suggestions: vec![
            "Consider tailoring your resume to match the job description more closely.".to_string(),
            "Make sure your resume highlights measurable achievements and projects.".to_string(),
        ],
    };
    AnalysisReport::new(
        result,
        "Jane Roe <jane@example.com>\nPython & SQL analyst",
        "Looking for python, sql, docker, aws expert",
        800,
        ReportSources {
            resume_source: "resume.pdf".to_string(),
            job_source: "job.txt".to_string(),
            resume_pages: Some(1),
        },
        12,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bands() {
        assert_eq!(MatchRating::from_score(100.0), MatchRating::Strong);
        assert_eq!(MatchRating::from_score(70.0), MatchRating::Good);
        assert_eq!(MatchRating::from_score(69.99), MatchRating::Fair);
        assert_eq!(MatchRating::from_score(0.0), MatchRating::Weak);
    }

    #[test]
    fn test_report_metadata() {
        let report = sample_report(&["docker"]);
        assert_eq!(report.metadata.resume_pages, Some(1));
        assert_eq!(report.metadata.job_chars, 43);
        assert!(report.resume_preview.starts_with("Jane Roe"));
        assert_eq!(report.rating(), MatchRating::Fair);
    }

    #[test]
    fn test_preview_is_truncated() {
        let long = "a".repeat(2000);
        let result = AnalysisResult {
            match_score: 0.0,
            missing_skills: vec![],
            suggestions: vec![],
        };
        let report = AnalysisReport::new(result, &long, "job", 800, ReportSources::default(), 0);
        assert_eq!(report.resume_preview.len(), 800);
        assert_eq!(report.metadata.resume_chars, 2000);
    }
}
