//! Analysis engine wiring scorer, skill-gap detector and suggestions together

use crate::config::Config;
use crate::error::Result;
use crate::processing::scorer::Scorer;
use crate::processing::skill_gap::{SkillCatalog, SkillGapDetector};
use crate::processing::suggestions::SuggestionGenerator;
use log::info;
use serde::{Deserialize, Serialize};

/// Outcome of comparing one resume with one job description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// TF-IDF cosine similarity in [0, 100], two decimals
    pub match_score: f64,
    /// Catalog skills the job asks for that the resume lacks, in catalog order
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<String>,
}

pub struct AnalysisEngine {
    scorer: Scorer,
    detector: SkillGapDetector,
    suggestions: SuggestionGenerator,
}

impl AnalysisEngine {
    pub fn new(catalog: SkillCatalog, tailor_threshold: f64) -> Result<Self> {
        Ok(Self {
            scorer: Scorer::new(),
            detector: SkillGapDetector::new(catalog)?,
            suggestions: SuggestionGenerator::new(tailor_threshold),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.skill_catalog(), config.scoring.tailor_threshold)
    }

    pub fn analyze(&self, resume_text: &str, job_text: &str) -> AnalysisResult {
        let match_score = self.scorer.score(resume_text, job_text);
        let missing_skills = self.detector.missing_skills(resume_text, job_text);
        let suggestions = self.suggestions.generate(match_score, &missing_skills);

        info!(
            "Match score {:.2}%, {} missing skills",
            match_score,
            missing_skills.len()
        );

        AnalysisResult {
            match_score,
            missing_skills,
            suggestions,
        }
    }
}

/// First `max_chars` characters of `text`
pub fn text_preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::suggestions::{ACHIEVEMENTS_MESSAGE, TAILOR_MESSAGE};

    fn engine() -> AnalysisEngine {
        AnalysisEngine::from_config(&Config::default()).unwrap()
    }

    #[test]
    fn test_partial_match_scenario() {
        let result = engine().analyze(
            "I know python and sql",
            "Looking for python, sql, docker, aws expert",
        );

        assert!(result.match_score > 0.0);
        assert_eq!(result.missing_skills, vec!["docker", "aws"]);
        assert_eq!(result.suggestions.len(), 3);
        assert_eq!(result.suggestions[0], TAILOR_MESSAGE);
    }

    #[test]
    fn test_identical_documents() {
        let text = "Data analyst skilled in SQL, Excel and Python dashboards";
        let result = engine().analyze(text, text);

        assert_eq!(result.match_score, 100.0);
        assert!(result.missing_skills.is_empty());
        assert_eq!(result.suggestions, vec![ACHIEVEMENTS_MESSAGE.to_string()]);
    }

    #[test]
    fn test_empty_resume() {
        let result = engine().analyze("", "Docker and AWS experience, git workflow");

        assert_eq!(result.match_score, 0.0);
        assert_eq!(result.missing_skills, vec!["git", "docker", "aws"]);
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = SkillCatalog::new(["rust", "kubernetes"]);
        let engine = AnalysisEngine::new(catalog, 70.0).unwrap();
        let result = engine.analyze("Go developer", "Rust and Kubernetes; Docker nice to have");

        assert_eq!(result.missing_skills, vec!["rust", "kubernetes"]);
    }

    #[test]
    fn test_text_preview_counts_characters() {
        assert_eq!(text_preview("héllo wörld", 5), "héllo");
        assert_eq!(text_preview("short", 800), "short");
        assert_eq!(text_preview(&"x".repeat(1000), 800).chars().count(), 800);
    }
}
