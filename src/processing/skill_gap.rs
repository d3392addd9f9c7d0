//! Skill catalog and missing-skill detection

use crate::error::{Result, ResumeAnalyzerError};
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered set of lowercase skill phrases
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillCatalog {
    skills: Vec<String>,
}

impl SkillCatalog {
    /// Lowercases and trims each phrase, dropping empties and repeats
    /// while keeping first-seen order.
    pub fn new<'a>(phrases: impl IntoIterator<Item = &'a str>) -> Self {
        let mut seen = HashSet::new();
        let skills = phrases
            .into_iter()
            .map(|phrase| phrase.trim().to_lowercase())
            .filter(|phrase| !phrase.is_empty())
            .filter(|phrase| seen.insert(phrase.clone()))
            .collect();

        Self { skills }
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// Reports catalog skills that the job description mentions and the resume does not
pub struct SkillGapDetector {
    catalog: SkillCatalog,
    matcher: AhoCorasick,
}

impl SkillGapDetector {
    pub fn new(catalog: SkillCatalog) -> Result<Self> {
        // Standard match kind is required for overlapping search
        let matcher = AhoCorasick::new(catalog.skills())
            .map_err(|e| ResumeAnalyzerError::Processing(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self { catalog, matcher })
    }

    /// Catalog indices of every skill occurring as a substring of `text`, case-insensitively
    fn present_skills(&self, text: &str) -> HashSet<usize> {
        let lowered = text.to_lowercase();
        self.matcher
            .find_overlapping_iter(&lowered)
            .map(|m| m.pattern().as_usize())
            .collect()
    }

    /// Skills present in `job` and absent from `resume`, in catalog order
    pub fn missing_skills(&self, resume: &str, job: &str) -> Vec<String> {
        let in_resume = self.present_skills(resume);
        let in_job = self.present_skills(job);

        self.catalog
            .skills()
            .iter()
            .enumerate()
            .filter(|(idx, _)| in_job.contains(idx) && !in_resume.contains(idx))
            .map(|(_, skill)| skill.clone())
            .collect()
    }
}
