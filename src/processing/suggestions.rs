//! Templated advice derived from the match score and the skill gap

pub const TAILOR_MESSAGE: &str =
    "Consider tailoring your resume to match the job description more closely.";
pub const MISSING_SKILLS_PREFIX: &str = "Focus on learning or highlighting missing skills: ";
pub const ACHIEVEMENTS_MESSAGE: &str =
    "Make sure your resume highlights measurable achievements and projects.";

pub const DEFAULT_TAILOR_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone)]
pub struct SuggestionGenerator {
    tailor_threshold: f64,
}

impl Default for SuggestionGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_TAILOR_THRESHOLD)
    }
}

impl SuggestionGenerator {
    pub fn new(tailor_threshold: f64) -> Self {
        Self { tailor_threshold }
    }

    /// Always non-empty; the achievements message is always last.
    pub fn generate(&self, match_score: f64, missing_skills: &[String]) -> Vec<String> {
        let mut suggestions = Vec::with_capacity(3);

        if match_score < self.tailor_threshold {
            suggestions.push(TAILOR_MESSAGE.to_string());
        }

        if !missing_skills.is_empty() {
            suggestions.push(format!("{}{}", MISSING_SKILLS_PREFIX, missing_skills.join(", ")));
        }

        suggestions.push(ACHIEVEMENTS_MESSAGE.to_string());
        suggestions
    }
}
