//! Output formatters for console, JSON, Markdown and HTML reports

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{Result, ResumeAnalyzerError};
use crate::output::report::{AnalysisReport, MatchRating};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
}

pub struct ConsoleFormatter {
    use_colors: bool,
    show_preview: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    show_preview: bool,
}

pub struct HtmlFormatter {
    show_preview: bool,
}

/// Coordinates the individual formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Resume Match Report</title>
    <style>
        body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; max-width: 860px; margin: 0 auto; padding: 20px; color: #333; }
        h1 { color: #4B8BBE; text-align: center; }
        .bar { background: #e9ecef; border-radius: 6px; height: 18px; }
        .fill { background: #4B8BBE; border-radius: 6px; height: 18px; }
        .missing { border-left: 4px solid #ffc107; padding-left: 12px; }
        .complete { border-left: 4px solid #28a745; padding-left: 12px; }
        pre { background: #f8f9fa; padding: 12px; white-space: pre-wrap; }
        .metadata { color: #6c757d; font-size: 0.9em; }
    </style>
</head>
<body>
    <h1>Resume Match Report</h1>

    <h2>Match Score</h2>
    <div class="bar"><div class="fill" style="width: {{ score }}%"></div></div>
    <p><strong>Match Percentage:</strong> {{ score }}% ({{ rating }})</p>

    {% if missing_skills.is_empty() %}
    <h2 class="complete">All key skills found!</h2>
    {% else %}
    <h2>Missing Skills</h2>
    <p class="missing">{{ missing_skills.join(", ") }}</p>
    {% endif %}

    <h2>Suggestions</h2>
    <ul>
    {% for suggestion in suggestions %}
        <li>{{ suggestion }}</li>
    {% endfor %}
    </ul>

    {% if show_preview %}
    <h2>Resume Text Preview (first {{ preview_chars }} chars)</h2>
    <pre>{{ preview }}</pre>
    {% endif %}

    <div class="metadata">
        <p>Resume: {{ resume_source }} | Job: {{ job_source }} | Generated: {{ generated_at }} | resume-analyzer v{{ version }}</p>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    score: String,
    rating: String,
    missing_skills: Vec<String>,
    suggestions: Vec<String>,
    show_preview: bool,
    preview_chars: usize,
    preview: String,
    resume_source: String,
    job_source: String,
    generated_at: String,
    version: String,
}

fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

fn format_timestamp(report: &AnalysisReport) -> String {
    report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, show_preview: bool) -> Self {
        Self { use_colors, show_preview }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "▓".blue().bold(), title.blue().bold())
        } else {
            format!("\n▓ {}\n", title)
        }
    }

    fn format_progress_bar(&self, score: f64) -> String {
        const WIDTH: usize = 30;
        let filled = ((score / 100.0) * WIDTH as f64).round() as usize;
        let filled = filled.min(WIDTH);
        format!(
            "[{}{}]",
            self.colorize(&"█".repeat(filled), Color::Cyan),
            "░".repeat(WIDTH - filled)
        )
    }

    fn format_rating(&self, rating: MatchRating) -> String {
        let color = match rating {
            MatchRating::Strong => Color::Green,
            MatchRating::Good => Color::BrightGreen,
            MatchRating::Fair => Color::Yellow,
            MatchRating::Weak => Color::Red,
        };
        if self.use_colors {
            format!("[{}]", rating.label().color(color).bold())
        } else {
            format!("[{}]", rating.label())
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();
        let result = &report.result;

        output.push_str(&self.format_header("RESUME MATCH ANALYSIS"));
        output.push_str(&format!(
            "Resume: {} | Job: {}\n",
            report.metadata.resume_source, report.metadata.job_source
        ));

        output.push_str(&self.format_header("Match Score"));
        output.push_str(&format!(
            "{} {}% {}\n",
            self.format_progress_bar(result.match_score),
            format_score(result.match_score),
            self.format_rating(report.rating())
        ));

        if result.missing_skills.is_empty() {
            output.push_str(&self.format_header("All key skills found!"));
        } else {
            output.push_str(&self.format_header("Missing Skills"));
            output.push_str(&format!(
                "{}\n",
                self.colorize(&result.missing_skills.join(", "), Color::Yellow)
            ));
        }

        output.push_str(&self.format_header("Suggestions"));
        for suggestion in &result.suggestions {
            output.push_str(&format!("  - {}\n", suggestion));
        }

        if self.show_preview {
            output.push_str(&self.format_header(&format!(
                "Resume Text Preview (first {} chars)",
                report.resume_preview.chars().count()
            )));
            output.push_str(&report.resume_preview);
            output.push('\n');
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(show_preview: bool) -> Self {
        Self { show_preview }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();
        let result = &report.result;

        output.push_str("# Resume Match Report\n\n");
        output.push_str(&format!(
            "**Resume:** `{}` | **Job:** `{}` | **Generated:** {}\n\n",
            report.metadata.resume_source,
            report.metadata.job_source,
            format_timestamp(report)
        ));

        output.push_str("## Match Score\n\n");
        output.push_str(&format!(
            "**Match Percentage:** {}% ({})\n\n",
            format_score(result.match_score),
            report.rating().label()
        ));

        if result.missing_skills.is_empty() {
            output.push_str("## All key skills found!\n\n");
        } else {
            output.push_str("## Missing Skills\n\n");
            output.push_str(&format!("{}\n\n", result.missing_skills.join(", ")));
        }

        output.push_str("## Suggestions\n\n");
        for suggestion in &result.suggestions {
            output.push_str(&format!("- {}\n", suggestion));
        }

        if self.show_preview {
            output.push_str(&format!(
                "\n## Resume Text Preview (first {} chars)\n\n```text\n{}\n```\n",
                report.resume_preview.chars().count(),
                report.resume_preview
            ));
        }

        Ok(output)
    }
}

impl HtmlFormatter {
    pub fn new(show_preview: bool) -> Self {
        Self { show_preview }
    }

    fn create_template_data(&self, report: &AnalysisReport) -> HtmlTemplate {
        HtmlTemplate {
            score: format_score(report.result.match_score),
            rating: report.rating().label().to_string(),
            missing_skills: report.result.missing_skills.clone(),
            suggestions: report.result.suggestions.clone(),
            show_preview: self.show_preview,
            preview_chars: report.resume_preview.chars().count(),
            preview: report.resume_preview.clone(),
            resume_source: report.metadata.resume_source.clone(),
            job_source: report.metadata.job_source.clone(),
            generated_at: format_timestamp(report),
            version: report.metadata.version.clone(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| ResumeAnalyzerError::OutputFormatting(e.to_string()))
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, show_preview: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, show_preview),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(show_preview),
            html_formatter: HtmlFormatter::new(show_preview),
        }
    }

    pub fn from_config(config: &OutputConfig, detailed: bool) -> Self {
        Self::new(
            config.color_output,
            detailed || config.show_preview,
            config.pretty_json,
        )
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}
