//! Integration tests for the resume analyzer

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use resume_analyzer::config::Config;
use resume_analyzer::input::text_extractor::extract_pdf_text;
use resume_analyzer::input::InputManager;
use resume_analyzer::output::formatter::ReportGenerator;
use resume_analyzer::output::report::{AnalysisReport, ReportSources};
use resume_analyzer::processing::analyzer::AnalysisEngine;
use resume_analyzer::ResumeAnalyzerError;
use std::path::Path;
use tempfile::TempDir;

fn build_pdf(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

fn engine() -> AnalysisEngine {
    AnalysisEngine::from_config(&Config::default()).unwrap()
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Node.js"));
    assert_eq!(manager.last_page_count(), None);
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Example Corp"));
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_text_extraction_from_pdf() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("resume.pdf");
    std::fs::write(&path, build_pdf(&["Python developer", "SQL and Git"])).unwrap();

    let mut manager = InputManager::new();
    let text = manager.extract_text(&path).await.unwrap();

    assert!(text.contains("Python developer"));
    assert!(text.contains("SQL and Git"));
    assert!(text.find("Python").unwrap() < text.find("SQL").unwrap());
    assert_eq!(manager.last_page_count(), Some(2));
}

#[tokio::test]
async fn test_malformed_pdf_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.pdf");
    std::fs::write(&path, b"this is not a pdf document").unwrap();

    let mut manager = InputManager::new();
    let result = manager.extract_text(&path).await;
    assert!(matches!(result, Err(ResumeAnalyzerError::DocumentParse(_))));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ResumeAnalyzerError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ResumeAnalyzerError::InvalidInput(_))));
}

#[tokio::test]
async fn test_end_to_end_fixture_analysis() {
    let mut manager = InputManager::new();
    let resume = manager.extract_text(Path::new("tests/fixtures/sample_resume.txt")).await.unwrap();
    let job = manager.extract_text(Path::new("tests/fixtures/sample_job.txt")).await.unwrap();

    let result = engine().analyze(&resume, &job);

    assert!(result.match_score > 0.0 && result.match_score < 100.0);
    assert_eq!(result.missing_skills, vec!["machine learning", "docker", "aws"]);
    assert_eq!(
        result.suggestions.last().map(String::as_str),
        Some("Make sure your resume highlights measurable achievements and projects.")
    );
}

#[tokio::test]
async fn test_pdf_resume_against_markdown_job() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("resume.pdf");
    std::fs::write(&path, build_pdf(&["I know python and sql"])).unwrap();

    let mut manager = InputManager::new();
    let resume = manager.extract_text(&path).await.unwrap();
    let job = manager.extract_text(Path::new("tests/fixtures/sample_job.md")).await.unwrap();

    let result = engine().analyze(&resume, &job);
    assert!(result.match_score > 0.0);
    assert_eq!(result.missing_skills, vec!["docker", "aws"]);
}

#[test]
fn test_reference_scenarios() {
    let engine = engine();

    let partial = engine.analyze("I know python and sql", "Looking for python, sql, docker, aws expert");
    assert!(partial.match_score > 0.0);
    assert_eq!(partial.missing_skills, vec!["docker", "aws"]);

    let text = "Looking for python, sql, docker, aws expert";
    let identical = engine.analyze(text, text);
    assert_eq!(identical.match_score, 100.0);
    assert!(identical.missing_skills.is_empty());

    let empty = engine.analyze("", text);
    assert_eq!(empty.match_score, 0.0);
    assert_eq!(empty.missing_skills, vec!["python", "sql", "docker", "aws"]);
}

#[test]
fn test_direct_pdf_bytes() {
    let text = extract_pdf_text(&build_pdf(&["Docker", "AWS"])).unwrap();
    assert!(text.contains("Docker"));
    assert!(text.contains("AWS"));

    assert!(matches!(
        extract_pdf_text(&[]),
        Err(ResumeAnalyzerError::DocumentParse(_))
    ));
}

#[test]
fn test_report_rendering_all_formats() {
    let resume = "I know python and sql";
    let job = "Looking for python, sql, docker, aws expert";
    let result = engine().analyze(resume, job);
    let report = AnalysisReport::new(result, resume, job, 800, ReportSources::default(), 1);

    let generator = ReportGenerator::new(false, true, true);
    for format in [
        resume_analyzer::config::OutputFormat::Console,
        resume_analyzer::config::OutputFormat::Json,
        resume_analyzer::config::OutputFormat::Markdown,
        resume_analyzer::config::OutputFormat::Html,
    ] {
        let rendered = generator.generate_report(&report, format).unwrap();
        assert!(rendered.contains("docker, aws") || rendered.contains("\"docker\""));
        assert!(rendered.contains("I know python and sql"));
    }
}
