//! Resume analyzer: match a resume against a job description

use clap::Parser;
use log::{error, info};
use resume_analyzer::cli::{self, Cli, Commands, ConfigAction, Spinner};
use resume_analyzer::config::Config;
use resume_analyzer::error::{Result, ResumeAnalyzerError};
use resume_analyzer::input::InputManager;
use resume_analyzer::output::formatter::{save_report_to_file, ReportGenerator};
use resume_analyzer::output::report::{AnalysisReport, ReportSources};
use resume_analyzer::processing::analyzer::AnalysisEngine;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            job_text,
            output,
            save,
            detailed,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "txt", "md", "markdown"])
                .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Resume file: {}", e)))?;

            if let Some(job_path) = &job {
                cli::validate_file_extension(job_path, &["txt", "md", "markdown"])
                    .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Job description file: {}", e)))?;
            }

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeAnalyzerError::InvalidInput)?,
                None => config.output.format,
            };

            let spinner = Spinner::start();

            let started = Instant::now();
            let mut input_manager = InputManager::new();

            spinner.set_message("Extracting resume text...");
            let resume_text = input_manager.extract_text(&resume).await?;
            let resume_pages = input_manager.last_page_count();

            spinner.set_message("Reading job description...");
            let (job_text, job_source) = match (job, job_text) {
                (Some(path), _) => (input_manager.extract_text(&path).await?, path.display().to_string()),
                (None, Some(text)) => (text, "inline".to_string()),
                (None, None) => {
                    return Err(ResumeAnalyzerError::InvalidInput(
                        "A job description is required".to_string(),
                    ))
                }
            };

            if job_text.trim().is_empty() {
                return Err(ResumeAnalyzerError::InvalidInput(
                    "Job description is empty".to_string(),
                ));
            }

            info!(
                "Resume: {} characters, job description: {} characters",
                resume_text.chars().count(),
                job_text.chars().count()
            );

            spinner.set_message("Analyzing...");
            let engine = AnalysisEngine::from_config(&config)?;
            let result = engine.analyze(&resume_text, &job_text);
            drop(spinner);

            let report = AnalysisReport::new(
                result,
                &resume_text,
                &job_text,
                config.output.preview_chars,
                ReportSources {
                    resume_source: resume.display().to_string(),
                    job_source,
                    resume_pages,
                },
                started.elapsed().as_millis() as u64,
            );

            let generator = ReportGenerator::from_config(&config.output, detailed);
            let rendered = generator.generate_report(&report, output_format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Skills => {
            let catalog = config.skill_catalog();
            println!("Skill catalog ({} skills):", catalog.len());
            for (i, skill) in catalog.skills().iter().enumerate() {
                println!("  {}. {}", i + 1, skill);
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("Current Configuration ({})\n", path.display());
                    println!("Skills: {}", config.skills.catalog.join(", "));
                    println!("Tailor threshold: {:.1}%", config.scoring.tailor_threshold);
                    println!("Output format: {:?}", config.output.format);
                    println!("Color output: {}", config.output.color_output);
                    println!("Show preview: {}", config.output.show_preview);
                    println!("Preview length: {} characters", config.output.preview_chars);
                }

                Some(ConfigAction::Reset) => {
                    Config::default().save_to(&path)?;
                    println!("Configuration reset: {}", path.display());
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}
