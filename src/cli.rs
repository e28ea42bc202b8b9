//! CLI interface for the skill gap analyzer

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skillgap")]
#[command(about = "Skill gap analysis against catalogued job roles")]
#[command(
    long_about = "Compare your skills against job-role requirements, rank matching roles, extract skills from a resume and predict likely roles"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the role catalog CSV path
    #[arg(long, global = true)]
    pub roles: Option<PathBuf>,

    /// Override the resource catalog CSV path
    #[arg(long, global = true)]
    pub resources: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze your skills against one catalogued role
    Analyze {
        /// Comma-separated skill list (e.g. "python, sql, excel")
        #[arg(short, long)]
        skills: String,

        /// Role name to compare against
        #[arg(short, long)]
        role: String,

        /// Scoring strategy: set, tfidf
        #[arg(long)]
        scorer: Option<String>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Rank all catalogued roles against your skills
    Rank {
        /// Comma-separated skill list
        #[arg(short, long)]
        skills: String,

        /// Scoring strategy: set, tfidf
        #[arg(long)]
        scorer: Option<String>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Extract skills from a resume file (PDF, TXT, MD) and rank roles
    Resume {
        /// Path to the resume file
        file: PathBuf,

        /// Scoring strategy: set, tfidf
        #[arg(long)]
        scorer: Option<String>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Train the role classifier from the role catalog
    Train,

    /// Predict likely roles for a skill list using the trained classifier
    Predict {
        /// Comma-separated skill list
        #[arg(short, long)]
        skills: String,
    },

    /// List catalog contents
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List catalogued roles and their required skills
    Roles,

    /// List catalogued learning resources
    Resources,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// File extensions the resume pipeline can extract text from. Must stay in
/// step with `FileType::from_extension`.
pub const RESUME_EXTENSIONS: &[&str] = &["pdf", "txt", "md", "markdown"];

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console"), Ok(OutputFormat::Console));
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_resume_extensions_match_supported_file_types() {
        use crate::input::file_detector::FileType;

        for ext in RESUME_EXTENSIONS {
            assert_ne!(FileType::from_extension(ext), FileType::Unknown);
        }
        let path = PathBuf::from("resume.markdown");
        assert!(validate_file_extension(&path, RESUME_EXTENSIONS).is_ok());
    }

    #[test]
    fn test_validate_file_extension() {
        let path = PathBuf::from("resume.pdf");
        assert!(validate_file_extension(&path, &["pdf", "txt", "md"]).is_ok());

        let path = PathBuf::from("resume.docx");
        assert!(validate_file_extension(&path, &["pdf", "txt", "md"]).is_err());

        let path = PathBuf::from("resume");
        assert!(validate_file_extension(&path, &["pdf"]).is_err());
    }
}
