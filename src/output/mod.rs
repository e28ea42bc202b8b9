//! Analysis reports and output formatting

pub mod formatter;
pub mod report;

pub use formatter::{format_report, ConsoleFormatter, JsonFormatter, MarkdownFormatter};
pub use report::{AnalysisReport, RoleEntry, SkillRecommendation};
