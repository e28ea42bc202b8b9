//! Report formatters for console, JSON and Markdown output

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::AnalysisReport;
use colored::Colorize;

/// Trait for rendering an analysis report to a string.
pub trait ReportFormatter {
    fn format(&self, report: &AnalysisReport) -> Result<String>;
}

/// Console formatter with colored score highlighting.
pub struct ConsoleFormatter {
    pub use_colors: bool,
}

/// JSON formatter for structured consumers.
pub struct JsonFormatter {
    pub pretty: bool,
}

/// Markdown formatter for shareable reports.
pub struct MarkdownFormatter;

/// Render a report in the requested format. `use_colors` only affects
/// console output.
pub fn format_report(
    report: &AnalysisReport,
    format: &OutputFormat,
    use_colors: bool,
) -> Result<String> {
    match format {
        OutputFormat::Console => ConsoleFormatter { use_colors }.format(report),
        OutputFormat::Json => JsonFormatter { pretty: true }.format(report),
        OutputFormat::Markdown => MarkdownFormatter.format(report),
    }
}

impl ReportFormatter for ConsoleFormatter {
    fn format(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&self.heading("🎯 Skill Gap Analysis"));
        out.push('\n');
        out.push_str(&format!(
            "Candidate skills: {}\n",
            join_skills(&report.candidate_skills)
        ));
        out.push_str(&format!("Scoring strategy: {}\n", report.scorer));

        if report.entries.is_empty() {
            out.push('\n');
            out.push_str(&self.warn("No suitable roles found."));
            out.push('\n');
        }

        for entry in &report.entries {
            out.push('\n');
            out.push_str(&self.heading(&format!(
                "{} — {}",
                entry.role,
                self.score(entry.score)
            )));
            out.push('\n');
            out.push_str(&format!("  ✅ Matched: {}\n", join_skills(&entry.matched)));
            if entry.missing.is_empty() {
                out.push_str("  🏅 No missing skills. Fully job-ready!\n");
            } else {
                out.push_str(&format!("  ❌ Missing: {}\n", join_skills(&entry.missing)));
                out.push_str("  📘 Recommended courses:\n");
                for rec in &entry.recommendations {
                    match &rec.resource {
                        Some(resource) => out.push_str(&format!(
                            "    - {}: {} ({})\n",
                            title_case(&rec.skill),
                            resource.course,
                            resource.url
                        )),
                        None => out.push_str(&format!(
                            "    - {}: no course found\n",
                            title_case(&rec.skill)
                        )),
                    }
                }
            }
        }

        if !report.fuzzy_suggestions.is_empty() {
            out.push('\n');
            out.push_str("💡 Possible typos in your resume:\n");
            for suggestion in &report.fuzzy_suggestions {
                out.push_str(&format!(
                    "  - '{}' looks like '{}' ({:.0}% similar)\n",
                    suggestion.found,
                    suggestion.skill,
                    suggestion.similarity * 100.0
                ));
            }
        }

        Ok(out)
    }
}

impl ConsoleFormatter {
    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn warn(&self, text: &str) -> String {
        if self.use_colors {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn score(&self, score: f64) -> String {
        let text = format!("{:.2}%", score);
        if !self.use_colors {
            return text;
        }
        if score >= 70.0 {
            text.green().to_string()
        } else if score > 0.0 {
            text.yellow().to_string()
        } else {
            text.red().to_string()
        }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &AnalysisReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();

        out.push_str("# Skill Gap Analysis\n\n");
        out.push_str(&format!(
            "Generated: {}\n\n",
            report.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        out.push_str(&format!(
            "**Candidate skills:** {}\n\n",
            join_skills(&report.candidate_skills)
        ));
        out.push_str(&format!("**Scoring strategy:** {}\n\n", report.scorer));

        if report.entries.is_empty() {
            out.push_str("_No suitable roles found._\n");
            return Ok(out);
        }

        for entry in &report.entries {
            out.push_str(&format!("## {} — {:.2}%\n\n", entry.role, entry.score));
            out.push_str(&format!("- Matched: {}\n", join_skills(&entry.matched)));
            out.push_str(&format!("- Missing: {}\n", join_skills(&entry.missing)));
            for rec in &entry.recommendations {
                match &rec.resource {
                    Some(resource) => out.push_str(&format!(
                        "  - **{}**: [{}]({})\n",
                        title_case(&rec.skill),
                        resource.course,
                        resource.url
                    )),
                    None => out.push_str(&format!(
                        "  - **{}**: no course found\n",
                        title_case(&rec.skill)
                    )),
                }
            }
            out.push('\n');
        }

        Ok(out)
    }
}

fn join_skills(skills: &crate::matching::skills::SkillSet) -> String {
    if skills.is_empty() {
        "(none)".to_string()
    } else {
        skills.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// Capitalize each word of a skill for display ("machine learning" ->
/// "Machine Learning").
fn title_case(skill: &str) -> String {
    skill
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::resources::ResourceCatalog;
    use crate::catalog::roles::Role;
    use crate::matching::ranker::rank_roles;
    use crate::matching::scorer::SetScorer;
    use crate::matching::skills::parse_skill_list;
    use crate::output::report::AnalysisReport;

    fn sample_report() -> AnalysisReport {
        let roles = vec![Role::new("Data Analyst", "python, sql, excel")];
        let resources = ResourceCatalog::from_resources(Vec::new());
        let candidate = parse_skill_list("python, sql");
        let ranked = rank_roles(&candidate, &roles, &SetScorer);
        AnalysisReport::build(candidate, ranked, &resources, "set-overlap")
    }

    #[test]
    fn test_console_renders_no_course_placeholder() {
        let output = ConsoleFormatter { use_colors: false }
            .format(&sample_report())
            .unwrap();

        assert!(output.contains("Data Analyst"));
        assert!(output.contains("66.67"));
        assert!(output.contains("Excel: no course found"));
    }

    #[test]
    fn test_console_renders_empty_ranking() {
        let report = AnalysisReport::build(
            parse_skill_list("cobol"),
            Vec::new(),
            &ResourceCatalog::from_resources(Vec::new()),
            "set-overlap",
        );

        let output = ConsoleFormatter { use_colors: false }.format(&report).unwrap();
        assert!(output.contains("No suitable roles found"));
    }

    #[test]
    fn test_console_without_colors_has_no_ansi_codes() {
        let output = format_report(&sample_report(), &OutputFormat::Console, false).unwrap();

        assert!(!output.contains('\x1b'));
        assert!(output.contains("Data Analyst"));
    }

    #[test]
    fn test_json_round_trips() {
        let output = JsonFormatter { pretty: false }
            .format(&sample_report())
            .unwrap();

        let parsed: AnalysisReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(parsed.entries[0].role, "Data Analyst");
    }

    #[test]
    fn test_markdown_structure() {
        let output = MarkdownFormatter.format(&sample_report()).unwrap();

        assert!(output.starts_with("# Skill Gap Analysis"));
        assert!(output.contains("## Data Analyst — 66.67%"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("sql"), "Sql");
    }
}
