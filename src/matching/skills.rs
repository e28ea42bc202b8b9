//! Skill string normalization
//!
//! A skill is a trimmed, lowercased string token. Everything downstream
//! (matchers, catalogs, the extractor) compares skills by string equality,
//! so every entry point runs through these two functions before anything
//! else sees the data.

use std::collections::BTreeSet;

/// A deduplicated set of normalized skills.
///
/// BTreeSet keeps iteration order deterministic, so reports and ranked
/// output are reproducible across runs.
pub type SkillSet = BTreeSet<String>;

/// Normalize a single raw skill token.
pub fn normalize_skill(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Parse a comma-separated skill list into a normalized skill set.
///
/// Empty tokens from consecutive or trailing commas are dropped rather
/// than treated as a skill that matches the empty string.
pub fn parse_skill_list(raw: &str) -> SkillSet {
    raw.split(',')
        .map(normalize_skill)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_skill("  Python "), "python");
        assert_eq!(normalize_skill("SQL"), "sql");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_skill("  Machine Learning ");
        assert_eq!(normalize_skill(&once), once);
    }

    #[test]
    fn test_parse_skill_list() {
        let skills = parse_skill_list("Python, SQL , excel");
        assert_eq!(skills.len(), 3);
        assert!(skills.contains("python"));
        assert!(skills.contains("sql"));
        assert!(skills.contains("excel"));
    }

    #[test]
    fn test_parse_drops_empty_tokens() {
        let skills = parse_skill_list("python,,sql,");
        assert_eq!(skills.len(), 2);
        assert!(!skills.contains(""));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_skill_list("").is_empty());
        assert!(parse_skill_list(" , , ").is_empty());
    }

    #[test]
    fn test_parse_deduplicates() {
        let skills = parse_skill_list("python, Python, PYTHON");
        assert_eq!(skills.len(), 1);
    }
}
