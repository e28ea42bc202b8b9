//! Exact set-overlap matching between candidate and required skills

use crate::matching::skills::SkillSet;
use serde::{Deserialize, Serialize};

/// Outcome of comparing a candidate skill set against a role's requirements.
///
/// `matched` and `missing` always partition the required set:
/// `matched ∪ missing = required` and the two never overlap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: SkillSet,
    pub missing: SkillSet,
    /// Percentage in [0, 100].
    pub score: f64,
}

impl MatchResult {
    pub fn empty() -> Self {
        Self {
            matched: SkillSet::new(),
            missing: SkillSet::new(),
            score: 0.0,
        }
    }
}

/// Compute matched/missing skills and a percentage match score.
///
/// The score is the fraction of required skills the candidate covers. An
/// empty required set scores 0 rather than dividing by zero: no match is
/// demonstrable against a role that requires nothing.
pub fn set_match(candidate: &SkillSet, required: &SkillSet) -> MatchResult {
    let matched: SkillSet = candidate.intersection(required).cloned().collect();
    let missing: SkillSet = required.difference(candidate).cloned().collect();

    let score = if required.is_empty() {
        0.0
    } else {
        matched.len() as f64 / required.len() as f64 * 100.0
    };

    MatchResult {
        matched,
        missing,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::skills::parse_skill_list;

    #[test]
    fn test_partial_match() {
        let candidate = parse_skill_list("python, sql");
        let required = parse_skill_list("python, sql, excel");

        let result = set_match(&candidate, &required);

        assert_eq!(result.matched, parse_skill_list("python, sql"));
        assert_eq!(result.missing, parse_skill_list("excel"));
        assert_eq!(format!("{:.2}", result.score), "66.67");
    }

    #[test]
    fn test_matched_and_missing_partition_required() {
        let candidate = parse_skill_list("python, docker, git");
        let required = parse_skill_list("python, sql, excel, git");

        let result = set_match(&candidate, &required);

        let mut union = result.matched.clone();
        union.extend(result.missing.iter().cloned());
        assert_eq!(union, required);
        assert!(result.matched.intersection(&result.missing).next().is_none());
    }

    #[test]
    fn test_full_match_scores_100() {
        let candidate = parse_skill_list("python, sql, excel");
        let required = parse_skill_list("python, sql");

        let result = set_match(&candidate, &required);

        assert_eq!(result.score, 100.0);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let candidate = parse_skill_list("html, css");
        let required = parse_skill_list("python, sql");

        let result = set_match(&candidate, &required);

        assert_eq!(result.score, 0.0);
        assert!(result.matched.is_empty());
        assert_eq!(result.missing, required);
    }

    #[test]
    fn test_empty_candidate() {
        let candidate = SkillSet::new();
        let required = parse_skill_list("python");

        let result = set_match(&candidate, &required);

        assert_eq!(result.score, 0.0);
        assert_eq!(result.missing, parse_skill_list("python"));
    }

    #[test]
    fn test_empty_required_scores_zero() {
        let candidate = parse_skill_list("python, sql");
        let required = SkillSet::new();

        let result = set_match(&candidate, &required);

        assert_eq!(result.score, 0.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_score_bounds() {
        let candidate = parse_skill_list("a, b, c");
        let required = parse_skill_list("b, c, d, e");

        let result = set_match(&candidate, &required);

        assert!(result.score >= 0.0 && result.score <= 100.0);
    }
}
