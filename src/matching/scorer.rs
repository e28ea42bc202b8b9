//! Scoring strategies behind a common interface
//!
//! Set-overlap and TF-IDF similarity scoring share the same
//! `(candidate, required) -> MatchResult` contract, so the ranking loop
//! and CLI take a `Scorer` instead of hard-coding either variant.

use crate::matching::set_matcher::{set_match, MatchResult};
use crate::matching::similarity::similarity_match;
use crate::matching::skills::SkillSet;
use serde::{Deserialize, Serialize};

pub trait Scorer {
    fn score(&self, candidate: &SkillSet, required: &SkillSet) -> MatchResult;

    /// Short name used in reports and logs.
    fn name(&self) -> &'static str;
}

/// Exact set-overlap scoring.
pub struct SetScorer;

impl Scorer for SetScorer {
    fn score(&self, candidate: &SkillSet, required: &SkillSet) -> MatchResult {
        set_match(candidate, required)
    }

    fn name(&self) -> &'static str {
        "set-overlap"
    }
}

/// TF-IDF cosine similarity scoring.
pub struct TfidfScorer;

impl Scorer for TfidfScorer {
    fn score(&self, candidate: &SkillSet, required: &SkillSet) -> MatchResult {
        similarity_match(candidate, required)
    }

    fn name(&self) -> &'static str {
        "tfidf-cosine"
    }
}

/// Configurable selector for the two scoring strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorerKind {
    Set,
    Tfidf,
}

impl ScorerKind {
    pub fn build(self) -> Box<dyn Scorer> {
        match self {
            ScorerKind::Set => Box::new(SetScorer),
            ScorerKind::Tfidf => Box::new(TfidfScorer),
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "set" | "set-overlap" => Some(ScorerKind::Set),
            "tfidf" | "tfidf-cosine" | "similarity" => Some(ScorerKind::Tfidf),
            _ => None,
        }
    }
}

impl Default for ScorerKind {
    fn default() -> Self {
        ScorerKind::Set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::skills::parse_skill_list;

    #[test]
    fn test_strategies_agree_on_exact_sets() {
        let candidate = parse_skill_list("python, sql, excel");
        let required = parse_skill_list("python, sql, excel");

        let set_result = SetScorer.score(&candidate, &required);
        let tfidf_result = TfidfScorer.score(&candidate, &required);

        assert_eq!(set_result.score, 100.0);
        assert_eq!(tfidf_result.score, 100.0);
        assert_eq!(set_result.matched, tfidf_result.matched);
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!(ScorerKind::parse("set"), Some(ScorerKind::Set));
        assert_eq!(ScorerKind::parse("TFIDF"), Some(ScorerKind::Tfidf));
        assert_eq!(ScorerKind::parse("similarity"), Some(ScorerKind::Tfidf));
        assert_eq!(ScorerKind::parse("bogus"), None);
    }

    #[test]
    fn test_kind_builds_matching_scorer() {
        assert_eq!(ScorerKind::Set.build().name(), "set-overlap");
        assert_eq!(ScorerKind::Tfidf.build().name(), "tfidf-cosine");
    }
}
