//! Skill extraction from free resume text
//!
//! Scans unstructured text for known vocabulary terms. A term counts as
//! extracted only when it appears as a case-insensitive whole word; the
//! extractor also reports fuzzy near-misses (likely typos) separately, and
//! those never count as extracted skills.

use crate::error::{Result, SkillGapError};
use crate::matching::skills::{normalize_skill, SkillSet};
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;
use unicode_segmentation::UnicodeSegmentation;

const DEFAULT_FUZZY_THRESHOLD: f64 = 0.88;

pub struct SkillExtractor {
    vocabulary: Vec<String>,
    matcher: AhoCorasick,
    fuzzy_threshold: f64,
}

/// A vocabulary skill that almost matched a word in the text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuzzySuggestion {
    pub skill: String,
    pub found: String,
    pub similarity: f64,
}

impl SkillExtractor {
    pub fn new(vocabulary: &SkillSet) -> Result<Self> {
        let vocabulary: Vec<String> = vocabulary.iter().cloned().collect();
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&vocabulary)
            .map_err(|e| {
                SkillGapError::InvalidInput(format!("Failed to build skill matcher: {}", e))
            })?;

        Ok(Self {
            vocabulary,
            matcher,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        })
    }

    pub fn with_fuzzy_threshold(mut self, threshold: f64) -> Self {
        self.fuzzy_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Return the subset of the vocabulary present in the text as
    /// whole-word, case-insensitive matches.
    pub fn extract(&self, text: &str) -> SkillSet {
        let mut found = SkillSet::new();
        for mat in self.matcher.find_iter(text) {
            if is_word_bounded(text, mat.start(), mat.end()) {
                found.insert(normalize_skill(&self.vocabulary[mat.pattern()]));
            }
        }
        found
    }

    /// Vocabulary skills that nearly match a word in the text, highest
    /// similarity first. Exact hits are excluded.
    pub fn fuzzy_suggestions(&self, text: &str) -> Vec<FuzzySuggestion> {
        let exact = self.extract(text);
        let mut suggestions = Vec::new();

        for word in text.unicode_words() {
            let word = word.to_lowercase();
            // Character count, not byte length; short non-ASCII words must
            // not slip past the filter.
            if word.chars().count() < 3 {
                continue;
            }
            for skill in &self.vocabulary {
                if exact.contains(skill) || word == *skill {
                    continue;
                }
                let similarity = jaro_winkler(&word, skill);
                if similarity >= self.fuzzy_threshold {
                    suggestions.push(FuzzySuggestion {
                        skill: skill.clone(),
                        found: word.clone(),
                        similarity,
                    });
                }
            }
        }

        suggestions.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        suggestions.dedup_by(|a, b| a.skill == b.skill && a.found == b.found);
        suggestions
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Whole-word check for a match span: the characters adjacent to the span
/// must not be alphanumeric. Mirrors regex `\b` semantics closely enough
/// for skill tokens that may end in non-word characters like "c++".
fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric());
    let after_ok = text[end..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric());
    before_ok && after_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::skills::parse_skill_list;

    fn extractor(vocab: &str) -> SkillExtractor {
        SkillExtractor::new(&parse_skill_list(vocab)).unwrap()
    }

    #[test]
    fn test_extracts_known_skills() {
        let extractor = extractor("python, sql, excel");
        let skills = extractor.extract("Experienced in Python and SQL development");

        assert_eq!(skills, parse_skill_list("python, sql"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let extractor = extractor("python");
        assert!(!extractor.extract("I write PYTHON daily").is_empty());
    }

    #[test]
    fn test_no_substring_matches() {
        let extractor = extractor("java, r");
        let skills = extractor.extract("I love javascript and rust");

        assert!(skills.is_empty());
    }

    #[test]
    fn test_multiword_skills() {
        let extractor = extractor("machine learning, sql");
        let skills = extractor.extract("Built machine learning pipelines");

        assert!(skills.contains("machine learning"));
    }

    #[test]
    fn test_empty_text_and_empty_vocabulary() {
        let extractor = extractor("python");
        assert!(extractor.extract("").is_empty());

        let empty = SkillExtractor::new(&SkillSet::new()).unwrap();
        assert!(empty.extract("python everywhere").is_empty());
    }

    #[test]
    fn test_fuzzy_suggestions_catch_typos() {
        let extractor = extractor("python, javascript");
        let suggestions = extractor.fuzzy_suggestions("I know Pyhton well");

        assert!(suggestions.iter().any(|s| s.skill == "python"));
    }

    #[test]
    fn test_fuzzy_suggestions_skip_short_unicode_words() {
        // "gé" is two characters but four bytes; it must still be treated
        // as too short to fuzzy-match.
        let extractor = extractor("géo");
        let suggestions = extractor.fuzzy_suggestions("la gé carte");

        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_fuzzy_suggestions_exclude_exact_hits() {
        let extractor = extractor("python");
        let suggestions = extractor.fuzzy_suggestions("python python python");

        assert!(suggestions.is_empty());
    }
}
