//! TF-IDF cosine similarity matching between skill collections

use crate::matching::set_matcher::{set_match, MatchResult};
use crate::matching::skills::SkillSet;
use crate::matching::tfidf::{cosine_similarity, TfidfBuilder};

/// Score two skill sets by TF-IDF cosine similarity.
///
/// Each set is flattened to a space-joined synthetic document, the pair is
/// vectorized over a shared vocabulary, and the cosine between the two
/// vectors is scaled to a 0-100 percentage rounded to two decimals. Unlike
/// exact set overlap this grades partial lexical overlap, e.g. multi-word
/// skills sharing terms.
///
/// The returned `matched` and `missing` sets are computed exactly as the
/// set-based matcher does; they are carried for display and do not feed
/// the score.
pub fn similarity_match(candidate: &SkillSet, required: &SkillSet) -> MatchResult {
    let mut result = set_match(candidate, required);

    // The vectorizer cannot build a vocabulary from an empty document,
    // so an empty side short-circuits to zero.
    if candidate.is_empty() || required.is_empty() {
        result.score = 0.0;
        return result;
    }

    let candidate_doc = join_skills(candidate);
    let required_doc = join_skills(required);

    let mut builder = TfidfBuilder::new();
    builder.add(&candidate_doc);
    builder.add(&required_doc);
    let vectorizer = builder.build();

    let a = vectorizer.transform(&candidate_doc);
    let b = vectorizer.transform(&required_doc);

    result.score = round2(cosine_similarity(&a, &b) * 100.0);
    result
}

fn join_skills(skills: &SkillSet) -> String {
    skills.iter().cloned().collect::<Vec<_>>().join(" ")
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
