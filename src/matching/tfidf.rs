//! Minimal TF-IDF vectorizer for the similarity scorer
//!
//! Builds a shared vocabulary over a small document collection, weights
//! term counts by smoothed inverse document frequency and exposes dense
//! vectors suitable for cosine comparison. Smoothing
//! (`idf = ln((1 + n) / (1 + df)) + 1`) keeps terms present in every
//! document at a positive weight, so two identical documents still
//! compare at full similarity.

use std::collections::HashMap;

pub struct TfidfVectorizer {
    vocab: HashMap<String, usize>,
    idf: Vec<f64>,
}

pub struct TfidfBuilder {
    documents: Vec<String>,
}

impl TfidfBuilder {
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
        }
    }

    pub fn add(&mut self, document: &str) {
        self.documents.push(document.to_lowercase());
    }

    pub fn build(self) -> TfidfVectorizer {
        let mut vocab: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: HashMap<usize, usize> = HashMap::new();

        for doc in &self.documents {
            let mut seen = std::collections::HashSet::new();
            for term in tokenize(doc) {
                let next_id = vocab.len();
                let id = *vocab.entry(term).or_insert(next_id);
                if seen.insert(id) {
                    *doc_freq.entry(id).or_insert(0) += 1;
                }
            }
        }

        let total = self.documents.len() as f64;
        let mut idf = vec![0.0; vocab.len()];
        for (id, df) in doc_freq {
            idf[id] = ((1.0 + total) / (1.0 + df as f64)).ln() + 1.0;
        }

        TfidfVectorizer { vocab, idf }
    }
}

impl Default for TfidfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TfidfVectorizer {
    pub fn vocabulary_size(&self) -> usize {
        self.vocab.len()
    }

    /// TF-IDF vector for a document over the fitted vocabulary.
    /// Out-of-vocabulary terms are ignored.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocab.len()];
        for term in tokenize(&document.to_lowercase()) {
            if let Some(&id) = self.vocab.get(&term) {
                vector[id] += self.idf[id];
            }
        }
        vector
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
}

/// Cosine similarity between two equal-length vectors, 0 when either
/// vector has zero norm.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_documents_have_unit_similarity() {
        let mut builder = TfidfBuilder::new();
        builder.add("python sql excel");
        builder.add("python sql excel");
        let vectorizer = builder.build();

        let a = vectorizer.transform("python sql excel");
        let b = vectorizer.transform("python sql excel");

        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_documents_have_zero_similarity() {
        let mut builder = TfidfBuilder::new();
        builder.add("python sql");
        builder.add("html css");
        let vectorizer = builder.build();

        let a = vectorizer.transform("python sql");
        let b = vectorizer.transform("html css");

        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_partial_overlap_is_graded() {
        let mut builder = TfidfBuilder::new();
        builder.add("python sql");
        builder.add("python sql excel");
        let vectorizer = builder.build();

        let a = vectorizer.transform("python sql");
        let b = vectorizer.transform("python sql excel");
        let similarity = cosine_similarity(&a, &b);

        assert!(similarity > 0.0 && similarity < 1.0);
    }

    #[test]
    fn test_out_of_vocabulary_terms_are_ignored() {
        let mut builder = TfidfBuilder::new();
        builder.add("python");
        builder.add("sql");
        let vectorizer = builder.build();

        let vector = vectorizer.transform("haskell prolog");
        assert!(vector.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_zero_norm_similarity_is_zero() {
        let a = vec![0.0, 0.0];
        let b = vec![1.0, 2.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }
}
