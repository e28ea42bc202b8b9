//! Role classifier over bag-of-words skill text
//!
//! Trained from the role catalog: each role contributes one training
//! example, its skill list flattened to a space-joined string. The model is
//! a per-label term-count matrix; prediction vectorizes the input over the
//! trained vocabulary and scores each label by cosine against its row.
//! Multi-label by design: every label above the confidence threshold is
//! returned, best first.
//!
//! Two artifacts are persisted, the model itself and the label index, both
//! as JSON under the configured models directory.

use crate::catalog::roles::RoleCatalog;
use crate::error::{Result, SkillGapError};
use crate::matching::skills::parse_skill_list;
use crate::matching::tfidf::cosine_similarity;
use log::info;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const MODEL_FILE: &str = "role_model.json";
pub const LABELS_FILE: &str = "role_labels.json";

const DEFAULT_THRESHOLD: f64 = 0.2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleModel {
    /// Term to column index over all training skill strings.
    vocabulary: BTreeMap<String, usize>,
    /// One row per label, term counts of the role's skill string.
    weights: Array2<f64>,
    /// Minimum confidence for a label to be predicted.
    threshold: f64,
    #[serde(skip)]
    labels: Vec<String>,
}

/// Label index persisted separately from the model weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LabelIndex {
    labels: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolePrediction {
    pub label: String,
    pub confidence: f64,
}

impl RoleModel {
    /// Train from the role catalog, one example per role.
    pub fn train(catalog: &RoleCatalog) -> Result<Self> {
        Self::train_with_threshold(catalog, DEFAULT_THRESHOLD)
    }

    pub fn train_with_threshold(catalog: &RoleCatalog, threshold: f64) -> Result<Self> {
        if catalog.is_empty() {
            return Err(SkillGapError::Classifier(
                "Cannot train on an empty role catalog".to_string(),
            ));
        }

        let documents: Vec<Vec<String>> = catalog
            .roles()
            .iter()
            .map(|role| {
                role.skills
                    .iter()
                    .flat_map(|s| s.split_whitespace())
                    .map(|t| t.to_string())
                    .collect()
            })
            .collect();

        let mut vocabulary: BTreeMap<String, usize> = BTreeMap::new();
        for doc in &documents {
            for term in doc {
                let next_id = vocabulary.len();
                vocabulary.entry(term.clone()).or_insert(next_id);
            }
        }

        let mut weights = Array2::zeros((documents.len(), vocabulary.len()));
        for (row, doc) in documents.iter().enumerate() {
            for term in doc {
                let col = vocabulary[term];
                weights[[row, col]] += 1.0;
            }
        }

        let labels: Vec<String> = catalog.roles().iter().map(|r| r.name.clone()).collect();
        info!(
            "Trained role model: {} labels, {} vocabulary terms",
            labels.len(),
            vocabulary.len()
        );

        Ok(Self {
            vocabulary,
            weights,
            threshold,
            labels,
        })
    }

    /// Predict role labels for a comma-separated skill string.
    ///
    /// Deterministic for a given model: same input, same predictions.
    /// Returns an empty vector when nothing clears the threshold.
    pub fn predict(&self, skill_text: &str) -> Vec<RolePrediction> {
        let input = self.vectorize(skill_text);
        if input.iter().all(|&v| v == 0.0) {
            return Vec::new();
        }

        let mut predictions: Vec<RolePrediction> = self
            .labels
            .iter()
            .enumerate()
            .map(|(row, label)| {
                let row_vec: Vec<f64> = self.weights.row(row).to_vec();
                RolePrediction {
                    label: label.clone(),
                    confidence: cosine_similarity(input.as_slice().unwrap_or(&[]), &row_vec),
                }
            })
            .filter(|p| p.confidence >= self.threshold)
            .collect();

        predictions.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        predictions
    }

    fn vectorize(&self, skill_text: &str) -> Array1<f64> {
        let mut vector = Array1::zeros(self.vocabulary.len());
        for skill in parse_skill_list(skill_text) {
            for term in skill.split_whitespace() {
                if let Some(&col) = self.vocabulary.get(term) {
                    vector[col] += 1.0;
                }
            }
        }
        vector
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Persist the model and the label index under `dir`.
    pub fn save(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)?;

        let model_json = serde_json::to_string_pretty(self)?;
        std::fs::write(dir.join(MODEL_FILE), model_json)?;

        let index = LabelIndex {
            labels: self.labels.clone(),
        };
        let labels_json = serde_json::to_string_pretty(&index)?;
        std::fs::write(dir.join(LABELS_FILE), labels_json)?;

        info!("Saved role model artifacts to {}", dir.display());
        Ok(())
    }

    /// Load a previously saved model and label index from `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let model_path = dir.join(MODEL_FILE);
        let labels_path = dir.join(LABELS_FILE);

        let model_json = std::fs::read_to_string(&model_path).map_err(|e| {
            SkillGapError::ModelArtifact(format!(
                "Failed to read '{}': {}. Run `train` first.",
                model_path.display(),
                e
            ))
        })?;
        let mut model: RoleModel = serde_json::from_str(&model_json)?;

        let labels_json = std::fs::read_to_string(&labels_path).map_err(|e| {
            SkillGapError::ModelArtifact(format!(
                "Failed to read '{}': {}. Run `train` first.",
                labels_path.display(),
                e
            ))
        })?;
        let index: LabelIndex = serde_json::from_str(&labels_json)?;

        if index.labels.len() != model.weights.nrows() {
            return Err(SkillGapError::ModelArtifact(format!(
                "Label index has {} labels but model has {} rows",
                index.labels.len(),
                model.weights.nrows()
            )));
        }

        model.labels = index.labels;
        Ok(model)
    }
}
