//! Learning resource catalog and recommender

use crate::error::{Result, SkillGapError};
use crate::matching::skills::normalize_skill;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A recommended learning resource for one skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub skill: String,
    pub course: String,
    pub url: String,
}

/// Resource catalog indexed by normalized skill for O(1) lookups.
#[derive(Debug, Clone)]
pub struct ResourceCatalog {
    by_skill: HashMap<String, Resource>,
}

impl ResourceCatalog {
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            SkillGapError::Catalog(format!(
                "Failed to open resource catalog '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut by_skill = HashMap::new();
        for (line, row) in reader.deserialize::<Resource>().enumerate() {
            let row = row.map_err(|e| {
                SkillGapError::Catalog(format!(
                    "Malformed resource catalog row {} in '{}': {}",
                    line + 2,
                    path.display(),
                    e
                ))
            })?;
            by_skill.insert(normalize_skill(&row.skill), row);
        }

        info!(
            "Loaded {} resources from {}",
            by_skill.len(),
            path.display()
        );
        Ok(Self { by_skill })
    }

    pub fn from_resources(resources: Vec<Resource>) -> Self {
        let by_skill = resources
            .into_iter()
            .map(|r| (normalize_skill(&r.skill), r))
            .collect();
        Self { by_skill }
    }

    /// Look up the catalogued resource for a skill, case-insensitive.
    ///
    /// `None` is the "no course found" state; callers render a placeholder
    /// instead of failing the analysis.
    pub fn recommend(&self, skill: &str) -> Option<&Resource> {
        self.by_skill.get(&normalize_skill(skill))
    }

    pub fn len(&self) -> usize {
        self.by_skill.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_skill.is_empty()
    }

    /// Resources in deterministic (skill-sorted) order for listings.
    pub fn iter_sorted(&self) -> Vec<&Resource> {
        let mut resources: Vec<&Resource> = self.by_skill.values().collect();
        resources.sort_by(|a, b| a.skill.cmp(&b.skill));
        resources
    }
}
