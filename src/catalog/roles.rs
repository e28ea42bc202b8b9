//! Job role catalog loaded from CSV

use crate::error::{Result, SkillGapError};
use crate::matching::skills::{normalize_skill, parse_skill_list, SkillSet};
use log::info;
use serde::Deserialize;
use std::path::Path;

/// A job role with its required skills.
#[derive(Debug, Clone)]
pub struct Role {
    /// Display form as it appears in the catalog.
    pub name: String,
    /// Normalized form used for lookups.
    pub key: String,
    pub skills: SkillSet,
}

impl Role {
    pub fn new(name: &str, skills_raw: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            key: normalize_skill(name),
            skills: parse_skill_list(skills_raw),
        }
    }
}

/// CSV row shape: `role,skills` with a comma-separated skills field.
#[derive(Debug, Deserialize)]
struct RoleRow {
    role: String,
    skills: String,
}

/// Ordered, immutable collection of catalogued roles.
///
/// Catalog order is preserved because the ranker uses it to break score
/// ties.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    roles: Vec<Role>,
}

impl RoleCatalog {
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            SkillGapError::Catalog(format!(
                "Failed to open role catalog '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut roles = Vec::new();
        for (line, row) in reader.deserialize::<RoleRow>().enumerate() {
            let row = row.map_err(|e| {
                SkillGapError::Catalog(format!(
                    "Malformed role catalog row {} in '{}': {}",
                    line + 2,
                    path.display(),
                    e
                ))
            })?;
            if row.role.trim().is_empty() {
                return Err(SkillGapError::Catalog(format!(
                    "Role catalog row {} in '{}' has an empty role name",
                    line + 2,
                    path.display()
                )));
            }
            roles.push(Role::new(&row.role, &row.skills));
        }

        info!("Loaded {} roles from {}", roles.len(), path.display());
        Ok(Self { roles })
    }

    pub fn from_roles(roles: Vec<Role>) -> Self {
        Self { roles }
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Case-insensitive lookup by role name.
    pub fn get(&self, name: &str) -> Option<&Role> {
        let key = normalize_skill(name);
        self.roles.iter().find(|r| r.key == key)
    }

    /// Union of every role's required skills; the extractor's vocabulary.
    pub fn vocabulary(&self) -> SkillSet {
        let mut all = SkillSet::new();
        for role in &self.roles {
            all.extend(role.skills.iter().cloned());
        }
        all
    }
}
