//! Analysis report structures

use crate::catalog::resources::{Resource, ResourceCatalog};
use crate::extract::FuzzySuggestion;
use crate::matching::ranker::RankedMatch;
use crate::matching::skills::SkillSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete result of one analysis request, ready for formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    /// Scoring strategy that produced the scores.
    pub scorer: String,
    pub candidate_skills: SkillSet,
    /// Ranked role entries, best match first. Empty means no role had any
    /// overlap with the candidate skills.
    pub entries: Vec<RoleEntry>,
    /// Near-miss skill suggestions from resume extraction, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fuzzy_suggestions: Vec<FuzzySuggestion>,
}

/// One role's match result with per-missing-skill recommendations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleEntry {
    pub role: String,
    pub score: f64,
    pub matched: SkillSet,
    pub missing: SkillSet,
    pub recommendations: Vec<SkillRecommendation>,
}

/// Learning resource lookup for one missing skill. A `None` resource is
/// the "no course found" state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRecommendation {
    pub skill: String,
    pub resource: Option<Resource>,
}

impl AnalysisReport {
    /// Assemble a report from ranked matches, resolving a resource
    /// recommendation for every missing skill.
    pub fn build(
        candidate_skills: SkillSet,
        ranked: Vec<RankedMatch>,
        resources: &ResourceCatalog,
        scorer: &str,
    ) -> Self {
        let entries = ranked
            .into_iter()
            .map(|m| {
                let recommendations = m
                    .result
                    .missing
                    .iter()
                    .map(|skill| SkillRecommendation {
                        skill: skill.clone(),
                        resource: resources.recommend(skill).cloned(),
                    })
                    .collect();

                RoleEntry {
                    role: m.role,
                    score: m.result.score,
                    matched: m.result.matched,
                    missing: m.result.missing,
                    recommendations,
                }
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            scorer: scorer.to_string(),
            candidate_skills,
            entries,
            fuzzy_suggestions: Vec::new(),
        }
    }

    pub fn with_fuzzy_suggestions(mut self, suggestions: Vec<FuzzySuggestion>) -> Self {
        self.fuzzy_suggestions = suggestions;
        self
    }

    /// Best score across all entries, the "job readiness" headline number.
    pub fn top_score(&self) -> Option<f64> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::resources::Resource;
    use crate::catalog::roles::Role;
    use crate::matching::ranker::rank_roles;
    use crate::matching::scorer::SetScorer;
    use crate::matching::skills::parse_skill_list;

    fn build_report() -> AnalysisReport {
        let roles = vec![Role::new("Data Analyst", "python, sql, excel")];
        let resources = ResourceCatalog::from_resources(vec![Resource {
            skill: "excel".to_string(),
            course: "Excel Basics".to_string(),
            url: "https://example.com/excel".to_string(),
        }]);
        let candidate = parse_skill_list("python, sql");
        let ranked = rank_roles(&candidate, &roles, &SetScorer);
        AnalysisReport::build(candidate, ranked, &resources, "set-overlap")
    }

    #[test]
    fn test_report_resolves_recommendations() {
        let report = build_report();

        assert_eq!(report.entries.len(), 1);
        let entry = &report.entries[0];
        assert_eq!(entry.recommendations.len(), 1);
        assert_eq!(entry.recommendations[0].skill, "excel");
        assert!(entry.recommendations[0].resource.is_some());
    }

    #[test]
    fn test_missing_resource_is_none() {
        let roles = vec![Role::new("Data Analyst", "python, excel")];
        let resources = ResourceCatalog::from_resources(Vec::new());
        let candidate = parse_skill_list("python");
        let ranked = rank_roles(&candidate, &roles, &SetScorer);

        let report = AnalysisReport::build(candidate, ranked, &resources, "set-overlap");

        assert!(report.entries[0].recommendations[0].resource.is_none());
    }

    #[test]
    fn test_top_score() {
        let report = build_report();
        assert_eq!(
            format!("{:.2}", report.top_score().unwrap()),
            "66.67"
        );
    }
}
