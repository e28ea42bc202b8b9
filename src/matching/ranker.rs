//! Ranking catalogued roles against a candidate skill set

use crate::catalog::roles::Role;
use crate::matching::scorer::Scorer;
use crate::matching::set_matcher::MatchResult;
use crate::matching::skills::SkillSet;
use serde::{Deserialize, Serialize};

/// A role paired with its match result, as produced by [`rank_roles`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    pub role: String,
    #[serde(flatten)]
    pub result: MatchResult,
}

/// Score every role, drop zero-overlap roles and sort descending by score.
///
/// The sort is stable, so roles with equal scores keep their catalog order
/// and repeated runs over the same input produce the same ranking. An empty
/// result means no role had any overlap; callers render that as a "no roles
/// found" state rather than an error.
pub fn rank_roles(candidate: &SkillSet, roles: &[Role], scorer: &dyn Scorer) -> Vec<RankedMatch> {
    let mut ranked: Vec<RankedMatch> = roles
        .iter()
        .map(|role| RankedMatch {
            role: role.name.clone(),
            result: scorer.score(candidate, &role.skills),
        })
        .filter(|m| m.result.score > 0.0)
        .collect();

    // Vec::sort_by is stable; ties keep catalog order.
    ranked.sort_by(|a, b| b.result.score.total_cmp(&a.result.score));
    ranked
}
