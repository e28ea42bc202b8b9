//! Skill matching and scoring module

pub mod ranker;
pub mod scorer;
pub mod set_matcher;
pub mod similarity;
pub mod skills;
pub mod tfidf;

pub use ranker::{rank_roles, RankedMatch};
pub use scorer::{Scorer, ScorerKind, SetScorer, TfidfScorer};
pub use set_matcher::{set_match, MatchResult};
pub use skills::{normalize_skill, parse_skill_list, SkillSet};
