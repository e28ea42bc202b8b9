//! Skill gap analyzer library

pub mod catalog;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod input;
pub mod matching;
pub mod output;

pub use config::Config;
pub use error::{Result, SkillGapError};
