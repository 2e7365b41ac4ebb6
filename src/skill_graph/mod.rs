//! Skill dependency graph: nodes, filtering, relationships, stats, selection,
//! and the completable learning-path variant.

pub mod data;
mod filter;
mod graph;
mod progress;
mod selection;
mod source;
mod stats;
mod types;
mod validate;

pub use filter::{CategoryFilter, SkillFilter, filter_skills};
pub use graph::{Connections, SkillGraph};
pub use progress::{
	ACHIEVER_THRESHOLD, NodeStatus, ProgressSummary, ProgressTree, TrackedSkill, is_unlocked,
};
pub use selection::SelectionSet;
pub use source::{
	ConfiguredSource, HttpSkillSource, LoadState, SkillSource, StaticSkillSource, parse_catalog,
	with_retries,
};
pub use stats::{SkillStats, compute_stats};
pub use types::{Category, CategoryInfo, SkillCatalog, SkillNode};
pub use validate::validate;
