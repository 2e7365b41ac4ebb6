//! Learning-path variant of the graph where nodes can be completed.
//!
//! Unlock status is derived on every read from the current completion flags,
//! so completing a node needs no invalidation of its dependents.

use super::types::Category;

/// Completed-node count at which the achiever badge is shown.
pub const ACHIEVER_THRESHOLD: usize = 5;

/// A node of the progress tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackedSkill {
	/// Unique identifier, referenced by other nodes' prerequisites.
	pub id: String,
	/// Display label.
	pub name: String,
	/// Grouping, used for the node icon.
	pub category: Category,
	/// Star rating, `1..=5`.
	pub level: u8,
	/// Free text shown in the detail panel.
	pub description: String,
	/// Ids that must all be completed before this node unlocks.
	pub prerequisites: Vec<String>,
	/// Learning resources shown in the detail panel.
	pub resources: Vec<String>,
	/// Set by the user.
	pub completed: bool,
	/// Percentage in `0..=100`.
	pub progress: u8,
}

impl TrackedSkill {
	/// An incomplete node with zero progress.
	pub fn new(
		id: impl Into<String>,
		name: impl Into<String>,
		category: Category,
		level: u8,
		description: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			category,
			level,
			description: description.into(),
			prerequisites: Vec::new(),
			resources: Vec::new(),
			completed: false,
			progress: 0,
		}
	}

	/// Marks the node completed at full progress.
	pub fn completed(mut self) -> Self {
		self.completed = true;
		self.progress = 100;
		self
	}

	/// Sets partial progress without completing the node.
	pub fn with_progress(mut self, progress: u8) -> Self {
		self.progress = progress;
		self
	}

	/// Replaces the prerequisite ids.
	pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
		self
	}

	/// Replaces the learning resources.
	pub fn with_resources<I, S>(mut self, resources: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.resources = resources.into_iter().map(Into::into).collect();
		self
	}
}

/// How a node is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeStatus {
	/// Marked done by the user.
	Completed,
	/// Not done, every prerequisite is completed.
	Available,
	/// At least one prerequisite is incomplete or missing.
	Locked,
}

/// A node is unlocked when every prerequisite resolves to a completed node.
/// A prerequisite id with no matching node keeps it locked.
pub fn is_unlocked(node: &TrackedSkill, all: &[TrackedSkill]) -> bool {
	node.prerequisites.iter().all(|prereq| {
		all.iter()
			.find(|s| &s.id == prereq)
			.is_some_and(|s| s.completed)
	})
}

/// Aggregate shown in the progress header.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgressSummary {
	/// Completed nodes.
	pub completed: usize,
	/// All nodes.
	pub total: usize,
	/// `completed / total * 100`, or 0 for an empty tree.
	pub percent: f64,
	/// Sum of star levels.
	pub total_xp: u32,
	/// At least [`ACHIEVER_THRESHOLD`] nodes completed.
	pub is_achiever: bool,
}

/// Owns the tracked nodes for one session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressTree {
	skills: Vec<TrackedSkill>,
}

impl ProgressTree {
	/// Tree over `skills`, kept in the given order.
	pub fn new(skills: Vec<TrackedSkill>) -> Self {
		Self { skills }
	}

	/// Nodes in display order.
	pub fn skills(&self) -> &[TrackedSkill] {
		&self.skills
	}

	/// Node with `id`, if any.
	pub fn get(&self, id: &str) -> Option<&TrackedSkill> {
		self.skills.iter().find(|s| s.id == id)
	}

	/// [`is_unlocked`] for the node with `id`; unknown ids are locked.
	pub fn is_unlocked(&self, id: &str) -> bool {
		self.get(id).is_some_and(|s| is_unlocked(s, &self.skills))
	}

	/// Display status of `skill`, computed from current completion flags.
	pub fn status(&self, skill: &TrackedSkill) -> NodeStatus {
		if skill.completed {
			NodeStatus::Completed
		} else if is_unlocked(skill, &self.skills) {
			NodeStatus::Available
		} else {
			NodeStatus::Locked
		}
	}

	/// Flips `completed` on `id`. Completing pins progress to 100; un-completing
	/// leaves progress untouched. Returns the new flag, or `None` for an unknown id.
	pub fn toggle_completion(&mut self, id: &str) -> Option<bool> {
		let skill = self.skills.iter_mut().find(|s| s.id == id)?;
		skill.completed = !skill.completed;
		if skill.completed {
			skill.progress = 100;
		}
		Some(skill.completed)
	}

	/// Header aggregate over every node.
	pub fn summary(&self) -> ProgressSummary {
		let total = self.skills.len();
		let completed = self.skills.iter().filter(|s| s.completed).count();
		let percent = if total == 0 {
			0.0
		} else {
			completed as f64 / total as f64 * 100.0
		};
		ProgressSummary {
			completed,
			total,
			percent,
			total_xp: self.skills.iter().map(|s| u32::from(s.level)).sum(),
			is_achiever: completed >= ACHIEVER_THRESHOLD,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::skill_graph::data::learning_path;

	fn html(completed: bool) -> TrackedSkill {
		let s = TrackedSkill::new("html", "HTML", Category::Frontend, 5, "");
		if completed { s.completed() } else { s }
	}

	fn css() -> TrackedSkill {
		TrackedSkill::new("css", "CSS", Category::Frontend, 4, "").with_prerequisites(["html"])
	}

	#[test]
	fn no_prerequisites_is_unlocked() {
		assert!(is_unlocked(&html(false), &[]));
	}

	#[test]
	fn unlocked_only_when_prerequisite_completed() {
		assert!(is_unlocked(&css(), &[html(true), css()]));
		assert!(!is_unlocked(&css(), &[html(false), css()]));
	}

	#[test]
	fn dangling_prerequisite_stays_locked() {
		assert!(!is_unlocked(&css(), &[css()]));
	}

	#[test]
	fn toggle_completion_keeps_progress_when_undone() {
		let mut tree = ProgressTree::new(vec![
			TrackedSkill::new("react", "React", Category::Frontend, 4, "").with_progress(85),
		]);

		assert_eq!(tree.toggle_completion("react"), Some(true));
		let react = tree.get("react").unwrap();
		assert!(react.completed);
		assert_eq!(react.progress, 100);

		assert_eq!(tree.toggle_completion("react"), Some(false));
		let react = tree.get("react").unwrap();
		assert!(!react.completed);
		assert_eq!(react.progress, 100);
	}

	#[test]
	fn toggle_unknown_id_is_a_no_op() {
		let mut tree = ProgressTree::new(vec![html(false)]);
		let before = tree.clone();
		assert_eq!(tree.toggle_completion("vue"), None);
		assert_eq!(tree, before);
	}

	#[test]
	fn completing_a_prerequisite_unlocks_dependents_on_read() {
		let mut tree = ProgressTree::new(vec![html(false), css()]);
		assert_eq!(tree.status(&tree.skills()[1]), NodeStatus::Locked);

		tree.toggle_completion("html");
		assert!(tree.is_unlocked("css"));
		assert_eq!(tree.status(&tree.skills()[1]), NodeStatus::Available);
	}

	#[test]
	fn seed_path_statuses() {
		let tree = ProgressTree::new(learning_path());
		assert!(tree.is_unlocked("database-design"));
		assert!(!tree.is_unlocked("devops"));
		assert!(!tree.is_unlocked("ai-ml"));
		assert!(!tree.is_unlocked("missing"));
	}

	#[test]
	fn summary_of_seed_path() {
		let summary = ProgressTree::new(learning_path()).summary();
		assert_eq!(summary.completed, 5);
		assert_eq!(summary.total, 9);
		assert_eq!(summary.total_xp, 32);
		assert!(summary.is_achiever);
		assert!((summary.percent - 500.0 / 9.0).abs() < 1e-9);
	}

	#[test]
	fn empty_summary() {
		let summary = ProgressTree::default().summary();
		assert_eq!(summary.percent, 0.0);
		assert!(!summary.is_achiever);
	}
}
