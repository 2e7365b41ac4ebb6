use std::collections::BTreeMap;

use super::types::{Category, SkillNode};

/// Aggregate over a node collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillStats {
	/// Number of nodes.
	pub total: usize,
	/// Node count per category. Categories with no nodes are absent.
	pub by_category: BTreeMap<Category, usize>,
	/// Mean level rounded half up; 0 for an empty collection.
	pub average_level: u32,
}

/// Computes [`SkillStats`] for `nodes`.
pub fn compute_stats(nodes: &[SkillNode]) -> SkillStats {
	let mut by_category = BTreeMap::new();
	let mut level_sum: u64 = 0;
	for node in nodes {
		*by_category.entry(node.category).or_insert(0) += 1;
		level_sum += u64::from(node.level);
	}

	let total = nodes.len();
	let average_level = match total as u64 {
		0 => 0,
		// integer round-half-up: (2s + n) / 2n
		n => ((2 * level_sum + n) / (2 * n)) as u32,
	};

	SkillStats {
		total,
		by_category,
		average_level,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str, category: Category, level: u8) -> SkillNode {
		SkillNode::new(id, id, category, level, "")
	}

	#[test]
	fn empty_collection_has_zero_average() {
		let stats = compute_stats(&[]);
		assert_eq!(stats.total, 0);
		assert_eq!(stats.average_level, 0);
		assert!(stats.by_category.is_empty());
	}

	#[test]
	fn counts_per_category() {
		let nodes = [
			node("a", Category::Frontend, 90),
			node("b", Category::Frontend, 80),
			node("c", Category::Ai, 70),
		];
		let stats = compute_stats(&nodes);
		assert_eq!(stats.total, 3);
		assert_eq!(stats.by_category[&Category::Frontend], 2);
		assert_eq!(stats.by_category[&Category::Ai], 1);
		assert!(!stats.by_category.contains_key(&Category::Design));
		assert_eq!(stats.average_level, 80);
	}

	#[test]
	fn average_rounds_half_up() {
		let nodes = [node("a", Category::Backend, 80), node("b", Category::Backend, 81)];
		assert_eq!(compute_stats(&nodes).average_level, 81);

		let nodes = [
			node("a", Category::Backend, 80),
			node("b", Category::Backend, 80),
			node("c", Category::Backend, 81),
		];
		assert_eq!(compute_stats(&nodes).average_level, 80);
	}
}
