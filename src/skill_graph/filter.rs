use super::types::{Category, SkillNode};

/// Category dimension of a [`SkillFilter`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
	/// No restriction.
	#[default]
	All,
	/// Only nodes of this category.
	Only(Category),
}

impl CategoryFilter {
	/// Parses the value of a category `<select>`: `"all"` or a category key.
	/// Anything unrecognised falls back to `All`.
	pub fn from_key(key: &str) -> Self {
		Category::parse(key).map_or(CategoryFilter::All, CategoryFilter::Only)
	}

	/// Inverse of [`CategoryFilter::from_key`].
	pub fn key(self) -> &'static str {
		match self {
			CategoryFilter::All => "all",
			CategoryFilter::Only(c) => c.as_str(),
		}
	}

	fn matches(self, category: Category) -> bool {
		match self {
			CategoryFilter::All => true,
			CategoryFilter::Only(c) => c == category,
		}
	}
}

/// Criteria combined with logical AND.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillFilter {
	/// Category restriction.
	pub category: CategoryFilter,
	/// Inclusive lower bound on `level`.
	pub min_level: u8,
	/// Case-insensitive substring of name or description, matched as typed.
	/// Only the empty string means no restriction.
	pub search: Option<String>,
}

impl SkillFilter {
	/// Whether `node` satisfies every criterion.
	pub fn matches(&self, node: &SkillNode) -> bool {
		if !self.category.matches(node.category) || node.level < self.min_level {
			return false;
		}
		match self.search.as_deref() {
			None | Some("") => true,
			Some(needle) => {
				let needle = needle.to_lowercase();
				node.name.to_lowercase().contains(&needle)
					|| node.description.to_lowercase().contains(&needle)
			}
		}
	}

	/// True when the filter lets every node through.
	pub fn is_empty(&self) -> bool {
		self.category == CategoryFilter::All
			&& self.min_level == 0
			&& self.search.as_deref().is_none_or(str::is_empty)
	}
}

/// Returns the nodes matching `filter`, preserving input order.
pub fn filter_skills(nodes: &[SkillNode], filter: &SkillFilter) -> Vec<SkillNode> {
	nodes.iter().filter(|n| filter.matches(n)).cloned().collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Vec<SkillNode> {
		vec![
			SkillNode::new("html", "HTML5", Category::Frontend, 95, "Semantic markup"),
			SkillNode::new("django", "Django", Category::Backend, 60, "MVC, ORM, admin"),
			SkillNode::new("react", "React", Category::Frontend, 88, "Hooks and context")
				.with_prerequisites(["html"]),
		]
	}

	#[test]
	fn all_category_is_a_no_op() {
		let nodes = sample();
		let out = filter_skills(&nodes, &SkillFilter::default());
		assert_eq!(out.len(), nodes.len());
		assert_eq!(out, nodes);
	}

	#[test]
	fn min_level_keeps_order() {
		let filter = SkillFilter {
			min_level: 80,
			..Default::default()
		};
		let ids: Vec<_> = filter_skills(&sample(), &filter)
			.into_iter()
			.map(|n| n.id)
			.collect();
		assert_eq!(ids, ["html", "react"]);
	}

	#[test]
	fn search_matches_name_or_description_case_insensitively() {
		let by_name = SkillFilter {
			search: Some("REACT".into()),
			..Default::default()
		};
		assert_eq!(filter_skills(&sample(), &by_name)[0].id, "react");

		let by_description = SkillFilter {
			search: Some("orm".into()),
			..Default::default()
		};
		assert_eq!(filter_skills(&sample(), &by_description)[0].id, "django");
	}

	#[test]
	fn criteria_are_combined_with_and() {
		let filter = SkillFilter {
			category: CategoryFilter::Only(Category::Frontend),
			min_level: 90,
			search: Some("markup".into()),
		};
		let out = filter_skills(&sample(), &filter);
		assert_eq!(out.len(), 1);
		assert_eq!(out[0].id, "html");
	}

	#[test]
	fn empty_result_is_valid() {
		let filter = SkillFilter {
			search: Some("cobol".into()),
			..Default::default()
		};
		assert!(filter_skills(&sample(), &filter).is_empty());
	}

	#[test]
	fn empty_search_is_ignored() {
		let filter = SkillFilter {
			search: Some(String::new()),
			..Default::default()
		};
		assert!(filter.is_empty());
		assert_eq!(filter_skills(&sample(), &filter).len(), 3);
	}

	#[test]
	fn whitespace_in_search_is_matched_verbatim() {
		let nodes = vec![SkillNode::new("html", "HTML5", Category::Frontend, 95, "Markup")];
		let trailing = SkillFilter {
			search: Some("html ".into()),
			..Default::default()
		};
		assert!(filter_skills(&nodes, &trailing).is_empty());

		let blank = SkillFilter {
			search: Some("  ".into()),
			..Default::default()
		};
		assert!(!blank.is_empty());
		assert!(filter_skills(&nodes, &blank).is_empty());
		// every sample description contains a space
		let single = SkillFilter {
			search: Some(" ".into()),
			..Default::default()
		};
		assert_eq!(filter_skills(&sample(), &single).len(), 3);
	}

	#[test]
	fn category_keys_round_trip_through_select_values() {
		assert_eq!(CategoryFilter::from_key("all"), CategoryFilter::All);
		assert_eq!(
			CategoryFilter::from_key("devops"),
			CategoryFilter::Only(Category::Devops)
		);
		assert_eq!(CategoryFilter::Only(Category::Ai).key(), "ai");
	}
}
