use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of skill groupings. Unknown category strings fail to deserialize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	/// Browser-side technologies.
	Frontend,
	/// Servers, languages and databases.
	Backend,
	/// Build, deploy and infrastructure.
	Devops,
	/// Machine learning and related tooling.
	Ai,
	/// Visual and UX design.
	Design,
}

impl Category {
	/// All categories in display order.
	pub const ALL: [Category; 5] = [
		Category::Frontend,
		Category::Backend,
		Category::Devops,
		Category::Ai,
		Category::Design,
	];

	/// Stable lower-case key, identical to the serialized form.
	pub fn as_str(self) -> &'static str {
		match self {
			Category::Frontend => "frontend",
			Category::Backend => "backend",
			Category::Devops => "devops",
			Category::Ai => "ai",
			Category::Design => "design",
		}
	}

	/// Parses the lower-case key produced by [`Category::as_str`].
	pub fn parse(key: &str) -> Option<Category> {
		Category::ALL.into_iter().find(|c| c.as_str() == key)
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Presentation data for a [`Category`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
	/// Display name.
	pub name: String,
	/// Hex color, e.g. `#3b82f6`.
	pub color: String,
	/// Single glyph shown next to the name.
	pub icon: String,
}

/// One skill or technology in the dependency graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillNode {
	/// Unique, immutable identifier.
	pub id: String,
	/// Display label.
	pub name: String,
	/// Grouping.
	pub category: Category,
	/// Proficiency in `0..=100`. Not clamped on write.
	pub level: u8,
	/// Free text, searched by the filter.
	pub description: String,
	/// Ids of the nodes this one depends on, in declaration order.
	#[serde(default)]
	pub prerequisites: Vec<String>,
}

impl SkillNode {
	/// Builds a node with no prerequisites.
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
		}
	}

	/// Replaces the prerequisite list.
	pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
		self
	}

	/// Whether `id` is one of this node's direct prerequisites.
	pub fn requires(&self, id: &str) -> bool {
		self.prerequisites.iter().any(|p| p == id)
	}
}

/// Everything a skill source delivers: the node list plus category metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCatalog {
	/// Nodes in display order.
	pub skills: Vec<SkillNode>,
	/// Presentation data per category.
	#[serde(default)]
	pub categories: BTreeMap<Category, CategoryInfo>,
}

impl SkillCatalog {
	/// Looks up the presentation data for `category`.
	pub fn category_info(&self, category: Category) -> Option<&CategoryInfo> {
		self.categories.get(&category)
	}

	/// Color for `category`, falling back to neutral gray.
	pub fn color_of(&self, category: Category) -> &str {
		self.category_info(category)
			.map(|info| info.color.as_str())
			.unwrap_or("#6b7280")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn category_serializes_lowercase() {
		let json = serde_json::to_string(&Category::Devops).unwrap();
		assert_eq!(json, r#""devops""#);
		assert_eq!(Category::parse("ai"), Some(Category::Ai));
		assert_eq!(Category::parse("mobile"), None);
	}

	#[test]
	fn unknown_category_is_rejected() {
		let json = r#"{"id":"x","name":"X","category":"web3","level":1,"description":""}"#;
		assert!(serde_json::from_str::<SkillNode>(json).is_err());
	}

	#[test]
	fn catalog_parses_api_shape() {
		let json = r##"{
			"skills": [
				{"id": "html", "name": "HTML5", "level": 95, "category": "frontend",
				 "description": "Markup", "prerequisites": []},
				{"id": "css", "name": "CSS3", "level": 90, "category": "frontend",
				 "description": "Styling", "prerequisites": ["html"]}
			],
			"categories": {
				"frontend": {"name": "Frontend", "color": "#3b82f6", "icon": "🎨"}
			}
		}"##;
		let catalog: SkillCatalog = serde_json::from_str(json).unwrap();
		assert_eq!(catalog.skills.len(), 2);
		assert!(catalog.skills[1].requires("html"));
		assert_eq!(catalog.color_of(Category::Frontend), "#3b82f6");
		assert_eq!(catalog.color_of(Category::Design), "#6b7280");
	}

	#[test]
	fn missing_prerequisites_default_to_empty() {
		let json = r#"{"id":"py","name":"Python","category":"backend","level":88,"description":""}"#;
		let node: SkillNode = serde_json::from_str(json).unwrap();
		assert!(node.prerequisites.is_empty());
	}
}
