use crate::error::{Result, SkillGraphError};

use super::filter::{SkillFilter, filter_skills};
use super::stats::{SkillStats, compute_stats};
use super::types::{SkillCatalog, SkillNode};

/// Direct relationships of one node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Connections {
	/// The node's own prerequisite list, verbatim.
	pub prerequisites: Vec<String>,
	/// Ids of nodes listing this one as a prerequisite, in catalog order.
	pub dependents: Vec<String>,
}

/// Read-only view over a loaded catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillGraph {
	catalog: SkillCatalog,
}

impl SkillGraph {
	/// Wraps a loaded catalog.
	pub fn new(catalog: SkillCatalog) -> Self {
		Self { catalog }
	}

	/// The underlying catalog, including category metadata.
	pub fn catalog(&self) -> &SkillCatalog {
		&self.catalog
	}

	/// Every node, in catalog order.
	pub fn nodes(&self) -> &[SkillNode] {
		&self.catalog.skills
	}

	/// Lenient lookup.
	pub fn get(&self, id: &str) -> Option<&SkillNode> {
		self.catalog.skills.iter().find(|n| n.id == id)
	}

	/// Strict lookup for callers that treat a missing id as an error.
	pub fn node(&self, id: &str) -> Result<&SkillNode> {
		self.get(id)
			.ok_or_else(|| SkillGraphError::NotFound { id: id.to_owned() })
	}

	/// Prerequisites and dependents of `id`. Unknown ids yield empty lists.
	pub fn connections(&self, id: &str) -> Connections {
		let Some(node) = self.get(id) else {
			return Connections::default();
		};
		Connections {
			prerequisites: node.prerequisites.clone(),
			dependents: self
				.catalog
				.skills
				.iter()
				.filter(|n| n.requires(id))
				.map(|n| n.id.clone())
				.collect(),
		}
	}

	/// See [`filter_skills`].
	pub fn filter(&self, filter: &SkillFilter) -> Vec<SkillNode> {
		filter_skills(&self.catalog.skills, filter)
	}

	/// Stats over the full, unfiltered collection.
	pub fn stats(&self) -> SkillStats {
		compute_stats(&self.catalog.skills)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::skill_graph::data::static_catalog;
	use crate::skill_graph::types::Category;

	fn web_graph() -> SkillGraph {
		SkillGraph::new(SkillCatalog {
			skills: vec![
				SkillNode::new("html", "HTML", Category::Frontend, 95, ""),
				SkillNode::new("css", "CSS", Category::Frontend, 90, "")
					.with_prerequisites(["html"]),
				SkillNode::new("js", "JS", Category::Frontend, 92, "")
					.with_prerequisites(["html"]),
			],
			categories: Default::default(),
		})
	}

	#[test]
	fn dependents_are_found_by_reverse_scan() {
		let c = web_graph().connections("html");
		assert!(c.prerequisites.is_empty());
		assert_eq!(c.dependents, ["css", "js"]);
	}

	#[test]
	fn unknown_id_has_no_connections() {
		assert_eq!(web_graph().connections("cobol"), Connections::default());
	}

	#[test]
	fn prerequisites_are_returned_verbatim() {
		let graph = SkillGraph::new(static_catalog());
		for node in graph.nodes() {
			assert_eq!(graph.connections(&node.id).prerequisites, node.prerequisites);
		}
	}

	#[test]
	fn dependents_mirror_prerequisites() {
		let graph = SkillGraph::new(static_catalog());
		for b in graph.nodes() {
			for a in &b.prerequisites {
				assert!(
					graph.connections(a).dependents.contains(&b.id),
					"{} should list {} as a dependent",
					a,
					b.id
				);
			}
		}
	}

	#[test]
	fn dangling_prerequisite_is_ignored_by_lookup() {
		let graph = SkillGraph::new(SkillCatalog {
			skills: vec![
				SkillNode::new("vue", "Vue", Category::Frontend, 50, "")
					.with_prerequisites(["javascript"]),
			],
			categories: Default::default(),
		});
		let c = graph.connections("vue");
		assert_eq!(c.prerequisites, ["javascript"]);
		assert!(graph.connections("javascript").dependents.is_empty());
	}

	#[test]
	fn strict_lookup_reports_not_found() {
		let graph = web_graph();
		assert_eq!(graph.node("css").map(|n| n.level), Ok(90));
		assert_eq!(
			graph.node("sass"),
			Err(SkillGraphError::NotFound { id: "sass".into() })
		);
	}

	#[test]
	fn stats_cover_the_unfiltered_catalog() {
		let graph = SkillGraph::new(static_catalog());
		let stats = graph.stats();
		assert_eq!(stats.total, 22);
		assert_eq!(stats.by_category[&Category::Frontend], 6);
		assert_eq!(stats.by_category[&Category::Ai], 4);
	}
}
