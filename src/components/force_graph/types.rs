use crate::skill_graph::{SelectionSet, SkillCatalog, SkillNode};

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub label: String,
	/// CSS color of the node fill.
	pub color: String,
	/// Radius multiplier, 1.0 is the default node size.
	pub weight: f64,
	pub selected: bool,
}

/// Directed edge, drawn with an arrow at `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

impl GraphData {
	/// One node per skill, colored by category and sized by level, with an edge
	/// from each prerequisite to its dependent. Edges to skills outside `skills`
	/// are dropped when the layout is built.
	pub fn from_skills(skills: &[SkillNode], catalog: &SkillCatalog, selection: &SelectionSet) -> Self {
		let nodes = skills
			.iter()
			.map(|skill| GraphNode {
				id: skill.id.clone(),
				label: skill.name.clone(),
				color: catalog.color_of(skill.category).to_owned(),
				weight: 0.6 + f64::from(skill.level.min(100)) / 100.0 * 0.8,
				selected: selection.contains(&skill.id),
			})
			.collect();

		let links = skills
			.iter()
			.flat_map(|skill| {
				skill.prerequisites.iter().map(|prereq| GraphLink {
					source: prereq.clone(),
					target: skill.id.clone(),
				})
			})
			.collect();

		GraphData { nodes, links }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::skill_graph::data::static_catalog;

	#[test]
	fn edges_point_from_prerequisite_to_dependent() {
		let catalog = static_catalog();
		let data = GraphData::from_skills(&catalog.skills, &catalog, &SelectionSet::new());
		assert_eq!(data.nodes.len(), catalog.skills.len());
		assert!(data.links.contains(&GraphLink {
			source: "html".into(),
			target: "css".into(),
		}));
		let prereq_count: usize = catalog.skills.iter().map(|s| s.prerequisites.len()).sum();
		assert_eq!(data.links.len(), prereq_count);
	}

	#[test]
	fn selection_and_category_color_are_carried() {
		let catalog = static_catalog();
		let mut selection = SelectionSet::new();
		selection.toggle("docker");
		let data = GraphData::from_skills(&catalog.skills, &catalog, &selection);
		let docker = data.nodes.iter().find(|n| n.id == "docker").unwrap();
		assert!(docker.selected);
		assert_eq!(docker.color, "#f59e0b");
		assert_eq!(docker.label, "Docker");
		assert!(data.nodes.iter().filter(|n| n.selected).count() == 1);
	}
}
