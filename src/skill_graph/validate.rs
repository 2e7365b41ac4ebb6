use std::collections::{HashMap, HashSet};

use crate::error::ValidationError;

use super::types::{SkillCatalog, SkillNode};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
	Visiting,
	Done,
}

/// Checks `catalog` for out-of-range levels, duplicate ids, dangling
/// prerequisites and prerequisite cycles. Returns every problem found.
///
/// Loading never calls this on its own; lookups tolerate all of these.
pub fn validate(catalog: &SkillCatalog) -> Result<(), Vec<ValidationError>> {
	let mut errors = Vec::new();
	let mut by_id: HashMap<&str, &SkillNode> = HashMap::new();

	for node in &catalog.skills {
		if node.level > 100 {
			errors.push(ValidationError::LevelOutOfRange {
				id: node.id.clone(),
				level: node.level,
			});
		}
		if by_id.insert(node.id.as_str(), node).is_some() {
			errors.push(ValidationError::DuplicateId { id: node.id.clone() });
		}
	}

	let mut reported = HashSet::new();
	for node in &catalog.skills {
		for prereq in &node.prerequisites {
			if !by_id.contains_key(prereq.as_str()) && reported.insert((&node.id, prereq)) {
				errors.push(ValidationError::DanglingPrerequisite {
					id: node.id.clone(),
					prerequisite: prereq.clone(),
				});
			}
		}
	}

	let mut marks = HashMap::new();
	for node in &catalog.skills {
		let mut stack = Vec::new();
		find_cycles(node.id.as_str(), &by_id, &mut marks, &mut stack, &mut errors);
	}

	if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn find_cycles<'a>(
	id: &'a str,
	by_id: &HashMap<&'a str, &'a SkillNode>,
	marks: &mut HashMap<&'a str, Mark>,
	stack: &mut Vec<&'a str>,
	errors: &mut Vec<ValidationError>,
) {
	match marks.get(id) {
		Some(Mark::Done) => return,
		Some(Mark::Visiting) => {
			let start = stack.iter().position(|s| *s == id).unwrap_or(0);
			let mut path: Vec<String> = stack[start..].iter().map(|s| s.to_string()).collect();
			path.push(id.to_owned());
			errors.push(ValidationError::Cycle { path });
			return;
		}
		None => {}
	}
	let Some(&node) = by_id.get(id) else {
		return;
	};

	marks.insert(id, Mark::Visiting);
	stack.push(id);
	for prereq in &node.prerequisites {
		find_cycles(prereq.as_str(), by_id, marks, stack, errors);
	}
	stack.pop();
	marks.insert(id, Mark::Done);
}
