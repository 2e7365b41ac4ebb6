//! Error types for loading and validating skill data.
//!
//! Read operations on a loaded graph never fail; they degrade to empty results.
//! These errors exist at the load boundary and for callers that opt into
//! strict lookups or validation.

use thiserror::Error;

/// Failure to obtain a catalog from a [`SkillSource`](crate::skill_graph::SkillSource).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
	/// The request never produced a response.
	#[error("network error: {0}")]
	Network(String),
	/// No response within the configured timeout.
	#[error("request timed out after {ms} ms")]
	Timeout {
		/// Configured timeout.
		ms: u32,
	},
	/// The server answered with a non-success status.
	#[error("server responded with status {0}")]
	Status(u16),
	/// The body was not a valid catalog.
	#[error("failed to decode skill catalog: {0}")]
	Decode(String),
}

impl LoadError {
	/// Whether retrying the same request can reasonably succeed.
	pub fn is_retryable(&self) -> bool {
		match self {
			LoadError::Network(_) | LoadError::Timeout { .. } => true,
			LoadError::Status(code) => *code >= 500,
			LoadError::Decode(_) => false,
		}
	}
}

/// A problem found in a catalog by [`validate`](crate::skill_graph::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
	/// Level above 100.
	#[error("skill '{id}' has level {level}, expected 0..=100")]
	LevelOutOfRange {
		/// Offending skill.
		id: String,
		/// Its level.
		level: u8,
	},
	/// Two skills share an id.
	#[error("skill id '{id}' is defined more than once")]
	DuplicateId {
		/// The repeated id.
		id: String,
	},
	/// A prerequisite id matches no skill.
	#[error("skill '{id}' requires unknown skill '{prerequisite}'")]
	DanglingPrerequisite {
		/// Skill declaring the prerequisite.
		id: String,
		/// The unknown id.
		prerequisite: String,
	},
	/// Skills that transitively require themselves.
	#[error("prerequisite cycle: {}", path.join(" -> "))]
	Cycle {
		/// Ids along the cycle, starting and ending at the same skill.
		path: Vec<String>,
	},
}

/// Top-level error for the skill graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkillGraphError {
	/// Strict lookup of an unknown id.
	#[error("skill '{id}' not found")]
	NotFound {
		/// The requested id.
		id: String,
	},
	/// Catalog failed validation.
	#[error(transparent)]
	Validation(#[from] ValidationError),
	/// Catalog could not be loaded.
	#[error(transparent)]
	Load(#[from] LoadError),
}

/// Result alias for skill graph operations.
pub type Result<T> = std::result::Result<T, SkillGraphError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn error_display() {
		assert_eq!(
			LoadError::Timeout { ms: 5000 }.to_string(),
			"request timed out after 5000 ms"
		);
		assert_eq!(
			ValidationError::Cycle {
				path: vec!["a".into(), "b".into(), "a".into()]
			}
			.to_string(),
			"prerequisite cycle: a -> b -> a"
		);
		assert_eq!(
			SkillGraphError::NotFound { id: "rust".into() }.to_string(),
			"skill 'rust' not found"
		);
	}

	#[test]
	fn retryable_classification() {
		assert!(LoadError::Network("reset".into()).is_retryable());
		assert!(LoadError::Timeout { ms: 10 }.is_retryable());
		assert!(LoadError::Status(503).is_retryable());
		assert!(!LoadError::Status(404).is_retryable());
		assert!(!LoadError::Decode("eof".into()).is_retryable());
	}

	#[test]
	fn load_error_converts_into_graph_error() {
		let err: SkillGraphError = LoadError::Status(500).into();
		assert_eq!(err.to_string(), "server responded with status 500");
	}
}
