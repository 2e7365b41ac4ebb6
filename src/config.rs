//! Build-time configuration.
//!
//! The WASM bundle has no process environment, so values are baked in by
//! `option_env!` when the crate is compiled (e.g. `SKILL_GRAPH_ENDPOINT=/api/skills trunk build`).

use std::time::Duration;

use log::warn;
use serde::Deserialize;

use crate::skill_graph::{ConfiguredSource, HttpSkillSource, StaticSkillSource};

/// How the skill catalog is obtained.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
	/// Simulated latency of the embedded catalog.
	pub load_delay_ms: u32,
	/// JSON endpoint; the embedded catalog is used when absent.
	pub endpoint: Option<String>,
	/// Per-attempt timeout for the endpoint.
	pub timeout_ms: u32,
	/// Retries after the first failed attempt.
	pub max_retries: u32,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			load_delay_ms: 800,
			endpoint: None,
			timeout_ms: 5000,
			max_retries: 2,
		}
	}
}

impl AppConfig {
	/// Reads `SKILL_GRAPH_*` variables captured at compile time. A JSON object in
	/// `SKILL_GRAPH_CONFIG` takes precedence over the individual variables.
	pub fn from_env() -> Self {
		if let Some(json) = option_env!("SKILL_GRAPH_CONFIG") {
			match serde_json::from_str(json) {
				Ok(config) => return config,
				Err(e) => warn!("ignoring SKILL_GRAPH_CONFIG: {e}"),
			}
		}
		Self::from_vars(
			option_env!("SKILL_GRAPH_ENDPOINT"),
			option_env!("SKILL_GRAPH_DELAY_MS"),
			option_env!("SKILL_GRAPH_TIMEOUT_MS"),
			option_env!("SKILL_GRAPH_MAX_RETRIES"),
		)
	}

	fn from_vars(
		endpoint: Option<&str>,
		delay_ms: Option<&str>,
		timeout_ms: Option<&str>,
		max_retries: Option<&str>,
	) -> Self {
		let defaults = Self::default();
		Self {
			load_delay_ms: parse_or("SKILL_GRAPH_DELAY_MS", delay_ms, defaults.load_delay_ms),
			endpoint: endpoint
				.map(str::trim)
				.filter(|e| !e.is_empty())
				.map(str::to_owned),
			timeout_ms: parse_or("SKILL_GRAPH_TIMEOUT_MS", timeout_ms, defaults.timeout_ms),
			max_retries: parse_or("SKILL_GRAPH_MAX_RETRIES", max_retries, defaults.max_retries),
		}
	}

	/// The source this configuration selects.
	pub fn source(&self) -> ConfiguredSource {
		match &self.endpoint {
			Some(url) => ConfiguredSource::Http(HttpSkillSource::new(
				url.clone(),
				Duration::from_millis(u64::from(self.timeout_ms)),
				self.max_retries,
			)),
			None => ConfiguredSource::Static(StaticSkillSource::new(Duration::from_millis(
				u64::from(self.load_delay_ms),
			))),
		}
	}
}

fn parse_or(name: &str, raw: Option<&str>, default: u32) -> u32 {
	match raw.map(str::trim) {
		None | Some("") => default,
		Some(value) => value.parse().unwrap_or_else(|_| {
			warn!("ignoring {name}={value:?}: not a number");
			default
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_use_embedded_catalog() {
		let config = AppConfig::from_vars(None, None, None, None);
		assert_eq!(config, AppConfig::default());
		assert!(matches!(config.source(), ConfiguredSource::Static(_)));
	}

	#[test]
	fn endpoint_selects_http_source() {
		let config = AppConfig::from_vars(Some("/api/skills"), None, Some("250"), Some("4"));
		match config.source() {
			ConfiguredSource::Http(source) => {
				assert_eq!(source.url, "/api/skills");
				assert_eq!(source.timeout, Duration::from_millis(250));
				assert_eq!(source.max_retries, 4);
			}
			other => panic!("expected http source, got {other:?}"),
		}
	}

	#[test]
	fn malformed_numbers_fall_back_to_defaults() {
		let config = AppConfig::from_vars(Some("  "), Some("soon"), None, Some("-1"));
		assert_eq!(config.endpoint, None);
		assert_eq!(config.load_delay_ms, 800);
		assert_eq!(config.max_retries, 2);
	}

	#[test]
	fn deserializes_partial_json() {
		let config: AppConfig = serde_json::from_str(r#"{"load_delay_ms": 0}"#).unwrap();
		assert_eq!(config.load_delay_ms, 0);
		assert_eq!(config.timeout_ms, 5000);
	}
}
