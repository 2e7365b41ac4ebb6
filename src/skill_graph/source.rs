//! Where skill catalogs come from.
//!
//! The UI only sees the [`SkillSource`] trait. The embedded catalog and the
//! HTTP endpoint both implement it, so swapping one for the other leaves the
//! read operations untouched.

use std::future::Future;
use std::time::Duration;

use futures::future::{Either, select};
use gloo_timers::future::sleep;
use log::{debug, warn};

use crate::error::LoadError;

use super::data::static_catalog;
use super::graph::SkillGraph;
use super::types::SkillCatalog;

/// Repository interface injected into the UI.
pub trait SkillSource {
	/// Produces a full catalog.
	fn load(&self) -> impl Future<Output = Result<SkillCatalog, LoadError>>;
}

/// Serves the embedded catalog after a simulated network delay.
#[derive(Clone, Debug)]
pub struct StaticSkillSource {
	catalog: SkillCatalog,
	delay: Duration,
}

impl StaticSkillSource {
	/// The embedded catalog, resolved after `delay`.
	pub fn new(delay: Duration) -> Self {
		Self::with_catalog(static_catalog(), delay)
	}

	/// Serves `catalog` instead of the embedded one.
	pub fn with_catalog(catalog: SkillCatalog, delay: Duration) -> Self {
		Self { catalog, delay }
	}
}

impl SkillSource for StaticSkillSource {
	async fn load(&self) -> Result<SkillCatalog, LoadError> {
		if !self.delay.is_zero() {
			sleep(self.delay).await;
		}
		Ok(self.catalog.clone())
	}
}

/// Fetches the catalog as JSON, with a per-attempt timeout and retries on
/// transient failures.
#[derive(Clone, Debug)]
pub struct HttpSkillSource {
	/// Endpoint returning the catalog JSON.
	pub url: String,
	/// Bound on a single attempt.
	pub timeout: Duration,
	/// Retries after the first attempt.
	pub max_retries: u32,
	/// Wait before retry `n` is `backoff * n`.
	pub backoff: Duration,
}

impl HttpSkillSource {
	/// Source with the default 500 ms backoff.
	pub fn new(url: impl Into<String>, timeout: Duration, max_retries: u32) -> Self {
		Self {
			url: url.into(),
			timeout,
			max_retries,
			backoff: Duration::from_millis(500),
		}
	}

	async fn fetch_once(&self) -> Result<SkillCatalog, LoadError> {
		let request = async {
			let response = gloo_net::http::Request::get(&self.url)
				.send()
				.await
				.map_err(|e| LoadError::Network(e.to_string()))?;
			if !response.ok() {
				return Err(LoadError::Status(response.status()));
			}
			let body = response
				.text()
				.await
				.map_err(|e| LoadError::Network(e.to_string()))?;
			parse_catalog(&body)
		};

		match select(Box::pin(request), Box::pin(sleep(self.timeout))).await {
			Either::Left((result, _)) => result,
			Either::Right(((), _)) => Err(LoadError::Timeout {
				ms: u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX),
			}),
		}
	}
}

impl SkillSource for HttpSkillSource {
	async fn load(&self) -> Result<SkillCatalog, LoadError> {
		debug!("fetching skill catalog from {}", self.url);
		with_retries(
			self.max_retries,
			|| self.fetch_once(),
			|attempt| sleep(self.backoff * attempt),
		)
		.await
	}
}

/// Decodes the JSON catalog shape.
pub fn parse_catalog(body: &str) -> Result<SkillCatalog, LoadError> {
	serde_json::from_str(body).map_err(|e| LoadError::Decode(e.to_string()))
}

/// Runs `attempt` until it succeeds, fails with a non-retryable error, or
/// `max_retries` retries are spent. `wait(n)` runs before retry `n`.
pub async fn with_retries<T, A, AFut, W, WFut>(
	max_retries: u32,
	mut attempt: A,
	mut wait: W,
) -> Result<T, LoadError>
where
	A: FnMut() -> AFut,
	AFut: Future<Output = Result<T, LoadError>>,
	W: FnMut(u32) -> WFut,
	WFut: Future<Output = ()>,
{
	let mut retries = 0;
	loop {
		match attempt().await {
			Ok(value) => return Ok(value),
			Err(err) if err.is_retryable() && retries < max_retries => {
				retries += 1;
				warn!("skill catalog load failed ({err}), retry {retries}/{max_retries}");
				wait(retries).await;
			}
			Err(err) => return Err(err),
		}
	}
}

/// Source chosen from [`AppConfig`](crate::config::AppConfig).
#[derive(Clone, Debug)]
pub enum ConfiguredSource {
	/// Embedded catalog.
	Static(StaticSkillSource),
	/// Remote endpoint.
	Http(HttpSkillSource),
}

impl SkillSource for ConfiguredSource {
	async fn load(&self) -> Result<SkillCatalog, LoadError> {
		match self {
			ConfiguredSource::Static(source) => source.load().await,
			ConfiguredSource::Http(source) => source.load().await,
		}
	}
}

/// Tri-state of a load: one-way from `Loading` to `Ready` or `Failed`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
	/// Waiting on the source.
	#[default]
	Loading,
	/// Loaded graph.
	Ready(SkillGraph),
	/// The source gave up.
	Failed(LoadError),
}

impl LoadState {
	/// Still waiting on the source.
	pub fn is_loading(&self) -> bool {
		matches!(self, LoadState::Loading)
	}

	/// The graph once `Ready`.
	pub fn graph(&self) -> Option<&SkillGraph> {
		match self {
			LoadState::Ready(graph) => Some(graph),
			_ => None,
		}
	}

	/// The error once `Failed`.
	pub fn error(&self) -> Option<&LoadError> {
		match self {
			LoadState::Failed(err) => Some(err),
			_ => None,
		}
	}
}

impl From<Result<SkillCatalog, LoadError>> for LoadState {
	fn from(result: Result<SkillCatalog, LoadError>) -> Self {
		match result {
			Ok(catalog) => LoadState::Ready(SkillGraph::new(catalog)),
			Err(err) => LoadState::Failed(err),
		}
	}
}
