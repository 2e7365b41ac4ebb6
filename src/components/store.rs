use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, error, info, warn};

use crate::skill_graph::{
	Category, CategoryInfo, Connections, LoadState, SelectionSet, SkillFilter, SkillNode,
	SkillSource, SkillStats, validate,
};

/// Reactive handle over a loaded skill graph plus the session's selection.
/// Created once per explorer view and dropped with it.
#[derive(Clone, Copy)]
pub struct SkillGraphStore {
	pub load_state: RwSignal<LoadState>,
	pub selection: RwSignal<SelectionSet>,
}

impl SkillGraphStore {
	/// Starts loading from `source` in the background.
	pub fn new<S: SkillSource + 'static>(source: S) -> Self {
		let load_state = RwSignal::new(LoadState::Loading);
		let selection = RwSignal::new(SelectionSet::new());

		spawn_local(async move {
			info!("loading skill catalog");
			let result = source.load().await;
			match &result {
				Ok(catalog) => {
					info!("loaded {} skills", catalog.skills.len());
					if let Err(issues) = validate(catalog) {
						for issue in issues {
							warn!("skill catalog: {issue}");
						}
					}
				}
				Err(err) => error!("skill catalog load failed: {err}"),
			}
			// disposed signals hand the value back
			if load_state.try_set(result.into()).is_some() {
				debug!("skill view disposed before load finished, result discarded");
			}
		});

		Self {
			load_state,
			selection,
		}
	}

	pub fn is_loading(&self) -> bool {
		self.load_state.with(LoadState::is_loading)
	}

	/// Nodes matching `filter`, recomputed when either the graph or the filter changes.
	pub fn filtered(&self, filter: Signal<SkillFilter>) -> Memo<Vec<SkillNode>> {
		let load_state = self.load_state;
		Memo::new(move |_| {
			let filter = filter.get();
			load_state.with(|s| s.graph().map(|g| g.filter(&filter)).unwrap_or_default())
		})
	}

	pub fn stats(&self) -> SkillStats {
		self.load_state
			.with(|s| s.graph().map(|g| g.stats()).unwrap_or_default())
	}

	pub fn connections(&self, id: &str) -> Connections {
		self.load_state
			.with(|s| s.graph().map(|g| g.connections(id)).unwrap_or_default())
	}

	pub fn categories(&self) -> Vec<(Category, CategoryInfo)> {
		self.load_state.with(|s| {
			s.graph()
				.map(|g| {
					g.catalog()
						.categories
						.iter()
						.map(|(c, info)| (*c, info.clone()))
						.collect()
				})
				.unwrap_or_default()
		})
	}

	pub fn toggle_selection(&self, id: &str) {
		self.selection.update(|set| {
			let selected = set.toggle(id);
			debug!("{id} {}", if selected { "selected" } else { "deselected" });
		});
	}

	pub fn clear_selection(&self) {
		self.selection.update(SelectionSet::clear);
	}
}
