use leptos::prelude::*;

use super::force_graph::{ForceGraphCanvas, GraphData};
use super::store::SkillGraphStore;
use crate::error::LoadError;
use crate::skill_graph::{CategoryFilter, SelectionSet, SkillFilter, SkillNode};

/// "1 skill selected", "3 skills selected".
fn selection_label(count: usize) -> String {
	format!("{count} skill{} selected", if count == 1 { "" } else { "s" })
}

/// Explorer over the whole catalog: filters, stats, selection, graph and cards.
#[component]
pub fn SkillExplorer(store: SkillGraphStore) -> impl IntoView {
	view! {
		<Show when=move || !store.is_loading() fallback=|| view! { <LoadingView /> }>
			{move || match store.load_state.with(|s| s.error().cloned()) {
				Some(err) => view! { <LoadFailed err /> }.into_any(),
				None => view! { <ExplorerBody store /> }.into_any(),
			}}
		</Show>
	}
}

#[component]
fn LoadingView() -> impl IntoView {
	view! {
		<div class="loading">
			<div class="spinner"></div>
			<p>"Loading skill tree..."</p>
		</div>
	}
}

#[component]
fn LoadFailed(err: LoadError) -> impl IntoView {
	let hint = if err.is_retryable() {
		"The skill service did not respond. Reload the page to try again."
	} else {
		"The skill service returned data this page cannot use."
	};
	view! {
		<div class="load-error">
			<h2>"Could not load skills"</h2>
			<p class="error-detail">{err.to_string()}</p>
			<p>{hint}</p>
		</div>
	}
}

#[component]
fn ExplorerBody(store: SkillGraphStore) -> impl IntoView {
	let filter = RwSignal::new(SkillFilter::default());
	let skills = store.filtered(filter.into());

	let graph_data = Signal::derive(move || {
		let visible = skills.get();
		store.selection.with(|selection| {
			store.load_state.with(|s| {
				s.graph()
					.map(|g| GraphData::from_skills(&visible, g.catalog(), selection))
					.unwrap_or_default()
			})
		})
	});
	let on_node_click = Callback::new(move |id: String| store.toggle_selection(&id));

	view! {
		<section class="skill-explorer">
			<StatsHeader store />
			<FilterBar store filter />
			<div class="graph-panel">
				<ForceGraphCanvas data=graph_data on_node_click height=Some(480.0) />
			</div>
			<Show
				when=move || !skills.with(Vec::is_empty)
				fallback=move || view! { <EmptyState filter /> }
			>
				<div class="skill-grid">
					<For
						each=move || skills.get()
						key=|skill| skill.id.clone()
						children=move |skill| view! { <SkillCard skill store /> }
					/>
				</div>
			</Show>
		</section>
	}
}

#[component]
fn StatsHeader(store: SkillGraphStore) -> impl IntoView {
	let stats = move || store.stats();
	view! {
		<header class="explorer-header">
			<div>
				<h1>"Skill Tree"</h1>
				<p class="subtitle">"Interactive technology skill mapping and dependencies"</p>
			</div>
			<div class="stats">
				<div class="stat">
					<div class="stat-value">{move || stats().total}</div>
					<div class="stat-label">"Total Skills"</div>
				</div>
				<div class="stat">
					<div class="stat-value">{move || format!("{}%", stats().average_level)}</div>
					<div class="stat-label">"Avg Level"</div>
				</div>
				<div class="stat">
					<div class="stat-value">{move || store.selection.with(SelectionSet::len)}</div>
					<div class="stat-label">"Selected"</div>
				</div>
			</div>
		</header>
	}
}

#[component]
fn FilterBar(store: SkillGraphStore, filter: RwSignal<SkillFilter>) -> impl IntoView {
	view! {
		<div class="filters">
			<input
				type="text"
				placeholder="Search skills..."
				prop:value=move || filter.with(|f| f.search.clone().unwrap_or_default())
				on:input=move |ev| {
					let value = event_target_value(&ev);
					filter.update(|f| f.search = Some(value));
				}
			/>
			<select
				prop:value=move || filter.with(|f| f.category.key())
				on:change=move |ev| {
					let category = CategoryFilter::from_key(&event_target_value(&ev));
					filter.update(|f| f.category = category);
				}
			>
				<option value="all">"All Categories"</option>
				{move || {
					store
						.categories()
						.into_iter()
						.map(|(category, info)| {
							view! { <option value=category.as_str()>{info.name}</option> }
						})
						.collect_view()
				}}
			</select>
			<label class="level-filter">
				<input
					type="range"
					min="0"
					max="100"
					step="10"
					prop:value=move || filter.with(|f| f.min_level.to_string())
					on:input=move |ev| {
						let level = event_target_value(&ev).parse().unwrap_or(0);
						filter.update(|f| f.min_level = level);
					}
				/>
				<span>{move || format!("{}%+", filter.with(|f| f.min_level))}</span>
			</label>
			<Show when=move || !store.selection.with(SelectionSet::is_empty)>
				<div class="selection-bar">
					<span>{move || selection_label(store.selection.with(SelectionSet::len))}</span>
					<button on:click=move |_| store.clear_selection()>"Clear Selection"</button>
				</div>
			</Show>
		</div>
	}
}

#[component]
fn SkillCard(skill: SkillNode, store: SkillGraphStore) -> impl IntoView {
	let connections = store.connections(&skill.id);
	let info = store.load_state.with(|s| {
		s.graph()
			.and_then(|g| g.catalog().category_info(skill.category).cloned())
	});
	let (color, icon) = info
		.map(|i| (i.color, i.icon))
		.unwrap_or_else(|| ("#6b7280".into(), "•".into()));

	let id = skill.id.clone();
	let is_selected = move || store.selection.with(|s| s.contains(&id));
	let toggle_id = skill.id.clone();

	view! {
		<div
			class="skill-card"
			class:selected=is_selected
			style=format!("--accent: {color}")
			on:click=move |_| store.toggle_selection(&toggle_id)
		>
			<div class="skill-card-title">
				<span class="icon">{icon}</span>
				<div>
					<h3>{skill.name}</h3>
					<p class="category">{skill.category.as_str()}</p>
				</div>
			</div>
			<div class="level">
				<span>"Proficiency"</span>
				<span>{format!("{}%", skill.level)}</span>
			</div>
			<div class="level-track">
				<div class="level-bar" style=format!("width: {}%", skill.level.min(100))></div>
			</div>
			<p class="description">{skill.description}</p>
			<div class="connections">
				{(!connections.prerequisites.is_empty())
					.then(|| {
						view! {
							<span class="badge">
								{format!("↑ {} deps", connections.prerequisites.len())}
							</span>
						}
					})}
				{(!connections.dependents.is_empty())
					.then(|| {
						view! {
							<span class="badge">
								{format!("↓ {} leads", connections.dependents.len())}
							</span>
						}
					})}
			</div>
		</div>
	}
}

#[component]
fn EmptyState(filter: RwSignal<SkillFilter>) -> impl IntoView {
	view! {
		<div class="empty-state">
			<Show
				when=move || !filter.with(SkillFilter::is_empty)
				fallback=|| view! { <p>"The skill catalog is empty"</p> }
			>
				<p>"No skills match your current filters"</p>
				<button on:click=move |_| filter.set(SkillFilter::default())>"Reset Filters"</button>
			</Show>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn selection_label_pluralizes() {
		assert_eq!(selection_label(1), "1 skill selected");
		assert_eq!(selection_label(0), "0 skills selected");
		assert_eq!(selection_label(4), "4 skills selected");
	}
}
