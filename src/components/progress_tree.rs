use leptos::prelude::*;
use log::info;

use crate::skill_graph::{NodeStatus, ProgressTree, TrackedSkill};

fn status_class(status: NodeStatus) -> &'static str {
	match status {
		NodeStatus::Completed => "node completed",
		NodeStatus::Available => "node available",
		NodeStatus::Locked => "node locked",
	}
}

/// Learning path where unlocked nodes can be opened and marked complete.
#[component]
pub fn ProgressTreeView(#[prop(into)] initial: Vec<TrackedSkill>) -> impl IntoView {
	let tree = RwSignal::new(ProgressTree::new(initial));
	let open = RwSignal::new(None::<String>);
	let summary = move || tree.with(ProgressTree::summary);

	let toggle = move |id: String| {
		tree.update(|t| {
			if let Some(done) = t.toggle_completion(&id) {
				info!("{id} marked {}", if done { "complete" } else { "incomplete" });
			}
		});
		open.set(None);
	};

	view! {
		<section class="progress-tree">
			<header>
				<h1>"Skill Development Tree"</h1>
				<p class="subtitle">"Track your learning journey and unlock new abilities"</p>
				<div class="stats">
					<div class="stat">
						<div class="stat-value">
							{move || {
								let s = summary();
								format!("{}/{}", s.completed, s.total)
							}}
						</div>
						<div class="stat-label">"Completed"</div>
					</div>
					<div class="stat">
						<div class="stat-value">{move || format!("{:.0}%", summary().percent)}</div>
						<div class="stat-label">"Progress"</div>
					</div>
					<div class="stat">
						<div class="stat-value">{move || summary().total_xp}</div>
						<div class="stat-label">"Total XP"</div>
					</div>
				</div>
				<div class="progress-track">
					<div
						class="progress-bar"
						style=move || format!("width: {:.1}%", summary().percent)
					></div>
				</div>
			</header>

			<div class="tree-nodes">
				{move || {
					tree.with(|t| {
						t.skills()
							.iter()
							.map(|skill| {
								let status = t.status(skill);
								let id = skill.id.clone();
								view! {
									<button
										class=status_class(status)
										disabled={status == NodeStatus::Locked}
										on:click=move |_| open.set(Some(id.clone()))
									>
										<span class="node-name">{skill.name.clone()}</span>
										<span class="node-progress">{format!("{}%", skill.progress)}</span>
									</button>
								}
							})
							.collect_view()
					})
				}}
				<Show when=move || summary().is_achiever>
					<div class="achievement">"Achiever!"</div>
				</Show>
				<Legend />
			</div>

			{move || {
				let id = open.get()?;
				let skill = tree.with(|t| t.get(&id).cloned())?;
				Some(view! { <SkillDetail skill on_close=move || open.set(None) on_toggle=toggle /> })
			}}
		</section>
	}
}

#[component]
fn SkillDetail(
	skill: TrackedSkill,
	on_close: impl Fn() + Clone + Send + Sync + 'static,
	on_toggle: impl Fn(String) + Clone + Send + Sync + 'static,
) -> impl IntoView {
	let id = skill.id.clone();
	let button_label = if skill.completed {
		"Mark Incomplete"
	} else {
		"Mark Complete"
	};
	let close = on_close.clone();

	view! {
		<div class="modal-backdrop" on:click=move |_| on_close()>
			<div class="modal" on:click=|ev| ev.stop_propagation()>
				<div class="modal-header">
					<h3>{skill.name}</h3>
					<span class="stars">{format!("★ {}/5", skill.level)}</span>
				</div>
				<p class="label">"Description"</p>
				<p>{skill.description}</p>
				<p class="label">"Prerequisites"</p>
				<div class="chips">
					{skill
						.prerequisites
						.into_iter()
						.map(|p| view! { <span class="chip">{p}</span> })
						.collect_view()}
				</div>
				<p class="label">"Learning Resources"</p>
				<ul>
					{skill
						.resources
						.into_iter()
						.map(|r| view! { <li>{r}</li> })
						.collect_view()}
				</ul>
				<div class="modal-footer">
					<span>{format!("Progress: {}%", skill.progress)}</span>
					<button on:click=move |_| on_toggle(id.clone())>{button_label}</button>
					<button class="secondary" on:click=move |_| close()>"Close"</button>
				</div>
			</div>
		</div>
	}
}

#[component]
fn Legend() -> impl IntoView {
	view! {
		<div class="legend">
			<h4>"Legend"</h4>
			<div><span class="dot completed"></span>"Completed"</div>
			<div><span class="dot available"></span>"Available"</div>
			<div><span class="dot locked"></span>"Locked"</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_classes_are_distinct() {
		let classes = [
			status_class(NodeStatus::Completed),
			status_class(NodeStatus::Available),
			status_class(NodeStatus::Locked),
		];
		assert!(classes.iter().all(|c| c.starts_with("node ")));
		assert_ne!(classes[0], classes[1]);
		assert_ne!(classes[1], classes[2]);
	}
}
