use leptos::prelude::*;

use crate::components::skill_explorer::SkillExplorer;
use crate::components::store::SkillGraphStore;
use crate::config::AppConfig;

/// Skill explorer page. Every visit loads the catalog afresh.
#[component]
pub fn Home() -> impl IntoView {
	let config = use_context::<AppConfig>().unwrap_or_default();
	let store = SkillGraphStore::new(config.source());

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<SkillExplorer store />
		</ErrorBoundary>
	}
}
