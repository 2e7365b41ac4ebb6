use leptos::prelude::*;

use crate::components::progress_tree::ProgressTreeView;
use crate::skill_graph::data::learning_path;

#[component]
pub fn Progress() -> impl IntoView {
	view! { <ProgressTreeView initial=learning_path() /> }
}
