pub mod force_graph;
pub mod progress_tree;
pub mod skill_explorer;
pub mod store;
