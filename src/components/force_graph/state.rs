use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::types::GraphData;

pub const NODE_RADIUS: f64 = 7.0;
pub const HIT_RADIUS: f64 = 14.0;
/// Pointer travel in screen pixels after which a press counts as a drag.
pub const CLICK_SLOP: f64 = 4.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub label: String,
	pub color: String,
	pub radius: f64,
	pub selected: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub moved: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
	pub prev_node: Option<DefaultNodeIdx>,
	pub prev_neighbors: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

/// Last known position of a node, keyed by id across rebuilds.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Placement {
	x: f32,
	y: f32,
	anchored: bool,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	pub flow_time: f64,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
}

fn simulation() -> ForceGraph<NodeInfo, ()> {
	ForceGraph::new(SimulationParameters {
		force_charge: 150.0,
		force_spring: 0.05,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: 0.9,
	})
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		let (graph, edges) = Self::build(data, &HashMap::new());
		Self {
			graph,
			edges,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			animation_running: true,
			flow_time: 0.0,
		}
	}

	/// Replaces the graph contents. Nodes that survive keep their position;
	/// the view transform is untouched.
	pub fn rebuild(&mut self, data: &GraphData) {
		let placements = self.placements();
		let (graph, edges) = Self::build(data, &placements);
		self.graph = graph;
		self.edges = edges;
		self.drag = DragState::default();
		self.pan = PanState::default();
		self.hover = HoverState::default();
	}

	fn build(
		data: &GraphData,
		placements: &HashMap<String, Placement>,
	) -> (ForceGraph<NodeInfo, ()>, Vec<(DefaultNodeIdx, DefaultNodeIdx)>) {
		let mut graph = simulation();
		let mut id_to_idx = HashMap::new();
		let mut edges = Vec::new();
		let count = data.nodes.len().max(1) as f64;

		for (i, node) in data.nodes.iter().enumerate() {
			let placement = placements.get(&node.id).copied().unwrap_or_else(|| {
				let angle = (i as f64) * 2.0 * PI / count;
				Placement {
					x: (100.0 * angle.cos()) as f32,
					y: (100.0 * angle.sin()) as f32,
					anchored: false,
				}
			});

			let idx = graph.add_node(NodeData {
				x: placement.x,
				y: placement.y,
				mass: 10.0,
				is_anchor: placement.anchored,
				user_data: NodeInfo {
					id: node.id.clone(),
					label: node.label.clone(),
					color: node.color.clone(),
					radius: NODE_RADIUS * node.weight,
					selected: node.selected,
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
		}

		for link in &data.links {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			{
				graph.add_edge(src, tgt, EdgeData::default());
				edges.push((src, tgt));
			}
		}

		(graph, edges)
	}

	fn placements(&self) -> HashMap<String, Placement> {
		let mut out = HashMap::new();
		self.graph.visit_nodes(|node| {
			out.insert(
				node.data.user_data.id.clone(),
				Placement {
					x: node.x(),
					y: node.y(),
					anchored: node.data.is_anchor,
				},
			);
		});
		out
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// HIT_RADIUS is in world-space, scales with zoom like nodes
			let hit = HIT_RADIUS.max(node.data.user_data.radius + 2.0);
			if (dx * dx + dy * dy).sqrt() < hit {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn node_id(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some(node.data.user_data.id.clone());
			}
		});
		found
	}

	/// Starts a drag on `idx` at screen position (`x`, `y`).
	pub fn begin_drag(&mut self, idx: DefaultNodeIdx, x: f64, y: f64) {
		self.drag.active = true;
		self.drag.moved = false;
		self.drag.node_idx = Some(idx);
		self.drag.start_x = x;
		self.drag.start_y = y;
		let (mut sx, mut sy) = (0.0, 0.0);
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				sx = node.x();
				sy = node.y();
			}
		});
		self.drag.node_start_x = sx;
		self.drag.node_start_y = sy;
	}

	pub fn drag_to(&mut self, x: f64, y: f64) {
		let Some(idx) = self.drag.node_idx else {
			return;
		};
		let (sdx, sdy) = (x - self.drag.start_x, y - self.drag.start_y);
		if !self.drag.moved && (sdx * sdx + sdy * sdy).sqrt() < CLICK_SLOP {
			return;
		}
		self.drag.moved = true;

		let (dx, dy) = (sdx / self.transform.k, sdy / self.transform.k);
		let (nx, ny) = (
			self.drag.node_start_x + dx as f32,
			self.drag.node_start_y + dy as f32,
		);
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = nx;
				node.data.y = ny;
				node.data.is_anchor = true;
			}
		});
	}

	/// Ends any drag or pan. Returns the id of the node when the press never
	/// moved past [`CLICK_SLOP`], i.e. it was a click.
	pub fn release(&mut self) -> Option<String> {
		let clicked = match (self.drag.active, self.drag.moved, self.drag.node_idx) {
			(true, false, Some(idx)) => self.node_id(idx),
			_ => None,
		};
		self.drag = DragState::default();
		self.pan.active = false;
		clicked
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Save previous state for fade-out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for &(src, tgt) in &self.edges {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				} else if tgt == idx {
					self.hover.neighbors.insert(src);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.flow_time += dt as f64;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	/// Updates the viewport size, shifting the view so the graph stays centred.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.transform.x += (width - self.width) / 2.0;
		self.transform.y += (height - self.height) / 2.0;
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::{GraphLink, GraphNode};

	fn node(id: &str) -> GraphNode {
		GraphNode {
			id: id.into(),
			label: id.into(),
			color: "#3b82f6".into(),
			weight: 1.0,
			selected: false,
		}
	}

	fn data() -> GraphData {
		GraphData {
			nodes: vec![node("html"), node("css")],
			links: vec![
				GraphLink {
					source: "html".into(),
					target: "css".into(),
				},
				GraphLink {
					source: "ghost".into(),
					target: "css".into(),
				},
			],
		}
	}

	fn screen_position(state: &ForceGraphState, id: &str) -> (f64, f64) {
		let mut pos = (0.0, 0.0);
		state.graph.visit_nodes(|n| {
			if n.data.user_data.id == id {
				pos = (
					n.x() as f64 * state.transform.k + state.transform.x,
					n.y() as f64 * state.transform.k + state.transform.y,
				);
			}
		});
		pos
	}

	#[test]
	fn dangling_links_are_skipped() {
		let state = ForceGraphState::new(&data(), 800.0, 600.0);
		assert_eq!(state.edges.len(), 1);
	}

	#[test]
	fn press_without_movement_is_a_click() {
		let mut state = ForceGraphState::new(&data(), 800.0, 600.0);
		let (x, y) = screen_position(&state, "css");
		let idx = state.node_at_position(x, y).unwrap();
		assert_eq!(state.node_id(idx).as_deref(), Some("css"));

		state.begin_drag(idx, x, y);
		state.drag_to(x + 1.0, y + 1.0);
		assert_eq!(state.release().as_deref(), Some("css"));
	}

	#[test]
	fn dragging_is_not_a_click_and_anchors_the_node() {
		let mut state = ForceGraphState::new(&data(), 800.0, 600.0);
		let (x, y) = screen_position(&state, "html");
		let idx = state.node_at_position(x, y).unwrap();

		state.begin_drag(idx, x, y);
		state.drag_to(x + 40.0, y);
		assert_eq!(state.release(), None);
		assert!(!state.drag.active);

		let mut anchored = false;
		state.graph.visit_nodes(|n| {
			if n.data.user_data.id == "html" {
				anchored = n.data.is_anchor;
			}
		});
		assert!(anchored);
	}

	#[test]
	fn rebuild_keeps_positions_of_surviving_nodes() {
		let mut state = ForceGraphState::new(&data(), 800.0, 600.0);
		let before = screen_position(&state, "css");

		let mut next = data();
		next.nodes.retain(|n| n.id == "css");
		next.nodes[0].selected = true;
		state.rebuild(&next);

		assert_eq!(screen_position(&state, "css"), before);
		let mut selected = false;
		state.graph.visit_nodes(|n| selected |= n.data.user_data.selected);
		assert!(selected);
		assert!(state.edges.is_empty());
	}

	#[test]
	fn node_style_comes_from_graph_data() {
		let mut next = data();
		next.nodes[0].color = "#f59e0b".into();
		next.nodes[0].weight = 2.0;
		let state = ForceGraphState::new(&next, 800.0, 600.0);
		let mut style = None;
		state.graph.visit_nodes(|n| {
			if n.data.user_data.id == "html" {
				style = Some((n.data.user_data.color.clone(), n.data.user_data.radius));
			}
		});
		assert_eq!(style, Some(("#f59e0b".to_string(), NODE_RADIUS * 2.0)));
	}

	#[test]
	fn resize_keeps_the_graph_centred() {
		let mut state = ForceGraphState::new(&data(), 800.0, 600.0);
		let before = screen_position(&state, "css");
		state.resize(1000.0, 480.0);
		assert_eq!((state.width, state.height), (1000.0, 480.0));
		assert_eq!((state.transform.x, state.transform.y), (500.0, 240.0));
		let after = screen_position(&state, "css");
		assert!((after.0 - before.0 - 100.0).abs() < 1e-9);
		assert!((after.1 - before.1 + 60.0).abs() < 1e-9);
	}
}
