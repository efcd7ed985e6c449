use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::types::{GraphData, NodeShape};

const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

pub const NODE_RADIUS: f64 = 6.0;
pub const HIT_RADIUS: f64 = 12.0;
const SEED_RADIUS: f64 = 120.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub label: Option<String>,
	pub color: String,
	pub shape: NodeShape,
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
	node_count: usize,
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

fn node_color(color: Option<&str>, group: Option<u32>) -> String {
	match (color, group) {
		(Some(c), _) => c.to_string(),
		(None, Some(g)) => COLORS[g as usize % COLORS.len()].to_string(),
		(None, None) => COLORS[0].to_string(),
	}
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		let mut state = Self {
			graph: simulation(),
			edges: Vec::new(),
			node_count: 0,
			transform: ViewTransform::default(),
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			animation_running: true,
			flow_time: 0.0,
		};
		state.load(data);
		state
	}

	/// Throw away the current network and lay out `data` from scratch.
	pub fn load(&mut self, data: &GraphData) {
		let mut graph = simulation();
		let mut id_to_idx = HashMap::new();
		let mut edges = Vec::new();

		// nodes start on a circle centred on the origin; the view transform
		// puts the origin in the middle of the canvas
		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let idx = graph.add_node(NodeData {
				x: (SEED_RADIUS * angle.cos()) as f32,
				y: (SEED_RADIUS * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					label: node.label.clone(),
					color: node_color(node.color.as_deref(), node.group),
					shape: node.shape,
				},
			});
			id_to_idx.insert(node.id.as_str(), idx);
		}

		for link in &data.links {
			match (
				id_to_idx.get(link.source.as_str()),
				id_to_idx.get(link.target.as_str()),
			) {
				(Some(&src), Some(&tgt)) => {
					graph.add_edge(src, tgt, EdgeData::default());
					edges.push((src, tgt));
				}
				_ => log::debug!("Skipping edge {} -> {}", link.source, link.target),
			}
		}

		self.graph = graph;
		self.edges = edges;
		self.node_count = data.nodes.len();
		self.transform = ViewTransform {
			x: self.width / 2.0,
			y: self.height / 2.0,
			k: 1.0,
		};
		self.drag = DragState::default();
		self.pan = PanState::default();
		self.hover = HoverState::default();
		self.flow_time = 0.0;
		self.animation_running = true;
	}

	pub fn is_empty(&self) -> bool {
		self.node_count == 0
	}

	pub fn edge_count(&self) -> usize {
		self.edges.len()
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
			// world-space radius, so hit area scales with zoom
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// keep the old highlight around so it can fade out
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
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::{GraphLink, GraphNode};

	fn node(id: &str, color: Option<&str>) -> GraphNode {
		GraphNode {
			id: id.into(),
			label: Some(id.to_uppercase()),
			color: color.map(Into::into),
			shape: NodeShape::Ellipse,
			group: None,
		}
	}

	fn link(source: &str, target: &str) -> GraphLink {
		GraphLink {
			source: source.into(),
			target: target.into(),
		}
	}

	fn sample() -> GraphData {
		GraphData {
			nodes: vec![node("a", Some("#439AD9")), node("b", None), node("c", None)],
			links: vec![link("a", "b"), link("b", "c"), link("c", "missing")],
		}
	}

	#[test]
	fn edges_to_unknown_nodes_are_skipped() {
		let state = ForceGraphState::new(&sample(), 800.0, 600.0);
		assert_eq!(state.edge_count(), 2);
		assert!(!state.is_empty());
	}

	#[test]
	fn payload_colors_win_over_palette() {
		let state = ForceGraphState::new(&sample(), 800.0, 600.0);
		let mut colors = Vec::new();
		state
			.graph
			.visit_nodes(|n| colors.push(n.data.user_data.color.clone()));
		assert!(colors.contains(&"#439AD9".to_string()));
		assert!(colors.contains(&COLORS[0].to_string()));
	}

	#[test]
	fn load_replaces_previous_network() {
		let mut state = ForceGraphState::new(&sample(), 800.0, 600.0);
		state.transform.k = 3.0;
		state.load(&GraphData {
			nodes: vec![node("x", None)],
			links: vec![],
		});

		let mut count = 0;
		state.graph.visit_nodes(|_| count += 1);
		assert_eq!(count, 1);
		assert_eq!(state.edge_count(), 0);
		assert_eq!(state.transform.k, 1.0);
	}

	#[test]
	fn hovering_highlights_neighbors() {
		let mut state = ForceGraphState::new(&sample(), 800.0, 600.0);
		let mut ids = Vec::new();
		state.graph.visit_nodes(|n| ids.push(n.index()));
		let (a, b, c) = (ids[0], ids[1], ids[2]);

		state.set_hover(Some(b));
		assert!(state.is_hovered(b));
		assert!(state.is_highlighted(a));
		assert!(state.is_highlighted(c));

		state.set_hover(Some(a));
		assert!(state.is_highlighted(b));
		assert!(!state.is_highlighted(c));
	}

	#[test]
	fn empty_graph_loads() {
		let state = ForceGraphState::new(&GraphData::default(), 800.0, 600.0);
		assert!(state.is_empty());
		assert_eq!(state.node_at_position(400.0, 300.0), None);
	}
}
