/// How a node is drawn. Names follow vis-network's shape vocabulary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeShape {
	#[default]
	Dot,
	Ellipse,
	Box,
	Triangle,
	TriangleDown,
}

impl NodeShape {
	pub fn parse(name: &str) -> Self {
		match name.trim() {
			"ellipse" | "circle" => Self::Ellipse,
			"box" | "square" => Self::Box,
			"triangle" => Self::Triangle,
			"triangleDown" => Self::TriangleDown,
			_ => Self::Dot,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub label: Option<String>,
	pub color: Option<String>,
	pub shape: NodeShape,
	pub group: Option<u32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}
