//! Reading a vis-network style `MOA_network` payload into [`GraphData`].

use serde::Deserialize;
use serde_json::Value;

use super::types::{GraphData, GraphLink, GraphNode, NodeShape};
use crate::api::GraphPayload;
use crate::error::ApiError;

/// Ids, labels and groups arrive as strings or numbers depending on the
/// backend's graph library.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
	Text(String),
	Number(serde_json::Number),
	Flag(bool),
}

impl Scalar {
	fn into_string(self) -> String {
		match self {
			Scalar::Text(s) => s,
			Scalar::Number(n) => n.to_string(),
			Scalar::Flag(b) => b.to_string(),
		}
	}

	fn group_index(self) -> u32 {
		match self {
			Scalar::Number(n) => n.as_u64().map(|v| v as u32).unwrap_or_default(),
			Scalar::Text(s) => s
				.bytes()
				.fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32)),
			Scalar::Flag(b) => b as u32,
		}
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum VisColor {
	Plain(String),
	Detailed {
		#[serde(default)]
		background: Option<String>,
	},
}

impl VisColor {
	/// Backends pad colours with stray whitespace, e.g. `"#7F8C8D "`.
	fn into_css(self) -> Option<String> {
		let raw = match self {
			VisColor::Plain(s) => s,
			VisColor::Detailed { background } => background?,
		};
		let trimmed = raw.trim();
		(!trimmed.is_empty()).then(|| trimmed.to_string())
	}
}

#[derive(Deserialize)]
struct VisNode {
	id: Scalar,
	#[serde(default)]
	label: Option<Scalar>,
	#[serde(default)]
	color: Option<VisColor>,
	#[serde(default)]
	shape: Option<String>,
	#[serde(default)]
	group: Option<Scalar>,
}

#[derive(Deserialize)]
struct VisEdge {
	#[serde(alias = "source")]
	from: Scalar,
	#[serde(alias = "target")]
	to: Scalar,
}

#[derive(Deserialize)]
struct VisNetwork {
	#[serde(default)]
	nodes: Vec<VisNode>,
	#[serde(default, alias = "links")]
	edges: Vec<VisEdge>,
}

impl TryFrom<&GraphPayload> for GraphData {
	type Error = ApiError;

	fn try_from(payload: &GraphPayload) -> Result<Self, Self::Error> {
		if payload.0.is_null() {
			return Ok(GraphData::default());
		}
		if !payload.0.is_object() {
			return Err(ApiError::Payload(format!(
				"expected an object with nodes and edges, got {}",
				kind(&payload.0)
			)));
		}
		let network = VisNetwork::deserialize(&payload.0)
			.map_err(|e| ApiError::Payload(e.to_string()))?;

		let nodes = network
			.nodes
			.into_iter()
			.map(|n| GraphNode {
				id: n.id.into_string(),
				label: n.label.map(Scalar::into_string),
				color: n.color.and_then(VisColor::into_css),
				shape: n.shape.as_deref().map(NodeShape::parse).unwrap_or_default(),
				group: n.group.map(Scalar::group_index),
			})
			.collect();
		let links = network
			.edges
			.into_iter()
			.map(|e| GraphLink {
				source: e.from.into_string(),
				target: e.to.into_string(),
			})
			.collect();

		Ok(GraphData { nodes, links })
	}
}

fn kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn convert(value: Value) -> Result<GraphData, ApiError> {
		GraphData::try_from(&GraphPayload(value))
	}

	#[test]
	fn reads_vis_network_nodes_and_edges() {
		let data = convert(json!({
			"nodes": [
				{"id": "DB00945", "label": "aspirin", "color": "#439AD9", "shape": "triangle"},
				{"id": "C0011849", "label": "diabetes", "color": "#DD614A", "shape": "triangleDown"},
				{"id": 5743, "label": "PTGS2", "color": "#7F8C8D ", "shape": "ellipse"}
			],
			"edges": [{"from": "DB00945", "to": 5743}, {"from": 5743, "to": "C0011849"}]
		}))
		.unwrap();

		assert_eq!(data.nodes.len(), 3);
		assert_eq!(data.nodes[0].shape, NodeShape::Triangle);
		assert_eq!(data.nodes[1].shape, NodeShape::TriangleDown);
		assert_eq!(data.nodes[2].id, "5743");
		assert_eq!(data.nodes[2].color.as_deref(), Some("#7F8C8D"));
		assert_eq!(
			data.links[0],
			GraphLink {
				source: "DB00945".into(),
				target: "5743".into()
			}
		);
	}

	#[test]
	fn accepts_object_colors_and_link_aliases() {
		let data = convert(json!({
			"nodes": [{"id": "a", "color": {"background": "#2ECC71", "border": "#000"}}, {"id": "b"}],
			"links": [{"source": "a", "target": "b"}]
		}))
		.unwrap();
		assert_eq!(data.nodes[0].color.as_deref(), Some("#2ECC71"));
		assert_eq!(data.nodes[1].shape, NodeShape::Dot);
		assert_eq!(data.links.len(), 1);
	}

	#[test]
	fn null_payload_is_an_empty_graph() {
		assert_eq!(convert(Value::Null).unwrap(), GraphData::default());
	}

	#[test]
	fn non_object_payload_is_rejected() {
		let err = convert(json!([1, 2, 3])).unwrap_err();
		assert_eq!(
			err,
			ApiError::Payload("expected an object with nodes and edges, got an array".into())
		);
	}

	#[test]
	fn nodes_without_ids_are_rejected() {
		assert!(matches!(
			convert(json!({"nodes": [{"label": "x"}]})),
			Err(ApiError::Payload(_))
		));
	}
}
