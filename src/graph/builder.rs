//! Maps raw input records into the graph store.
//!
//! Visual attributes (color, size) are derived only from the semantic type.
//! Malformed edges (self-loops, dangling endpoints) are dropped silently.

use log::debug;

use super::store::{GraphStore, NodeAttributes, NodeKind, Shape};
use super::types::{GraphData, RawNode, Scalar};

/// Fill of movie nodes.
pub const MOVIE_COLOR: &str = "#4c72b0";
/// Fill of director nodes.
pub const DIRECTOR_COLOR: &str = "#55a868";
/// Fill of actor nodes.
pub const ACTOR_COLOR: &str = "#dd8452";
/// Fill of nodes with any other type.
pub const UNKNOWN_COLOR: &str = "#999999";

/// Base color for a semantic type.
pub fn color_for_kind(kind: &NodeKind) -> &'static str {
	match kind {
		NodeKind::Movie => MOVIE_COLOR,
		NodeKind::Director => DIRECTOR_COLOR,
		NodeKind::Actor => ACTOR_COLOR,
		NodeKind::Other(_) => UNKNOWN_COLOR,
	}
}

/// Base node size for a semantic type.
pub fn size_for_kind(kind: &NodeKind) -> f64 {
	match kind {
		NodeKind::Movie => 8.0,
		NodeKind::Director => 10.0,
		NodeKind::Actor | NodeKind::Other(_) => 6.0,
	}
}

/// Counts of what the builder kept and dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildSummary {
	/// Nodes inserted.
	pub nodes: usize,
	/// Nodes skipped because their id was taken.
	pub duplicate_nodes: usize,
	/// Edges inserted.
	pub edges: usize,
	/// Self-loops, dangling and duplicate edges dropped.
	pub skipped_edges: usize,
}

fn present(value: &Option<Scalar>) -> Option<Scalar> {
	value.as_ref().filter(|v| !v.is_blank()).cloned()
}

fn node_attributes(node: &RawNode, random: &mut impl FnMut() -> f64) -> NodeAttributes {
	let kind = NodeKind::parse(node.kind.as_deref());
	let label = node
		.label
		.as_deref()
		.map(str::trim)
		.filter(|l| !l.is_empty())
		.unwrap_or(node.id.as_str())
		.to_string();

	NodeAttributes {
		label,
		shape: Shape::Circle,
		color: color_for_kind(&kind).to_string(),
		size: size_for_kind(&kind),
		kind,
		birth_year: present(&node.birth_year),
		release_year: present(&node.release_year),
		nationality: present(&node.nationality),
		gender: present(&node.gender),
		x: random(),
		y: random(),
	}
}

/// Builds a graph store from raw data, drawing seed positions from `random`
/// (expected to yield values in `[0, 1)`).
pub fn build_graph(data: &GraphData, mut random: impl FnMut() -> f64) -> (GraphStore, BuildSummary) {
	let mut store = GraphStore::new();
	let mut summary = BuildSummary::default();

	for node in &data.nodes {
		if store.add_node(node.id.clone(), node_attributes(node, &mut random)) {
			summary.nodes += 1;
		} else {
			summary.duplicate_nodes += 1;
		}
	}

	for (i, edge) in data.edges.iter().enumerate() {
		if edge.source == edge.target {
			summary.skipped_edges += 1;
			continue;
		}
		match store.add_edge_with_key(format!("e{i}"), &edge.source, &edge.target) {
			Ok(()) => summary.edges += 1,
			Err(_) => summary.skipped_edges += 1,
		}
	}

	debug!(
		"cine-graph: built {} nodes ({} duplicate), {} edges ({} skipped)",
		summary.nodes, summary.duplicate_nodes, summary.edges, summary.skipped_edges
	);

	(store, summary)
}

/// Builds a graph store using the browser's `Math.random` for seed positions.
pub fn build_graph_random(data: &GraphData) -> (GraphStore, BuildSummary) {
	build_graph(data, js_sys::Math::random)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::types::RawEdge;

	fn node(id: &str, label: Option<&str>, kind: &str) -> RawNode {
		RawNode {
			id: id.to_string(),
			label: label.map(str::to_string),
			kind: Some(kind.to_string()),
			birth_year: None,
			release_year: None,
			nationality: None,
			gender: None,
		}
	}

	fn edge(source: &str, target: &str) -> RawEdge {
		RawEdge {
			source: source.to_string(),
			target: target.to_string(),
		}
	}

	fn fixed() -> impl FnMut() -> f64 {
		let mut n = 0.0;
		move || {
			n = (n + 0.37) % 1.0;
			n
		}
	}

	#[test]
	fn jaws_scenario() {
		let data = GraphData {
			nodes: vec![
				node("m1", Some("Jaws"), "Movie"),
				node("a1", Some("Roy Scheider"), "Actor"),
			],
			edges: vec![edge("m1", "a1")],
		};
		let (store, summary) = build_graph(&data, fixed());

		assert_eq!(store.node_count(), 2);
		assert_eq!(store.edge_count(), 1);
		assert_eq!(summary.skipped_edges, 0);
		assert!(store.has_edge("e0"));
	}

	#[test]
	fn shape_is_always_circle() {
		let data = GraphData {
			nodes: vec![
				node("m", None, "Movie"),
				node("d", None, "Director"),
				node("a", None, "Actor"),
				node("x", None, "circle"),
				node("y", None, "square"),
			],
			edges: vec![],
		};
		let (store, _) = build_graph(&data, fixed());

		for (_, attrs) in store.nodes() {
			assert_eq!(attrs.shape.as_str(), "circle");
		}
		assert_eq!(
			store.node_attributes("y").unwrap().kind,
			NodeKind::Other("square".to_string())
		);
	}

	#[test]
	fn visuals_follow_type() {
		let data = GraphData {
			nodes: vec![
				node("m", None, "Movie"),
				node("d", None, "Director"),
				node("a", None, "Actor"),
				node("o", None, "Producer"),
			],
			edges: vec![],
		};
		let (store, _) = build_graph(&data, fixed());
		let get = |id: &str| store.node_attributes(id).unwrap();

		assert_eq!((get("m").size, get("m").color.as_str()), (8.0, MOVIE_COLOR));
		assert_eq!((get("d").size, get("d").color.as_str()), (10.0, DIRECTOR_COLOR));
		assert_eq!((get("a").size, get("a").color.as_str()), (6.0, ACTOR_COLOR));
		assert_eq!((get("o").size, get("o").color.as_str()), (6.0, UNKNOWN_COLOR));
	}

	#[test]
	fn label_falls_back_to_id() {
		let data = GraphData {
			nodes: vec![node("n7", None, "Actor"), node("n8", Some("  "), "Actor")],
			edges: vec![],
		};
		let (store, _) = build_graph(&data, fixed());

		assert_eq!(store.node_attributes("n7").unwrap().label, "n7");
		assert_eq!(store.node_attributes("n8").unwrap().label, "n8");
	}

	#[test]
	fn drops_self_loops_dangling_and_keeps_order_keys() {
		let data = GraphData {
			nodes: vec![node("a", None, "Movie"), node("b", None, "Actor")],
			edges: vec![edge("a", "a"), edge("a", "ghost"), edge("ghost", "b"), edge("a", "b")],
		};
		let (store, summary) = build_graph(&data, fixed());

		assert_eq!(store.edge_count(), 1);
		assert_eq!(summary.skipped_edges, 3);
		assert!(store.has_edge("e3"));
		assert_eq!(store.neighbors("a").collect::<Vec<_>>(), vec!["b"]);
	}

	#[test]
	fn seeds_positions_in_unit_range() {
		let data = GraphData {
			nodes: (0..20).map(|i| node(&format!("n{i}"), None, "Actor")).collect(),
			edges: vec![],
		};
		let (store, _) = build_graph(&data, fixed());

		for (_, attrs) in store.nodes() {
			assert!((0.0..1.0).contains(&attrs.x));
			assert!((0.0..1.0).contains(&attrs.y));
		}
	}

	#[test]
	fn blank_attributes_are_absent() {
		let mut raw = node("a", Some("Someone"), "Actor");
		raw.birth_year = Some(Scalar::Int(1932));
		raw.nationality = Some(Scalar::Text(String::new()));
		let data = GraphData {
			nodes: vec![raw],
			edges: vec![],
		};
		let (store, _) = build_graph(&data, fixed());
		let attrs = store.node_attributes("a").unwrap();

		assert_eq!(attrs.birth_year, Some(Scalar::Int(1932)));
		assert_eq!(attrs.nationality, None);
	}
}
