//! In-memory undirected graph holding node and edge attribute bags.
//!
//! Nodes and edges keep insertion order so iteration (and therefore "first match"
//! lookups) is stable across frames.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::error::StoreError;

use super::types::Scalar;

/// Node identifier as given in the input file.
pub type NodeId = String;

/// Semantic node type from the input `type` field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
	/// A film.
	Movie,
	/// Directed at least one movie.
	Director,
	/// Appeared in at least one movie.
	Actor,
	/// Any other value, kept verbatim for display.
	Other(String),
}

impl NodeKind {
	/// Classify a raw `type` value. Missing types become `Other("")`.
	pub fn parse(raw: Option<&str>) -> Self {
		match raw.map(str::trim) {
			Some("Movie") => NodeKind::Movie,
			Some("Director") => NodeKind::Director,
			Some("Actor") => NodeKind::Actor,
			Some(other) => NodeKind::Other(other.to_string()),
			None => NodeKind::Other(String::new()),
		}
	}

	/// Type name as it appears in the data.
	pub fn as_str(&self) -> &str {
		match self {
			NodeKind::Movie => "Movie",
			NodeKind::Director => "Director",
			NodeKind::Actor => "Actor",
			NodeKind::Other(s) => s,
		}
	}
}

impl fmt::Display for NodeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Shape marker read by the renderer. Only circles are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Shape {
	/// Filled disc.
	#[default]
	Circle,
}

impl Shape {
	/// Renderer shape name.
	pub fn as_str(self) -> &'static str {
		match self {
			Shape::Circle => "circle",
		}
	}
}

/// Stored attributes of a node.
///
/// `shape` is the renderer's marker and `kind` is the domain type; they are
/// separate fields so domain data can never replace the shape.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeAttributes {
	/// Display name.
	pub label: String,
	/// Renderer shape, always a circle.
	pub shape: Shape,
	/// Semantic type.
	pub kind: NodeKind,
	/// Shown as "Geburtsjahr".
	pub birth_year: Option<Scalar>,
	/// Shown as "Erscheinungsjahr".
	pub release_year: Option<Scalar>,
	/// Shown as "Nationalität".
	pub nationality: Option<Scalar>,
	/// Shown as "Geschlecht".
	pub gender: Option<Scalar>,
	/// Seed position in `[0, 1)`, assigned once at load.
	pub x: f64,
	/// Seed position in `[0, 1)`, assigned once at load.
	pub y: f64,
	/// Base size in world units.
	pub size: f64,
	/// CSS color string (e.g. "#4c72b0").
	pub color: String,
}

/// Stored attributes of an edge.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeAttributes {
	/// Unique edge key.
	pub key: String,
	/// One endpoint. Edges are undirected.
	pub source: NodeId,
	/// The other endpoint.
	pub target: NodeId,
	/// Stored stroke color.
	pub color: String,
	/// Stored line width.
	pub size: f64,
}

/// Stroke of edges outside any highlight.
pub const DEFAULT_EDGE_COLOR: &str = "#8ca0b4";
/// Width of edges outside any highlight.
pub const DEFAULT_EDGE_SIZE: f64 = 1.0;

struct StoredNode {
	id: NodeId,
	attrs: NodeAttributes,
	neighbors: Vec<usize>,
}

/// Undirected graph keyed by node id and edge key.
#[derive(Default)]
pub struct GraphStore {
	nodes: Vec<StoredNode>,
	index: HashMap<NodeId, usize>,
	edges: Vec<EdgeAttributes>,
	edge_keys: HashSet<String>,
}

impl GraphStore {
	/// Empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a node. Returns `false` and leaves the existing node untouched when
	/// the id is already present.
	pub fn add_node(&mut self, id: impl Into<NodeId>, attrs: NodeAttributes) -> bool {
		let id = id.into();
		if self.index.contains_key(&id) {
			return false;
		}
		self.index.insert(id.clone(), self.nodes.len());
		self.nodes.push(StoredNode {
			id,
			attrs,
			neighbors: Vec::new(),
		});
		true
	}

	/// Adds an undirected edge under a unique key between two existing nodes.
	pub fn add_edge_with_key(
		&mut self,
		key: impl Into<String>,
		source: &str,
		target: &str,
	) -> Result<(), StoreError> {
		let key = key.into();
		if self.edge_keys.contains(&key) {
			return Err(StoreError::DuplicateEdge(key));
		}
		let src = self.position(source)?;
		let tgt = self.position(target)?;

		if !self.nodes[src].neighbors.contains(&tgt) {
			self.nodes[src].neighbors.push(tgt);
		}
		if !self.nodes[tgt].neighbors.contains(&src) {
			self.nodes[tgt].neighbors.push(src);
		}
		self.edge_keys.insert(key.clone());
		self.edges.push(EdgeAttributes {
			key,
			source: source.to_string(),
			target: target.to_string(),
			color: DEFAULT_EDGE_COLOR.to_string(),
			size: DEFAULT_EDGE_SIZE,
		});
		Ok(())
	}

	fn position(&self, id: &str) -> Result<usize, StoreError> {
		self.index
			.get(id)
			.copied()
			.ok_or_else(|| StoreError::MissingNode(id.to_string()))
	}

	/// Whether a node with `id` exists.
	pub fn has_node(&self, id: &str) -> bool {
		self.index.contains_key(id)
	}

	/// Whether an edge with `key` exists.
	pub fn has_edge(&self, key: &str) -> bool {
		self.edge_keys.contains(key)
	}

	/// Attributes of node `id`.
	pub fn node_attributes(&self, id: &str) -> Option<&NodeAttributes> {
		self.index.get(id).map(|&i| &self.nodes[i].attrs)
	}

	/// Ids of all nodes sharing an edge with `id`, each listed once.
	pub fn neighbors<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a str> + 'a {
		self.index
			.get(id)
			.into_iter()
			.flat_map(move |&i| self.nodes[i].neighbors.iter())
			.map(move |&n| self.nodes[n].id.as_str())
	}

	/// All nodes with their attributes, in insertion order.
	pub fn nodes(&self) -> impl Iterator<Item = (&str, &NodeAttributes)> {
		self.nodes.iter().map(|n| (n.id.as_str(), &n.attrs))
	}

	/// All edges in insertion order.
	pub fn edges(&self) -> impl Iterator<Item = &EdgeAttributes> {
		self.edges.iter()
	}

	/// Number of nodes.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Number of edges.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}
}
