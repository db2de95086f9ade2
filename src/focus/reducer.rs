//! Per-frame visual overrides for nodes and edges.
//!
//! The renderer asks these reducers for every node and edge on every frame.
//! They read stored attributes and the current focus and return what to draw;
//! the store itself is never touched, so dropping focus restores the stored look.

use std::collections::HashSet;

use crate::graph::{EdgeAttributes, GraphStore, NodeAttributes};

/// Overrides applied while a node is focused.
#[derive(Clone, Debug, PartialEq)]
pub struct HighlightStyle {
	/// Fill of the focused node.
	pub focus_color: String,
	/// Minimum size of the focused node.
	pub focus_min_size: f64,
	/// Minimum size of the focused node's neighbors.
	pub neighbor_min_size: f64,
	/// Fill of every node outside the highlight set.
	pub dim_color: String,
	/// Color of edges touching the focused node.
	pub edge_color: String,
	/// Width multiplier of edges touching the focused node.
	pub edge_size_factor: f64,
}

impl Default for HighlightStyle {
	fn default() -> Self {
		Self {
			focus_color: "#e15759".to_string(),
			focus_min_size: 12.0,
			neighbor_min_size: 9.0,
			dim_color: "#4b5563".to_string(),
			edge_color: "#e0e0e0".to_string(),
			edge_size_factor: 2.0,
		}
	}
}

/// Stacking order, drawn low to high.
pub const Z_BASE: u8 = 0;
/// Direct neighbors of the focused node.
pub const Z_NEIGHBOR: u8 = 1;
/// The focused node.
pub const Z_FOCUS: u8 = 2;

/// How a node is drawn this frame.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeDisplay<'a> {
	/// `None` suppresses the label.
	pub label: Option<&'a str>,
	/// CSS fill or stroke color.
	pub color: &'a str,
	/// Size in world units.
	pub size: f64,
	/// Draw layer, higher on top.
	pub z_index: u8,
}

impl<'a> NodeDisplay<'a> {
	/// Stored attributes, unmodified.
	pub fn stored(attrs: &'a NodeAttributes) -> Self {
		Self {
			label: Some(&attrs.label),
			color: &attrs.color,
			size: attrs.size,
			z_index: Z_BASE,
		}
	}
}

/// How an edge is drawn this frame.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeDisplay<'a> {
	/// Skip the edge this frame.
	pub hidden: bool,
	/// CSS stroke color.
	pub color: &'a str,
	/// Line width multiplier.
	pub size: f64,
}

impl<'a> EdgeDisplay<'a> {
	/// Stored attributes, unmodified.
	pub fn stored(attrs: &'a EdgeAttributes) -> Self {
		Self {
			hidden: false,
			color: &attrs.color,
			size: attrs.size,
		}
	}
}

/// Highlight set for one frame: the focused node and its direct neighbors.
pub struct Highlight<'a> {
	focus: Option<&'a str>,
	neighbors: HashSet<&'a str>,
	style: &'a HighlightStyle,
}

impl<'a> Highlight<'a> {
	/// Capture the highlight set for `focus`. Ids missing from the store
	/// behave like no focus.
	pub fn compute(store: &'a GraphStore, focus: Option<&'a str>, style: &'a HighlightStyle) -> Self {
		let focus = focus.filter(|id| store.has_node(id));
		let neighbors = focus
			.map(|id| store.neighbors(id).collect())
			.unwrap_or_default();
		Self {
			focus,
			neighbors,
			style,
		}
	}

	/// Focused node, if it exists in the store.
	pub fn focus(&self) -> Option<&'a str> {
		self.focus
	}

	/// Whether `id` shares an edge with the focused node.
	pub fn is_neighbor(&self, id: &str) -> bool {
		self.neighbors.contains(id)
	}

	/// Node reducer.
	pub fn node(&self, id: &str, attrs: &'a NodeAttributes) -> NodeDisplay<'a> {
		let Some(focus) = self.focus else {
			return NodeDisplay::stored(attrs);
		};

		if id == focus {
			NodeDisplay {
				label: Some(&attrs.label),
				color: &self.style.focus_color,
				size: attrs.size.max(self.style.focus_min_size),
				z_index: Z_FOCUS,
			}
		} else if self.is_neighbor(id) {
			NodeDisplay {
				label: Some(&attrs.label),
				color: &attrs.color,
				size: attrs.size.max(self.style.neighbor_min_size),
				z_index: Z_NEIGHBOR,
			}
		} else {
			NodeDisplay {
				label: None,
				color: &self.style.dim_color,
				size: attrs.size,
				z_index: Z_BASE,
			}
		}
	}

	/// Edge reducer. Only edges joining the focused node to a neighbor stay visible.
	pub fn edge(&self, attrs: &'a EdgeAttributes) -> EdgeDisplay<'a> {
		let Some(focus) = self.focus else {
			return EdgeDisplay::stored(attrs);
		};

		let (src, tgt) = (attrs.source.as_str(), attrs.target.as_str());
		let touches = (src == focus && self.is_neighbor(tgt)) || (tgt == focus && self.is_neighbor(src));
		if touches {
			EdgeDisplay {
				hidden: false,
				color: &self.style.edge_color,
				size: attrs.size * self.style.edge_size_factor,
			}
		} else {
			EdgeDisplay {
				hidden: true,
				color: &attrs.color,
				size: attrs.size,
			}
		}
	}
}
