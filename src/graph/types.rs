//! Raw graph records as they appear in the JSON input file.

use std::fmt;

use serde::Deserialize;

/// An optional attribute value. The input uses numbers for years but free text
/// elsewhere, and neither is guaranteed, so both forms are accepted.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
	/// Whole number, e.g. a year.
	Int(i64),
	/// Fractional number.
	Float(f64),
	/// Free text.
	Text(String),
}

impl Scalar {
	/// Empty or whitespace-only text counts as absent.
	pub fn is_blank(&self) -> bool {
		matches!(self, Scalar::Text(s) if s.trim().is_empty())
	}
}

impl fmt::Display for Scalar {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Scalar::Int(n) => write!(f, "{n}"),
			Scalar::Float(n) => write!(f, "{n}"),
			Scalar::Text(s) => f.write_str(s),
		}
	}
}

/// A node record.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
	/// Unique identifier. Edges reference nodes by this id.
	pub id: String,
	/// Display name. Falls back to `id` when missing.
	pub label: Option<String>,
	/// Semantic type, e.g. "Movie", "Director" or "Actor".
	#[serde(rename = "type", default)]
	pub kind: Option<String>,
	/// Year of birth, for people.
	pub birth_year: Option<Scalar>,
	/// Year of release, for movies.
	pub release_year: Option<Scalar>,
	/// Free-text nationality.
	pub nationality: Option<Scalar>,
	/// Free-text gender.
	pub gender: Option<Scalar>,
}

/// An undirected connection between two node ids.
#[derive(Clone, Debug, Deserialize)]
pub struct RawEdge {
	/// Id of one endpoint.
	pub source: String,
	/// Id of the other endpoint.
	pub target: String,
}

/// Complete input document: nodes and edges.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphData {
	/// Every node in the data set.
	pub nodes: Vec<RawNode>,
	/// Every edge in the data set.
	pub edges: Vec<RawEdge>,
}
