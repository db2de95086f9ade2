//! Detail panel contents for the committed node.

use std::fmt::Write;

use crate::graph::{GraphStore, NodeKind};

/// Shown while no node is committed.
pub const PLACEHOLDER: &str = "Klicke auf einen Knoten, um Details zu sehen.";

/// One labelled attribute line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelRow {
	/// German attribute name.
	pub label: &'static str,
	/// Attribute value as text.
	pub value: String,
}

/// What the side panel shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelContent {
	/// No committed node.
	Placeholder,
	/// Details of the committed node.
	Node {
		/// Node label.
		title: String,
		/// Semantic type.
		subtitle: String,
		/// Present attributes in fixed order.
		rows: Vec<PanelRow>,
		/// Connected actors, only for movies.
		actor_count: Option<usize>,
	},
}

impl PanelContent {
	/// Build the panel for `node`, or the placeholder when there is none.
	pub fn present(store: &GraphStore, node: Option<&str>) -> Self {
		let Some((id, attrs)) = node.and_then(|id| Some((id, store.node_attributes(id)?))) else {
			return PanelContent::Placeholder;
		};

		let rows = [
			("Geburtsjahr", &attrs.birth_year),
			("Erscheinungsjahr", &attrs.release_year),
			("Nationalität", &attrs.nationality),
			("Geschlecht", &attrs.gender),
		]
		.into_iter()
		.filter_map(|(label, value)| {
			value.as_ref().map(|v| PanelRow {
				label,
				value: v.to_string(),
			})
		})
		.collect();

		let actor_count = (attrs.kind == NodeKind::Movie).then(|| {
			store
				.neighbors(id)
				.filter(|n| {
					store
						.node_attributes(n)
						.is_some_and(|a| a.kind == NodeKind::Actor)
				})
				.count()
		});

		PanelContent::Node {
			title: attrs.label.clone(),
			subtitle: attrs.kind.to_string(),
			rows,
			actor_count,
		}
	}

	/// Render as an HTML fragment. All data-derived text is escaped.
	pub fn to_html(&self) -> String {
		match self {
			PanelContent::Placeholder => {
				format!("<p class=\"placeholder\">{}</p>", escape_html(PLACEHOLDER))
			}
			PanelContent::Node {
				title,
				subtitle,
				rows,
				actor_count,
			} => {
				let mut html = format!(
					"<h2>{}</h2><h3>{}</h3>",
					escape_html(title),
					escape_html(subtitle)
				);
				if !rows.is_empty() {
					html.push_str("<ul>");
					for row in rows {
						let _ = write!(
							html,
							"<li><strong>{}:</strong> {}</li>",
							escape_html(row.label),
							escape_html(&row.value)
						);
					}
					html.push_str("</ul>");
				}
				if let Some(count) = actor_count {
					let _ = write!(html, "<p class=\"connections\">Verbunden mit Actors: {count}</p>");
				}
				html
			}
		}
	}
}

/// Escape text for insertion into HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(c),
		}
	}
	out
}
