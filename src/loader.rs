//! Fetches and parses the static graph description.

use log::info;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::LoadError;
use crate::graph::GraphData;

/// Parse a graph description from JSON text.
pub fn parse_graph_data(json_text: &str) -> Result<GraphData, LoadError> {
	let data: GraphData = serde_json::from_str(json_text)?;
	info!(
		"cine-graph: loaded {} nodes, {} edges",
		data.nodes.len(),
		data.edges.len()
	);
	Ok(data)
}

fn network_error(url: &str, err: JsValue) -> LoadError {
	LoadError::Network {
		url: url.to_string(),
		reason: format!("{err:?}"),
	}
}

/// Fetch the graph description from `url` relative to the current document.
pub async fn fetch_graph_data(url: &str) -> Result<GraphData, LoadError> {
	let window = web_sys::window().ok_or(LoadError::NoWindow)?;

	let response: Response = JsFuture::from(window.fetch_with_str(url))
		.await
		.map_err(|e| network_error(url, e))?
		.dyn_into()
		.map_err(|e| network_error(url, e))?;

	if !response.ok() {
		return Err(LoadError::Status {
			url: url.to_string(),
			status: response.status(),
		});
	}

	let body = response.text().map_err(|e| network_error(url, e))?;
	let text = JsFuture::from(body)
		.await
		.map_err(|e| network_error(url, e))?
		.as_string()
		.ok_or_else(|| LoadError::Network {
			url: url.to_string(),
			reason: "response body is not text".to_string(),
		})?;

	parse_graph_data(&text)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::Scalar;

	#[test]
	fn parses_full_document() {
		let data = parse_graph_data(
			r#"{
				"nodes": [
					{"id": "m1", "label": "Jaws", "type": "Movie", "releaseYear": 1975},
					{"id": "a1", "label": "Roy Scheider", "type": "Actor",
					 "birthYear": "1932", "nationality": "US", "gender": null}
				],
				"edges": [{"source": "m1", "target": "a1"}]
			}"#,
		)
		.unwrap();

		assert_eq!(data.nodes.len(), 2);
		assert_eq!(data.edges.len(), 1);
		assert_eq!(data.nodes[0].kind.as_deref(), Some("Movie"));
		assert_eq!(data.nodes[0].release_year, Some(Scalar::Int(1975)));
		assert_eq!(
			data.nodes[1].birth_year,
			Some(Scalar::Text("1932".to_string()))
		);
		assert_eq!(data.nodes[1].gender, None);
	}

	#[test]
	fn tolerates_missing_optional_fields() {
		let data = parse_graph_data(r#"{"nodes": [{"id": "x"}], "edges": []}"#).unwrap();

		assert_eq!(data.nodes[0].label, None);
		assert_eq!(data.nodes[0].kind, None);
	}

	#[test]
	fn rejects_malformed_json() {
		assert!(matches!(
			parse_graph_data("{\"nodes\": ["),
			Err(LoadError::Parse(_))
		));
	}

	#[test]
	fn rejects_missing_collections() {
		assert!(matches!(
			parse_graph_data(r#"{"nodes": []}"#),
			Err(LoadError::Parse(_))
		));
	}
}
