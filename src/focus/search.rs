//! Free-text lookup of a single node by label.

use crate::graph::GraphStore;

/// Resolve `query` to the best matching node id.
///
/// An exact case-insensitive label match wins over a substring match; within
/// each tier the first node in store order is returned. Blank queries match
/// nothing.
pub fn resolve<'a>(store: &'a GraphStore, query: &str) -> Option<&'a str> {
	let needle = query.trim().to_lowercase();
	if needle.is_empty() {
		return None;
	}

	let mut partial = None;
	for (id, attrs) in store.nodes() {
		let label = attrs.label.to_lowercase();
		if label == needle {
			return Some(id);
		}
		if partial.is_none() && label.contains(&needle) {
			partial = Some(id);
		}
	}
	partial
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{GraphData, RawNode, build_graph};

	fn store(labels: &[(&str, &str)]) -> GraphStore {
		let data = GraphData {
			nodes: labels
				.iter()
				.map(|(id, label)| RawNode {
					id: id.to_string(),
					label: Some(label.to_string()),
					kind: Some("Movie".to_string()),
					birth_year: None,
					release_year: None,
					nationality: None,
					gender: None,
				})
				.collect(),
			edges: vec![],
		};
		build_graph(&data, || 0.5).0
	}

	#[test]
	fn exact_match_beats_earlier_substring() {
		let s = store(&[("m2", "Jaws 2"), ("m1", "Jaws")]);

		assert_eq!(resolve(&s, "jaws"), Some("m1"));
		assert_eq!(resolve(&s, "JAWS 2"), Some("m2"));
	}

	#[test]
	fn substring_is_case_insensitive() {
		let s = store(&[("m1", "Jaws"), ("a1", "Roy Scheider")]);

		assert_eq!(resolve(&s, "scheid"), Some("a1"));
		assert_eq!(resolve(&s, "AW"), Some("m1"));
	}

	#[test]
	fn first_substring_match_in_store_order() {
		let s = store(&[("a", "Alien"), ("b", "Aliens")]);

		assert_eq!(resolve(&s, "lie"), Some("a"));
	}

	#[test]
	fn blank_or_unmatched_query_resolves_to_none() {
		let s = store(&[("m1", "Jaws")]);

		assert_eq!(resolve(&s, ""), None);
		assert_eq!(resolve(&s, "   "), None);
		assert_eq!(resolve(&s, "godfather"), None);
	}

	#[test]
	fn surrounding_whitespace_is_ignored() {
		let s = store(&[("m1", "Jaws")]);

		assert_eq!(resolve(&s, "  jaws "), Some("m1"));
	}
}
