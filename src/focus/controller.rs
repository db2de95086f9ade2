//! Selection and search state driving highlights, the detail panel and the camera.
//!
//! A click or a confirmed search commits a node ("active"). Typing previews a
//! node ("searched") on top of the committed one without replacing it, so the
//! panel keeps showing the committed node until the search is confirmed.

use log::debug;

use crate::graph::{GraphStore, NodeId};

use super::search;

/// Current focus. The searched variant carries the committed node underneath
/// so clearing the preview falls back to it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Focus {
	/// Nothing selected or previewed.
	#[default]
	None,
	/// Committed node from a click or a confirmed search.
	Active(NodeId),
	/// Live search preview.
	Searched {
		/// Best match for the current query.
		node: NodeId,
		/// Committed node underneath the preview.
		active: Option<NodeId>,
	},
}

impl Focus {
	/// Node to highlight: the search preview if any, else the committed node.
	pub fn target(&self) -> Option<&str> {
		match self {
			Focus::None => None,
			Focus::Active(id) => Some(id.as_str()),
			Focus::Searched { node, .. } => Some(node.as_str()),
		}
	}

	/// Committed node shown in the detail panel.
	pub fn active(&self) -> Option<&str> {
		match self {
			Focus::None => None,
			Focus::Active(id) => Some(id.as_str()),
			Focus::Searched { active, .. } => active.as_deref(),
		}
	}

	/// Live search preview, if one is showing.
	pub fn searched(&self) -> Option<&str> {
		match self {
			Focus::Searched { node, .. } => Some(node.as_str()),
			_ => None,
		}
	}

	fn from_active(active: Option<NodeId>) -> Self {
		active.map_or(Focus::None, Focus::Active)
	}
}

/// Camera movement requested by a focus change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CameraCommand {
	/// Animate to the node's current position.
	FocusNode(NodeId),
	/// Animate back to the default framing.
	Reset,
}

/// What cleared the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearKind {
	/// Click on empty canvas. Camera stays where it is.
	Stage,
	/// Explicit reset control. Camera returns to the default framing.
	Reset,
}

/// Focus state plus the contents of the search field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FocusController {
	focus: Focus,
	search_text: String,
}

impl FocusController {
	/// Empty focus and search field.
	pub fn new() -> Self {
		Self::default()
	}

	/// Current focus.
	pub fn focus(&self) -> &Focus {
		&self.focus
	}

	/// Current contents of the search field.
	pub fn search_text(&self) -> &str {
		&self.search_text
	}

	/// Commit `id` as the active node and clear any search.
	pub fn select_by_click(&mut self, id: &str) -> Option<CameraCommand> {
		debug!("cine-graph: select {id}");
		self.search_text.clear();
		self.focus = Focus::Active(id.to_string());
		Some(CameraCommand::FocusNode(id.to_string()))
	}

	/// Drop both the committed node and any preview.
	pub fn clear_selection(&mut self, kind: ClearKind) -> Option<CameraCommand> {
		self.search_text.clear();
		self.focus = Focus::None;
		match kind {
			ClearKind::Stage => None,
			ClearKind::Reset => Some(CameraCommand::Reset),
		}
	}

	/// Preview the best match for `query` without committing it.
	pub fn update_search_text(
		&mut self,
		store: &GraphStore,
		query: &str,
	) -> Option<CameraCommand> {
		self.search_text = query.to_string();
		let active = self.focus.active().map(str::to_string);

		match search::resolve(store, query) {
			Some(id) => {
				self.focus = Focus::Searched {
					node: id.to_string(),
					active,
				};
				Some(CameraCommand::FocusNode(id.to_string()))
			}
			None => {
				self.focus = Focus::from_active(active);
				None
			}
		}
	}

	/// Commit the best match for `query`. Leaves state untouched when nothing matches.
	pub fn confirm_search(&mut self, store: &GraphStore, query: &str) -> Option<CameraCommand> {
		let id = search::resolve(store, query)?;
		self.select_by_click(id)
	}

	/// Center the camera on the focused node, or the default framing when
	/// nothing is focused.
	pub fn recenter(&self) -> CameraCommand {
		match self.focus.target() {
			Some(id) => CameraCommand::FocusNode(id.to_string()),
			None => CameraCommand::Reset,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{GraphData, RawEdge, RawNode, build_graph};

	fn raw(id: &str, label: &str, kind: &str) -> RawNode {
		RawNode {
			id: id.to_string(),
			label: Some(label.to_string()),
			kind: Some(kind.to_string()),
			birth_year: None,
			release_year: None,
			nationality: None,
			gender: None,
		}
	}

	fn jaws() -> GraphStore {
		let data = GraphData {
			nodes: vec![
				raw("m1", "Jaws", "Movie"),
				raw("a1", "Roy Scheider", "Actor"),
				raw("m2", "Sorcerer", "Movie"),
			],
			edges: vec![RawEdge {
				source: "m1".to_string(),
				target: "a1".to_string(),
			}],
		};
		build_graph(&data, || 0.25).0
	}

	#[test]
	fn click_sets_active_and_clears_search() {
		let store = jaws();
		let mut fc = FocusController::new();
		fc.update_search_text(&store, "sorc");

		let cmd = fc.select_by_click("m1");

		assert_eq!(fc.focus(), &Focus::Active("m1".to_string()));
		assert_eq!(fc.search_text(), "");
		assert_eq!(cmd, Some(CameraCommand::FocusNode("m1".to_string())));
	}

	#[test]
	fn typing_previews_without_touching_active() {
		let store = jaws();
		let mut fc = FocusController::new();
		fc.select_by_click("m2");

		let cmd = fc.update_search_text(&store, "jaws");

		assert_eq!(fc.focus().target(), Some("m1"));
		assert_eq!(fc.focus().searched(), Some("m1"));
		assert_eq!(fc.focus().active(), Some("m2"));
		assert_eq!(fc.search_text(), "jaws");
		assert_eq!(cmd, Some(CameraCommand::FocusNode("m1".to_string())));
	}

	#[test]
	fn unmatched_search_falls_back_to_active() {
		let store = jaws();
		let mut fc = FocusController::new();
		fc.select_by_click("m2");
		fc.update_search_text(&store, "jaws");

		let cmd = fc.update_search_text(&store, "jawsx");

		assert_eq!(fc.focus(), &Focus::Active("m2".to_string()));
		assert_eq!(cmd, None);
	}

	#[test]
	fn unmatched_search_without_selection_is_empty() {
		let store = jaws();
		let mut fc = FocusController::new();

		assert_eq!(fc.update_search_text(&store, "nothing"), None);
		assert_eq!(fc.focus(), &Focus::None);
	}

	#[test]
	fn confirm_promotes_match() {
		let store = jaws();
		let mut fc = FocusController::new();
		fc.update_search_text(&store, "roy");

		let cmd = fc.confirm_search(&store, "roy");

		assert_eq!(fc.focus(), &Focus::Active("a1".to_string()));
		assert_eq!(fc.search_text(), "");
		assert_eq!(cmd, Some(CameraCommand::FocusNode("a1".to_string())));
	}

	#[test]
	fn confirm_without_match_changes_nothing() {
		let store = jaws();
		let mut fc = FocusController::new();
		fc.select_by_click("m1");
		fc.update_search_text(&store, "zzz");
		let before = fc.clone();

		assert_eq!(fc.confirm_search(&store, "zzz"), None);
		assert_eq!(fc, before);
	}

	#[test]
	fn stage_click_clears_everything_and_keeps_camera() {
		let store = jaws();
		let mut fc = FocusController::new();
		fc.select_by_click("m1");
		fc.update_search_text(&store, "sorc");

		let cmd = fc.clear_selection(ClearKind::Stage);

		assert_eq!(fc.focus(), &Focus::None);
		assert_eq!(fc.focus().active(), None);
		assert_eq!(fc.focus().searched(), None);
		assert_eq!(fc.search_text(), "");
		assert_eq!(cmd, None);
	}

	#[test]
	fn reset_also_resets_camera() {
		let mut fc = FocusController::new();
		fc.select_by_click("m1");

		assert_eq!(fc.clear_selection(ClearKind::Reset), Some(CameraCommand::Reset));
		assert_eq!(fc.focus(), &Focus::None);
	}

	#[test]
	fn recenter_follows_focus_target() {
		let store = jaws();
		let mut fc = FocusController::new();
		assert_eq!(fc.recenter(), CameraCommand::Reset);

		fc.select_by_click("m2");
		assert_eq!(fc.recenter(), CameraCommand::FocusNode("m2".to_string()));

		fc.update_search_text(&store, "jaws");
		assert_eq!(fc.recenter(), CameraCommand::FocusNode("m1".to_string()));
	}
}
