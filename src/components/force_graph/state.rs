//! Graph simulation state and interaction tracking.
//!
//! Wraps the `force_graph` physics simulation around the graph store. The store
//! owns every attribute; the simulation only carries node ids and positions.
//! The camera, current focus and drag/pan gestures live here as well.

use std::collections::HashMap;
use std::sync::Arc;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::warn;

use crate::config::ViewerConfig;
use crate::focus::{CameraCommand, Focus, Highlight, HighlightStyle};
use crate::graph::{GraphStore, NodeId};

use super::camera::{Camera, CameraState, ViewTransform};
use super::scale::{ScaleConfig, ScaledValues};

/// World-space extent over which normalized seed positions are spread.
pub const SEED_SPREAD: f64 = 400.0;

/// Seconds of physics before the layout is frozen.
const SETTLE_AFTER: f64 = 20.0;

/// Per-node data carried by the simulation.
#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	/// Store id of the node.
	pub id: NodeId,
}

/// Tracks an in-progress node drag operation.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	/// A node is being dragged.
	pub active: bool,
	/// Simulation index of the dragged node.
	pub node_idx: Option<DefaultNodeIdx>,
	/// Pointer position when the drag began.
	pub start_x: f64,
	/// Pointer position when the drag began.
	pub start_y: f64,
	/// Node position when the drag began.
	pub node_start_x: f32,
	/// Node position when the drag began.
	pub node_start_y: f32,
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	/// The canvas is being panned.
	pub active: bool,
	/// Pointer position when the pan began.
	pub start_x: f64,
	/// Pointer position when the pan began.
	pub start_y: f64,
	/// Camera when the pan began.
	pub camera_start: CameraState,
}

/// Pointer movement (pixels) below which a press-release counts as a click.
const CLICK_TOLERANCE: f64 = 4.0;

/// Tracks the pointer between mouse down and up to tell clicks from drags.
#[derive(Clone, Debug, Default)]
pub struct PressState {
	/// The pointer is down.
	pub active: bool,
	/// Pointer position at press time.
	pub start_x: f64,
	/// Pointer position at press time.
	pub start_y: f64,
	/// Set once the pointer left the click tolerance.
	pub moved: bool,
	/// Node under the pointer at press time.
	pub node: Option<NodeId>,
}

impl PressState {
	/// Record a pointer move.
	pub fn track(&mut self, x: f64, y: f64) {
		if (x - self.start_x).hypot(y - self.start_y) > CLICK_TOLERANCE {
			self.moved = true;
		}
	}
}

/// Outcome of releasing the pointer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Click {
	/// Click on a node.
	Node(NodeId),
	/// Click on empty canvas.
	Stage,
}

/// Core graph state combining physics simulation with camera, focus and
/// interaction tracking.
///
/// Created once when the component mounts, then mutated each frame by the
/// animation loop.
pub struct ForceGraphState {
	/// Physics simulation.
	pub graph: ForceGraph<NodeInfo, ()>,
	/// Attributes of every node and edge.
	pub store: Arc<GraphStore>,
	/// Viewport.
	pub camera: Camera,
	/// Focus the reducers draw this frame.
	pub focus: Focus,
	/// Node drag gesture.
	pub drag: DragState,
	/// Canvas pan gesture.
	pub pan: PanState,
	/// Click detection.
	pub press: PressState,
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// False once the layout has settled.
	pub animation_running: bool,
	/// Seconds simulated since the last wake.
	pub sim_time: f64,
	needs_redraw: bool,
	index: HashMap<NodeId, DefaultNodeIdx>,
}

impl ForceGraphState {
	/// Seed the simulation from the store.
	pub fn new(store: Arc<GraphStore>, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut index = HashMap::new();

		for (id, attrs) in store.nodes() {
			let idx = graph.add_node(NodeData {
				x: ((attrs.x - 0.5) * SEED_SPREAD) as f32,
				y: ((attrs.y - 0.5) * SEED_SPREAD) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo { id: id.to_string() },
			});
			index.insert(id.to_string(), idx);
		}

		for edge in store.edges() {
			if let (Some(&src), Some(&tgt)) = (index.get(&edge.source), index.get(&edge.target)) {
				graph.add_edge(src, tgt, EdgeData::default());
			}
		}

		Self {
			graph,
			store,
			camera: Camera::default(),
			focus: Focus::None,
			drag: DragState::default(),
			pan: PanState::default(),
			press: PressState::default(),
			width,
			height,
			animation_running: true,
			sim_time: 0.0,
			needs_redraw: true,
			index,
		}
	}

	/// World to screen transform for the current camera.
	pub fn transform(&self) -> ViewTransform {
		self.camera.transform(self.width, self.height)
	}

	/// Convert canvas pixels to world coordinates.
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		self.camera.screen_to_graph(sx, sy, self.width, self.height)
	}

	/// Current simulated position of a node.
	pub fn node_position(&self, id: &str) -> Option<(f64, f64)> {
		let idx = *self.index.get(id)?;
		let mut pos = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				pos = Some((node.x() as f64, node.y() as f64));
			}
		});
		pos
	}

	/// Simulated positions of all nodes keyed by id.
	pub fn positions(&self) -> HashMap<&str, (f64, f64)> {
		let mut by_idx = HashMap::with_capacity(self.index.len());
		self.graph.visit_nodes(|node| {
			by_idx.insert(node.index(), (node.x() as f64, node.y() as f64));
		});
		self.index
			.iter()
			.filter_map(|(id, idx)| Some((id.as_str(), *by_idx.get(idx)?)))
			.collect()
	}

	/// Topmost node under a screen position, as drawn this frame.
	///
	/// Hit radii and stacking come from the focus reducers, so a node enlarged
	/// by the highlight is hit across its whole drawn disc. Overlapping nodes
	/// resolve like the renderer paints them: higher layer first, then later
	/// in store order.
	pub fn node_at_position(
		&self,
		sx: f64,
		sy: f64,
		config: &ScaleConfig,
		style: &HighlightStyle,
	) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let scale = ScaledValues::new(config, self.transform().k);
		let highlight = Highlight::compute(&self.store, self.focus.target(), style);
		let positions = self.positions();

		let (_, _, id) = self
			.store
			.nodes()
			.enumerate()
			.filter_map(|(order, (id, attrs))| {
				let &(x, y) = positions.get(id)?;
				let display = highlight.node(id, attrs);
				let hit_radius = scale.node_radius(display.size) + scale.hit_padding;
				((x - gx).hypot(y - gy) < hit_radius).then_some((display.z_index, order, id))
			})
			.max_by_key(|&(z, order, _)| (z, order))?;
		self.index.get(id).copied()
	}

	/// Store id of a simulation node.
	pub fn node_id(&self, idx: DefaultNodeIdx) -> Option<NodeId> {
		let mut id = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				id = Some(node.data.user_data.id.clone());
			}
		});
		id
	}

	/// Replace the drawn focus and redraw.
	pub fn set_focus(&mut self, focus: Focus) {
		self.focus = focus;
		self.refresh();
	}

	/// Move the camera for a focus change. Unknown node ids are ignored.
	pub fn apply_camera(&mut self, command: &CameraCommand, config: &ViewerConfig) {
		match command {
			CameraCommand::FocusNode(id) => match self.node_position(id) {
				Some((x, y)) => self.camera.animate_to(
					CameraState {
						x,
						y,
						ratio: config.focus_ratio,
					},
					config.camera_duration,
				),
				None => warn!("cine-graph: cannot focus camera on unknown node {id}"),
			},
			CameraCommand::Reset => self.camera.animated_reset(config.camera_duration),
		}
		self.refresh();
	}

	/// Begin a press at a screen position, remembering the node under it.
	pub fn begin_press(&mut self, x: f64, y: f64, node: Option<DefaultNodeIdx>) {
		self.press = PressState {
			active: true,
			start_x: x,
			start_y: y,
			moved: false,
			node: node.and_then(|idx| self.node_id(idx)),
		};
	}

	/// End the press. Returns a click when the pointer barely moved.
	pub fn end_press(&mut self) -> Option<Click> {
		let press = std::mem::take(&mut self.press);
		if !press.active || press.moved {
			return None;
		}
		Some(press.node.map_or(Click::Stage, Click::Node))
	}

	/// Wake the simulation after the user moved a node.
	pub fn wake(&mut self) {
		self.animation_running = true;
		self.sim_time = 0.0;
	}

	/// Request a redraw on the next frame even if nothing is moving.
	pub fn refresh(&mut self) {
		self.needs_redraw = true;
	}

	/// Advance physics and camera. Returns whether the frame must be drawn.
	pub fn tick(&mut self, dt: f32) -> bool {
		let mut dirty = std::mem::take(&mut self.needs_redraw);
		if self.animation_running {
			self.graph.update(dt);
			self.sim_time += dt as f64;
			if self.sim_time > SETTLE_AFTER && !self.drag.active {
				self.animation_running = false;
			}
			dirty = true;
		}
		if self.camera.is_animating() {
			self.camera.update(dt as f64);
			dirty = true;
		}
		dirty
	}

	/// Adopt a new canvas size.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.refresh();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{GraphData, RawEdge, RawNode, build_graph};

	fn raw(id: &str, kind: &str) -> RawNode {
		RawNode {
			id: id.to_string(),
			label: Some(id.to_string()),
			kind: Some(kind.to_string()),
			birth_year: None,
			release_year: None,
			nationality: None,
			gender: None,
		}
	}

	fn build(nodes: Vec<RawNode>, edges: Vec<RawEdge>, seeds: Vec<f64>) -> ForceGraphState {
		let data = GraphData { nodes, edges };
		let mut seeds = seeds.into_iter();
		let (store, _) = build_graph(&data, move || seeds.next().unwrap_or(0.5));
		ForceGraphState::new(Arc::new(store), 800.0, 600.0)
	}

	fn state() -> ForceGraphState {
		build(
			vec![raw("m1", "Movie"), raw("a1", "Actor")],
			vec![RawEdge {
				source: "m1".to_string(),
				target: "a1".to_string(),
			}],
			vec![0.75, 0.25, 0.25, 0.75],
		)
	}

	fn hit(state: &ForceGraphState, sx: f64, sy: f64) -> Option<NodeId> {
		state
			.node_at_position(sx, sy, &ScaleConfig::default(), &HighlightStyle::default())
			.and_then(|idx| state.node_id(idx))
	}

	#[test]
	fn seeds_positions_from_store() {
		let state = state();

		assert_eq!(state.node_position("m1"), Some((100.0, -100.0)));
		assert_eq!(state.node_position("a1"), Some((-100.0, 100.0)));
		assert_eq!(state.node_position("zz"), None);
	}

	#[test]
	fn hit_test_finds_node_under_pointer() {
		let state = state();

		// m1 sits at world (100, -100) -> screen (500, 200) at default framing.
		assert_eq!(hit(&state, 502.0, 198.0), Some("m1".to_string()));
		assert_eq!(hit(&state, 400.0, 300.0), None);
	}

	#[test]
	fn focused_node_is_hit_across_its_drawn_radius() {
		// Lone actor at the world origin, drawn at screen (400, 300).
		let mut state = build(vec![raw("a1", "Actor")], vec![], vec![]);
		let style = HighlightStyle::default();

		// Stored size 6 plus 4px padding does not reach 11px out.
		assert_eq!(hit(&state, 411.0, 300.0), None);

		state.set_focus(Focus::Active("a1".to_string()));
		let drawn = ScaledValues::new(&ScaleConfig::default(), 1.0).node_radius(style.focus_min_size);
		assert_eq!(hit(&state, 400.0 + drawn - 1.0, 300.0), Some("a1".to_string()));

		// Zoomed in, padding shrinks in world units but the drawn disc grows.
		state.camera.set_state(CameraState {
			x: 0.0,
			y: 0.0,
			ratio: 0.5,
		});
		assert_eq!(hit(&state, 400.0 + 2.0 * drawn - 1.0, 300.0), Some("a1".to_string()));
	}

	#[test]
	fn overlapping_nodes_resolve_to_the_one_drawn_on_top() {
		let mut state = build(vec![raw("m1", "Movie"), raw("m2", "Movie")], vec![], vec![]);

		// Same layer: the later node in store order is painted last.
		assert_eq!(hit(&state, 400.0, 300.0), Some("m2".to_string()));

		state.set_focus(Focus::Active("m1".to_string()));
		assert_eq!(hit(&state, 400.0, 300.0), Some("m1".to_string()));
	}

	#[test]
	fn resize_reframes_hit_testing() {
		let mut state = state();

		state.resize(1000.0, 400.0);

		// Default framing keeps the world origin at the new canvas center.
		assert_eq!(state.transform().x, 500.0);
		assert_eq!(state.transform().y, 200.0);
		assert_eq!(hit(&state, 600.0, 100.0), Some("m1".to_string()));
		assert_eq!(hit(&state, 500.0, 200.0), None);
	}

	#[test]
	fn focus_command_targets_node_position() {
		let mut state = state();
		let config = ViewerConfig::default();

		state.apply_camera(&CameraCommand::FocusNode("a1".to_string()), &config);
		state.camera.update(config.camera_duration);

		assert_eq!(
			state.camera.state(),
			CameraState {
				x: -100.0,
				y: 100.0,
				ratio: config.focus_ratio
			}
		);
	}

	#[test]
	fn press_without_movement_is_click() {
		let mut state = state();
		let m1 = state.node_at_position(500.0, 200.0, &ScaleConfig::default(), &HighlightStyle::default());

		state.begin_press(500.0, 200.0, m1);
		state.press.track(501.0, 201.0);
		assert_eq!(state.end_press(), Some(Click::Node("m1".to_string())));

		state.begin_press(10.0, 10.0, None);
		assert_eq!(state.end_press(), Some(Click::Stage));

		state.begin_press(10.0, 10.0, None);
		state.press.track(60.0, 10.0);
		assert_eq!(state.end_press(), None);
	}

	#[test]
	fn set_focus_requests_redraw() {
		let mut state = state();
		state.animation_running = false;
		state.tick(0.016);
		assert!(!state.tick(0.016));

		state.set_focus(Focus::Active("m1".to_string()));
		assert!(state.tick(0.016));
	}
}
