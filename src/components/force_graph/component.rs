//! Leptos component wrapping the graph canvas.
//!
//! The component creates an HTML canvas element and wires up mouse/wheel event
//! handlers for node clicks, node dragging, panning, and zooming. An animation
//! loop runs via `requestAnimationFrame`, stepping physics and camera and
//! redrawing whenever something changed.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use crate::config::ViewerConfig;
use crate::focus::{CameraCommand, Focus};
use crate::graph::{GraphStore, NodeId};

use super::render;
use super::scale::ScaleConfig;
use super::state::{Click, ForceGraphState};
use super::theme::Theme;

/// Bundles graph simulation state with visual configuration.
struct GraphContext {
	state: ForceGraphState,
	scale: ScaleConfig,
	theme: Theme,
}

type SharedContext = Rc<RefCell<Option<GraphContext>>>;

fn canvas_position(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Size the canvas should take: the viewport when fullscreen, else its parent.
fn target_size(canvas: &HtmlCanvasElement, fullscreen: bool) -> Option<(f64, f64)> {
	if fullscreen {
		web_sys::window().as_ref().and_then(window_size)
	} else {
		canvas
			.parent_element()
			.map(|p| (p.client_width() as f64, p.client_height() as f64))
	}
}

/// Renders the graph store on a canvas element.
///
/// `focus` drives the per-frame highlight reducers and `camera` carries the
/// latest camera request; a new request replaces one still animating. Node and
/// background clicks are reported through `on_node_click` and `on_stage_click`.
/// The component sizes itself to its parent container by default; set
/// `fullscreen = true` to fill the viewport instead. Either way it re-measures
/// on window resize.
#[component]
pub fn ForceGraphCanvas(
	store: Arc<GraphStore>,
	#[prop(into)] focus: Signal<Focus>,
	#[prop(into)] camera: Signal<Option<CameraCommand>>,
	#[prop(into)] on_node_click: Callback<NodeId>,
	#[prop(into)] on_stage_click: Callback<()>,
	#[prop(optional)] config: ViewerConfig,
	#[prop(default = false)] fullscreen: bool,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: SharedContext = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = target_size(&canvas, fullscreen).unwrap_or((800.0, 600.0));
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			log::error!("cine-graph: canvas 2d context unavailable");
			return;
		};

		let mut state = ForceGraphState::new(store.clone(), w, h);
		state.set_focus(focus.get_untracked());
		*context_init.borrow_mut() = Some(GraphContext {
			state,
			scale: ScaleConfig::default(),
			theme: Theme::default(),
		});

		let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some((nw, nh)) = target_size(&canvas_resize, fullscreen) else {
				return;
			};
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.state.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				let dt = 0.016;
				if c.state.tick(dt) {
					render::render(&c.state, &ctx, &c.scale, &c.theme);
				}
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_focus = context.clone();
	Effect::new(move |_| {
		let focus = focus.get();
		if let Some(ref mut c) = *context_focus.borrow_mut() {
			c.state.set_focus(focus);
		}
	});

	let (context_camera, camera_config) = (context.clone(), config);
	Effect::new(move |_| {
		let Some(command) = camera.get() else {
			return;
		};
		if let Some(ref mut c) = *context_camera.borrow_mut() {
			c.state.apply_camera(&command, &camera_config);
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_position(canvas_ref, &ev) else {
			return;
		};

		if let Some(ref mut c) = *context_md.borrow_mut() {
			let hit = c.state.node_at_position(x, y, &c.scale, &c.theme.highlight);
			c.state.begin_press(x, y, hit);
			if let Some(idx) = hit {
				c.state.drag.active = true;
				c.state.drag.node_idx = Some(idx);
				c.state.drag.start_x = x;
				c.state.drag.start_y = y;
				c.state.graph.visit_nodes(|node| {
					if node.index() == idx {
						c.state.drag.node_start_x = node.x();
						c.state.drag.node_start_y = node.y();
					}
				});
			} else {
				c.state.pan.active = true;
				c.state.pan.start_x = x;
				c.state.pan.start_y = y;
				c.state.pan.camera_start = c.state.camera.state();
			}
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_position(canvas_ref, &ev) else {
			return;
		};

		if let Some(ref mut c) = *context_mm.borrow_mut() {
			if c.state.press.active {
				c.state.press.track(x, y);
			}
			// Small jitters during a click must not move anything.
			if !c.state.press.moved {
				return;
			}
			let k = c.state.transform().k;

			if c.state.drag.active {
				if let Some(idx) = c.state.drag.node_idx {
					let (dx, dy) = ((x - c.state.drag.start_x) / k, (y - c.state.drag.start_y) / k);
					let (nx, ny) = (
						c.state.drag.node_start_x + dx as f32,
						c.state.drag.node_start_y + dy as f32,
					);
					c.state.graph.visit_nodes_mut(|node| {
						if node.index() == idx {
							node.data.x = nx;
							node.data.y = ny;
							node.data.is_anchor = true;
						}
					});
					c.state.wake();
				}
			} else if c.state.pan.active {
				let start = c.state.pan.camera_start;
				let mut next = start;
				next.x = start.x - (x - c.state.pan.start_x) / k;
				next.y = start.y - (y - c.state.pan.start_y) / k;
				c.state.camera.set_state(next);
				c.state.refresh();
			}
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |_: MouseEvent| {
		let click = match *context_mu.borrow_mut() {
			Some(ref mut c) => {
				c.state.drag.active = false;
				c.state.drag.node_idx = None;
				c.state.pan.active = false;
				let click = c.state.end_press();
				if let Some(Click::Node(ref id)) = click {
					debug!(
						"cine-graph: clicked {id}: {:?}",
						c.state.store.node_attributes(id)
					);
				}
				click
			}
			None => None,
		};

		// Callbacks run with the context released; they update signals that
		// feed back into it.
		match click {
			Some(Click::Node(id)) => on_node_click.run(id),
			Some(Click::Stage) => on_stage_click.run(()),
			None => {}
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.drag.active = false;
			c.state.drag.node_idx = None;
			c.state.pan.active = false;
			c.state.press = Default::default();
		}
	};

	let context_wh = context.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = canvas_position(canvas_ref, &ev) else {
			return;
		};

		if let Some(ref mut c) = *context_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			let (w, h) = (c.state.width, c.state.height);
			c.state.camera.zoom_at(x, y, factor, w, h);
			c.state.refresh();
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
