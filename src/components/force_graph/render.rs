//! Canvas rendering for the force graph.
//!
//! Every frame the focus reducers decide how each node and edge looks; this
//! module only draws what they return. Passes, bottom to top:
//! 1. Background (screen space)
//! 2. Visible edges (world space)
//! 3. Nodes in ascending z-order, each followed by its label

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::focus::{Highlight, NodeDisplay};

use super::camera::ViewTransform;
use super::scale::{ScaleConfig, ScaledValues};
use super::state::ForceGraphState;
use super::theme::{Color, Theme};

/// Renders the complete graph to the canvas.
pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, config: &ScaleConfig, theme: &Theme) {
	let transform = state.transform();
	let scale = ScaledValues::new(config, transform.k);
	let highlight = Highlight::compute(&state.store, state.focus.target(), &theme.highlight);

	draw_background(state, ctx, theme);

	ctx.save();
	let _ = ctx.translate(transform.x, transform.y);
	let _ = ctx.scale(transform.k, transform.k);

	draw_edges(state, ctx, &scale, &highlight);
	draw_nodes(state, ctx, &scale, theme, &highlight, &transform);

	ctx.restore();

	if theme.background.vignette > 0.0 {
		draw_vignette(state, ctx, theme);
	}
}

fn draw_background(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	if theme.background.use_gradient {
		if let Ok(gradient) = ctx.create_radial_gradient(
			state.width / 2.0,
			state.height / 2.0,
			0.0,
			state.width / 2.0,
			state.height / 2.0,
			(state.width.max(state.height)) * 0.8,
		) {
			let _ = gradient.add_color_stop(0.0, &theme.background.color_secondary.to_css());
			let _ = gradient.add_color_stop(1.0, &theme.background.color.to_css());

			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
	} else {
		ctx.set_fill_style_str(&theme.background.color.to_css());
	}

	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_vignette(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let Ok(gradient) = ctx.create_radial_gradient(
		state.width / 2.0,
		state.height / 2.0,
		state.width.min(state.height) * 0.3,
		state.width / 2.0,
		state.height / 2.0,
		state.width.max(state.height) * 0.7,
	) else {
		return;
	};

	let _ = gradient.add_color_stop(0.0, "rgba(0, 0, 0, 0)");
	let _ = gradient.add_color_stop(1.0, &format!("rgba(0, 0, 0, {})", theme.background.vignette));

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_edges(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	highlight: &Highlight<'_>,
) {
	let positions = state.positions();

	for attrs in state.store.edges() {
		let display = highlight.edge(attrs);
		if display.hidden {
			continue;
		}
		let (Some(&(x1, y1)), Some(&(x2, y2))) = (
			positions.get(attrs.source.as_str()),
			positions.get(attrs.target.as_str()),
		) else {
			continue;
		};

		let color = Color::parse(display.color);
		ctx.set_stroke_style_str(&color.with_alpha(color.a * scale.edge_alpha).to_css());
		ctx.set_line_width(scale.edge_line_width * display.size);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
}

fn draw_nodes(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
	highlight: &Highlight<'_>,
	transform: &ViewTransform,
) {
	let positions = state.positions();
	let mut nodes: Vec<(NodeDisplay<'_>, f64, f64)> = state
		.store
		.nodes()
		.filter_map(|(id, attrs)| {
			let &(x, y) = positions.get(id)?;
			Some((highlight.node(id, attrs), x, y))
		})
		.collect();
	// Stable sort keeps store order within a layer.
	nodes.sort_by_key(|(display, _, _)| display.z_index);

	for (display, x, y) in &nodes {
		let radius = scale.node_radius(display.size);
		draw_node(ctx, *x, *y, radius, display.color, scale, theme);

		if let Some(label) = display.label {
			// Focused nodes keep their label even when zoomed far out.
			let alpha = if display.z_index > 0 { 1.0 } else { scale.label_alpha };
			if alpha > 0.01 {
				draw_label(ctx, label, *x + radius + 4.0 / transform.k, *y, alpha, scale, theme);
			}
		}
	}
}

fn draw_node(
	ctx: &CanvasRenderingContext2d,
	x: f64,
	y: f64,
	radius: f64,
	color: &str,
	scale: &ScaledValues,
	theme: &Theme,
) {
	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);

	match theme
		.node
		.use_gradient
		.then(|| ctx.create_radial_gradient(x - radius * 0.3, y - radius * 0.3, 0.0, x, y, radius).ok())
		.flatten()
	{
		Some(gradient) => {
			let base_color = Color::parse(color);
			let _ = gradient.add_color_stop(0.0, &base_color.lighten(0.4).to_css());
			let _ = gradient.add_color_stop(0.7, &base_color.to_css());
			let _ = gradient.add_color_stop(1.0, &base_color.darken(0.2).to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		None => ctx.set_fill_style_str(color),
	}
	ctx.fill();

	if theme.node.border_width > 0.0 {
		ctx.set_stroke_style_str(&theme.node.border_color.to_css());
		ctx.set_line_width(theme.node.border_width / scale.k);
		ctx.stroke();
	}
}

fn draw_label(
	ctx: &CanvasRenderingContext2d,
	label: &str,
	x: f64,
	y: f64,
	alpha: f64,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let color = theme.node.label_color;
	ctx.set_fill_style_str(&color.with_alpha(color.a * alpha).to_css());
	ctx.set_font(&scale.label_font);
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text(label, x, y);
}
