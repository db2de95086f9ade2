//! Zoom-dependent scaling configuration for graph visuals.
//!
//! # Coordinate Spaces
//!
//! - **World-space**: The coordinate system of the graph. Values in world-space
//!   scale proportionally with zoom (appear larger when zoomed in).
//! - **Screen-space**: Pixel coordinates on the canvas. Values in screen-space
//!   remain constant regardless of zoom level.
//!
//! Node sizes come from the reducers in world units; this module decides how
//! they, the edges and the labels react to the current zoom factor `k`.

/// Defines how a visual property scales with zoom level.
#[derive(Clone, Debug)]
pub enum ScaleBehavior {
	/// Constant screen-space size (pixels). Unaffected by zoom.
	Screen,
	/// World-space scaling, clamped to screen-space bounds.
	Clamped {
		/// Smallest on-screen size in pixels.
		min_screen: f64,
		/// Largest on-screen size in pixels; `f64::INFINITY` for unbounded.
		max_screen: f64,
	},
}

impl ScaleBehavior {
	/// Compute the world-space value for a given base value and zoom level.
	pub fn apply(&self, base: f64, k: f64) -> f64 {
		match self {
			ScaleBehavior::Screen => base / k,
			ScaleBehavior::Clamped {
				min_screen,
				max_screen,
			} => base.clamp(min_screen / k, max_screen / k),
		}
	}
}

/// Defines how alpha/opacity scales with zoom level.
#[derive(Clone, Debug)]
pub enum AlphaBehavior {
	/// Constant alpha regardless of zoom.
	Constant,
	/// Fully visible at `full_alpha_k`, fades to zero at `zero_alpha_k`.
	Fade {
		/// Zoom at which the value is fully transparent.
		zero_alpha_k: f64,
		/// Zoom at which the value is fully opaque.
		full_alpha_k: f64,
	},
}

impl AlphaBehavior {
	/// Compute alpha multiplier for a given zoom level.
	pub fn apply(&self, k: f64) -> f64 {
		match self {
			AlphaBehavior::Constant => 1.0,
			AlphaBehavior::Fade {
				zero_alpha_k,
				full_alpha_k,
			} => {
				if zero_alpha_k == full_alpha_k {
					return 1.0;
				}
				let t = (k - zero_alpha_k) / (full_alpha_k - zero_alpha_k);
				t.clamp(0.0, 1.0)
			}
		}
	}
}

/// Configuration for node visual scaling.
#[derive(Clone, Debug)]
pub struct NodeScaleConfig {
	/// Multiplier from reducer size to world-space radius.
	pub radius_factor: f64,
	/// How the node radius scales with zoom.
	pub radius_behavior: ScaleBehavior,
	/// Extra hit area around each node.
	pub hit_padding: f64,
	/// How hit padding scales with zoom.
	pub hit_behavior: ScaleBehavior,
	/// Label font size in screen pixels.
	pub label_size: f64,
	/// Minimum zoom level for label font scaling.
	pub label_min_k: f64,
	/// How label visibility changes when zooming out.
	pub label_alpha_behavior: AlphaBehavior,
}

/// Configuration for edge visual scaling.
#[derive(Clone, Debug)]
pub struct EdgeScaleConfig {
	/// Line width per unit of reducer size.
	pub line_width: f64,
	/// How line width scales with zoom.
	pub width_behavior: ScaleBehavior,
	/// How edge alpha scales with zoom.
	pub alpha_behavior: AlphaBehavior,
}

/// Complete scale configuration for all graph elements.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	/// Node radius, hit area and labels.
	pub node: NodeScaleConfig,
	/// Edge width and opacity.
	pub edge: EdgeScaleConfig,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			node: NodeScaleConfig {
				radius_factor: 1.0,
				radius_behavior: ScaleBehavior::Clamped {
					min_screen: 2.0,
					max_screen: f64::INFINITY,
				},
				hit_padding: 4.0,
				hit_behavior: ScaleBehavior::Screen,
				label_size: 12.0,
				label_min_k: 0.5,
				label_alpha_behavior: AlphaBehavior::Fade {
					zero_alpha_k: 0.25,
					full_alpha_k: 0.6,
				},
			},
			edge: EdgeScaleConfig {
				line_width: 1.0,
				width_behavior: ScaleBehavior::Screen,
				alpha_behavior: AlphaBehavior::Constant,
			},
		}
	}
}

/// Pre-computed scale values for a specific zoom level.
///
/// Create this once per frame and pass it to rendering functions.
/// All sizes are in world-space (ready to use after canvas transform).
#[derive(Clone, Debug)]
pub struct ScaledValues {
	/// Current zoom level.
	pub k: f64,
	radius_factor: f64,
	radius_behavior: ScaleBehavior,
	/// Hit padding in world-space.
	pub hit_padding: f64,
	/// Label font size string (e.g., "12px sans-serif").
	pub label_font: String,
	/// Label alpha multiplier [0, 1].
	pub label_alpha: f64,
	/// Edge line width in world-space for a reducer size of 1.
	pub edge_line_width: f64,
	/// Edge alpha multiplier [0, 1].
	pub edge_alpha: f64,
}

impl ScaledValues {
	/// Compute scaled values from configuration and current zoom level.
	pub fn new(config: &ScaleConfig, k: f64) -> Self {
		let label_font_size = config.node.label_size / k.max(config.node.label_min_k);

		Self {
			k,
			radius_factor: config.node.radius_factor,
			radius_behavior: config.node.radius_behavior.clone(),
			hit_padding: config.node.hit_behavior.apply(config.node.hit_padding, k),
			label_font: format!("{}px sans-serif", label_font_size),
			label_alpha: config.node.label_alpha_behavior.apply(k),
			edge_line_width: config.edge.width_behavior.apply(config.edge.line_width, k),
			edge_alpha: config.edge.alpha_behavior.apply(k),
		}
	}

	/// World-space radius for a node of reducer size `size`.
	pub fn node_radius(&self, size: f64) -> f64 {
		self.radius_behavior.apply(size * self.radius_factor, self.k)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clamped_radius_keeps_minimum_screen_size() {
		let scale = ScaledValues::new(&ScaleConfig::default(), 0.1);

		// 6 world units at k=0.1 would be 0.6px on screen; clamp to 2px.
		assert!((scale.node_radius(6.0) * scale.k - 2.0).abs() < 1e-9);
	}

	#[test]
	fn behaviors_map_screen_bounds_into_world() {
		assert_eq!(ScaleBehavior::Screen.apply(1.0, 2.0), 0.5);
		let clamped = ScaleBehavior::Clamped {
			min_screen: 2.0,
			max_screen: 8.0,
		};
		assert_eq!(clamped.apply(6.0, 2.0), 4.0);
		assert_eq!(clamped.apply(6.0, 0.5), 6.0);
	}

	#[test]
	fn labels_fade_when_zoomed_out() {
		let config = ScaleConfig::default();

		assert_eq!(ScaledValues::new(&config, 1.0).label_alpha, 1.0);
		assert_eq!(ScaledValues::new(&config, 0.2).label_alpha, 0.0);
	}
}
