//! Visual theming for the graph canvas.
//!
//! Provides colors, gradients, and the highlight style applied by the focus reducers.

use crate::focus::HighlightStyle;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in [0, 1].
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with alpha in [0, 1].
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color, different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	/// CSS string, hex when opaque.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// Parses a CSS color string.
	/// Supports hex (`#RRGGBB`, `#RGB`) and `rgb()`/`rgba()` functional notation;
	/// anything else becomes mid gray.
	pub fn parse(color_str: &str) -> Color {
		let hex = |s: &str| u8::from_str_radix(s, 16).unwrap_or(128);
		if color_str.starts_with('#') && color_str.len() == 7 {
			Color::rgb(
				hex(&color_str[1..3]),
				hex(&color_str[3..5]),
				hex(&color_str[5..7]),
			)
		} else if color_str.starts_with('#') && color_str.len() == 4 {
			let digit = |i: usize| hex(&color_str[i..i + 1]).saturating_mul(17);
			Color::rgb(digit(1), digit(2), digit(3))
		} else if color_str.starts_with("rgb") {
			let nums: Vec<&str> = color_str
				.trim_start_matches("rgba(")
				.trim_start_matches("rgb(")
				.trim_end_matches(')')
				.split(',')
				.collect();
			let channel = |i: usize| {
				nums.get(i)
					.and_then(|s| s.trim().parse().ok())
					.unwrap_or(128)
			};
			let a = nums
				.get(3)
				.and_then(|s| s.trim().parse().ok())
				.unwrap_or(1.0);
			Color::rgba(channel(0), channel(1), channel(2), a)
		} else {
			Color::rgb(128, 128, 128)
		}
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Primary background color
	pub color: Color,
	/// Secondary color for gradients
	pub color_secondary: Color,
	/// Whether to use radial gradient
	pub use_gradient: bool,
	/// Vignette intensity (0.0 = none, 1.0 = strong)
	pub vignette: f64,
}

/// Node visual style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Whether nodes have inner gradients
	pub use_gradient: bool,
	/// Border/stroke width (0 = no border)
	pub border_width: f64,
	/// Border color
	pub border_color: Color,
	/// Label text color
	pub label_color: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Canvas background.
	pub background: BackgroundStyle,
	/// Node fill, border and labels.
	pub node: NodeStyle,
	/// Overrides for the focused neighborhood.
	pub highlight: HighlightStyle,
}

impl Theme {
	/// Dark theme with soft gradients (default)
	pub fn default_theme() -> Self {
		Self {
			background: BackgroundStyle {
				color: Color::rgb(22, 27, 34),
				color_secondary: Color::rgb(30, 35, 42),
				use_gradient: true,
				vignette: 0.15,
			},
			node: NodeStyle {
				use_gradient: true,
				border_width: 0.0,
				border_color: Color::rgba(255, 255, 255, 0.0),
				label_color: Color::rgba(255, 255, 255, 0.85),
			},
			highlight: HighlightStyle::default(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_hex_forms() {
		assert_eq!(Color::parse("#4c72b0"), Color::rgb(0x4c, 0x72, 0xb0));
		assert_eq!(Color::parse("#999"), Color::rgb(0x99, 0x99, 0x99));
	}

	#[test]
	fn parses_rgba() {
		assert_eq!(
			Color::parse("rgba(10, 20, 30, 0.5)"),
			Color::rgba(10, 20, 30, 0.5)
		);
		assert_eq!(Color::parse("nonsense"), Color::rgb(128, 128, 128));
	}

	#[test]
	fn css_round_trip_for_opaque_colors() {
		assert_eq!(Color::parse("#dd8452").to_css(), "#dd8452");
	}
}
