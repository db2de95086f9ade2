//! Camera over the graph: position, zoom ratio, and eased animations.
//!
//! The camera looks at world point `(x, y)` with a zoom `ratio` where 1.0 is the
//! default framing and smaller values are closer. Starting an animation replaces
//! any animation already running.

/// Zoom limits, expressed as ratio (zoom factor is `1 / ratio`).
pub const MIN_RATIO: f64 = 0.1;
/// Largest allowed zoom ratio (most zoomed out).
pub const MAX_RATIO: f64 = 10.0;

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewTransform {
	/// Screen-space translation.
	pub x: f64,
	/// Screen-space translation.
	pub y: f64,
	/// Zoom factor (1.0 = 100%).
	pub k: f64,
}

/// Where the camera looks and how close.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
	/// World-space point at the center of the view.
	pub x: f64,
	/// World-space point at the center of the view.
	pub y: f64,
	/// Zoom ratio; larger shows more of the graph.
	pub ratio: f64,
}

impl Default for CameraState {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			ratio: 1.0,
		}
	}
}

impl CameraState {
	fn lerp(self, other: CameraState, t: f64) -> Self {
		Self {
			x: self.x + (other.x - self.x) * t,
			y: self.y + (other.y - self.y) * t,
			ratio: self.ratio + (other.ratio - self.ratio) * t,
		}
	}
}

#[derive(Clone, Debug)]
struct Animation {
	from: CameraState,
	to: CameraState,
	elapsed: f64,
	duration: f64,
}

/// Ease in and out over `t` in [0, 1].
fn smooth_step(t: f64) -> f64 {
	t * t * (3.0 - 2.0 * t)
}

/// Animated viewport over the graph.
#[derive(Clone, Debug, Default)]
pub struct Camera {
	state: CameraState,
	animation: Option<Animation>,
}

impl Camera {
	/// Current position and zoom ratio.
	pub fn state(&self) -> CameraState {
		self.state
	}

	/// Jump to `state`, cancelling any animation.
	pub fn set_state(&mut self, state: CameraState) {
		self.animation = None;
		self.state = CameraState {
			ratio: state.ratio.clamp(MIN_RATIO, MAX_RATIO),
			..state
		};
	}

	/// Animate to `target` over `duration` seconds.
	pub fn animate_to(&mut self, target: CameraState, duration: f64) {
		let to = CameraState {
			ratio: target.ratio.clamp(MIN_RATIO, MAX_RATIO),
			..target
		};
		if duration <= 0.0 {
			self.set_state(to);
			return;
		}
		self.animation = Some(Animation {
			from: self.state,
			to,
			elapsed: 0.0,
			duration,
		});
	}

	/// Animate back to the default framing.
	pub fn animated_reset(&mut self, duration: f64) {
		self.animate_to(CameraState::default(), duration);
	}

	/// Whether an animation is still running.
	pub fn is_animating(&self) -> bool {
		self.animation.is_some()
	}

	/// Advance the running animation by `dt` seconds.
	pub fn update(&mut self, dt: f64) {
		let Some(anim) = self.animation.as_mut() else {
			return;
		};
		anim.elapsed += dt;
		let t = (anim.elapsed / anim.duration).min(1.0);
		self.state = anim.from.lerp(anim.to, smooth_step(t));
		if t >= 1.0 {
			self.animation = None;
		}
	}

	/// Canvas transform for a viewport of `width` x `height` pixels.
	pub fn transform(&self, width: f64, height: f64) -> ViewTransform {
		let k = 1.0 / self.state.ratio;
		ViewTransform {
			x: width / 2.0 - self.state.x * k,
			y: height / 2.0 - self.state.y * k,
			k,
		}
	}

	/// Convert canvas pixels to world coordinates.
	pub fn screen_to_graph(&self, sx: f64, sy: f64, width: f64, height: f64) -> (f64, f64) {
		let t = self.transform(width, height);
		((sx - t.x) / t.k, (sy - t.y) / t.k)
	}

	/// Zoom by `factor` (>1 zooms in) keeping the graph point under `(sx, sy)` fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64, width: f64, height: f64) {
		let (gx, gy) = self.screen_to_graph(sx, sy, width, height);
		let ratio = (self.state.ratio / factor).clamp(MIN_RATIO, MAX_RATIO);
		let k = 1.0 / ratio;
		self.set_state(CameraState {
			x: gx - (sx - width / 2.0) / k,
			y: gy - (sy - height / 2.0) / k,
			ratio,
		});
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn approx(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-9
	}

	#[test]
	fn default_framing_centers_origin() {
		let cam = Camera::default();
		let t = cam.transform(800.0, 600.0);

		assert_eq!(t, ViewTransform { x: 400.0, y: 300.0, k: 1.0 });
		assert_eq!(cam.screen_to_graph(400.0, 300.0, 800.0, 600.0), (0.0, 0.0));
	}

	#[test]
	fn animation_reaches_target_and_stops() {
		let mut cam = Camera::default();
		let target = CameraState { x: 50.0, y: -20.0, ratio: 0.5 };
		cam.animate_to(target, 0.6);

		cam.update(0.3);
		assert!(cam.is_animating());
		assert!(approx(cam.state().x, 25.0));

		cam.update(0.4);
		assert!(!cam.is_animating());
		assert_eq!(cam.state(), target);
	}

	#[test]
	fn new_animation_replaces_running_one() {
		let mut cam = Camera::default();
		cam.animate_to(CameraState { x: 100.0, y: 0.0, ratio: 1.0 }, 1.0);
		cam.update(0.5);
		let midway = cam.state();

		cam.animated_reset(1.0);
		cam.update(1.0);

		assert!(midway.x > 0.0);
		assert_eq!(cam.state(), CameraState::default());
	}

	#[test]
	fn zoom_keeps_point_under_cursor() {
		let mut cam = Camera::default();
		let before = cam.screen_to_graph(600.0, 100.0, 800.0, 600.0);

		cam.zoom_at(600.0, 100.0, 2.0, 800.0, 600.0);
		let after = cam.screen_to_graph(600.0, 100.0, 800.0, 600.0);

		assert!(approx(cam.state().ratio, 0.5));
		assert!(approx(before.0, after.0) && approx(before.1, after.1));
	}

	#[test]
	fn ratio_is_clamped() {
		let mut cam = Camera::default();
		cam.animate_to(CameraState { x: 0.0, y: 0.0, ratio: 0.0001 }, 0.0);

		assert_eq!(cam.state().ratio, MIN_RATIO);
	}
}
