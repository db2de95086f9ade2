//! Viewer configuration.

/// Settings for data loading and camera behaviour.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
	/// Location of the graph description, relative to the page.
	pub data_url: String,
	/// Camera zoom ratio used when focusing a node (smaller is closer).
	pub focus_ratio: f64,
	/// Duration of camera animations in seconds.
	pub camera_duration: f64,
}

impl Default for ViewerConfig {
	fn default() -> Self {
		Self {
			data_url: "./data/network.json".to_string(),
			focus_ratio: 0.5,
			camera_duration: 0.6,
		}
	}
}
