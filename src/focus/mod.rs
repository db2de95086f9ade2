//! Focus handling: which node is selected or previewed, how a search query
//! resolves to a node, and the reducers that turn focus into per-frame visuals.

mod controller;
pub mod reducer;
pub mod search;

pub use controller::{CameraCommand, ClearKind, Focus, FocusController};
pub use reducer::{EdgeDisplay, Highlight, HighlightStyle, NodeDisplay};
