//! Canvas graph renderer.
//!
//! Draws a [`GraphStore`](crate::graph::GraphStore) on an HTML canvas with:
//! - Physics-based node positioning via force simulation, seeded from the store
//! - Pan, zoom, node dragging, node and background clicks
//! - Per-frame focus reducers deciding every node's and edge's look
//! - An animated camera that can focus a node or return to the default framing
//!
//! # Example
//!
//! ```ignore
//! let (store, _) = build_graph_random(&data);
//! let focus = RwSignal::new(Focus::None);
//! let camera = RwSignal::new(None);
//!
//! view! {
//!     <ForceGraphCanvas
//!         store=Arc::new(store)
//!         focus=focus
//!         camera=camera
//!         on_node_click=move |id| log::info!("{id}")
//!         on_stage_click=move |_| {}
//!         fullscreen=true
//!     />
//! }
//! ```

pub mod camera;
mod component;
mod render;
pub mod scale;
mod state;
pub mod theme;

pub use camera::{Camera, CameraState};
pub use component::ForceGraphCanvas;
pub use theme::Theme;
