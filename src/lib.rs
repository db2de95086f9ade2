//! cine-graph: interactive viewer for a graph of movies, actors and directors.
//!
//! This crate loads a static JSON description of the graph, renders it on a
//! canvas with a physics layout, and layers selection, live search,
//! neighborhood highlighting and a detail panel on top.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, debug, error, info};

pub mod components;
pub mod config;
pub mod error;
pub mod focus;
pub mod graph;
pub mod loader;
pub mod panel;

pub use components::force_graph::ForceGraphCanvas;
pub use components::{SearchBar, SidePanel};
pub use config::ViewerConfig;
pub use error::{LoadError, StoreError};
pub use focus::{CameraCommand, ClearKind, Focus, FocusController};
pub use graph::{GraphData, GraphStore, NodeId};
pub use panel::PanelContent;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("cine-graph: logging initialized");
}

/// Load the graph and mount the viewer. A failed load is fatal: nothing is mounted.
pub async fn run(config: ViewerConfig) {
	let data = match loader::fetch_graph_data(&config.data_url).await {
		Ok(data) => data,
		Err(e) => {
			error!("cine-graph: startup aborted: {e}");
			return;
		}
	};
	let (store, _) = graph::build_graph_random(&data);
	let store = Arc::new(store);

	mount_to_body(move || view! { <App store=store config=config /> });
}

/// Main application component: search bar, graph canvas and detail panel,
/// all driven by one focus controller.
#[component]
pub fn App(store: Arc<GraphStore>, #[prop(optional)] config: ViewerConfig) -> impl IntoView {
	provide_meta_context();

	let controller = RwSignal::new(FocusController::new());
	let camera = RwSignal::new(None::<CameraCommand>);

	let focus = Signal::derive(move || controller.with(|c| c.focus().clone()));
	let search_text = Signal::derive(move || controller.with(|c| c.search_text().to_string()));
	let panel_store = store.clone();
	let panel = Signal::derive(move || {
		controller.with(|c| PanelContent::present(&panel_store, c.focus().active()))
	});

	let issue = move |command: Option<CameraCommand>| {
		if let Some(command) = command {
			camera.set(Some(command));
		}
	};

	let on_node_click = Callback::new(move |id: NodeId| {
		issue(controller.try_update(|c| c.select_by_click(&id)).flatten());
	});
	let on_stage_click = Callback::new(move |_: ()| {
		issue(controller.try_update(|c| c.clear_selection(ClearKind::Stage)).flatten());
	});
	let on_reset = Callback::new(move |_: ()| {
		debug!("cine-graph: reset");
		issue(controller.try_update(|c| c.clear_selection(ClearKind::Reset)).flatten());
	});
	let on_center = Callback::new(move |_: ()| {
		issue(Some(controller.with_untracked(FocusController::recenter)));
	});

	let input_store = store.clone();
	let on_input = Callback::new(move |query: String| {
		issue(
			controller
				.try_update(|c| c.update_search_text(&input_store, &query))
				.flatten(),
		);
	});
	let confirm_store = store.clone();
	let on_confirm = Callback::new(move |query: String| {
		debug!("cine-graph: confirm search {query:?}");
		issue(
			controller
				.try_update(|c| c.confirm_search(&confirm_store, &query))
				.flatten(),
		);
	});

	view! {
		<Html attr:lang="de" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Filmnetzwerk" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="viewer">
			<SearchBar
				text=search_text
				on_input=on_input
				on_confirm=on_confirm
				on_reset=on_reset
				on_center=on_center
			/>
			<div class="graph-area">
				<ForceGraphCanvas
					store=store
					focus=focus
					camera=camera
					on_node_click=on_node_click
					on_stage_click=on_stage_click
					config=config
				/>
			</div>
			<SidePanel content=panel />
		</div>
	}
}
