//! Detail panel for the committed node.

use leptos::prelude::*;

use crate::panel::PanelContent;

/// Shows the presenter's escaped HTML for the current panel content.
#[component]
pub fn SidePanel(#[prop(into)] content: Signal<PanelContent>) -> impl IntoView {
	view! { <aside class="side-panel" inner_html=move || content.with(PanelContent::to_html) /> }
}
