//! Search field with reset and recenter controls.

use leptos::prelude::*;
use web_sys::KeyboardEvent;

/// Search input that reports every keystroke, commits on Enter, and offers
/// reset and recenter buttons. `text` is the field's current value.
#[component]
pub fn SearchBar(
	#[prop(into)] text: Signal<String>,
	#[prop(into)] on_input: Callback<String>,
	#[prop(into)] on_confirm: Callback<String>,
	#[prop(into)] on_reset: Callback<()>,
	#[prop(into)] on_center: Callback<()>,
) -> impl IntoView {
	let on_keydown = move |ev: KeyboardEvent| {
		if ev.key() == "Enter" {
			ev.prevent_default();
			on_confirm.run(event_target_value(&ev));
		}
	};

	view! {
		<div class="search-bar">
			<input
				type="search"
				placeholder="Suche nach Film, Schauspieler, Regisseur…"
				prop:value=move || text.get()
				on:input=move |ev| on_input.run(event_target_value(&ev))
				on:keydown=on_keydown
			/>
			<button type="button" on:click=move |_| on_reset.run(())>"Reset"</button>
			<button type="button" on:click=move |_| on_center.run(())>"Zentrieren"</button>
		</div>
	}
}
