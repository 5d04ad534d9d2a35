//! Collapsible module library beside the module stack.
//!
//! Its open state feeds the output pane's geometry: the pane's maximum width
//! shrinks while the library is open.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Collapsible left sidebar with the module catalog.
#[component]
pub fn ModuleLibrary() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let expanded = move || ui.get().library_open;

    let toggle_expand = move |_| {
        ui.update(|u| u.library_open = !u.library_open);
    };

    view! {
        <div class="module-library" class:module-library--collapsed=move || !expanded()>
            <div class="module-library__header">
                <Show when=expanded>
                    <span class="module-library__title">"Module Library"</span>
                </Show>
                <button class="module-library__toggle" on:click=toggle_expand title="Toggle library">
                    {move || if expanded() { "\u{25C0}" } else { "\u{25B6}" }}
                </button>
            </div>

            <Show when=expanded>
                <div class="module-library__content">
                    <p class="module-library__hint">"Drag a module into the workflow to add it."</p>
                </div>
            </Show>
        </div>
    }
}
