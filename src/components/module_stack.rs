//! Ordered list of workflow modules with the rename editor inline.

use leptos::prelude::*;

use crate::components::rename_entries::RenameEntries;
use crate::net::types::ModuleId;
use crate::state::ui::UiState;
use crate::state::workflow::WorkflowState;

/// Module sequence of the current workflow. Clicking a module selects it.
#[component]
pub fn ModuleStack() -> impl IntoView {
    let workflow = expect_context::<RwSignal<WorkflowState>>();

    let module_ids = move || workflow.with(|w| w.modules.iter().map(|m| m.id).collect::<Vec<_>>());

    view! {
        <div class="module-stack">
            <For
                each=module_ids
                key=|id| *id
                children=move |id: ModuleId| view! { <ModuleCard id=id/> }
            />
            <Show when=move || workflow.with(|w| w.modules.is_empty())>
                <div class="module-stack__empty">"This workflow has no modules yet."</div>
            </Show>
        </div>
    }
}

#[component]
fn ModuleCard(id: ModuleId) -> impl IntoView {
    let workflow = expect_context::<RwSignal<WorkflowState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let selected = move || workflow.with(|w| w.selected_module_id == Some(id));
    let name = move || workflow.with(|w| w.module(id).map(|m| m.name.clone()).unwrap_or_default());
    // Memoized so param value writes do not rebuild the editor underneath its drafts.
    let rename_param = Memo::new(move |_| {
        workflow.with(|w| w.module(id).and_then(|m| m.rename_param.as_ref().map(|p| p.id)))
    });

    view! {
        <div
            class="module-card"
            class:module-card--selected=selected
            on:click=move |_| workflow.update(|w| w.select_module(id))
        >
            <div class="module-card__header">
                <span class="module-card__name">{name}</span>
                <Show when=move || rename_param.get().is_some() && !workflow.with(|w| w.read_only)>
                    <button
                        class="module-card__action"
                        title="Rename all columns"
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.stop_propagation();
                            ui.update(|u| u.load_all_columns = true);
                        }
                    >
                        "Rename all"
                    </button>
                </Show>
            </div>
            {move || {
                let param_id = rename_param.get()?;
                let entries = Signal::derive(move || {
                    workflow.with(|w| {
                        w.module(id)
                            .and_then(|m| m.rename_param.as_ref())
                            .map(|p| p.value.clone())
                            .unwrap_or_default()
                    })
                });
                let revision = Signal::derive(move || workflow.with(|w| w.module(id).map_or(0, |m| m.revision)));
                let read_only = Signal::derive(move || workflow.with(|w| w.read_only));
                let load_all = Signal::derive(move || selected() && ui.get().load_all_columns);
                Some(view! {
                    <RenameEntries
                        module_id=id
                        param_id=param_id
                        entries=entries
                        revision=revision
                        read_only=read_only
                        load_all=load_all
                        on_load_all_done=Callback::new(move |()| ui.update(|u| u.load_all_columns = false))
                        on_entries_changed=Callback::new(move |value: String| {
                            workflow.update(|w| w.set_param_value(param_id, &value));
                        })
                    />
                })
            }}
        </div>
    }
}
