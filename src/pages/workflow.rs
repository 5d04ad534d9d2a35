//! Workflow page: module library, module stack and output pane.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::module_library::ModuleLibrary;
use crate::components::module_stack::ModuleStack;
use crate::components::output_pane::OutputPane;
use crate::net::api;
use crate::state::ui::UiState;
use crate::state::workflow::WorkflowState;

/// Workflow page. Loads the workflow named by the route and lays out the
/// library, module stack and output pane side by side.
#[component]
pub fn WorkflowPage() -> impl IntoView {
    let workflow = expect_context::<RwSignal<WorkflowState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();

    let workflow_id = move || params.read().get("id").and_then(|id| id.parse::<i64>().ok());

    // Load the workflow whenever the route param changes.
    Effect::new(move || {
        let Some(id) = workflow_id() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::workflow(id).await {
                Ok(loaded) => workflow.update(|w| {
                    w.selected_module_id = loaded.wf_modules.last().map(|m| m.id);
                    w.read_only = loaded.read_only;
                    w.modules = loaded.wf_modules;
                }),
                Err(e) => leptos::logging::warn!("workflow load failed: workflow={id} error={e}"),
            }
        });
    });

    on_cleanup(move || {
        workflow.update(|w| {
            w.modules.clear();
            w.selected_module_id = None;
        });
    });

    let selected_id = Signal::derive(move || workflow.with(|w| w.selected_module_id));
    let revision = Signal::derive(move || workflow.with(|w| w.selected_module().map_or(0, |m| m.revision)));
    let library_open = Signal::derive(move || ui.with(|u| u.library_open));
    let focus = Signal::derive(move || ui.with(|u| u.output_focus));

    view! {
        <div
            class="workflow-page"
            class:workflow-page--library-open=move || library_open.get()
            class:workflow-page--overlapping=move || ui.with(|u| u.output_overlapping)
        >
            <ModuleLibrary/>
            <div class="workflow-page__modules" on:click=move |_| ui.update(|u| u.output_focus = false)>
                <ModuleStack/>
            </div>
            <div class="workflow-page__output">
                <OutputPane
                    module_id=selected_id
                    revision=revision
                    library_open=library_open
                    focus=focus
                    on_focus=Callback::new(move |()| ui.update(|u| u.output_focus = true))
                    on_overlap=Callback::new(move |overlapping: bool| ui.update(|u| u.output_overlapping = overlapping))
                />
            </div>
        </div>
    }
}
