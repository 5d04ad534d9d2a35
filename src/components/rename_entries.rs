//! Column rename editor for a rename module.
//!
//! DESIGN
//! ======
//! `RenameEntries` owns a `RenameMap` parsed from the parameter string and
//! re-parsed whenever that string changes upstream. Each `RenameEntry` keeps
//! an `EntryDraft` so typing stays local until blur or Enter.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{ModuleId, ParamId};
use crate::state::rename_map::{EntryDraft, RenameEffect, RenameMap};
use crate::state::workflow::WorkflowState;

/// A single `original -> new name` row.
#[component]
pub fn RenameEntry(
    colname: String,
    #[prop(into)] new_colname: Signal<String>,
    #[prop(into)] read_only: Signal<bool>,
    on_rename: Callback<(String, String)>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let draft = RwSignal::new(EntryDraft::new(&new_colname.get_untracked()));

    Effect::new(move || {
        let upstream = new_colname.get();
        draft.update(|d| d.sync_upstream(&upstream));
    });

    let confirm = {
        let colname = colname.clone();
        move || {
            if let Some(value) = draft.try_update(EntryDraft::confirm).flatten() {
                on_rename.run((colname.clone(), value));
            }
        }
    };
    let confirm_on_enter = confirm.clone();
    let delete_name = colname.clone();

    view! {
        <div class="rename-entry">
            <div class="rename-column">{colname}</div>
            <input
                class="rename-input"
                type="text"
                prop:value=move || draft.with(|d| d.buffer().to_owned())
                on:input=move |ev| draft.update(|d| d.edit(event_target_value(&ev)))
                on:blur=move |_| confirm()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        confirm_on_enter();
                    }
                }
                on:focus=move |ev| {
                    #[cfg(feature = "hydrate")]
                    event_target::<web_sys::HtmlInputElement>(&ev).select();
                    #[cfg(not(feature = "hydrate"))]
                    let _ = ev;
                }
                disabled=move || read_only.get()
            />
            <button
                class="rename-delete"
                on:click=move |_| on_delete.run(delete_name.clone())
                disabled=move || read_only.get()
            >
                "✕"
            </button>
        </div>
    }
}

/// Editor listing every entry of a module's rename map.
#[component]
pub fn RenameEntries(
    module_id: ModuleId,
    param_id: ParamId,
    /// Serialized rename map as stored upstream.
    #[prop(into)]
    entries: Signal<String>,
    #[prop(into)] revision: Signal<i64>,
    #[prop(into)] read_only: Signal<bool>,
    /// When set, rebuild the map from every input column.
    #[prop(into)]
    load_all: Signal<bool>,
    /// Clears the load-all flag once the rebuilt map is written.
    on_load_all_done: Callback<()>,
    /// Receives each serialized map the server accepted.
    on_entries_changed: Callback<String>,
) -> impl IntoView {
    let workflow = expect_context::<RwSignal<WorkflowState>>();
    let map = RwSignal::new(RenameMap::parse(&entries.get_untracked()));

    Effect::new(move || {
        let raw = entries.get();
        map.set(RenameMap::parse(&raw));
    });

    let write_param = move |json: String| {
        leptos::task::spawn_local(async move {
            match api::on_param_changed(param_id, json.clone()).await {
                Ok(()) => on_entries_changed.run(json),
                Err(e) => leptos::logging::warn!("rename write failed: param={param_id} error={e}"),
            }
        });
    };

    let delete_module = move || {
        leptos::task::spawn_local(async move {
            if let Err(e) = api::delete_module(module_id).await {
                leptos::logging::warn!("module delete failed: module={module_id} error={e}");
                return;
            }
            let selected = workflow.try_update(|w| w.delete_and_select_previous(module_id)).flatten();
            if selected.is_none() {
                leptos::logging::warn!("deleted first module {module_id}; selection left empty");
            }
        });
    };

    let apply = move |effect: RenameEffect| match effect {
        RenameEffect::None => {}
        RenameEffect::WriteParam(json) => write_param(json),
        RenameEffect::DeleteModule => delete_module(),
    };

    let on_rename = Callback::new(move |(original, renamed): (String, String)| {
        apply(map.try_update(|m| m.rename(&original, &renamed)).unwrap_or(RenameEffect::None));
    });
    let on_delete = Callback::new(move |original: String| {
        apply(map.try_update(|m| m.delete(&original)).unwrap_or(RenameEffect::None));
    });

    // Rebuild from all input columns while the flag is set, again on each new revision.
    Effect::new(move || {
        revision.track();
        if !load_all.get() {
            return;
        }
        leptos::task::spawn_local(async move {
            let columns = match api::input_columns(module_id).await {
                Ok(columns) => columns,
                Err(e) => {
                    leptos::logging::warn!("input column fetch failed: module={module_id} error={e}");
                    return;
                }
            };
            let json = RenameMap::identity(&columns).to_json();
            match api::on_param_changed(param_id, json.clone()).await {
                Ok(()) => {
                    on_entries_changed.run(json);
                    on_load_all_done.run(());
                }
                Err(e) => leptos::logging::warn!("rename write failed: param={param_id} error={e}"),
            }
        });
    });

    view! {
        <div class="rename-entries">
            <For
                each=move || {
                    map.with(|m| {
                        m.iter().map(|(k, _)| k.to_owned()).collect::<Vec<_>>()
                    })
                }
                key=String::clone
                children=move |colname: String| {
                    let lookup = colname.clone();
                    let new_colname = Signal::derive(move || {
                        map.with(|m| m.get(&lookup).unwrap_or_default().to_owned())
                    });
                    view! {
                        <RenameEntry
                            colname=colname
                            new_colname=new_colname
                            read_only=read_only
                            on_rename=on_rename
                            on_delete=on_delete
                        />
                    }
                }
            />
        </div>
    }
}
