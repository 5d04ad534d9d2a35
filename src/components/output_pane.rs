//! Output pane: the selected module's table in a left-resizable box.
//!
//! ARCHITECTURE
//! ============
//! Two state machines sit behind this component. `TablePager` lives in a
//! `StoredValue` so the grid can consult its fetch gate on every row lookup
//! without subscribing; `table_version` is bumped whenever its window changes
//! to re-render. `PaneState` lives in a signal and is recomputed on mount, on
//! debounced window resizes, on library toggles and at drag end.

use leptos::prelude::*;

use crate::components::table_view::TableView;
use crate::net::api;
use crate::net::types::ModuleId;
use crate::state::pane_geometry::{GeometryConfig, PaneInputs, PaneState};
use crate::state::table_pager::{FetchTicket, TableKey, TablePager};
use crate::util::resize::use_debounced_resize;
#[cfg(feature = "hydrate")]
use crate::util::viewport::{element_width, viewport_width};

/// Run a pager fetch and feed the result back into the pager.
fn run_fetch(
    ticket: FetchTicket,
    pager: StoredValue<TablePager>,
    table_version: RwSignal<u64>,
    loading: RwSignal<bool>,
) {
    leptos::task::spawn_local(async move {
        loading.set(true);
        let result = api::render(ticket.key.module_id, ticket.from_row, ticket.to_row).await;
        let applied = pager
            .try_update_value(|p| match result {
                Ok(resp) => p.complete(ticket, resp),
                Err(e) => {
                    leptos::logging::warn!(
                        "render fetch failed: module={} rows={}..{} error={e}",
                        ticket.key.module_id,
                        ticket.from_row,
                        ticket.to_row
                    );
                    p.fail(ticket)
                }
            })
            .unwrap_or(false);
        if applied {
            table_version.update(|v| *v += 1);
        } else {
            leptos::logging::log!("dropped stale render response seq={}", ticket.seq);
        }
        loading.set(pager.with_value(TablePager::is_loading));
    });
}

#[cfg(feature = "hydrate")]
fn measure(container_ref: NodeRef<leptos::html::Div>) -> Option<(f64, f64)> {
    let container = container_ref.get_untracked()?;
    Some((element_width(&container), viewport_width()))
}

#[cfg(not(feature = "hydrate"))]
fn measure(_container_ref: NodeRef<leptos::html::Div>) -> Option<(f64, f64)> {
    None
}

/// Resizable table output for the selected module.
#[component]
pub fn OutputPane(
    #[prop(into)] module_id: Signal<Option<ModuleId>>,
    #[prop(into)] revision: Signal<i64>,
    /// Whether the module library beside the pane is open.
    #[prop(into)]
    library_open: Signal<bool>,
    #[prop(into)] focus: Signal<bool>,
    on_focus: Callback<()>,
    /// Told whether the pane now extends over the module column.
    on_overlap: Callback<bool>,
) -> impl IntoView {
    let pager = StoredValue::new(TablePager::default());
    let table_version = RwSignal::new(0_u64);
    let loading = RwSignal::new(false);
    let pane = RwSignal::new(PaneState::default());
    let drag_origin = RwSignal::new(None::<f64>);
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let config = GeometryConfig::default();

    let on_fetch = Callback::new(move |ticket: FetchTicket| {
        run_fetch(ticket, pager, table_version, loading);
    });

    // Initial load on first run, reload when the module or its revision changes.
    Effect::new(move |prev: Option<()>| {
        let key = module_id.get().map(|id| TableKey {
            module_id: id,
            revision: revision.get(),
        });
        let ticket = pager
            .try_update_value(|p| if prev.is_none() { p.mount(key) } else { p.update(key) })
            .flatten();
        match ticket {
            Some(ticket) => on_fetch.run(ticket),
            None if key.is_none() => {
                loading.set(false);
                table_version.update(|v| *v += 1);
            }
            None => {}
        }
    });

    let recompute = move |library_toggled: bool| {
        let Some((container_width_px, viewport_width_px)) = measure(container_ref) else {
            return;
        };
        let inputs = PaneInputs {
            container_width_px,
            viewport_width_px,
            library_open: library_open.get_untracked(),
            library_toggled,
        };
        pane.update(|p| p.recompute(inputs, &config));
    };

    // Geometry on mount, then again whenever the library opens or closes.
    Effect::new(move |prev: Option<bool>| {
        let open = library_open.get();
        recompute(prev.is_some_and(|was_open| was_open != open));
        open
    });

    use_debounced_resize(move || recompute(false));

    let on_drag_start = move |ev: leptos::ev::PointerEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        drag_origin.set(Some(f64::from(ev.client_x())));
        pane.update(PaneState::drag_start);
        on_overlap.run(true);
        on_focus.run(());
    };

    #[cfg(feature = "hydrate")]
    {
        let move_handle = window_event_listener(leptos::ev::pointermove, move |ev| {
            let Some(origin) = drag_origin.get_untracked() else {
                return;
            };
            let delta = origin - f64::from(ev.client_x());
            pane.update(|p| p.drag_move(delta));
        });
        let up_handle = window_event_listener(leptos::ev::pointerup, move |ev| {
            let Some(origin) = drag_origin.get_untracked() else {
                return;
            };
            drag_origin.set(None);
            let delta = origin - f64::from(ev.client_x());
            let overlapping = pane.try_update(|p| p.drag_end(delta)).unwrap_or(false);
            on_overlap.run(overlapping);
        });
        on_cleanup(move || {
            move_handle.remove();
            up_handle.remove();
        });
    }

    let counts = move || {
        table_version.track();
        if module_id.get().is_none() {
            return (0, 0);
        }
        pager.with_value(|p| p.window().map_or((0, 0), |w| (w.total_rows, w.columns.len())))
    };
    let has_rows = move || counts().0 > 0;

    view! {
        <div
            class="outputpane"
            class:focus=move || focus.get()
            node_ref=container_ref
            on:click=move |_| on_focus.run(())
        >
            <div
                class="outputpane-box"
                style:transform=move || format!("translateX({}px)", pane.get().offset_px())
                style:width=move || format!("{}%", pane.get().width_percent())
                style:max-width=move || pane.get().geometry().max_width_css()
                style:min-width="100%"
                style:height="100%"
            >
                <div class="outputpane-handle" on:pointerdown=on_drag_start></div>
                <Show when=move || module_id.get().is_some()>
                    <div
                        class="outputpane-spinner"
                        style:display=move || if loading.get() { "flex" } else { "none" }
                    >
                        <div class="outputpane-spinner__ring"></div>
                    </div>
                </Show>
                <div class="outputpane-table">
                    <div class="outputpane-header">
                        <div class="outputpane-header__stat">
                            <div class="outputpane-header__label">"Rows"</div>
                            <div class="outputpane-header__value">{move || counts().0}</div>
                        </div>
                        <div class="outputpane-header__stat">
                            <div class="outputpane-header__label">"Columns"</div>
                            <div class="outputpane-header__value">{move || counts().1}</div>
                        </div>
                    </div>
                    <Show when=has_rows>
                        <div class="outputpane-data">
                            <TableView
                                pager=pager
                                table_version=table_version
                                on_fetch=on_fetch
                                resizing=Signal::derive(move || pane.get().is_dragging())
                            />
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
