//! Virtualized grid over a `TablePager`.
//!
//! Only rows inside the scrolled viewport (plus a small overscan) are
//! rendered, and each one is fetched through `TablePager::get_row`, which is
//! what drives incremental loading while the user scrolls.

#[cfg(test)]
#[path = "table_view_test.rs"]
mod table_view_test;

use std::ops::Range;

use leptos::prelude::*;
use serde_json::Value;

use crate::state::table_pager::{FetchTicket, RowLookup, TablePager};

pub const ROW_HEIGHT_PX: f64 = 28.0;
const OVERSCAN_ROWS: usize = 10;
/// Viewport height assumed until the first scroll event reports the real one.
const DEFAULT_VIEWPORT_PX: f64 = 600.0;

/// Row indices to render for a scroll position.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn visible_rows(scroll_top_px: f64, viewport_px: f64, total_rows: usize) -> Range<usize> {
    let first = (scroll_top_px.max(0.0) / ROW_HEIGHT_PX).floor() as usize;
    let count = (viewport_px.max(0.0) / ROW_HEIGHT_PX).ceil() as usize;
    let start = first.saturating_sub(OVERSCAN_ROWS).min(total_rows);
    let end = first
        .saturating_add(count)
        .saturating_add(OVERSCAN_ROWS)
        .min(total_rows);
    start..end
}

/// Display text for a cell. Nulls, including placeholder cells, render empty.
pub fn format_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Scrollable table body.
#[allow(clippy::cast_precision_loss)]
#[component]
pub fn TableView(
    pager: StoredValue<TablePager>,
    /// Bumped whenever the pager's window changes.
    table_version: RwSignal<u64>,
    on_fetch: Callback<FetchTicket>,
    #[prop(into)] resizing: Signal<bool>,
) -> impl IntoView {
    let scroll_top = RwSignal::new(0.0_f64);
    let viewport_height = RwSignal::new(DEFAULT_VIEWPORT_PX);

    let columns = move || {
        table_version.track();
        pager.with_value(|p| p.window().map(|w| w.columns.clone()).unwrap_or_default())
    };
    let total_rows = move || {
        table_version.track();
        pager.with_value(|p| p.window().map_or(0, |w| w.total_rows))
    };

    let on_scroll = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let target = event_target::<web_sys::Element>(&ev);
            scroll_top.set(f64::from(target.scroll_top()));
            viewport_height.set(f64::from(target.client_height()));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let body = move || {
        let columns = columns();
        let total = total_rows();
        let range = visible_rows(scroll_top.get(), viewport_height.get(), total);
        let offset_px = range.start as f64 * ROW_HEIGHT_PX;
        let mut pending = None;
        let rows = range
            .map(|index| {
                let cells = pager
                    .try_update_value(|p| {
                        let (lookup, ticket) = p.get_row(index);
                        if ticket.is_some() {
                            pending = ticket;
                        }
                        match lookup {
                            RowLookup::NoData => Vec::new(),
                            lookup => columns.iter().map(|c| format_cell(lookup.cell(c))).collect(),
                        }
                    })
                    .unwrap_or_default();
                view! {
                    <div class="table-view__row" style:height=format!("{ROW_HEIGHT_PX}px")>
                        <span class="table-view__index">{index + 1}</span>
                        {cells
                            .into_iter()
                            .map(|text| view! { <span class="table-view__cell">{text}</span> })
                            .collect_view()}
                    </div>
                }
            })
            .collect_view();
        if let Some(ticket) = pending {
            on_fetch.run(ticket);
        }
        view! {
            <div class="table-view__spacer" style:height=format!("{}px", total as f64 * ROW_HEIGHT_PX)>
                <div class="table-view__rows" style:transform=format!("translateY({offset_px}px)")>
                    {rows}
                </div>
            </div>
        }
    };

    view! {
        <div class="table-view" class:table-view--resizing=move || resizing.get()>
            <div class="table-view__header">
                <span class="table-view__index"></span>
                {move || {
                    columns()
                        .into_iter()
                        .map(|col| view! { <span class="table-view__cell table-view__cell--head">{col}</span> })
                        .collect_view()
                }}
            </div>
            <div class="table-view__body" on:scroll=on_scroll>
                {body}
            </div>
        </div>
    }
}
