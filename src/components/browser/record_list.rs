//! Record list component.
//!
//! Renders the records passing the type filter, one checkbox per record.
//! Checkbox state comes from the unfiltered selection, so records hidden by
//! the filter keep their selection.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::Record;

stylance::import_crate_style!(css, "src/components/browser/record_list.module.css");

#[component]
pub fn RecordList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let browser = ctx.browser;

    let visible = Memo::new(move |_| {
        browser.with(|b| b.visible_records().into_iter().cloned().collect::<Vec<_>>())
    });
    let is_empty = Signal::derive(move || visible.with(Vec::is_empty));

    let empty_text = move || {
        browser.with(|b| {
            if b.records().is_empty() {
                if b.loaded_zone().is_empty() {
                    "Enter a zone and fetch its records.".to_string()
                } else {
                    format!("No records in {}.", b.loaded_zone())
                }
            } else {
                format!("No {} records.", b.filter())
            }
        })
    };

    view! {
        <Show
            when=move || !is_empty.get()
            fallback=move || view! { <p class=css::empty>{empty_text}</p> }
        >
            <ul class=css::list role="list" aria-label="Records">
                <For
                    each=move || visible.get()
                    key=|record| record.clone()
                    children=move |record| view! { <RecordRow record=record /> }
                />
            </ul>
        </Show>
    }
}

#[component]
fn RecordRow(record: Record) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let browser = ctx.browser;

    let id = record.id.clone();
    let is_selected = Signal::derive(move || browser.with(|b| b.is_selected(&id)));

    let toggle_id = record.id.clone();
    let handle_change = move |_: leptos::ev::Event| {
        browser.update(|b| {
            b.toggle_selection(&toggle_id);
        });
    };

    let item_class = move || {
        if is_selected.get() {
            format!("{} {}", css::row, css::selected)
        } else {
            css::row.to_string()
        }
    };

    view! {
        <li class=item_class>
            <label class=css::label>
                <input
                    type="checkbox"
                    name=record.id.to_string()
                    prop:checked=move || is_selected.get()
                    on:change=handle_change
                />
                <span class=css::name>{record.name.clone()}</span>
                <span class=css::recordType>{record.record_type.clone()}</span>
                <span class=css::content>{record.content.clone()}</span>
            </label>
        </li>
    }
}
