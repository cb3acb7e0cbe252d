//! Toolbar component.
//!
//! Zone input, fetch/delete/select-all buttons, and the type filter.
//! Typing a zone only stores it; records are fetched on the button or Enter.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::ZONE_PLACEHOLDER;
use crate::core::RecordBrowser;
use crate::models::{ALL_TYPES, TypeFilter};

stylance::import_crate_style!(css, "src/components/browser/toolbar.module.css");

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let browser = ctx.browser;

    let zone = Signal::derive(move || browser.with(|b| b.zone().to_string()));
    let busy = Signal::derive(move || browser.with(RecordBrowser::is_busy));
    let deleting = Signal::derive(move || browser.with(RecordBrowser::is_deleting));
    let select_all = Signal::derive(move || browser.with(RecordBrowser::select_all_flag));
    let has_records = Signal::derive(move || browser.with(|b| !b.records().is_empty()));
    let has_selection = Signal::derive(move || browser.with(|b| !b.selection().is_empty()));
    let types = Memo::new(move |_| browser.with(|b| b.types().to_vec()));
    let filter = Memo::new(move |_| browser.with(|b| b.filter().clone()));

    let handle_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        browser.update(|b| b.set_zone(value));
    };

    let handle_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !busy.get_untracked() {
            ctx.fetch();
        }
    };

    let handle_filter = move |ev: leptos::ev::Event| {
        let filter = TypeFilter::from_value(&event_target_value(&ev));
        browser.update(|b| b.set_filter(filter));
    };

    view! {
        <div class=css::toolbar>
            <label class=css::zoneField>
                <span class=css::fieldIcon aria-hidden="true"><Icon icon=ic::ZONE /></span>
                <input
                    id="zone-input"
                    class=css::zoneInput
                    type="text"
                    placeholder=ZONE_PLACEHOLDER
                    aria-label="Zone name"
                    prop:value=move || zone.get()
                    on:input=handle_input
                    on:keydown=handle_keydown
                />
            </label>

            <button
                class=css::button
                on:click=move |_| ctx.fetch()
                disabled=move || busy.get()
            >
                <Icon icon=ic::REFRESH />
                <span>"Fetch Records"</span>
            </button>

            <button
                class=format!("{} {}", css::button, css::danger)
                on:click=move |_| ctx.delete_selected()
                disabled=move || busy.get() || !has_selection.get()
            >
                <Icon icon=ic::TRASH />
                <span>{move || if deleting.get() { "Deleting..." } else { "Delete Selected" }}</span>
            </button>

            <button
                class=css::button
                on:click=move |_| browser.update(RecordBrowser::toggle_select_all)
                disabled=move || !has_records.get()
            >
                <Icon icon=ic::SELECT_ALL />
                <span>{move || if select_all.get() { "Deselect All" } else { "Select All" }}</span>
            </button>

            <label class=css::filterField>
                <span class=css::fieldIcon aria-hidden="true"><Icon icon=ic::FILTER /></span>
                <select class=css::filterSelect aria-label="Record type" on:change=handle_filter>
                    <option value=ALL_TYPES selected=move || filter.with(TypeFilter::is_all)>
                        {ALL_TYPES}
                    </option>
                    <For
                        each=move || types.get()
                        key=|t| t.clone()
                        children=move |t| {
                            let value = t.clone();
                            let attr_value = t.clone();
                            view! {
                                <option
                                    value=attr_value
                                    selected=move || filter.with(|f| f.as_value() == value)
                                >
                                    {t}
                                </option>
                            }
                        }
                    />
                </select>
            </label>
        </div>
    }
}
