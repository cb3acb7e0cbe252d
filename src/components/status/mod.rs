//! Status bar component.
//!
//! Displays the loaded zone, record and selection counts, and whether a
//! request is in flight.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::{RecordBrowser, Summary};

stylance::import_crate_style!(css, "src/components/status/status.module.css");

/// Human-readable selection counts, e.g. `2 selected (1 hidden by filter)`.
fn selection_text(summary: Summary) -> String {
    match summary.hidden_selected {
        0 => format!("{} selected", summary.selected),
        hidden => format!("{} selected ({} hidden by filter)", summary.selected, hidden),
    }
}

/// Zone shown in the status bar; `none` before anything was loaded.
fn zone_label(loaded_zone: &str) -> String {
    match loaded_zone {
        "" => "none".to_string(),
        zone => zone.to_string(),
    }
}

/// Status bar displaying zone and count information.
#[component]
pub fn Status() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let browser = ctx.browser;

    let loaded_zone = Signal::derive(move || {
        browser.with(|b| zone_label(b.loaded_zone()))
    });
    let summary = Memo::new(move |_| browser.with(RecordBrowser::summary));
    let busy = Signal::derive(move || browser.with(RecordBrowser::is_busy));

    view! {
        <footer class=css::bar>
            <span class=css::label>
                <span class=css::labelIcon><Icon icon=ic::ZONE /></span>
                <span class=css::value>{loaded_zone}</span>
            </span>
            <span class=css::label>
                <span class=css::labelText>"Records:"</span>
                <span class=css::value>
                    {move || summary.with(|s| format!("{} of {} shown", s.visible, s.total))}
                </span>
            </span>
            <span class=css::label>
                <span class=css::value>{move || selection_text(summary.get())}</span>
            </span>
            <Show when=move || busy.get()>
                <span class=css::busy role="status">"Working..."</span>
            </Show>
        </footer>
    }
}
