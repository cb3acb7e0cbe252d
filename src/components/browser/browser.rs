//! Main record browser component.
//!
//! ## Layout
//!
//! Header, toolbar, notice line, record list, and the status bar at the
//! bottom. The zone input gets focus on mount.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{RecordList, Toolbar};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::status::Status;
use crate::config::APP_NAME;
use crate::models::NoticeLevel;
use crate::utils::dom::focus_element;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Record browser view component.
#[component]
pub fn Browser() -> impl IntoView {
    Effect::new(move |_| {
        focus_element("#zone-input");
    });

    view! {
        <div class=css::browser>
            <header class=css::header>
                <span class=css::title>{APP_NAME}</span>
            </header>

            <Toolbar />
            <NoticeLine />

            <main class=css::body>
                <RecordList />
            </main>

            <Status />
        </div>
    }
}

/// Last status message, with a dismiss button.
#[component]
fn NoticeLine() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let browser = ctx.browser;

    let notice = Memo::new(move |_| browser.with(|b| b.notice().cloned()));

    move || {
        notice.get().map(|notice| {
            let (class, icon) = match notice.level {
                NoticeLevel::Info => (css::noticeInfo, ic::INFO),
                NoticeLevel::Success => (css::noticeSuccess, ic::SUCCESS),
                NoticeLevel::Error => (css::noticeError, ic::ERROR),
            };
            let role = if notice.is_error() { "alert" } else { "status" };

            view! {
                <div class=format!("{} {}", css::notice, class) role=role>
                    <span class=css::noticeIcon aria-hidden="true"><Icon icon=icon /></span>
                    <span class=css::noticeText>{notice.text}</span>
                    <button
                        class=css::dismiss
                        title="Dismiss"
                        on:click=move |_| browser.update(|b| b.clear_notice())
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
