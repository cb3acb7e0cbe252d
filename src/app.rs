//! Root application module.
//!
//! Contains the main App component, AppContext definition, and the glue
//! between the record browser state and the Leptos reactive system.

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::Browser;
use crate::config::DELETE_POLICY;
use crate::core::{self, BrowserStore, RecordBrowser};

// ============================================================================
// Record Service
// ============================================================================

/// Record service the application talks to.
#[cfg(not(feature = "mock"))]
pub type AppService = core::HttpRecordService;

#[cfg(feature = "mock")]
pub type AppService = core::memory::MemoryRecordService;

#[cfg(not(feature = "mock"))]
fn make_service() -> AppService {
    core::HttpRecordService::new(crate::config::API_BASE_URL)
}

#[cfg(feature = "mock")]
fn make_service() -> AppService {
    use crate::models::Record;

    core::memory::MemoryRecordService::new().with_zone(
        crate::config::MOCK_ZONE,
        vec![
            Record::new("1", "example.com", "A", "198.51.100.4"),
            Record::new("2", "www.example.com", "CNAME", "example.com"),
            Record::new("3", "example.com", "MX", "10 mail.example.com"),
            Record::new("4", "example.com", "TXT", "v=spf1 -all"),
            Record::new("5", "api.example.com", "A", "198.51.100.7"),
        ],
    )
}

impl BrowserStore for RwSignal<RecordBrowser> {
    fn update_browser<R>(&self, f: impl FnOnce(&mut RecordBrowser) -> R) -> Option<R> {
        self.try_update(f)
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from children
/// with `use_context::<AppContext>()`. The record browser state is owned by
/// the root's reactive owner, so it is created on mount and disposed on
/// unmount; workflows still in flight then end with `Detached`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Record browser state (zone, records, selection, filter).
    pub browser: RwSignal<RecordBrowser>,

    /// Record service shared by all workflows.
    service: StoredValue<Rc<AppService>, LocalStorage>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            browser: RwSignal::new(RecordBrowser::new()),
            service: StoredValue::new_local(Rc::new(make_service())),
        }
    }

    /// Fetch records (and then types) for the zone currently entered.
    pub fn fetch(&self) {
        let browser = self.browser;
        let service = self.service.get_value();
        spawn_local(async move {
            // Outcome is reported through the browser's notice.
            let _ = core::fetch_records(&browser, service.as_ref()).await;
        });
    }

    /// Delete all selected records, then re-fetch.
    pub fn delete_selected(&self) {
        let browser = self.browser;
        let service = self.service.get_value();
        spawn_local(async move {
            let _ = core::delete_selected(&browser, service.as_ref(), DELETE_POLICY).await;
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the record browser
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #c0392b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #c0392b;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Browser />
        </ErrorBoundary>
    }
}
