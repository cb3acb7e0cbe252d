//! Core logic of the record browser.
//!
//! This module provides:
//! - [`RecordBrowser`] state and its synchronous transitions
//! - [`fetch_records`] and [`delete_selected`] workflows over a [`RecordService`]
//! - [`HttpRecordService`] client for the record-management API
//! - [`normalize_zone`] zone name validation

mod browser;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod memory;
mod service;
mod workflow;
mod zone;

pub use browser::{DeletePlan, FetchTicket, RecordBrowser, Summary, all_selected};
pub use service::{HttpRecordService, RecordService};
pub use workflow::{BrowserStore, DeletePolicy, DeleteReport, delete_selected, fetch_records};
pub use zone::normalize_zone;
