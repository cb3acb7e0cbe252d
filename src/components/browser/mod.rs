//! Record browser UI components.
//!
//! Components:
//! - [`Browser`] - Main record browser view
//! - [`Toolbar`] - Zone input, fetch/delete/select-all buttons, type filter
//! - [`RecordList`] - Checkbox list of the records passing the filter

#[allow(clippy::module_inception)]
mod browser;
mod record_list;
mod toolbar;

pub use browser::Browser;
pub use record_list::RecordList;
pub use toolbar::Toolbar;
