//! UI components built with Leptos.
//!
//! - [`Browser`] - Record browser (toolbar, notice, record list, status)
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`status`] - Status bar showing zone and selection counts

pub mod browser;
pub mod icons;
pub mod status;

pub use browser::Browser;
