//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`fetch`] - Network fetching with timeout
//! - [`dom`] - Browser API access and event helpers
//! - [`console`] - `tracing` output to the browser console

pub mod console;
pub mod dom;
pub mod fetch;
