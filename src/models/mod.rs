//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Record`], [`RecordId`] - Records as sent by the record service
//! - [`TypeFilter`] - Active record type filter
//! - [`Notice`], [`NoticeLevel`] - Status messages shown to the user

mod filter;
mod notice;
mod record;

pub use filter::{ALL_TYPES, TypeFilter};
pub use notice::{Notice, NoticeLevel};
pub use record::{Record, RecordId};
