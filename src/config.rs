//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use crate::core::DeletePolicy;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the header.
pub const APP_NAME: &str = "zonebrowse";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL of the record-management API.
pub const API_BASE_URL: &str = "http://localhost:8080/api";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Record Browser Configuration
// =============================================================================

/// How a bulk delete reacts to a failed request.
pub const DELETE_POLICY: DeletePolicy = DeletePolicy::BestEffort;

/// Placeholder of the zone input.
pub const ZONE_PLACEHOLDER: &str = "Enter zone name";

// =============================================================================
// Logging
// =============================================================================

/// `tracing` filter directives for the browser console.
pub const LOG_FILTER: &str = "zonebrowse=debug";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Mock Backend
// =============================================================================

/// Zone served by the in-memory backend of the `mock` feature.
#[cfg(feature = "mock")]
pub const MOCK_ZONE: &str = "example.com";
