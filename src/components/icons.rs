//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCheck as Success, LuCheckCheck as SelectAll, LuGlobe as Zone, LuInfo as Info,
        LuListFilter as Filter, LuRefreshCw as Refresh, LuTrash2 as Trash, LuX as Error,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Refresh, BsCheck2Square as SelectAll, BsCheckCircle as Success,
        BsExclamationTriangle as Error, BsFunnel as Filter, BsGlobe as Zone,
        BsInfoCircle as Info, BsTrash as Trash,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(REFRESH, Refresh);
themed_icon!(TRASH, Trash);
themed_icon!(SELECT_ALL, SelectAll);
themed_icon!(FILTER, Filter);
themed_icon!(ZONE, Zone);
themed_icon!(INFO, Info);
themed_icon!(SUCCESS, Success);
themed_icon!(ERROR, Error);
