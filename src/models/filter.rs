//! Record type filter.

use std::fmt;

/// Option value used for the "no filtering" entry of the type selector.
pub const ALL_TYPES: &str = "All";

/// Active type filter for the record list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypeFilter {
    /// Show every record.
    #[default]
    All,
    /// Show only records of this type.
    Type(String),
}

impl TypeFilter {
    /// Parse a `<select>` option value.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_TYPES || value.is_empty() {
            Self::All
        } else {
            Self::Type(value.to_string())
        }
    }

    /// Value to use for the `<select>` element.
    pub fn as_value(&self) -> &str {
        match self {
            Self::All => ALL_TYPES,
            Self::Type(t) => t,
        }
    }

    pub fn matches(&self, record_type: &str) -> bool {
        match self {
            Self::All => true,
            Self::Type(t) => t == record_type,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}
