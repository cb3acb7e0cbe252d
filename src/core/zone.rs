//! Zone name validation.
//!
//! Names are checked before a request is built so obviously malformed input
//! never reaches the record service.

use std::sync::LazyLock;

use regex::Regex;

use super::error::ZoneError;

/// Maximum length of a zone name without the trailing dot.
const MAX_ZONE_LEN: usize = 253;

static LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_](?:[A-Za-z0-9_-]{0,61}[A-Za-z0-9_])?$")
        .expect("zone label pattern is valid")
});

/// Normalize a user-entered zone name.
///
/// Surrounding whitespace and a single trailing dot are dropped. An empty
/// result is valid and means "no zone".
pub fn normalize_zone(input: &str) -> Result<String, ZoneError> {
    let trimmed = input.trim();
    let name = trimmed.strip_suffix('.').unwrap_or(trimmed);

    if name.is_empty() {
        return if trimmed.is_empty() {
            Ok(String::new())
        } else {
            Err(ZoneError::Malformed(trimmed.to_string()))
        };
    }

    if name.len() > MAX_ZONE_LEN {
        return Err(ZoneError::TooLong(name.len()));
    }

    if name.split('.').all(|label| LABEL.is_match(label)) {
        Ok(name.to_string())
    } else {
        Err(ZoneError::Malformed(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_zones() {
        assert_eq!(normalize_zone("example.com").unwrap(), "example.com");
        assert_eq!(normalize_zone("  example.com  ").unwrap(), "example.com");
        assert_eq!(normalize_zone("example.com.").unwrap(), "example.com");
        assert_eq!(normalize_zone("_dmarc.example.org").unwrap(), "_dmarc.example.org");
        assert_eq!(normalize_zone("xn--bcher-kva.ch").unwrap(), "xn--bcher-kva.ch");
        assert_eq!(normalize_zone("localhost").unwrap(), "localhost");
    }

    #[test]
    fn test_empty_means_no_zone() {
        assert_eq!(normalize_zone("").unwrap(), "");
        assert_eq!(normalize_zone("   ").unwrap(), "");
    }

    #[test]
    fn test_malformed_zones() {
        for bad in [".", "..", "a..b", "-a.com", "a-.com", "exa mple.com", "a/b", "zone?x=1"] {
            assert!(
                matches!(normalize_zone(bad), Err(ZoneError::Malformed(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_label_length_limit() {
        let ok = format!("{}.com", "a".repeat(63));
        let too_long = format!("{}.com", "a".repeat(64));
        assert!(normalize_zone(&ok).is_ok());
        assert!(normalize_zone(&too_long).is_err());
    }

    #[test]
    fn test_name_length_limit() {
        let label = "a".repeat(50);
        let name = vec![label.as_str(); 6].join(".");
        assert_eq!(normalize_zone(&name), Err(ZoneError::TooLong(305)));
    }
}
