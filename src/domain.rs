//! Domain input normalization and validation
//!
//! Scan targets arrive as free text; the console strips any URL dressing
//! and checks DNS label syntax before a request is allowed to leave the
//! process.

use crate::error::{Result, SubscoutError};

const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Strip scheme and path from user input and lowercase what remains.
///
/// `https://Example.COM/login` becomes `example.com`.
pub fn normalize(input: &str) -> String {
    let trimmed = input.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    let host = without_scheme.split('/').next().unwrap_or("");
    host.to_ascii_lowercase()
}

/// Check DNS label syntax: dot-separated labels of 1-63 alphanumeric or
/// hyphen characters, with no label starting or ending in a hyphen.
pub fn is_valid(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > MAX_DOMAIN_LEN {
        return false;
    }

    domain.split('.').all(|label| {
        if label.is_empty() || label.len() > MAX_LABEL_LEN {
            return false;
        }
        if label.starts_with('-') || label.ends_with('-') {
            return false;
        }
        label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

/// Normalize and validate in one step, as the scan submission path uses it.
pub fn parse_target(input: &str) -> Result<String> {
    let domain = normalize(input);
    if domain.is_empty() {
        return Err(SubscoutError::InvalidDomain(
            "domain cannot be empty".to_string(),
        ));
    }
    if !is_valid(&domain) {
        return Err(SubscoutError::InvalidDomain(domain));
    }
    Ok(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_scheme_and_path() {
        assert_eq!(normalize("https://Example.COM/login"), "example.com");
        assert_eq!(normalize("http://sub.example.com"), "sub.example.com");
        assert_eq!(normalize("  example.com  "), "example.com");
    }

    #[test]
    fn labels_must_not_border_hyphens() {
        assert!(is_valid("a-b.example.com"));
        assert!(!is_valid("-ab.example.com"));
        assert!(!is_valid("ab-.example.com"));
    }

    #[test]
    fn label_length_is_bounded() {
        let long_label = "a".repeat(63);
        assert!(is_valid(&format!("{}.com", long_label)));
        let too_long = "a".repeat(64);
        assert!(!is_valid(&format!("{}.com", too_long)));
    }
}
