//! Whitespace-token helpers for `class` attribute values.
//!
//! Matching is always token-exact: `"nav-active"` does not contain the
//! token `"active"`.

/// Whether `attr` contains `token` as a whole whitespace-separated token.
pub fn has_token(attr: &str, token: &str) -> bool {
    attr.split_ascii_whitespace().any(|t| t == token)
}

/// Append `token` to a class value, preserving what is already there.
pub fn append_token(attr: &str, token: &str) -> String {
    let attr = attr.trim_end();
    if attr.is_empty() {
        token.to_string()
    } else {
        format!("{attr} {token}")
    }
}

/// Remove every occurrence of `token`, keeping the remaining tokens.
///
/// Returns the empty string when nothing remains.
pub fn remove_token(attr: &str, token: &str) -> String {
    attr.split_ascii_whitespace()
        .filter(|t| *t != token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The first class token, if any.
pub fn first_token(attr: &str) -> Option<&str> {
    attr.split_ascii_whitespace().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_token_exact() {
        assert!(has_token("menu active", "active"));
        assert!(has_token("active", "active"));
        assert!(!has_token("nav-active", "active"));
        assert!(!has_token("", "active"));
    }

    #[test]
    fn test_append_token() {
        assert_eq!(append_token("", "table"), "table");
        assert_eq!(append_token("menu", "active"), "menu active");
        assert_eq!(append_token("menu ", "active"), "menu active");
    }

    #[test]
    fn test_remove_token() {
        assert_eq!(remove_token("menu active", "active"), "menu");
        assert_eq!(remove_token("active", "active"), "");
        assert_eq!(remove_token("a active b active", "active"), "a b");
        assert_eq!(remove_token("menu", "active"), "menu");
    }

    #[test]
    fn test_first_token() {
        assert_eq!(first_token("python linenos"), Some("python"));
        assert_eq!(first_token("  python"), Some("python"));
        assert_eq!(first_token(""), None);
        assert_eq!(first_token("   "), None);
    }
}
