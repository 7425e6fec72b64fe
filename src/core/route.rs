//! Page route paths for active-link matching.
//!
//! A route is the slash-stripped form of a page URL path. Navigation hrefs
//! and the current page location are both reduced to this form before
//! comparison, so `/docs/intro/`, `/docs/intro` and `docs/intro` all refer
//! to the same page.

use std::fmt;
use std::path::Path;

/// Strip all leading and trailing `/` from a raw path.
///
/// Idempotent and allocation-free. Internal repeated separators are left
/// untouched, as are query strings and fragments: matching is exact string
/// equality over whatever remains.
#[inline]
pub fn normalize(raw: &str) -> &str {
    raw.trim_matches('/')
}

/// Normalized URL path of a page (no leading or trailing slashes).
///
/// The site root is the empty route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePath(String);

impl RoutePath {
    /// Create from a raw URL path, normalizing slashes.
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw).to_string())
    }

    /// Derive the route of an output file relative to the site root.
    ///
    /// Mirrors the extensionless routes a static file server exposes:
    /// `docs/intro/index.html` serves `/docs/intro/`, `about.html` serves
    /// `/about`. Files outside the root keep their full path.
    pub fn for_output_file(site_root: &Path, file: &Path) -> Self {
        let rel = file.strip_prefix(site_root).unwrap_or(file);

        let mut parts: Vec<String> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();

        let is_index = parts
            .last()
            .is_some_and(|l| l.eq_ignore_ascii_case("index.html") || l.eq_ignore_ascii_case("index.htm"));

        if is_index {
            parts.pop();
        } else if let Some(last) = parts.last_mut() {
            if let Some(stem) = Path::new(last.as_str())
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
            {
                *last = stem;
            }
        }

        Self::new(&parts.join("/"))
    }

    /// The normalized path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the site root (empty route).
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Exact-equality match against an anchor's href attribute.
    ///
    /// An absent href normalizes to the empty string and therefore matches
    /// only the site root.
    pub fn matches_href(&self, href: Option<&str>) -> bool {
        normalize(href.unwrap_or_default()) == self.0
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RoutePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
