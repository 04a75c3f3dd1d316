//! Site paths and slugs
//!
//! Reviews live at `/tools/{slug}`; comparisons at
//! `/tools/compare/{a}-vs-{b}-vs-{c}`.

use once_cell::sync::Lazy;
use regex::Regex;

pub const TOOLS_PREFIX: &str = "/tools";
pub const COMPARE_PREFIX: &str = "/tools/compare";
pub const SLUG_SEPARATOR: &str = "-vs-";

/// Review slugs that would collide with listing routes
pub const RESERVED_SLUGS: &[&str] = &["compare"];

static SLUG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is valid"));

/// Lowercase letters and digits separated by single hyphens
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_PATTERN.is_match(slug)
}

/// Turn a display name into a slug: "Later.com Pro" -> "later-com-pro"
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

pub fn tool_path(slug: &str) -> String {
    format!("{}/{}", TOOLS_PREFIX, slug)
}

pub fn comparison_path(slug: &str) -> String {
    format!("{}/{}", COMPARE_PREFIX, slug)
}

/// Join contender keys into a comparison slug
pub fn comparison_slug<S: AsRef<str>>(keys: &[S]) -> String {
    keys.iter()
        .map(|k| k.as_ref())
        .collect::<Vec<_>>()
        .join(SLUG_SEPARATOR)
}

/// Split a comparison slug back into contender keys
pub fn parse_comparison_slug(slug: &str) -> Vec<String> {
    slug.split(SLUG_SEPARATOR)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// A resolved site path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Tools,
    Comparisons,
    Tool(String),
    Comparison(String),
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        if path.is_empty() {
            return Route::Home;
        }
        if path == TOOLS_PREFIX {
            return Route::Tools;
        }
        if path == COMPARE_PREFIX {
            return Route::Comparisons;
        }

        if let Some(slug) = path.strip_prefix(COMPARE_PREFIX).and_then(|p| p.strip_prefix('/')) {
            if is_valid_slug(slug) {
                return Route::Comparison(slug.to_string());
            }
            return Route::NotFound;
        }

        if let Some(slug) = path.strip_prefix(TOOLS_PREFIX).and_then(|p| p.strip_prefix('/')) {
            if is_valid_slug(slug) {
                return Route::Tool(slug.to_string());
            }
        }

        Route::NotFound
    }

    pub fn path(&self) -> Option<String> {
        match self {
            Route::Home => Some("/".to_string()),
            Route::Tools => Some(TOOLS_PREFIX.to_string()),
            Route::Comparisons => Some(COMPARE_PREFIX.to_string()),
            Route::Tool(slug) => Some(tool_path(slug)),
            Route::Comparison(slug) => Some(comparison_path(slug)),
            Route::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Later.com Pro"), "later-com-pro");
        assert_eq!(slugify("  NordVPN  "), "nordvpn");
        assert_eq!(slugify("A -- B"), "a-b");
        assert_eq!(slugify("ChatGPT (Plus)"), "chatgpt-plus");
    }

    #[test]
    fn test_valid_slug() {
        assert!(is_valid_slug("hostinger"));
        assert!(is_valid_slug("nordvpn-vs-expressvpn"));
        assert!(!is_valid_slug("NordVPN"));
        assert!(!is_valid_slug("a--b"));
        assert!(!is_valid_slug("-a"));
        assert!(!is_valid_slug(""));
    }

    #[test]
    fn test_comparison_slug_round_trip() {
        let slug = comparison_slug(&["buffer", "hootsuite", "later"]);
        assert_eq!(slug, "buffer-vs-hootsuite-vs-later");
        assert_eq!(parse_comparison_slug(&slug), vec!["buffer", "hootsuite", "later"]);
    }

    #[test]
    fn test_paths() {
        assert_eq!(tool_path("surfshark"), "/tools/surfshark");
        assert_eq!(comparison_path("a-vs-b"), "/tools/compare/a-vs-b");
    }

    #[test]
    fn test_route_parse() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/tools/nordvpn"), Route::Tool("nordvpn".to_string()));
        assert_eq!(
            Route::parse("/tools/compare/a-vs-b/"),
            Route::Comparison("a-vs-b".to_string())
        );
        assert_eq!(Route::parse("/tools/compare"), Route::Comparisons);
        assert_eq!(Route::parse("/tools/"), Route::Tools);
        assert_eq!(Route::parse("/pricing"), Route::NotFound);
        assert_eq!(Route::parse("/tools/Bad_Slug"), Route::NotFound);
        assert_eq!(Route::Tool("x".to_string()).path().as_deref(), Some("/tools/x"));
    }
}
