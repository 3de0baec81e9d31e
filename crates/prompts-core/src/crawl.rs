//! Crawl policy served to automated agents at `/robots.txt`.
//!
//! Patterns follow the common robots conventions: a pattern matches any path
//! it is a prefix of, `*` matches any run of characters and a trailing `$`
//! anchors the pattern to the end of the path. Disallow rules always beat
//! allow rules for a path matched by both.

use serde::Serialize;
use std::fmt::Write as _;

/// Absolute location of the site map advertised to crawlers.
pub const SITEMAP_URL: &str = "https://promptsforeveryone.com/sitemap.xml";

const ALLOWED: &[&str] = &["/"];
const DISALLOWED: &[&str] = &["/api/", "/dashboard/", "/admin/", "/private/"];

/// Outcome of testing a path against a [`CrawlPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CrawlVerdict {
    Allowed,
    Disallowed,
}

/// Immutable description of which paths crawlers may visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlPolicy {
    user_agent: String,
    allowed_path_patterns: Vec<String>,
    disallowed_path_patterns: Vec<String>,
    sitemap_location: String,
}

/// Returns the site's crawl policy. Always the same value.
pub fn get_crawl_policy() -> CrawlPolicy {
    CrawlPolicy::new(
        "*",
        ALLOWED.iter().copied(),
        DISALLOWED.iter().copied(),
        SITEMAP_URL,
    )
}

impl CrawlPolicy {
    pub fn new<A, D, S>(user_agent: &str, allowed: A, disallowed: D, sitemap_location: &str) -> Self
    where
        A: IntoIterator<Item = S>,
        D: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user_agent: user_agent.to_string(),
            allowed_path_patterns: allowed.into_iter().map(Into::into).collect(),
            disallowed_path_patterns: disallowed.into_iter().map(Into::into).collect(),
            sitemap_location: sitemap_location.to_string(),
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn allowed_path_patterns(&self) -> &[String] {
        &self.allowed_path_patterns
    }

    pub fn disallowed_path_patterns(&self) -> &[String] {
        &self.disallowed_path_patterns
    }

    pub fn sitemap_location(&self) -> &str {
        &self.sitemap_location
    }

    /// Tests `path` against the policy. Paths no rule mentions are allowed.
    pub fn evaluate(&self, path: &str) -> CrawlVerdict {
        let disallowed = self
            .disallowed_path_patterns
            .iter()
            .any(|pattern| pattern_matches(pattern, path));

        if disallowed {
            CrawlVerdict::Disallowed
        } else {
            CrawlVerdict::Allowed
        }
    }

    pub fn is_allowed(&self, path: &str) -> bool {
        self.evaluate(path) == CrawlVerdict::Allowed
    }

    /// Textual robots encoding. Byte-identical across calls.
    pub fn to_robots_txt(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "User-agent: {}", self.user_agent);
        for pattern in &self.allowed_path_patterns {
            let _ = writeln!(out, "Allow: {pattern}");
        }
        for pattern in &self.disallowed_path_patterns {
            let _ = writeln!(out, "Disallow: {pattern}");
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Sitemap: {}", self.sitemap_location);
        out
    }
}

/// Robots-style pattern match. An empty pattern matches nothing.
fn pattern_matches(pattern: &str, path: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }

    let (body, anchored) = match pattern.strip_suffix('$') {
        Some(body) => (body, true),
        None => (pattern, false),
    };

    let parts: Vec<&str> = body.split('*').collect();
    let Some(first) = parts.first() else {
        return false;
    };
    if !path.starts_with(first) {
        return false;
    }

    let mut pos = first.len();
    let last = parts.len() - 1;
    for (i, part) in parts.iter().enumerate().skip(1) {
        if i == last && anchored {
            return path.len() >= pos + part.len() && path.ends_with(part);
        }
        match path[pos..].find(part) {
            Some(offset) => pos += offset + part.len(),
            None => return false,
        }
    }

    !anchored || pos == path.len()
}
