//! Canonical-URL policy.

use http::StatusCode;

use crate::host::Host;

/// What to do about trailing slashes on the request path.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TrailingSlash {
    /// Leave the path as it is.
    #[default]
    Ignore,
    /// Strip every trailing slash.
    Remove,
    /// Append a single slash to a path that has none and contains no `.`
    /// anywhere. A dot is read as "this names a file"; that read is wrong
    /// for paths like `/docs.v2/guide`, which never gain a slash.
    Add,
}

/// Policy snapshot for [`RedirectToCanonicalUrlRule`](crate::RedirectToCanonicalUrlRule).
///
/// Build one at startup and hand it to the rule. The rule reads it on every
/// request and never writes it, so any number of concurrent requests share
/// the same snapshot without locks. Fields are accepted as given; a host
/// that makes no sense shows up when the rule builds a URL around it, not
/// at construction.
///
/// ```rust
/// use canon::{CanonicalUrlOptions, Host, TrailingSlash};
///
/// let options = CanonicalUrlOptions {
///     primary_host: Some(Host::new("example.com")),
///     trailing_slash: TrailingSlash::Add,
///     ..CanonicalUrlOptions::default()
/// };
/// # let _ = options;
/// ```
#[derive(Clone, Debug)]
pub struct CanonicalUrlOptions {
    /// Status code sent with the redirect. Honored verbatim; 302 means 302.
    pub status: StatusCode,
    /// Trailing-slash policy.
    pub trailing_slash: TrailingSlash,
    /// Fold the canonical URL to lowercase.
    pub force_lowercase: bool,
    /// Extend lowercasing into the query string. Off by default: query
    /// parameters may carry case-sensitive tokens.
    pub lowercase_query: bool,
    /// The host all traffic should be funnelled to. `None` disables host
    /// rewriting entirely.
    pub primary_host: Option<Host>,
    /// Hosts exempt from rewriting even when they differ from the primary.
    pub alternate_hosts: Vec<Host>,
    /// File extensions still eligible for rewriting, matched
    /// case-insensitively with their leading dot. A path ending in any
    /// other extension is never touched.
    pub extensions_to_include: Vec<String>,
}

impl Default for CanonicalUrlOptions {
    fn default() -> Self {
        Self {
            status: StatusCode::MOVED_PERMANENTLY,
            trailing_slash: TrailingSlash::Ignore,
            force_lowercase: true,
            lowercase_query: false,
            primary_host: None,
            alternate_hosts: Vec::new(),
            extensions_to_include: vec![
                ".html".to_owned(),
                ".htm".to_owned(),
                ".aspx".to_owned(),
                ".asp".to_owned(),
            ],
        }
    }
}
