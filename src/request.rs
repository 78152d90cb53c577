//! The per-request URL descriptor handed to the rule.

use crate::host::Host;

/// Everything the rule needs to know about one request's URL.
///
/// The hosting framework assembles one of these per request; the rule never
/// sees methods, headers, or bodies. All fields are public so frameworks
/// with their own URL reconstruction can fill them directly;
/// [`RequestUrl::new`] covers the common case.
#[derive(Clone, Debug)]
pub struct RequestUrl {
    /// Request scheme, e.g. `http` or `https`. Must not be empty.
    pub scheme: String,
    /// The host the client addressed.
    pub host: Host,
    /// Mount prefix when the application is hosted under a sub-path.
    /// Empty for the usual root deployment.
    pub path_base: String,
    /// Request path in wire-escaped form, as the framework parsed it.
    pub path: String,
    /// Raw query string including the leading `?`, or empty.
    pub query: String,
    /// The full original URL as the client would see it. The rule compares
    /// its canonical candidate against this string.
    pub display_url: String,
}

impl RequestUrl {
    /// Builds a descriptor, deriving `display_url` from the parts.
    ///
    /// # Panics
    ///
    /// Panics if `scheme` is empty. An absolute URL cannot be built without
    /// one; hand over a well-formed descriptor.
    pub fn new(
        scheme: impl Into<String>,
        host: Host,
        path_base: impl Into<String>,
        path: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        let scheme = scheme.into();
        let path_base = path_base.into();
        let path = path.into();
        let query = query.into();
        let display_url = assemble(&scheme, &host, &path_base, &path, &query);
        Self { scheme, host, path_base, path, query, display_url }
    }
}

/// Joins URL parts into an absolute URL string.
///
/// Parts are expected in wire-escaped form and pass through verbatim; the
/// query keeps its leading `?`.
pub(crate) fn assemble(
    scheme: &str,
    host: &Host,
    path_base: &str,
    path: &str,
    query: &str,
) -> String {
    assert!(!scheme.is_empty(), "request scheme must not be empty");
    format!("{scheme}://{host}{path_base}{path}{query}")
}
