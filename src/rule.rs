//! The canonical-URL decision engine.

use std::borrow::Cow;

use http::StatusCode;
use percent_encoding::percent_decode_str;
use tracing::info;

use crate::options::{CanonicalUrlOptions, TrailingSlash};
use crate::request::{RequestUrl, assemble};

/// The outcome of one rule evaluation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Verdict {
    /// The request already names the canonical URL. Continue dispatch.
    NoAction,
    /// Send the client to `location` and stop processing the request.
    Redirect {
        status: StatusCode,
        location: String,
    },
}

/// Redirects requests whose URL deviates from the canonical form.
///
/// One rule instance serves the whole process. Evaluation is a pure
/// function of the request descriptor and the options snapshot: no I/O, no
/// await, no shared mutable state, so it is safe to call from any number of
/// request-handling tasks concurrently.
///
/// The policy applies in a fixed order:
///
/// 1. Paths ending in an extension outside
///    [`extensions_to_include`](CanonicalUrlOptions::extensions_to_include)
///    are never touched.
/// 2. Trailing slashes are added or removed per
///    [`trailing_slash`](CanonicalUrlOptions::trailing_slash).
/// 3. The host is rewritten to
///    [`primary_host`](CanonicalUrlOptions::primary_host), unless it already
///    matches, is `localhost`, or is listed in
///    [`alternate_hosts`](CanonicalUrlOptions::alternate_hosts).
/// 4. The candidate URL is reassembled and case-folded per
///    [`force_lowercase`](CanonicalUrlOptions::force_lowercase) and
///    [`lowercase_query`](CanonicalUrlOptions::lowercase_query).
/// 5. Candidate and original are compared in percent-decoded form; only a
///    real difference produces a redirect.
pub struct RedirectToCanonicalUrlRule {
    options: CanonicalUrlOptions,
}

impl RedirectToCanonicalUrlRule {
    pub fn new(options: CanonicalUrlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CanonicalUrlOptions {
        &self.options
    }

    /// Computes the verdict for one request.
    ///
    /// Emits a single `tracing` event at info level when the verdict is a
    /// redirect; with no subscriber installed that is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `request.scheme` is empty. A descriptor without a scheme
    /// is a caller bug, not a condition to recover from.
    pub fn apply(&self, request: &RequestUrl) -> Verdict {
        let opts = &self.options;

        // Files outside the whitelist are never rewritten. This keeps the
        // rule off arbitrary static-asset requests.
        if let Some(ext) = extension(&request.path) {
            let included = opts
                .extensions_to_include
                .iter()
                .any(|e| e.eq_ignore_ascii_case(ext));
            if !included {
                return Verdict::NoAction;
            }
        }

        let mut path = Cow::Borrowed(request.path.as_str());
        if opts.trailing_slash != TrailingSlash::Ignore && !path.is_empty() {
            match opts.trailing_slash {
                TrailingSlash::Remove if path.ends_with('/') => {
                    path = Cow::Owned(path.trim_end_matches('/').to_owned());
                }
                // A path with a dot anywhere is assumed to name a file and
                // keeps its shape. See `TrailingSlash::Add`.
                TrailingSlash::Add if !path.contains('.') && !path.ends_with('/') => {
                    path = Cow::Owned(format!("{path}/"));
                }
                _ => {}
            }
        }

        // One-way rewrite: primary, localhost, and alternates stay as they
        // are, they never trigger a further hop.
        let host = match &opts.primary_host {
            Some(primary)
                if request.host != *primary
                    && !request.host.is_localhost()
                    && !opts.alternate_hosts.contains(&request.host) =>
            {
                primary
            }
            _ => &request.host,
        };

        let mut candidate =
            assemble(&request.scheme, host, &request.path_base, &path, &request.query);

        if opts.force_lowercase {
            if opts.lowercase_query {
                candidate = candidate.to_lowercase();
            } else {
                // Query parameters may be case-sensitive opaque tokens.
                // Fold everything before the query and splice the query
                // back untouched.
                let cut = candidate.len() - request.query.len();
                candidate = format!("{}{}", candidate[..cut].to_lowercase(), &candidate[cut..]);
            }
        }

        // Comparing decoded forms keeps escape variants of the same logical
        // URL from redirecting to each other forever.
        if decoded(&candidate) != decoded(&request.display_url) {
            info!(from = %request.display_url, to = %candidate, "redirecting to canonical url");
            Verdict::Redirect { status: opts.status, location: candidate }
        } else {
            Verdict::NoAction
        }
    }
}

/// File extension of the last path segment, leading dot included.
///
/// `/report.html` has extension `.html`; `/docs.v2/guide` has none, the dot
/// sits in an interior segment. A bare trailing dot does not count.
fn extension(path: &str) -> Option<&str> {
    let segment = path.rsplit('/').next().unwrap_or(path);
    let dot = segment.rfind('.')?;
    let ext = &segment[dot..];
    (ext.len() > 1).then_some(ext)
}

fn decoded(url: &str) -> Cow<'_, str> {
    percent_decode_str(url).decode_utf8_lossy()
}
