//! # canon
//!
//! One canonical URL per resource. Everything else redirects.
//!
//! ## The contract
//!
//! Your framework parses requests, routes them, and writes responses. canon
//! does none of that. It answers exactly one question, once per request,
//! before any routing runs: *is this the canonical URL?* If not, it tells
//! you where to send the client and with which status code. The decision is
//! pure computation: no I/O, no await, no shared mutable state.
//!
//! What the hosting framework owns and canon intentionally ignores:
//!
//! - **Request parsing** — sockets, headers, bodies
//! - **Response transmission** — the status line and the `Location` header
//! - **Pipeline wiring** — when the rule runs relative to other middleware
//!
//! What's left for canon, the only part that changes between deployments:
//!
//! - Host funnelling — one primary host, with alternate-host and
//!   localhost exemptions
//! - Trailing-slash policy — add, remove, or leave alone
//! - Case folding — lowercase URLs, sparing the query string by default
//! - Extension filtering — never touch static assets you didn't whitelist
//!
//! ## Quick start
//!
//! ```rust
//! use canon::{CanonicalUrlOptions, Host, RedirectToCanonicalUrlRule, RequestUrl,
//!             TrailingSlash, Verdict};
//!
//! let rule = RedirectToCanonicalUrlRule::new(CanonicalUrlOptions {
//!     primary_host: Some(Host::new("example.com")),
//!     trailing_slash: TrailingSlash::Add,
//!     ..CanonicalUrlOptions::default()
//! });
//!
//! let request = RequestUrl::new("http", Host::new("www.example.com"), "", "/About", "");
//! match rule.apply(&request) {
//!     Verdict::Redirect { status, location } => {
//!         assert_eq!(status, http::StatusCode::MOVED_PERMANENTLY);
//!         assert_eq!(location, "http://example.com/about/");
//!     }
//!     Verdict::NoAction => unreachable!(),
//! }
//! ```
//!
//! Hosting on hyper? The [`adapter`] module turns an `http::Request` into a
//! [`RequestUrl`] and a redirect verdict into an `http::Response`; see
//! `demos/redirect.rs` for a complete server.

mod error;
mod host;
mod options;
mod request;
mod rule;

pub mod adapter;

pub use error::Error;
pub use host::Host;
pub use options::{CanonicalUrlOptions, TrailingSlash};
pub use request::RequestUrl;
pub use rule::{RedirectToCanonicalUrlRule, Verdict};
