//! Glue between the rule and `http`-typed servers.
//!
//! The rule itself knows nothing about any particular framework. This
//! module adapts `http::Request` values into [`RequestUrl`] descriptors and
//! redirect verdicts into ready-to-send `http::Response` values, which is
//! everything a hyper service needs to install the rule in front of its
//! handlers. Frameworks with their own request types can skip this module
//! and fill a [`RequestUrl`] directly.

use bytes::Bytes;
use http::header::{HOST, LOCATION};
use http::{Request, Response, StatusCode};
use http_body_util::Full;

use crate::error::Error;
use crate::host::Host;
use crate::request::RequestUrl;

/// Extracts a [`RequestUrl`] from an `http::Request`.
///
/// Servers see origin-form request targets, so the authority comes from the
/// `Host` header, falling back to the URI's own authority for absolute-form
/// requests. The scheme is supplied by the caller: a plain-TCP listener
/// knows it is serving `http` even though no request line says so.
///
/// Returns [`Error::MissingHost`] when the request carries no authority at
/// all, and [`Error::InvalidHost`] when the authority has an unparsable
/// port.
pub fn request_url<B>(scheme: &str, req: &Request<B>) -> Result<RequestUrl, Error> {
    let authority = req
        .headers()
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .or_else(|| req.uri().authority().map(|a| a.to_string()))
        .ok_or(Error::MissingHost)?;

    let query = match req.uri().query() {
        Some(q) => format!("?{q}"),
        None => String::new(),
    };

    Ok(RequestUrl::new(
        scheme,
        authority.parse::<Host>()?,
        "",
        req.uri().path(),
        query,
    ))
}

/// Builds the response for a [`Verdict::Redirect`](crate::Verdict::Redirect).
///
/// Status line, `Location` header, empty body. Fails only if `location`
/// contains bytes that cannot appear in a header value, which a candidate
/// URL assembled from a parsed request never does.
pub fn redirect_response(
    status: StatusCode,
    location: &str,
) -> Result<Response<Full<Bytes>>, http::Error> {
    Response::builder()
        .status(status)
        .header(LOCATION, location)
        .body(Full::new(Bytes::new()))
}
